//! Feedback class-name presets for Bootstrap 4 inline and tooltip display.

use std::borrow::Cow;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::field::FeedbackKind;

/// Mapping from feedback kind to the class of the element rendering it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldFeedbackClassNames {
    /// Class for error feedback.
    pub error: Cow<'static, str>,
    /// Class for warning feedback.
    pub warning: Cow<'static, str>,
    /// Class for info feedback.
    pub info: Cow<'static, str>,
    /// Class for "valid" feedback.
    pub valid: Cow<'static, str>,
}

impl FieldFeedbackClassNames {
    /// Feedback rendered below the input.
    pub const INLINE: Self = Self {
        error: Cow::Borrowed("invalid-feedback"),
        warning: Cow::Borrowed("warning-feedback"),
        info: Cow::Borrowed("info-feedback"),
        valid: Cow::Borrowed("valid-feedback"),
    };

    /// Feedback rendered as a tooltip next to the input.
    pub const TOOLTIP: Self = Self {
        error: Cow::Borrowed("invalid-tooltip"),
        warning: Cow::Borrowed("warning-tooltip"),
        info: Cow::Borrowed("info-tooltip"),
        valid: Cow::Borrowed("valid-tooltip"),
    };

    /// Build a custom mapping.
    #[must_use]
    pub fn new(
        error: impl Into<Cow<'static, str>>,
        warning: impl Into<Cow<'static, str>>,
        info: impl Into<Cow<'static, str>>,
        valid: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            error: error.into(),
            warning: warning.into(),
            info: info.into(),
            valid: valid.into(),
        }
    }

    /// Class for feedback of `kind`.
    #[must_use]
    pub fn class_for(&self, kind: FeedbackKind) -> &str {
        match kind {
            FeedbackKind::Error => &self.error,
            FeedbackKind::Warning => &self.warning,
            FeedbackKind::Info => &self.info,
            FeedbackKind::Valid => &self.valid,
        }
    }
}

impl Default for FieldFeedbackClassNames {
    fn default() -> Self {
        Self::INLINE
    }
}

/// Named preset selectable from configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// [`FieldFeedbackClassNames::INLINE`].
    #[default]
    Inline,
    /// [`FieldFeedbackClassNames::TOOLTIP`].
    Tooltip,
}

impl Preset {
    /// Class names carried by the preset.
    #[must_use]
    pub const fn class_names(self) -> FieldFeedbackClassNames {
        match self {
            Self::Inline => FieldFeedbackClassNames::INLINE,
            Self::Tooltip => FieldFeedbackClassNames::TOOLTIP,
        }
    }

    /// Stable name used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::Tooltip => "tooltip",
        }
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "inline" => Ok(Self::Inline),
            "tooltip" => Ok(Self::Tooltip),
            _ => Err(ConfigError::UnknownPreset {
                value: value.to_string(),
            }),
        }
    }
}
