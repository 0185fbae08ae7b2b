//! Feedback styling configuration.
//!
//! # Design
//! - A document selects a preset by name and may supply a full mapping.
//! - A supplied mapping replaces the preset wholesale; fields are never merged.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::presets::{FieldFeedbackClassNames, Preset};

/// Styling configuration for feedback containers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeedbackConfig {
    /// Preset used when no explicit mapping is provided.
    pub preset: Preset,
    /// Explicit mapping that replaces the preset.
    pub class_names: Option<FieldFeedbackClassNames>,
}

impl FeedbackConfig {
    /// Configuration using `preset` with no override.
    #[must_use]
    pub const fn with_preset(preset: Preset) -> Self {
        Self {
            preset,
            class_names: None,
        }
    }

    /// Parse a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidJson`] when the document is malformed,
    /// names an unknown preset, or carries an incomplete mapping.
    pub fn from_json(document: &str) -> ConfigResult<Self> {
        let config: Self =
            serde_json::from_str(document).map_err(|source| ConfigError::InvalidJson { source })?;
        debug!(
            preset = config.preset.as_str(),
            overridden = config.class_names.is_some(),
            "feedback configuration loaded"
        );
        Ok(config)
    }

    /// Mapping the feedback container should apply.
    #[must_use]
    pub fn effective_class_names(&self) -> FieldFeedbackClassNames {
        self.class_names
            .clone()
            .unwrap_or_else(|| self.preset.class_names())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FeedbackKind;

    #[test]
    fn empty_document_uses_inline_preset() -> ConfigResult<()> {
        let config = FeedbackConfig::from_json("{}")?;
        assert_eq!(config, FeedbackConfig::default());
        assert_eq!(
            config.effective_class_names(),
            FieldFeedbackClassNames::INLINE
        );
        Ok(())
    }

    #[test]
    fn preset_is_selected_by_name() -> ConfigResult<()> {
        let config = FeedbackConfig::from_json(r#"{ "preset": "tooltip" }"#)?;
        assert_eq!(
            config
                .effective_class_names()
                .class_for(FeedbackKind::Error),
            "invalid-tooltip"
        );
        Ok(())
    }

    #[test]
    fn override_replaces_preset() -> ConfigResult<()> {
        let config = FeedbackConfig::from_json(
            r#"{
                "preset": "tooltip",
                "class_names": { "error": "text-danger", "warning": "text-warning", "info": "text-info", "valid": "text-success" }
            }"#,
        )?;
        let names = config.effective_class_names();
        assert_eq!(names.class_for(FeedbackKind::Error), "text-danger");
        assert_eq!(names.class_for(FeedbackKind::Valid), "text-success");
        assert_ne!(names, FieldFeedbackClassNames::TOOLTIP);
        Ok(())
    }

    #[test]
    fn partial_override_is_rejected() {
        let result = FeedbackConfig::from_json(r#"{ "class_names": { "error": "x" } }"#);
        assert!(matches!(result, Err(ConfigError::InvalidJson { .. })));
    }

    #[test]
    fn unknown_preset_is_rejected() {
        let result = FeedbackConfig::from_json(r#"{ "preset": "popover" }"#);
        assert!(matches!(result, Err(ConfigError::InvalidJson { .. })));
        assert_eq!(
            FeedbackConfig::with_preset(Preset::Tooltip).effective_class_names(),
            FieldFeedbackClassNames::TOOLTIP
        );
    }
}
