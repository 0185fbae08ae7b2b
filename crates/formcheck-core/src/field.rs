//! Field validation outcomes as reported by the validation engine.
//!
//! # Design
//! - `Field` is a snapshot; the engine owns the live copy and hands out clones.
//! - Observers only consume the [`FieldOutcome`] predicates, so engines with
//!   their own field types can plug in without converting.

use serde::{Deserialize, Serialize};

/// Category of a single feedback message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    /// Constraint violation that blocks submission.
    Error,
    /// Non-blocking concern.
    Warning,
    /// Informational hint.
    Info,
    /// Message displayed when the field is valid.
    Valid,
}

impl FeedbackKind {
    /// All feedback kinds in display priority order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Error, Self::Warning, Self::Info, Self::Valid]
    }

    /// Machine-friendly label used in logs and config keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Valid => "valid",
        }
    }
}

/// One feedback entry recorded during the last validation pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFeedbackValidation {
    /// Engine-assigned key of the feedback element.
    pub key: String,
    /// Kind of feedback.
    pub kind: FeedbackKind,
    /// Whether the engine displays this feedback.
    pub show: bool,
}

/// Predicates the observer needs from a validated field.
pub trait FieldOutcome {
    /// Form-control name the outcome belongs to.
    fn name(&self) -> &str;
    /// `true` when at least one error is displayed.
    fn has_errors(&self) -> bool;
    /// `true` when at least one warning is displayed.
    fn has_warnings(&self) -> bool;
    /// `true` when the field passed validation.
    fn is_valid(&self) -> bool;
}

/// Snapshot of one field's validation outcome.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Form-control name.
    pub name: String,
    /// Feedback recorded by the last validation pass.
    #[serde(default)]
    pub validations: Vec<FieldFeedbackValidation>,
}

impl Field {
    /// Create a field with no recorded feedback.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            validations: Vec::new(),
        }
    }

    /// Append a feedback entry, returning the updated field.
    #[must_use]
    pub fn with_feedback(mut self, key: impl Into<String>, kind: FeedbackKind, show: bool) -> Self {
        self.add_feedback(key, kind, show);
        self
    }

    /// Record a feedback entry in place.
    pub fn add_feedback(&mut self, key: impl Into<String>, kind: FeedbackKind, show: bool) {
        self.validations.push(FieldFeedbackValidation {
            key: key.into(),
            kind,
            show,
        });
    }

    fn shows(&self, kind: FeedbackKind) -> bool {
        self.validations
            .iter()
            .any(|validation| validation.kind == kind && validation.show)
    }
}

impl FieldOutcome for Field {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_errors(&self) -> bool {
        self.shows(FeedbackKind::Error)
    }

    fn has_warnings(&self) -> bool {
        self.shows(FeedbackKind::Warning)
    }

    fn is_valid(&self) -> bool {
        !self.has_errors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_feedback_does_not_count() {
        let field = Field::new("email").with_feedback("0.0", FeedbackKind::Error, false);
        assert!(!field.has_errors());
        assert!(field.is_valid());
    }

    #[test]
    fn predicates_follow_shown_feedback() {
        let field = Field::new("email")
            .with_feedback("0.0", FeedbackKind::Warning, true)
            .with_feedback("0.1", FeedbackKind::Info, true);
        assert!(!field.has_errors());
        assert!(field.has_warnings());
        assert!(field.is_valid());
    }

    #[test]
    fn feedback_kind_labels_are_stable() {
        let labels: Vec<_> = FeedbackKind::all().iter().map(|kind| kind.as_str()).collect();
        assert_eq!(labels, ["error", "warning", "info", "valid"]);
    }
}
