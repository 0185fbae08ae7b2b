//! Validation display state and its input class names.

use crate::field::FieldOutcome;

/// Input class applied when the field has errors.
pub const INVALID_CLASS: &str = "is-invalid";
/// Input class applied when the field has warnings but no errors.
pub const WARNING_CLASS: &str = "is-warning";
/// Input class applied when the field is valid.
pub const VALID_CLASS: &str = "is-valid";

/// What an input currently shows about its field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ValidationDisplayState {
    /// Nothing known yet, or a validation pass is in flight.
    #[default]
    Absent,
    /// At least one error is displayed.
    Errors,
    /// Warnings are displayed and no errors.
    Warnings,
    /// The field passed validation.
    Valid,
}

impl ValidationDisplayState {
    /// Resolve the state from raw predicates.
    ///
    /// Errors dominate warnings, which dominate validity. A present outcome
    /// with every predicate false resolves to [`Self::Absent`].
    #[must_use]
    pub const fn from_predicates(
        present: bool,
        has_errors: bool,
        has_warnings: bool,
        is_valid: bool,
    ) -> Self {
        if !present {
            Self::Absent
        } else if has_errors {
            Self::Errors
        } else if has_warnings {
            Self::Warnings
        } else if is_valid {
            Self::Valid
        } else {
            Self::Absent
        }
    }

    /// Resolve the state for an optional field outcome.
    #[must_use]
    pub fn of<F: FieldOutcome + ?Sized>(field: Option<&F>) -> Self {
        field.map_or(Self::Absent, |field| {
            Self::from_predicates(
                true,
                field.has_errors(),
                field.has_warnings(),
                field.is_valid(),
            )
        })
    }

    /// Input class contributed by this state, if any.
    #[must_use]
    pub const fn class_name(self) -> Option<&'static str> {
        match self {
            Self::Absent => None,
            Self::Errors => Some(INVALID_CLASS),
            Self::Warnings => Some(WARNING_CLASS),
            Self::Valid => Some(VALID_CLASS),
        }
    }

    /// Label for log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Errors => "errors",
            Self::Warnings => "warnings",
            Self::Valid => "valid",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FeedbackKind, Field};

    #[test]
    fn absent_ignores_predicates() {
        for bits in 0_u8..8 {
            let state = ValidationDisplayState::from_predicates(
                false,
                bits & 1 != 0,
                bits & 2 != 0,
                bits & 4 != 0,
            );
            assert_eq!(state, ValidationDisplayState::Absent);
        }
    }

    #[test]
    fn priority_is_errors_then_warnings_then_valid() {
        for bits in 0_u8..8 {
            let (errors, warnings, valid) = (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0);
            let expected = if errors {
                Some("is-invalid")
            } else if warnings {
                Some("is-warning")
            } else if valid {
                Some("is-valid")
            } else {
                None
            };
            let state = ValidationDisplayState::from_predicates(true, errors, warnings, valid);
            assert_eq!(state.class_name(), expected, "bits {bits:03b}");
        }
    }

    #[test]
    fn errors_hide_warnings_on_real_fields() {
        let field = Field::new("email")
            .with_feedback("0.0", FeedbackKind::Warning, true)
            .with_feedback("0.1", FeedbackKind::Error, true);
        assert_eq!(
            ValidationDisplayState::of(Some(&field)),
            ValidationDisplayState::Errors
        );
        assert_eq!(
            ValidationDisplayState::of::<Field>(None),
            ValidationDisplayState::Absent
        );
    }
}
