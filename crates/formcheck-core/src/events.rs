//! Field lifecycle events emitted by the validation engine.

use crate::field::Field;

/// Typed lifecycle events surfaced to field observers.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValidationEvent {
    /// The engine is about to validate a field.
    FieldWillValidate {
        /// Name of the field being validated.
        field_name: String,
    },
    /// The engine finished validating a field.
    FieldDidValidate {
        /// Outcome of the validation pass.
        field: Field,
    },
    /// The form was reset.
    Reset,
}

impl ValidationEvent {
    /// Machine-friendly discriminator for log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::FieldWillValidate { .. } => "field_will_validate",
            Self::FieldDidValidate { .. } => "field_did_validate",
            Self::Reset => "reset",
        }
    }

    /// Field the event targets; `None` for form-wide events.
    #[must_use]
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Self::FieldWillValidate { field_name } => Some(field_name),
            Self::FieldDidValidate { field } => Some(&field.name),
            Self::Reset => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FeedbackKind;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(
            ValidationEvent::FieldWillValidate {
                field_name: "email".into()
            }
            .kind(),
            "field_will_validate"
        );
        assert_eq!(ValidationEvent::Reset.kind(), "reset");
    }

    #[test]
    fn serialises_with_type_tag() -> Result<(), serde_json::Error> {
        let event = ValidationEvent::FieldDidValidate {
            field: Field::new("email").with_feedback("0.0", FeedbackKind::Error, true),
        };
        let json = serde_json::to_value(&event)?;
        assert_eq!(json["type"], "field_did_validate");
        assert_eq!(json["field"]["name"], "email");
        assert_eq!(json["field"]["validations"][0]["kind"], "error");

        let decoded: ValidationEvent = serde_json::from_value(json)?;
        assert_eq!(decoded, event);
        assert_eq!(decoded.field_name(), Some("email"));
        Ok(())
    }
}
