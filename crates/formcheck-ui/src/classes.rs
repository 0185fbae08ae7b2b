//! DOM-free class composition for inputs and feedback elements.

use formcheck_core::{FeedbackKind, FieldFeedbackClassNames, ValidationDisplayState};
use yew::Classes;

/// Join the caller's class with the derived validation class.
///
/// The derived class is appended last, separated by a single space. Either part
/// is used alone when the other is missing; `None` when both are.
#[must_use]
pub fn compose_class_attr(caller: Option<&str>, derived: Option<&str>) -> Option<String> {
    let caller = caller.filter(|class| !class.is_empty());
    let derived = derived.filter(|class| !class.is_empty());
    match (caller, derived) {
        (Some(caller), Some(derived)) => Some(format!("{caller} {derived}")),
        (Some(caller), None) => Some(caller.to_string()),
        (None, Some(derived)) => Some(derived.to_string()),
        (None, None) => None,
    }
}

/// Class attribute for an input showing `state`.
#[must_use]
pub fn input_class(caller: &Classes, state: ValidationDisplayState) -> Option<String> {
    let caller = caller.to_string();
    compose_class_attr(Some(caller.as_str()), state.class_name())
}

/// Class attribute for a feedback element of `kind`.
#[must_use]
pub fn feedback_class(
    names: &FieldFeedbackClassNames,
    kind: FeedbackKind,
    extra: &Classes,
) -> String {
    let extra = extra.to_string();
    compose_class_attr(Some(names.class_for(kind)), Some(extra.as_str()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::classes;

    #[test]
    fn derived_class_is_appended_last() {
        assert_eq!(
            compose_class_attr(Some("form-control"), Some("is-valid")).as_deref(),
            Some("form-control is-valid")
        );
    }

    #[test]
    fn missing_parts_collapse() {
        assert_eq!(
            compose_class_attr(None, Some("is-invalid")).as_deref(),
            Some("is-invalid")
        );
        assert_eq!(
            compose_class_attr(Some("form-control"), None).as_deref(),
            Some("form-control")
        );
        assert_eq!(compose_class_attr(Some(""), None), None);
        assert_eq!(compose_class_attr(None, None), None);
    }

    #[test]
    fn input_class_follows_display_state() {
        let caller = classes!("form-control", "form-control-lg");
        assert_eq!(
            input_class(&caller, ValidationDisplayState::Warnings).as_deref(),
            Some("form-control form-control-lg is-warning")
        );
        assert_eq!(
            input_class(&Classes::new(), ValidationDisplayState::Absent),
            None
        );
    }

    #[test]
    fn feedback_class_uses_the_active_mapping() {
        assert_eq!(
            feedback_class(
                &FieldFeedbackClassNames::TOOLTIP,
                FeedbackKind::Error,
                &Classes::new()
            ),
            "invalid-tooltip"
        );
        assert_eq!(
            feedback_class(
                &FieldFeedbackClassNames::INLINE,
                FeedbackKind::Warning,
                &classes!("d-block")
            ),
            "warning-feedback d-block"
        );
    }
}
