//! Rendered class attribute driven by a live observer.

use formcheck_core::{FeedbackKind, MountedObserver, ValidationContext};
use formcheck_test_support::fixtures::{field_with_errors, init_test_logging, valid_field};
use formcheck_ui::{FieldFeedbackClassNames, Preset, feedback_class, input_class};
use yew::{Classes, classes};

#[test]
fn valid_field_appends_is_valid_to_caller_class() {
    init_test_logging();
    let context = ValidationContext::new();
    let observer = MountedObserver::mount(&context, "email");
    let caller = classes!("form-control");

    assert_eq!(
        input_class(&caller, observer.display_state()).as_deref(),
        Some("form-control")
    );

    context.emit_field_did_validate(&valid_field("email"));
    assert_eq!(
        input_class(&caller, observer.display_state()).as_deref(),
        Some("form-control is-valid")
    );

    context.emit_field_did_validate(&field_with_errors("email"));
    assert_eq!(
        input_class(&Classes::new(), observer.display_state()).as_deref(),
        Some("is-invalid")
    );
}

#[test]
fn explicit_mapping_replaces_the_preset() {
    let custom = FieldFeedbackClassNames::new("text-danger", "text-warning", "text-info", "text-success");
    for kind in FeedbackKind::all() {
        let preset = feedback_class(&Preset::Tooltip.class_names(), kind, &Classes::new());
        let overridden = feedback_class(&custom, kind, &Classes::new());
        assert_ne!(preset, overridden);
        assert!(!overridden.contains("tooltip"));
    }
}
