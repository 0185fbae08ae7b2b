//! Property tests over arbitrary lifecycle event sequences.

use formcheck_core::{
    FeedbackKind, FieldObserver, MountedObserver, ValidationContext, ValidationEvent,
};
use formcheck_test_support::fixtures::FieldBuilder;
use proptest::prelude::*;

const OBSERVED: &str = "email";

fn field_name() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(OBSERVED), Just("password"), Just("username")]
}

fn event() -> impl Strategy<Value = ValidationEvent> {
    prop_oneof![
        field_name().prop_map(|name| ValidationEvent::FieldWillValidate {
            field_name: name.to_string(),
        }),
        (field_name(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(name, errors, warnings, infos)| {
                let mut builder = FieldBuilder::new(name);
                if errors {
                    builder = builder.error();
                }
                if warnings {
                    builder = builder.warning();
                }
                if infos {
                    builder = builder.info();
                }
                ValidationEvent::FieldDidValidate {
                    field: builder.build(),
                }
            }
        ),
        Just(ValidationEvent::Reset),
    ]
}

/// Class expected after replaying `events`, computed without the observer.
fn expected_class(events: &[ValidationEvent]) -> Option<&'static str> {
    let mut last: Option<(bool, bool)> = None;
    for event in events {
        match event {
            ValidationEvent::FieldWillValidate { field_name } if field_name == OBSERVED => {
                last = None;
            }
            ValidationEvent::FieldDidValidate { field } if field.name == OBSERVED => {
                let shown = |kind: FeedbackKind| {
                    field
                        .validations
                        .iter()
                        .any(|validation| validation.kind == kind && validation.show)
                };
                last = Some((
                    shown(FeedbackKind::Error),
                    shown(FeedbackKind::Warning),
                ));
            }
            ValidationEvent::Reset => last = None,
            _ => {}
        }
    }
    match last {
        None => None,
        Some((true, _)) => Some("is-invalid"),
        Some((false, true)) => Some("is-warning"),
        Some((false, false)) => Some("is-valid"),
    }
}

proptest! {
    #[test]
    fn mounted_observer_tracks_any_event_sequence(
        events in prop::collection::vec(event(), 0..40)
    ) {
        let context = ValidationContext::new();
        let observer = MountedObserver::mount(&context, OBSERVED);
        for event in &events {
            context.emit(event);
        }
        prop_assert_eq!(observer.validation_class_name(), expected_class(&events));
    }

    #[test]
    fn applying_events_matches_dispatching_them(
        events in prop::collection::vec(event(), 0..40)
    ) {
        let context = ValidationContext::new();
        let mounted = MountedObserver::mount(&context, OBSERVED);
        let mut plain = FieldObserver::new(OBSERVED);
        for event in &events {
            context.emit(event);
            plain.apply(event);
            prop_assert_eq!(mounted.snapshot(), plain.clone());
        }
    }

    #[test]
    fn other_fields_never_change_state(
        events in prop::collection::vec(event(), 0..20)
    ) {
        let mut observer = FieldObserver::new(OBSERVED);
        observer.apply(&ValidationEvent::FieldDidValidate {
            field: FieldBuilder::new(OBSERVED).error().build(),
        });
        let before = observer.clone();
        for event in events.iter().filter(|event| {
            event.field_name().is_some_and(|name| name != OBSERVED)
        }) {
            prop_assert!(!observer.apply(event));
        }
        prop_assert_eq!(observer, before);
    }
}
