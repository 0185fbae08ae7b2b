//! Listener that records every lifecycle event dispatched by a context.

use std::cell::RefCell;
use std::rc::Rc;

use formcheck_core::{Subscription, ValidationContext, ValidationEvent};

/// Captures dispatched events for assertions.
#[derive(Debug)]
pub struct RecordingListener {
    events: Rc<RefCell<Vec<ValidationEvent>>>,
    _subscriptions: Vec<Subscription>,
}

impl RecordingListener {
    /// Subscribe to all three lifecycle events of `context`.
    #[must_use]
    pub fn attach(context: &ValidationContext) -> Self {
        let events = Rc::new(RefCell::new(Vec::new()));
        let will_validate = {
            let events = Rc::clone(&events);
            context.subscribe_field_will_validate(move |name| {
                events.borrow_mut().push(ValidationEvent::FieldWillValidate {
                    field_name: name.to_string(),
                });
            })
        };
        let did_validate = {
            let events = Rc::clone(&events);
            context.subscribe_field_did_validate(move |field| {
                events.borrow_mut().push(ValidationEvent::FieldDidValidate {
                    field: field.clone(),
                });
            })
        };
        let reset = {
            let events = Rc::clone(&events);
            context.subscribe_reset(move || events.borrow_mut().push(ValidationEvent::Reset))
        };
        Self {
            events,
            _subscriptions: vec![will_validate, did_validate, reset],
        }
    }

    /// Events recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<ValidationEvent> {
        self.events.borrow().clone()
    }

    /// Event kinds recorded so far.
    #[must_use]
    pub fn kinds(&self) -> Vec<&'static str> {
        self.events.borrow().iter().map(ValidationEvent::kind).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formcheck_core::Field;

    #[test]
    fn records_in_dispatch_order() {
        let context = ValidationContext::new();
        let recorder = RecordingListener::attach(&context);
        context.emit_field_will_validate("email");
        context.emit_field_did_validate(&Field::new("email"));
        context.emit_reset();
        assert_eq!(
            recorder.kinds(),
            ["field_will_validate", "field_did_validate", "reset"]
        );
        drop(recorder);
        assert_eq!(context.listener_counts().total(), 0);
    }
}
