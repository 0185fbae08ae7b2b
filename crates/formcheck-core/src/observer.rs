//! Per-field observer deriving the input's validation class.
//!
//! # Design
//! - [`FieldObserver`] is a plain state struct with explicit transitions for the
//!   three lifecycle events; it knows nothing about listeners or rendering.
//! - [`MountedObserver`] wires an observer to a [`ValidationContext`] and owns
//!   the three registrations. Dropping it releases them on every exit path.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::context::{ListenerCounts, ListenerKind, Subscription, ValidationContext};
use crate::display::ValidationDisplayState;
use crate::events::ValidationEvent;
use crate::field::FieldOutcome;

/// Predicates captured from the last `field-did-validate` for the observed field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutcomeSnapshot {
    /// Errors were displayed.
    pub has_errors: bool,
    /// Warnings were displayed.
    pub has_warnings: bool,
    /// The field passed validation.
    pub is_valid: bool,
}

impl OutcomeSnapshot {
    /// Capture the predicates of an outcome.
    #[must_use]
    pub fn capture<F: FieldOutcome + ?Sized>(field: &F) -> Self {
        Self {
            has_errors: field.has_errors(),
            has_warnings: field.has_warnings(),
            is_valid: field.is_valid(),
        }
    }
}

/// Validation state of exactly one named field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldObserver {
    field_name: String,
    outcome: Option<OutcomeSnapshot>,
}

impl FieldObserver {
    /// Observer for `field_name`, starting absent.
    #[must_use]
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            outcome: None,
        }
    }

    /// Name of the observed field.
    #[must_use]
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Last captured outcome, if any.
    #[must_use]
    pub const fn outcome(&self) -> Option<OutcomeSnapshot> {
        self.outcome
    }

    /// A validation pass started; clears the state when it targets this field.
    pub fn field_will_validate(&mut self, field_name: &str) -> bool {
        if field_name != self.field_name {
            return false;
        }
        self.replace(None)
    }

    /// A validation pass finished; records the outcome when it targets this field.
    pub fn field_did_validate<F: FieldOutcome + ?Sized>(&mut self, field: &F) -> bool {
        if field.name() != self.field_name {
            return false;
        }
        self.replace(Some(OutcomeSnapshot::capture(field)))
    }

    /// The form was reset; always clears the state.
    pub fn reset(&mut self) -> bool {
        self.replace(None)
    }

    /// Apply a typed event. Returns `true` when the observer's state changed.
    pub fn apply(&mut self, event: &ValidationEvent) -> bool {
        match event {
            ValidationEvent::FieldWillValidate { field_name } => {
                self.field_will_validate(field_name)
            }
            ValidationEvent::FieldDidValidate { field } => self.field_did_validate(field),
            ValidationEvent::Reset => self.reset(),
        }
    }

    /// Current display state.
    #[must_use]
    pub fn display_state(&self) -> ValidationDisplayState {
        self.outcome
            .map_or(ValidationDisplayState::Absent, |outcome| {
                ValidationDisplayState::from_predicates(
                    true,
                    outcome.has_errors,
                    outcome.has_warnings,
                    outcome.is_valid,
                )
            })
    }

    /// Class the input should carry, if any.
    #[must_use]
    pub fn validation_class_name(&self) -> Option<&'static str> {
        self.display_state().class_name()
    }

    fn replace(&mut self, outcome: Option<OutcomeSnapshot>) -> bool {
        if self.outcome == outcome {
            return false;
        }
        self.outcome = outcome;
        debug!(
            field_name = %self.field_name,
            state = self.display_state().as_str(),
            "field observer updated"
        );
        true
    }
}

type ChangeHook = Rc<dyn Fn(ValidationDisplayState)>;

/// A [`FieldObserver`] registered with a [`ValidationContext`].
///
/// Holds one subscription per lifecycle event. [`MountedObserver::unmount`]
/// and `Drop` both release them; releasing twice is a no-op.
#[derive(Debug)]
pub struct MountedObserver {
    state: Rc<RefCell<FieldObserver>>,
    subscriptions: Vec<Subscription>,
}

impl MountedObserver {
    /// Register an observer for `field_name` with `context`.
    #[must_use]
    pub fn mount(context: &ValidationContext, field_name: impl Into<String>) -> Self {
        Self::mount_with(context, field_name, |_| {})
    }

    /// Register an observer and call `on_change` after every state change.
    #[must_use]
    pub fn mount_with(
        context: &ValidationContext,
        field_name: impl Into<String>,
        on_change: impl Fn(ValidationDisplayState) + 'static,
    ) -> Self {
        let state = Rc::new(RefCell::new(FieldObserver::new(field_name)));
        let on_change: ChangeHook = Rc::new(on_change);

        let will_validate = {
            let state = Rc::clone(&state);
            let on_change = Rc::clone(&on_change);
            context.subscribe_field_will_validate(move |name| {
                update(&state, &on_change, |observer| observer.field_will_validate(name));
            })
        };
        let did_validate = {
            let state = Rc::clone(&state);
            let on_change = Rc::clone(&on_change);
            context.subscribe_field_did_validate(move |field| {
                update(&state, &on_change, |observer| observer.field_did_validate(field));
            })
        };
        let reset = {
            let state = Rc::clone(&state);
            context.subscribe_reset(move || {
                update(&state, &on_change, FieldObserver::reset);
            })
        };

        debug!(field_name = %state.borrow().field_name(), "field observer mounted");
        Self {
            state,
            subscriptions: vec![will_validate, did_validate, reset],
        }
    }

    /// Current display state.
    #[must_use]
    pub fn display_state(&self) -> ValidationDisplayState {
        self.state.borrow().display_state()
    }

    /// Class the input should carry, if any.
    #[must_use]
    pub fn validation_class_name(&self) -> Option<&'static str> {
        self.display_state().class_name()
    }

    /// Copy of the underlying observer state.
    #[must_use]
    pub fn snapshot(&self) -> FieldObserver {
        self.state.borrow().clone()
    }

    /// Whether the listeners are still registered.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    /// Release the three registrations, reporting how many were removed.
    pub fn unmount(&mut self) -> ListenerCounts {
        let mut removed = ListenerCounts::default();
        for mut subscription in self.subscriptions.drain(..) {
            let kind = subscription.kind();
            if subscription.unsubscribe() {
                match kind {
                    ListenerKind::FieldWillValidate => {
                        removed.field_will_validate += 1;
                    }
                    ListenerKind::FieldDidValidate => {
                        removed.field_did_validate += 1;
                    }
                    ListenerKind::Reset => removed.reset += 1,
                }
            }
        }
        if removed.total() > 0 {
            debug!(field_name = %self.state.borrow().field_name(), "field observer unmounted");
        }
        removed
    }
}

impl Drop for MountedObserver {
    fn drop(&mut self) {
        let _ = self.unmount();
    }
}

fn update(
    state: &RefCell<FieldObserver>,
    on_change: &ChangeHook,
    transition: impl FnOnce(&mut FieldObserver) -> bool,
) {
    let changed = {
        let mut observer = state.borrow_mut();
        transition(&mut *observer).then(|| observer.display_state())
    };
    if let Some(display) = changed {
        on_change(display);
    }
}
