//! Listener registry through which the validation engine notifies observers.
//!
//! The context is a cheaply clonable, single-threaded handle. Observers receive
//! it explicitly (no ambient lookup) and register one listener per lifecycle
//! event. Dispatch snapshots the listener list before invoking it so a listener
//! may register or deregister while an event is in flight; a listener removed
//! mid-dispatch is not called for the rest of that dispatch.
//!
//! Removal is idempotent: removing an unknown or already-removed identifier
//! reports `false` and leaves the registry untouched.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, trace};

use crate::events::ValidationEvent;
use crate::field::Field;

/// Identifier returned when a listener is registered.
pub type ListenerId = u64;

type FieldNameListener = Rc<dyn Fn(&str)>;
type FieldListener = Rc<dyn Fn(&Field)>;
type ResetListener = Rc<dyn Fn()>;

/// Lifecycle event a listener is registered for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// `field-will-validate(field_name)`.
    FieldWillValidate,
    /// `field-did-validate(field)`.
    FieldDidValidate,
    /// `reset()`.
    Reset,
}

impl ListenerKind {
    /// Machine-friendly label for log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FieldWillValidate => "field_will_validate",
            Self::FieldDidValidate => "field_did_validate",
            Self::Reset => "reset",
        }
    }
}

/// Number of listeners currently registered per event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListenerCounts {
    /// Listeners for `field-will-validate`.
    pub field_will_validate: usize,
    /// Listeners for `field-did-validate`.
    pub field_did_validate: usize,
    /// Listeners for `reset`.
    pub reset: usize,
}

impl ListenerCounts {
    /// Sum across all three events.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.field_will_validate + self.field_did_validate + self.reset
    }
}

/// A registered listener. `live` is cleared on removal so an in-flight
/// dispatch holding a snapshot skips it.
struct Entry<T> {
    id: ListenerId,
    live: Rc<Cell<bool>>,
    listener: T,
}

impl<T: Clone> Entry<T> {
    fn new(id: ListenerId, listener: T) -> Self {
        Self {
            id,
            live: Rc::new(Cell::new(true)),
            listener,
        }
    }

    fn snapshot(&self) -> (Rc<Cell<bool>>, T) {
        (Rc::clone(&self.live), self.listener.clone())
    }
}

#[derive(Default)]
struct Registry {
    next_id: ListenerId,
    field_will_validate: Vec<Entry<FieldNameListener>>,
    field_did_validate: Vec<Entry<FieldListener>>,
    reset: Vec<Entry<ResetListener>>,
}

impl Registry {
    fn allocate_id(&mut self) -> ListenerId {
        self.next_id = self.next_id.saturating_add(1);
        self.next_id
    }

    fn remove(&mut self, kind: ListenerKind, id: ListenerId) -> bool {
        fn retain_without<T>(list: &mut Vec<Entry<T>>, id: ListenerId) -> bool {
            let Some(position) = list.iter().position(|entry| entry.id == id) else {
                return false;
            };
            list.remove(position).live.set(false);
            true
        }

        match kind {
            ListenerKind::FieldWillValidate => retain_without(&mut self.field_will_validate, id),
            ListenerKind::FieldDidValidate => retain_without(&mut self.field_did_validate, id),
            ListenerKind::Reset => retain_without(&mut self.reset, id),
        }
    }

    fn counts(&self) -> ListenerCounts {
        ListenerCounts {
            field_will_validate: self.field_will_validate.len(),
            field_did_validate: self.field_did_validate.len(),
            reset: self.reset.len(),
        }
    }
}

/// Shared handle to the validation engine's listener lists.
#[derive(Clone, Default)]
pub struct ValidationContext {
    registry: Rc<RefCell<Registry>>,
}

impl ValidationContext {
    /// Construct an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for `field-will-validate`.
    pub fn add_field_will_validate_listener(&self, listener: impl Fn(&str) + 'static) -> ListenerId {
        let mut registry = self.registry.borrow_mut();
        let id = registry.allocate_id();
        registry
            .field_will_validate
            .push(Entry::new(id, Rc::new(listener) as FieldNameListener));
        drop(registry);
        log_added(ListenerKind::FieldWillValidate, id);
        id
    }

    /// Register a listener for `field-did-validate`.
    pub fn add_field_did_validate_listener(
        &self,
        listener: impl Fn(&Field) + 'static,
    ) -> ListenerId {
        let mut registry = self.registry.borrow_mut();
        let id = registry.allocate_id();
        registry
            .field_did_validate
            .push(Entry::new(id, Rc::new(listener) as FieldListener));
        drop(registry);
        log_added(ListenerKind::FieldDidValidate, id);
        id
    }

    /// Register a listener for form resets.
    pub fn add_reset_listener(&self, listener: impl Fn() + 'static) -> ListenerId {
        let mut registry = self.registry.borrow_mut();
        let id = registry.allocate_id();
        registry
            .reset
            .push(Entry::new(id, Rc::new(listener) as ResetListener));
        drop(registry);
        log_added(ListenerKind::Reset, id);
        id
    }

    /// Deregister a `field-will-validate` listener. Returns `false` if `id` was not registered.
    pub fn remove_field_will_validate_listener(&self, id: ListenerId) -> bool {
        self.remove_listener(ListenerKind::FieldWillValidate, id)
    }

    /// Deregister a `field-did-validate` listener. Returns `false` if `id` was not registered.
    pub fn remove_field_did_validate_listener(&self, id: ListenerId) -> bool {
        self.remove_listener(ListenerKind::FieldDidValidate, id)
    }

    /// Deregister a reset listener. Returns `false` if `id` was not registered.
    pub fn remove_reset_listener(&self, id: ListenerId) -> bool {
        self.remove_listener(ListenerKind::Reset, id)
    }

    /// Deregister a listener of any kind.
    pub fn remove_listener(&self, kind: ListenerKind, id: ListenerId) -> bool {
        remove_from(&self.registry, kind, id)
    }

    /// Register a `field-will-validate` listener released when the guard drops.
    #[must_use = "dropping the subscription deregisters the listener immediately"]
    pub fn subscribe_field_will_validate(&self, listener: impl Fn(&str) + 'static) -> Subscription {
        let id = self.add_field_will_validate_listener(listener);
        self.guard(ListenerKind::FieldWillValidate, id)
    }

    /// Register a `field-did-validate` listener released when the guard drops.
    #[must_use = "dropping the subscription deregisters the listener immediately"]
    pub fn subscribe_field_did_validate(
        &self,
        listener: impl Fn(&Field) + 'static,
    ) -> Subscription {
        let id = self.add_field_did_validate_listener(listener);
        self.guard(ListenerKind::FieldDidValidate, id)
    }

    /// Register a reset listener released when the guard drops.
    #[must_use = "dropping the subscription deregisters the listener immediately"]
    pub fn subscribe_reset(&self, listener: impl Fn() + 'static) -> Subscription {
        let id = self.add_reset_listener(listener);
        self.guard(ListenerKind::Reset, id)
    }

    /// Notify listeners that `field_name` is about to be validated.
    pub fn emit_field_will_validate(&self, field_name: &str) {
        let listeners: Vec<_> = self
            .registry
            .borrow()
            .field_will_validate
            .iter()
            .map(Entry::snapshot)
            .collect();
        trace!(
            event_kind = ListenerKind::FieldWillValidate.as_str(),
            field_name,
            listeners = listeners.len(),
            "dispatching validation event"
        );
        for (live, listener) in listeners {
            if live.get() {
                listener(field_name);
            }
        }
    }

    /// Notify listeners that `field` finished validating.
    pub fn emit_field_did_validate(&self, field: &Field) {
        let listeners: Vec<_> = self
            .registry
            .borrow()
            .field_did_validate
            .iter()
            .map(Entry::snapshot)
            .collect();
        trace!(
            event_kind = ListenerKind::FieldDidValidate.as_str(),
            field_name = %field.name,
            listeners = listeners.len(),
            "dispatching validation event"
        );
        for (live, listener) in listeners {
            if live.get() {
                listener(field);
            }
        }
    }

    /// Notify listeners that the form was reset.
    pub fn emit_reset(&self) {
        let listeners: Vec<_> = self
            .registry
            .borrow()
            .reset
            .iter()
            .map(Entry::snapshot)
            .collect();
        trace!(
            event_kind = ListenerKind::Reset.as_str(),
            listeners = listeners.len(),
            "dispatching validation event"
        );
        for (live, listener) in listeners {
            if live.get() {
                listener();
            }
        }
    }

    /// Dispatch a typed event to the matching listeners.
    pub fn emit(&self, event: &ValidationEvent) {
        match event {
            ValidationEvent::FieldWillValidate { field_name } => {
                self.emit_field_will_validate(field_name);
            }
            ValidationEvent::FieldDidValidate { field } => self.emit_field_did_validate(field),
            ValidationEvent::Reset => self.emit_reset(),
        }
    }

    /// Snapshot of how many listeners are registered per event.
    #[must_use]
    pub fn listener_counts(&self) -> ListenerCounts {
        self.registry.borrow().counts()
    }

    fn guard(&self, kind: ListenerKind, id: ListenerId) -> Subscription {
        Subscription {
            registry: Rc::downgrade(&self.registry),
            kind,
            id,
            active: true,
        }
    }
}

impl PartialEq for ValidationContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.registry, &other.registry)
    }
}

impl fmt::Debug for ValidationContext {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ValidationContext")
            .field("listeners", &self.listener_counts())
            .finish()
    }
}

/// Scoped listener registration; deregisters when dropped.
///
/// Holds a weak handle so a subscription outliving its context is harmless.
#[derive(Debug)]
pub struct Subscription {
    registry: Weak<RefCell<Registry>>,
    kind: ListenerKind,
    id: ListenerId,
    active: bool,
}

impl Subscription {
    /// Identifier of the underlying listener.
    #[must_use]
    pub const fn id(&self) -> ListenerId {
        self.id
    }

    /// Event the listener is registered for.
    #[must_use]
    pub const fn kind(&self) -> ListenerKind {
        self.kind
    }

    /// Deregister now. Returns `true` only on the call that removed the listener.
    pub fn unsubscribe(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.active = false;
        self.registry
            .upgrade()
            .is_some_and(|registry| remove_from(&registry, self.kind, self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let _ = self.unsubscribe();
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Registry")
            .field("next_id", &self.next_id)
            .field("counts", &self.counts())
            .finish()
    }
}

fn remove_from(registry: &RefCell<Registry>, kind: ListenerKind, id: ListenerId) -> bool {
    let removed = registry.borrow_mut().remove(kind, id);
    if removed {
        debug!(listener_id = id, event_kind = kind.as_str(), "listener removed");
    } else {
        trace!(listener_id = id, event_kind = kind.as_str(), "listener already removed");
    }
    removed
}

fn log_added(kind: ListenerKind, id: ListenerId) {
    debug!(listener_id = id, event_kind = kind.as_str(), "listener added");
}
