//! Time-changed notifications.
//!
//! Listeners are stored in a slot map so they can be removed again with the
//! key returned from [`TimeListeners::subscribe`].
use std::sync::Arc;

use slotmap::{SlotMap, new_key_type};

use crate::time::TimeOfDay;

new_key_type! {
    /// Handle returned when subscribing to time changes.
    pub struct ListenerKey;
}

/// Comparable handle for a `Fn(TimeOfDay)` listener.
///
/// Two handles are equal when they share the same closure (`Arc::ptr_eq`).
#[derive(Clone)]
pub struct TimeListener {
    handler: Arc<dyn Fn(TimeOfDay) + Send + Sync>,
}

impl TimeListener {
    /// Create a listener from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(TimeOfDay) + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Invoke the listener with the new time.
    pub fn call(&self, time: TimeOfDay) {
        (self.handler)(time);
    }
}

impl PartialEq for TimeListener {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl Eq for TimeListener {}

impl std::fmt::Debug for TimeListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeListener").finish_non_exhaustive()
    }
}

/// Registry of time-changed listeners.
#[derive(Debug, Default)]
pub struct TimeListeners {
    listeners: SlotMap<ListenerKey, TimeListener>,
}

impl TimeListeners {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a closure as a listener.
    pub fn subscribe<F>(&mut self, handler: F) -> ListenerKey
    where
        F: Fn(TimeOfDay) + Send + Sync + 'static,
    {
        self.insert(TimeListener::new(handler))
    }

    /// Registers an existing listener handle.
    pub fn insert(&mut self, listener: TimeListener) -> ListenerKey {
        self.listeners.insert(listener)
    }

    /// Listener registered under `key`.
    pub fn get(&self, key: ListenerKey) -> Option<&TimeListener> {
        self.listeners.get(key)
    }

    /// Removes a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, key: ListenerKey) -> bool {
        self.listeners.remove(key).is_some()
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns whether no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Calls every listener once.
    pub fn notify(&self, time: TimeOfDay) {
        for listener in self.listeners.values() {
            listener.call(time);
        }
    }
}
