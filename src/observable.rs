//! A value that broadcasts through a [`Signal`] when it changes.

use crate::signal::{ScopedConnection, Signal, SlotConnection};

/// Current value plus a change signal.
///
/// Listeners receive the new value after it has been stored, so reading the
/// observable from inside a callback sees the same thing the payload does.
pub struct Observable<T: 'static> {
    value: T,
    changed: Signal<T>,
}

impl<T: 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            changed: Signal::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Mutates the value in place and notifies unconditionally.
    pub fn update(&mut self, mutate: impl FnOnce(&mut T)) {
        mutate(&mut self.value);
        self.changed.notify(&self.value);
    }

    /// Fire-and-forget subscription to changes.
    pub fn connect(&self, callback: impl Fn(&T) + 'static) {
        self.changed.connect(callback);
    }

    /// Subscription owned by the returned RAII handle.
    pub fn connect_scoped(&self, callback: impl Fn(&T) + 'static) -> ScopedConnection<T> {
        self.changed.connect_scoped(callback)
    }

    /// Subscription behind a blockable gate.
    pub fn connect_slot(&self, callback: impl Fn(&T) + 'static) -> SlotConnection<T> {
        self.changed.connect_slot(callback)
    }
}

impl<T: PartialEq + 'static> Observable<T> {
    /// Stores `value` and notifies listeners, unless it equals the current
    /// value, in which case nothing happens at all.
    pub fn set(&mut self, value: T) {
        if self.value == value {
            return;
        }
        self.value = value;
        self.changed.notify(&self.value);
    }
}

impl<T: Default + 'static> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
