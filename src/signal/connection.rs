//! Connection nodes and the scoped RAII handle.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use super::{Callback, SignalCore, SignalError};

/// Lifecycle tag of a single connection. Exactly one applies at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Owned by the signal; lives exactly as long as the signal does.
    Managed,
    /// Owned by a [`ScopedConnection`] handle and removable through it.
    Scoped,
    /// The signal died while a handle was still out; the handle finalizes it.
    Zombified,
}

/// One registered callback plus its lifecycle bookkeeping.
///
/// The back-reference to the owning signal is weak: once the signal is gone
/// it can no longer be upgraded, and a zombified connection never tries.
pub(crate) struct Connection<T: 'static> {
    callback: Callback<T>,
    state: Cell<ConnectionState>,
    signal: Weak<SignalCore<T>>,
}

impl<T: 'static> Connection<T> {
    pub(crate) fn new(
        callback: Callback<T>,
        state: ConnectionState,
        signal: Weak<SignalCore<T>>,
    ) -> Self {
        Self {
            callback,
            state: Cell::new(state),
            signal,
        }
    }

    pub(crate) fn invoke(&self, args: &T) {
        (self.callback)(args);
    }

    pub(crate) fn state(&self) -> ConnectionState {
        self.state.get()
    }

    pub(crate) fn set_state(&self, state: ConnectionState) {
        self.state.set(state);
    }

    fn owner(&self) -> Option<Rc<SignalCore<T>>> {
        self.signal.upgrade()
    }
}

/// Sole-owner RAII handle to one scoped connection.
///
/// Dropping the handle disconnects; overwriting it disconnects the previous
/// connection first. Handles are move-only: there is deliberately no way to
/// clone one, so a connection can never be disconnected twice through two
/// copies of the same handle.
pub struct ScopedConnection<T: 'static> {
    connection: Option<Rc<Connection<T>>>,
}

impl<T: 'static> ScopedConnection<T> {
    pub(crate) fn attached(connection: Rc<Connection<T>>) -> Self {
        Self {
            connection: Some(connection),
        }
    }

    /// A handle owning nothing. Disconnecting or dropping it does nothing.
    pub fn empty() -> Self {
        Self { connection: None }
    }

    /// Whether the handle still owns a connection, in any state.
    pub fn is_attached(&self) -> bool {
        self.connection.is_some()
    }

    /// Lifecycle state of the owned connection, if any.
    pub fn state(&self) -> Option<ConnectionState> {
        self.connection.as_ref().map(|connection| connection.state())
    }

    /// Disconnects now instead of at drop. No-op on an empty handle.
    ///
    /// Once the signal has died the connection is zombified and the handle
    /// merely releases it; the dead signal is never reached for.
    pub fn disconnect(&mut self) -> Result<(), SignalError> {
        let Some(connection) = self.connection.as_ref() else {
            return Ok(());
        };
        match connection.state() {
            ConnectionState::Zombified => {}
            ConnectionState::Managed | ConnectionState::Scoped => {
                if let Some(core) = connection.owner() {
                    core.remove(connection)?;
                }
            }
        }
        self.connection = None;
        Ok(())
    }

    pub(crate) fn connection(&self) -> Option<Rc<Connection<T>>> {
        self.connection.clone()
    }

    pub(crate) fn clear(&mut self) {
        self.connection = None;
    }
}

impl<T: 'static> Default for ScopedConnection<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: 'static> Drop for ScopedConnection<T> {
    fn drop(&mut self) {
        // An error means the connection was already detached elsewhere;
        // there is nothing left for the drop to release.
        let _ = self.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::Signal;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn test_dropping_handle_disconnects() {
        let signal = Signal::new();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let handle = signal.connect_scoped(move |_: &i32| counter.set(counter.get() + 1));
        assert_eq!(handle.state(), Some(ConnectionState::Scoped));

        signal.notify(&0);
        assert_eq!(hits.get(), 1);
        assert_eq!(signal.connection_count(), 1);

        drop(handle);
        assert_eq!(signal.connection_count(), 0);
        signal.notify(&0);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_overwriting_handle_disconnects_previous() {
        let signal = Signal::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&log);
        let mut handle =
            signal.connect_scoped(move |value: &i32| first.borrow_mut().push(("first", *value)));
        assert!(handle.is_attached());

        let second = Rc::clone(&log);
        handle = signal.connect_scoped(move |value| second.borrow_mut().push(("second", *value)));

        assert_eq!(signal.connection_count(), 1);
        signal.notify(&3);
        assert_eq!(log.borrow().as_slice(), &[("second", 3)]);

        drop(handle);
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_signal_drop_zombifies_outstanding_handle() {
        let signal = Signal::new();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let mut handle = signal.connect_scoped(move |_: &i32| counter.set(counter.get() + 1));

        drop(signal);

        assert!(handle.is_attached());
        assert_eq!(handle.state(), Some(ConnectionState::Zombified));
        assert_eq!(handle.disconnect(), Ok(()));
        assert!(!handle.is_attached());
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_handle_drop_after_signal_drop_is_clean() {
        let signal = Signal::<i32>::new();
        let handle = signal.connect_scoped(|_| {});
        drop(signal);
        drop(handle);
    }

    #[test]
    fn test_empty_handle_is_a_quiet_noop() {
        let mut empty = ScopedConnection::<i32>::empty();
        assert!(!empty.is_attached());
        assert_eq!(empty.state(), None);
        assert_eq!(empty.disconnect(), Ok(()));

        let defaulted = ScopedConnection::<i32>::default();
        assert!(!defaulted.is_attached());
    }

    #[test]
    fn test_explicit_disconnect_then_drop() {
        let signal = Signal::<i32>::new();
        let mut handle = signal.connect_scoped(|_| {});
        assert_eq!(handle.disconnect(), Ok(()));
        assert_eq!(handle.disconnect(), Ok(()));
        assert_eq!(signal.connection_count(), 0);
    }
}
