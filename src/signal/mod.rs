//! Signal/slot event bus with explicit connection lifecycles.
//!
//! Single-threaded by construction: signals and handles sit on `Rc` and
//! `RefCell`, so none of these types cross threads. Notification is
//! synchronous and re-entrant; callbacks may connect and disconnect while a
//! notification is in flight.

mod connection;
mod slot;

pub use connection::{ConnectionState, ScopedConnection};
pub use slot::{BlockGuard, SlotConnection};

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

use connection::Connection;

pub(crate) type Callback<T> = Box<dyn Fn(&T)>;

/// Contract violations surfaced by [`Signal::disconnect`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SignalError {
    /// The handle is empty or its connection belongs to a different signal.
    #[error("connection is not attached to this signal")]
    NotAttached,
    /// Managed connections live exactly as long as the signal and cannot be
    /// detached from outside.
    #[error("managed connections cannot be disconnected")]
    Managed,
}

/// An ordered list of callbacks invoked synchronously by [`notify`].
///
/// Callbacks fire in registration order. The callback signature is fixed by
/// the payload type `T`; signals carrying several values use a tuple payload.
///
/// [`notify`]: Signal::notify
pub struct Signal<T: 'static> {
    core: Rc<SignalCore<T>>,
}

impl<T: 'static> Signal<T> {
    pub fn new() -> Self {
        Self {
            core: Rc::new(SignalCore {
                connections: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Registers a fire-and-forget callback.
    ///
    /// The connection is managed: it lives exactly as long as the signal,
    /// and there is no way to detach it early.
    pub fn connect(&self, callback: impl Fn(&T) + 'static) {
        SignalCore::insert(&self.core, Box::new(callback), ConnectionState::Managed);
    }

    /// Registers a callback owned by the returned RAII handle.
    pub fn connect_scoped(&self, callback: impl Fn(&T) + 'static) -> ScopedConnection<T> {
        let connection = SignalCore::insert(&self.core, Box::new(callback), ConnectionState::Scoped);
        ScopedConnection::attached(connection)
    }

    /// Registers a callback behind a blockable [`SlotConnection`] gate.
    pub fn connect_slot(&self, callback: impl Fn(&T) + 'static) -> SlotConnection<T> {
        SlotConnection::new(self, Box::new(callback))
    }

    /// Invokes every registered callback, in registration order, with `args`.
    ///
    /// Iterates over a snapshot taken before the first callback runs: a
    /// callback connected during notification first fires on the next
    /// `notify`, and one disconnected during notification still receives
    /// the in-flight payload.
    pub fn notify(&self, args: &T) {
        let snapshot = self.core.connections.borrow().clone();
        for connection in &snapshot {
            connection.invoke(args);
        }
    }

    /// Detaches the scoped connection held by `handle` from this signal.
    ///
    /// On success the handle is left empty. On error both the handle and the
    /// connection are untouched: an empty handle, or one whose connection
    /// belongs to a different signal, yields [`SignalError::NotAttached`].
    pub fn disconnect(&self, handle: &mut ScopedConnection<T>) -> Result<(), SignalError> {
        let Some(connection) = handle.connection() else {
            return Err(SignalError::NotAttached);
        };
        self.core.remove(&connection)?;
        handle.clear();
        Ok(())
    }

    /// Number of connections currently registered, in any state.
    pub fn connection_count(&self) -> usize {
        self.core.connections.borrow().len()
    }
}

impl<T: 'static> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared guts of a signal: the connection list, kept behind `Rc` so handles
/// can reach back without owning the signal.
pub(crate) struct SignalCore<T: 'static> {
    connections: RefCell<Vec<Rc<Connection<T>>>>,
}

impl<T: 'static> SignalCore<T> {
    fn insert(
        core: &Rc<Self>,
        callback: Callback<T>,
        state: ConnectionState,
    ) -> Rc<Connection<T>> {
        let connection = Rc::new(Connection::new(callback, state, Rc::downgrade(core)));
        core.connections.borrow_mut().push(Rc::clone(&connection));
        connection
    }

    /// Removes `connection` from the list, enforcing the lifecycle rules.
    ///
    /// Membership is checked before state, so a foreign connection is always
    /// [`SignalError::NotAttached`] regardless of its state.
    pub(crate) fn remove(&self, connection: &Rc<Connection<T>>) -> Result<(), SignalError> {
        let mut connections = self.connections.borrow_mut();
        let index = connections
            .iter()
            .position(|held| Rc::ptr_eq(held, connection))
            .ok_or(SignalError::NotAttached)?;
        match connection.state() {
            ConnectionState::Managed => Err(SignalError::Managed),
            ConnectionState::Scoped => {
                connections.remove(index);
                Ok(())
            }
            // A zombified connection is no longer anyone's to remove.
            ConnectionState::Zombified => Ok(()),
        }
    }
}

impl<T: 'static> Drop for SignalCore<T> {
    fn drop(&mut self) {
        // Scoped connections outlive the signal through their handles; tag
        // them so the handle knows not to reach back. Managed ones go down
        // with the list.
        for connection in self.connections.get_mut().iter() {
            match connection.state() {
                ConnectionState::Managed => {}
                ConnectionState::Scoped => connection.set_state(ConnectionState::Zombified),
                ConnectionState::Zombified => {}
            }
        }
    }
}
