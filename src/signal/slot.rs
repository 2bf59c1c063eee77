//! Slot connections: a blocker gate in front of a scoped connection.

use std::cell::Cell;
use std::rc::Rc;

use super::{Callback, ConnectionState, ScopedConnection, Signal, SignalError};

/// Non-negative blocker count. Notifications pass only while it is zero.
struct Gate {
    blockers: Cell<usize>,
}

impl Gate {
    fn new() -> Self {
        Self {
            blockers: Cell::new(0),
        }
    }

    fn is_blocked(&self) -> bool {
        self.blockers.get() > 0
    }

    fn raise(&self) {
        self.blockers.set(self.blockers.get() + 1);
    }

    fn lower(&self) {
        let blockers = self.blockers.get();
        if blockers == 0 {
            tracing::warn!("slot unblocked more times than blocked; count stays at zero");
            return;
        }
        self.blockers.set(blockers - 1);
    }
}

/// A scoped connection whose callback can be muted and unmuted.
///
/// While one or more blocks are outstanding, notifications are skipped
/// outright, not queued for later. Blocks stack: every `block` needs its own
/// `unblock` before the callback fires again.
pub struct SlotConnection<T: 'static> {
    handle: ScopedConnection<T>,
    gate: Rc<Gate>,
}

impl<T: 'static> SlotConnection<T> {
    pub(super) fn new(signal: &Signal<T>, callback: Callback<T>) -> Self {
        let gate = Rc::new(Gate::new());
        let watch = Rc::clone(&gate);
        let handle = signal.connect_scoped(move |args| {
            if watch.is_blocked() {
                return;
            }
            callback(args);
        });
        Self { handle, gate }
    }

    /// Adds one blocker.
    pub fn block(&self) {
        self.gate.raise();
    }

    /// Removes one blocker. Unblocking an already unblocked slot clamps at
    /// zero and logs a warning.
    pub fn unblock(&self) {
        self.gate.lower();
    }

    pub fn is_blocked(&self) -> bool {
        self.gate.is_blocked()
    }

    /// Blocks for the guard's lifetime; released on every exit path,
    /// including unwinding.
    #[must_use = "dropping the guard immediately releases the block"]
    pub fn scoped_block(&self) -> BlockGuard<'_, T> {
        self.gate.raise();
        BlockGuard { slot: self }
    }

    /// Detaches from the signal now instead of at drop.
    pub fn disconnect(&mut self) -> Result<(), SignalError> {
        self.handle.disconnect()
    }

    /// Lifecycle state of the underlying connection, if any.
    pub fn state(&self) -> Option<ConnectionState> {
        self.handle.state()
    }
}

/// RAII blocker handed out by [`SlotConnection::scoped_block`].
pub struct BlockGuard<'a, T: 'static> {
    slot: &'a SlotConnection<T>,
}

impl<T: 'static> Drop for BlockGuard<'_, T> {
    fn drop(&mut self) {
        self.slot.gate.lower();
    }
}
