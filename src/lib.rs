//! Building blocks for a hobby 3D playground.
//!
//! Three pillars: a synchronous [`signal`] bus with explicit connection
//! lifecycles, [`observable`] values for change-driven state, and [`mesh`]
//! generators producing GPU-ready vertex data.
//!
//! No async, no threads. Pure synchronous logic; the signal types are
//! deliberately `!Send`.

pub mod mesh;
pub mod mvp;
pub mod observable;
pub mod signal;

pub use observable::Observable;
pub use signal::{ConnectionState, ScopedConnection, Signal, SignalError, SlotConnection};
