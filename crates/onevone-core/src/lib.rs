//! Core systems for onevone.
//!
//! This crate provides the foundational pieces shared by the other onevone
//! crates:
//!
//! - **Signal/Slot System**: Synchronous observer hooks used for render and
//!   navigation notifications
//! - **Logging**: `tracing` targets, span names and subscriber setup
//!
//! # Signal/Slot Example
//!
//! ```
//! use onevone_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;

pub use error::{LoggingError, SignalError};
pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};
