//! Core systems for Horizon Trellis.
//!
//! This crate provides the foundational components of the Horizon Trellis
//! widget toolkit:
//!
//! - **Signal/Slot System**: Type-safe state change notification
//! - **Logging**: Structured `tracing` targets and profiling helpers
//!
//! Trellis is embedded inside a host application that already owns the event
//! loop, so this crate deliberately has no loop of its own. Signals dispatch
//! synchronously on the emitting thread.
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_trellis_core::Signal;
//!
//! // Create a signal that notifies when focus changes
//! let focus_changed = Signal::<bool>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = focus_changed.connect(|&focused| {
//!     println!("focused: {}", focused);
//! });
//!
//! // Emit the signal
//! focus_changed.emit(true);
//!
//! // Disconnect when done
//! focus_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};
