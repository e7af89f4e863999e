//! Logging facilities for Horizon Trellis.
//!
//! This module provides:
//! - Integration with the `tracing` crate for structured logging
//! - Performance tracing hooks for profiling
//!
//! # Tracing Integration
//!
//! Horizon Trellis uses the `tracing` crate for instrumentation. To see logs,
//! you need to install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! # Filtering
//!
//! Every subsystem logs under a fixed target so hosts can turn individual
//! areas on or off. For example, to trace only focus traversal:
//!
//! ```text
//! RUST_LOG=horizon_trellis::navigation=trace
//! ```

/// Span names used throughout Horizon Trellis for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// Directional focus traversal span.
    pub const NAVIGATION: &str = "horizon_trellis::navigation";
    /// Focus transfer span.
    pub const FOCUS: &str = "horizon_trellis::focus";
    /// Render pass span.
    pub const RENDER_PASS: &str = "horizon_trellis::render_pass";
    /// Signal emission span.
    pub const SIGNAL: &str = "horizon_trellis::signal";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "horizon_trellis_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_trellis_core::signal";
    /// Directional focus traversal target.
    pub const NAVIGATION: &str = "horizon_trellis::navigation";
    /// Focus state change target.
    pub const FOCUS: &str = "horizon_trellis::focus";
    /// Widget lifecycle target.
    pub const WIDGET: &str = "horizon_trellis::widget";
    /// Render crate target.
    pub const RENDER: &str = "horizon_trellis_render";
    /// Clip stack target.
    pub const CLIP: &str = "horizon_trellis_render::clip";
}

/// A guard that emits a tracing span when dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "horizon_trellis::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Macros for common tracing patterns.
///
/// These are re-exported for convenience but are just wrappers around
/// the `tracing` crate macros with consistent target naming.
#[macro_export]
macro_rules! trellis_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "horizon_trellis_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! trellis_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "horizon_trellis_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! trellis_info {
    ($($arg:tt)*) => {
        tracing::info!(target: "horizon_trellis_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! trellis_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "horizon_trellis_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! trellis_error {
    ($($arg:tt)*) => {
        tracing::error!(target: "horizon_trellis_core", $($arg)*)
    };
}
