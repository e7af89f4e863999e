//! Horizon Trellis - focus navigation and clipped rendering for widget trees.
//!
//! Trellis is an embeddable widget toolkit layer for hosts that own their own
//! input and frame loop. The host maps keys to [`widget::NavigationRequest`]s
//! and drives its screen root's `navigate` entry point; rendering walks the
//! same tree with a [`widget::RenderPass`], which keeps nested clip regions
//! balanced.
//!
//! This is the main umbrella crate that re-exports all public APIs.
//!
//! # Example
//!
//! ```
//! use horizon_trellis::widget::widgets::{Panel, PushButton};
//! use horizon_trellis::widget::NavigationRequest;
//!
//! let mut root = Panel::new();
//! root.add_child(PushButton::new("Resume"));
//! root.add_child(PushButton::new("Options"));
//!
//! // Host input layer: Tab advances focus.
//! assert!(root.navigate(NavigationRequest::tab()));
//! assert_eq!(root.focused_index(), Some(0));
//! ```

pub use horizon_trellis_core::*;

/// Rendering primitives: geometry and the clip stack.
pub mod render {
    pub use horizon_trellis_render::*;
}

pub mod widget;
