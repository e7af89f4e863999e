//! Clip-region geometry for Horizon Trellis.
//!
//! This crate provides the rendering-side primitives the widget layer builds
//! on: integer pixel geometry and the nested clip stack used for scrollable
//! and overlapping regions. It is backend-agnostic; a host maps the current
//! clip region onto whatever scissor mechanism its renderer exposes.
//!
//! # Clipping
//!
//! Clip regions nest. Pushing a rectangle intersects it with the region
//! already in effect, and popping restores the enclosing region:
//!
//! ```
//! use horizon_trellis_render::{ClipStack, Rect};
//!
//! let mut clips = ClipStack::new();
//! clips.push(Rect::new(0, 0, 100, 100));
//! clips.push(Rect::new(50, 50, 100, 100));
//!
//! // The effective region is the intersection of both pushes.
//! assert_eq!(clips.current(), Some(Rect::new(50, 50, 50, 50)));
//!
//! clips.pop();
//! assert_eq!(clips.current(), Some(Rect::new(0, 0, 100, 100)));
//! clips.pop();
//!
//! // Empty stack: clipping is disabled entirely.
//! assert_eq!(clips.current(), None);
//! ```
//!
//! For scope-bound pairing, prefer [`ClipStack::push_scope`], which returns
//! a guard that pops on drop.

pub mod clip;
pub mod types;

pub use clip::{ClipGuard, ClipStack};
pub use types::{Point, Rect, Size};
