//! Widget system for Horizon Trellis.
//!
//! This module provides the foundational widget architecture including:
//!
//! - [`Widget`] trait: The base trait for all UI elements
//! - [`WidgetBase`]: Common implementation for widget functionality
//! - Directional focus navigation over widget trees
//! - Clipped rendering passes with per-frame statistics
//!
//! # Overview
//!
//! Each widget contains a [`WidgetBase`] that carries its geometry and state
//! flags, and implements the [`Widget`] trait on top of it. Focus moves
//! through the tree by *offers*: a [`NavigationRequest`] is offered to
//! widgets one at a time, and the first widget to accept it becomes (or
//! contains) the focused widget. Containers accept by running their own
//! [`Navigator`] over their children, which is how a single arrow key
//! descends through nested containers.
//!
//! # Creating a Widget
//!
//! To create a custom widget:
//!
//! 1. Define a struct with a `WidgetBase` field
//! 2. Implement the `Widget` trait
//! 3. Override `accept_navigation()` if the default focus-toggle protocol
//!    does not fit
//! 4. Override `render()` if the widget has children to clip and cull
//!
//! ```
//! use horizon_trellis::widget::{NavigationRequest, Widget, WidgetBase};
//!
//! struct MyToggle {
//!     base: WidgetBase,
//! }
//!
//! impl MyToggle {
//!     pub fn new() -> Self {
//!         let mut base = WidgetBase::new::<Self>();
//!         base.set_focusable(true);
//!         Self { base }
//!     }
//! }
//!
//! impl Widget for MyToggle {
//!     fn widget_base(&self) -> &WidgetBase { &self.base }
//!     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
//! }
//!
//! let mut toggle = MyToggle::new();
//! assert!(toggle.accept_navigation(NavigationRequest::tab()));
//! assert!(toggle.is_focused());
//! ```
//!
//! # Focus Navigation
//!
//! The host turns input into [`NavigationRequest`]s and drives the tree
//! root's `navigate` entry point. Leaves follow a toggle protocol: an offer
//! to an unfocused leaf focuses it, an offer to the already focused leaf
//! releases it so the walk can continue past. Containers keep a focus slot
//! naming which child holds focus, and the [`Navigator`] keeps slot and
//! child flags in step on every transition.
//!
//! ```
//! use horizon_trellis::widget::widgets::{Panel, PushButton};
//! use horizon_trellis::widget::{Direction, NavigationRequest};
//!
//! let mut panel = Panel::new();
//! panel.add_child(PushButton::new("First"));
//! panel.add_child(PushButton::new("Second"));
//!
//! assert!(panel.navigate(NavigationRequest::spatial(Direction::Right)));
//! assert_eq!(panel.focused_index(), Some(0));
//!
//! assert!(panel.navigate(NavigationRequest::spatial(Direction::Right)));
//! assert_eq!(panel.focused_index(), Some(1));
//! ```
//!
//! # Rendering
//!
//! Rendering is a tree traversal carrying a [`RenderPass`]. Containers
//! scope their children inside [`RenderPass::with_clip`] so nested scroll
//! regions clip correctly, and consult
//! [`RenderPass::is_rect_visible`] to cull children that cannot produce
//! pixels. The pass records [`FrameStats`] for the host.
//!
//! ```ignore
//! use horizon_trellis::widget::RenderPass;
//!
//! let mut pass = RenderPass::new();
//! root.render(&mut pass);
//! let stats = pass.finish();
//! tracing::debug!(?stats, "frame complete");
//! ```

mod base;
mod focus;
mod navigation;
mod painting;
mod traits;
pub mod widgets;


pub use base::WidgetBase;
pub use focus::{focus_path, focused_leaf, format_focus_path};
pub use navigation::{Direction, NavigationRequest, Navigator};
pub use painting::{FrameStats, RenderPass};
pub use traits::{AsWidget, Widget};

// Re-export widgets for convenience
pub use widgets::{
    CheckBox, EntryList, Label, PaneRegion, Panel, PushButton, Slider, TabError, TabList,
    TabListEntry, TabbedPane,
};
