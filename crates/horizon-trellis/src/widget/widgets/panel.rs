//! Panel container widget implementation.
//!
//! This module provides [`Panel`], a container that owns child widgets,
//! runs focus traversal over them and renders them with culling.
//!
//! # Overview
//!
//! Panel is the general-purpose container:
//! - Owns children as boxed [`Widget`] trait objects
//! - Walks focus across children in response to navigation requests
//! - Tracks which child holds focus and cascades focus loss
//! - Renders children, skipping those outside the active clip region
//!
//! Children are positioned absolutely: the panel does not lay them out.
//!
//! # Example
//!
//! ```
//! use horizon_trellis::widget::widgets::{Panel, PushButton};
//! use horizon_trellis::widget::NavigationRequest;
//!
//! let mut panel = Panel::new();
//! panel.add_child(PushButton::new("One"));
//! panel.add_child(PushButton::new("Two"));
//!
//! assert!(panel.navigate(NavigationRequest::tab()));
//! assert_eq!(panel.focused_index(), Some(0));
//! ```

use horizon_trellis_core::Signal;

use crate::widget::{NavigationRequest, Navigator, RenderPass, Widget, WidgetBase};

/// A container widget that owns children and walks focus across them.
///
/// # Focus
///
/// The panel keeps a single focus slot naming the focused child, kept in
/// step with the children's own focus flags. Hosts drive traversal through
/// [`navigate`](Self::navigate); when the panel is itself a child of
/// another container, offers arrive through
/// [`accept_navigation`](Widget::accept_navigation) instead.
///
/// # Signals
///
/// - `children_changed()`: Emitted when children are added, removed or cleared
pub struct Panel {
    /// Widget base.
    base: WidgetBase,

    /// Child widgets in traversal order.
    children: Vec<Box<dyn Widget>>,

    /// Index of the focused child, if any.
    focused_index: Option<usize>,

    /// Focus traversal engine for the child list.
    navigator: Navigator,

    /// Signal emitted when the child list changes.
    pub children_changed: Signal<()>,
}

impl Panel {
    /// Create a new empty panel.
    pub fn new() -> Self {
        let mut base = WidgetBase::new::<Self>();
        // A container must be navigable for outer traversal to offer it focus.
        base.set_focusable(true);

        Self {
            base,
            children: Vec::new(),
            focused_index: None,
            navigator: Navigator::new(),
            children_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Child Management
    // =========================================================================

    /// Add a child widget to the end of the child list.
    ///
    /// Returns the index of the added child.
    pub fn add_child(&mut self, child: impl Widget + 'static) -> usize {
        self.children.push(Box::new(child));
        self.children_changed.emit(());
        self.children.len() - 1
    }

    /// Insert a child widget at the specified index.
    ///
    /// If the index is out of bounds, the child is appended. The focus slot
    /// is shifted so it keeps naming the same child.
    pub fn insert_child(&mut self, index: usize, child: impl Widget + 'static) {
        let index = index.min(self.children.len());
        self.children.insert(index, Box::new(child));
        if let Some(focused) = self.focused_index {
            if focused >= index {
                self.focused_index = Some(focused + 1);
            }
        }
        self.children_changed.emit(());
    }

    /// Remove and return the child at the specified index.
    ///
    /// Returns `None` if the index is out of bounds. A removed child loses
    /// its focus flag; if it held the panel's focus, the slot is cleared.
    pub fn remove_child(&mut self, index: usize) -> Option<Box<dyn Widget>> {
        if index >= self.children.len() {
            return None;
        }

        let mut child = self.children.remove(index);
        child.set_focused(false);

        self.focused_index = match self.focused_index {
            Some(focused) if focused == index => None,
            Some(focused) if focused > index => Some(focused - 1),
            other => other,
        };

        self.children_changed.emit(());
        Some(child)
    }

    /// Remove all children.
    pub fn clear(&mut self) {
        if self.children.is_empty() {
            return;
        }
        self.children.clear();
        self.focused_index = None;
        self.children_changed.emit(());
    }

    /// Get the number of children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Check if the panel has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Get a reference to the child at the specified index.
    pub fn child_at(&self, index: usize) -> Option<&dyn Widget> {
        self.children.get(index).map(|child| child.as_ref())
    }

    /// Get a mutable reference to the child at the specified index.
    pub fn child_at_mut(&mut self, index: usize) -> Option<&mut dyn Widget> {
        self.children
            .get_mut(index)
            .map(|child| &mut **child as &mut dyn Widget)
    }

    /// Get the child list.
    pub fn children(&self) -> &[Box<dyn Widget>] {
        &self.children
    }

    // =========================================================================
    // Focus Traversal
    // =========================================================================

    /// Get the index of the focused child, if any.
    pub fn focused_index(&self) -> Option<usize> {
        self.focused_index
    }

    /// Check if spatial requests stop at the ends of the child list.
    pub fn edge_hold(&self) -> bool {
        self.navigator.edge_hold()
    }

    /// Set whether spatial requests stop at the ends of the child list.
    pub fn set_edge_hold(&mut self, edge_hold: bool) {
        self.navigator.set_edge_hold(edge_hold);
    }

    /// Set edge-hold using builder pattern.
    pub fn with_edge_hold(mut self, edge_hold: bool) -> Self {
        self.navigator.set_edge_hold(edge_hold);
        self
    }

    /// Drive a focus traversal step from the host.
    ///
    /// This is the entry point for a panel acting as the root of a widget
    /// tree. Returns `true` if the request was handled; afterwards the
    /// panel's own focus flag reflects whether anything inside holds focus.
    pub fn navigate(&mut self, request: NavigationRequest) -> bool {
        if !self.base.is_navigable() {
            return false;
        }
        let accepted = self.dispatch(request);
        if accepted {
            self.base.set_focused(true);
        } else {
            self.set_focused(false);
        }
        accepted
    }

    /// Walk the child list for a request.
    fn dispatch(&mut self, request: NavigationRequest) -> bool {
        self.navigator
            .navigate(&mut self.children, &mut self.focused_index, request)
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Panel {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn set_focused(&mut self, focused: bool) {
        // Losing focus cascades into the subtree so no descendant keeps a
        // stale flag.
        if !focused {
            if let Some(index) = self.focused_index.take() {
                if let Some(child) = self.children.get_mut(index) {
                    child.set_focused(false);
                }
            }
        }
        self.base.set_focused(focused);
    }

    fn accept_navigation(&mut self, request: NavigationRequest) -> bool {
        if self.captures_input() {
            return false;
        }
        if !self.is_navigable() {
            return false;
        }
        let accepted = self.dispatch(request);
        if accepted {
            self.base.set_focused(true);
        }
        accepted
    }

    fn focused_child(&self) -> Option<&dyn Widget> {
        self.focused_index
            .and_then(|index| self.children.get(index))
            .filter(|child| child.is_focused())
            .map(|child| child.as_ref())
    }

    fn render(&mut self, pass: &mut RenderPass) {
        pass.note_widget(&self.base);
        for child in &mut self.children {
            if !child.is_visible() {
                continue;
            }
            if !pass.is_rect_visible(child.geometry()) {
                pass.note_culled();
                continue;
            }
            child.render(pass);
        }
    }
}

// Ensure Panel is Send + Sync
static_assertions::assert_impl_all!(Panel: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::widgets::{Label, PushButton};

    fn setup() -> Panel {
        let mut panel = Panel::new();
        panel.add_child(PushButton::new("First"));
        panel.add_child(PushButton::new("Second"));
        panel.add_child(PushButton::new("Third"));
        panel
    }

    #[test]
    fn test_add_and_count() {
        let panel = setup();
        assert_eq!(panel.child_count(), 3);
        assert!(!panel.is_empty());
        assert_eq!(panel.child_at(0).map(|c| c.name()), Some("PushButton"));
        assert!(panel.child_at(3).is_none());
    }

    #[test]
    fn test_insert_shifts_focus_slot() {
        let mut panel = setup();
        assert!(panel.navigate(NavigationRequest::tab()));
        assert_eq!(panel.focused_index(), Some(0));

        panel.insert_child(0, Label::new("header"));
        assert_eq!(panel.focused_index(), Some(1));
        assert!(panel.child_at(1).is_some_and(|c| c.is_focused()));
    }

    #[test]
    fn test_remove_focused_child_clears_slot() {
        let mut panel = setup();
        assert!(panel.navigate(NavigationRequest::tab()));
        assert_eq!(panel.focused_index(), Some(0));

        let removed = panel.remove_child(0);
        assert!(removed.is_some());
        assert!(!removed.unwrap().is_focused());
        assert_eq!(panel.focused_index(), None);
        assert_eq!(panel.child_count(), 2);
    }

    #[test]
    fn test_remove_before_focused_shifts_slot() {
        let mut panel = setup();
        panel.navigate(NavigationRequest::tab());
        panel.navigate(NavigationRequest::tab());
        assert_eq!(panel.focused_index(), Some(1));

        panel.remove_child(0);
        assert_eq!(panel.focused_index(), Some(0));
        assert!(panel.child_at(0).is_some_and(|c| c.is_focused()));
    }

    #[test]
    fn test_children_changed_signal() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let mut panel = Panel::new();
        let changes = Arc::new(AtomicUsize::new(0));
        let changes_clone = Arc::clone(&changes);
        panel.children_changed.connect(move |_| {
            changes_clone.fetch_add(1, Ordering::SeqCst);
        });

        panel.add_child(Label::new("a"));
        panel.remove_child(0);
        panel.clear(); // Already empty, no emission
        assert_eq!(changes.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_clear_resets_focus() {
        let mut panel = setup();
        panel.navigate(NavigationRequest::tab());
        panel.clear();
        assert_eq!(panel.focused_index(), None);
        assert!(panel.is_empty());
    }
}
