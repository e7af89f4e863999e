//! Scrollable entry list widget implementation.
//!
//! This module provides [`EntryList`], a vertically scrolling container
//! whose entries stack top to bottom. The list clips its entries to its own
//! geometry during rendering and keeps the focused entry scrolled into
//! view.
//!
//! # Overview
//!
//! - Entries stack vertically; each row's height comes from the entry's
//!   geometry at the time it is added
//! - Vertical traversal walks the entries; horizontal requests are
//!   delegated to the focused entry (a slider entry absorbs them into its
//!   value)
//! - Scrolling is in pixels, clamped to the content size
//!
//! # Example
//!
//! ```
//! use horizon_trellis::render::Rect;
//! use horizon_trellis::widget::widgets::{EntryList, Slider};
//! use horizon_trellis::widget::{NavigationRequest, Widget};
//!
//! let mut list = EntryList::new();
//! list.set_geometry(Rect::new(0, 0, 200, 100));
//!
//! let mut volume = Slider::new();
//! volume.widget_base_mut().resize(0, 20);
//! list.add_entry(volume);
//!
//! assert!(list.navigate(NavigationRequest::tab()));
//! assert_eq!(list.focused_index(), Some(0));
//! ```

use horizon_trellis_core::Signal;
use horizon_trellis_render::Rect;

use crate::widget::{NavigationRequest, Navigator, RenderPass, Widget, WidgetBase};

/// A vertically scrolling list of widget entries.
///
/// # Focus
///
/// Vertical requests walk the entry list through the standard traversal
/// engine; a successful step scrolls the newly focused entry into view.
/// Horizontal requests go to the focused entry instead of moving focus:
/// with [`allow_outside_horizontal`](Self::set_allow_outside_horizontal)
/// disabled (the default) they are always consumed and the focused entry
/// keeps its flag even when it declines the offer, otherwise the entry's
/// answer decides whether focus may leave the list sideways.
///
/// # Signals
///
/// - `scroll_changed(i32)`: Emitted when the scroll position changes
/// - `entries_changed()`: Emitted when entries are added, removed or cleared
pub struct EntryList {
    /// Widget base.
    base: WidgetBase,

    /// Entries in visual and traversal order.
    entries: Vec<Box<dyn Widget>>,

    /// Index of the focused entry, if any.
    focused_index: Option<usize>,

    /// Focus traversal engine for the entry list.
    navigator: Navigator,

    /// Scroll offset in pixels, clamped to [0, max_scroll].
    scroll: i32,

    /// Whether horizontal requests refused by the focused entry may move
    /// focus out of the list.
    allow_outside_horizontal: bool,

    /// Signal emitted when the scroll position changes.
    pub scroll_changed: Signal<i32>,

    /// Signal emitted when the entry list changes.
    pub entries_changed: Signal<()>,
}

impl EntryList {
    /// Create a new empty list.
    pub fn new() -> Self {
        let mut base = WidgetBase::new::<Self>();
        base.set_focusable(true);

        Self {
            base,
            entries: Vec::new(),
            focused_index: None,
            navigator: Navigator::new(),
            scroll: 0,
            allow_outside_horizontal: false,
            scroll_changed: Signal::new(),
            entries_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Entry Management
    // =========================================================================

    /// Add an entry to the end of the list.
    ///
    /// The row height is taken from the entry's geometry. Returns the index
    /// of the added entry.
    pub fn add_entry(&mut self, entry: impl Widget + 'static) -> usize {
        self.entries.push(Box::new(entry));
        self.reposition_entries();
        self.entries_changed.emit(());
        self.entries.len() - 1
    }

    /// Remove and return the entry at the specified index.
    ///
    /// Returns `None` if the index is out of bounds. A removed entry loses
    /// its focus flag; if it held the list's focus, the slot is cleared.
    pub fn remove_entry(&mut self, index: usize) -> Option<Box<dyn Widget>> {
        if index >= self.entries.len() {
            return None;
        }

        let mut entry = self.entries.remove(index);
        entry.set_focused(false);

        self.focused_index = match self.focused_index {
            Some(focused) if focused == index => None,
            Some(focused) if focused > index => Some(focused - 1),
            other => other,
        };

        self.set_scroll(self.scroll);
        self.entries_changed.emit(());
        Some(entry)
    }

    /// Remove all entries and reset the scroll position.
    pub fn clear_entries(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.entries.clear();
        self.focused_index = None;
        self.set_scroll(0);
        self.entries_changed.emit(());
    }

    /// Get the number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Check if the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get a reference to the entry at the specified index.
    pub fn entry_at(&self, index: usize) -> Option<&dyn Widget> {
        self.entries.get(index).map(|entry| entry.as_ref())
    }

    /// Get a mutable reference to the entry at the specified index.
    pub fn entry_at_mut(&mut self, index: usize) -> Option<&mut dyn Widget> {
        self.entries
            .get_mut(index)
            .map(|entry| &mut **entry as &mut dyn Widget)
    }

    /// Get the entry list.
    pub fn entries(&self) -> &[Box<dyn Widget>] {
        &self.entries
    }

    // =========================================================================
    // Scrolling
    // =========================================================================

    /// Get the scroll position in pixels.
    pub fn scroll(&self) -> i32 {
        self.scroll
    }

    /// Get the total height of the stacked entries.
    pub fn max_position(&self) -> i32 {
        self.entries
            .iter()
            .map(|entry| entry.geometry().height())
            .sum()
    }

    /// Get the maximum scroll position.
    ///
    /// The scroll amount can't go past this maximum.
    pub fn max_scroll(&self) -> i32 {
        (self.max_position() - self.base.height() + 8).max(0)
    }

    /// Set the scroll position.
    ///
    /// The amount is clamped between 0 and [`max_scroll`](Self::max_scroll).
    /// Entry positions and visibility are recomputed.
    pub fn set_scroll(&mut self, amount: i32) {
        let clamped = amount.clamp(0, self.max_scroll());
        let changed = self.scroll != clamped;
        self.scroll = clamped;
        self.reposition_entries();
        if changed {
            self.scroll_changed.emit(clamped);
        }
    }

    /// Adjust the scroll position by a delta.
    pub fn scroll_by(&mut self, delta: i32) {
        self.set_scroll(self.scroll + delta);
    }

    /// Scroll the entry at the specified index into view.
    pub fn ensure_visible(&mut self, index: usize) {
        if index >= self.entries.len() {
            return;
        }
        let rect = self.base.geometry();
        let entry_height = self.entries[index].geometry().height();
        let row_top = self.row_top(index);

        let above = row_top - rect.top() - entry_height - 8;
        if above < 0 {
            self.scroll_by(above);
        }

        let next_height = self
            .entries
            .get(index + 1)
            .map(|entry| entry.geometry().height())
            .unwrap_or(0);
        let below = rect.bottom() - row_top - entry_height + next_height;
        if below < 0 {
            self.scroll_by(-below);
        }
    }

    /// Width available to entries, leaving a lane for the scrollbar when
    /// the content overflows.
    fn content_width(&self) -> i32 {
        let mut width = self.base.width();
        if self.max_scroll() > 0 {
            width -= 6;
        }
        width
    }

    /// Summed heights of the entries up to and including `index`.
    fn length_through(&self, index: usize) -> i32 {
        self.entries
            .iter()
            .take(index + 1)
            .map(|entry| entry.geometry().height())
            .sum()
    }

    fn row_top(&self, index: usize) -> i32 {
        self.base.geometry().top() + 4 - self.scroll + self.length_through(index)
    }

    /// Restack entry geometry under the current scroll and refresh each
    /// entry's visibility flag.
    fn reposition_entries(&mut self) {
        let rect = self.base.geometry();
        let width = self.content_width();
        let mut offset = 0;
        for entry in &mut self.entries {
            let height = entry.geometry().height();
            entry.set_geometry(Rect::new(
                rect.left(),
                rect.top() + offset - self.scroll,
                width,
                height,
            ));
            offset += height;

            let geometry = entry.geometry();
            let visible = !(geometry.bottom() < rect.top() || geometry.top() > rect.bottom());
            entry.set_visible(visible);
        }
    }

    // =========================================================================
    // Focus Traversal
    // =========================================================================

    /// Get the index of the focused entry, if any.
    pub fn focused_index(&self) -> Option<usize> {
        self.focused_index
    }

    /// Check if spatial requests stop at the ends of the list.
    pub fn edge_hold(&self) -> bool {
        self.navigator.edge_hold()
    }

    /// Set whether spatial requests stop at the ends of the list.
    pub fn set_edge_hold(&mut self, edge_hold: bool) {
        self.navigator.set_edge_hold(edge_hold);
    }

    /// Set edge-hold using builder pattern.
    pub fn with_edge_hold(mut self, edge_hold: bool) -> Self {
        self.navigator.set_edge_hold(edge_hold);
        self
    }

    /// Check if refused horizontal requests may move focus out of the list.
    pub fn allow_outside_horizontal(&self) -> bool {
        self.allow_outside_horizontal
    }

    /// Set whether refused horizontal requests may move focus out of the
    /// list.
    pub fn set_allow_outside_horizontal(&mut self, allow: bool) {
        self.allow_outside_horizontal = allow;
    }

    /// Drive a focus traversal step from the host.
    ///
    /// This is the entry point for a list acting as the root of a widget
    /// tree. Returns `true` if the request was handled; afterwards the
    /// list's own focus flag reflects whether anything inside holds focus.
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

    /// Route a request to the focused entry or walk the list.
    fn dispatch(&mut self, request: NavigationRequest) -> bool {
        // Horizontal requests belong to the focused entry, not the walk.
        if request.direction.is_horizontal() {
            if let Some(index) = self.focused_index {
                if let Some(entry) = self.entries.get_mut(index) {
                    let accepted = entry.accept_navigation(request);
                    if self.allow_outside_horizontal {
                        return accepted;
                    }
                    // Consumed either way. A declining entry released its
                    // flag on the offer; put it back so the slot keeps
                    // naming a focused entry.
                    if !accepted {
                        entry.set_focused(true);
                    }
                    return true;
                }
            }
        }

        let accepted =
            self.navigator
                .navigate(&mut self.entries, &mut self.focused_index, request);
        if accepted {
            if let Some(index) = self.focused_index {
                self.ensure_visible(index);
            }
        }
        accepted
    }
}

impl Default for EntryList {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for EntryList {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.base.set_geometry(rect);
        // Re-clamp the scroll against the new viewport and restack.
        self.set_scroll(self.scroll);
    }

    fn set_focused(&mut self, focused: bool) {
        if !focused {
            if let Some(index) = self.focused_index.take() {
                if let Some(entry) = self.entries.get_mut(index) {
                    entry.set_focused(false);
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
            .and_then(|index| self.entries.get(index))
            .filter(|entry| entry.is_focused())
            .map(|entry| entry.as_ref())
    }

    fn render(&mut self, pass: &mut RenderPass) {
        pass.note_widget(&self.base);
        let rect = self.base.geometry();
        pass.with_clip(rect, |pass| {
            for entry in &mut self.entries {
                if !entry.is_visible() {
                    continue;
                }
                if !pass.is_rect_visible(entry.geometry()) {
                    pass.note_culled();
                    continue;
                }
                entry.render(pass);
            }
        });
    }
}

// Ensure EntryList is Send + Sync
static_assertions::assert_impl_all!(EntryList: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::widgets::{PushButton, Slider};
    use crate::widget::Direction;

    fn row(height: i32) -> PushButton {
        let mut button = PushButton::new("Row");
        button.widget_base_mut().resize(0, height);
        button
    }

    fn setup() -> EntryList {
        let mut list = EntryList::new();
        list.set_geometry(Rect::new(0, 0, 200, 100));
        for _ in 0..10 {
            list.add_entry(row(20));
        }
        list
    }

    #[test]
    fn test_scroll_clamped_to_content() {
        let mut list = setup();
        assert_eq!(list.max_position(), 200);
        assert_eq!(list.max_scroll(), 108);

        list.set_scroll(50);
        assert_eq!(list.scroll(), 50);

        list.set_scroll(500);
        assert_eq!(list.scroll(), 108);

        list.set_scroll(-10);
        assert_eq!(list.scroll(), 0);
    }

    #[test]
    fn test_entries_leave_scrollbar_lane_when_overflowing() {
        let mut list = setup();
        list.set_scroll(0);
        assert_eq!(list.entry_at(0).map(|e| e.geometry().width()), Some(194));
    }

    #[test]
    fn test_visibility_flags_follow_scroll() {
        let mut list = setup();
        list.set_scroll(0);

        assert!(list.entry_at(0).is_some_and(|e| e.is_visible()));
        assert!(list.entry_at(4).is_some_and(|e| e.is_visible()));
        // Entry 6 starts at y=120, below the 100 pixel viewport.
        assert!(list.entry_at(6).is_some_and(|e| !e.is_visible()));

        list.set_scroll(list.max_scroll());
        assert!(list.entry_at(0).is_some_and(|e| !e.is_visible()));
        assert!(list.entry_at(9).is_some_and(|e| e.is_visible()));
    }

    #[test]
    fn test_scroll_change_signal_guarded() {
        use std::sync::{Arc, Mutex};

        let mut list = setup();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        list.scroll_changed.connect(move |&amount| {
            seen_clone.lock().unwrap().push(amount);
        });

        list.set_scroll(40);
        list.set_scroll(40);
        list.set_scroll(0);
        assert_eq!(*seen.lock().unwrap(), vec![40, 0]);
    }

    #[test]
    fn test_ensure_visible_scrolls_to_far_entry() {
        let mut list = setup();
        list.ensure_visible(9);
        assert_eq!(list.scroll(), list.max_scroll());

        list.ensure_visible(0);
        assert_eq!(list.scroll(), 0);
    }

    #[test]
    fn test_navigation_scrolls_focused_entry_into_view() {
        let mut list = setup();
        for _ in 0..10 {
            assert!(list.navigate(NavigationRequest::tab()));
        }
        assert_eq!(list.focused_index(), Some(9));
        assert!(list.scroll() > 0);
        assert!(list.entry_at(9).is_some_and(|e| e.is_visible()));
    }

    #[test]
    fn test_horizontal_goes_to_focused_slider() {
        use std::sync::{Arc, Mutex};

        let mut list = EntryList::new();
        list.set_geometry(Rect::new(0, 0, 200, 100));
        let mut slider = Slider::new().with_range(0, 10).with_value(5);
        slider.widget_base_mut().resize(0, 20);

        let values = Arc::new(Mutex::new(Vec::new()));
        let values_clone = Arc::clone(&values);
        slider.value_changed.connect(move |&value| {
            values_clone.lock().unwrap().push(value);
        });
        list.add_entry(slider);

        assert!(list.navigate(NavigationRequest::tab()));
        assert!(list.navigate(NavigationRequest::spatial(Direction::Right)));
        assert!(list.navigate(NavigationRequest::spatial(Direction::Right)));
        assert!(list.navigate(NavigationRequest::spatial(Direction::Left)));

        assert_eq!(*values.lock().unwrap(), vec![6, 7, 6]);
        assert_eq!(list.focused_index(), Some(0));
    }

    #[test]
    fn test_horizontal_consumed_without_outside_navigation() {
        let mut list = setup();
        assert!(list.navigate(NavigationRequest::tab()));
        assert_eq!(list.focused_index(), Some(0));

        // The focused button has no horizontal behavior; the request is
        // swallowed by the list and the button stays focused, so the slot
        // never names an unfocused entry.
        assert!(list.navigate(NavigationRequest::spatial(Direction::Left)));
        assert_eq!(list.focused_index(), Some(0));
        assert!(list.entry_at(0).is_some_and(|e| e.is_focused()));

        // Vertical traversal resumes from the same entry.
        assert!(list.navigate(NavigationRequest::spatial(Direction::Down)));
        assert_eq!(list.focused_index(), Some(1));
    }

    #[test]
    fn test_entry_at_mut_reaches_entry_state() {
        let mut list = setup();
        list.entry_at_mut(0).unwrap().set_enabled(false);

        // The disabled entry is not navigable; the walk lands past it.
        assert!(list.navigate(NavigationRequest::tab()));
        assert_eq!(list.focused_index(), Some(1));
    }

    #[test]
    fn test_remove_focused_entry_clears_slot() {
        let mut list = setup();
        list.navigate(NavigationRequest::tab());
        assert_eq!(list.focused_index(), Some(0));

        let removed = list.remove_entry(0);
        assert!(removed.is_some_and(|e| !e.is_focused()));
        assert_eq!(list.focused_index(), None);
        assert_eq!(list.entry_count(), 9);
    }
}
