//! Tabbed pane widget implementation.
//!
//! This module provides [`TabbedPane`], a two-region widget with a tab
//! selector column on the left and the selected tab's page on the right.
//!
//! # Overview
//!
//! - [`TabList`] is the selector column: a vertical list of tab rows and
//!   separator rows. Selection follows vertical focus movement over the
//!   tabs.
//! - [`TabListEntry`] is one selector row. Tab rows carry their page
//!   widget; separator rows are labels that take no focus.
//! - [`TabbedPane`] routes navigation between the two regions: vertical
//!   requests stay in whichever region holds focus, horizontal requests
//!   cross between selector and content.
//!
//! # Example
//!
//! ```
//! use horizon_trellis::render::Rect;
//! use horizon_trellis::widget::widgets::{Panel, PushButton, TabbedPane};
//! use horizon_trellis::widget::Widget;
//!
//! let mut pane = TabbedPane::new();
//! pane.set_geometry(Rect::new(0, 0, 800, 600));
//!
//! let mut general = Panel::new();
//! general.add_child(PushButton::new("Reset"));
//! pane.add_tab("General", general);
//! pane.add_tab("Advanced", Panel::new());
//!
//! assert_eq!(pane.current(), Some(0));
//! ```

use horizon_trellis_core::Signal;
use horizon_trellis_render::Rect;
use thiserror::Error;

use crate::widget::{NavigationRequest, Navigator, RenderPass, Widget, WidgetBase};

/// Height of a tab row in the selector column.
const TAB_ROW_HEIGHT: i32 = 24;

/// Height of a separator row in the selector column.
const SEPARATOR_ROW_HEIGHT: i32 = 16;

/// Errors from tab selection.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TabError {
    /// The entry index is past the end of the selector list.
    #[error("tab entry index {index} out of bounds (len {count})")]
    OutOfBounds {
        /// The requested index.
        index: usize,
        /// The number of entries in the selector.
        count: usize,
    },

    /// The entry at the index is a separator, not a tab.
    #[error("entry {index} is not a tab")]
    NotATab {
        /// The requested index.
        index: usize,
    },
}

/// The two focusable regions of a [`TabbedPane`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneRegion {
    /// The tab selector column.
    Selector,
    /// The selected tab's page.
    Content,
}

// =========================================================================
// Selector Entries
// =========================================================================

/// The role-specific part of a selector row.
enum TabEntryKind {
    /// A selectable tab carrying its page widget.
    Tab {
        page: Box<dyn Widget>,
        selected: bool,
    },
    /// A non-focusable heading between groups of tabs.
    Separator,
}

/// One row of the tab selector column.
///
/// Tab rows are focusable and responding to the standard leaf protocol;
/// separator rows always decline focus. The row's widget name is its
/// label, so focus paths read naturally in logs.
pub struct TabListEntry {
    base: WidgetBase,
    label: String,
    kind: TabEntryKind,
}

impl TabListEntry {
    fn tab(label: impl Into<String>, page: Box<dyn Widget>) -> Self {
        let label = label.into();
        let mut base = WidgetBase::with_name(label.clone());
        base.set_focusable(true);
        base.resize(0, TAB_ROW_HEIGHT);
        Self {
            base,
            label,
            kind: TabEntryKind::Tab {
                page,
                selected: false,
            },
        }
    }

    fn separator(label: impl Into<String>) -> Self {
        let label = label.into();
        let mut base = WidgetBase::with_name(label.clone());
        base.resize(0, SEPARATOR_ROW_HEIGHT);
        Self {
            base,
            label,
            kind: TabEntryKind::Separator,
        }
    }

    /// Get the row's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Check if this row is a tab rather than a separator.
    pub fn is_tab(&self) -> bool {
        matches!(self.kind, TabEntryKind::Tab { .. })
    }

    /// Check if this row is the selected tab.
    pub fn is_selected(&self) -> bool {
        matches!(self.kind, TabEntryKind::Tab { selected: true, .. })
    }

    /// Get the tab's page widget, if this row is a tab.
    pub fn page(&self) -> Option<&dyn Widget> {
        match &self.kind {
            TabEntryKind::Tab { page, .. } => Some(page.as_ref()),
            TabEntryKind::Separator => None,
        }
    }

    /// Get the tab's page widget mutably, if this row is a tab.
    pub fn page_mut(&mut self) -> Option<&mut dyn Widget> {
        match &mut self.kind {
            TabEntryKind::Tab { page, .. } => Some(page.as_mut()),
            TabEntryKind::Separator => None,
        }
    }

    /// Take the page widget out of a removed tab row.
    pub fn into_page(self) -> Option<Box<dyn Widget>> {
        match self.kind {
            TabEntryKind::Tab { page, .. } => Some(page),
            TabEntryKind::Separator => None,
        }
    }

    fn set_selected_flag(&mut self, value: bool) {
        if let TabEntryKind::Tab { selected, .. } = &mut self.kind {
            *selected = value;
        }
    }
}

impl Widget for TabListEntry {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }
}

// =========================================================================
// Tab Selector Column
// =========================================================================

/// The tab selector column of a [`TabbedPane`].
///
/// Selection tracks vertical focus movement: walking onto a tab row
/// selects it. Moving focus out of the column keeps the selection and
/// parks the focus slot on it, so focus re-enters the column on the
/// selected tab rather than at the top.
///
/// # Signals
///
/// - `selection_changed(usize)`: Emitted when a different tab is selected
pub struct TabList {
    /// Widget base.
    base: WidgetBase,

    /// Selector rows in visual and traversal order.
    entries: Vec<TabListEntry>,

    /// Index of the focused row, if any.
    focused_index: Option<usize>,

    /// Focus traversal engine for the rows.
    navigator: Navigator,

    /// Index of the selected tab, if any.
    current: Option<usize>,

    /// Signal emitted when a different tab is selected.
    pub selection_changed: Signal<usize>,
}

impl TabList {
    fn new() -> Self {
        let mut base = WidgetBase::new::<Self>();
        base.set_focusable(true);

        Self {
            base,
            entries: Vec::new(),
            focused_index: None,
            navigator: Navigator::new(),
            current: None,
            selection_changed: Signal::new(),
        }
    }

    /// Get the index of the selected tab, if any.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Get the index of the focused row, if any.
    pub fn focused_index(&self) -> Option<usize> {
        self.focused_index
    }

    /// Get the number of selector rows.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Check if the selector has no rows.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get a reference to the row at the specified index.
    pub fn entry_at(&self, index: usize) -> Option<&TabListEntry> {
        self.entries.get(index)
    }

    /// Get the selected tab's page widget, if any.
    pub fn current_page(&self) -> Option<&dyn Widget> {
        self.current
            .and_then(|index| self.entries.get(index))
            .and_then(|entry| entry.page())
    }

    /// Get the selected tab's page widget mutably, if any.
    pub fn current_page_mut(&mut self) -> Option<&mut dyn Widget> {
        self.current
            .and_then(|index| self.entries.get_mut(index))
            .and_then(|entry| entry.page_mut())
    }

    /// Select a tab by index.
    ///
    /// The previously selected tab is deselected, the focus slot moves onto
    /// the new tab and `selection_changed` is emitted. Selecting the
    /// already selected tab is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TabError::OutOfBounds`] for an invalid index and
    /// [`TabError::NotATab`] when the index names a separator row.
    pub fn select(&mut self, index: usize) -> Result<(), TabError> {
        match self.entries.get(index) {
            None => Err(TabError::OutOfBounds {
                index,
                count: self.entries.len(),
            }),
            Some(entry) if !entry.is_tab() => Err(TabError::NotATab { index }),
            Some(_) => {
                self.set_selected(Some(index));
                Ok(())
            }
        }
    }

    fn add_tab(&mut self, label: impl Into<String>, page: Box<dyn Widget>) -> usize {
        self.entries.push(TabListEntry::tab(label, page));
        let index = self.entries.len() - 1;
        if self.current.is_none() {
            self.set_selected(Some(index));
        }
        self.relayout();
        index
    }

    fn add_separator(&mut self, label: impl Into<String>) -> usize {
        self.entries.push(TabListEntry::separator(label));
        self.relayout();
        self.entries.len() - 1
    }

    fn remove_entry(&mut self, index: usize) -> Option<TabListEntry> {
        if index >= self.entries.len() {
            return None;
        }

        let was_current = self.current == Some(index);
        let mut entry = self.entries.remove(index);
        entry.base.set_focused(false);
        entry.set_selected_flag(false);

        self.current = match self.current {
            Some(current) if current == index => None,
            Some(current) if current > index => Some(current - 1),
            other => other,
        };
        self.focused_index = match self.focused_index {
            Some(focused) if focused == index => None,
            Some(focused) if focused > index => Some(focused - 1),
            other => other,
        };

        if was_current {
            // Reselect the nearest previous tab, otherwise the next one.
            let replacement = (0..index)
                .rev()
                .find(|&i| self.entries[i].is_tab())
                .or_else(|| (index..self.entries.len()).find(|&i| self.entries[i].is_tab()));
            self.set_selected(replacement);
        }

        self.relayout();
        Some(entry)
    }

    /// Move the selection, keeping the selected flag and the focus slot in
    /// step with it.
    fn set_selected(&mut self, index: Option<usize>) {
        if self.current != index {
            if let Some(old) = self.current {
                if let Some(entry) = self.entries.get_mut(old) {
                    entry.set_selected_flag(false);
                }
            }
        }
        if self.focused_index != index {
            if let Some(old_focus) = self.focused_index {
                if let Some(entry) = self.entries.get_mut(old_focus) {
                    entry.base.set_focused(false);
                }
            }
        }

        let changed = self.current != index;
        self.focused_index = index;
        self.current = index;

        if let Some(new) = index {
            if let Some(entry) = self.entries.get_mut(new) {
                entry.set_selected_flag(true);
                entry.base.set_focused(true);
            }
            if changed {
                self.selection_changed.emit(new);
            }
        }
    }

    /// Restack the selector rows within the column.
    fn relayout(&mut self) {
        let rect = self.base.geometry();
        let mut offset = 0;
        for entry in &mut self.entries {
            let height = entry.base.height();
            entry
                .base
                .set_geometry(Rect::new(rect.left(), rect.top() + offset, rect.width(), height));
            offset += height;
        }
    }

    /// Give every page the content-area geometry.
    fn set_page_geometry(&mut self, rect: Rect) {
        for entry in &mut self.entries {
            if let Some(page) = entry.page_mut() {
                page.set_geometry(rect);
            }
        }
    }
}

impl Widget for TabList {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.base.set_geometry(rect);
        self.relayout();
    }

    fn set_focused(&mut self, focused: bool) {
        if !focused {
            // Park the focus slot on the selection so focus re-enters the
            // column on the selected tab, not at the top.
            self.set_selected(self.current);
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

        // An unfocused column is entered on its parked slot: focus lands on
        // the selected tab instead of walking off it.
        if !self.base.is_focused() && self.current.is_some() {
            self.set_selected(self.current);
            self.base.set_focused(true);
            return true;
        }

        // Horizontal requests never move the selection; the focused row
        // swallows them.
        if request.direction.is_horizontal() {
            if let Some(index) = self.focused_index {
                if let Some(entry) = self.entries.get_mut(index) {
                    entry.accept_navigation(request);
                    return true;
                }
            }
        }

        let before = self.focused_index;
        let accepted =
            self.navigator
                .navigate(&mut self.entries, &mut self.focused_index, request);
        if accepted {
            self.base.set_focused(true);
            // Selection follows focus over the tabs.
            if self.focused_index != before {
                if let Some(index) = self.focused_index {
                    if self.entries[index].is_tab() {
                        self.set_selected(Some(index));
                    }
                }
            }
        }
        accepted
    }

    fn focused_child(&self) -> Option<&dyn Widget> {
        self.focused_index
            .and_then(|index| self.entries.get(index))
            .filter(|entry| entry.is_focused())
            .map(|entry| entry as &dyn Widget)
    }

    fn render(&mut self, pass: &mut RenderPass) {
        pass.note_widget(&self.base);
        let rect = self.base.geometry();
        pass.with_clip(rect, |pass| {
            for entry in &mut self.entries {
                if !pass.is_rect_visible(entry.geometry()) {
                    pass.note_culled();
                    continue;
                }
                entry.render(pass);
            }
        });
    }
}

// =========================================================================
// Tabbed Pane
// =========================================================================

/// A container with a tab selector column and a content area.
///
/// The selector occupies the left edge; the selected tab's page fills the
/// rest. Vertical requests stay inside the focused region. Horizontal
/// requests cross regions: right moves from the selector into the content,
/// left returns from the content to the selector. A request neither region
/// can use is declined, letting an outer container move focus past the
/// pane.
///
/// Selection state lives in the selector; observe it through
/// [`tab_list_mut`](Self::tab_list_mut) and its `selection_changed` signal.
pub struct TabbedPane {
    /// Widget base.
    base: WidgetBase,

    /// The selector column, which owns the pages.
    tab_list: TabList,
}

impl TabbedPane {
    /// Create a new empty pane.
    pub fn new() -> Self {
        let mut base = WidgetBase::new::<Self>();
        base.set_focusable(true);

        Self {
            base,
            tab_list: TabList::new(),
        }
    }

    // =========================================================================
    // Tabs
    // =========================================================================

    /// Add a tab with its page widget.
    ///
    /// The first tab added becomes the selected tab. Returns the selector
    /// row index of the new tab.
    pub fn add_tab(&mut self, label: impl Into<String>, page: impl Widget + 'static) -> usize {
        let index = self.tab_list.add_tab(label, Box::new(page));
        self.relayout();
        index
    }

    /// Add a separator heading between groups of tabs.
    ///
    /// Returns the selector row index of the separator.
    pub fn add_separator(&mut self, label: impl Into<String>) -> usize {
        let index = self.tab_list.add_separator(label);
        self.relayout();
        index
    }

    /// Remove and return the selector row at the specified index.
    ///
    /// Removing the selected tab reselects the nearest previous tab, or
    /// the next one if there is none before it. Returns `None` if the
    /// index is out of bounds.
    pub fn remove_entry(&mut self, index: usize) -> Option<TabListEntry> {
        let entry = self.tab_list.remove_entry(index);
        if entry.is_some() {
            self.relayout();
        }
        entry
    }

    /// Get the index of the selected tab, if any.
    pub fn current(&self) -> Option<usize> {
        self.tab_list.current()
    }

    /// Select a tab by index.
    ///
    /// # Errors
    ///
    /// Returns [`TabError::OutOfBounds`] for an invalid index and
    /// [`TabError::NotATab`] when the index names a separator row.
    pub fn select(&mut self, index: usize) -> Result<(), TabError> {
        self.tab_list.select(index)
    }

    /// Get the selector column.
    pub fn tab_list(&self) -> &TabList {
        &self.tab_list
    }

    /// Get the selector column mutably, for signal connections.
    pub fn tab_list_mut(&mut self) -> &mut TabList {
        &mut self.tab_list
    }

    /// Width of the selector column.
    pub fn selector_width(&self) -> i32 {
        (self.base.width() / 8).max(100)
    }

    /// Which region currently holds focus, if any.
    pub fn focused_region(&self) -> Option<PaneRegion> {
        if self.tab_list.is_focused() {
            Some(PaneRegion::Selector)
        } else if self
            .tab_list
            .current_page()
            .is_some_and(|page| page.is_focused())
        {
            Some(PaneRegion::Content)
        } else {
            None
        }
    }

    /// Drive a focus traversal step from the host.
    ///
    /// This is the entry point for a pane acting as the root of a widget
    /// tree. Returns `true` if the request was handled; afterwards the
    /// pane's own focus flag reflects whether anything inside holds focus.
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

    // =========================================================================
    // Routing
    // =========================================================================

    fn dispatch(&mut self, request: NavigationRequest) -> bool {
        if self.tab_list.current().is_none() {
            // No tabs: the selector is the only possible target.
            return self.tab_list.accept_navigation(request);
        }
        if request.direction.is_horizontal() && !request.tab {
            self.route_horizontal(request)
        } else {
            self.route_axis(request)
        }
    }

    /// Keep vertical and Tab traversal inside the active region.
    fn route_axis(&mut self, request: NavigationRequest) -> bool {
        match self.focused_region() {
            Some(PaneRegion::Content) => self.offer_page(request),
            // Selector focused, or nothing focused: the selector is the
            // default region.
            Some(PaneRegion::Selector) | None => self.tab_list.accept_navigation(request),
        }
    }

    /// Cross between selector and content on horizontal requests.
    fn route_horizontal(&mut self, request: NavigationRequest) -> bool {
        match self.focused_region() {
            Some(PaneRegion::Selector) => {
                if request.is_forward() {
                    // Right from the selector enters the content.
                    let accepted = self.offer_page(request);
                    if accepted {
                        // The selector parks its slot on the selection.
                        self.tab_list.set_focused(false);
                    }
                    accepted
                } else {
                    // Nothing lies left of the selector.
                    false
                }
            }
            Some(PaneRegion::Content) => {
                if self.offer_page(request) {
                    true
                } else if !request.is_forward() {
                    // Left past the content's edge returns to the selector.
                    if let Some(page) = self.tab_list.current_page_mut() {
                        page.set_focused(false);
                    }
                    self.focus_selector()
                } else {
                    // Right past the content's edge leaves the pane.
                    false
                }
            }
            None => {
                // First entry from outside: left lands on the selector,
                // right lands in the content.
                if request.is_forward() {
                    self.offer_page(request)
                } else {
                    self.focus_selector()
                }
            }
        }
    }

    fn offer_page(&mut self, request: NavigationRequest) -> bool {
        self.tab_list
            .current_page_mut()
            .is_some_and(|page| page.accept_navigation(request))
    }

    fn focus_selector(&mut self) -> bool {
        if !self.tab_list.is_navigable() {
            return false;
        }
        // The selector's slot is parked on the selected tab, so focusing
        // the column lands there.
        self.tab_list.set_focused(true);
        true
    }

    fn relayout(&mut self) {
        let rect = self.base.geometry();
        let selector_width = self.selector_width();
        self.tab_list.set_geometry(Rect::new(
            rect.left(),
            rect.top(),
            selector_width,
            rect.height(),
        ));
        let page_rect = Rect::new(
            rect.left() + selector_width,
            rect.top(),
            (rect.width() - selector_width).max(0),
            rect.height(),
        );
        self.tab_list.set_page_geometry(page_rect);
    }
}

impl Default for TabbedPane {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for TabbedPane {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.base.set_geometry(rect);
        self.relayout();
    }

    fn set_focused(&mut self, focused: bool) {
        if !focused {
            if let Some(page) = self.tab_list.current_page_mut() {
                page.set_focused(false);
            }
            self.tab_list.set_focused(false);
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
        match self.focused_region() {
            Some(PaneRegion::Selector) => Some(&self.tab_list as &dyn Widget),
            Some(PaneRegion::Content) => self.tab_list.current_page(),
            None => None,
        }
    }

    fn render(&mut self, pass: &mut RenderPass) {
        pass.note_widget(&self.base);
        self.tab_list.render(pass);
        if let Some(page) = self.tab_list.current_page_mut() {
            if page.is_visible() {
                if pass.is_rect_visible(page.geometry()) {
                    page.render(pass);
                } else {
                    pass.note_culled();
                }
            }
        }
    }
}

// Ensure the tabbed widgets are Send + Sync
static_assertions::assert_impl_all!(TabbedPane: Send, Sync);
static_assertions::assert_impl_all!(TabList: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::widgets::{Panel, PushButton};
    use crate::widget::Direction;
    use std::sync::{Arc, Mutex};

    fn page_with_buttons(count: usize) -> Panel {
        let mut panel = Panel::new();
        for i in 0..count {
            panel.add_child(PushButton::new(format!("Button {i}")));
        }
        panel
    }

    fn setup() -> TabbedPane {
        let mut pane = TabbedPane::new();
        pane.set_geometry(Rect::new(0, 0, 800, 600));
        pane.add_tab("General", page_with_buttons(2));
        pane.add_tab("Display", page_with_buttons(3));
        pane.add_separator("Extras");
        pane.add_tab("About", page_with_buttons(1));
        pane
    }

    #[test]
    fn test_first_tab_selected_on_add() {
        let pane = setup();
        assert_eq!(pane.current(), Some(0));
        assert!(pane.tab_list().entry_at(0).is_some_and(|e| e.is_selected()));
    }

    #[test]
    fn test_select_reports_errors() {
        let mut pane = setup();
        assert_eq!(
            pane.select(9),
            Err(TabError::OutOfBounds { index: 9, count: 4 })
        );
        assert_eq!(pane.select(2), Err(TabError::NotATab { index: 2 }));
        assert_eq!(pane.select(3), Ok(()));
        assert_eq!(pane.current(), Some(3));
    }

    #[test]
    fn test_selection_change_signal() {
        let mut pane = setup();
        let selections = Arc::new(Mutex::new(Vec::new()));
        let selections_clone = Arc::clone(&selections);
        pane.tab_list_mut()
            .selection_changed
            .connect(move |&index| {
                selections_clone.lock().unwrap().push(index);
            });

        pane.select(1).unwrap();
        pane.select(1).unwrap(); // Already selected, no emission
        pane.select(0).unwrap();
        assert_eq!(*selections.lock().unwrap(), vec![1, 0]);
    }

    #[test]
    fn test_selection_follows_vertical_focus() {
        let mut pane = setup();
        assert!(pane.navigate(NavigationRequest::spatial(Direction::Down)));
        assert_eq!(pane.focused_region(), Some(PaneRegion::Selector));
        assert_eq!(pane.current(), Some(0));

        // Walking down moves the selection onto the next tab.
        assert!(pane.navigate(NavigationRequest::spatial(Direction::Down)));
        assert_eq!(pane.current(), Some(1));
    }

    #[test]
    fn test_right_enters_content_without_changing_selection() {
        let mut pane = setup();
        assert!(pane.navigate(NavigationRequest::spatial(Direction::Down)));
        assert_eq!(pane.focused_region(), Some(PaneRegion::Selector));

        assert!(pane.navigate(NavigationRequest::spatial(Direction::Right)));
        assert_eq!(pane.focused_region(), Some(PaneRegion::Content));
        assert_eq!(pane.current(), Some(0));
    }

    #[test]
    fn test_left_returns_to_selected_tab() {
        let mut pane = setup();
        pane.navigate(NavigationRequest::spatial(Direction::Down));
        pane.navigate(NavigationRequest::spatial(Direction::Right));
        assert_eq!(pane.focused_region(), Some(PaneRegion::Content));

        // The page's focused button declines left, so focus returns to the
        // selector, landing on the selected tab.
        assert!(pane.navigate(NavigationRequest::spatial(Direction::Left)));
        assert_eq!(pane.focused_region(), Some(PaneRegion::Selector));
        assert_eq!(pane.tab_list().focused_index(), Some(0));
        assert_eq!(pane.current(), Some(0));
    }

    #[test]
    fn test_right_with_no_region_focused_enters_content() {
        let mut pane = setup();
        assert_eq!(pane.focused_region(), None);

        assert!(pane.navigate(NavigationRequest::spatial(Direction::Right)));
        assert_eq!(pane.focused_region(), Some(PaneRegion::Content));
        assert_eq!(pane.current(), Some(0));
    }

    #[test]
    fn test_left_with_no_region_focused_enters_selector() {
        let mut pane = setup();
        assert_eq!(pane.focused_region(), None);

        assert!(pane.navigate(NavigationRequest::spatial(Direction::Left)));
        assert_eq!(pane.focused_region(), Some(PaneRegion::Selector));
        assert_eq!(pane.tab_list().focused_index(), Some(0));
    }

    #[test]
    fn test_vertical_after_focus_leaves_content_defaults_to_selector() {
        let mut pane = setup();
        assert!(pane.navigate(NavigationRequest::spatial(Direction::Right)));
        assert_eq!(pane.focused_region(), Some(PaneRegion::Content));

        // Walk off the end of the two-button page so nothing holds focus.
        assert!(pane.navigate(NavigationRequest::tab()));
        assert!(!pane.navigate(NavigationRequest::tab()));
        assert_eq!(pane.focused_region(), None);

        // The next vertical request lands in the selector, not back in the
        // content the focus last left.
        assert!(pane.navigate(NavigationRequest::spatial(Direction::Down)));
        assert_eq!(pane.focused_region(), Some(PaneRegion::Selector));
    }

    #[test]
    fn test_separator_skipped_by_walk() {
        let mut pane = setup();
        pane.select(1).unwrap();
        pane.navigate(NavigationRequest::spatial(Direction::Down));
        assert_eq!(pane.tab_list().focused_index(), Some(1));

        // Walking down from "Display" skips the separator onto "About".
        assert!(pane.navigate(NavigationRequest::spatial(Direction::Down)));
        assert_eq!(pane.tab_list().focused_index(), Some(3));
        assert_eq!(pane.current(), Some(3));
    }

    #[test]
    fn test_remove_selected_tab_reselects_previous() {
        let mut pane = setup();
        pane.select(3).unwrap();

        let removed = pane.remove_entry(3);
        assert!(removed.is_some_and(|e| e.is_tab()));
        // Nearest previous tab: index 1 ("Display").
        assert_eq!(pane.current(), Some(1));
    }

    #[test]
    fn test_remove_first_tab_reselects_next() {
        let mut pane = setup();
        assert_eq!(pane.current(), Some(0));

        pane.remove_entry(0);
        // With nothing before it, the next tab is selected. Indices have
        // shifted down by one.
        assert_eq!(pane.current(), Some(0));
        assert!(pane.tab_list().entry_at(0).is_some_and(|e| e.is_tab()));
    }

    #[test]
    fn test_remove_last_tab_clears_selection() {
        let mut pane = TabbedPane::new();
        pane.set_geometry(Rect::new(0, 0, 800, 600));
        pane.add_tab("Only", Panel::new());

        pane.remove_entry(0);
        assert_eq!(pane.current(), None);
        assert!(pane.tab_list().is_empty());
    }

    #[test]
    fn test_layout_splits_selector_and_content() {
        let pane = setup();
        assert_eq!(pane.selector_width(), 100);

        let list_rect = pane.tab_list().geometry();
        assert_eq!(list_rect, Rect::new(0, 0, 100, 600));

        let page_rect = pane.tab_list().current_page().map(|p| p.geometry());
        assert_eq!(page_rect, Some(Rect::new(100, 0, 700, 600)));
    }

    #[test]
    fn test_wide_pane_grows_selector() {
        let mut pane = TabbedPane::new();
        pane.set_geometry(Rect::new(0, 0, 1600, 600));
        assert_eq!(pane.selector_width(), 200);
    }

    #[test]
    fn test_removed_tab_returns_page() {
        let mut pane = setup();
        let entry = pane.remove_entry(0).unwrap();
        assert_eq!(entry.label(), "General");
        assert!(entry.into_page().is_some());
    }
}
