//! Widget base implementation.
//!
//! This module provides `WidgetBase`, the common implementation details
//! for all widgets. It handles geometry, visibility, enabled state, and
//! the focus flag every widget carries.

use horizon_trellis_core::Signal;
use horizon_trellis_render::{Point, Rect, Size};

/// The base implementation for all widgets.
///
/// This struct provides common functionality that all widgets need:
/// - Naming for diagnostics
/// - Geometry management (position, size)
/// - Visibility and enabled state
/// - Focus state with change notification
///
/// Widget implementations include this as a field and delegate common
/// operations to it.
///
/// # Example
///
/// ```ignore
/// use horizon_trellis::widget::{Widget, WidgetBase};
///
/// struct MyButton {
///     base: WidgetBase,
///     label: String,
/// }
///
/// impl Widget for MyButton {
///     fn widget_base(&self) -> &WidgetBase { &self.base }
///     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
///
///     // ... other methods
/// }
/// ```
pub struct WidgetBase {
    /// The widget's name, used in logs and focus path diagnostics.
    name: String,

    /// The widget's geometry (position relative to parent and size).
    geometry: Rect,

    /// Whether the widget is visible.
    visible: bool,

    /// Whether the widget is enabled (can receive input).
    enabled: bool,

    /// Whether the widget can receive keyboard focus.
    focusable: bool,

    /// Whether the widget currently has focus.
    focused: bool,

    /// Whether the widget captures all input (e.g. mid-drag), making it
    /// opaque to focus traversal.
    captures_input: bool,

    /// Signal emitted when the focus state changes.
    pub focus_changed: Signal<bool>,

    /// Signal emitted when the geometry changes.
    pub geometry_changed: Signal<Rect>,

    /// Signal emitted when visibility changes.
    pub visible_changed: Signal<bool>,

    /// Signal emitted when enabled state changes.
    pub enabled_changed: Signal<bool>,
}

impl WidgetBase {
    /// Create a new widget base.
    ///
    /// The widget's name defaults to the short type name of `T`.
    pub fn new<T: 'static>() -> Self {
        let type_name = std::any::type_name::<T>();
        let short_name = type_name.rsplit("::").next().unwrap_or(type_name);
        Self::with_name(short_name)
    }

    /// Create a new widget base with an explicit name.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            geometry: Rect::ZERO,
            visible: true,
            enabled: true,
            focusable: false,
            focused: false,
            captures_input: false,
            focus_changed: Signal::new(),
            geometry_changed: Signal::new(),
            visible_changed: Signal::new(),
            enabled_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Naming
    // =========================================================================

    /// Get the widget's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the widget's name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Get the widget's geometry (position and size).
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Set the widget's geometry.
    ///
    /// This will emit `geometry_changed` if the geometry actually changed.
    pub fn set_geometry(&mut self, rect: Rect) {
        if self.geometry != rect {
            self.geometry = rect;
            self.geometry_changed.emit(rect);
        }
    }

    /// Get the widget's position relative to its parent.
    #[inline]
    pub fn pos(&self) -> Point {
        self.geometry.origin
    }

    /// Set the widget's position relative to its parent.
    pub fn set_pos(&mut self, pos: Point) {
        if self.geometry.origin != pos {
            let new_geometry = Rect {
                origin: pos,
                size: self.geometry.size,
            };
            self.geometry = new_geometry;
            self.geometry_changed.emit(new_geometry);
        }
    }

    /// Move the widget to the specified position.
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.set_pos(Point::new(x, y));
    }

    /// Get the widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Set the widget's size.
    pub fn set_size(&mut self, size: Size) {
        if self.geometry.size != size {
            let new_geometry = Rect {
                origin: self.geometry.origin,
                size,
            };
            self.geometry = new_geometry;
            self.geometry_changed.emit(new_geometry);
        }
    }

    /// Resize the widget.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.set_size(Size::new(width, height));
    }

    /// Get the widget's width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.geometry.size.width
    }

    /// Get the widget's height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.geometry.size.height
    }

    /// Get a rectangle representing the widget's local coordinate space.
    ///
    /// This is always positioned at (0, 0) with the widget's size.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(0, 0, self.geometry.size.width, self.geometry.size.height)
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Check if the widget is visible.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set whether the widget is visible.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.visible_changed.emit(visible);
        }
    }

    /// Show the widget.
    pub fn show(&mut self) {
        self.set_visible(true);
    }

    /// Hide the widget.
    pub fn hide(&mut self) {
        self.set_visible(false);
    }

    // =========================================================================
    // Enabled State
    // =========================================================================

    /// Check if the widget is enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set whether the widget is enabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.enabled_changed.emit(enabled);
        }
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Check if the widget is marked as able to receive keyboard focus.
    #[inline]
    pub fn is_focusable(&self) -> bool {
        self.focusable
    }

    /// Set whether the widget can receive keyboard focus.
    pub fn set_focusable(&mut self, focusable: bool) {
        self.focusable = focusable;
    }

    /// Check if the widget can receive focus right now.
    ///
    /// A widget is navigable when it is focusable, enabled and visible.
    /// Traversal offers focus only to navigable widgets.
    #[inline]
    pub fn is_navigable(&self) -> bool {
        self.focusable && self.enabled && self.visible
    }

    /// Check if the widget currently has keyboard focus.
    #[inline]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Set the focused state.
    ///
    /// Emits `focus_changed` only on an actual transition, so redundant
    /// calls during a traversal step never double-notify.
    pub fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            tracing::trace!(
                target: "horizon_trellis::focus",
                widget = %self.name,
                focused,
                "focus state changed"
            );
            self.focus_changed.emit(focused);
        }
    }

    // =========================================================================
    // Input Capture
    // =========================================================================

    /// Check if the widget captures all input.
    ///
    /// A capturing widget (a slider mid-drag, for example) consumes
    /// navigation requests while focused: focus stays put until the capture
    /// ends.
    #[inline]
    pub fn captures_input(&self) -> bool {
        self.captures_input
    }

    /// Set whether the widget captures all input.
    pub fn set_captures_input(&mut self, captures: bool) {
        self.captures_input = captures;
    }
}

impl std::fmt::Debug for WidgetBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetBase")
            .field("name", &self.name)
            .field("geometry", &self.geometry)
            .field("visible", &self.visible)
            .field("enabled", &self.enabled)
            .field("focusable", &self.focusable)
            .field("focused", &self.focused)
            .field("captures_input", &self.captures_input)
            .finish_non_exhaustive()
    }
}
