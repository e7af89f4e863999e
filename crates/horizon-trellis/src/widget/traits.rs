//! Core widget trait definitions.
//!
//! This module defines the [`Widget`] trait which is the foundation for all
//! UI elements in Horizon Trellis.
//!
//! # Key Types
//!
//! - [`Widget`] - Base trait for all UI elements
//! - [`AsWidget`] - Helper trait for widget references
//!
//! # Related Types
//!
//! - [`super::WidgetBase`] - Common implementation for widgets
//! - [`super::NavigationRequest`] - Focus traversal steps offered to widgets
//! - [`super::RenderPass`] - Clipped rendering driver

use horizon_trellis_render::Rect;

use super::base::WidgetBase;
use super::navigation::NavigationRequest;
use super::painting::RenderPass;

/// The core trait for all widgets.
///
/// # Required Methods
///
/// Implementors must provide:
/// - [`widget_base()`](Self::widget_base) / [`widget_base_mut()`](Self::widget_base_mut):
///   Access to the underlying [`WidgetBase`]
///
/// Everything else has a default implementation. Leaf widgets usually only
/// add behavior on top of the defaults; containers override
/// [`accept_navigation`](Self::accept_navigation) to walk their children,
/// [`set_focused`](Self::set_focused) to cascade focus loss into their
/// subtree, and [`focused_child`](Self::focused_child) for diagnostics.
///
/// # Focus Offers
///
/// Traversal works by *offering* focus. The default
/// [`accept_navigation`](Self::accept_navigation) implements the leaf
/// protocol: a navigable widget toggles its focus flag and reports whether
/// it now holds focus. Offering focus to an already-focused leaf therefore
/// releases it, which is how focus deliberately exits a held edge. Widgets
/// that are not navigable (hidden, disabled or not focusable) always
/// decline.
///
/// # Example
///
/// ```
/// use horizon_trellis::widget::{Widget, WidgetBase};
///
/// struct ColorSwatch {
///     base: WidgetBase,
/// }
///
/// impl ColorSwatch {
///     pub fn new() -> Self {
///         let mut base = WidgetBase::new::<Self>();
///         base.set_focusable(true);
///         Self { base }
///     }
/// }
///
/// impl Widget for ColorSwatch {
///     fn widget_base(&self) -> &WidgetBase { &self.base }
///     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
/// }
///
/// let swatch = ColorSwatch::new();
/// assert!(swatch.is_navigable());
/// assert!(!swatch.is_focused());
/// ```
pub trait Widget: Send + Sync {
    // =========================================================================
    // Required Methods
    // =========================================================================

    /// Get a reference to the widget's base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget's base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    // =========================================================================
    // Naming
    // =========================================================================

    /// Get the widget's name, used in logs and focus path diagnostics.
    fn name(&self) -> &str {
        self.widget_base().name()
    }

    // =========================================================================
    // Geometry (default implementations delegate to WidgetBase)
    // =========================================================================

    /// Get the widget's geometry (position relative to parent and size).
    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }

    /// Set the widget's geometry.
    fn set_geometry(&mut self, rect: Rect) {
        self.widget_base_mut().set_geometry(rect);
    }

    // =========================================================================
    // Visibility and Enabled State
    // =========================================================================

    /// Check if the widget is visible.
    fn is_visible(&self) -> bool {
        self.widget_base().is_visible()
    }

    /// Set whether the widget is visible.
    fn set_visible(&mut self, visible: bool) {
        self.widget_base_mut().set_visible(visible);
    }

    /// Check if the widget is enabled.
    fn is_enabled(&self) -> bool {
        self.widget_base().is_enabled()
    }

    /// Set whether the widget is enabled.
    fn set_enabled(&mut self, enabled: bool) {
        self.widget_base_mut().set_enabled(enabled);
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Check if the widget can receive focus right now (focusable, enabled
    /// and visible).
    fn is_navigable(&self) -> bool {
        self.widget_base().is_navigable()
    }

    /// Check if the widget currently has keyboard focus.
    fn is_focused(&self) -> bool {
        self.widget_base().is_focused()
    }

    /// Set the focused state.
    ///
    /// Containers override this to cascade focus loss into their subtree:
    /// clearing a container's flag must also clear whichever descendant
    /// actually held focus.
    fn set_focused(&mut self, focused: bool) {
        self.widget_base_mut().set_focused(focused);
    }

    /// Check if the widget captures all input.
    ///
    /// While the focused widget captures input, navigation requests are
    /// consumed without moving focus. The default reads the base flag;
    /// widgets with modal interaction states (a slider mid-adjustment, for
    /// example) override this to derive it.
    fn captures_input(&self) -> bool {
        self.widget_base().captures_input()
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Respond to a focus offer.
    ///
    /// Returns `true` if this widget (or something inside it) now holds
    /// focus as a result of the offer. The default implements the leaf
    /// protocol: decline while capturing input or not navigable, otherwise
    /// toggle the focus flag and report the new state. Containers override
    /// this to run their own traversal over their children.
    fn accept_navigation(&mut self, request: NavigationRequest) -> bool {
        let _ = request;
        if self.captures_input() {
            return false;
        }
        if self.is_navigable() {
            let focused = !self.is_focused();
            self.set_focused(focused);
            return self.is_focused();
        }
        false
    }

    // =========================================================================
    // Children
    // =========================================================================

    /// Get the focused child, if this widget has children and one of them
    /// holds focus.
    ///
    /// Used to walk the focus path from a root down to the focused leaf.
    fn focused_child(&self) -> Option<&dyn Widget> {
        None
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render the widget into the pass.
    ///
    /// Containers establish their clip region on the pass and recurse into
    /// children. Takes `&mut self` because rendering may refresh cached
    /// presentation state such as visibility culling.
    fn render(&mut self, pass: &mut RenderPass) {
        pass.note_widget(self.widget_base());
    }
}

// Boxed widgets forward the overridable surface so a `Box<dyn Widget>`
// keeps the concrete type's behavior. Methods that only delegate to
// `widget_base()` are covered by forwarding the base accessors.
impl<W: Widget + ?Sized> Widget for Box<W> {
    fn widget_base(&self) -> &WidgetBase {
        (**self).widget_base()
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        (**self).widget_base_mut()
    }

    fn set_geometry(&mut self, rect: Rect) {
        (**self).set_geometry(rect);
    }

    fn set_focused(&mut self, focused: bool) {
        (**self).set_focused(focused);
    }

    fn captures_input(&self) -> bool {
        (**self).captures_input()
    }

    fn accept_navigation(&mut self, request: NavigationRequest) -> bool {
        (**self).accept_navigation(request)
    }

    fn focused_child(&self) -> Option<&dyn Widget> {
        (**self).focused_child()
    }

    fn render(&mut self, pass: &mut RenderPass) {
        (**self).render(pass);
    }
}

/// Extension trait for converting to `&dyn Widget`.
pub trait AsWidget {
    /// Get a reference to self as a widget.
    fn as_widget(&self) -> &dyn Widget;
    /// Get a mutable reference to self as a widget.
    fn as_widget_mut(&mut self) -> &mut dyn Widget;
}

impl<W: Widget> AsWidget for W {
    fn as_widget(&self) -> &dyn Widget {
        self
    }

    fn as_widget_mut(&mut self) -> &mut dyn Widget {
        self
    }
}
