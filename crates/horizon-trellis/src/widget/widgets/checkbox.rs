//! Checkbox widget implementation.
//!
//! This module provides [`CheckBox`], a two-state toggle with a text label.

use horizon_trellis_core::Signal;

use crate::widget::{Widget, WidgetBase};

/// A two-state toggle widget.
///
/// Focus behavior follows the standard leaf protocol. The checked state is
/// independent of focus and changes through [`set_checked`](Self::set_checked),
/// [`toggle`](Self::toggle) or [`click`](Self::click).
///
/// # Signals
///
/// - `toggled(bool)`: Emitted when the checked state changes
pub struct CheckBox {
    /// Widget base.
    base: WidgetBase,

    /// The checkbox's text label.
    text: String,

    /// Whether the checkbox is currently checked.
    checked: bool,

    /// Signal emitted when the checked state changes.
    pub toggled: Signal<bool>,
}

impl CheckBox {
    /// Create a new checkbox with the specified text.
    pub fn new(text: impl Into<String>) -> Self {
        let mut base = WidgetBase::new::<Self>();
        base.set_focusable(true);

        Self {
            base,
            text: text.into(),
            checked: false,
            toggled: Signal::new(),
        }
    }

    /// Get the checkbox's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the checkbox's text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Check if the checkbox is currently checked.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Set the checked state.
    pub fn set_checked(&mut self, checked: bool) {
        if self.checked != checked {
            self.checked = checked;
            self.toggled.emit(checked);
        }
    }

    /// Set checked state using builder pattern.
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Toggle the checked state.
    pub fn toggle(&mut self) {
        self.set_checked(!self.checked);
    }

    /// Programmatically activate the checkbox.
    ///
    /// Toggles the checked state. Disabled checkboxes do not activate.
    pub fn click(&mut self) {
        if !self.base.is_enabled() {
            return;
        }
        self.toggle();
    }
}

impl Widget for CheckBox {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }
}

// Ensure CheckBox is Send + Sync
static_assertions::assert_impl_all!(CheckBox: Send, Sync);
