//! Label widget implementation.
//!
//! This module provides [`Label`], a static text widget. Labels are not
//! focusable, so focus traversal walks straight past them.

use horizon_trellis_core::Signal;

use crate::widget::{Widget, WidgetBase};

/// A static text widget.
///
/// Labels display text and take no part in focus traversal: they are not
/// focusable and always decline focus offers.
///
/// # Example
///
/// ```
/// use horizon_trellis::widget::widgets::Label;
/// use horizon_trellis::widget::Widget;
///
/// let label = Label::new("Volume");
/// assert_eq!(label.text(), "Volume");
/// assert!(!label.is_navigable());
/// ```
pub struct Label {
    /// Widget base.
    base: WidgetBase,

    /// The displayed text.
    text: String,

    /// Signal emitted when the text changes.
    pub text_changed: Signal<String>,
}

impl Label {
    /// Create a new label with the specified text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new::<Self>(),
            text: text.into(),
            text_changed: Signal::new(),
        }
    }

    /// Get the label's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the label's text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let new_text = text.into();
        if self.text != new_text {
            self.text = new_text;
            self.text_changed.emit(self.text.clone());
        }
    }

    /// Set the text using builder pattern.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

impl Widget for Label {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }
}

// Ensure Label is Send + Sync
static_assertions::assert_impl_all!(Label: Send, Sync);
