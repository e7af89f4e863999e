//! Push button widget implementation.
//!
//! This module provides [`PushButton`], a focusable command button.
//!
//! # Example
//!
//! ```
//! use horizon_trellis::widget::widgets::PushButton;
//!
//! let mut button = PushButton::new("Apply");
//! button.clicked.connect(|_| {
//!     println!("applied");
//! });
//! button.click();
//! ```

use horizon_trellis_core::Signal;

use crate::widget::{Widget, WidgetBase};

/// A command button activated by the host's input layer.
///
/// Buttons take focus through the standard leaf protocol: offering focus to
/// an unfocused button focuses it, offering again releases it. Activation
/// is separate from focus; hosts call [`click`](Self::click) when their
/// activation key fires.
///
/// # Signals
///
/// - `clicked()`: Emitted when the button is activated
pub struct PushButton {
    /// Widget base.
    base: WidgetBase,

    /// The button's text label.
    text: String,

    /// Signal emitted when the button is activated.
    pub clicked: Signal<()>,
}

impl PushButton {
    /// Create a new button with the specified text.
    pub fn new(text: impl Into<String>) -> Self {
        let mut base = WidgetBase::new::<Self>();
        base.set_focusable(true);

        Self {
            base,
            text: text.into(),
            clicked: Signal::new(),
        }
    }

    /// Get the button's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the button's text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Set the text using builder pattern.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Programmatically activate the button.
    ///
    /// Emits the `clicked` signal. Disabled buttons do not activate.
    pub fn click(&mut self) {
        if !self.base.is_enabled() {
            return;
        }
        self.clicked.emit(());
    }
}

impl Widget for PushButton {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }
}

// Ensure PushButton is Send + Sync
static_assertions::assert_impl_all!(PushButton: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::NavigationRequest;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_button_click_signal() {
        let mut button = PushButton::new("Go");
        let clicks = Arc::new(AtomicUsize::new(0));
        let clicks_clone = Arc::clone(&clicks);
        button.clicked.connect(move |_| {
            clicks_clone.fetch_add(1, Ordering::SeqCst);
        });

        button.click();
        button.click();
        assert_eq!(clicks.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_disabled_button_does_not_click() {
        let mut button = PushButton::new("Go");
        let clicks = Arc::new(AtomicUsize::new(0));
        let clicks_clone = Arc::clone(&clicks);
        button.clicked.connect(move |_| {
            clicks_clone.fetch_add(1, Ordering::SeqCst);
        });

        button.set_enabled(false);
        button.click();
        assert_eq!(clicks.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_button_focus_toggle() {
        let mut button = PushButton::new("Go");
        assert!(button.accept_navigation(NavigationRequest::spatial(
            crate::widget::Direction::Right
        )));
        assert!(button.is_focused());

        // A second offer releases focus.
        assert!(!button.accept_navigation(NavigationRequest::spatial(
            crate::widget::Direction::Right
        )));
        assert!(!button.is_focused());
    }
}
