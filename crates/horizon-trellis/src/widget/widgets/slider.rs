//! Slider widget implementation.
//!
//! This module provides [`Slider`], a widget for selecting a value from an
//! integer range.
//!
//! # Example
//!
//! ```
//! use horizon_trellis::widget::widgets::Slider;
//!
//! let mut slider = Slider::new()
//!     .with_range(0, 100)
//!     .with_value(50);
//!
//! slider.value_changed.connect(|&value| {
//!     println!("Value: {}", value);
//! });
//! slider.step_up();
//! ```

use horizon_trellis_core::Signal;

use crate::widget::{NavigationRequest, Widget, WidgetBase};

/// A widget for selecting a value from a range.
///
/// While focused, horizontal focus offers step the value instead of moving
/// focus; at either end of the range the offer falls back to the standard
/// leaf protocol, so focus hops to the neighbor. While the thumb is being
/// dragged the slider captures all input and navigation is consumed without
/// moving focus.
///
/// # Signals
///
/// - `value_changed(i32)`: Emitted when the value changes
/// - `range_changed((i32, i32))`: Emitted when the range changes
pub struct Slider {
    /// Widget base.
    base: WidgetBase,

    /// Minimum value.
    minimum: i32,

    /// Maximum value.
    maximum: i32,

    /// Current value.
    value: i32,

    /// Single step size (for focus-driven adjustment).
    single_step: i32,

    /// Whether the thumb is currently being dragged.
    dragging: bool,

    /// Signal emitted when value changes.
    pub value_changed: Signal<i32>,

    /// Signal emitted when range changes.
    pub range_changed: Signal<(i32, i32)>,
}

impl Slider {
    /// Create a new slider with the default range 0..=100.
    pub fn new() -> Self {
        let mut base = WidgetBase::new::<Self>();
        base.set_focusable(true);

        Self {
            base,
            minimum: 0,
            maximum: 100,
            value: 0,
            single_step: 1,
            dragging: false,
            value_changed: Signal::new(),
            range_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Value and Range
    // =========================================================================

    /// Get the minimum value.
    pub fn minimum(&self) -> i32 {
        self.minimum
    }

    /// Get the maximum value.
    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    /// Get the current value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Set the current value.
    ///
    /// The value is clamped to the valid range [minimum, maximum].
    pub fn set_value(&mut self, value: i32) {
        let clamped = value.clamp(self.minimum, self.maximum);
        if self.value != clamped {
            self.value = clamped;
            self.value_changed.emit(clamped);
        }
    }

    /// Set value using builder pattern.
    pub fn with_value(mut self, value: i32) -> Self {
        self.set_value(value);
        self
    }

    /// Set the value range.
    pub fn set_range(&mut self, minimum: i32, maximum: i32) {
        let (min, max) = if minimum <= maximum {
            (minimum, maximum)
        } else {
            (maximum, minimum)
        };

        if self.minimum != min || self.maximum != max {
            self.minimum = min;
            self.maximum = max;
            // Clamp current value to new range
            let new_value = self.value.clamp(min, max);
            let value_changed = self.value != new_value;
            self.value = new_value;
            self.range_changed.emit((min, max));
            if value_changed {
                self.value_changed.emit(new_value);
            }
        }
    }

    /// Set range using builder pattern.
    pub fn with_range(mut self, minimum: i32, maximum: i32) -> Self {
        self.set_range(minimum, maximum);
        self
    }

    /// Get the single step size.
    pub fn single_step(&self) -> i32 {
        self.single_step
    }

    /// Set the single step size.
    pub fn set_single_step(&mut self, step: i32) {
        self.single_step = step.max(1);
    }

    /// Set single step using builder pattern.
    pub fn with_single_step(mut self, step: i32) -> Self {
        self.set_single_step(step);
        self
    }

    /// Increase the value by one step.
    pub fn step_up(&mut self) {
        self.set_value(self.value.saturating_add(self.single_step));
    }

    /// Decrease the value by one step.
    pub fn step_down(&mut self) {
        self.set_value(self.value.saturating_sub(self.single_step));
    }

    // =========================================================================
    // Drag State
    // =========================================================================

    /// Check if the thumb is currently being dragged.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Mark the start of a thumb drag.
    ///
    /// While dragging, the slider captures all input.
    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// Mark the end of a thumb drag.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }
}

impl Default for Slider {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Slider {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn captures_input(&self) -> bool {
        self.base.captures_input() || self.dragging
    }

    fn accept_navigation(&mut self, request: NavigationRequest) -> bool {
        if self.captures_input() {
            return false;
        }
        if !self.is_navigable() {
            return false;
        }

        // A focused slider absorbs horizontal steps into its value. At the
        // ends of the range the offer falls through to the leaf protocol,
        // which releases focus toward the neighbor.
        if self.is_focused() && request.direction.is_horizontal() && !request.tab {
            let target = if request.is_forward() {
                self.value.saturating_add(self.single_step)
            } else {
                self.value.saturating_sub(self.single_step)
            };
            if target.clamp(self.minimum, self.maximum) != self.value {
                self.set_value(target);
                return true;
            }
        }

        let focused = !self.is_focused();
        self.set_focused(focused);
        self.is_focused()
    }
}

// Ensure Slider is Send + Sync
static_assertions::assert_impl_all!(Slider: Send, Sync);
