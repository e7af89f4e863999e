//! Nested clip-region management.
//!
//! This module provides [`ClipStack`], the push/pop discipline behind
//! scrollable and nested widget rendering. Every pushed rectangle is
//! intersected with the region already in effect, so a child widget can
//! never paint outside the region its ancestors granted it.
//!
//! # Key Types
//!
//! - [`ClipStack`] - Stack of nested clip regions with intersection semantics
//! - [`ClipGuard`] - Scope guard that pops its region when dropped
//!
//! # Example
//!
//! ```
//! use horizon_trellis_render::{ClipStack, Rect};
//!
//! let mut clips = ClipStack::new();
//! {
//!     let mut outer = clips.push_scope(Rect::new(0, 0, 100, 100));
//!     let inner = outer.push_scope(Rect::new(50, 50, 100, 100));
//!     assert_eq!(inner.current(), Some(Rect::new(50, 50, 50, 50)));
//! } // Both regions popped here
//! assert!(!clips.is_enabled());
//! ```

use crate::types::Rect;

/// Stack of nested clip regions.
///
/// The stack stores the resolved region for each level: pushing intersects
/// the new rectangle with the current top, so the top of the stack is always
/// the effective clip and popping restores the enclosing region without any
/// recomputation.
///
/// Clipping is active exactly while the stack is non-empty. Hosts apply
/// [`current`](Self::current) as scissor state: `Some(rect)` means scissor
/// to that rectangle, `None` means scissor off.
#[derive(Debug, Default)]
pub struct ClipStack {
    /// Resolved clip region per level, innermost last.
    levels: Vec<Rect>,
}

impl ClipStack {
    /// Create a new empty clip stack.
    pub fn new() -> Self {
        Self { levels: Vec::new() }
    }

    /// Push a clip rectangle onto the stack.
    ///
    /// The rectangle is intersected with the region currently in effect and
    /// the result becomes the new effective clip, which is also returned. A
    /// rectangle disjoint from the current region resolves to a zero-area
    /// region: nothing inside the scope will paint, but push/pop pairing is
    /// unaffected.
    pub fn push(&mut self, rect: Rect) -> Rect {
        let resolved = match self.levels.last() {
            Some(top) => rect.clamped_to(top),
            None => rect,
        };
        self.levels.push(resolved);
        tracing::trace!(
            target: "horizon_trellis_render::clip",
            depth = self.levels.len(),
            ?resolved,
            "pushed clip region"
        );
        resolved
    }

    /// Pop the innermost clip region, restoring the enclosing one.
    ///
    /// Returns the region now in effect, or `None` if the stack is empty
    /// again (clipping disabled).
    ///
    /// # Panics
    ///
    /// Panics if the stack is already empty. An unmatched pop is a bug in
    /// the calling render code, not a recoverable condition.
    pub fn pop(&mut self) -> Option<Rect> {
        assert!(
            !self.levels.is_empty(),
            "clip stack underflow: pop without matching push"
        );
        self.levels.pop();
        let restored = self.levels.last().copied();
        tracing::trace!(
            target: "horizon_trellis_render::clip",
            depth = self.levels.len(),
            ?restored,
            "popped clip region"
        );
        restored
    }

    /// Push a clip rectangle scoped to the returned guard.
    ///
    /// The region is popped when the guard drops, including on early return
    /// and unwind. Nested regions are pushed through the guard itself, which
    /// keeps pops in reverse push order.
    pub fn push_scope(&mut self, rect: Rect) -> ClipGuard<'_> {
        self.push(rect);
        ClipGuard { stack: self }
    }

    /// Get the effective clip region, the intersection of every pushed
    /// rectangle.
    ///
    /// Returns `None` while the stack is empty, meaning clipping is
    /// disabled and painting is unrestricted.
    #[inline]
    pub fn current(&self) -> Option<Rect> {
        self.levels.last().copied()
    }

    /// Check if any clip region is active.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        !self.levels.is_empty()
    }

    /// Get the current nesting depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Reset the stack to empty, discarding any active regions.
    ///
    /// Intended for frame boundaries after an aborted pass; balanced render
    /// code never needs it.
    pub fn reset(&mut self) {
        if !self.levels.is_empty() {
            tracing::warn!(
                target: "horizon_trellis_render::clip",
                depth = self.levels.len(),
                "resetting clip stack with active regions"
            );
        }
        self.levels.clear();
    }
}

/// Scope guard for a pushed clip region.
///
/// Created by [`ClipStack::push_scope`]. Dropping the guard pops the region
/// it pushed. Holding the guard mutably borrows the stack, so an enclosing
/// region cannot be popped while an inner scope is still alive.
#[must_use = "dropping the guard immediately pops the clip region"]
#[derive(Debug)]
pub struct ClipGuard<'a> {
    stack: &'a mut ClipStack,
}

impl ClipGuard<'_> {
    /// Push a nested clip region scoped to the returned guard.
    pub fn push_scope(&mut self, rect: Rect) -> ClipGuard<'_> {
        self.stack.push_scope(rect)
    }

    /// Get the effective clip region.
    #[inline]
    pub fn current(&self) -> Option<Rect> {
        self.stack.current()
    }

    /// Get the current nesting depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }
}

impl Drop for ClipGuard<'_> {
    fn drop(&mut self) {
        self.stack.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_stack_push_pop() {
        let mut stack = ClipStack::new();
        assert!(!stack.is_enabled());
        assert_eq!(stack.current(), None);

        let rect = Rect::new(0, 0, 100, 100);
        let resolved = stack.push(rect);
        assert_eq!(resolved, rect);
        assert_eq!(stack.current(), Some(rect));
        assert!(stack.is_enabled());

        let restored = stack.pop();
        assert_eq!(restored, None);
        assert!(!stack.is_enabled());
    }

    #[test]
    fn test_clip_stack_nested_intersection() {
        let mut stack = ClipStack::new();

        stack.push(Rect::new(0, 0, 100, 100));
        let inner = stack.push(Rect::new(50, 50, 100, 100));

        // The effective region is the overlap of both rectangles.
        assert_eq!(inner, Rect::new(50, 50, 50, 50));
        assert_eq!(stack.current(), Some(Rect::new(50, 50, 50, 50)));
        assert_eq!(stack.depth(), 2);

        // Popping restores the outer region exactly.
        assert_eq!(stack.pop(), Some(Rect::new(0, 0, 100, 100)));
        assert_eq!(stack.pop(), None);
        assert!(!stack.is_enabled());
    }

    #[test]
    fn test_clip_stack_deep_nesting() {
        let mut stack = ClipStack::new();

        stack.push(Rect::new(0, 0, 100, 100));
        stack.push(Rect::new(10, 10, 80, 80));
        stack.push(Rect::new(20, 20, 60, 60));
        assert_eq!(stack.depth(), 3);
        assert_eq!(stack.current(), Some(Rect::new(20, 20, 60, 60)));

        stack.pop();
        assert_eq!(stack.current(), Some(Rect::new(10, 10, 80, 80)));
        stack.pop();
        assert_eq!(stack.current(), Some(Rect::new(0, 0, 100, 100)));
        stack.pop();
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_clip_stack_disjoint_push() {
        let mut stack = ClipStack::new();

        stack.push(Rect::new(0, 0, 100, 100));
        let resolved = stack.push(Rect::new(200, 200, 50, 50));

        // Disjoint region clips everything out but stays on the stack.
        assert!(resolved.is_empty());
        assert!(stack.is_enabled());
        assert_eq!(stack.depth(), 2);

        // Pairing is unaffected.
        assert_eq!(stack.pop(), Some(Rect::new(0, 0, 100, 100)));
    }

    #[test]
    #[should_panic(expected = "clip stack underflow")]
    fn test_clip_stack_pop_empty_panics() {
        let mut stack = ClipStack::new();
        stack.pop();
    }

    #[test]
    fn test_clip_guard_restores_on_drop() {
        let mut stack = ClipStack::new();
        {
            let mut outer = stack.push_scope(Rect::new(0, 0, 100, 100));
            {
                let inner = outer.push_scope(Rect::new(50, 50, 100, 100));
                assert_eq!(inner.current(), Some(Rect::new(50, 50, 50, 50)));
                assert_eq!(inner.depth(), 2);
            }
            assert_eq!(outer.current(), Some(Rect::new(0, 0, 100, 100)));
        }
        assert!(!stack.is_enabled());
    }

    #[test]
    fn test_clip_guard_early_return() {
        fn render_row(stack: &mut ClipStack, skip: bool) {
            let _clip = stack.push_scope(Rect::new(0, 0, 50, 20));
            if skip {
                return; // Guard still pops
            }
            let _nested = stack_depth_probe(&_clip);
        }

        fn stack_depth_probe(guard: &ClipGuard<'_>) -> usize {
            guard.depth()
        }

        let mut stack = ClipStack::new();
        render_row(&mut stack, true);
        assert_eq!(stack.depth(), 0);
        render_row(&mut stack, false);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_clip_stack_reset() {
        let mut stack = ClipStack::new();
        stack.push(Rect::new(0, 0, 100, 100));
        stack.push(Rect::new(0, 0, 50, 50));

        stack.reset();
        assert_eq!(stack.depth(), 0);
        assert!(!stack.is_enabled());
    }
}
