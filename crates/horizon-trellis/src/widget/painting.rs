//! Clipped rendering of widget trees.
//!
//! This module provides the infrastructure for painting widget trees:
//!
//! - [`RenderPass`]: Carries the clip stack through one traversal of the tree
//! - [`FrameStats`]: Counters describing what a pass touched
//!
//! # Render Flow
//!
//! 1. The host creates a [`RenderPass`] at the start of a frame
//! 2. It calls [`Widget::render`](super::Widget::render) on the tree root
//! 3. Containers scope their children inside [`RenderPass::with_clip`],
//!    nesting regions as the traversal descends
//! 4. The host calls [`RenderPass::finish`], which verifies every pushed
//!    region was popped and returns the frame's statistics
//!
//! The pass does not draw anything itself. Hosts watch
//! [`RenderPass::clip`] (typically by mapping it onto scissor state in
//! their own renderer) while widgets paint through whatever drawing API the
//! host provides.
//!
//! # Example
//!
//! ```ignore
//! use horizon_trellis::widget::{RenderPass, Widget};
//!
//! let mut pass = RenderPass::new();
//! root.render(&mut pass);
//! let stats = pass.finish();
//! tracing::debug!(?stats, "frame complete");
//! ```

use horizon_trellis_render::{ClipStack, Rect};

use super::base::WidgetBase;

/// Counters for one render pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameStats {
    /// Number of widgets visited.
    pub widgets_visited: u32,
    /// Number of widgets skipped because they fell outside the clip region.
    pub widgets_culled: u32,
    /// Number of clip regions entered.
    pub clip_regions: u32,
    /// Deepest clip nesting reached.
    pub max_clip_depth: u32,
}

/// Drives one clipped traversal of a widget tree.
///
/// The pass owns a [`ClipStack`] and keeps it balanced structurally:
/// regions are only entered through [`with_clip`](Self::with_clip), which
/// pops when the closure returns, on any path out of it.
#[derive(Debug, Default)]
pub struct RenderPass {
    clips: ClipStack,
    stats: FrameStats,
}

impl RenderPass {
    /// Create a new render pass with no active clip region.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the effective clip region.
    ///
    /// `None` means clipping is disabled and painting is unrestricted.
    /// Hosts map this onto scissor state before executing a widget's draw
    /// commands.
    #[inline]
    pub fn clip(&self) -> Option<Rect> {
        self.clips.current()
    }

    /// Check if a rectangle is at least partially visible under the
    /// current clip region.
    ///
    /// Containers use this to skip children that cannot produce any
    /// pixels.
    pub fn is_rect_visible(&self, rect: Rect) -> bool {
        if rect.is_empty() {
            return false;
        }
        match self.clips.current() {
            Some(clip) => clip.intersects(&rect),
            None => true,
        }
    }

    /// Run `f` with `rect` intersected onto the clip stack.
    ///
    /// The region is entered before `f` and left when `f` returns, so
    /// nesting follows the call structure of the widget tree and can never
    /// go unbalanced.
    pub fn with_clip<R>(&mut self, rect: Rect, f: impl FnOnce(&mut Self) -> R) -> R {
        self.clips.push(rect);
        self.stats.clip_regions += 1;
        self.stats.max_clip_depth = self.stats.max_clip_depth.max(self.clips.depth() as u32);
        let result = f(self);
        self.clips.pop();
        result
    }

    /// Record a widget visit.
    ///
    /// Widgets call this at the top of their `render` implementation.
    pub fn note_widget(&mut self, base: &WidgetBase) {
        self.stats.widgets_visited += 1;
        tracing::trace!(
            target: "horizon_trellis::widget",
            widget = %base.name(),
            clip = ?self.clips.current(),
            "rendering widget"
        );
    }

    /// Record a widget skipped by visibility culling.
    pub fn note_culled(&mut self) {
        self.stats.widgets_culled += 1;
    }

    /// Get the statistics accumulated so far.
    #[inline]
    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Finish the pass and return its statistics.
    ///
    /// # Panics
    ///
    /// Panics if any clip region is still active. A region surviving the
    /// traversal means a widget pushed outside of
    /// [`with_clip`](Self::with_clip), which is a bug in that widget.
    pub fn finish(self) -> FrameStats {
        assert_eq!(
            self.clips.depth(),
            0,
            "render pass finished with active clip regions"
        );
        tracing::trace!(
            target: "horizon_trellis::widget",
            widgets_visited = self.stats.widgets_visited,
            widgets_culled = self.stats.widgets_culled,
            clip_regions = self.stats.clip_regions,
            max_clip_depth = self.stats.max_clip_depth,
            "render pass finished"
        );
        self.stats
    }
}
