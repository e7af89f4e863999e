//! Directional focus navigation.
//!
//! This module implements keyboard-driven focus traversal over sibling
//! widget lists. A [`Navigator`] owns the traversal policy for one
//! container and walks its children in response to a [`NavigationRequest`],
//! offering focus to each candidate until one accepts.
//!
//! # Key Types
//!
//! - [`Direction`] - The four spatial traversal directions
//! - [`NavigationRequest`] - A single traversal step (spatial or tab)
//! - [`Navigator`] - Walks a sibling list and updates its focus slot
//!
//! # Traversal
//!
//! A request is resolved in order:
//!
//! 1. An empty sibling list rejects immediately, with no state change.
//! 2. A focused child that captures all input consumes the request.
//! 3. With edge-hold enabled, a spatial request that would step past either
//!    end of the list is offered back to the focused child instead.
//! 4. Otherwise the focused child gets first refusal, then siblings are
//!    offered one by one in the request's direction.
//! 5. If every candidate declines, focus leaves the list entirely.
//!
//! Containers participate through [`Widget::accept_navigation`]: a container
//! runs its own `Navigator` over its children when offered focus, which is
//! how a single arrow key descends through nested containers.

use super::traits::Widget;

/// The four directions focus can travel.
///
/// Down and Right walk the sibling list toward its end; Up and Left walk
/// toward its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the start of the list (typically the W key or up arrow).
    Up,
    /// Toward the end of the list (typically the S key or down arrow).
    Down,
    /// Toward the start of the list, horizontally.
    Left,
    /// Toward the end of the list, horizontally.
    Right,
}

impl Direction {
    /// Check if this direction travels along the vertical axis.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Check if this direction travels along the horizontal axis.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Check if this direction walks toward the end of a sibling list.
    #[inline]
    pub fn is_forward(self) -> bool {
        matches!(self, Direction::Down | Direction::Right)
    }

    /// Get the reverse direction.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A single focus traversal step.
///
/// Spatial requests come from arrow keys and carry a [`Direction`]. Tab
/// requests reuse the vertical axis for ordering but bypass edge-hold, so
/// Tab always cycles out of a list that arrow keys would hold focus in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationRequest {
    /// The direction to walk the sibling list.
    pub direction: Direction,
    /// Whether this step came from Tab traversal rather than an arrow key.
    pub tab: bool,
}

impl NavigationRequest {
    /// Create a spatial request from an arrow direction.
    #[inline]
    pub fn spatial(direction: Direction) -> Self {
        Self {
            direction,
            tab: false,
        }
    }

    /// Create a forward Tab request.
    #[inline]
    pub fn tab() -> Self {
        Self {
            direction: Direction::Down,
            tab: true,
        }
    }

    /// Create a reverse (Shift+Tab) request.
    #[inline]
    pub fn backtab() -> Self {
        Self {
            direction: Direction::Up,
            tab: true,
        }
    }

    /// Check if this request walks toward the end of a sibling list.
    #[inline]
    pub fn is_forward(&self) -> bool {
        self.direction.is_forward()
    }
}

/// Walks a sibling list, offering focus until a child accepts.
///
/// Each container owns one `Navigator` and calls [`navigate`](Self::navigate)
/// with its child list and focus slot. The navigator mutates the slot and
/// the children's focus flags together so they can never disagree: after a
/// successful walk the slot names the child whose flag is set, and after a
/// failed walk the slot is empty and no flag is set.
///
/// # Edge-Hold
///
/// With [`edge_hold`](Self::set_edge_hold) enabled, a spatial request that
/// would walk past either end of the list is offered back to the focused
/// child instead of leaving. A child that declines that offer releases
/// focus entirely, which is how a held edge is deliberately exited. Tab
/// requests ignore edge-hold.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    /// Whether spatial requests stop at the ends of the list.
    edge_hold: bool,
}

impl Navigator {
    /// Create a navigator that lets focus leave past the list ends.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a navigator with the given edge-hold policy.
    pub fn with_edge_hold(edge_hold: bool) -> Self {
        Self { edge_hold }
    }

    /// Check if edge-hold is enabled.
    #[inline]
    pub fn edge_hold(&self) -> bool {
        self.edge_hold
    }

    /// Set whether spatial requests stop at the ends of the list.
    pub fn set_edge_hold(&mut self, edge_hold: bool) {
        self.edge_hold = edge_hold;
    }

    /// Walk the sibling list in response to a request.
    ///
    /// Offers focus to candidates starting from the focused child (or the
    /// appropriate end of the list when nothing is focused) and stepping in
    /// the request's direction. The first child to accept becomes the
    /// focused child; `focused` is updated to its index and `true` is
    /// returned. If no child accepts, any currently focused child loses
    /// focus, `focused` is cleared and `false` is returned.
    ///
    /// An empty list always returns `false` without touching any state.
    #[tracing::instrument(skip_all, target = "horizon_trellis::navigation", level = "trace")]
    pub fn navigate<W: Widget>(
        &self,
        children: &mut [W],
        focused: &mut Option<usize>,
        request: NavigationRequest,
    ) -> bool {
        if children.is_empty() {
            return false;
        }

        // A stale slot (child list shrank underneath it) is treated as no
        // focus rather than indexing out of bounds.
        let current = focused.filter(|&i| i < children.len());
        let forward = request.is_forward();

        tracing::trace!(
            target: "horizon_trellis::navigation",
            direction = ?request.direction,
            tab = request.tab,
            ?current,
            len = children.len(),
            "navigation request"
        );

        // A focused child that captures all input swallows the request. The
        // request is reported as handled so outer containers stop walking.
        if let Some(i) = current {
            if children[i].captures_input() {
                tracing::trace!(
                    target: "horizon_trellis::navigation",
                    index = i,
                    "focused child captures input, request consumed"
                );
                return true;
            }
        }

        // Edge-hold: a spatial step past either end is offered back to the
        // focused child. Declining the offer releases focus.
        if !request.tab && self.edge_hold {
            if let Some(i) = current {
                let at_edge =
                    (!forward && i == 0) || (forward && i == children.len() - 1);
                if at_edge {
                    if children[i].accept_navigation(request) {
                        children[i].set_focused(true);
                        return true;
                    }
                    apply_focus(children, focused, None);
                    return false;
                }
            }
        }

        // The focused child gets first refusal. A container uses this to
        // move focus within its own subtree without the slot changing.
        if let Some(i) = current {
            if children[i].accept_navigation(request) {
                return true;
            }
        }

        // Walk the remaining siblings in the request's direction.
        let start = match current {
            Some(i) => {
                if forward {
                    i + 1
                } else {
                    i
                }
            }
            None => {
                if forward {
                    0
                } else {
                    children.len()
                }
            }
        };

        let accepted = if forward {
            (start..children.len()).find(|&j| children[j].accept_navigation(request))
        } else {
            (0..start)
                .rev()
                .find(|&j| children[j].accept_navigation(request))
        };

        match accepted {
            Some(j) => {
                apply_focus(children, focused, Some(j));
                true
            }
            None => {
                apply_focus(children, focused, None);
                false
            }
        }
    }
}

/// Move the focus slot, keeping child flags in step with it.
///
/// The previously focused child (if different) loses its flag before the
/// new child's flag is asserted. Flag updates go through the guarded
/// setter, so a child whose flag already matches emits nothing.
fn apply_focus<W: Widget>(children: &mut [W], focused: &mut Option<usize>, next: Option<usize>) {
    if *focused != next {
        if let Some(old) = *focused {
            if old < children.len() {
                children[old].set_focused(false);
            }
        }
    }
    if let Some(new) = next {
        children[new].set_focused(true);
    }
    tracing::trace!(
        target: "horizon_trellis::focus",
        from = ?*focused,
        to = ?next,
        "focus slot moved"
    );
    *focused = next;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_axes() {
        assert!(Direction::Up.is_vertical());
        assert!(Direction::Down.is_vertical());
        assert!(Direction::Left.is_horizontal());
        assert!(Direction::Right.is_horizontal());
        assert!(!Direction::Up.is_horizontal());
        assert!(!Direction::Left.is_vertical());
    }

    #[test]
    fn test_direction_forward() {
        assert!(Direction::Down.is_forward());
        assert!(Direction::Right.is_forward());
        assert!(!Direction::Up.is_forward());
        assert!(!Direction::Left.is_forward());
    }

    #[test]
    fn test_direction_opposite() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn test_tab_requests_use_vertical_axis() {
        let forward = NavigationRequest::tab();
        assert_eq!(forward.direction, Direction::Down);
        assert!(forward.tab);
        assert!(forward.is_forward());

        let reverse = NavigationRequest::backtab();
        assert_eq!(reverse.direction, Direction::Up);
        assert!(reverse.tab);
        assert!(!reverse.is_forward());
    }

    #[test]
    fn test_spatial_request() {
        let request = NavigationRequest::spatial(Direction::Right);
        assert_eq!(request.direction, Direction::Right);
        assert!(!request.tab);
    }

    #[test]
    fn test_navigator_default_lets_focus_leave() {
        let navigator = Navigator::new();
        assert!(!navigator.edge_hold());

        let mut held = Navigator::with_edge_hold(true);
        assert!(held.edge_hold());
        held.set_edge_hold(false);
        assert!(!held.edge_hold());
    }
}
