//! Basic geometry types for clipping and layout.
//!
//! This module provides the fundamental types used throughout the clipping
//! system. All coordinates are integer device pixels: clip regions are
//! handed to GPU scissor state, which has no use for fractional edges.

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<[i32; 2]> for Point {
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

/// A size in 2D space (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Check if the size has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl From<(i32, i32)> for Size {
    fn from((width, height): (i32, i32)) -> Self {
        Self { width, height }
    }
}

/// A rectangle defined by origin and size.
///
/// The right and bottom edges are exclusive: a rectangle at (0, 0) with
/// size 100x100 covers pixels 0..=99 on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle from origin and size.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    /// Create a rectangle from two corners (min and max points).
    #[inline]
    pub fn from_corners(min: Point, max: Point) -> Self {
        Self {
            origin: min,
            size: Size {
                width: max.x - min.x,
                height: max.y - min.y,
            },
        }
    }

    /// Empty rectangle at origin.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Left edge x coordinate.
    #[inline]
    pub fn left(&self) -> i32 {
        self.origin.x
    }

    /// Top edge y coordinate.
    #[inline]
    pub fn top(&self) -> i32 {
        self.origin.y
    }

    /// Right edge x coordinate (exclusive).
    #[inline]
    pub fn right(&self) -> i32 {
        self.origin.x + self.size.width
    }

    /// Bottom edge y coordinate (exclusive).
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.origin.y + self.size.height
    }

    /// Width of the rectangle.
    #[inline]
    pub fn width(&self) -> i32 {
        self.size.width
    }

    /// Height of the rectangle.
    #[inline]
    pub fn height(&self) -> i32 {
        self.size.height
    }

    /// Check if the rectangle is empty (zero or negative size).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Compute the intersection of two rectangles.
    ///
    /// Returns `None` if the rectangles do not overlap.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if left < right && top < bottom {
            Some(Rect::new(left, top, right - left, bottom - top))
        } else {
            None
        }
    }

    /// Check if two rectangles overlap.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Clamp this rectangle to lie within `bounds`.
    ///
    /// Where the rectangles overlap this is their intersection. A rectangle
    /// disjoint from `bounds` clamps to a zero-area rectangle pinned to the
    /// nearest edge of `bounds`, which stays well-formed but admits nothing.
    pub fn clamped_to(&self, bounds: &Rect) -> Rect {
        let left = self.left().clamp(bounds.left(), bounds.right());
        let top = self.top().clamp(bounds.top(), bounds.bottom());
        let right = self.right().clamp(bounds.left(), bounds.right());
        let bottom = self.bottom().clamp(bounds.top(), bounds.bottom());
        Rect::new(left, top, (right - left).max(0), (bottom - top).max(0))
    }

    /// Offset the rectangle by the given amount.
    #[inline]
    pub fn offset(&self, dx: i32, dy: i32) -> Rect {
        Rect {
            origin: Point {
                x: self.origin.x + dx,
                y: self.origin.y + dy,
            },
            size: self.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_creation() {
        let p = Point::new(1, 2);
        assert_eq!(p.x, 1);
        assert_eq!(p.y, 2);

        let p2: Point = (3, 4).into();
        assert_eq!(p2.x, 3);
        assert_eq!(p2.y, 4);
    }

    #[test]
    fn test_rect_geometry() {
        let r = Rect::new(10, 20, 100, 50);
        assert_eq!(r.left(), 10);
        assert_eq!(r.top(), 20);
        assert_eq!(r.right(), 110);
        assert_eq!(r.bottom(), 70);
        assert_eq!(r.width(), 100);
        assert_eq!(r.height(), 50);
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(0, 0, 100, 100);
        assert!(r.contains(Point::new(50, 50)));
        assert!(r.contains(Point::new(0, 0)));
        assert!(!r.contains(Point::new(100, 100))); // Right/bottom edge is exclusive
        assert!(!r.contains(Point::new(-1, 50)));
    }

    #[test]
    fn test_rect_intersect() {
        let r1 = Rect::new(0, 0, 100, 100);
        let r2 = Rect::new(50, 50, 100, 100);

        let intersection = r1.intersect(&r2).unwrap();
        assert_eq!(intersection, Rect::new(50, 50, 50, 50));

        let r3 = Rect::new(200, 200, 50, 50);
        assert!(r1.intersect(&r3).is_none());
        assert!(!r1.intersects(&r3));
        assert!(r1.intersects(&r2));
    }

    #[test]
    fn test_rect_intersect_touching_edges() {
        // Rectangles sharing only an edge have no interior overlap.
        let r1 = Rect::new(0, 0, 50, 50);
        let r2 = Rect::new(50, 0, 50, 50);
        assert!(r1.intersect(&r2).is_none());
        assert!(!r1.intersects(&r2));
    }

    #[test]
    fn test_rect_clamped_to() {
        let bounds = Rect::new(0, 0, 100, 100);

        // Overlapping: same as intersection.
        let r = Rect::new(50, 50, 100, 100);
        assert_eq!(r.clamped_to(&bounds), Rect::new(50, 50, 50, 50));

        // Fully inside: unchanged.
        let inner = Rect::new(10, 10, 20, 20);
        assert_eq!(inner.clamped_to(&bounds), inner);

        // Disjoint: zero-area rect pinned to the nearest bounds edge.
        let outside = Rect::new(200, 40, 50, 20);
        let clamped = outside.clamped_to(&bounds);
        assert!(clamped.is_empty());
        assert_eq!(clamped.left(), 100);
    }

    #[test]
    fn test_rect_offset() {
        let r = Rect::new(10, 10, 30, 30);
        let moved = r.offset(5, -10);
        assert_eq!(moved, Rect::new(15, 0, 30, 30));
        assert_eq!(moved.size, r.size);
    }

    #[test]
    fn test_empty_rect() {
        assert!(Rect::ZERO.is_empty());
        assert!(Rect::new(10, 10, 0, 50).is_empty());
        assert!(Rect::new(10, 10, -5, 50).is_empty());
        assert!(!Rect::new(10, 10, 1, 1).is_empty());
    }
}
