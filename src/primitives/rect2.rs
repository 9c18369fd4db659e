//! Axis-aligned integer rectangle.

use crate::primitives::Point2;
use num_traits::PrimInt;

/// A 2D axis-aligned rectangle with integer corners.
///
/// Defined by minimum and maximum corners. Every rectangle the partitioner
/// emits has strictly positive extent on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect2<I> {
    /// Minimum corner (smallest x and y values).
    pub min: Point2<I>,
    /// Maximum corner (largest x and y values).
    pub max: Point2<I>,
}

impl<I: PrimInt> Rect2<I> {
    /// Creates a new rectangle from min and max corners.
    ///
    /// Does not validate that `min <= max`.
    #[inline]
    pub fn new(min: Point2<I>, max: Point2<I>) -> Self {
        Self { min, max }
    }

    /// Creates a rectangle from two arbitrary corners.
    ///
    /// Correctly handles corners in any orientation.
    #[inline]
    pub fn from_corners(a: Point2<I>, b: Point2<I>) -> Self {
        Self {
            min: a.min_components(b),
            max: a.max_components(b),
        }
    }

    /// Returns the width of the rectangle.
    #[inline]
    pub fn width(self) -> I {
        self.max.x - self.min.x
    }

    /// Returns the height of the rectangle.
    #[inline]
    pub fn height(self) -> I {
        self.max.y - self.min.y
    }

    /// Returns the area of the rectangle.
    #[inline]
    pub fn area(self) -> I {
        self.width() * self.height()
    }

    /// Returns `true` if the rectangle contains the given point.
    ///
    /// Containment is closed: boundary points are inside.
    #[inline]
    pub fn contains_point(self, p: Point2<I>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Returns `true` if the interiors of two rectangles overlap.
    ///
    /// Rectangles that merely share an edge or a corner do not count.
    #[inline]
    pub fn intersects_interior(self, other: Self) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}
