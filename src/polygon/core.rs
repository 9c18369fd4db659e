//! Core polygon type and basic queries.

use crate::primitives::{Point2, Rect2};
use num_traits::PrimInt;

/// A simple rectilinear polygon represented as a closed ring of vertices.
///
/// The ring is implicitly closed (the last vertex connects to the first) and
/// may be given in either winding; the partitioner normalizes orientation
/// itself. Every edge must be axis-aligned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon<I> {
    /// The vertices of the boundary ring.
    pub points: Vec<Point2<I>>,
}

impl<I: PrimInt> Polygon<I> {
    /// Creates a new polygon from a vertex ring.
    #[inline]
    pub fn new(points: Vec<Point2<I>>) -> Self {
        Self { points }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the polygon with the opposite winding.
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// Returns the axis-aligned bounding rectangle, or `None` when empty.
    pub fn bounding_rect(&self) -> Option<Rect2<I>> {
        let mut iter = self.points.iter();
        let first = *iter.next()?;
        let mut min = first;
        let mut max = first;
        for &p in iter {
            min = min.min_components(p);
            max = max.max_components(p);
        }
        Some(Rect2::new(min, max))
    }

    /// Returns `true` if the ring is wound clockwise (with y growing upward).
    ///
    /// Uses the bottom-edge rule for rectilinear rings: the interior lies
    /// above the lowest horizontal edge, so that edge runs in `-x` exactly
    /// when the ring is clockwise. Comparison-only, so arbitrary coordinate
    /// magnitudes are safe.
    pub fn is_clockwise(&self) -> bool {
        let n = self.points.len();
        let mut bottom: Option<(Point2<I>, Point2<I>)> = None;
        for i in 0..n {
            let from = self.points[i];
            let to = self.points[(i + 1) % n];
            if from.y == to.y {
                match bottom {
                    Some((b, _)) if b.y <= from.y => {}
                    _ => bottom = Some((from, to)),
                }
            }
        }
        match bottom {
            Some((from, to)) => to.x < from.x,
            None => false,
        }
    }
}
