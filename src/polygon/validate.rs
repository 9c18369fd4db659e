//! Input-contract checks for rectilinear polygons.

use crate::error::PartitionError;
use crate::polygon::Polygon;
use num_traits::PrimInt;

/// Checks the rectilinear input contract.
///
/// A partitionable ring has at least four vertices, an even vertex count,
/// every edge axis-aligned with nonzero length, and consecutive edges on
/// alternating axes (no collinear triples). The first offending vertex is
/// reported in [`PartitionError::MalformedPolygon`].
///
/// # Example
///
/// ```
/// use rectilin::polygon::{validate_rectilinear, Polygon};
/// use rectilin::Point2;
///
/// let square = Polygon::new(vec![
///     Point2::new(0, 0),
///     Point2::new(1, 0),
///     Point2::new(1, 1),
///     Point2::new(0, 1),
/// ]);
/// assert!(validate_rectilinear(&square).is_ok());
///
/// let triangle = Polygon::new(vec![
///     Point2::new(0, 0),
///     Point2::new(2, 0),
///     Point2::new(1, 1),
/// ]);
/// assert!(validate_rectilinear(&triangle).is_err());
/// ```
pub fn validate_rectilinear<I: PrimInt>(polygon: &Polygon<I>) -> Result<(), PartitionError> {
    let n = polygon.points.len();
    if n < 4 || n % 2 != 0 {
        return Err(PartitionError::MalformedPolygon { index: 0 });
    }

    for i in 0..n {
        let prev = polygon.points[(i + n - 1) % n];
        let curr = polygon.points[i];
        let next = polygon.points[(i + 1) % n];

        let incoming_vertical = prev.x == curr.x && prev.y != curr.y;
        let incoming_horizontal = prev.y == curr.y && prev.x != curr.x;
        if !incoming_vertical && !incoming_horizontal {
            // Zero-length or diagonal edge.
            return Err(PartitionError::MalformedPolygon { index: i });
        }

        // Consecutive edges must alternate axes.
        let outgoing_vertical = curr.x == next.x && curr.y != next.y;
        let outgoing_horizontal = curr.y == next.y && curr.x != next.x;
        let alternates = (incoming_vertical && outgoing_horizontal)
            || (incoming_horizontal && outgoing_vertical);
        if !alternates {
            return Err(PartitionError::MalformedPolygon { index: i });
        }
    }

    Ok(())
}
