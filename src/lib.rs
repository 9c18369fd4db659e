//! rectilin - optimal rectilinear polygon partitioning
//!
//! Decomposes a simple axis-aligned polygon with integer coordinates into
//! the *minimum* number of axis-aligned rectangles whose union is the
//! polygon and whose interiors are disjoint.
//!
//! Minimality comes from cutting along a maximum non-crossing set of chords
//! between reflex vertices, found as a maximum independent set of the
//! bipartite chord-crossing graph via Hopcroft–Karp matching and König's
//! theorem; the supporting pieces (interval trees, the matching itself) are
//! exposed for direct use.
//!
//! # Example
//!
//! ```
//! use rectilin::{partition, Point2, Polygon};
//!
//! let l_shape = Polygon::new(vec![
//!     Point2::new(0, 0),
//!     Point2::new(2, 0),
//!     Point2::new(2, 1),
//!     Point2::new(1, 1),
//!     Point2::new(1, 2),
//!     Point2::new(0, 2),
//! ]);
//!
//! let rects = partition(&l_shape).unwrap();
//! assert_eq!(rects.len(), 2);
//! ```

pub mod error;
pub mod matching;
pub mod polygon;
pub mod primitives;
pub mod spatial;

pub use error::PartitionError;
pub use polygon::{partition, Polygon};
pub use primitives::{Point2, Rect2};
