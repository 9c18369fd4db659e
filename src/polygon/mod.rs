//! Rectilinear polygon representation and partitioning.
//!
//! This module provides:
//! - The [`Polygon`] ring type and basic queries
//! - Input-contract validation for rectilinear rings
//! - [`partition`] - decomposition into a minimum number of rectangles
//!
//! # Example
//!
//! ```
//! use rectilin::polygon::{partition, Polygon};
//! use rectilin::Point2;
//!
//! // A plus sign needs three rectangles.
//! let plus = Polygon::new(vec![
//!     Point2::new(1, 0),
//!     Point2::new(2, 0),
//!     Point2::new(2, 1),
//!     Point2::new(3, 1),
//!     Point2::new(3, 2),
//!     Point2::new(2, 2),
//!     Point2::new(2, 3),
//!     Point2::new(1, 3),
//!     Point2::new(1, 2),
//!     Point2::new(0, 2),
//!     Point2::new(0, 1),
//!     Point2::new(1, 1),
//! ]);
//!
//! assert_eq!(partition(&plus).unwrap().len(), 3);
//! ```

mod boundary;
mod core;
mod partition;
mod validate;

pub use self::core::Polygon;
pub use self::partition::partition;
pub use self::validate::validate_rectilinear;
