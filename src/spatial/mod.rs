//! Spatial data structures and queries.
//!
//! - [`IntervalTree`] - a centered interval tree for stabbing queries over
//!   closed integer intervals, with removal and re-insertion for live edge
//!   sets

mod interval_tree;

pub use interval_tree::{Interval, IntervalTree};
