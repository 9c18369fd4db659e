//! Bipartite matching and independent-set selection.
//!
//! The partitioner models chord crossings as a bipartite graph (horizontal
//! chords on one side, vertical on the other) and cuts along a maximum
//! non-crossing subset, which is a maximum independent set of that graph:
//!
//! - [`hopcroft_karp`] - maximum bipartite matching in O(E √V)
//! - [`maximum_independent_set`] - König's-theorem complement of a minimum
//!   vertex cover derived from the matching

mod hopcroft_karp;
mod independent_set;

pub use hopcroft_karp::{hopcroft_karp, Matching};
pub use independent_set::{maximum_independent_set, IndependentSet};
