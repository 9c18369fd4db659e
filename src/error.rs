//! Error types for partitioning operations.

use thiserror::Error;

/// Errors that can occur while partitioning a rectilinear polygon.
///
/// All errors are fatal to the call that raised them; no partial result is
/// observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PartitionError {
    /// Two consecutive edges share an axis, an edge is degenerate, or the
    /// input otherwise violates the rectilinear input contract.
    #[error("malformed polygon at vertex {index}")]
    MalformedPolygon {
        /// Index of the first offending vertex in the input ring.
        index: usize,
    },

    /// Face extraction produced a zero-area face that could not be repaired
    /// from its backup links. Indicates an internal invariant breach.
    #[error("face extraction produced an irreparable zero-area face")]
    DegenerateFace,

    /// The alternating search stepped to a vertex with no matching partner.
    /// Indicates a bug in the matching stage or its input graph.
    #[error("alternating search reached an unmatched vertex")]
    UnreachableMatching,
}
