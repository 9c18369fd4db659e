//! Cyclic doubly-linked boundary of a polygon under surgery.
//!
//! Cyclic `next`/`prev` links cannot be expressed with owning references, so
//! the boundary is an arena: a flat `Vec` of vertex records addressed by
//! index handles. Chord splitting and concave resolution rewrite the links in
//! place, turning the single input cycle into one cycle per output face.
//!
//! Every link mutation goes through [`Boundary::set_next`] /
//! [`Boundary::set_prev`], which record the previous value into a backup slot
//! when the value actually changes. Face extraction uses those backups to
//! recover the extents of faces that a splice collapsed to zero area.

use crate::error::PartitionError;
use crate::primitives::Point2;
use num_traits::PrimInt;

/// Handle of a vertex in a [`Boundary`] arena.
pub(crate) type VertexId = usize;

#[derive(Debug, Clone)]
struct Vertex<I> {
    point: Point2<I>,
    /// Position in the input ring; cut vertices reuse their arena index.
    ring_index: usize,
    concave: bool,
    next: VertexId,
    prev: VertexId,
    backup_next: Option<VertexId>,
    backup_prev: Option<VertexId>,
    visited: bool,
}

/// An arena of boundary vertices forming one or more simple cycles.
#[derive(Debug, Clone)]
pub(crate) struct Boundary<I> {
    verts: Vec<Vertex<I>>,
    ring_len: usize,
}

impl<I: PrimInt> Boundary<I> {
    /// Builds the boundary of a clockwise rectilinear ring, classifying each
    /// vertex as convex or concave.
    ///
    /// At a corner with a vertical incoming edge, the corner is reflex
    /// exactly when the incoming direction (`+y` or `-y`) and the outgoing
    /// direction (`-x` or `+x`) agree; with a horizontal incoming edge the
    /// test flips. Two successive edges on the same axis are malformed.
    pub(crate) fn from_ring(points: &[Point2<I>]) -> Result<Self, PartitionError> {
        let n = points.len();
        let mut verts = Vec::with_capacity(n);

        for i in 0..n {
            let prev = points[(i + n - 1) % n];
            let curr = points[i];
            let next = points[(i + 1) % n];

            let concave = if prev.x == curr.x && prev.y != curr.y {
                // Incoming edge vertical; outgoing must be horizontal.
                if curr.y != next.y || curr.x == next.x {
                    return Err(PartitionError::MalformedPolygon { index: i });
                }
                (prev.y < curr.y) == (curr.x > next.x)
            } else if prev.y == curr.y && prev.x != curr.x {
                // Incoming edge horizontal; outgoing must be vertical.
                if curr.x != next.x || curr.y == next.y {
                    return Err(PartitionError::MalformedPolygon { index: i });
                }
                (prev.x < curr.x) != (curr.y > next.y)
            } else {
                return Err(PartitionError::MalformedPolygon { index: i });
            };

            verts.push(Vertex {
                point: curr,
                ring_index: i,
                concave,
                next: (i + 1) % n,
                prev: (i + n - 1) % n,
                backup_next: None,
                backup_prev: None,
                visited: false,
            });
        }

        Ok(Self { verts, ring_len: n })
    }

    /// Number of vertices in the arena, including cut vertices.
    pub(crate) fn len(&self) -> usize {
        self.verts.len()
    }

    /// Number of vertices in the original input ring.
    pub(crate) fn ring_len(&self) -> usize {
        self.ring_len
    }

    pub(crate) fn point(&self, v: VertexId) -> Point2<I> {
        self.verts[v].point
    }

    pub(crate) fn ring_index(&self, v: VertexId) -> usize {
        self.verts[v].ring_index
    }

    pub(crate) fn next(&self, v: VertexId) -> VertexId {
        self.verts[v].next
    }

    pub(crate) fn prev(&self, v: VertexId) -> VertexId {
        self.verts[v].prev
    }

    pub(crate) fn backup_next(&self, v: VertexId) -> Option<VertexId> {
        self.verts[v].backup_next
    }

    pub(crate) fn backup_prev(&self, v: VertexId) -> Option<VertexId> {
        self.verts[v].backup_prev
    }

    pub(crate) fn is_concave(&self, v: VertexId) -> bool {
        self.verts[v].concave
    }

    pub(crate) fn clear_concave(&mut self, v: VertexId) {
        self.verts[v].concave = false;
    }

    /// Handles of all currently concave vertices, in arena order.
    pub(crate) fn concave_ids(&self) -> Vec<VertexId> {
        (0..self.verts.len())
            .filter(|&v| self.verts[v].concave)
            .collect()
    }

    pub(crate) fn is_visited(&self, v: VertexId) -> bool {
        self.verts[v].visited
    }

    pub(crate) fn mark_visited(&mut self, v: VertexId) {
        self.verts[v].visited = true;
    }

    /// Sets the successor of `v`, backing up the old link if it changes.
    pub(crate) fn set_next(&mut self, v: VertexId, to: VertexId) {
        let old = self.verts[v].next;
        if old != to {
            self.verts[v].backup_next = Some(old);
            self.verts[v].next = to;
        }
    }

    /// Sets the predecessor of `v`, backing up the old link if it changes.
    pub(crate) fn set_prev(&mut self, v: VertexId, to: VertexId) {
        let old = self.verts[v].prev;
        if old != to {
            self.verts[v].backup_prev = Some(old);
            self.verts[v].prev = to;
        }
    }

    /// Appends a convex cut vertex, initially linked to itself.
    pub(crate) fn push_steiner(&mut self, point: Point2<I>) -> VertexId {
        let id = self.verts.len();
        self.verts.push(Vertex {
            point,
            ring_index: id,
            concave: false,
            next: id,
            prev: id,
            backup_next: None,
            backup_prev: None,
            visited: false,
        });
        id
    }

    /// Checks `v.next.prev == v` and `v.prev.next == v` for every vertex.
    #[cfg(test)]
    pub(crate) fn links_consistent(&self) -> bool {
        (0..self.verts.len()).all(|v| {
            self.verts[self.verts[v].next].prev == v && self.verts[self.verts[v].prev].next == v
        })
    }
}
