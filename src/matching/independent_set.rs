//! Maximum independent set in a bipartite graph via König's theorem.
//!
//! In a bipartite graph the size of a maximum matching equals the size of a
//! minimum vertex cover, and the complement of a minimum cover is a maximum
//! independent set. The cover is recovered from a maximum matching by the
//! alternating reachability argument: seed from every unmatched vertex of one
//! partition, cross to the other side along any edge, and return along
//! matching edges.

use crate::error::PartitionError;
use crate::matching::hopcroft_karp;

/// A maximum independent vertex set of a bipartite graph, one index list per
/// partition.
#[derive(Debug, Clone)]
pub struct IndependentSet {
    /// Selected vertices of the left partition.
    pub left: Vec<usize>,
    /// Selected vertices of the right partition.
    pub right: Vec<usize>,
}

impl IndependentSet {
    /// Total number of selected vertices.
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    /// Returns `true` if no vertex was selected.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

/// Computes a maximum independent set of a bipartite graph.
///
/// Vertices are labelled `0..left` and `0..right` within their own
/// partitions; `edges` holds `(left, right)` pairs. The result has exactly
/// `left + right - maximum_matching` vertices.
///
/// The alternation is seeded from the unmatched right vertices and runs as an
/// explicit work-list. Reaching an unmatched left vertex would mean the
/// matching missed an augmenting path, which a maximum matching rules out;
/// it is reported as [`PartitionError::UnreachableMatching`].
///
/// # Example
///
/// ```
/// use rectilin::matching::maximum_independent_set;
///
/// // Two crossing pairs: at most one side of each crossing survives.
/// let set = maximum_independent_set(2, 2, &[(0, 0), (0, 1), (1, 0), (1, 1)]).unwrap();
/// assert_eq!(set.len(), 2);
/// ```
pub fn maximum_independent_set(
    left: usize,
    right: usize,
    edges: &[(usize, usize)],
) -> Result<IndependentSet, PartitionError> {
    let matching = hopcroft_karp(left, right, edges);

    let mut adj_right = vec![Vec::new(); right];
    for &(l, r) in edges {
        adj_right[r].push(l);
    }

    let mut visit_left = vec![false; left];
    let mut visit_right = vec![false; right];
    let mut work: Vec<usize> = (0..right)
        .filter(|&r| matching.pair_right[r].is_none())
        .collect();

    while let Some(r) = work.pop() {
        if visit_right[r] {
            continue;
        }
        visit_right[r] = true;
        for &l in &adj_right[r] {
            if visit_left[l] {
                continue;
            }
            visit_left[l] = true;
            let partner = matching.pair_left[l].ok_or(PartitionError::UnreachableMatching)?;
            work.push(partner);
        }
    }

    // König: the unvisited-left / visited-right vertices avoid every edge,
    // and their complement is a minimum vertex cover.
    Ok(IndependentSet {
        left: (0..left).filter(|&l| !visit_left[l]).collect(),
        right: (0..right).filter(|&r| visit_right[r]).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_independent(set: &IndependentSet, edges: &[(usize, usize)]) {
        for &(l, r) in edges {
            assert!(
                !(set.left.contains(&l) && set.right.contains(&r)),
                "edge ({}, {}) inside the set",
                l,
                r
            );
        }
    }

    fn check_size(set: &IndependentSet, left: usize, right: usize, edges: &[(usize, usize)]) {
        let matching = hopcroft_karp(left, right, edges);
        assert_eq!(set.len(), left + right - matching.len);
    }

    #[test]
    fn test_no_edges() {
        let set = maximum_independent_set(3, 2, &[]).unwrap();
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn test_single_edge() {
        let edges = [(0, 0)];
        let set = maximum_independent_set(1, 1, &edges).unwrap();
        assert_eq!(set.len(), 1);
        check_independent(&set, &edges);
    }

    #[test]
    fn test_star_keeps_leaves() {
        // One left vertex adjacent to three right vertices: the three
        // leaves are the unique maximum set.
        let edges = [(0, 0), (0, 1), (0, 2)];
        let set = maximum_independent_set(1, 3, &edges).unwrap();
        assert_eq!(set.left, Vec::<usize>::new());
        assert_eq!(set.right, vec![0, 1, 2]);
        check_independent(&set, &edges);
    }

    #[test]
    fn test_complete_bipartite() {
        let mut edges = Vec::new();
        for l in 0..3 {
            for r in 0..4 {
                edges.push((l, r));
            }
        }
        let set = maximum_independent_set(3, 4, &edges).unwrap();
        assert_eq!(set.len(), 4);
        check_independent(&set, &edges);
        check_size(&set, 3, 4, &edges);
    }

    #[test]
    fn test_crossing_pairs() {
        // The K2,2 arising from the plus-sign polygon: two horizontal and
        // two vertical chords, every pair crossing.
        let edges = [(0, 0), (0, 1), (1, 0), (1, 1)];
        let set = maximum_independent_set(2, 2, &edges).unwrap();
        assert_eq!(set.len(), 2);
        check_independent(&set, &edges);
    }

    #[test]
    fn test_path_graph() {
        // l0-r0, l0-r1, l1-r1: matching 2, set size 2.
        let edges = [(0, 0), (0, 1), (1, 1)];
        let set = maximum_independent_set(2, 2, &edges).unwrap();
        assert_eq!(set.len(), 2);
        check_independent(&set, &edges);
    }

    #[test]
    fn test_mixed_components() {
        // A crossing pair, an isolated left vertex, an isolated right vertex.
        let edges = [(0, 0)];
        let set = maximum_independent_set(2, 2, &edges).unwrap();
        assert_eq!(set.len(), 3);
        check_independent(&set, &edges);
    }

    #[test]
    fn test_chain_sizes() {
        for n in 1..12 {
            // Path l0-r0-l1-r1-...: maximum matching n, set size n.
            let mut edges = Vec::new();
            for i in 0..n {
                edges.push((i, i));
                if i + 1 < n {
                    edges.push((i + 1, i));
                }
            }
            let set = maximum_independent_set(n, n, &edges).unwrap();
            check_independent(&set, &edges);
            check_size(&set, n, n, &edges);
        }
    }
}
