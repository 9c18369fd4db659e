//! Hopcroft–Karp maximum bipartite matching.
//!
//! Runs in O(E √V) by alternating layered breadth-first phases with
//! depth-first augmentation restricted to shortest augmenting paths. Both
//! passes are iterative; pathological graphs cannot overflow the call stack.

use std::collections::VecDeque;

const INF: u32 = u32::MAX;

/// A maximum matching between two vertex sets.
#[derive(Debug, Clone)]
pub struct Matching {
    /// Partner of each left vertex, if matched.
    pub pair_left: Vec<Option<usize>>,
    /// Partner of each right vertex, if matched.
    pub pair_right: Vec<Option<usize>>,
    /// Number of matched pairs.
    pub len: usize,
}

/// Computes a maximum matching of a bipartite graph.
///
/// Vertices are labelled `0..left` and `0..right` within their own
/// partitions; `edges` holds `(left, right)` pairs.
///
/// # Example
///
/// ```
/// use rectilin::matching::hopcroft_karp;
///
/// // A 4-cycle: both edges of a perfect matching exist.
/// let m = hopcroft_karp(2, 2, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
/// assert_eq!(m.len, 2);
/// ```
pub fn hopcroft_karp(left: usize, right: usize, edges: &[(usize, usize)]) -> Matching {
    let mut adj = vec![Vec::new(); left];
    for &(l, r) in edges {
        debug_assert!(l < left && r < right);
        adj[l].push(r);
    }

    let mut pair_left: Vec<Option<usize>> = vec![None; left];
    let mut pair_right: Vec<Option<usize>> = vec![None; right];
    let mut dist = vec![INF; left];
    let mut queue = VecDeque::new();
    let mut len = 0;

    loop {
        // Layer the graph from every unmatched left vertex.
        queue.clear();
        for l in 0..left {
            if pair_left[l].is_none() {
                dist[l] = 0;
                queue.push_back(l);
            } else {
                dist[l] = INF;
            }
        }

        let mut shortest = INF;
        while let Some(l) = queue.pop_front() {
            if dist[l] >= shortest {
                continue;
            }
            for &r in &adj[l] {
                match pair_right[r] {
                    None => {
                        if shortest == INF {
                            shortest = dist[l] + 1;
                        }
                    }
                    Some(l2) => {
                        if dist[l2] == INF {
                            dist[l2] = dist[l] + 1;
                            queue.push_back(l2);
                        }
                    }
                }
            }
        }

        if shortest == INF {
            break;
        }

        // Augment along shortest paths only.
        for l in 0..left {
            if pair_left[l].is_none()
                && augment(l, shortest, &adj, &mut pair_left, &mut pair_right, &mut dist)
            {
                len += 1;
            }
        }
    }

    Matching {
        pair_left,
        pair_right,
        len,
    }
}

/// Searches for one augmenting path of length `shortest` from `root` along
/// the BFS layering and rewires the matching along it.
fn augment(
    root: usize,
    shortest: u32,
    adj: &[Vec<usize>],
    pair_left: &mut [Option<usize>],
    pair_right: &mut [Option<usize>],
    dist: &mut [u32],
) -> bool {
    // Explicit DFS stack: (left vertex, cursor into its adjacency) plus the
    // right vertex each frame committed to when it descended.
    let mut stack = vec![(root, 0usize)];
    let mut chosen = vec![usize::MAX];

    while let Some(&(l, cursor)) = stack.last() {
        if cursor == adj[l].len() {
            // Dead end; exclude from the rest of this phase.
            dist[l] = INF;
            stack.pop();
            chosen.pop();
            continue;
        }
        let depth = stack.len() - 1;
        stack[depth].1 += 1;

        let r = adj[l][cursor];
        match pair_right[r] {
            None => {
                // Free right vertex at the layer the BFS found: flip the
                // whole path onto the matching.
                if dist[l] + 1 == shortest {
                    chosen[depth] = r;
                    for (i, &(lv, _)) in stack.iter().enumerate() {
                        pair_left[lv] = Some(chosen[i]);
                        pair_right[chosen[i]] = Some(lv);
                    }
                    return true;
                }
            }
            Some(l2) => {
                if dist[l2] == dist[l] + 1 {
                    chosen[depth] = r;
                    stack.push((l2, 0));
                    chosen.push(usize::MAX);
                }
            }
        }
    }

    false
}
