//! Interval tree for stabbing queries over closed integer intervals.
//!
//! A centered interval tree stores items on the highest node whose center
//! their interval contains; everything strictly left or right of the center
//! lives in the corresponding subtree. A stabbing query therefore touches one
//! root-to-leaf path plus a sorted prefix of each node it visits.
//!
//! The partitioner keeps polygon edges and candidate chords in these trees,
//! and mutates the edge set in place while resolving concave vertices, so the
//! tree supports removal and re-insertion of items after construction.
//!
//! # Example
//!
//! ```
//! use rectilin::spatial::{Interval, IntervalTree};
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! struct Span {
//!     lo: i32,
//!     hi: i32,
//! }
//!
//! impl Interval for Span {
//!     type Scalar = i32;
//!     fn low(&self) -> i32 {
//!         self.lo
//!     }
//!     fn high(&self) -> i32 {
//!         self.hi
//!     }
//! }
//!
//! let tree = IntervalTree::build(vec![
//!     Span { lo: 0, hi: 4 },
//!     Span { lo: 2, hi: 9 },
//!     Span { lo: 6, hi: 7 },
//! ]);
//!
//! assert_eq!(tree.stab(3).len(), 2);
//! assert_eq!(tree.stab(5).len(), 1);
//! ```

use num_traits::PrimInt;

/// A trait for items that expose a closed integer interval.
pub trait Interval {
    /// The integer scalar type of the interval endpoints.
    type Scalar: PrimInt;

    /// Returns the lower endpoint of the interval.
    fn low(&self) -> Self::Scalar;

    /// Returns the upper endpoint of the interval.
    ///
    /// Must satisfy `low() <= high()`.
    fn high(&self) -> Self::Scalar;
}

impl<I: PrimInt> Interval for (I, I) {
    type Scalar = I;

    fn low(&self) -> I {
        self.0
    }

    fn high(&self) -> I {
        self.1
    }
}

/// A node holding every stored interval that contains its center.
#[derive(Clone)]
struct Node<T: Interval> {
    center: T::Scalar,
    /// Items at this node, sorted ascending by lower endpoint.
    by_low: Vec<T>,
    /// The same items, sorted descending by upper endpoint.
    by_high: Vec<T>,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T: Interval + Copy> Node<T> {
    fn leaf(item: T) -> Self {
        let half = (item.high() - item.low()) >> 1;
        Node {
            center: item.low() + half,
            by_low: vec![item],
            by_high: vec![item],
            left: None,
            right: None,
        }
    }

    fn push(&mut self, item: T) {
        let at = self.by_low.partition_point(|x| x.low() <= item.low());
        self.by_low.insert(at, item);
        let at = self.by_high.partition_point(|x| x.high() >= item.high());
        self.by_high.insert(at, item);
    }
}

/// An interval tree over items exposing closed integer intervals.
///
/// # Complexity
///
/// - Construction: O(n log n)
/// - Stabbing query: O(log n + k) where k is the number of results
/// - Insert / remove: O(log n + m) where m is the item count at the target node
///
/// Insertions after construction extend the tree without rebalancing; the
/// partitioner only ever re-inserts fragments of removed intervals, which
/// keeps the depth bounded by the original build.
#[derive(Clone)]
pub struct IntervalTree<T: Interval + Copy + PartialEq> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T: Interval + Copy + PartialEq> IntervalTree<T> {
    /// Builds an interval tree from a set of items.
    ///
    /// Node centers are medians of the endpoint multiset, giving a balanced
    /// tree for any input distribution.
    pub fn build(items: Vec<T>) -> Self {
        let len = items.len();
        IntervalTree {
            root: Self::build_node(items),
            len,
        }
    }

    fn build_node(items: Vec<T>) -> Option<Box<Node<T>>> {
        if items.is_empty() {
            return None;
        }

        let mut endpoints: Vec<T::Scalar> = Vec::with_capacity(items.len() * 2);
        for item in &items {
            endpoints.push(item.low());
            endpoints.push(item.high());
        }
        endpoints.sort_unstable();
        let center = endpoints[endpoints.len() / 2];

        let mut straddling = Vec::new();
        let mut lower = Vec::new();
        let mut upper = Vec::new();
        for item in items {
            if item.high() < center {
                lower.push(item);
            } else if item.low() > center {
                upper.push(item);
            } else {
                straddling.push(item);
            }
        }

        let mut by_low = straddling.clone();
        by_low.sort_unstable_by(|a, b| a.low().cmp(&b.low()));
        let mut by_high = straddling;
        by_high.sort_unstable_by(|a, b| b.high().cmp(&a.high()));

        Some(Box::new(Node {
            center,
            by_low,
            by_high,
            left: Self::build_node(lower),
            right: Self::build_node(upper),
        }))
    }

    /// Returns the number of items in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns every stored item whose closed interval contains `at`.
    ///
    /// Result order is unspecified.
    pub fn stab(&self, at: T::Scalar) -> Vec<T> {
        let mut out = Vec::new();
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            if at < n.center {
                for item in &n.by_low {
                    if item.low() <= at {
                        out.push(*item);
                    } else {
                        break;
                    }
                }
                node = n.left.as_deref();
            } else if at > n.center {
                for item in &n.by_high {
                    if item.high() >= at {
                        out.push(*item);
                    } else {
                        break;
                    }
                }
                node = n.right.as_deref();
            } else {
                // Every item at this node contains its own center, and no
                // item below can reach it.
                out.extend_from_slice(&n.by_low);
                break;
            }
        }
        out
    }

    /// Inserts an item into the tree.
    pub fn insert(&mut self, item: T) {
        self.len += 1;
        let mut slot = &mut self.root;
        loop {
            match slot {
                None => {
                    *slot = Some(Box::new(Node::leaf(item)));
                    return;
                }
                Some(node) => {
                    if item.high() < node.center {
                        slot = &mut node.left;
                    } else if item.low() > node.center {
                        slot = &mut node.right;
                    } else {
                        node.push(item);
                        return;
                    }
                }
            }
        }
    }

    /// Removes one item equal to `*item` from the tree.
    ///
    /// Returns `true` if an item was removed.
    pub fn remove(&mut self, item: &T) -> bool {
        let mut node = self.root.as_deref_mut();
        while let Some(n) = node {
            if item.high() < n.center {
                node = n.left.as_deref_mut();
            } else if item.low() > n.center {
                node = n.right.as_deref_mut();
            } else {
                let found = match n.by_low.iter().position(|x| x == item) {
                    Some(at) => {
                        n.by_low.remove(at);
                        true
                    }
                    None => false,
                };
                if found {
                    if let Some(at) = n.by_high.iter().position(|x| x == item) {
                        n.by_high.remove(at);
                    }
                    self.len -= 1;
                }
                return found;
            }
        }
        false
    }
}
