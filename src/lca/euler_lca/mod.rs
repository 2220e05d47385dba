//! A lowest common ancestor solver based on a range-minimum query over the Euler tour
//! of the tree. The tour is split into blocks of length √n with precomputed per-block
//! minima, so a query scans at most two partial blocks element-wise and skips the rest
//! whole, answering in O(√n) time after O(n) preprocessing.

use std::mem::size_of;

use crate::lca::euler_lca::tour::EulerTour;
use crate::lca::{InvalidTreeError, LcaSolver};

pub(crate) mod tour;

/// A (node, depth) pair, the unit the range-minimum reduction operates on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct DepthMin {
    node: usize,
    depth: u64,
}

/// Accumulator start value. The depth is larger than any real depth, so the first
/// folded candidate always replaces it.
const SENTINEL: DepthMin = DepthMin {
    node: usize::MAX,
    depth: u64::MAX,
};

/// Reduces two candidates to the one with smaller depth, keeping the later candidate
/// on ties (the comparison is strictly less-than). Scans fold candidates left to
/// right, so equal depths resolve to the rightmost tour position. For a valid tree
/// only one node at the minimum depth of a queried range can be an ancestor of both
/// endpoints, so ties only occur between repeated tour appearances of that same node
/// and the answer does not depend on the rule.
fn min_by_depth(a: DepthMin, b: DepthMin) -> DepthMin {
    if a.depth < b.depth {
        a
    } else {
        b
    }
}

/// A lowest common ancestor solver with O(n) preprocessing time and space and O(√n)
/// query time. The block length √n is the classic sqrt-decomposition trade-off,
/// balancing the number of whole-block skips against the length of the element-wise
/// scans at the range edges.
///
/// The solver is an immutable snapshot of one tree; to reflect a changed tree, build
/// a new solver and replace the old value.
///
/// # Example
/// ```rust
/// use lca_index::EulerLca;
///
/// // root 0 with children 1 and 2; node 1 has children 3 and 4
/// let tree = vec![vec![1, 2], vec![3, 4], vec![], vec![], vec![]];
/// let lca = EulerLca::from_adjacency(&tree).unwrap();
///
/// assert_eq!(lca.lca(3, 4), 1);
/// assert_eq!(lca.lca(3, 2), 0);
/// assert_eq!(lca.lca(1, 4), 1);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EulerLca {
    order: Vec<usize>,
    first: Vec<usize>,
    depth: Vec<u64>,
    blocks: Vec<DepthMin>,
    block_len: usize,
}

impl EulerLca {
    /// Builds the solver from an adjacency list representation of a tree rooted at
    /// node 0 with edges directed parent→child. Runs in O(n) time: one traversal to
    /// record the Euler tour and one linear pass to aggregate the tour blocks.
    ///
    /// An empty adjacency list is accepted and produces an empty solver; querying an
    /// empty solver violates the [`lca`][EulerLca::lca] precondition.
    ///
    /// Child indices must be within `0..adjacency.len()`; out-of-range indices are a
    /// caller error and cause a panic rather than a validation failure.
    ///
    /// # Errors
    /// Returns [`InvalidTreeError`] if the input is not a tree rooted at node 0,
    /// i.e. some node is unreachable from the root or reachable via more than one
    /// path. No partially built solver is observable in that case.
    pub fn from_adjacency(adjacency: &[Vec<usize>]) -> Result<Self, InvalidTreeError> {
        let EulerTour {
            order,
            first,
            depth,
        } = EulerTour::traverse(adjacency)?;

        let block_len = order.len().isqrt().max(1);
        let mut blocks = vec![SENTINEL; 1 + order.len() / block_len];
        for (position, &node) in order.iter().enumerate() {
            let candidate = DepthMin {
                node,
                depth: depth[node],
            };
            blocks[position / block_len] = min_by_depth(blocks[position / block_len], candidate);
        }

        Ok(Self {
            order,
            first,
            depth,
            blocks,
            block_len,
        })
    }

    /// Returns the lowest common ancestor of nodes `a` and `b`, the deepest node that
    /// is an ancestor of both (a node counts as its own ancestor). Takes O(√n) time.
    ///
    /// The query reduces to a range-minimum query on the Euler tour between the two
    /// nodes' first appearances: the scan folds whole precomputed blocks wherever a
    /// block lies fully inside the range and single tour positions at the edges.
    ///
    /// # Panics
    /// May panic or return an incorrect result if either node is out of bounds or if
    /// the solver was built from an empty tree. Callers must validate identifiers
    /// beforehand.
    #[must_use]
    pub fn lca(&self, a: usize, b: usize) -> usize {
        let mut left = self.first[a];
        let mut right = self.first[b];
        if right < left {
            std::mem::swap(&mut left, &mut right);
        }

        let mut best = SENTINEL;
        let mut position = left;
        while position <= right {
            if position % self.block_len == 0 && position + self.block_len - 1 <= right {
                best = min_by_depth(best, self.blocks[position / self.block_len]);
                position += self.block_len;
            } else {
                let node = self.order[position];
                best = min_by_depth(
                    best,
                    DepthMin {
                        node,
                        depth: self.depth[node],
                    },
                );
                position += 1;
            }
        }

        best.node
    }

    /// Returns the depth of the given node, its distance from the root in edges.
    ///
    /// # Panics
    /// Panics if the node is out of bounds.
    #[must_use]
    pub fn depth(&self, node: usize) -> u64 {
        self.depth[node]
    }

    /// Returns the number of nodes in the tree the solver was built from.
    #[must_use]
    pub fn len(&self) -> usize {
        self.first.len()
    }

    /// Returns true if the solver was built from an empty tree.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    /// Returns the amount of memory used by the solver in bytes. Does not include
    /// space allocated but not in use (e.g. unused capacity of vectors).
    #[must_use]
    pub fn heap_size(&self) -> usize {
        self.order.len() * size_of::<usize>()
            + self.first.len() * size_of::<usize>()
            + self.depth.len() * size_of::<u64>()
            + self.blocks.len() * size_of::<DepthMin>()
    }
}

impl LcaSolver for EulerLca {
    fn from_adjacency(adjacency: &[Vec<usize>]) -> Result<Self, InvalidTreeError> {
        Self::from_adjacency(adjacency)
    }

    fn lca(&self, a: usize, b: usize) -> usize {
        self.lca(a, b)
    }

    fn len(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests;
