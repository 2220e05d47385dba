//! A naive lowest common ancestor solver that stores only parent pointers and depths
//! and walks both query nodes toward the root. Queries cost O(depth) instead of
//! [`EulerLca`][crate::EulerLca]'s O(√n), but the structure is smaller and simple
//! enough to serve as a reference implementation for testing the fast solver.

use std::mem::size_of;

use crate::lca::{InvalidTreeError, LcaSolver};

/// A lowest common ancestor solver backed by parent and depth arrays. Preprocessing
/// is a single O(n) traversal; each query walks the two nodes up to their meeting
/// point in O(depth) time. The root is its own parent.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NaiveLca {
    parent: Vec<usize>,
    depth: Vec<u64>,
}

impl NaiveLca {
    /// Builds the solver from an adjacency list representation of a tree rooted at
    /// node 0, performing the same tree validation as
    /// [`EulerLca::from_adjacency`][crate::EulerLca::from_adjacency]: every node must
    /// be reachable from the root exactly once.
    ///
    /// # Errors
    /// Returns [`InvalidTreeError`] if a node has more than one parent, lies on a
    /// cycle, or is unreachable from the root.
    pub fn from_adjacency(adjacency: &[Vec<usize>]) -> Result<Self, InvalidTreeError> {
        let mut parent = vec![0; adjacency.len()];
        let mut depth = vec![0; adjacency.len()];
        let mut visited = vec![false; adjacency.len()];

        let mut stack = Vec::with_capacity(adjacency.len());
        if !adjacency.is_empty() {
            visited[0] = true;
            stack.push(0);
        }

        while let Some(node) = stack.pop() {
            for &child in &adjacency[node] {
                // a second edge into the same node means multiple parents or a cycle
                if visited[child] {
                    return Err(InvalidTreeError);
                }
                visited[child] = true;
                parent[child] = node;
                depth[child] = depth[node] + 1;
                stack.push(child);
            }
        }

        if visited.iter().any(|&v| !v) {
            return Err(InvalidTreeError);
        }

        Ok(Self { parent, depth })
    }

    /// Returns the lowest common ancestor of nodes `a` and `b` by lifting the deeper
    /// node until both depths match and then lifting both in lockstep until they
    /// meet. Takes O(depth) time.
    ///
    /// # Panics
    /// Panics if either node is out of bounds or the solver was built from an empty
    /// tree.
    #[must_use]
    pub fn lca(&self, a: usize, b: usize) -> usize {
        let mut a = a;
        let mut b = b;

        while self.depth[a] > self.depth[b] {
            a = self.parent[a];
        }
        while self.depth[b] > self.depth[a] {
            b = self.parent[b];
        }
        while a != b {
            a = self.parent[a];
            b = self.parent[b];
        }

        a
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
        self.parent.len()
    }

    /// Returns true if the solver was built from an empty tree.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the amount of memory used by the solver in bytes. Does not include
    /// space allocated but not in use (e.g. unused capacity of vectors).
    #[must_use]
    pub fn heap_size(&self) -> usize {
        self.parent.len() * size_of::<usize>() + self.depth.len() * size_of::<u64>()
    }
}

impl LcaSolver for NaiveLca {
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
