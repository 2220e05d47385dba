//! Lowest common ancestor solvers. These data structures preprocess a static rooted
//! tree so that the deepest common ancestor of any two nodes can be computed without
//! traversing the tree again. The implementations are located in the
//! [`euler_lca`] and [`naive_lca`] modules.

pub mod euler_lca;

pub mod naive_lca;

/// Error returned when an adjacency structure does not form a tree rooted at node 0.
/// This covers both a node being reachable from the root via more than one path
/// (multiple parents or a cycle) and a node not being reachable from the root at all
/// (disconnected component, or the wrong node designated as root). The two conditions
/// are not distinguished, since either way the input as a whole is unusable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("input graph is not a tree rooted at node 0")]
pub struct InvalidTreeError;

/// A common trait for lowest common ancestor solvers, allowing the preprocessing
/// structure to be swapped out by code that only needs the build/query pair
/// (see the [directory service][crate::directory] for an example).
///
/// A solver is an immutable snapshot of one tree. Rebuilding after a tree change means
/// constructing a new solver and replacing the old value; implementations never update
/// incrementally.
pub trait LcaSolver: Sized {
    /// Builds a solver from an adjacency list representation of a tree rooted at
    /// node 0, validating that the input actually is one.
    ///
    /// # Errors
    /// Returns [`InvalidTreeError`] if some node is unreachable from node 0 or
    /// reachable via more than one path.
    fn from_adjacency(adjacency: &[Vec<usize>]) -> Result<Self, InvalidTreeError>;

    /// Returns the lowest common ancestor of nodes `a` and `b`.
    ///
    /// # Panics
    /// May panic if either node is out of bounds or if the solver was built from an
    /// empty tree. Callers must validate identifiers beforehand.
    fn lca(&self, a: usize, b: usize) -> usize;

    /// Returns the number of nodes in the tree the solver was built from.
    fn len(&self) -> usize;

    /// Returns true if the solver was built from an empty tree.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
