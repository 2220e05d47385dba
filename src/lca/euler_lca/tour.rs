//! Euler tour construction. The tour lists a node every time a depth-first traversal
//! visits or returns to it, which turns ancestor queries into range queries: the
//! minimum-depth node between two nodes' first appearances is their lowest common
//! ancestor. Construction doubles as validation of the input tree.

use crate::lca::InvalidTreeError;

/// An Euler tour of a rooted tree together with the lookup tables the range-minimum
/// query needs: the first tour position of every node and every node's depth.
#[derive(Clone, Debug)]
pub(crate) struct EulerTour {
    /// The tour sequence of node indices, at most `2n - 1` entries long.
    pub(crate) order: Vec<usize>,
    /// For each node, its first position in `order`.
    pub(crate) first: Vec<usize>,
    /// For each node, its distance from the root in edges.
    pub(crate) depth: Vec<u64>,
}

impl EulerTour {
    /// Traverses the tree rooted at node 0 and records the Euler tour. The traversal
    /// uses an explicit stack rather than recursion, so arbitrarily deep trees cannot
    /// exhaust the call stack. An empty adjacency list yields an empty tour.
    ///
    /// Whenever a node is visited for the first time, the stack receives the pair
    /// (node, child) for each of its children, so the traversal returns to the node
    /// after finishing each child's subtree and every return lands in the tour.
    /// A per-node visit counter tracks how many of these returns have happened;
    /// it doubles as the tree validity check.
    ///
    /// # Errors
    /// Returns [`InvalidTreeError`] if a node is popped more often than its child
    /// count permits (reachable via more than one path) or was never reached once the
    /// stack drains (disconnected from the root).
    pub(crate) fn traverse(adjacency: &[Vec<usize>]) -> Result<Self, InvalidTreeError> {
        let mut order = Vec::with_capacity(2 * adjacency.len());
        let mut first = vec![0; adjacency.len()];
        let mut depth = vec![0; adjacency.len()];
        let mut visits = vec![0usize; adjacency.len()];

        let mut stack = Vec::with_capacity(adjacency.len());
        if !adjacency.is_empty() {
            stack.push(0);
        }

        let mut current_depth = 0u64;
        while let Some(node) = stack.pop() {
            order.push(node);

            if visits[node] == 0 {
                depth[node] = current_depth;
                first[node] = order.len() - 1;
                for &child in &adjacency[node] {
                    stack.push(node);
                    stack.push(child);
                }
                current_depth += 1;
            }

            if visits[node] == adjacency[node].len() {
                // all children are done, the traversal is leaving this node. The
                // running depth may wrap on malformed input, but every such input
                // fails one of the two checks before a wrapped value is read.
                current_depth = current_depth.wrapping_sub(1);
            } else if visits[node] > adjacency[node].len() {
                return Err(InvalidTreeError);
            }

            visits[node] += 1;
        }

        if visits.iter().any(|&v| v == 0) {
            return Err(InvalidTreeError);
        }

        Ok(Self {
            order,
            first,
            depth,
        })
    }
}
