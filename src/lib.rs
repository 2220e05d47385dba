#![warn(missing_docs)]

//! This crate provides lowest common ancestor (LCA) queries on static, rooted trees.
//! The solvers are offline-preprocess / online-query: they build an index over the tree
//! once, and any subsequent pair query is answered without re-traversing the tree.
//! The index cannot be modified after it has been created; a changed tree requires a
//! full rebuild.
//!
//! # Data structures
//!  - [`EulerLca`]: the production solver. It encodes the tree as an Euler tour and
//!    answers queries as range-minimum queries over the tour using sqrt-decomposition,
//!    giving O(n) preprocessing and O(√n) queries.
//!  - [`NaiveLca`]: a parent-pointer solver answering queries by walking both nodes
//!    toward the root in O(depth) time. It needs less memory than [`EulerLca`] and is
//!    primarily useful as a reference implementation for testing.
//!
//! Both implement the [`LcaSolver`] trait, so code that only needs the build/query pair
//! can be written generically and have the solver swapped out.
//!
//! # Input format
//! Trees are given as adjacency lists, one `Vec` of children per node, with node 0 as
//! the root and edges directed parent→child. Construction validates that the structure
//! reachable from node 0 is a tree (every node reached exactly once) and fails with
//! [`InvalidTreeError`] otherwise. Child indices must be within bounds; callers that
//! accept untrusted identifiers must validate them first (the [`directory`] module
//! shows how).
//!
//! # Concurrency
//! A built solver is immutable and can be queried from any number of threads. The
//! build/query pair itself is not synchronized: replacing an index while queries are
//! running is the caller's responsibility. The [`directory`] module wraps a solver in
//! the intended single-writer/multiple-readers discipline, swapping complete snapshots
//! under a read/write lock so readers never observe a partially rebuilt index.

pub use lca::euler_lca::EulerLca;
pub use lca::naive_lca::NaiveLca;
pub use lca::{InvalidTreeError, LcaSolver};

pub mod directory;
pub mod lca;
