//! A small directory service layered over an [`LcaSolver`]. It owns the two concerns
//! the solvers deliberately leave to their caller: translating external identifiers
//! into the dense `0..n` index space the solvers require, and serializing rebuilds
//! against concurrent queries.
//!
//! The running example is an employee hierarchy: the directory answers "who is the
//! closest common manager of these two employees", where employees carry arbitrary
//! numeric ids and name their direct subordinates.
//!
//! Rebuilds follow a snapshot discipline: the new solver, employee list and id map are
//! constructed completely off the lock, then swapped in under a write lock. Readers
//! therefore observe either the entirely old or the entirely new directory, never a
//! mixture, and a failed rebuild leaves the previous state untouched.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::lca::{InvalidTreeError, LcaSolver};
use crate::EulerLca;

/// A single employee record: an external id, a display name, and the ids of the
/// employee's direct subordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Employee {
    /// Externally assigned identifier, unique within one directory.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Ids of direct subordinates. Every id must belong to an employee passed to the
    /// same [`Directory::rebuild`] call.
    pub subordinates: Vec<u64>,
}

/// Errors produced by the directory service. Structural problems detected by the
/// underlying solver are passed through as [`DirectoryError::InvalidTree`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    /// A query referenced an id that no employee in the current snapshot has.
    #[error("no employee with id {0}")]
    UnknownEmployee(u64),
    /// Two employees passed to a rebuild share the same id.
    #[error("duplicate employee id {0}")]
    DuplicateId(u64),
    /// An employee lists a subordinate id that belongs to no employee in the rebuild.
    #[error("employee {employee} lists unknown subordinate {subordinate}")]
    UnknownSubordinate {
        /// Id of the employee with the dangling reference.
        employee: u64,
        /// The referenced id that could not be resolved.
        subordinate: u64,
    },
    /// The id designated as root does not belong to any employee in the rebuild.
    #[error("no employee with root id {0}")]
    RootNotFound(u64),
    /// A query arrived before the first successful rebuild.
    #[error("directory has not been built yet")]
    NotReady,
    /// The subordinate relationships do not form a tree under the designated root.
    #[error(transparent)]
    InvalidTree(#[from] InvalidTreeError),
}

/// One fully built generation of the directory. Immutable once constructed; rebuilds
/// replace the whole snapshot.
struct Snapshot<S> {
    solver: S,
    /// Employees reordered so that the root sits at index 0, matching the solver's
    /// dense index space.
    employees: Vec<Employee>,
    index_of: HashMap<u64, usize>,
}

/// A directory answering closest-common-manager queries over an employee hierarchy.
///
/// The solver implementation is a type parameter, defaulting to [`EulerLca`]; tests
/// can inject [`NaiveLca`][crate::NaiveLca] or a mock through the same interface.
///
/// All methods take `&self`: the directory is safe to share across threads, with
/// queries running concurrently and [`rebuild`][Directory::rebuild] acting as the
/// single writer.
///
/// # Example
/// ```rust
/// use lca_index::directory::{Directory, Employee};
///
/// let directory: Directory = Directory::new();
/// directory
///     .rebuild(
///         vec![
///             Employee { id: 17, name: "Claire".into(), subordinates: vec![4, 8] },
///             Employee { id: 4, name: "Avery".into(), subordinates: vec![] },
///             Employee { id: 8, name: "Morgan".into(), subordinates: vec![] },
///         ],
///         17,
///     )
///     .unwrap();
///
/// assert_eq!(directory.common_manager(4, 8).unwrap().id, 17);
/// ```
pub struct Directory<S = EulerLca> {
    snapshot: RwLock<Option<Snapshot<S>>>,
}

impl<S: LcaSolver> Directory<S> {
    /// Creates an empty directory. Queries fail with [`DirectoryError::NotReady`]
    /// until the first successful [`rebuild`][Directory::rebuild].
    #[must_use]
    pub fn new() -> Self {
        Self {
            snapshot: RwLock::new(None),
        }
    }

    /// Replaces the directory contents with the given employees, rooted at the
    /// employee with id `root_id`. Validates ids and edges, translates the hierarchy
    /// into the solver's dense index space, and builds the solver before taking the
    /// write lock, so concurrent queries keep running against the old snapshot until
    /// the new one is complete.
    ///
    /// # Errors
    /// Returns an error and leaves the previous snapshot in place if `root_id` is
    /// absent, an id occurs twice, a subordinate reference cannot be resolved, or the
    /// hierarchy is not a tree under the root (shared subordinates, cycles, or
    /// employees unreachable from the root).
    pub fn rebuild(&self, mut employees: Vec<Employee>, root_id: u64) -> Result<(), DirectoryError> {
        let root_index = employees
            .iter()
            .position(|employee| employee.id == root_id)
            .ok_or(DirectoryError::RootNotFound(root_id))?;
        employees.swap(0, root_index);

        let mut index_of = HashMap::with_capacity(employees.len());
        for (index, employee) in employees.iter().enumerate() {
            if index_of.insert(employee.id, index).is_some() {
                return Err(DirectoryError::DuplicateId(employee.id));
            }
        }

        let mut adjacency = vec![Vec::new(); employees.len()];
        for (index, employee) in employees.iter().enumerate() {
            for &subordinate in &employee.subordinates {
                let &child = index_of.get(&subordinate).ok_or(
                    DirectoryError::UnknownSubordinate {
                        employee: employee.id,
                        subordinate,
                    },
                )?;
                adjacency[index].push(child);
            }
        }

        let solver = S::from_adjacency(&adjacency)?;

        let snapshot = Snapshot {
            solver,
            employees,
            index_of,
        };
        *self.write_lock() = Some(snapshot);
        Ok(())
    }

    /// Returns the closest common manager of the employees with ids `first` and
    /// `second`: the deepest employee that both report to, where everyone counts as
    /// reporting to themselves. Both ids are validated before the solver is queried.
    ///
    /// # Errors
    /// Returns [`DirectoryError::NotReady`] before the first successful rebuild and
    /// [`DirectoryError::UnknownEmployee`] for unresolvable ids.
    pub fn common_manager(&self, first: u64, second: u64) -> Result<Employee, DirectoryError> {
        let guard = self.read_lock();
        let snapshot = guard.as_ref().ok_or(DirectoryError::NotReady)?;

        let first = Self::resolve(snapshot, first)?;
        let second = Self::resolve(snapshot, second)?;

        let common = snapshot.solver.lca(first, second);
        Ok(snapshot.employees[common].clone())
    }

    /// Returns the employee with the given id.
    ///
    /// # Errors
    /// Returns [`DirectoryError::NotReady`] before the first successful rebuild and
    /// [`DirectoryError::UnknownEmployee`] if the id is unresolvable.
    pub fn employee(&self, id: u64) -> Result<Employee, DirectoryError> {
        let guard = self.read_lock();
        let snapshot = guard.as_ref().ok_or(DirectoryError::NotReady)?;

        let index = Self::resolve(snapshot, id)?;
        Ok(snapshot.employees[index].clone())
    }

    /// Returns all employees of the current snapshot, root first.
    ///
    /// # Errors
    /// Returns [`DirectoryError::NotReady`] before the first successful rebuild.
    pub fn employees(&self) -> Result<Vec<Employee>, DirectoryError> {
        let guard = self.read_lock();
        let snapshot = guard.as_ref().ok_or(DirectoryError::NotReady)?;
        Ok(snapshot.employees.clone())
    }

    fn resolve(snapshot: &Snapshot<S>, id: u64) -> Result<usize, DirectoryError> {
        snapshot
            .index_of
            .get(&id)
            .copied()
            .ok_or(DirectoryError::UnknownEmployee(id))
    }

    // lock poisoning is recovered rather than propagated: a panicking reader cannot
    // leave a snapshot half-written, since snapshots are only replaced wholesale
    fn read_lock(&self) -> std::sync::RwLockReadGuard<'_, Option<Snapshot<S>>> {
        self.snapshot.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_lock(&self) -> std::sync::RwLockWriteGuard<'_, Option<Snapshot<S>>> {
        self.snapshot
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: LcaSolver> Default for Directory<S> {
    fn default() -> Self {
        Self::new()
    }
}
