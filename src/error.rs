use thiserror::Error;

/// The error type for fallible [`OSAvlSet`] operations.
///
/// Every failure a caller can provoke is reported through this enum; none of
/// them leaves the set in a modified state. Violations of the tree's own
/// structural invariants are programming defects and are covered by debug
/// assertions, not by this type.
///
/// # Examples
///
/// ```
/// use osavl_tree::{Error, OSAvlSet};
///
/// let mut set = OSAvlSet::new();
/// set.insert(7)?;
/// assert_eq!(set.insert(7), Err(Error::DuplicateKey));
/// assert_eq!(set.remove(&8), Err(Error::NotFound));
/// # Ok::<(), Error>(())
/// ```
///
/// [`OSAvlSet`]: crate::OSAvlSet
#[derive(Clone, Copy, Debug, Eq, Error, Hash, PartialEq)]
pub enum Error {
    /// The value passed to `insert` is already stored in the set.
    #[error("value is already present")]
    DuplicateKey,
    /// The value passed to `remove` is not stored in the set.
    #[error("value is not present")]
    NotFound,
    /// `min` or `max` was called on a set with no elements.
    #[error("set is empty")]
    EmptyTree,
    /// The rank passed to `kth_order_statistic` is outside `1..=len()`.
    #[error("rank is out of range")]
    OutOfRange,
    /// `peek` was called on an exhausted iterator.
    #[error("iterator is exhausted")]
    InvalidIteratorState,
}
