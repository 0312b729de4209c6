/// A one-based rank into the sorted order of a set.
///
/// `Rank(1)` addresses the smallest element, `Rank(len())` the largest,
/// matching the k-th order statistic convention used throughout this crate.
/// This is an order-statistic extension and is not part of the standard
/// `BTreeSet` API.
///
/// # Examples
///
/// ```
/// use osavl_tree::{OSAvlSet, Rank};
///
/// let set = OSAvlSet::from([10, 20, 30]);
///
/// assert_eq!(set[Rank(1)], 10);
/// assert_eq!(set[Rank(3)], 30);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
