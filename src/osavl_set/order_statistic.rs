use core::borrow::Borrow;
use core::ops::Index;

use super::OSAvlSet;
use crate::Rank;
use crate::error::Error;

impl<T: Ord> OSAvlSet<T> {
    /// Returns the k-th smallest element of the set.
    ///
    /// This is an order-statistic extension with no counterpart in the
    /// standard `BTreeSet` API.
    ///
    /// Ranks are one-based: `k = 1` is the minimum and `k = len()` the
    /// maximum. Fails with [`Error::OutOfRange`] when `k` is zero or larger
    /// than the set.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::{Error, OSAvlSet};
    ///
    /// let set = OSAvlSet::from([10, 20, 30]);
    /// assert_eq!(set.kth_order_statistic(1), Ok(&10));
    /// assert_eq!(set.kth_order_statistic(3), Ok(&30));
    /// assert_eq!(set.kth_order_statistic(0), Err(Error::OutOfRange));
    /// assert_eq!(set.kth_order_statistic(4), Err(Error::OutOfRange));
    /// ```
    pub fn kth_order_statistic(&self, k: usize) -> Result<&T, Error> {
        self.tree.kth_order_statistic(k).ok_or(Error::OutOfRange)
    }

    /// Counts the elements strictly less than `value`.
    ///
    /// This is an order-statistic extension with no counterpart in the
    /// standard `BTreeSet` API. `value` itself need not be present; the
    /// result is also the zero-based rank `value` would occupy if inserted.
    ///
    /// The value may be any borrowed form of the set's element type, but the
    /// ordering on the borrowed form *must* match the ordering on the
    /// element type.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::OSAvlSet;
    ///
    /// let set = OSAvlSet::from([10, 20, 30, 40]);
    ///
    /// assert_eq!(set.count_less_than(&25), 2);
    /// assert_eq!(set.count_less_than(&10), 0);
    /// assert_eq!(set.count_less_than(&100), 4);
    /// ```
    #[must_use]
    pub fn count_less_than<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.tree.count_less_than(value)
    }
}

/// Indexes into the set by one-based rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use osavl_tree::OSAvlSet;
/// use osavl_tree::Rank;
///
/// let set = OSAvlSet::from([10, 20, 30]);
/// assert_eq!(set[Rank(1)], 10);
/// assert_eq!(set[Rank(3)], 30);
/// ```
impl<T: Ord> Index<Rank> for OSAvlSet<T> {
    type Output = T;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.kth_order_statistic(rank.0).expect("index out of bounds")
    }
}
