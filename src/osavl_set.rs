use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;

use crate::error::Error;
use crate::raw::{RawAvlTree, RawIntoIter, RawIter, RawIterRev};

mod order_statistic;

/// An ordered set based on a size-augmented AVL tree.
///
/// Every node carries the size of its subtree, so on top of the usual
/// ordered-set operations the set answers rank queries in logarithmic time:
/// [`kth_order_statistic`] returns the k-th smallest element and
/// [`count_less_than`] counts the elements below a bound, without visiting
/// the elements in between.
///
/// It is a logic error for an item to be modified in such a way that the item's ordering relative
/// to any other item, as determined by the [`Ord`] trait, changes while it is in the set. This is
/// normally only possible through [`Cell`], [`RefCell`], global state, I/O, or unsafe code.
/// The behavior resulting from such a logic error is not specified, but will be encapsulated to the
/// `OSAvlSet` that observed the logic error and not result in undefined behavior. This could
/// include panics, incorrect results, aborts, memory leaks, and non-termination.
///
/// Iterators returned by [`OSAvlSet::iter`] and [`OSAvlSet::into_iter`] produce their items in
/// order, and take worst-case logarithmic and amortized constant time per item returned.
///
/// [`kth_order_statistic`]: OSAvlSet::kth_order_statistic
/// [`count_less_than`]: OSAvlSet::count_less_than
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
///
/// # Examples
///
/// ```
/// use osavl_tree::OSAvlSet;
///
/// // Type inference lets us omit an explicit type signature (which
/// // would be `OSAvlSet<&str>` in this example).
/// let mut books = OSAvlSet::new();
///
/// // Add some books.
/// books.insert("A Dance With Dragons").unwrap();
/// books.insert("To Kill a Mockingbird").unwrap();
/// books.insert("The Odyssey").unwrap();
/// books.insert("The Great Gatsby").unwrap();
///
/// // Check for a specific one.
/// if !books.contains("The Winds of Winter") {
///     println!("We have {} books, but The Winds of Winter ain't one.",
///              books.len());
/// }
///
/// // Remove a book.
/// books.remove("The Odyssey").unwrap();
///
/// // Iterate over everything.
/// for book in &books {
///     println!("{book}");
/// }
/// ```
///
/// A `OSAvlSet` with a known list of items can be initialized from an array:
///
/// ```
/// use osavl_tree::OSAvlSet;
///
/// let set = OSAvlSet::from([1, 2, 3]);
/// ```
pub struct OSAvlSet<T> {
    tree: RawAvlTree<T>,
}

/// An iterator over the items of a `OSAvlSet` in ascending order.
///
/// This `struct` is created by the [`iter`] method on [`OSAvlSet`].
/// See its documentation for more.
///
/// # Examples
///
/// ```
/// use osavl_tree::OSAvlSet;
///
/// let set = OSAvlSet::from([3, 1, 2]);
/// let mut iter = set.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), Some(&3));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: OSAvlSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    inner: RawIter<'a, T>,
}

/// An iterator over the items of a `OSAvlSet` in descending order.
///
/// This `struct` is created by the [`iter_rev`] method on [`OSAvlSet`].
/// See its documentation for more.
///
/// # Examples
///
/// ```
/// use osavl_tree::OSAvlSet;
///
/// let set = OSAvlSet::from([3, 1, 2]);
/// let mut iter = set.iter_rev();
/// assert_eq!(iter.next(), Some(&3));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter_rev`]: OSAvlSet::iter_rev
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IterRev<'a, T: 'a> {
    inner: RawIterRev<'a, T>,
}

/// An owning iterator over the items of a `OSAvlSet` in ascending order.
///
/// This `struct` is created by the [`into_iter`] method on [`OSAvlSet`]
/// (provided by the [`IntoIterator`] trait). See its documentation for more.
///
/// # Examples
///
/// ```
/// use osavl_tree::OSAvlSet;
///
/// let set = OSAvlSet::from([1, 2, 3]);
/// let mut iter = set.into_iter();
/// assert_eq!(iter.next(), Some(1));
/// assert_eq!(iter.next(), Some(2));
/// assert_eq!(iter.next(), Some(3));
/// ```
///
/// [`into_iter`]: OSAvlSet#method.into_iter
pub struct IntoIter<T> {
    inner: RawIntoIter<T>,
}

impl<T> OSAvlSet<T> {
    /// Makes a new, empty `OSAvlSet`.
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::OSAvlSet;
    ///
    /// let mut set = OSAvlSet::new();
    ///
    /// // entries can now be inserted into the empty set
    /// set.insert(1).unwrap();
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn new() -> OSAvlSet<T> {
        OSAvlSet {
            tree: RawAvlTree::new(),
        }
    }

    /// Clears the set, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::OSAvlSet;
    ///
    /// let mut v = OSAvlSet::new();
    /// v.insert(1).unwrap();
    /// v.clear();
    /// assert!(v.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns `true` if the set contains a value.
    ///
    /// The value may be any borrowed form of the set's element type, but the
    /// ordering on the borrowed form *must* match the ordering on the
    /// element type.
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::OSAvlSet;
    ///
    /// let set = OSAvlSet::from([1, 2, 3]);
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&4), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.tree.contains(value)
    }

    /// Returns a reference to the value in the set, if any, that is equal to the given value.
    ///
    /// The value may be any borrowed form of the set's element type, but the
    /// ordering on the borrowed form *must* match the ordering on the
    /// element type.
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::OSAvlSet;
    ///
    /// let set = OSAvlSet::from([1, 2, 3]);
    /// assert_eq!(set.get(&2), Some(&2));
    /// assert_eq!(set.get(&4), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.tree.get(value)
    }

    /// Returns a reference to the smallest element in the set.
    ///
    /// Fails with [`Error::EmptyTree`] if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::{Error, OSAvlSet};
    ///
    /// let mut set = OSAvlSet::new();
    /// assert_eq!(OSAvlSet::min(&set), Err(Error::EmptyTree));
    /// set.insert(2).unwrap();
    /// set.insert(1).unwrap();
    /// assert_eq!(OSAvlSet::min(&set), Ok(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn min(&self) -> Result<&T, Error>
    where
        T: Ord,
    {
        self.tree.min().ok_or(Error::EmptyTree)
    }

    /// Returns a reference to the largest element in the set.
    ///
    /// Fails with [`Error::EmptyTree`] if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::{Error, OSAvlSet};
    ///
    /// let mut set = OSAvlSet::new();
    /// assert_eq!(OSAvlSet::max(&set), Err(Error::EmptyTree));
    /// set.insert(1).unwrap();
    /// set.insert(2).unwrap();
    /// assert_eq!(OSAvlSet::max(&set), Ok(&2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn max(&self) -> Result<&T, Error>
    where
        T: Ord,
    {
        self.tree.max().ok_or(Error::EmptyTree)
    }

    /// Adds a value to the set.
    ///
    /// Fails with [`Error::DuplicateKey`] if the set already contains an
    /// equal value; the set is left unmodified in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::{Error, OSAvlSet};
    ///
    /// let mut set = OSAvlSet::new();
    ///
    /// assert_eq!(set.insert(2), Ok(()));
    /// assert_eq!(set.insert(2), Err(Error::DuplicateKey));
    /// assert_eq!(set.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn insert(&mut self, value: T) -> Result<(), Error>
    where
        T: Ord,
    {
        self.tree.insert(value)
    }

    /// Removes an element equal to the value from the set.
    ///
    /// Fails with [`Error::NotFound`] if no such element is present; the set
    /// is left unmodified in that case. To get the removed value back, use
    /// [`take`] instead.
    ///
    /// The value may be any borrowed form of the set's element type,
    /// but the ordering on the borrowed form *must* match the
    /// ordering on the element type.
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::{Error, OSAvlSet};
    ///
    /// let mut set = OSAvlSet::new();
    /// set.insert(2).unwrap();
    /// assert_eq!(set.remove(&2), Ok(()));
    /// assert_eq!(set.remove(&2), Err(Error::NotFound));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// [`take`]: OSAvlSet::take
    pub fn remove<Q>(&mut self, value: &Q) -> Result<(), Error>
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.tree.remove(value)?;
        Ok(())
    }

    /// Removes and returns the value in the set, if any, that is equal to the given one.
    ///
    /// The value may be any borrowed form of the set's element type,
    /// but the ordering on the borrowed form *must* match the
    /// ordering on the element type.
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::OSAvlSet;
    ///
    /// let mut set = OSAvlSet::new();
    /// set.insert(2).unwrap();
    /// assert_eq!(set.take(&2), Some(2));
    /// assert_eq!(set.take(&2), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.tree.remove(value).ok()
    }

    /// Gets an iterator over the values in the set, in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::OSAvlSet;
    ///
    /// let mut set = OSAvlSet::new();
    /// set.insert(3).unwrap();
    /// set.insert(2).unwrap();
    /// set.insert(1).unwrap();
    ///
    /// for value in set.iter() {
    ///     println!("{value}");
    /// }
    ///
    /// let first = set.iter().next().unwrap();
    /// assert_eq!(*first, 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) to create the iterator; each iteration step is O(1) amortized.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.tree.iter(),
        }
    }

    /// Gets an iterator over the values in the set, in reverse sorted order.
    ///
    /// The reverse iterator is independent of any forward iterator over the
    /// same set; each one advances on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::OSAvlSet;
    ///
    /// let set = OSAvlSet::from([1, 2, 3]);
    ///
    /// let descending: Vec<_> = set.iter_rev().copied().collect();
    /// assert_eq!(descending, [3, 2, 1]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) to create the iterator; each iteration step is O(1) amortized.
    pub fn iter_rev(&self) -> IterRev<'_, T> {
        IterRev {
            inner: self.tree.iter_rev(),
        }
    }

    /// Returns the height of the underlying tree: 0 for an empty set, 1 for
    /// a single element.
    ///
    /// Rebalancing keeps the height within a constant factor of log2(n), so
    /// this is mostly useful for diagnostics.
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::OSAvlSet;
    ///
    /// let set: OSAvlSet<i32> = (1..=7).collect();
    /// assert_eq!(set.height(), 3);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::OSAvlSet;
    ///
    /// let mut a = OSAvlSet::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1).unwrap();
    /// assert_eq!(a.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::OSAvlSet;
    ///
    /// let mut a = OSAvlSet::new();
    /// assert!(a.is_empty());
    /// a.insert(1).unwrap();
    /// assert!(!a.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}

impl<T: Hash> Hash for OSAvlSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: PartialEq> PartialEq for OSAvlSet<T> {
    fn eq(&self, other: &OSAvlSet<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for OSAvlSet<T> {}

impl<T: PartialOrd> PartialOrd for OSAvlSet<T> {
    fn partial_cmp(&self, other: &OSAvlSet<T>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for OSAvlSet<T> {
    fn cmp(&self, other: &OSAvlSet<T>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Clone> Clone for OSAvlSet<T> {
    fn clone(&self) -> Self {
        OSAvlSet {
            tree: self.tree.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for OSAvlSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for OSAvlSet<T> {
    fn default() -> Self {
        OSAvlSet::new()
    }
}

impl<T: Ord> FromIterator<T> for OSAvlSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = OSAvlSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for OSAvlSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            // Duplicates are simply skipped.
            let _ = self.insert(value);
        }
    }
}

impl<'a, T: 'a + Ord + Copy> Extend<&'a T> for OSAvlSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &value in iter {
            let _ = self.insert(value);
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for OSAvlSet<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T> IntoIterator for OSAvlSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator for moving out the `OSAvlSet`'s contents in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::OSAvlSet;
    ///
    /// let set = OSAvlSet::from([1, 2, 3, 4]);
    ///
    /// let v: Vec<_> = set.into_iter().collect();
    /// assert_eq!(v, [1, 2, 3, 4]);
    /// ```
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.tree.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a OSAvlSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iter<'a, T> {
    /// Returns the value the iterator will yield next, without advancing.
    ///
    /// Fails with [`Error::InvalidIteratorState`] once the iterator is
    /// exhausted.
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::{Error, OSAvlSet};
    ///
    /// let set = OSAvlSet::from([1, 2]);
    /// let mut iter = set.iter();
    /// assert_eq!(iter.peek(), Ok(&1));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.peek(), Err(Error::InvalidIteratorState));
    /// ```
    pub fn peek(&self) -> Result<&'a T, Error> {
        self.inner.peek()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Two iterators are equal when they traverse the same set instance and sit
/// at the same position; the values themselves are not compared.
///
/// # Examples
///
/// ```
/// use osavl_tree::OSAvlSet;
///
/// let set = OSAvlSet::from([1, 2, 3]);
/// let mut a = set.iter();
/// let mut b = set.iter();
/// assert_eq!(a, b);
/// a.next();
/// assert_ne!(a, b);
/// b.next();
/// assert_eq!(a, b);
///
/// // Same contents, different set: never equal.
/// let twin = OSAvlSet::from([1, 2, 3]);
/// assert!(set.iter() != twin.iter());
/// ```
impl<T> PartialEq for Iter<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Eq for Iter<'_, T> {}

impl<'a, T> IterRev<'a, T> {
    /// Returns the value the iterator will yield next, without advancing.
    ///
    /// Fails with [`Error::InvalidIteratorState`] once the iterator is
    /// exhausted.
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::{Error, OSAvlSet};
    ///
    /// let set = OSAvlSet::from([1, 2]);
    /// let mut iter = set.iter_rev();
    /// assert_eq!(iter.peek(), Ok(&2));
    /// iter.next();
    /// iter.next();
    /// assert_eq!(iter.peek(), Err(Error::InvalidIteratorState));
    /// ```
    pub fn peek(&self) -> Result<&'a T, Error> {
        self.inner.peek()
    }
}

impl<'a, T> Iterator for IterRev<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IterRev<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IterRev<'_, T> {}

impl<T> Clone for IterRev<'_, T> {
    fn clone(&self) -> Self {
        IterRev {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IterRev<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Two reverse iterators are equal when they traverse the same set instance
/// and sit at the same position; the values themselves are not compared.
impl<T> PartialEq for IterRev<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Eq for IterRev<'_, T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("remaining", &self.len()).finish()
    }
}

impl<T> Default for IntoIter<T> {
    /// Creates an empty `IntoIter`.
    ///
    /// ```
    /// use osavl_tree::osavl_set::IntoIter;
    ///
    /// let iter: IntoIter<u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        OSAvlSet::new().into_iter()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use alloc::format;
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn from_array_ignores_duplicates() {
        let set = OSAvlSet::from([3, 1, 2, 3, 1]);
        assert_eq!(set.len(), 3);
        let values: Vec<i32> = set.iter().copied().collect();
        assert_eq!(values, [1, 2, 3]);
    }

    #[test]
    fn extend_accepts_references() {
        let mut set = OSAvlSet::new();
        let values = [5, 1, 5, 3];
        set.extend(values.iter());
        assert_eq!(set.len(), 3);
        assert_eq!(OSAvlSet::min(&set), Ok(&1));
        assert_eq!(OSAvlSet::max(&set), Ok(&5));
    }

    #[test]
    fn default_into_iter_is_empty() {
        let mut iter = IntoIter::<i32>::default();
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn set_comparisons_are_lexicographic() {
        let a = OSAvlSet::from([1, 2, 3]);
        let b = OSAvlSet::from([1, 2, 4]);
        let c = OSAvlSet::from([1, 2]);
        assert!(a < b);
        assert!(c < a);
        assert_eq!(a.cmp(&a), Ordering::Equal);
        assert_eq!(a, OSAvlSet::from([3, 2, 1]));
    }

    #[test]
    fn debug_renders_as_set() {
        let set = OSAvlSet::from([2, 1]);
        assert_eq!(format!("{set:?}"), "{1, 2}");
    }
}
