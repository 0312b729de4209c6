use core::borrow::Borrow;
use core::cmp::Ordering;

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

use crate::error::Error;

use super::iter::{RawIntoIter, RawIter, RawIterRev};
use super::node::{Link, Node};

/// The tree engine: a box-owned AVL tree augmented with subtree sizes.
///
/// Structural surgery lives in [`Link`]; this type adds the iterative query
/// descents, the rank operations the sizes exist for, and the lifecycle
/// pieces (clone, clear, teardown). The element count is the root's subtree
/// size, so no separate length field is kept.
#[derive(Debug)]
pub(crate) struct RawAvlTree<T> {
    pub(super) root: Link<T>,
}

impl<T> RawAvlTree<T> {
    /// Creates an empty tree.
    pub(crate) const fn new() -> Self {
        Self { root: Link::new() }
    }

    /// Returns the number of stored values.
    pub(crate) fn len(&self) -> usize {
        self.root.size()
    }

    /// Returns true if the tree stores no values.
    pub(crate) fn is_empty(&self) -> bool {
        self.root.get().is_none()
    }

    /// Removes every value, tearing the node graph down iteratively.
    pub(crate) fn clear(&mut self) {
        self.root.clear_subtree();
    }

    /// Returns the height of the tree: 0 when empty, 1 for a single node.
    ///
    /// Walks into the taller child at every step, as indicated by the
    /// balance factors, so the cost is O(log n) with no stored heights.
    pub(crate) fn height(&self) -> usize {
        let mut height = 0;
        let mut current = self.root.get();
        while let Some(n) = current {
            height += 1;
            current = if n.balance > 0 {
                n.right.get()
            } else {
                n.left.get()
            };
        }
        height
    }

    /// Returns the stored value equal to `value`, if any.
    pub(crate) fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        let mut current = self.root.get();
        while let Some(n) = current {
            current = match value.cmp(n.value.borrow()) {
                Ordering::Equal => return Some(&n.value),
                Ordering::Less => n.left.get(),
                Ordering::Greater => n.right.get(),
            };
        }
        None
    }

    /// Returns true if `value` is stored in the tree.
    pub(crate) fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.get(value).is_some()
    }

    /// Returns the smallest stored value, if any.
    pub(crate) fn min(&self) -> Option<&T> {
        let mut n = self.root.get()?;
        while let Some(left) = n.left.get() {
            n = left;
        }
        Some(&n.value)
    }

    /// Returns the largest stored value, if any.
    pub(crate) fn max(&self) -> Option<&T> {
        let mut n = self.root.get()?;
        while let Some(right) = n.right.get() {
            n = right;
        }
        Some(&n.value)
    }

    /// Returns the value with one-based rank `k`, the k-th smallest.
    ///
    /// The descent compares `k` against each node's own rank within its
    /// subtree (`size(left) + 1`) and never visits elements, so the cost is
    /// O(log n).
    pub(crate) fn kth_order_statistic(&self, k: usize) -> Option<&T> {
        if k < 1 || k > self.len() {
            return None;
        }
        let mut k = k;
        let mut current = self.root.get();
        while let Some(n) = current {
            let own_rank = n.left.size() + 1;
            match k.cmp(&own_rank) {
                Ordering::Equal => return Some(&n.value),
                Ordering::Less => current = n.left.get(),
                Ordering::Greater => {
                    k -= own_rank;
                    current = n.right.get();
                }
            }
        }
        debug_assert!(false, "in-bounds rank {k} did not resolve; sizes are inconsistent");
        None
    }

    /// Counts the stored values strictly less than `value`, which need not
    /// itself be stored.
    pub(crate) fn count_less_than<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        let mut count = 0;
        let mut current = self.root.get();
        while let Some(n) = current {
            if n.value.borrow() < value {
                // This node and its whole left subtree are smaller.
                count += 1 + n.left.size();
                current = n.right.get();
            } else {
                current = n.left.get();
            }
        }
        count
    }

    /// Inserts `value`; a duplicate is rejected without mutation.
    pub(crate) fn insert(&mut self, value: T) -> Result<(), Error>
    where
        T: Ord,
    {
        self.root.insert(value)?;
        Ok(())
    }

    /// Removes and returns the stored value equal to `value`.
    pub(crate) fn remove<Q>(&mut self, value: &Q) -> Result<T, Error>
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        let (removed, _) = self.root.remove(value)?;
        Ok(removed)
    }

    /// Returns an ascending borrowing iterator.
    pub(crate) fn iter(&self) -> RawIter<'_, T> {
        RawIter::new(self)
    }

    /// Returns a descending borrowing iterator.
    pub(crate) fn iter_rev(&self) -> RawIterRev<'_, T> {
        RawIterRev::new(self)
    }
}

impl<T> Drop for RawAvlTree<T> {
    // Worklist teardown; the default recursive drop would need one stack
    // frame per tree level.
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for RawAvlTree<T> {
    /// Deep-copies the node graph with an explicit worklist. Each work item
    /// pairs a source node with its half-built copy; children are attached
    /// as childless shells and completed when their own item is processed.
    fn clone(&self) -> Self {
        let Some(src_root) = self.root.get() else {
            return Self::new();
        };
        let mut root_copy = Box::new(src_root.detached_clone());
        let mut work: Vec<(&Node<T>, &mut Node<T>)> = vec![(src_root, &mut root_copy)];
        while let Some((src, dst)) = work.pop() {
            let Node {
                left: dst_left,
                right: dst_right,
                ..
            } = dst;
            if let Some(src_left) = src.left.get() {
                dst_left.node = Some(Box::new(src_left.detached_clone()));
                work.push((src_left, dst_left.node.as_deref_mut().unwrap()));
            }
            if let Some(src_right) = src.right.get() {
                dst_right.node = Some(Box::new(src_right.detached_clone()));
                work.push((src_right, dst_right.node.as_deref_mut().unwrap()));
            }
        }
        Self {
            root: Link {
                node: Some(root_copy),
            },
        }
    }
}

impl<T> IntoIterator for RawAvlTree<T> {
    type Item = T;
    type IntoIter = RawIntoIter<T>;

    fn into_iter(self) -> RawIntoIter<T> {
        RawIntoIter::new(self)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
impl<T> RawAvlTree<T>
where
    T: Ord + core::fmt::Debug,
{
    /// Recomputes heights and sizes for every reachable node and reports
    /// each violation of the ordering, balance, and size invariants.
    pub(crate) fn validate_invariants(&self) -> Vec<alloc::string::String> {
        use alloc::format;
        use alloc::string::String;

        fn check<T: Ord + core::fmt::Debug>(
            link: &Link<T>,
            lower: Option<&T>,
            upper: Option<&T>,
            errors: &mut Vec<String>,
        ) -> (i32, usize) {
            let Some(n) = link.get() else {
                return (0, 0);
            };
            if let Some(lower) = lower {
                if n.value <= *lower {
                    errors.push(format!("BST order: {:?} is not above bound {lower:?}", n.value));
                }
            }
            if let Some(upper) = upper {
                if n.value >= *upper {
                    errors.push(format!("BST order: {:?} is not below bound {upper:?}", n.value));
                }
            }
            let (left_height, left_size) = check(&n.left, lower, Some(&n.value), errors);
            let (right_height, right_size) = check(&n.right, Some(&n.value), upper, errors);
            let balance = right_height - left_height;
            if !(-1..=1).contains(&balance) {
                errors.push(format!("AVL balance: {balance} at {:?}", n.value));
            }
            if i32::from(n.balance) != balance {
                errors.push(format!(
                    "stored balance {} at {:?} but subtree heights give {balance}",
                    n.balance, n.value
                ));
            }
            let size = 1 + left_size + right_size;
            if n.size != size {
                errors.push(format!("stored size {} at {:?} but counted {size}", n.size, n.value));
            }
            (1 + left_height.max(right_height), size)
        }

        let mut errors = Vec::new();
        let (_, size) = check(&self.root, None, None, &mut errors);
        if size != self.len() {
            errors.push(format!("len() reports {} but the tree holds {size}", self.len()));
        }
        errors
    }
}
