use core::borrow::Borrow;
use core::cmp::Ordering;
use core::mem;

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::error::Error;

/// A single tree node: the stored value plus the balance factor and subtree
/// size that keep rebalancing and rank queries O(log n).
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(super) value: T,
    // Height of the right subtree minus height of the left subtree.
    pub(super) balance: i8,
    // Number of nodes in the subtree rooted here, this node included.
    pub(super) size: usize,
    pub(super) left: Link<T>,
    pub(super) right: Link<T>,
}

/// An owning edge in the tree: either empty or the boxed root of a subtree.
///
/// All structural surgery (rotations, splicing, rebalancing) happens through
/// links, so that replacing a subtree root is an ordinary store into the
/// parent's edge rather than a special case at the tree root.
#[derive(Debug)]
pub(crate) struct Link<T> {
    pub(super) node: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// Creates a detached leaf node holding `value`.
    fn new(value: T) -> Self {
        Self {
            value,
            balance: 0,
            size: 1,
            left: Link::new(),
            right: Link::new(),
        }
    }

    /// Recomputes this node's subtree size from its children.
    fn update_size(&mut self) {
        self.size = 1 + self.left.size() + self.right.size();
    }

    /// Copies the value and augmentation fields, leaving both children
    /// empty. The caller is expected to attach equivalent children, which
    /// is why `balance` and `size` carry over unchanged.
    pub(super) fn detached_clone(&self) -> Self
    where
        T: Clone,
    {
        Self {
            value: self.value.clone(),
            balance: self.balance,
            size: self.size,
            left: Link::new(),
            right: Link::new(),
        }
    }
}

impl<T> Link<T> {
    /// Creates an empty link.
    pub(super) const fn new() -> Self {
        Self { node: None }
    }

    /// Returns the node behind this link, if any.
    pub(super) fn get(&self) -> Option<&Node<T>> {
        self.node.as_deref()
    }

    /// Returns the size of the subtree behind this link, 0 when empty.
    pub(super) fn size(&self) -> usize {
        self.node.as_deref().map_or(0, |n| n.size)
    }

    /// Returns the balance factor of the node behind this link, 0 when
    /// empty.
    fn balance(&self) -> i8 {
        self.node.as_deref().map_or(0, |n| n.balance)
    }

    /// Drops the whole subtree behind this link through an explicit
    /// worklist, so teardown never recurses node by node however deep the
    /// tree is.
    pub(super) fn clear_subtree(&mut self) {
        let mut work: Vec<Box<Node<T>>> = Vec::new();
        if let Some(root) = self.node.take() {
            work.push(root);
        }
        while let Some(mut n) = work.pop() {
            if let Some(left) = n.left.node.take() {
                work.push(left);
            }
            if let Some(right) = n.right.node.take() {
                work.push(right);
            }
        }
    }

    /// Inserts `value` into the subtree behind this link. A duplicate is
    /// rejected before anything is touched, so the error path leaves no
    /// partial updates behind. Returns whether the subtree height grew.
    pub(super) fn insert(&mut self, value: T) -> Result<bool, Error>
    where
        T: Ord,
    {
        let Some(n) = self.node.as_deref_mut() else {
            self.node = Some(Box::new(Node::new(value)));
            return Ok(true);
        };
        match value.cmp(&n.value) {
            Ordering::Equal => Err(Error::DuplicateKey),
            Ordering::Less => {
                let grew = n.left.insert(value)?;
                n.size += 1;
                if !grew {
                    return Ok(false);
                }
                n.balance -= 1;
                if n.balance >= -1 {
                    return Ok(n.balance != 0);
                }
                // Left-heavy by two levels. One rotation restores the
                // height this subtree had before the insert, so nothing
                // further up the path needs rebalancing.
                if n.left.balance() > 0 {
                    self.rotate_left_right();
                } else {
                    self.rotate_right();
                }
                debug_assert_eq!(self.balance(), 0);
                Ok(false)
            }
            Ordering::Greater => {
                let grew = n.right.insert(value)?;
                n.size += 1;
                if !grew {
                    return Ok(false);
                }
                n.balance += 1;
                if n.balance <= 1 {
                    return Ok(n.balance != 0);
                }
                if n.right.balance() < 0 {
                    self.rotate_right_left();
                } else {
                    self.rotate_left();
                }
                debug_assert_eq!(self.balance(), 0);
                Ok(false)
            }
        }
    }

    /// Removes the node holding `value` from the subtree behind this link.
    /// Returns the removed value and whether the subtree height decreased.
    pub(super) fn remove<Q>(&mut self, value: &Q) -> Result<(T, bool), Error>
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        let Some(n) = self.node.as_deref_mut() else {
            return Err(Error::NotFound);
        };
        match value.cmp(n.value.borrow()) {
            Ordering::Less => {
                let (removed, child_shrank) = n.left.remove(value)?;
                n.size -= 1;
                if child_shrank {
                    Ok((removed, self.rebalance_after_left_shrink()))
                } else {
                    Ok((removed, false))
                }
            }
            Ordering::Greater => {
                let (removed, child_shrank) = n.right.remove(value)?;
                n.size -= 1;
                if child_shrank {
                    Ok((removed, self.rebalance_after_right_shrink()))
                } else {
                    Ok((removed, false))
                }
            }
            Ordering::Equal => Ok(self.unlink()),
        }
    }

    /// Detaches the node behind this link, splicing the in-order successor
    /// into its place when both children are present. Returns the removed
    /// value and whether the subtree height decreased. The link must be
    /// occupied.
    fn unlink(&mut self) -> (T, bool) {
        let n = self.node.as_deref_mut().unwrap();
        let Some(left) = n.left.node.take() else {
            // Leaf, or right child only: the right subtree moves up.
            let right = n.right.node.take();
            let removed = mem::replace(&mut self.node, right).unwrap();
            return (removed.value, true);
        };
        let (successor, right_shrank) = n.right.take_leftmost();
        let Some(mut successor) = successor else {
            // Left child only: it moves up.
            let removed = mem::replace(&mut self.node, Some(left)).unwrap();
            return (removed.value, true);
        };
        // Both children: the successor takes over this position, inheriting
        // the removed node's balance and children. Its own fields were
        // reset when it was detached.
        successor.balance = n.balance;
        successor.right.node = n.right.node.take();
        successor.left.node = Some(left);
        successor.update_size();
        let removed = mem::replace(&mut self.node, Some(successor)).unwrap();
        if right_shrank {
            let shrank = self.rebalance_after_right_shrink();
            (removed.value, shrank)
        } else {
            (removed.value, false)
        }
    }

    /// Detaches the leftmost node of the subtree behind this link. The
    /// detached node comes back with both children empty and its
    /// augmentation reset; the flag reports whether the subtree height
    /// decreased.
    fn take_leftmost(&mut self) -> (Option<Box<Node<T>>>, bool) {
        let Some(n) = self.node.as_deref_mut() else {
            return (None, false);
        };
        let (leftmost, child_shrank) = n.left.take_leftmost();
        if leftmost.is_some() {
            n.size -= 1;
            if child_shrank {
                return (leftmost, self.rebalance_after_left_shrink());
            }
            return (leftmost, false);
        }
        // No left child: this node is the leftmost. Its right subtree
        // (possibly empty) moves up.
        let right = n.right.node.take();
        n.balance = 0;
        n.size = 1;
        let detached = mem::replace(&mut self.node, right);
        (detached, true)
    }

    /// Re-establishes the balance invariant after the left subtree lost one
    /// level of height. Returns whether the height of this subtree
    /// decreased. Unlike the insert path, a shrink can leave an ancestor
    /// unbalanced again, so callers keep propagating the flag upward.
    fn rebalance_after_left_shrink(&mut self) -> bool {
        let n = self.node.as_deref_mut().unwrap();
        n.balance += 1;
        if n.balance <= 1 {
            return n.balance == 0;
        }
        // Right-heavy by two levels. The rotation is chosen from the
        // current lean of the right child, never from any remembered
        // descent direction.
        let lean = n.right.balance();
        if lean < 0 {
            self.rotate_right_left();
            true
        } else {
            self.rotate_left();
            lean != 0
        }
    }

    /// Mirror of [`Self::rebalance_after_left_shrink`] for a right subtree
    /// that lost one level of height.
    fn rebalance_after_right_shrink(&mut self) -> bool {
        let n = self.node.as_deref_mut().unwrap();
        n.balance -= 1;
        if n.balance >= -1 {
            return n.balance == 0;
        }
        let lean = n.left.balance();
        if lean > 0 {
            self.rotate_left_right();
            true
        } else {
            self.rotate_right();
            lean != 0
        }
    }

    /// Promotes the right child over the node behind this link. New balance
    /// factors follow from the pre-rotation factors alone; sizes are
    /// recomputed for the two nodes whose children changed.
    ///
    /// As the inner step of a double rotation the promoted node can come
    /// out at -2, which the enclosing rotation immediately corrects.
    fn rotate_left(&mut self) {
        let n = self.node.as_deref_mut().unwrap();
        debug_assert!((1..=2).contains(&n.balance));
        let mut r = n.right.node.take().unwrap();
        let n_balance = n.balance;
        n.balance = if r.balance >= 0 {
            n_balance - r.balance - 1
        } else {
            n_balance - 1
        };
        debug_assert!((-1..=1).contains(&n.balance));
        if n.balance >= 0 {
            r.balance -= 1;
        } else if r.balance >= 0 {
            r.balance = n_balance - 2;
        } else {
            r.balance = n_balance + r.balance - 2;
        }
        debug_assert!((-2..=1).contains(&r.balance));
        n.right.node = r.left.node.take();
        n.update_size();
        r.left.node = self.node.take();
        r.update_size();
        self.node = Some(r);
    }

    /// Mirror of [`Self::rotate_left`]: promotes the left child over the
    /// node behind this link.
    fn rotate_right(&mut self) {
        let n = self.node.as_deref_mut().unwrap();
        debug_assert!((-2..=-1).contains(&n.balance));
        let mut l = n.left.node.take().unwrap();
        let n_balance = n.balance;
        n.balance = if l.balance <= 0 {
            n_balance - l.balance + 1
        } else {
            n_balance + 1
        };
        debug_assert!((-1..=1).contains(&n.balance));
        if n.balance <= 0 {
            l.balance += 1;
        } else if l.balance <= 0 {
            l.balance = n_balance + 2;
        } else {
            l.balance = n_balance + l.balance + 2;
        }
        debug_assert!((-1..=2).contains(&l.balance));
        n.left.node = l.right.node.take();
        n.update_size();
        l.right.node = self.node.take();
        l.update_size();
        self.node = Some(l);
    }

    /// Double rotation for a left-heavy node whose left child leans right:
    /// rotate the left child left, then this node right.
    fn rotate_left_right(&mut self) {
        if let Some(n) = self.node.as_deref_mut() {
            n.left.rotate_left();
        }
        self.rotate_right();
    }

    /// Double rotation for a right-heavy node whose right child leans left:
    /// rotate the right child right, then this node left.
    fn rotate_right_left(&mut self) {
        if let Some(n) = self.node.as_deref_mut() {
            n.right.rotate_right();
        }
        self.rotate_left();
    }
}
