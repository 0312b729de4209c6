use core::iter::FusedIterator;
use core::ptr;

use alloc::boxed::Box;

use smallvec::SmallVec;

use crate::error::Error;

use super::node::Node;
use super::raw_avl_tree::RawAvlTree;

// An AVL tree of n nodes is at most ~1.44 * log2(n) levels deep, so 16
// inline slots cover trees of a few thousand elements before spilling.
type AncestorStack<'a, T> = SmallVec<[&'a Node<T>; 16]>;
type OwnedStack<T> = SmallVec<[Box<Node<T>>; 16]>;

/// Ascending in-order iterator over borrowed values.
///
/// The stack holds the ancestors still to visit; its top is the node the
/// iterator currently rests on. Advancing pops that node and pushes the
/// left spine of its right subtree. Nodes carry no parent pointers, so the
/// stack is the only record of where the walk came from.
#[derive(Debug)]
pub(crate) struct RawIter<'a, T> {
    tree: &'a RawAvlTree<T>,
    stack: AncestorStack<'a, T>,
    remaining: usize,
}

/// Descending in-order iterator over borrowed values; the mirror image of
/// [`RawIter`].
pub(crate) struct RawIterRev<'a, T> {
    tree: &'a RawAvlTree<T>,
    stack: AncestorStack<'a, T>,
    remaining: usize,
}

/// Owning ascending iterator. Nodes are detached from the tree as the
/// spines unwind, so every yielded box is flat by the time it is freed.
pub(crate) struct RawIntoIter<T> {
    stack: OwnedStack<T>,
    remaining: usize,
}

impl<'a, T> RawIter<'a, T> {
    pub(crate) fn new(tree: &'a RawAvlTree<T>) -> Self {
        let mut stack = AncestorStack::new();
        let mut current = tree.root.get();
        while let Some(n) = current {
            stack.push(n);
            current = n.left.get();
        }
        Self {
            tree,
            stack,
            remaining: tree.len(),
        }
    }

    /// Returns the value the iterator rests on without advancing, or
    /// [`Error::InvalidIteratorState`] once the iterator is exhausted.
    pub(crate) fn peek(&self) -> Result<&'a T, Error> {
        self.stack
            .last()
            .copied()
            .map(|n| &n.value)
            .ok_or(Error::InvalidIteratorState)
    }
}

impl<'a, T> Iterator for RawIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.stack.pop()?;
        let mut current = n.right.get();
        while let Some(c) = current {
            self.stack.push(c);
            current = c.left.get();
        }
        self.remaining -= 1;
        Some(&n.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for RawIter<'_, T> {}

impl<T> FusedIterator for RawIter<'_, T> {}

impl<T> Clone for RawIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

// Iterators compare equal only when they walk the same tree instance and
// rest on the same node; two exhausted iterators over one tree are equal.
impl<T> PartialEq for RawIter<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree)
            && match (self.stack.last().copied(), other.stack.last().copied()) {
                (Some(a), Some(b)) => ptr::eq(a, b),
                (None, None) => true,
                _ => false,
            }
    }
}

impl<T> Eq for RawIter<'_, T> {}

impl<'a, T> RawIterRev<'a, T> {
    pub(crate) fn new(tree: &'a RawAvlTree<T>) -> Self {
        let mut stack = AncestorStack::new();
        let mut current = tree.root.get();
        while let Some(n) = current {
            stack.push(n);
            current = n.right.get();
        }
        Self {
            tree,
            stack,
            remaining: tree.len(),
        }
    }

    /// Returns the value the iterator rests on without advancing, or
    /// [`Error::InvalidIteratorState`] once the iterator is exhausted.
    pub(crate) fn peek(&self) -> Result<&'a T, Error> {
        self.stack
            .last()
            .copied()
            .map(|n| &n.value)
            .ok_or(Error::InvalidIteratorState)
    }
}

impl<'a, T> Iterator for RawIterRev<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.stack.pop()?;
        let mut current = n.left.get();
        while let Some(c) = current {
            self.stack.push(c);
            current = c.right.get();
        }
        self.remaining -= 1;
        Some(&n.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for RawIterRev<'_, T> {}

impl<T> FusedIterator for RawIterRev<'_, T> {}

impl<T> Clone for RawIterRev<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T> PartialEq for RawIterRev<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree)
            && match (self.stack.last().copied(), other.stack.last().copied()) {
                (Some(a), Some(b)) => ptr::eq(a, b),
                (None, None) => true,
                _ => false,
            }
    }
}

impl<T> Eq for RawIterRev<'_, T> {}

impl<T> RawIntoIter<T> {
    pub(crate) fn new(mut tree: RawAvlTree<T>) -> Self {
        let remaining = tree.len();
        let mut stack = OwnedStack::new();
        let mut current = tree.root.node.take();
        while let Some(mut n) = current {
            current = n.left.node.take();
            stack.push(n);
        }
        Self { stack, remaining }
    }
}

impl<T> Iterator for RawIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut n = self.stack.pop()?;
        let mut current = n.right.node.take();
        while let Some(mut c) = current {
            current = c.left.node.take();
            self.stack.push(c);
        }
        self.remaining -= 1;
        Some(n.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for RawIntoIter<T> {}

impl<T> FusedIterator for RawIntoIter<T> {}

impl<T> Drop for RawIntoIter<T> {
    /// Drains whatever was not consumed without recursing: stacked nodes
    /// have empty left links, and their right subtrees are torn down
    /// through the worklist.
    fn drop(&mut self) {
        for mut n in self.stack.drain(..) {
            n.right.clear_subtree();
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn tree_of(values: &[i32]) -> RawAvlTree<i32> {
        let mut tree = RawAvlTree::new();
        for &value in values {
            tree.insert(value).unwrap();
        }
        tree
    }

    #[test]
    fn forward_iteration_is_ascending() {
        let tree = tree_of(&[3, 1, 2, 5, 4]);
        let values: Vec<i32> = RawIter::new(&tree).copied().collect();
        assert_eq!(values, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn reverse_iteration_is_descending() {
        let tree = tree_of(&[3, 1, 2, 5, 4]);
        let values: Vec<i32> = RawIterRev::new(&tree).copied().collect();
        assert_eq!(values, [5, 4, 3, 2, 1]);
    }

    #[test]
    fn peek_does_not_advance() {
        let tree = tree_of(&[2, 1, 3]);
        let mut iter = RawIter::new(&tree);
        assert_eq!(iter.peek(), Ok(&1));
        assert_eq!(iter.peek(), Ok(&1));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.peek(), Ok(&2));
    }

    #[test]
    fn exhausted_peek_is_an_error() {
        let tree = tree_of(&[1, 2]);
        let mut iter = RawIter::new(&tree);
        assert_eq!(iter.by_ref().count(), 2);
        assert_eq!(iter.peek(), Err(Error::InvalidIteratorState));
        // Fused: further calls keep reporting exhaustion.
        assert_eq!(iter.next(), None);
        assert_eq!(iter.peek(), Err(Error::InvalidIteratorState));

        let empty: RawAvlTree<i32> = RawAvlTree::new();
        assert_eq!(RawIter::new(&empty).peek(), Err(Error::InvalidIteratorState));
    }

    #[test]
    fn iterators_compare_by_tree_and_position() {
        let tree = tree_of(&[1, 2, 3]);
        let twin = tree_of(&[1, 2, 3]);

        let mut a = RawIter::new(&tree);
        let mut b = RawIter::new(&tree);
        assert_eq!(a, b);
        a.next();
        assert_ne!(a, b);
        b.next();
        assert_eq!(a, b);

        // Same contents, different tree instance.
        assert_ne!(RawIter::new(&tree), RawIter::new(&twin));

        // Exhausted iterators over the same tree agree.
        while a.next().is_some() {}
        while b.next().is_some() {}
        assert_eq!(a, b);
    }

    #[test]
    fn remaining_counts_are_exact() {
        let tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);
        let mut iter = RawIter::new(&tree);
        for expected in (0..7).rev() {
            iter.next();
            assert_eq!(iter.len(), expected);
        }
        drop(iter);
        assert_eq!(RawIterRev::new(&tree).len(), 7);
        assert_eq!(RawIntoIter::new(tree).len(), 7);
    }

    #[test]
    fn owning_iteration_moves_values_out() {
        let tree = tree_of(&[3, 1, 2]);
        let values: Vec<i32> = RawIntoIter::new(tree).collect();
        assert_eq!(values, [1, 2, 3]);
    }

    #[test]
    fn dropping_a_partial_owning_iterator_is_clean() {
        let mut iter = RawIntoIter::new(tree_of(&[4, 2, 6, 1, 3, 5, 7]));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), Some(2));
        drop(iter);
    }
}
