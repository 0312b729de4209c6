//! An order-statistic AVL tree for Rust.
//!
//! This crate provides [`OSAvlSet`], an ordered set over a height-balanced
//! binary search tree whose nodes are augmented with subtree sizes. On top of
//! the usual ordered-set operations it supports O(log n) order statistics:
//!
//! - [`kth_order_statistic`](OSAvlSet::kth_order_statistic) - Get the k-th smallest element
//! - [`count_less_than`](OSAvlSet::count_less_than) - Count the elements below a bound
//! - Indexing by [`Rank`] - e.g., `set[Rank(1)]` for the smallest element
//!
//! # Example
//!
//! ```
//! use osavl_tree::{OSAvlSet, Rank};
//!
//! let mut scores = OSAvlSet::new();
//! scores.insert(85).unwrap();
//! scores.insert(100).unwrap();
//! scores.insert(92).unwrap();
//!
//! // Standard ordered-set operations work as expected
//! assert!(scores.contains(&85));
//! assert_eq!(scores.len(), 3);
//!
//! // Order-statistic operations (O(log n))
//! // Get the median (rank 2 = second element in sorted order)
//! assert_eq!(scores.kth_order_statistic(2), Ok(&92));
//!
//! // Count the scores below a threshold
//! assert_eq!(scores.count_less_than(&90), 1);
//!
//! // Index by rank
//! assert_eq!(scores[Rank(3)], 100);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Familiar API** - Mirrors `std::collections::BTreeSet` where the two overlap
//! - **O(log n) rank operations** - Efficient order-statistic queries via subtree size augmentation
//! - **Explicit error contract** - Failed operations report [`Error`] values and never mutate the set
//!
//! # Implementation
//!
//! The set is implemented as an AVL tree storing one element per node, each
//! node carrying a balance factor and the size of its subtree. Rotations
//! repair both after every insertion and removal, keeping lookups, mutations,
//! and rank queries logarithmic. Teardown, cloning, and owning iteration all
//! run iteratively so that deep trees cannot exhaust the call stack.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod order_statistic;
mod raw;

pub mod osavl_set;

pub use error::Error;
pub use order_statistic::Rank;
pub use osavl_set::OSAvlSet;
