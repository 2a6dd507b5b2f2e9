//! This crate exposes a link-based Binary Search Tree (BST) with ordered
//! set semantics, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! owns up to two child `Node`s. The invariants of this BST are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    greater than or equal to its own value.
//!
//! > The second invariant means equal values are allowed. They always go to
//! > the right, so the tree behaves like a sorted multiset.
//!
//! Searching takes `O(height)` where `height` is the longest path from the
//! root `Node` to a leaf `Node`. Nothing here rebalances on insertion, so
//! adding values in ascending order produces a tree that is really a linked
//! list. [`OrderedTree::rebalance`] rebuilds the tree with minimal height on
//! demand and [`OrderedTree::is_balanced`] tells you when that is worth it.
//!
//! # Examples
//!
//! ```
//! use linked_bst::OrderedTree;
//!
//! let mut tree: OrderedTree<_> = (1..=10).collect();
//! assert_eq!(tree.height(), Some(9));
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert_eq!(tree.height(), Some(3));
//! assert!(tree.is_balanced());
//!
//! assert_eq!(tree.range_find(&3, &7), vec![&3, &4, &5, &6, &7]);
//! assert_eq!(tree.successor(&5), Some(&6));
//! assert_eq!(tree.predecessor(&1), None);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod collection;
pub mod error;
pub mod iter;
mod node;
pub mod ordered;


pub use collection::Collection;
pub use error::{TreeError, TreeResult};
pub use ordered::OrderedTree;
