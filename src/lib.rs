//! This crate exposes a Binary Search Tree (BST) of unique keys that can be walked in every
//! classic traversal order and rebuilt into a balanced shape on demand.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of key (the key that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the right subtree.
//!
//! ## Balancing on demand
//!
//! The [`Tree`] here never rotates. Insertions and deletions keep the ordering invariants but
//! the height depends on the order keys arrive in, degrading to `N` for sorted input. Calling
//! [`Tree::rebalance`] rebuilds the whole tree from its sorted keys so the height drops back to
//! `⌈lg(N + 1)⌉`.
//!
//! ```
//! use rebuild_bst::{TraversalOrder, Tree};
//!
//! let mut tree: Tree<i32> = (0..15).collect();
//! assert_eq!(tree.height(), 15);
//!
//! tree.rebalance();
//! assert_eq!(tree.height(), 4);
//! assert_eq!(
//!     tree.to_vec(TraversalOrder::LevelOrder),
//!     [7, 3, 11, 1, 5, 9, 13, 0, 2, 4, 6, 8, 10, 12, 14]
//! );
//! ```

#![deny(missing_docs)]

pub mod draw;
mod error;
mod node;
mod traversal;
mod tree;
mod util;

pub use error::TraversalError;
pub use traversal::{Iter, TraversalOrder, Visit};
pub use tree::Tree;
