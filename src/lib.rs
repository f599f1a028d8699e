//! This crate exposes a plain, unbalanced Binary Search Tree (BST) that keeps its
//! values arranged by a comparator chosen when the tree is built.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as
//! the longest path from the root `Node` to a leaf `Node`). The [`Tree`] here never
//! rebalances itself, so its height is decided entirely by the order values arrive in:
//! anywhere from `O(lg N)` to `N`. BSTs also naturally support sorted iteration by
//! visiting the left subtree, then the subtree root, then the right subtree.
//!
//! # Examples
//!
//! ```
//! use binary_tree::{Order, Tree, TreeError};
//!
//! let mut tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//!
//! assert_eq!(tree.len(), 7);
//! assert!(tree.in_order()?.eq(&[1, 3, 4, 5, 7, 8, 9]));
//!
//! assert!(tree.remove(&5));
//! assert!(!tree.contains(&5));
//!
//! // Any comparator works, even for types that aren't `Ord`.
//! let by_abs = Order::by(|a: &i64, b: &i64| a.abs().cmp(&b.abs()));
//! let tree = Tree::try_from_values_with_order(Some([-3, 2, -1]), Some(by_abs))?;
//! assert!(tree.iter().eq(&[-1, 2, -3]));
//!
//! # Ok::<(), TreeError>(())
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod node;
pub mod order;
pub mod traversal;
pub mod tree;

mod util;

#[cfg(test)]
mod test;

pub use error::{Result, TreeError};
pub use node::Node;
pub use order::Order;
pub use traversal::{InOrder, IntoIter, PreOrder};
pub use tree::Tree;
