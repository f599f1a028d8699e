//! Iterators over the values of a [`Tree`][crate::Tree].
//!
//! Each iterator owns an explicit stack of at most `O(height)` entries instead of
//! recursing, and each call that creates one starts a fresh walk from the root.
//!
//! # Examples
//!
//! ```
//! use binary_tree::Tree;
//!
//! let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
//!
//! let mut first = tree.in_order().unwrap();
//! let mut second = tree.in_order().unwrap();
//!
//! // Walks don't share any state.
//! assert_eq!(first.next(), Some(&1));
//! assert_eq!(first.next(), Some(&3));
//! assert_eq!(second.next(), Some(&1));
//!
//! assert!(tree.pre_order().unwrap().eq(&[5, 3, 1, 4, 8]));
//! ```

use std::iter::FusedIterator;

use crate::node::{self, Link, Node};

/// Yields borrowed values in ascending order. Created by [`Tree::in_order`] and
/// [`Tree::iter`].
///
/// [`Tree::in_order`]: crate::Tree::in_order
/// [`Tree::iter`]: crate::Tree::iter
pub struct InOrder<'a, T> {
    /// Nodes whose left subtree has been (or is being) visited but which haven't been
    /// yielded yet. The top of the stack is always the next value.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut next: Option<&'a Node<T>>) {
        while let Some(node) = next {
            self.stack.push(node);
            next = node.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for InOrder<'_, T> {}
impl<T> FusedIterator for InOrder<'_, T> {}

/// Manual implementation of `Clone` so cloning a walk doesn't require `T: Clone`.
impl<T> Clone for InOrder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

/// Yields borrowed values node first, then the left subtree, then the right subtree.
/// Created by [`Tree::pre_order`][crate::Tree::pre_order].
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            stack: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes in first so the left subtree comes out first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for PreOrder<'_, T> {}
impl<T> FusedIterator for PreOrder<'_, T> {}

impl<T> Clone for PreOrder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

/// Yields owned values in ascending order, taking the tree apart as it goes. Created
/// by calling `into_iter` on a [`Tree`][crate::Tree].
pub struct IntoIter<T> {
    /// Nodes already detached from their parent's left slot. Their right subtrees are
    /// still attached.
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut next: Link<T>) {
        while let Some(mut node) = next {
            next = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for node in self.stack.drain(..) {
            node::teardown(Some(node));
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left_spine(node.right.take());
        self.remaining = self.remaining.saturating_sub(1);
        Some((*node).into_value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
