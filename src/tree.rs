//! An unbalanced BST that stores values ordered by a configurable [`Order`].
//!
//! Nothing is ever rotated, so the shape of a `Tree` depends on the order values were
//! inserted in: sorted input degrades it into a list. Every operation walks the tree
//! iteratively so even those degenerate shapes never recurse.
//!
//! Values that compare equal are all kept. A duplicate goes into the right subtree of
//! the node it ties with, so searches and removals always find the one closest to the
//! root first.
//!
//! # Examples
//!
//! ```
//! use binary_tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(1);
//! assert!(tree.contains(&1));
//!
//! // Inserting the same value again keeps both copies.
//! tree.insert(1);
//! assert_eq!(tree.len(), 2);
//!
//! // Each removal takes out one copy.
//! assert!(tree.remove(&1));
//! assert!(tree.contains(&1));
//! assert!(tree.remove(&1));
//! assert!(!tree.contains(&1));
//! assert!(!tree.remove(&1));
//! ```
//!
//! # Concurrency
//!
//! A `Tree` has no internal locking. Callers sharing one across threads must wrap
//! every operation, reads included, in their own synchronization.

use std::cmp;
use std::fmt;
use std::iter;
use std::mem;

use tracing::{debug, trace};

use crate::error::{Result, TreeError};
use crate::node::{self, Link, Node};
use crate::order::Order;
use crate::traversal::{InOrder, IntoIter, PreOrder};
use crate::util::Promotion;

/// A Binary Search Tree. Every value in a node's left subtree compares less than the
/// node's value and every value in its right subtree compares greater than or equal
/// to it.
pub struct Tree<T> {
    root: Link<T>,
    count: usize,
    order: Order<T>,
}

impl<T: Ord> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        node::teardown(self.root.take());
    }
}

impl<T: Ord> Tree<T> {
    /// Generates a new, empty `Tree` using the natural order of `T`.
    pub fn new() -> Self {
        Self::with_order(Order::natural())
    }

    /// Builds a `Tree` from `values` using the natural order of `T`. The values are
    /// inserted one at a time in iteration order.
    ///
    /// # Errors
    ///
    /// [`TreeError::MissingArgument`] if `values` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::{Tree, TreeError};
    ///
    /// let tree = Tree::try_from_values(Some(vec![2, 1, 3])).unwrap();
    /// assert_eq!(tree.len(), 3);
    ///
    /// let missing = Tree::<i32>::try_from_values(None::<Vec<i32>>);
    /// assert_eq!(missing.err(), Some(TreeError::MissingArgument("values")));
    /// ```
    pub fn try_from_values<I>(values: Option<I>) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::try_from_values_with_order(values, Some(Order::natural()))
    }

    /// Generates a new, empty `Tree` using `order` if there is one and the natural
    /// order of `T` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::{Order, Tree};
    ///
    /// let mut descending = Tree::with_order_or_natural(Some(Order::natural().reversed()));
    /// descending.extend([1, 2, 3]);
    /// assert!(descending.iter().eq(&[3, 2, 1]));
    ///
    /// let mut ascending = Tree::with_order_or_natural(None);
    /// ascending.extend([3, 1, 2]);
    /// assert!(ascending.iter().eq(&[1, 2, 3]));
    /// ```
    pub fn with_order_or_natural(order: Option<Order<T>>) -> Self {
        Self::with_order(order.unwrap_or_default())
    }

    /// Like [`Tree::try_from_values_with_order`] except a missing `order` falls back to
    /// the natural order of `T`.
    ///
    /// # Errors
    ///
    /// [`TreeError::MissingArgument`] if `values` is `None`.
    pub fn try_from_values_with_order_or_natural<I>(
        values: Option<I>,
        order: Option<Order<T>>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::try_from_values_with_order(values, Some(order.unwrap_or_default()))
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree` that arranges its values by `order`.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::{Order, Tree};
    ///
    /// // `f64` isn't `Ord` so it needs an explicit order.
    /// let mut tree = Tree::with_order(Order::by(|a: &f64, b: &f64| a.total_cmp(b)));
    /// tree.extend([2.5, -1.0, 0.5]);
    ///
    /// assert!(tree.iter().eq(&[-1.0, 0.5, 2.5]));
    /// ```
    pub fn with_order(order: Order<T>) -> Self {
        debug!(?order, "constructing tree");
        Self {
            root: None,
            count: 0,
            order,
        }
    }

    /// Generates a new, empty `Tree` from an order that may be absent.
    ///
    /// # Errors
    ///
    /// [`TreeError::NoOrdering`] if `order` is `None`. Use
    /// [`Tree::with_order_or_natural`] to fall back to the natural order instead.
    pub fn try_with_order(order: Option<Order<T>>) -> Result<Self> {
        order.map(Self::with_order).ok_or(TreeError::NoOrdering)
    }

    /// Builds a `Tree` from `values` arranged by `order`. The values are inserted one at
    /// a time in iteration order, so the resulting shape depends on that order.
    ///
    /// # Errors
    ///
    /// [`TreeError::NoOrdering`] if `order` is `None`, otherwise
    /// [`TreeError::MissingArgument`] if `values` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::{Order, Tree, TreeError};
    ///
    /// let by_len = Order::by(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    /// let tree = Tree::try_from_values_with_order(Some(["ccc", "a", "bb"]), Some(by_len));
    /// assert!(tree.unwrap().iter().eq(&["a", "bb", "ccc"]));
    ///
    /// let no_order = Tree::<&str>::try_from_values_with_order(Some(["a"]), None);
    /// assert_eq!(no_order.err(), Some(TreeError::NoOrdering));
    /// ```
    pub fn try_from_values_with_order<I>(
        values: Option<I>,
        order: Option<Order<T>>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::try_with_order(order)?;
        let values = values.ok_or(TreeError::MissingArgument("values"))?;
        tree.extend(values);
        Ok(tree)
    }

    /// The number of values in the tree, duplicates included.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The order this tree was constructed with.
    pub fn order(&self) -> &Order<T> {
        &self.order
    }

    /// The root node, for inspecting the shape of the tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree
    /// has a height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::Tree;
    ///
    /// let balanced: Tree<_> = [2, 1, 3].into_iter().collect();
    /// let list: Tree<_> = [1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(balanced.height(), 2);
    /// assert_eq!(list.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<_> = self.root().map(|root| (root, 1)).into_iter().collect();

        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.left().map(|left| (left, depth + 1)));
            stack.extend(node.right().map(|right| (right, depth + 1)));
        }

        deepest
    }

    /// Inserts `value` into the tree. Values comparing equal to ones already present are
    /// kept as well and go to the right of them.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert!(tree.iter().eq(&[1, 2, 2]));
    /// ```
    pub fn insert(&mut self, value: T) {
        let order = &self.order;
        let mut slot = &mut self.root;
        let mut depth = 0;

        while let Some(node) = slot {
            slot = match order.compare(&value, node.value()) {
                cmp::Ordering::Less => &mut node.left,
                cmp::Ordering::Equal | cmp::Ordering::Greater => &mut node.right,
            };
            depth += 1;
        }

        *slot = Some(Node::new_boxed(value));
        self.count += 1;
        trace!(depth, count = self.count, "inserted value");
    }

    /// Whether a value comparing equal to `value` is in the tree.
    pub fn contains(&self, value: &T) -> bool {
        let found = self.find(value).is_some();
        trace!(found, "searched for value");
        found
    }

    /// Potentially finds the stored value comparing equal to `value`. When there are
    /// duplicates, this is the one closest to the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::{Order, Tree};
    ///
    /// let by_key = Order::by(|a: &(u8, &str), b: &(u8, &str)| a.0.cmp(&b.0));
    /// let mut tree = Tree::with_order(by_key);
    /// tree.insert((1, "first"));
    /// tree.insert((1, "second"));
    ///
    /// assert_eq!(tree.get(&(1, "")), Some(&(1, "first")));
    /// assert_eq!(tree.get(&(2, "")), None);
    /// ```
    pub fn get(&self, value: &T) -> Option<&T> {
        self.find(value).map(Node::value)
    }

    /// Removes one value comparing equal to `value`. Returns whether anything was
    /// removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert!(tree.remove(&5));
    /// assert!(!tree.remove(&42));
    ///
    /// // 8 had no left child so it took over the root.
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(8));
    /// assert!(tree.iter().eq(&[3, 8]));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        self.remove_with_promotion(value).is_some()
    }

    /// Drops every value, leaving an empty tree behind.
    pub fn clear(&mut self) {
        let released = mem::take(&mut self.count);
        node::teardown(self.root.take());
        debug!(released, "cleared tree");
    }

    /// Iterates over the values in ascending order. Unlike [`Tree::in_order`] this never
    /// fails: an empty tree yields nothing.
    pub fn iter(&self) -> InOrder<'_, T> {
        InOrder::new(self.root(), self.count)
    }

    /// Visits the left subtree, then the node, then the right subtree. This yields the
    /// values in ascending order.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if the tree holds no values.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::{Tree, TreeError};
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    /// assert!(tree.in_order().unwrap().eq(&[1, 3, 4, 5, 7, 8, 9]));
    ///
    /// let empty = Tree::<i32>::new();
    /// assert_eq!(empty.in_order().err(), Some(TreeError::EmptyTree));
    /// ```
    pub fn in_order(&self) -> Result<InOrder<'_, T>> {
        self.ensure_not_empty("in-order")?;
        Ok(self.iter())
    }

    /// Visits the node, then the left subtree, then the right subtree.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if the tree holds no values.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    /// assert!(tree.pre_order().unwrap().eq(&[5, 3, 1, 4, 8, 7, 9]));
    /// ```
    pub fn pre_order(&self) -> Result<PreOrder<'_, T>> {
        self.ensure_not_empty("pre-order")?;
        Ok(PreOrder::new(self.root(), self.count))
    }

    /// Post-order traversal isn't supported. This always fails, whatever the tree holds.
    ///
    /// # Errors
    ///
    /// Always [`TreeError::NotImplemented`].
    pub fn post_order(&self) -> Result<iter::Empty<&T>> {
        trace!("post-order traversal requested");
        Err(TreeError::NotImplemented("post-order"))
    }

    fn ensure_not_empty(&self, traversal: &'static str) -> Result<()> {
        if self.is_empty() {
            trace!(traversal, "refusing to traverse an empty tree");
            return Err(TreeError::EmptyTree);
        }
        Ok(())
    }

    fn find(&self, value: &T) -> Option<&Node<T>> {
        let mut current = self.root();

        while let Some(node) = current {
            current = match self.order.compare(node.value(), value) {
                cmp::Ordering::Equal => return Some(node),
                cmp::Ordering::Greater => node.left(),
                cmp::Ordering::Less => node.right(),
            };
        }

        None
    }

    /// Removes one value comparing equal to `value` and reports which node took its
    /// place.
    fn remove_with_promotion(&mut self, value: &T) -> Option<Promotion> {
        let Some(slot) = locate(&mut self.root, value, &self.order) else {
            trace!("no matching value to remove");
            return None;
        };
        let mut removed = slot.take()?;

        let promotion = match removed.right.take() {
            None => {
                *slot = removed.left.take();
                Promotion::LeftChild
            }
            Some(mut right) => match detach_leftmost(&mut right.left) {
                None => {
                    right.left = removed.left.take();
                    *slot = Some(right);
                    Promotion::RightChild
                }
                Some(mut successor) => {
                    successor.left = removed.left.take();
                    successor.right = Some(right);
                    *slot = Some(successor);
                    Promotion::Successor
                }
            },
        };

        self.count -= 1;
        debug!(%promotion, count = self.count, "removed value");
        Some(promotion)
    }
}

/// Descends from `slot` to the slot owning the first node that compares equal to
/// `value`. Keeping hold of the slot itself means the parent never has to be
/// re-compared to decide which of its children to rewrite.
fn locate<'a, T>(
    mut slot: &'a mut Link<T>,
    value: &T,
    order: &Order<T>,
) -> Option<&'a mut Link<T>> {
    loop {
        let ordering = order.compare(slot.as_deref()?.value(), value);
        slot = match ordering {
            cmp::Ordering::Equal => return Some(slot),
            cmp::Ordering::Greater => &mut slot.as_mut()?.left,
            cmp::Ordering::Less => &mut slot.as_mut()?.right,
        };
    }
}

/// Unhooks the leftmost node of the subtree in `slot`, putting that node's right
/// subtree where it used to be. Returns `None` for an empty subtree.
fn detach_leftmost<T>(mut slot: &mut Link<T>) -> Option<Box<Node<T>>> {
    while slot.as_ref()?.left.is_some() {
        slot = &mut slot.as_mut()?.left;
    }

    let mut leftmost = slot.take()?;
    *slot = leftmost.right.take();
    Some(leftmost)
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("count", &self.count)
            .field("values", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<T> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut tree = Self::new();
        tree.extend(values);
        tree
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the tree, yielding its values in ascending order.
    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(self.root.take(), mem::take(&mut self.count))
    }
}
