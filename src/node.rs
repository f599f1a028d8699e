//! The cells a [`Tree`][crate::Tree] is built from.

/// An owning child slot. `None` marks the empty spot at the bottom of a subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` holds a value that never changes after construction and two
/// exclusively owned child slots. Only the [`Tree`][crate::Tree] relinks slots, so
/// every `Node` is reachable from exactly one parent slot.
///
/// `Node`s are handed out read-only through [`Tree::root`][crate::Tree::root] for
/// inspecting the shape of a tree.
///
/// # Examples
///
/// ```
/// use binary_tree::Tree;
///
/// let tree: Tree<_> = [5, 3, 8].into_iter().collect();
/// let root = tree.root().unwrap();
///
/// assert_eq!(root.value(), &5);
/// assert_eq!(root.left().map(|n| n.value()), Some(&3));
/// assert_eq!(root.right().map(|n| n.value()), Some(&8));
/// assert!(root.right().unwrap().is_leaf());
/// ```
pub struct Node<T> {
    value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, whose values all compare less than this one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, whose values all compare greater than or
    /// equal to this one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }
}

/// Drops a whole subtree using an explicit stack, so list-shaped trees of any depth
/// can't overflow the call stack the way a recursive `Box` drop would.
pub(crate) fn teardown<T>(link: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = link.into_iter().collect();

    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}
