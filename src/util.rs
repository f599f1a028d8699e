use std::fmt;

/// Which node takes over the slot of a removed node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Promotion {
    /// The removed node had no right child. Its left subtree (possibly empty) moves up
    /// wholesale.
    LeftChild,
    /// The removed node's right child had no left child. The right child adopts the
    /// removed node's left subtree and moves up.
    RightChild,
    /// The leftmost node of the right subtree is detached and moves up, taking over
    /// both of the removed node's subtrees.
    Successor,
}

impl fmt::Display for Promotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::LeftChild => "left child",
            Self::RightChild => "right child",
            Self::Successor => "in-order successor",
        })
    }
}
