
use std::cmp;
use std::fmt;

use crate::Tree;

/// Asserts the BST invariant holds and that the count matches the number of nodes
/// actually reachable from the root.
pub(crate) fn assert_invariants<T: fmt::Debug>(tree: &Tree<T>) {
    let values: Vec<&T> = tree.iter().collect();
    assert_eq!(values.len(), tree.len(), "count drifted from reachable nodes");

    for pair in values.windows(2) {
        assert_ne!(
            tree.order().compare(pair[0], pair[1]),
            cmp::Ordering::Greater,
            "{:?} is out of order",
            pair
        );
    }

    let mut stack: Vec<_> = tree.root().into_iter().collect();
    while let Some(node) = stack.pop() {
        if let Some(left) = node.left() {
            assert_eq!(
                tree.order().compare(left.value(), node.value()),
                cmp::Ordering::Less,
                "left child {:?} of {:?} doesn't compare less",
                left.value(),
                node.value()
            );
            stack.push(left);
        }
        if let Some(right) = node.right() {
            assert_ne!(
                tree.order().compare(right.value(), node.value()),
                cmp::Ordering::Less,
                "right child {:?} of {:?} compares less",
                right.value(),
                node.value()
            );
            stack.push(right);
        }
    }
}
