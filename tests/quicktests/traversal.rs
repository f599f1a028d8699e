use binary_tree::{Tree, TreeError};
use quickcheck_macros::quickcheck;

#[quickcheck]
fn in_order_is_non_decreasing(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let values: Vec<_> = tree.iter().copied().collect();

    values.len() == xs.len() && values.windows(2).all(|pair| pair[0] <= pair[1])
}

#[quickcheck]
fn in_order_matches_default_iteration(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    match tree.in_order() {
        Ok(values) => values.eq(tree.iter()),
        Err(e) => e == TreeError::EmptyTree && xs.is_empty(),
    }
}

#[quickcheck]
fn pre_order_starts_at_the_first_value(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    match (tree.pre_order(), xs.first()) {
        (Ok(mut values), Some(first)) => {
            values.next() == Some(first) && values.count() == xs.len() - 1
        }
        (Err(e), None) => e == TreeError::EmptyTree,
        _ => false,
    }
}

#[quickcheck]
fn owned_iteration_sorts(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    let mut expected = xs;
    expected.sort_unstable();
    tree.into_iter().eq(expected)
}

#[quickcheck]
fn post_order_always_fails(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    tree.post_order().err() == Some(TreeError::NotImplemented("post-order"))
}

#[test]
fn empty_tree_traversals() {
    let tree = Tree::<u8>::new();

    assert_eq!(tree.in_order().err(), Some(TreeError::EmptyTree));
    assert_eq!(tree.pre_order().err(), Some(TreeError::EmptyTree));
    assert_eq!(tree.iter().next(), None);
}
