use binary_tree::{Order, Tree};
use quickcheck_macros::quickcheck;

use std::collections::{HashMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and to a map counting copies of each value.
/// Returns how many removals actually removed something.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, counts: &mut HashMap<i8, usize>) -> usize {
    let mut removed = 0;
    for op in ops {
        match op {
            Op::Insert(v) => {
                tree.insert(*v);
                *counts.entry(*v).or_default() += 1;
            }
            Op::Remove(v) => {
                let present = counts.get(v).copied().unwrap_or_default() > 0;
                assert_eq!(tree.remove(v), present);
                if present {
                    *counts.entry(*v).or_default() -= 1;
                    removed += 1;
                }
            }
        }
    }

    removed
}

#[quickcheck]
fn count_tracks_inserts_minus_removals(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut counts = HashMap::new();

    let removed = do_ops(&ops, &mut tree, &mut counts);
    let inserted = ops.iter().filter(|op| matches!(op, Op::Insert(_))).count();

    tree.len() == inserted - removed && tree.iter().count() == tree.len()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut counts = HashMap::new();

    do_ops(&ops, &mut tree, &mut counts);
    counts.iter().all(|(v, n)| {
        tree.contains(v) == (*n > 0) && tree.iter().filter(|x| *x == v).count() == *n
    })
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for remove in &removes {
        // We may have inserted the same value multiple times - remove each one.
        while tree.remove(remove) {}
    }

    let mut still_present = xs;
    still_present.retain(|x| !removes.contains(x));

    removes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
        && tree.len() == still_present.len()
}

#[quickcheck]
fn failed_removal_changes_nothing(xs: Vec<i8>, missing: i8) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().filter(|x| *x != missing).collect();
    let before: Vec<i8> = tree.iter().copied().collect();
    let len = tree.len();

    !tree.remove(&missing) && tree.len() == len && tree.iter().copied().eq(before)
}

#[quickcheck]
fn one_of_two_duplicates_survives_removal(xs: Vec<i8>, v: i8) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().filter(|x| *x != v).collect();
    tree.insert(v);
    tree.insert(v);

    tree.remove(&v) && tree.contains(&v) && tree.iter().filter(|x| **x == v).count() == 1
}

#[quickcheck]
fn custom_order_is_respected(xs: Vec<i16>) -> bool {
    let mut tree = Tree::with_order(Order::natural().reversed());
    tree.extend(xs.iter().copied());

    let mut expected = xs;
    expected.sort_unstable_by(|a, b| b.cmp(a));
    tree.iter().copied().eq(expected)
}
