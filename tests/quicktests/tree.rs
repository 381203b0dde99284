use quickcheck_macros::quickcheck;
use rebuild_bst::{TraversalOrder, Tree};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `HashSet`.
/// This way we can ensure that after a random smattering of inserts,
/// deletes and rebalances we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], mut bst: Tree<K>, set: &mut HashSet<K>) -> Tree<K>
where
    K: std::hash::Hash + Eq + Clone + Ord,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Delete(k) => {
                bst.delete(k);
                set.remove(k);
            }
            Op::Rebalance => bst.rebalance(),
        }
    }

    bst
}

fn height_bound(len: usize) -> usize {
    (usize::BITS - len.leading_zeros()) as usize
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut set = HashSet::new();
    let tree = do_ops(&ops, Tree::new(), &mut set);

    tree.len() == set.len() && set.iter().all(|key| tree.contains(key))
}

#[quickcheck]
fn in_order_is_strictly_ascending(ops: Vec<Op<i16>>) -> bool {
    let mut set = HashSet::new();
    let tree = do_ops(&ops, Tree::new(), &mut set);

    let keys = tree.to_vec(TraversalOrder::InOrder);
    keys.windows(2).all(|w| w[0] < w[1]) && keys.len() == tree.len()
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| !tree.contains(x)) && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn insert_twice_is_idempotent(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<i8> = xs.into_iter().collect();
    tree.insert(x);
    let len = tree.len();
    let keys = tree.to_vec(TraversalOrder::PreOrder);

    !tree.insert(x) && tree.len() == len && tree.to_vec(TraversalOrder::PreOrder) == keys
}

#[quickcheck]
fn delete_changes_len_by_one(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<i8> = xs.into_iter().collect();
    let len = tree.len();
    let was_present = tree.contains(&x);

    let deleted = tree.delete(&x);
    let expected = if was_present { len - 1 } else { len };

    deleted == was_present && tree.len() == expected && !tree.contains(&x)
}

#[quickcheck]
fn rebalance_preserves_keys(xs: Vec<i16>) -> bool {
    let mut tree: Tree<i16> = xs.iter().copied().collect();
    let before = tree.to_vec(TraversalOrder::InOrder);
    tree.rebalance();

    let expected: Vec<i16> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
    tree.to_vec(TraversalOrder::InOrder) == before
        && before == expected
        && tree.height() <= height_bound(tree.len())
}

#[quickcheck]
fn to_vec_and_apply_agree(ops: Vec<Op<i8>>) -> bool {
    let mut set = HashSet::new();
    let tree = do_ops(&ops, Tree::new(), &mut set);

    TraversalOrder::ALL.into_iter().all(|order| {
        let mut applied = Vec::new();
        tree.apply(&mut |k: &i8| applied.push(*k), order);
        applied == tree.to_vec(order)
    })
}

#[quickcheck]
fn iter_matches_pre_order(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.into_iter().collect();
    let iterated: Vec<i8> = tree.iter().copied().collect();

    iterated == tree.to_vec(TraversalOrder::PreOrder) && tree.iter().len() == tree.len()
}
