use linked_bst::{Collection, OrderedTree, TreeError};

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a counting map.
/// This way we can ensure that after a random smattering of adds
/// and removes we have the same multiset of values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut OrderedTree<T>, counts: &mut BTreeMap<T, usize>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Add(x) => {
                bst.add(x.clone());
                *counts.entry(x.clone()).or_default() += 1;
            }
            Op::Remove(x) => {
                let removed = bst.remove(x);
                match counts.get_mut(x) {
                    Some(count) => {
                        assert!(removed.is_ok());
                        *count -= 1;
                        if *count == 0 {
                            counts.remove(x);
                        }
                    }
                    None => assert_eq!(removed.err(), Some(TreeError::NotFound)),
                }
            }
            Op::Replace(x) => {
                let replaced = bst.replace(x, x.clone());
                assert_eq!(replaced.is_some(), counts.contains_key(x));
            }
            Op::Rebalance => {
                bst.rebalance();
            }
        }
    }
}

fn flatten<T: Clone>(counts: &BTreeMap<T, usize>) -> Vec<T> {
    counts
        .iter()
        .flat_map(|(x, n)| std::iter::repeat(x.clone()).take(*n))
        .collect()
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = OrderedTree::new();
        let mut counts = BTreeMap::new();

        do_ops(&ops, &mut tree, &mut counts);
        let expected = flatten(&counts);
        tree.len() == expected.len() && tree.iter().eq(expected.iter())
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree: OrderedTree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.find(x) == Some(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: OrderedTree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: OrderedTree<_> = xs.iter().copied().collect();
        let mut still_present = xs;
        for delete in &deletes {
            let expected = still_present.iter().position(|x| x == delete);
            match (tree.remove(delete), expected) {
                (Ok(removed), Some(pos)) => {
                    assert_eq!(removed, still_present.swap_remove(pos));
                }
                (Err(TreeError::NotFound), None) => {}
                (got, expected) => panic!("removed {got:?} but expected {expected:?}"),
            }
        }

        tree.len() == still_present.len()
            && still_present.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn balanced_stays_balanced(xs: Vec<u16>) -> bool {
        let mut tree: OrderedTree<_> = xs.into_iter().collect();
        tree.rebalance();
        if !tree.is_balanced() {
            return true;
        }
        let height = tree.height();
        tree.rebalance().height() == height && tree.is_balanced()
    }
}

quickcheck::quickcheck! {
    fn collection_contract(xs: Vec<i8>) -> bool {
        fn fill<C: Collection<i8>>(c: &mut C, xs: &[i8]) {
            c.clear();
            for x in xs {
                c.add(*x);
            }
        }

        let mut tree = OrderedTree::new();
        tree.add(0);
        fill(&mut tree, &xs);

        Collection::len(&tree) == xs.len() && Collection::is_empty(&tree) == xs.is_empty()
    }
}
