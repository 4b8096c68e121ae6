//! Property tests for the B-tree.
//!
//! Random insert/delete sequences are replayed against a multiset model
//! (`BTreeMap<key, occurrences>`) and the tree's structure is checked after
//! every run.

use std::collections::BTreeMap;

use btree_index::BTree;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(i16),
    Delete(i16),
}

/// Keys are drawn from a narrow range so duplicates and repeat deletes
/// happen often.
fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (-64i16..64).prop_map(Op::Insert),
        2 => (-64i16..64).prop_map(Op::Delete),
    ]
}

#[derive(Default)]
struct Model {
    counts: BTreeMap<i16, usize>,
}

impl Model {
    fn insert(&mut self, key: i16) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    fn delete(&mut self, key: i16) -> bool {
        match self.counts.get_mut(&key) {
            Some(n) if *n > 1 => {
                *n -= 1;
                true
            }
            Some(_) => {
                self.counts.remove(&key);
                true
            }
            None => false,
        }
    }

    fn sorted(&self) -> Vec<i16> {
        self.counts
            .iter()
            .flat_map(|(&k, &n)| std::iter::repeat(k).take(n))
            .collect()
    }
}

fn apply(tree: &mut BTree<i16>, model: &mut Model, ops: &[Op]) {
    for op in ops {
        match *op {
            Op::Insert(key) => {
                tree.insert(key);
                model.insert(key);
            }
            Op::Delete(key) => {
                assert_eq!(tree.delete(&key), model.delete(key), "delete {}", key);
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Traversal matches the model: sorted, and every occurrence exactly once.
    #[test]
    fn prop_traversal_matches_model(
        t in 2usize..6,
        ops in prop::collection::vec(op_strategy(), 0..400),
    ) {
        let mut tree = BTree::new(t).unwrap();
        let mut model = Model::default();
        apply(&mut tree, &mut model, &ops);

        let keys: Vec<i16> = tree.traverse().copied().collect();
        prop_assert!(keys.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(&keys, &model.sorted());
        prop_assert_eq!(tree.len(), keys.len());
    }

    /// Shape invariants hold after any sequence of operations.
    #[test]
    fn prop_structure_stays_valid(
        t in 2usize..6,
        ops in prop::collection::vec(op_strategy(), 0..400),
    ) {
        let mut tree = BTree::new(t).unwrap();
        let mut model = Model::default();
        for op in &ops {
            apply(&mut tree, &mut model, std::slice::from_ref(op));
            prop_assert!(tree.validate().is_ok(), "{:?}", tree.validate());
        }
    }

    /// Present keys are found; keys outside the drawn range never are.
    #[test]
    fn prop_search_correctness(
        t in 2usize..6,
        ops in prop::collection::vec(op_strategy(), 0..300),
    ) {
        let mut tree = BTree::new(t).unwrap();
        let mut model = Model::default();
        apply(&mut tree, &mut model, &ops);

        for key in -70i16..70 {
            prop_assert_eq!(tree.contains(&key), model.counts.contains_key(&key));
        }
    }

    /// Deleting an absent key changes nothing.
    #[test]
    fn prop_absent_delete_is_noop(
        t in 2usize..6,
        keys in prop::collection::vec(-64i16..64, 0..200),
        absent in 100i16..200,
    ) {
        let mut tree = BTree::new(t).unwrap();
        tree.extend(keys.iter().copied());
        let before: Vec<i16> = tree.traverse().copied().collect();
        let stats = *tree.stats();

        prop_assert!(!tree.delete(&absent));
        prop_assert!(!tree.delete(&absent));

        let after: Vec<i16> = tree.traverse().copied().collect();
        prop_assert_eq!(before, after);
        prop_assert_eq!(stats, *tree.stats());
    }

    /// Deleting everything, in any order, ends at a single empty leaf root.
    #[test]
    fn prop_delete_all_empties_tree(
        t in 2usize..6,
        keys in prop::collection::vec(any::<i16>(), 0..300),
        seed in any::<u64>(),
    ) {
        let mut tree = BTree::new(t).unwrap();
        tree.extend(keys.iter().copied());

        // Deterministic shuffle of the delete order
        let mut order = keys.clone();
        let len = order.len();
        let mut state = seed | 1;
        for i in (1..len).rev() {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            order.swap(i, (state % (i as u64 + 1)) as usize);
        }

        for key in &order {
            prop_assert!(tree.delete(key));
        }

        prop_assert!(tree.is_empty());
        prop_assert!(tree.traverse().next().is_none());
        prop_assert!(tree.root().is_leaf());
        prop_assert!(tree.root().keys().is_empty());
        prop_assert_eq!(tree.node_count(), 1);
    }

    /// pop_first / pop_last drain in sorted order from either end.
    #[test]
    fn prop_pop_drains_in_order(
        t in 2usize..6,
        keys in prop::collection::vec(any::<i16>(), 0..200),
        from_front in any::<bool>(),
    ) {
        let mut tree = BTree::new(t).unwrap();
        tree.extend(keys.iter().copied());

        let mut expected = keys.clone();
        expected.sort_unstable();
        if !from_front {
            expected.reverse();
        }

        let mut drained = Vec::with_capacity(keys.len());
        loop {
            let next = if from_front { tree.pop_first() } else { tree.pop_last() };
            match next {
                Some(key) => drained.push(key),
                None => break,
            }
        }

        prop_assert_eq!(drained, expected);
        prop_assert!(tree.validate().is_ok());
    }
}
