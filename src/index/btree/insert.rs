//! Insertion with pre-emptive splitting.
//!
//! The descent never enters a full node: a full root is split before the
//! walk starts and a full child is split before it is entered. The target
//! leaf therefore always has room, and no split ever propagates upward.

use tracing::{debug, trace};

use crate::common::NodeId;
use crate::index::btree::node::Node;
use crate::index::btree::BTree;

impl<K: Ord> BTree<K> {
    /// Insert a key.
    ///
    /// Duplicates are stored as separate occurrences; nothing is checked
    /// or overwritten.
    pub fn insert(&mut self, key: K) {
        if self.nodes.get(self.root).is_full(self.min_degree) {
            self.split_root();
        }

        self.insert_non_full(self.root, key);
        self.len += 1;
    }

    /// Grow a new root above the full one and split the old root under it.
    ///
    /// The only way the tree gets taller.
    fn split_root(&mut self) {
        let old_root = self.root;
        let new_root = self.allocate_node(Node::root_above(old_root));
        self.root = new_root;
        self.split_child(new_root, 0);

        self.stats.root_splits += 1;
        debug!(root = %new_root, height = self.height(), "root split");
    }

    /// Walk from a non-full node down to a leaf and store the key there.
    fn insert_non_full(&mut self, mut id: NodeId, key: K) {
        let t = self.min_degree;
        loop {
            let node = self.nodes.get(id);
            let mut idx = node.lower_bound(&key);

            if node.is_leaf {
                self.nodes.get_mut(id).keys.insert(idx, key);
                return;
            }

            if self.nodes.get(node.children[idx]).is_full(t) {
                self.split_child(id, idx);
                // The promoted median now sits at idx
                if key > self.nodes.get(id).keys[idx] {
                    idx += 1;
                }
            }

            id = self.nodes.get(id).children[idx];
        }
    }

    /// Split the full child at `idx` of `parent`.
    ///
    /// The child keeps its lower `t - 1` keys (and `t` children), a new
    /// right sibling takes the upper `t - 1` keys (and `t` children), and
    /// the median moves up into `parent` at `idx`.
    pub(crate) fn split_child(&mut self, parent: NodeId, idx: usize) {
        let t = self.min_degree.get();
        let child_id = self.nodes.get(parent).children[idx];

        let (median, sibling) = {
            let child = self.nodes.get_mut(child_id);
            assert_eq!(
                child.keys.len(),
                2 * t - 1,
                "split of {} which is not full",
                child_id
            );

            let upper_keys = child.keys.split_off(t);
            let median = child.keys.remove(t - 1);
            let upper_children = if child.is_leaf {
                Vec::new()
            } else {
                child.children.split_off(t)
            };

            let sibling = Node {
                keys: upper_keys,
                children: upper_children,
                is_leaf: child.is_leaf,
            };
            (median, sibling)
        };

        let sibling_id = self.allocate_node(sibling);

        let parent_node = self.nodes.get_mut(parent);
        parent_node.keys.insert(idx, median);
        parent_node.children.insert(idx + 1, sibling_id);

        self.stats.splits += 1;
        trace!(%parent, child = %child_id, sibling = %sibling_id, "split child");
    }
}

impl<K: Ord> Extend<K> for BTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::index::btree::BTree;

    fn keys(tree: &BTree<i32>) -> Vec<i32> {
        tree.traverse().copied().collect()
    }

    #[test]
    fn test_insert_into_leaf_root() {
        let mut tree = BTree::new(3).unwrap();
        tree.insert(20);
        tree.insert(10);
        tree.insert(30);

        assert!(tree.root().is_leaf());
        assert_eq!(tree.root().keys(), &[10, 20, 30]);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_root_split_on_insert() {
        let mut tree = BTree::new(2).unwrap();
        for key in [1, 2, 3, 4] {
            tree.insert(key);
        }

        assert!(!tree.root().is_leaf());
        assert_eq!(tree.root().keys(), &[2]);
        assert_eq!(tree.height(), 2);
        assert_eq!(keys(&tree), vec![1, 2, 3, 4]);

        let stats = tree.stats();
        assert_eq!(stats.splits, 1);
        assert_eq!(stats.root_splits, 1);
        assert_eq!(stats.nodes_allocated, 2);
    }

    #[test]
    fn test_split_child_shape() {
        let mut tree = BTree::new(3).unwrap();
        for key in [10, 20, 5, 6, 12, 30] {
            tree.insert(key);
        }

        // [5 6 10 12 20] split around 10 before 30 went in
        assert_eq!(tree.root().keys(), &[10]);
        let children = tree.root().children().to_vec();
        assert_eq!(tree.node(children[0]).unwrap().keys(), &[5, 6]);
        assert_eq!(tree.node(children[1]).unwrap().keys(), &[12, 20, 30]);
    }

    #[test]
    fn test_split_internal_child() {
        let mut tree = BTree::new(2).unwrap();
        for key in 1..=10 {
            tree.insert(key);
        }

        assert_eq!(tree.height(), 3);
        assert_eq!(keys(&tree), (1..=10).collect::<Vec<_>>());
        tree.validate().unwrap();
    }

    #[test]
    fn test_duplicates_are_stored() {
        let mut tree = BTree::new(2).unwrap();
        for key in [5, 5, 5, 1, 5, 9, 5] {
            tree.insert(key);
        }

        assert_eq!(tree.len(), 7);
        assert_eq!(keys(&tree), vec![1, 5, 5, 5, 5, 5, 9]);
        tree.validate().unwrap();
    }

    #[test]
    fn test_extend() {
        let mut tree = BTree::new(3).unwrap();
        tree.extend((0..100).rev());

        assert_eq!(tree.len(), 100);
        assert_eq!(keys(&tree), (0..100).collect::<Vec<_>>());
        tree.validate().unwrap();
    }

    #[test]
    fn test_non_copy_keys() {
        let mut tree = BTree::new(2).unwrap();
        for word in ["pear", "apple", "fig", "kiwi", "banana"] {
            tree.insert(word.to_string());
        }

        let words: Vec<&str> = tree.traverse().map(String::as_str).collect();
        assert_eq!(words, ["apple", "banana", "fig", "kiwi", "pear"]);
    }
}
