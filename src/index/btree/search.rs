//! Exact-key lookup and min/max queries.

use crate::common::NodeId;
use crate::index::btree::BTree;

/// Where a key was found: the node holding it and its index in that node.
///
/// Only valid until the next mutation of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyLocation {
    /// Node that holds the key.
    pub node: NodeId,
    /// Index of the key within the node.
    pub index: usize,
}

impl<K: Ord> BTree<K> {
    /// Find a key.
    ///
    /// At each node, binary-search for the first key `>= key`. A match ends
    /// the search; otherwise descend into the child at that index, or give
    /// up at a leaf. With duplicates, any one occurrence may be reported.
    pub fn search(&self, key: &K) -> Option<KeyLocation> {
        let mut id = self.root;
        loop {
            let node = self.nodes.get(id);
            match node.position(key) {
                Ok(index) => return Some(KeyLocation { node: id, index }),
                Err(_) if node.is_leaf => return None,
                Err(idx) => id = node.children[idx],
            }
        }
    }

    /// Whether the tree holds at least one occurrence of `key`.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// The stored key equal to `key`, if any.
    pub fn get(&self, key: &K) -> Option<&K> {
        let loc = self.search(key)?;
        self.nodes.get(loc.node).keys.get(loc.index)
    }

    /// Smallest key in the tree.
    pub fn first(&self) -> Option<&K> {
        let mut node = self.nodes.get(self.root);
        while let Some(&child) = node.children.first() {
            node = self.nodes.get(child);
        }
        node.keys.first()
    }

    /// Largest key in the tree.
    pub fn last(&self) -> Option<&K> {
        let mut node = self.nodes.get(self.root);
        while let Some(&child) = node.children.last() {
            node = self.nodes.get(child);
        }
        node.keys.last()
    }
}
