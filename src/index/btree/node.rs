//! Node - one vertex of the B-tree.
//!
//! A [`Node`] holds an ordered run of keys and, if internal, the ids of
//! its children:
//! - Leaf: `children` is empty
//! - Internal: `children.len() == keys.len() + 1`
//!
//! For every `i`, keys in `children[i]` are `<= keys[i] <=` keys in
//! `children[i + 1]` (equal keys only appear when duplicates are inserted).

use crate::common::{MinDegree, NodeId};

/// A node in the tree.
///
/// Nodes live in the tree's arena and are addressed by [`NodeId`].
/// The public API only hands out shared references, so callers can
/// inspect the shape of a tree but not break it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<K> {
    /// Keys in non-decreasing order.
    pub(crate) keys: Vec<K>,

    /// Child ids, empty for a leaf.
    pub(crate) children: Vec<NodeId>,

    /// Whether this node is a leaf.
    pub(crate) is_leaf: bool,
}

impl<K> Node<K> {
    /// Create an empty leaf.
    pub(crate) fn leaf() -> Self {
        Self {
            keys: Vec::new(),
            children: Vec::new(),
            is_leaf: true,
        }
    }

    /// Create an internal node with no keys and a single child.
    ///
    /// Used only to grow a new root above a full one.
    pub(crate) fn root_above(child: NodeId) -> Self {
        Self {
            keys: Vec::new(),
            children: vec![child],
            is_leaf: false,
        }
    }

    /// Keys stored in this node, in order.
    #[inline]
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Child ids, in order. Empty for a leaf.
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Whether this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    /// Number of keys in this node.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the node holds no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Whether the node holds `2t - 1` keys and must split before taking more.
    #[inline]
    pub(crate) fn is_full(&self, t: MinDegree) -> bool {
        self.keys.len() == t.max_keys()
    }

    /// Whether the node can give up a key and stay at or above `t - 1`.
    #[inline]
    pub(crate) fn has_spare(&self, t: MinDegree) -> bool {
        self.keys.len() >= t.get()
    }
}

impl<K: Ord> Node<K> {
    /// First index `i` with `keys[i] >= key`, or `len()` if there is none.
    ///
    /// Doubles as the child to descend into when the key is not here.
    #[inline]
    pub(crate) fn lower_bound(&self, key: &K) -> usize {
        self.keys.partition_point(|k| k < key)
    }

    /// Position of `key` in this node, if present.
    #[inline]
    pub(crate) fn position(&self, key: &K) -> Result<usize, usize> {
        let idx = self.lower_bound(key);
        match self.keys.get(idx) {
            Some(k) if k == key => Ok(idx),
            _ => Err(idx),
        }
    }
}
