//! Node identifier type.

use std::fmt;

/// Identifies a node in a tree's node arena.
///
/// Using `usize` because:
/// 1. Nodes are stored in `Vec<Option<Node<K>>>`
/// 2. Direct indexing without casting: `slots[node_id.index()]`
///
/// Ids are only meaningful for the tree that handed them out, and a
/// released id may be reused by a later split.
///
/// # Example
/// ```
/// use btree_index::NodeId;
///
/// let node_id = NodeId::new(5);
/// assert_eq!(node_id.index(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Create a new NodeId.
    #[inline]
    pub fn new(id: usize) -> Self {
        NodeId(id)
    }

    /// Slot index in the arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}
