//! Node arena - owns every node of one tree.
//!
//! Nodes are stored in a growable vector of slots and addressed by
//! [`NodeId`]. Released slots go on a free list and are handed out again
//! before the vector grows.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      NodeArena                          │
//! │  slots: Vec<Option<Node<K>>>                            │
//! │   [Some(root)] [Some(n1)] [None] [Some(n3)] ...         │
//! │  free_list: Vec<NodeId>   (LIFO, reused before growth)  │
//! └─────────────────────────────────────────────────────────┘
//! ```

use crate::common::NodeId;
use crate::index::btree::node::Node;

/// Slot storage for the nodes of a single tree.
///
/// Each live node is owned by exactly one parent id (or is the root), so
/// the arena never needs reference counting.
#[derive(Debug)]
pub(crate) struct NodeArena<K> {
    /// One slot per id ever handed out. `None` means the slot is free.
    slots: Vec<Option<Node<K>>>,

    /// Stack of free slot ids (LIFO for cache locality).
    free_list: Vec<NodeId>,
}

impl<K> NodeArena<K> {
    /// Create an empty arena.
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Store a node and return its id.
    pub(crate) fn allocate(&mut self, node: Node<K>) -> NodeId {
        // Try the free list first
        if let Some(id) = self.free_list.pop() {
            self.slots[id.index()] = Some(node);
            return id;
        }

        let id = NodeId::new(self.slots.len());
        self.slots.push(Some(node));
        id
    }

    /// Remove a node from the arena and return it.
    ///
    /// # Panics
    /// Panics if `id` is not live. Releasing twice is a bug in the caller.
    pub(crate) fn release(&mut self, id: NodeId) -> Node<K> {
        let node = self.slots.get_mut(id.index()).and_then(Option::take);
        match node {
            Some(node) => {
                self.free_list.push(id);
                node
            }
            None => panic!("released {} which is not live", id),
        }
    }

    /// Borrow a live node, if `id` names one.
    #[inline]
    pub(crate) fn try_get(&self, id: NodeId) -> Option<&Node<K>> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    /// Borrow a live node.
    ///
    /// # Panics
    /// Panics if `id` is not live.
    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &Node<K> {
        match self.try_get(id) {
            Some(node) => node,
            None => panic!("{} is not live", id),
        }
    }

    /// Mutably borrow a live node.
    ///
    /// # Panics
    /// Panics if `id` is not live.
    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<K> {
        match self.slots.get_mut(id.index()).and_then(Option::as_mut) {
            Some(node) => node,
            None => panic!("{} is not live", id),
        }
    }

    /// Number of live nodes.
    pub(crate) fn live_count(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }

    /// Drop every node and forget all ids.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
    }
}
