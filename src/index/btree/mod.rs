//! B-tree index implementation.
//!
//! An in-memory multi-way search tree of minimum degree `t`:
//! - Every non-root node holds `t - 1` to `2t - 1` keys
//! - All leaves sit at the same depth
//! - Inserts split full nodes on the way down; deletes top up thin
//!   nodes on the way down, so neither ever walks back up
//!
//! # Components
//! - [`BTree`] - The tree and its public operations
//! - [`Node`] - Read-only view of a single node
//! - [`Iter`] - Lazy in-order traversal
//! - [`BTreeStats`] - Split / merge / borrow counters
//!
//! Operations are split by concern: `search`, `insert`, `delete`,
//! `iter` and `validate` each add an `impl` block to [`BTree`].

mod arena;
mod delete;
mod insert;
mod iter;
mod node;
mod search;
mod stats;
mod validate;

use tracing::debug;

use crate::common::{MinDegree, NodeId, Result};
use arena::NodeArena;

pub use iter::Iter;
pub use node::Node;
pub use search::KeyLocation;
pub use stats::BTreeStats;

/// An ordered index of keys, balanced as a B-tree.
///
/// # Architecture
/// ```text
/// ┌─────────────────────────────────────────────────────────────┐
/// │                         BTree<K>                            │
/// │  root: NodeId ──┐                                           │
/// │                 ▼                                           │
/// │  ┌──────────────────────────────────────────────────────┐  │
/// │  │ nodes: NodeArena<K>                                   │  │
/// │  │  [root: keys | child ids] [child] [child] [free] ...   │  │
/// │  └──────────────────────────────────────────────────────┘  │
/// │  min_degree: MinDegree    len: usize    stats: BTreeStats   │
/// └─────────────────────────────────────────────────────────────┘
/// ```
///
/// # Duplicates
/// Inserting a key that is already present stores another occurrence.
/// Traversal yields every occurrence and each `delete` removes one.
///
/// # Thread Safety
/// None is provided. `&self` methods never mutate, so shared reads are
/// fine; anything else needs an external lock around the whole tree.
///
/// # Usage
/// ```
/// use btree_index::BTree;
///
/// let mut tree = BTree::new(3)?;
/// for key in [10, 20, 5, 6, 12, 30, 7, 17] {
///     tree.insert(key);
/// }
///
/// assert!(tree.contains(&6));
/// assert!(!tree.contains(&15));
///
/// tree.delete(&6);
/// let keys: Vec<_> = tree.traverse().copied().collect();
/// assert_eq!(keys, [5, 7, 10, 12, 17, 20, 30]);
/// # Ok::<(), btree_index::Error>(())
/// ```
#[derive(Debug)]
pub struct BTree<K> {
    /// Owns every node of the tree.
    nodes: NodeArena<K>,

    /// Current root. Replaced on root split and root shrink.
    root: NodeId,

    /// Minimum degree `t`, fixed at construction.
    min_degree: MinDegree,

    /// Number of stored keys, duplicates included.
    len: usize,

    /// Structural change counters.
    stats: BTreeStats,
}

impl<K> BTree<K> {
    /// Create an empty tree with minimum degree `min_degree`.
    ///
    /// # Errors
    /// - `Error::InvalidMinDegree` if `min_degree < 2`
    pub fn new(min_degree: usize) -> Result<Self> {
        Ok(Self::with_min_degree(MinDegree::new(min_degree)?))
    }

    /// Create an empty tree from an already validated minimum degree.
    pub fn with_min_degree(min_degree: MinDegree) -> Self {
        let mut nodes = NodeArena::new();
        let root = nodes.allocate(Node::leaf());

        Self {
            nodes,
            root,
            min_degree,
            len: 0,
            stats: BTreeStats::new(),
        }
    }

    // ========================================================================
    // Public API: Size and shape
    // ========================================================================

    /// Number of keys in the tree, counting every duplicate.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The minimum degree this tree was built with.
    #[inline]
    pub fn min_degree(&self) -> MinDegree {
        self.min_degree
    }

    /// Number of levels. A tree whose root is a leaf has height 1.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut node = self.nodes.get(self.root);
        while let Some(&first) = node.children.first() {
            node = self.nodes.get(first);
            height += 1;
        }
        height
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.live_count()
    }

    // ========================================================================
    // Public API: Node inspection
    // ========================================================================

    /// Id of the current root.
    #[inline]
    pub fn root_id(&self) -> NodeId {
        self.root
    }

    /// The root node. Always present, possibly an empty leaf.
    #[inline]
    pub fn root(&self) -> &Node<K> {
        self.nodes.get(self.root)
    }

    /// Look up a node by id.
    ///
    /// Returns `None` for ids that are not live in this tree.
    pub fn node(&self, id: NodeId) -> Option<&Node<K>> {
        self.nodes.try_get(id)
    }

    // ========================================================================
    // Public API: Stats and reset
    // ========================================================================

    /// Structural change counters.
    #[inline]
    pub fn stats(&self) -> &BTreeStats {
        &self.stats
    }

    /// Reset all counters to zero.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Remove every key, leaving an empty leaf root.
    ///
    /// Stats are kept.
    pub fn clear(&mut self) {
        debug!(keys = self.len, nodes = self.nodes.live_count(), "clearing tree");
        self.nodes.clear();
        self.root = self.nodes.allocate(Node::leaf());
        self.len = 0;
    }

    // ========================================================================
    // Internal: Node lifecycle
    // ========================================================================

    /// Store a new node, counting it.
    fn allocate_node(&mut self, node: Node<K>) -> NodeId {
        self.stats.nodes_allocated += 1;
        self.nodes.allocate(node)
    }

    /// Discard a node, counting it.
    fn release_node(&mut self, id: NodeId) -> Node<K> {
        self.stats.nodes_released += 1;
        self.nodes.release(id)
    }
}

impl<K> Default for BTree<K> {
    fn default() -> Self {
        Self::with_min_degree(MinDegree::default())
    }
}
