//! Structural statistics tracking.

use std::fmt;

/// Counters for the structural changes a tree has gone through.
///
/// Only mutations touch these, so plain integers suffice: the tree is
/// already `&mut` whenever a counter moves.
///
/// # Example
/// ```
/// use btree_index::BTree;
///
/// let mut tree = BTree::new(2).unwrap();
/// for key in 1..=4 {
///     tree.insert(key);
/// }
/// let stats = tree.stats();
/// assert_eq!(stats.root_splits, 1);
/// println!("{}", stats);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BTreeStats {
    /// Full nodes split in two (root splits included).
    pub splits: u64,

    /// Splits of the root, each adding one level.
    pub root_splits: u64,

    /// Sibling pairs merged into one node.
    pub merges: u64,

    /// Keys rotated from a sibling through the parent.
    pub borrows: u64,

    /// Empty roots replaced by their only child, each removing one level.
    pub root_shrinks: u64,

    /// Nodes created by splits and root growth.
    pub nodes_allocated: u64,

    /// Nodes discarded by merges and root shrinks.
    pub nodes_released: u64,
}

impl BTreeStats {
    /// Create a tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Net change in tree height since the last reset.
    pub fn height_delta(&self) -> i64 {
        self.root_splits as i64 - self.root_shrinks as i64
    }
}

impl fmt::Display for BTreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ splits: {}, merges: {}, borrows: {}, height_delta: {:+} }}",
            self.splits,
            self.merges,
            self.borrows,
            self.height_delta()
        )
    }
}
