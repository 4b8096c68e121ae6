//! btree-index - an in-memory, ordered B-tree index.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          btree-index                            │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Index Layer (index/btree/)                  │   │
//! │  │   search │ insert (split) │ delete (borrow/merge) │ iter  │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Node Arena (index/btree/arena)              │   │
//! │  │        slots: Vec<Option<Node>>  +  LIFO free list       │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Common (common/)                         │   │
//! │  │         MinDegree + NodeId + Error + config              │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (MinDegree, NodeId, Error, config)
//! - [`index`] - Index structures (B-tree)
//!
//! Persistence and concurrent access are left to callers: the tree is a
//! plain value with no internal locking.
//!
//! # Quick Start
//! ```
//! use btree_index::BTree;
//!
//! let mut tree = BTree::new(3).unwrap();
//! for key in [10, 20, 5, 6, 12, 30, 7, 17] {
//!     tree.insert(key);
//! }
//!
//! assert!(tree.contains(&6));
//! assert_eq!(tree.to_string(), "5 6 7 10 12 17 20 30");
//! ```

pub mod common;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_MIN_DEGREE, MIN_DEGREE_FLOOR};
pub use common::{Error, MinDegree, NodeId, Result};

pub use index::btree::{BTree, BTreeStats, Iter, KeyLocation, Node};
