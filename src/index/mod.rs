//! Index structures.
//!
//! - [`btree`] - In-memory B-tree of minimum degree `t`

pub mod btree;

pub use btree::{BTree, BTreeStats, Iter, KeyLocation, Node};
