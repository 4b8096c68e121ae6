//! Common types shared across the crate.
//!
//! This module contains the primitives the index is built from:
//! - Configuration constants
//! - Error types
//! - Identifiers and parameters (NodeId, MinDegree)

pub mod config;
pub mod error;
mod min_degree;
mod node_id;

pub use error::{Error, Result};
pub use min_degree::MinDegree;
pub use node_id::NodeId;
