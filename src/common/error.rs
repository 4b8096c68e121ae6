//! Error types for the B-tree index.

use thiserror::Error;

use crate::common::config::MIN_DEGREE_FLOOR;
use crate::common::NodeId;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors the index can report.
///
/// Looking up or deleting an absent key is not an error; those calls
/// return `None`/`false`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The minimum degree passed at construction is below the floor.
    ///
    /// The tree is not created.
    #[error("Invalid minimum degree {0}: must be at least {floor}", floor = MIN_DEGREE_FLOOR)]
    InvalidMinDegree(usize),

    /// A structural invariant does not hold.
    ///
    /// Only reported by `BTree::validate()`. Seeing this means a bug in
    /// the index, not bad input.
    #[error("Invariant violated at {node}: {reason}")]
    InvariantViolation { node: NodeId, reason: String },
}
