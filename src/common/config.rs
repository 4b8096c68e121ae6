//! Configuration constants for the B-tree index.

/// Smallest legal minimum degree.
///
/// With `t = 2` every node holds 1 to 3 keys (a 2-3-4 tree). Anything
/// smaller cannot split a full node into two legal halves.
pub const MIN_DEGREE_FLOOR: usize = 2;

/// Minimum degree used by `BTree::default()`.
///
/// # Capacity
/// With `t = 3`:
/// - Non-root nodes hold 2 to 5 keys
/// - Internal nodes have 3 to 6 children
pub const DEFAULT_MIN_DEGREE: usize = 3;
