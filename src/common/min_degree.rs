//! Minimum degree type.

use std::fmt;

use crate::common::config::{DEFAULT_MIN_DEGREE, MIN_DEGREE_FLOOR};
use crate::common::{Error, Result};

/// The minimum degree `t` of a B-tree, validated to be at least 2.
///
/// Fixed for the lifetime of a tree. Every non-root node holds between
/// `t - 1` and `2t - 1` keys; internal nodes have one more child than keys.
///
/// # Example
/// ```
/// use btree_index::MinDegree;
///
/// let t = MinDegree::new(3).unwrap();
/// assert_eq!(t.min_keys(), 2);
/// assert_eq!(t.max_keys(), 5);
/// assert!(MinDegree::new(1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MinDegree(usize);

impl MinDegree {
    /// Validate and wrap a minimum degree.
    ///
    /// # Errors
    /// - `Error::InvalidMinDegree` if `t < 2`
    pub fn new(t: usize) -> Result<Self> {
        if t < MIN_DEGREE_FLOOR {
            return Err(Error::InvalidMinDegree(t));
        }
        Ok(MinDegree(t))
    }

    /// The raw value of `t`.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    /// Fewest keys a non-root node may hold (`t - 1`).
    #[inline]
    pub fn min_keys(self) -> usize {
        self.0 - 1
    }

    /// Most keys any node may hold (`2t - 1`).
    #[inline]
    pub fn max_keys(self) -> usize {
        2 * self.0 - 1
    }

    /// Most children an internal node may have (`2t`).
    #[inline]
    pub fn max_children(self) -> usize {
        2 * self.0
    }
}

impl Default for MinDegree {
    fn default() -> Self {
        MinDegree(DEFAULT_MIN_DEGREE)
    }
}

impl TryFrom<usize> for MinDegree {
    type Error = Error;

    fn try_from(t: usize) -> Result<Self> {
        MinDegree::new(t)
    }
}

impl fmt::Display for MinDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}", self.0)
    }
}
