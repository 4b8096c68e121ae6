//! Structural invariant checks.
//!
//! A full walk of the tree that reports the first invariant it finds
//! broken. Nothing in the index calls this on its own; tests and callers
//! debugging a suspected corruption do.

use crate::common::{Error, NodeId, Result};
use crate::index::btree::BTree;

/// State carried through one validation walk.
struct Walk {
    /// Depth of the first leaf reached; every other leaf must match.
    leaf_depth: Option<usize>,
    /// Keys seen so far.
    keys: usize,
    /// Nodes reached from the root.
    nodes: usize,
}

fn violation(node: NodeId, reason: impl Into<String>) -> Error {
    Error::InvariantViolation {
        node,
        reason: reason.into(),
    }
}

impl<K: Ord> BTree<K> {
    /// Check every structural invariant of the tree.
    ///
    /// - Keys within each node are non-decreasing
    /// - Every key lies between the separators bounding its subtree
    /// - Non-root nodes hold `t - 1` to `2t - 1` keys; the root at most `2t - 1`
    /// - Leaves have no children; internal nodes have `keys + 1`
    /// - All leaves are at the same depth
    /// - The key count matches `len()` and no node is orphaned
    ///
    /// # Errors
    /// - `Error::InvariantViolation` naming the first node found at fault
    pub fn validate(&self) -> Result<()> {
        let mut walk = Walk {
            leaf_depth: None,
            keys: 0,
            nodes: 0,
        };

        self.validate_node(self.root, 1, None, None, &mut walk)?;

        if walk.keys != self.len {
            return Err(violation(
                self.root,
                format!("tree holds {} keys but len() is {}", walk.keys, self.len),
            ));
        }

        let live = self.nodes.live_count();
        if walk.nodes != live {
            return Err(violation(
                self.root,
                format!("{} nodes reachable but {} live", walk.nodes, live),
            ));
        }

        Ok(())
    }

    fn validate_node(
        &self,
        id: NodeId,
        depth: usize,
        lower: Option<&K>,
        upper: Option<&K>,
        walk: &mut Walk,
    ) -> Result<()> {
        let t = self.min_degree;
        let node = self
            .nodes
            .try_get(id)
            .ok_or_else(|| violation(id, "child id is not live"))?;

        walk.nodes += 1;
        walk.keys += node.keys.len();

        let count = node.keys.len();
        let is_root = id == self.root;
        if count > t.max_keys() {
            return Err(violation(
                id,
                format!("{} keys exceeds max of {}", count, t.max_keys()),
            ));
        }
        if !is_root && count < t.min_keys() {
            return Err(violation(
                id,
                format!("{} keys is below min of {}", count, t.min_keys()),
            ));
        }
        if is_root && !node.is_leaf && count == 0 {
            return Err(violation(id, "internal root has no keys"));
        }

        if node.keys.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(violation(id, "keys out of order"));
        }
        if let (Some(lower), Some(first)) = (lower, node.keys.first()) {
            if first < lower {
                return Err(violation(id, "key below separator of parent"));
            }
        }
        if let (Some(upper), Some(last)) = (upper, node.keys.last()) {
            if last > upper {
                return Err(violation(id, "key above separator of parent"));
            }
        }

        if node.is_leaf {
            if !node.children.is_empty() {
                return Err(violation(id, "leaf has children"));
            }
            match walk.leaf_depth {
                None => walk.leaf_depth = Some(depth),
                Some(expected) if expected != depth => {
                    return Err(violation(
                        id,
                        format!("leaf at depth {} but others at {}", depth, expected),
                    ));
                }
                Some(_) => {}
            }
            return Ok(());
        }

        if node.children.len() != count + 1 {
            return Err(violation(
                id,
                format!("{} keys but {} children", count, node.children.len()),
            ));
        }

        for (i, &child) in node.children.iter().enumerate() {
            let child_lower = if i == 0 { lower } else { node.keys.get(i - 1) };
            let child_upper = node.keys.get(i).or(upper);
            self.validate_node(child, depth + 1, child_lower, child_upper, walk)?;
        }

        Ok(())
    }
}
