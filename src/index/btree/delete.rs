//! Deletion with pre-emptive refilling.
//!
//! Before the walk enters a child, that child is brought up to at least `t`
//! keys by borrowing from a sibling or merging with one. Whatever the walk
//! then removes, the child stays at or above `t - 1`, so deletion never has
//! to repair anything on the way back up.
//!
//! # Cases at a node on the path
//! ```text
//! key here, leaf          → remove it
//! key here, internal      → left child has spare:  replace with predecessor
//!                           right child has spare: replace with successor
//!                           neither:               merge both, continue in merged
//! key not here, internal  → refill child (borrow left/right, else merge), continue
//! key not here, leaf      → absent
//! ```

use std::mem;

use tracing::{debug, trace};

use crate::common::NodeId;
use crate::index::btree::BTree;

impl<K: Ord> BTree<K> {
    /// Delete one occurrence of `key`.
    ///
    /// Returns `false`, and leaves the tree untouched, if the key is absent.
    pub fn delete(&mut self, key: &K) -> bool {
        self.take(key).is_some()
    }

    /// Delete one occurrence of `key` and return the stored key.
    pub fn take(&mut self, key: &K) -> Option<K> {
        // Check first so an absent key causes no merges or rotations
        if !self.contains(key) {
            return None;
        }

        let removed = self.remove_from(self.root, key);
        if removed.is_some() {
            self.len -= 1;
        }
        self.shrink_root();
        removed
    }

    /// Remove and return the smallest key.
    pub fn pop_first(&mut self) -> Option<K> {
        if self.is_empty() {
            return None;
        }
        let key = self.pop_first_from(self.root);
        self.len -= 1;
        self.shrink_root();
        Some(key)
    }

    /// Remove and return the largest key.
    pub fn pop_last(&mut self) -> Option<K> {
        if self.is_empty() {
            return None;
        }
        let key = self.pop_last_from(self.root);
        self.len -= 1;
        self.shrink_root();
        Some(key)
    }

    // ========================================================================
    // Internal: Descent
    // ========================================================================

    /// Remove `key` from the subtree rooted at `id`.
    ///
    /// `id` must be the root or hold at least `t` keys.
    fn remove_from(&mut self, mut id: NodeId, key: &K) -> Option<K> {
        let t = self.min_degree;
        loop {
            let node = self.nodes.get(id);
            match node.position(key) {
                Ok(idx) if node.is_leaf => {
                    return Some(self.nodes.get_mut(id).keys.remove(idx));
                }
                Ok(idx) => {
                    let left = node.children[idx];
                    let right = node.children[idx + 1];

                    if self.nodes.get(left).has_spare(t) {
                        let predecessor = self.pop_last_from(left);
                        return Some(mem::replace(
                            &mut self.nodes.get_mut(id).keys[idx],
                            predecessor,
                        ));
                    }

                    if self.nodes.get(right).has_spare(t) {
                        let successor = self.pop_first_from(right);
                        return Some(mem::replace(
                            &mut self.nodes.get_mut(id).keys[idx],
                            successor,
                        ));
                    }

                    // Both at t-1: the key moves down into the merged node
                    self.merge_children(id, idx);
                    id = left;
                }
                Err(_) if node.is_leaf => return None,
                Err(idx) => id = self.refill_child(id, idx),
            }
        }
    }

    /// Remove the largest key of the subtree rooted at `id`.
    ///
    /// `id` must be the root of a non-empty tree or hold at least `t` keys.
    fn pop_last_from(&mut self, mut id: NodeId) -> K {
        loop {
            let node = self.nodes.get(id);
            if node.is_leaf {
                let keys = &mut self.nodes.get_mut(id).keys;
                return keys.remove(keys.len() - 1);
            }
            let last = node.keys.len();
            id = self.refill_child(id, last);
        }
    }

    /// Remove the smallest key of the subtree rooted at `id`.
    ///
    /// Same precondition as [`Self::pop_last_from`].
    fn pop_first_from(&mut self, mut id: NodeId) -> K {
        loop {
            if self.nodes.get(id).is_leaf {
                return self.nodes.get_mut(id).keys.remove(0);
            }
            id = self.refill_child(id, 0);
        }
    }

    /// Make sure child `idx` of `parent` holds at least `t` keys and return
    /// the node the descent should continue into.
    ///
    /// That is the same child unless it had to merge into its left sibling.
    fn refill_child(&mut self, parent: NodeId, idx: usize) -> NodeId {
        let t = self.min_degree;
        let node = self.nodes.get(parent);
        let child = node.children[idx];

        if self.nodes.get(child).has_spare(t) {
            return child;
        }

        let prev = idx.checked_sub(1).map(|i| node.children[i]);
        let next = node.children.get(idx + 1).copied();

        if prev.is_some_and(|id| self.nodes.get(id).has_spare(t)) {
            self.borrow_from_prev(parent, idx);
            child
        } else if next.is_some_and(|id| self.nodes.get(id).has_spare(t)) {
            self.borrow_from_next(parent, idx);
            child
        } else if next.is_some() {
            self.merge_children(parent, idx);
            child
        } else {
            match prev {
                Some(left) => {
                    self.merge_children(parent, idx - 1);
                    left
                }
                None => panic!("{} has a single child and no keys", parent),
            }
        }
    }

    // ========================================================================
    // Internal: Structural repairs
    // ========================================================================

    /// Rotate right: the left sibling's last key goes up into the parent
    /// and the parent's separator comes down to the front of the child.
    fn borrow_from_prev(&mut self, parent: NodeId, idx: usize) {
        let (child, sibling) = {
            let node = self.nodes.get(parent);
            (node.children[idx], node.children[idx - 1])
        };

        let (moved_key, moved_child) = {
            let sib = self.nodes.get_mut(sibling);
            let key = sib.keys.remove(sib.keys.len() - 1);
            let grandchild = if sib.is_leaf { None } else { sib.children.pop() };
            (key, grandchild)
        };

        let separator = mem::replace(&mut self.nodes.get_mut(parent).keys[idx - 1], moved_key);

        let node = self.nodes.get_mut(child);
        node.keys.insert(0, separator);
        if let Some(grandchild) = moved_child {
            node.children.insert(0, grandchild);
        }

        self.stats.borrows += 1;
        trace!(%parent, %child, from = %sibling, "borrow from left sibling");
    }

    /// Rotate left: the right sibling's first key goes up into the parent
    /// and the parent's separator comes down to the end of the child.
    fn borrow_from_next(&mut self, parent: NodeId, idx: usize) {
        let (child, sibling) = {
            let node = self.nodes.get(parent);
            (node.children[idx], node.children[idx + 1])
        };

        let (moved_key, moved_child) = {
            let sib = self.nodes.get_mut(sibling);
            let key = sib.keys.remove(0);
            let grandchild = if sib.is_leaf {
                None
            } else {
                Some(sib.children.remove(0))
            };
            (key, grandchild)
        };

        let separator = mem::replace(&mut self.nodes.get_mut(parent).keys[idx], moved_key);

        let node = self.nodes.get_mut(child);
        node.keys.push(separator);
        if let Some(grandchild) = moved_child {
            node.children.push(grandchild);
        }

        self.stats.borrows += 1;
        trace!(%parent, %child, from = %sibling, "borrow from right sibling");
    }

    /// Merge child `idx + 1` of `parent` into child `idx`, pulling the
    /// separating key down between them. The right node is released.
    fn merge_children(&mut self, parent: NodeId, idx: usize) {
        let (separator, left, right) = {
            let node = self.nodes.get_mut(parent);
            let separator = node.keys.remove(idx);
            let right = node.children.remove(idx + 1);
            (separator, node.children[idx], right)
        };

        let absorbed = self.release_node(right);

        let node = self.nodes.get_mut(left);
        node.keys.push(separator);
        node.keys.extend(absorbed.keys);
        node.children.extend(absorbed.children);

        self.stats.merges += 1;
        trace!(%parent, %left, %right, "merge children");
    }

    /// Replace an empty internal root with its only child.
    ///
    /// The only way the tree gets shorter. An empty leaf root stays.
    fn shrink_root(&mut self) {
        let root = self.nodes.get(self.root);
        if !root.keys.is_empty() || root.is_leaf {
            return;
        }

        let old_root = self.root;
        self.root = root.children[0];
        self.release_node(old_root);

        self.stats.root_shrinks += 1;
        debug!(root = %self.root, height = self.height(), "root shrink");
    }
}
