//! In-order traversal.
//!
//! [`Iter`] walks the tree lazily with an explicit stack of
//! `(node, next key index)` frames, so each `next()` does O(height) work at
//! worst and the whole walk is O(n). Every key, duplicates included, comes
//! out exactly once, in ascending order.

use std::fmt;
use std::iter::FusedIterator;

use crate::common::NodeId;
use crate::index::btree::arena::NodeArena;
use crate::index::btree::BTree;

/// Borrowing in-order iterator over the keys of a [`BTree`].
///
/// Created by [`BTree::traverse`] or [`BTree::iter`]. Call either again
/// to restart from the smallest key.
pub struct Iter<'a, K> {
    nodes: &'a NodeArena<K>,
    /// Path from the root to the current position. The index is the next
    /// key of that node still to be yielded.
    stack: Vec<(NodeId, usize)>,
    /// Keys not yet yielded.
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    fn new(tree: &'a BTree<K>) -> Self {
        let mut iter = Self {
            nodes: &tree.nodes,
            stack: Vec::new(),
            remaining: tree.len,
        };
        iter.push_leftmost(tree.root);
        iter
    }

    /// Push `id` and every first child below it.
    fn push_leftmost(&mut self, mut id: NodeId) {
        let nodes = self.nodes;
        loop {
            self.stack.push((id, 0));
            match nodes.get(id).children.first() {
                Some(&child) => id = child,
                None => return,
            }
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let nodes = self.nodes;
        while let Some((id, idx)) = self.stack.pop() {
            let node = nodes.get(id);
            if idx < node.keys.len() {
                // Come back for the next key after the subtree to the right
                self.stack.push((id, idx + 1));
                if let Some(&right) = node.children.get(idx + 1) {
                    self.push_leftmost(right);
                }
                self.remaining -= 1;
                return Some(&node.keys[idx]);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for Iter<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K> BTree<K> {
    /// All keys in ascending order.
    ///
    /// Lazy and restartable: each call starts a fresh walk from the
    /// smallest key.
    pub fn traverse(&self) -> Iter<'_, K> {
        Iter::new(self)
    }

    /// Alias of [`BTree::traverse`], matching the std collections.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self)
    }
}

impl<'a, K> IntoIterator for &'a BTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.traverse()
    }
}

/// Keys in order, separated by single spaces: `5 6 7 10`.
impl<K: fmt::Display> fmt::Display for BTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.traverse().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", key)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::index::btree::BTree;

    #[test]
    fn test_traverse_empty() {
        let tree: BTree<i32> = BTree::new(2).unwrap();
        assert_eq!(tree.traverse().next(), None);
        assert_eq!(tree.traverse().len(), 0);
        assert_eq!(format!("{}", tree), "");
    }

    #[test]
    fn test_traverse_sorted() {
        let mut tree = BTree::new(3).unwrap();
        for key in [10, 20, 5, 6, 12, 30, 7, 17] {
            tree.insert(key);
        }

        let keys: Vec<i32> = tree.traverse().copied().collect();
        assert_eq!(keys, vec![5, 6, 7, 10, 12, 17, 20, 30]);
    }

    #[test]
    fn test_traverse_is_restartable() {
        let mut tree = BTree::new(2).unwrap();
        tree.extend([3, 1, 2]);

        let mut first = tree.traverse();
        assert_eq!(first.next(), Some(&1));

        // A new walk starts over regardless of the old one
        let all: Vec<_> = tree.traverse().collect();
        assert_eq!(all, [&1, &2, &3]);
        assert_eq!(first.next(), Some(&2));
    }

    #[test]
    fn test_exact_size() {
        let mut tree = BTree::new(2).unwrap();
        tree.extend(0..37);

        let mut iter = tree.iter();
        assert_eq!(iter.len(), 37);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 35);
        assert_eq!(iter.count(), 35);
    }

    #[test]
    fn test_fused() {
        let mut tree = BTree::new(2).unwrap();
        tree.insert(1);

        let mut iter = tree.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_into_iterator_for_ref() {
        let mut tree = BTree::new(4).unwrap();
        tree.extend((0..100).rev());

        let mut expected = 0;
        for key in &tree {
            assert_eq!(*key, expected);
            expected += 1;
        }
        assert_eq!(expected, 100);
    }

    #[test]
    fn test_display() {
        let mut tree = BTree::new(2).unwrap();
        tree.extend([4, 2, 5, 1, 3]);
        assert_eq!(format!("{}", tree), "1 2 3 4 5");
    }

    #[test]
    fn test_debug_iter() {
        let mut tree = BTree::new(2).unwrap();
        tree.extend([2, 1]);
        assert_eq!(format!("{:?}", tree.iter()), "[1, 2]");
    }
}
