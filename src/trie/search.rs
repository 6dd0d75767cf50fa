//! Ordered queries: min/max, ceiling/floor, successor/predecessor.
//!
//! Each query descends once and falls back to the nearest sibling subtree
//! on the way back up, so it touches O(k) nodes.

use core::cmp::Ordering;

use crate::key::{byte_of, prefix_mask, TrieKey};
use crate::trie::node::Link;
use crate::trie::trie::Position;
use crate::trie::Trie;

impl<K: TrieKey, V> Trie<K, V> {
    /// Get minimum key.
    ///
    /// # Returns
    /// Smallest key in trie, or None if empty
    #[inline]
    pub fn first(&self) -> Option<K> {
        self.min_hit().map(|(bits, _)| K::from_u128(bits))
    }

    /// Get maximum key.
    ///
    /// # Returns
    /// Largest key in trie, or None if empty
    #[inline]
    pub fn last(&self) -> Option<K> {
        self.max_hit().map(|(bits, _)| K::from_u128(bits))
    }

    /// Find the smallest key `>= key`.
    ///
    /// # Performance
    /// O(k) - one descent plus at most one sibling descent
    #[inline]
    pub fn ceiling(&self, key: K) -> Option<K> {
        self.ceiling_hit(key.to_u128()).map(|(bits, _)| K::from_u128(bits))
    }

    /// Find the largest key `<= key`.
    #[inline]
    pub fn floor(&self, key: K) -> Option<K> {
        self.floor_hit(key.to_u128()).map(|(bits, _)| K::from_u128(bits))
    }

    /// Find the smallest key strictly greater than `key`.
    ///
    /// `key` itself need not be present.
    ///
    /// # Example
    /// ```
    /// use sparse_word_trie::Trie;
    ///
    /// let trie: Trie<u32> = [10, 20, 30].into_iter().map(|k| (k, ())).collect();
    /// assert_eq!(trie.successor(10), Some(20));
    /// assert_eq!(trie.successor(15), Some(20));
    /// assert_eq!(trie.successor(30), None);
    /// ```
    pub fn successor(&self, key: K) -> Option<K> {
        let next = key.to_u128().checked_add(1).filter(|&b| b <= K::max_value())?;
        self.ceiling_hit(next).map(|(bits, _)| K::from_u128(bits))
    }

    /// Find the largest key strictly smaller than `key`.
    ///
    /// `key` itself need not be present.
    pub fn predecessor(&self, key: K) -> Option<K> {
        let prev = key.to_u128().checked_sub(1)?;
        self.floor_hit(prev).map(|(bits, _)| K::from_u128(bits))
    }

    pub(crate) fn min_hit(&self) -> Option<(u128, Position)> {
        self.min_from(self.root?)
    }

    pub(crate) fn max_hit(&self) -> Option<(u128, Position)> {
        self.max_from(self.root?)
    }

    /// Smallest stored key `>= bits` with its position.
    pub(crate) fn ceiling_hit(&self, bits: u128) -> Option<(u128, Position)> {
        self.ceiling_from(self.root?, bits)
    }

    /// Largest stored key `<= bits` with its position.
    pub(crate) fn floor_hit(&self, bits: u128) -> Option<(u128, Position)> {
        self.floor_from(self.root?, bits)
    }

    fn min_from(&self, mut link: Link) -> Option<(u128, Position)> {
        loop {
            match link {
                Link::Branch(idx) => link = self.branches.get(idx).children.first()?.1,
                Link::Leaf(idx) => {
                    let (bits, slot) = self.leaves.get(idx).first()?;
                    return Some((bits, Position { leaf: idx, slot }));
                }
            }
        }
    }

    fn max_from(&self, mut link: Link) -> Option<(u128, Position)> {
        loop {
            match link {
                Link::Branch(idx) => link = self.branches.get(idx).children.last()?.1,
                Link::Leaf(idx) => {
                    let (bits, slot) = self.leaves.get(idx).last()?;
                    return Some((bits, Position { leaf: idx, slot }));
                }
            }
        }
    }

    fn ceiling_from(&self, link: Link, bits: u128) -> Option<(u128, Position)> {
        let idx = match link {
            Link::Branch(idx) => idx,
            Link::Leaf(idx) => {
                let (found, slot) = self.leaves.get(idx).ceiling(bits)?;
                return Some((found, Position { leaf: idx, slot }));
            }
        };

        let branch = self.branches.get(idx);
        let depth = branch.depth as usize;
        match (bits & prefix_mask::<K>(depth)).cmp(&branch.prefix) {
            // Whole subtree lies above bits
            Ordering::Less => self.min_from(link),
            Ordering::Greater => None,
            Ordering::Equal => {
                let byte = byte_of::<K>(bits, depth);
                if let Some(child) = branch.children.get(byte) {
                    if let Some(hit) = self.ceiling_from(child, bits) {
                        return Some(hit);
                    }
                }
                let (_, next) = branch.children.next_child(byte.checked_add(1)?)?;
                self.min_from(next)
            }
        }
    }

    fn floor_from(&self, link: Link, bits: u128) -> Option<(u128, Position)> {
        let idx = match link {
            Link::Branch(idx) => idx,
            Link::Leaf(idx) => {
                let (found, slot) = self.leaves.get(idx).floor(bits)?;
                return Some((found, Position { leaf: idx, slot }));
            }
        };

        let branch = self.branches.get(idx);
        let depth = branch.depth as usize;
        match (bits & prefix_mask::<K>(depth)).cmp(&branch.prefix) {
            Ordering::Greater => self.max_from(link),
            Ordering::Less => None,
            Ordering::Equal => {
                let byte = byte_of::<K>(bits, depth);
                if let Some(child) = branch.children.get(byte) {
                    if let Some(hit) = self.floor_from(child, bits) {
                        return Some(hit);
                    }
                }
                let (_, prev) = branch.children.prev_child(byte.checked_sub(1)?)?;
                self.max_from(prev)
            }
        }
    }
}
