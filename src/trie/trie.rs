//! Main Trie structure: storage, insertion, lookup and removal.

use alloc::vec::Vec;
use core::fmt;
use core::mem;

use crate::arena::Arena;
use crate::constants::{LEAF_LINEAR_MAX, LEAF_MERGE_THRESHOLD, MAX_KEY_BYTES};
use crate::key::{byte_of, common_prefix_len, prefix_mask, TrieKey};
use crate::trie::leaf::{Leaf, LEAF_PREFIX_MASK};
use crate::trie::node::{Branch, Link};

/// Location of a stored key: leaf arena index and slot within the leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Position {
    pub leaf: u32,
    pub slot: usize,
}

/// Parent edge of a node: the branch index and the byte selecting the node.
type Edge = (u32, u8);

/// Ordered map from fixed-width keys to values, stored as a compressed
/// 256-way trie.
///
/// Keys are handled as their unsigned big-endian byte sequence. Each
/// branch discriminates on one byte; levels where every key agrees are
/// skipped entirely (path compression), and short runs of keys live
/// together in leaves. Space therefore follows the number of keys and
/// their clustering rather than the width of the key type.
///
/// # Type Parameters
/// * `K` - Key type (see [`TrieKey`])
/// * `V` - Value type; `()` gives a plain ordered set
///
/// # Structure
/// - Branches: adaptive child tables (sorted list, bitmap, or 256-slot
///   table) chosen by fan-out
/// - Leaves: sorted runs of up to 32 keys, or a 256-bit bitmap when every
///   key agrees on all but the last byte
/// - Every branch caches its subtree population, making `count_range`
///   proportional to trie depth
///
/// # Performance
/// - `insert`/`remove`/`get`: O(k) where k is the key width in bytes
/// - `successor`/`predecessor`/`ceiling`/`floor`: O(k), amortized
/// - `len`: O(1)
///
/// # Example
/// ```
/// use sparse_word_trie::Trie;
///
/// let mut trie: Trie<u64, &str> = Trie::new();
/// trie.insert(42, "answer");
/// trie.insert(7, "lucky");
///
/// assert_eq!(trie.get(42), Some(&"answer"));
/// assert_eq!(trie.successor(7), Some(42));
/// assert_eq!(trie.len(), 2);
/// ```
pub struct Trie<K: TrieKey, V = ()> {
    /// Internal nodes.
    pub(crate) branches: Arena<Branch>,

    /// Leaf nodes holding keys and values.
    pub(crate) leaves: Arena<Leaf<K, V>>,

    /// Top of the trie (None when empty).
    pub(crate) root: Option<Link>,

    /// Number of stored keys.
    pub(crate) len: usize,
}

impl<K: TrieKey, V> Trie<K, V> {
    /// Create a new empty trie.
    ///
    /// # Performance
    /// O(1) - no allocation until the first insert
    #[inline]
    pub fn new() -> Self {
        Trie {
            branches: Arena::new(),
            leaves: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// Number of keys in the trie.
    ///
    /// # Performance
    /// O(1) - cached count
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if trie holds no keys.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove every key and release all storage.
    pub fn clear(&mut self) {
        self.branches.clear();
        self.leaves.clear();
        self.root = None;
        self.len = 0;
    }

    /// Check if key exists in trie.
    ///
    /// # Arguments
    /// * `key` - Key to look up
    ///
    /// # Performance
    /// O(k) - one step per branch on the key's path
    #[inline]
    pub fn contains(&self, key: K) -> bool {
        self.locate(key.to_u128()).is_some()
    }

    /// Get a reference to the value stored under `key`.
    #[inline]
    pub fn get(&self, key: K) -> Option<&V> {
        let pos = self.locate(key.to_u128())?;
        Some(self.value_at(pos))
    }

    /// Get a mutable reference to the value stored under `key`.
    #[inline]
    pub fn get_mut(&mut self, key: K) -> Option<&mut V> {
        let pos = self.locate(key.to_u128())?;
        Some(self.leaves.get_mut(pos.leaf).value_mut(pos.slot))
    }

    /// Get the value under `key`, inserting `f()` first if it is absent.
    ///
    /// # Returns
    /// Mutable reference to the stored value
    pub fn get_or_insert_with<F: FnOnce() -> V>(&mut self, key: K, f: F) -> &mut V {
        let pos = match self.locate(key.to_u128()) {
            Some(pos) => pos,
            None => self.insert_new(key, f()),
        };
        self.leaves.get_mut(pos.leaf).value_mut(pos.slot)
    }

    /// Get the value under `key`, inserting `V::default()` if it is absent.
    #[inline]
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.get_or_insert_with(key, V::default)
    }

    /// Insert a key with its value.
    ///
    /// # Arguments
    /// * `key` - Key to insert
    /// * `value` - Value to store
    ///
    /// # Returns
    /// The previous value if the key was already present (it is replaced)
    ///
    /// # Performance
    /// O(k) amortized - occasional leaf bursts touch at most 33 keys
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.locate(key.to_u128()) {
            Some(pos) => Some(mem::replace(
                self.leaves.get_mut(pos.leaf).value_mut(pos.slot),
                value,
            )),
            None => {
                self.insert_new(key, value);
                None
            }
        }
    }

    /// Remove key from trie.
    ///
    /// Nodes left empty are freed immediately, small subtrees fold back
    /// into a single leaf, and a branch left with one child is replaced
    /// by that child.
    ///
    /// # Returns
    /// The removed value, or None if the key was absent
    ///
    /// # Performance
    /// O(k) amortized
    pub fn remove(&mut self, key: K) -> Option<V> {
        let bits = key.to_u128();

        let mut path: [Edge; MAX_KEY_BYTES] = [(0, 0); MAX_KEY_BYTES];
        let mut path_len = 0;
        let mut link = self.root?;

        let leaf_idx = loop {
            match link {
                Link::Branch(idx) => {
                    let branch = self.branches.get(idx);
                    if !branch.covers::<K>(bits) {
                        return None;
                    }
                    let byte = byte_of::<K>(bits, branch.depth as usize);
                    link = branch.children.get(byte)?;
                    path[path_len] = (idx, byte);
                    path_len += 1;
                }
                Link::Leaf(idx) => break idx,
            }
        };

        let value = self.leaves.get_mut(leaf_idx).remove(bits)?;
        self.len -= 1;
        for &(idx, _) in &path[..path_len] {
            self.branches.get_mut(idx).population -= 1;
        }

        if self.leaves.get(leaf_idx).is_empty() {
            self.leaves.free(leaf_idx);
            match path_len.checked_sub(1).map(|i| path[i]) {
                None => self.root = None,
                Some((idx, byte)) => {
                    self.branches.get_mut(idx).children.remove(byte);
                }
            }
        }

        self.compact_path(&path[..path_len]);
        Some(value)
    }

    /// Locate the leaf slot holding `bits`.
    pub(crate) fn locate(&self, bits: u128) -> Option<Position> {
        let mut link = self.root?;
        loop {
            match link {
                Link::Branch(idx) => {
                    let branch = self.branches.get(idx);
                    if !branch.covers::<K>(bits) {
                        return None;
                    }
                    link = branch.children.get(byte_of::<K>(bits, branch.depth as usize))?;
                }
                Link::Leaf(idx) => {
                    let slot = self.leaves.get(idx).find(bits)?;
                    return Some(Position { leaf: idx, slot });
                }
            }
        }
    }

    /// Value stored at a position returned by `locate` or a search.
    #[inline(always)]
    pub(crate) fn value_at(&self, pos: Position) -> &V {
        self.leaves.get(pos.leaf).value(pos.slot)
    }

    /// Number of keys below `link`.
    #[inline]
    pub(crate) fn population_of(&self, link: Link) -> usize {
        match link {
            Link::Branch(idx) => self.branches.get(idx).population,
            Link::Leaf(idx) => self.leaves.get(idx).len(),
        }
    }

    /// Insert a key known to be absent.
    ///
    /// Descends from the root incrementing populations. Ends in one of:
    /// - a branch or bitmap leaf whose prefix excludes the key: split
    /// - a branch with no child for the key's byte: attach a new leaf
    /// - a leaf accepting the key: insert, bursting an overfull leaf
    fn insert_new(&mut self, key: K, value: V) -> Position {
        let bits = key.to_u128();
        self.len += 1;

        let mut link = match self.root {
            Some(link) => link,
            None => {
                let leaf = self.leaves.alloc(Leaf::single(key, value));
                self.root = Some(Link::Leaf(leaf));
                return Position { leaf, slot: 0 };
            }
        };
        let mut parent: Option<Edge> = None;

        loop {
            match link {
                Link::Branch(idx) => {
                    let branch = self.branches.get(idx);
                    if !branch.covers::<K>(bits) {
                        let prefix = branch.prefix;
                        return self.split(parent, link, prefix, key, value);
                    }
                    let byte = byte_of::<K>(bits, branch.depth as usize);
                    let child = branch.children.get(byte);
                    self.branches.get_mut(idx).population += 1;

                    match child {
                        Some(child) => {
                            parent = Some((idx, byte));
                            link = child;
                        }
                        None => {
                            let leaf = self.leaves.alloc(Leaf::single(key, value));
                            self.branches
                                .get_mut(idx)
                                .children
                                .insert(byte, Link::Leaf(leaf));
                            return Position { leaf, slot: 0 };
                        }
                    }
                }
                Link::Leaf(idx) => return self.insert_into_leaf(parent, idx, key, value),
            }
        }
    }

    fn insert_into_leaf(&mut self, parent: Option<Edge>, idx: u32, key: K, value: V) -> Position {
        let bits = key.to_u128();

        if let Some(prefix) = self.leaves.get(idx).bitmap_prefix() {
            if bits & LEAF_PREFIX_MASK != prefix {
                return self.split(parent, Link::Leaf(idx), prefix, key, value);
            }
        }

        let leaf = self.leaves.get_mut(idx);
        let slot = leaf.insert(key, value);
        if leaf.is_linear() && leaf.len() > LEAF_LINEAR_MAX {
            return self.burst(parent, idx, bits);
        }
        Position { leaf: idx, slot }
    }

    /// Put a new branch above `old` at the first byte where the new key
    /// and `old_prefix` differ. The branch links `old` and a fresh
    /// single-key leaf.
    fn split(
        &mut self,
        parent: Option<Edge>,
        old: Link,
        old_prefix: u128,
        key: K,
        value: V,
    ) -> Position {
        let bits = key.to_u128();
        let depth = common_prefix_len::<K>(bits, old_prefix);
        debug_assert!(depth + 1 < K::BYTES, "split below the last branch level");

        let population = self.population_of(old) + 1;
        let leaf = self.leaves.alloc(Leaf::single(key, value));

        let mut branch = Branch::new(bits & prefix_mask::<K>(depth), depth as u8, population);
        branch.children.insert(byte_of::<K>(old_prefix, depth), old);
        branch.children.insert(byte_of::<K>(bits, depth), Link::Leaf(leaf));
        let branch_idx = self.branches.alloc(branch);

        self.replace_link(parent, Link::Branch(branch_idx));
        Position { leaf, slot: 0 }
    }

    /// Replace an overfull linear leaf.
    ///
    /// When every key differs only in the last byte the keys move to a
    /// bitmap leaf; otherwise a branch at the first differing byte
    /// redistributes them into smaller linear leaves.
    ///
    /// # Returns
    /// New position of `bits`
    fn burst(&mut self, parent: Option<Edge>, idx: u32, bits: u128) -> Position {
        let (keys, values) = self.leaves.free(idx).into_entries();
        let at = keys.partition_point(|k| k.to_u128() < bits);

        let first = keys[0].to_u128();
        let last = keys[keys.len() - 1].to_u128();
        let depth = common_prefix_len::<K>(first, last);

        if depth + 1 >= K::BYTES {
            let leaf = Leaf::bitmap_from_sorted(first & LEAF_PREFIX_MASK, keys, values);
            let leaf_idx = self.leaves.alloc(leaf);
            self.replace_link(parent, Link::Leaf(leaf_idx));
            return Position {
                leaf: leaf_idx,
                slot: at,
            };
        }

        let mut branch = Branch::new(first & prefix_mask::<K>(depth), depth as u8, keys.len());
        let mut target = None;

        let mut group_keys = Vec::new();
        let mut group_values = Vec::new();
        let mut group_byte = byte_of::<K>(first, depth);
        let mut group_start = 0;

        for (i, (k, v)) in keys.into_iter().zip(values).enumerate() {
            let byte = k.byte_at(depth);
            if byte != group_byte {
                let leaf = self.attach_group(&mut branch, group_byte, &mut group_keys, &mut group_values);
                if (group_start..i).contains(&at) {
                    target = Some(Position {
                        leaf,
                        slot: at - group_start,
                    });
                }
                group_byte = byte;
                group_start = i;
            }
            group_keys.push(k);
            group_values.push(v);
        }
        let leaf = self.attach_group(&mut branch, group_byte, &mut group_keys, &mut group_values);
        // Not placed by an earlier group, so it sits in the last one
        let target = target.unwrap_or_else(|| Position {
            leaf,
            slot: at - group_start,
        });

        let branch_idx = self.branches.alloc(branch);
        self.replace_link(parent, Link::Branch(branch_idx));
        target
    }

    fn attach_group(
        &mut self,
        branch: &mut Branch,
        byte: u8,
        keys: &mut Vec<K>,
        values: &mut Vec<V>,
    ) -> u32 {
        let leaf = self.leaves.alloc(Leaf::Linear {
            keys: mem::take(keys),
            values: mem::take(values),
        });
        branch.children.insert(byte, Link::Leaf(leaf));
        leaf
    }

    /// Point `parent`'s edge (or the root) at `link`.
    fn replace_link(&mut self, parent: Option<Edge>, link: Link) {
        match parent {
            None => self.root = Some(link),
            Some((idx, byte)) => {
                if let Some(slot) = self.branches.get_mut(idx).children.get_mut(byte) {
                    *slot = link;
                }
            }
        }
    }

    /// Restore structural minimality along a removal path.
    ///
    /// Populations only grow towards the root, so the foldable branches
    /// form a suffix of the path; folding the topmost of them absorbs the
    /// rest. Otherwise only the bottom branch can have lost a child.
    fn compact_path(&mut self, path: &[Edge]) {
        let foldable = path
            .iter()
            .position(|&(idx, _)| self.branches.get(idx).population <= LEAF_MERGE_THRESHOLD);

        if let Some(i) = foldable {
            let parent = i.checked_sub(1).map(|p| path[p]);
            let leaf = self.fold(Link::Branch(path[i].0));
            self.replace_link(parent, Link::Leaf(leaf));
            return;
        }

        if let Some((&(idx, _), above)) = path.split_last() {
            let children = &self.branches.get(idx).children;
            if children.len() == 1 {
                if let Some((_, only)) = children.first() {
                    self.branches.free(idx);
                    self.replace_link(above.last().copied(), only);
                }
            }
        }
    }

    /// Collapse a subtree into one linear leaf, freeing its nodes.
    fn fold(&mut self, root: Link) -> u32 {
        let population = self.population_of(root);
        let mut keys = Vec::with_capacity(population);
        let mut values = Vec::with_capacity(population);
        self.drain_subtree(root, &mut keys, &mut values);
        self.leaves.alloc(Leaf::Linear { keys, values })
    }

    fn drain_subtree(&mut self, link: Link, keys: &mut Vec<K>, values: &mut Vec<V>) {
        match link {
            Link::Branch(idx) => {
                let branch = self.branches.free(idx);
                for (_, child) in branch.children.iter() {
                    self.drain_subtree(child, keys, values);
                }
            }
            Link::Leaf(idx) => self.leaves.free(idx).drain_into(keys, values),
        }
    }
}

impl<K: TrieKey, V> Default for Trie<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: TrieKey, V: Clone> Clone for Trie<K, V> {
    /// Rebuild the copy key by key; the result shares no storage with `self`.
    fn clone(&self) -> Self {
        self.iter().map(|(k, v)| (k, v.clone())).collect()
    }
}

impl<K: TrieKey + fmt::Debug, V: fmt::Debug> fmt::Debug for Trie<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: TrieKey, V: PartialEq> PartialEq for Trie<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K: TrieKey, V: Eq> Eq for Trie<K, V> {}

impl<K: TrieKey, V> FromIterator<(K, V)> for Trie<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<K: TrieKey, V> Extend<(K, V)> for Trie<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_new_trie() {
        let trie: Trie<u32> = Trie::new();
        assert_eq!(trie.len(), 0);
        assert!(trie.is_empty());
        assert!(!trie.contains(0));
        assert!(trie.root.is_none());
    }

    #[test]
    fn test_default() {
        let trie: Trie<u64, u8> = Trie::default();
        assert!(trie.is_empty());
    }

    #[test]
    fn test_insert_basic() {
        let mut trie: Trie<u32, &str> = Trie::new();

        assert_eq!(trie.insert(42, "a"), None);
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.get(42), Some(&"a"));
        assert!(!trie.contains(43));
    }

    #[test]
    fn test_insert_duplicate_replaces_value() {
        let mut trie: Trie<u32, u32> = Trie::new();

        assert_eq!(trie.insert(5, 1), None);
        assert_eq!(trie.insert(5, 2), Some(1));
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.get(5), Some(&2));
    }

    #[test]
    fn test_get_or_insert() {
        let mut trie: Trie<u64, u32> = Trie::new();

        *trie.get_or_insert_default(10) += 5;
        *trie.get_or_insert_default(10) += 5;
        assert_eq!(trie.get(10), Some(&10));

        let v = trie.get_or_insert_with(11, || 99);
        assert_eq!(*v, 99);
        let v = trie.get_or_insert_with(11, || 0);
        assert_eq!(*v, 99);
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_get_mut() {
        let mut trie: Trie<u16, i32> = Trie::new();
        trie.insert(300, 1);

        if let Some(v) = trie.get_mut(300) {
            *v = -1;
        }
        assert_eq!(trie.get(300), Some(&-1));
        assert_eq!(trie.get_mut(301), None);
    }

    #[test]
    fn test_remove_basic() {
        let mut trie: Trie<u32, u32> = Trie::new();
        trie.insert(1, 10);
        trie.insert(2, 20);

        assert_eq!(trie.remove(1), Some(10));
        assert_eq!(trie.remove(1), None);
        assert_eq!(trie.len(), 1);
        assert!(trie.contains(2));

        assert_eq!(trie.remove(2), Some(20));
        assert!(trie.is_empty());
        assert!(trie.root.is_none());
    }

    #[test]
    fn test_sequential_keys_become_bitmap_leaf() {
        let mut trie: Trie<u64> = Trie::new();
        for k in 0..200u64 {
            trie.insert(k, ());
        }

        assert_eq!(trie.len(), 200);
        assert!(matches!(trie.root, Some(Link::Leaf(_))));
        assert_eq!(trie.leaves.len(), 1);
        assert_eq!(trie.branches.len(), 0);
        for k in 0..200u64 {
            assert!(trie.contains(k));
        }
        assert!(!trie.contains(200));
    }

    #[test]
    fn test_burst_into_branch() {
        let mut trie: Trie<u32, u32> = Trie::new();
        // Spread keys across the top byte so no bitmap leaf applies
        for i in 0..=LEAF_LINEAR_MAX as u32 {
            trie.insert(i << 24, i);
        }

        assert!(matches!(trie.root, Some(Link::Branch(_))));
        assert_eq!(trie.branches.len(), 1);
        for i in 0..=LEAF_LINEAR_MAX as u32 {
            assert_eq!(trie.get(i << 24), Some(&i));
        }
    }

    #[test]
    fn test_burst_with_new_key_in_first_group() {
        let mut trie: Trie<u32, u32> = Trie::new();
        for i in 1..=LEAF_LINEAR_MAX as u32 {
            trie.insert(i << 24, i);
        }
        assert!(matches!(trie.root, Some(Link::Leaf(_))));

        // Smallest key overflows the leaf and sorts ahead of every other group
        *trie.get_or_insert_with(0, || 7) += 1;

        assert!(matches!(trie.root, Some(Link::Branch(_))));
        assert_eq!(trie.len(), LEAF_LINEAR_MAX + 1);
        assert_eq!(trie.get(0), Some(&8));
        for i in 1..=LEAF_LINEAR_MAX as u32 {
            assert_eq!(trie.get(i << 24), Some(&i));
        }
    }

    #[test]
    fn test_burst_with_new_key_in_middle_group() {
        let mut trie: Trie<u64, u64> = Trie::new();
        for i in 0..=LEAF_LINEAR_MAX as u64 {
            if i != 10 {
                trie.insert(i << 40, i);
            }
        }
        assert!(matches!(trie.root, Some(Link::Leaf(_))));

        *trie.get_or_insert_default(10 << 40) = 10;

        assert!(matches!(trie.root, Some(Link::Branch(_))));
        assert_eq!(trie.len(), LEAF_LINEAR_MAX + 1);
        for i in 0..=LEAF_LINEAR_MAX as u64 {
            assert_eq!(trie.get(i << 40), Some(&i));
        }
    }

    #[test]
    fn test_split_on_prefix_mismatch() {
        let mut trie: Trie<u64> = Trie::new();
        for k in 0..100u64 {
            trie.insert(k, ());
        }
        // Far key diverges at a high byte from the bitmap leaf's prefix
        trie.insert(1 << 40, ());

        let Some(Link::Branch(root)) = trie.root else {
            panic!("expected branch root");
        };
        let branch = trie.branches.get(root);
        assert_eq!(branch.depth, 2);
        assert_eq!(branch.population, 101);
        assert_eq!(branch.children.len(), 2);
        assert!(trie.contains(1 << 40));
        assert!(trie.contains(99));
    }

    #[test]
    fn test_remove_folds_small_subtree() {
        let mut trie: Trie<u32, u32> = Trie::new();
        for i in 0..40u32 {
            trie.insert(i * 1000, i);
        }
        assert!(trie.branches.len() > 0);

        for i in 0..30u32 {
            assert_eq!(trie.remove(i * 1000), Some(i));
        }

        assert_eq!(trie.len(), 10);
        assert_eq!(trie.branches.len(), 0);
        assert_eq!(trie.leaves.len(), 1);
        for i in 30..40u32 {
            assert_eq!(trie.get(i * 1000), Some(&i));
        }
    }

    #[test]
    fn test_remove_all_releases_storage() {
        let mut trie: Trie<u64> = Trie::new();
        for k in 0..5000u64 {
            trie.insert(k * 7919, ());
        }
        for k in 0..5000u64 {
            assert_eq!(trie.remove(k * 7919), Some(()));
        }

        assert!(trie.is_empty());
        assert!(trie.root.is_none());
        assert!(trie.branches.is_empty());
        assert!(trie.leaves.is_empty());
        assert_eq!(trie.branches.slot_bytes() + trie.leaves.slot_bytes(), 0);
    }

    #[test]
    fn test_clear() {
        let mut trie: Trie<u32> = (0..1000u32).map(|k| (k * 3, ())).collect();
        trie.clear();

        assert!(trie.is_empty());
        assert!(!trie.contains(3));
        trie.insert(3, ());
        assert!(trie.contains(3));
    }

    #[test]
    fn test_u8_keys_full_domain() {
        let mut trie: Trie<u8, u16> = Trie::new();
        for k in 0..=255u8 {
            trie.insert(k, k as u16 * 2);
        }
        assert_eq!(trie.len(), 256);
        for k in 0..=255u8 {
            assert_eq!(trie.get(k), Some(&(k as u16 * 2)));
        }
        for k in (0..=255u8).step_by(2) {
            trie.remove(k);
        }
        assert_eq!(trie.len(), 128);
        assert!(trie.contains(255));
        assert!(!trie.contains(254));
    }

    #[test]
    fn test_u128_extremes() {
        let mut trie: Trie<u128, u8> = Trie::new();
        trie.insert(0, 0);
        trie.insert(u128::MAX, 1);
        trie.insert(1u128 << 64, 2);

        assert_eq!(trie.get(u128::MAX), Some(&1));
        assert_eq!(trie.get(1u128 << 64), Some(&2));
        assert_eq!(trie.remove(0), Some(0));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original: Trie<u32, u32> = (0..500u32).map(|k| (k * 11, k)).collect();
        let copy = original.clone();

        original.remove(0);
        original.insert(7, 7);

        assert_eq!(copy.len(), 500);
        assert!(copy.contains(0));
        assert!(!copy.contains(7));
        assert_ne!(copy, original);
    }

    #[test]
    fn test_partial_eq_ignores_insertion_order() {
        let a: Trie<u16, u8> = vec![(3, 1), (1, 2), (2, 3)].into_iter().collect();
        let b: Trie<u16, u8> = vec![(1, 2), (2, 3), (3, 1)].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_debug_lists_entries_in_order() {
        let trie: Trie<u8, char> = vec![(2, 'b'), (1, 'a')].into_iter().collect();
        assert_eq!(alloc::format!("{:?}", trie), "{1: 'a', 2: 'b'}");
    }
}
