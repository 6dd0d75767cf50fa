//! Ordered set adapter.

use core::fmt;
use core::ops::RangeBounds;

use crate::key::TrieKey;
use crate::trie::{Cursor, CursorMut, Keys, MemoryStats, Trie};

/// Ordered set of fixed-width keys.
///
/// Backed by a `Trie<K, ()>`, so value storage costs nothing.
///
/// # Example
/// ```
/// use sparse_word_trie::TrieSet;
///
/// let mut set = TrieSet::<u64>::new();
/// assert!(set.insert(42));
/// assert!(!set.insert(42));
/// assert!(set.insert(7));
///
/// assert_eq!(set.iter().collect::<Vec<_>>(), vec![7, 42]);
/// assert_eq!(set.successor(7), Some(42));
/// assert_eq!(set.count_range(0..=10), 1);
/// ```
pub struct TrieSet<K: TrieKey> {
    trie: Trie<K, ()>,
}

impl<K: TrieKey> TrieSet<K> {
    /// Create an empty set.
    #[inline]
    pub fn new() -> Self {
        TrieSet { trie: Trie::new() }
    }

    /// Add a key.
    ///
    /// # Returns
    /// `true` if the key was newly added
    #[inline]
    pub fn insert(&mut self, key: K) -> bool {
        self.trie.insert(key, ()).is_none()
    }

    /// Remove a key.
    ///
    /// # Returns
    /// `true` if the key was present
    #[inline]
    pub fn remove(&mut self, key: K) -> bool {
        self.trie.remove(key).is_some()
    }

    /// Remove a key.
    ///
    /// # Returns
    /// Number of keys removed (0 or 1)
    #[inline]
    pub fn erase(&mut self, key: K) -> usize {
        self.remove(key) as usize
    }

    #[inline]
    pub fn contains(&self, key: K) -> bool {
        self.trie.contains(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.trie.clear();
    }

    /// Iterate over keys in ascending order.
    #[inline]
    pub fn iter(&self) -> Keys<'_, K, ()> {
        self.trie.keys()
    }

    /// Iterate over keys within `range` in ascending order.
    #[inline]
    pub fn range<R: RangeBounds<K>>(&self, range: R) -> impl DoubleEndedIterator<Item = K> + '_ {
        self.trie.range(range).map(|(k, _)| k)
    }

    #[inline]
    pub fn first(&self) -> Option<K> {
        self.trie.first()
    }

    #[inline]
    pub fn last(&self) -> Option<K> {
        self.trie.last()
    }

    /// Smallest key strictly greater than `key`.
    #[inline]
    pub fn successor(&self, key: K) -> Option<K> {
        self.trie.successor(key)
    }

    /// Largest key strictly smaller than `key`.
    #[inline]
    pub fn predecessor(&self, key: K) -> Option<K> {
        self.trie.predecessor(key)
    }

    /// Smallest key `>= key`.
    #[inline]
    pub fn ceiling(&self, key: K) -> Option<K> {
        self.trie.ceiling(key)
    }

    /// Largest key `<= key`.
    #[inline]
    pub fn floor(&self, key: K) -> Option<K> {
        self.trie.floor(key)
    }

    /// Number of keys within `range`.
    #[inline]
    pub fn count_range<R: RangeBounds<K>>(&self, range: R) -> usize {
        self.trie.count_range(range)
    }

    /// Cursor on the smallest key (the end position if empty).
    #[inline]
    pub fn cursor_front(&self) -> Cursor<'_, K, ()> {
        self.trie.cursor_front()
    }

    #[inline]
    pub fn cursor_back(&self) -> Cursor<'_, K, ()> {
        self.trie.cursor_back()
    }

    #[inline]
    pub fn cursor_end(&self) -> Cursor<'_, K, ()> {
        self.trie.cursor_end()
    }

    /// Cursor on `key` if present, otherwise the end position.
    #[inline]
    pub fn find(&self, key: K) -> Cursor<'_, K, ()> {
        self.trie.find(key)
    }

    #[inline]
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, K, ()> {
        self.trie.cursor_front_mut()
    }

    #[inline]
    pub fn find_mut(&mut self, key: K) -> CursorMut<'_, K, ()> {
        self.trie.find_mut(key)
    }

    /// Total memory used by the set in bytes.
    #[inline]
    pub fn memory_usage(&self) -> usize {
        self.trie.memory_usage()
    }

    /// Node counts and memory footprint.
    #[inline]
    pub fn stats(&self) -> MemoryStats {
        self.trie.stats()
    }

    /// Underlying trie.
    #[inline]
    pub fn as_trie(&self) -> &Trie<K, ()> {
        &self.trie
    }
}

impl<K: TrieKey> Default for TrieSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: TrieKey> Clone for TrieSet<K> {
    fn clone(&self) -> Self {
        self.iter().collect()
    }

    /// Replace the contents with a copy of `source`, key by key.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend(source.iter());
    }
}

impl<K: TrieKey + fmt::Debug> fmt::Debug for TrieSet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: TrieKey> PartialEq for TrieSet<K> {
    fn eq(&self, other: &Self) -> bool {
        self.trie == other.trie
    }
}

impl<K: TrieKey> Eq for TrieSet<K> {}

impl<K: TrieKey> FromIterator<K> for TrieSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = TrieSet::new();
        set.extend(iter);
        set
    }
}

impl<K: TrieKey> Extend<K> for TrieSet<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K: TrieKey> IntoIterator for &'a TrieSet<K> {
    type Item = K;
    type IntoIter = Keys<'a, K, ()>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
