//! Ordered map adapter with put-style access.

use core::fmt;
use core::ops::{Index, RangeBounds};

use crate::key::TrieKey;
use crate::trie::{Cursor, CursorMut, Iter, Keys, MemoryStats, Trie, Values};

/// Ordered map from fixed-width keys to values.
///
/// A thin layer over [`Trie`] offering the familiar map vocabulary:
/// `put` returns the slot for a key (creating it with `V::default()`),
/// `set` overwrites, `erase` reports how many entries it removed.
///
/// # Example
/// ```
/// use sparse_word_trie::TrieMap;
///
/// let mut hits: TrieMap<u32, u64> = TrieMap::new();
/// *hits.put(404) += 1;
/// *hits.put(404) += 1;
/// *hits.put(200) += 1;
///
/// assert_eq!(hits[404], 2);
/// assert_eq!(hits.first_key_value(), Some((200, &1)));
/// assert_eq!(hits.erase(404), 1);
/// assert_eq!(hits.erase(404), 0);
/// ```
pub struct TrieMap<K: TrieKey, V> {
    trie: Trie<K, V>,
}

impl<K: TrieKey, V> TrieMap<K, V> {
    /// Create an empty map.
    #[inline]
    pub fn new() -> Self {
        TrieMap { trie: Trie::new() }
    }

    /// Slot for `key`, created with `V::default()` when absent.
    ///
    /// # Returns
    /// Mutable reference to the stored value
    #[inline]
    pub fn put(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.trie.get_or_insert_default(key)
    }

    /// Store `value` under `key` unless the key is present.
    ///
    /// # Returns
    /// `true` if the value was stored, `false` if the key already existed
    /// (the existing value is left untouched)
    pub fn insert_if_absent(&mut self, key: K, value: V) -> bool {
        if self.trie.contains(key) {
            return false;
        }
        self.trie.insert(key, value);
        true
    }

    /// Store `value` under `key`, overwriting any previous value.
    #[inline]
    pub fn set(&mut self, key: K, value: V) {
        self.trie.insert(key, value);
    }

    /// Store `value` under `key`.
    ///
    /// # Returns
    /// The previous value, if any
    #[inline]
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.trie.insert(key, value)
    }

    #[inline]
    pub fn get(&self, key: K) -> Option<&V> {
        self.trie.get(key)
    }

    #[inline]
    pub fn get_mut(&mut self, key: K) -> Option<&mut V> {
        self.trie.get_mut(key)
    }

    #[inline]
    pub fn contains_key(&self, key: K) -> bool {
        self.trie.contains(key)
    }

    /// Remove `key`.
    ///
    /// # Returns
    /// Number of entries removed (0 or 1)
    #[inline]
    pub fn erase(&mut self, key: K) -> usize {
        self.trie.remove(key).is_some() as usize
    }

    /// Remove `key` and return its value.
    #[inline]
    pub fn remove(&mut self, key: K) -> Option<V> {
        self.trie.remove(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Remove every entry and release storage.
    #[inline]
    pub fn clear(&mut self) {
        self.trie.clear();
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.trie.iter()
    }

    #[inline]
    pub fn range<R: RangeBounds<K>>(&self, range: R) -> Iter<'_, K, V> {
        self.trie.range(range)
    }

    #[inline]
    pub fn keys(&self) -> Keys<'_, K, V> {
        self.trie.keys()
    }

    #[inline]
    pub fn values(&self) -> Values<'_, K, V> {
        self.trie.values()
    }

    /// Entry with the smallest key.
    #[inline]
    pub fn first_key_value(&self) -> Option<(K, &V)> {
        self.trie.iter().next()
    }

    /// Entry with the largest key.
    #[inline]
    pub fn last_key_value(&self) -> Option<(K, &V)> {
        self.trie.iter().next_back()
    }

    /// Number of keys within `range`.
    #[inline]
    pub fn count_range<R: RangeBounds<K>>(&self, range: R) -> usize {
        self.trie.count_range(range)
    }

    #[inline]
    pub fn cursor_front(&self) -> Cursor<'_, K, V> {
        self.trie.cursor_front()
    }

    /// Cursor on the largest key (the end position if empty).
    #[inline]
    pub fn cursor_back(&self) -> Cursor<'_, K, V> {
        self.trie.cursor_back()
    }

    #[inline]
    pub fn cursor_end(&self) -> Cursor<'_, K, V> {
        self.trie.cursor_end()
    }

    #[inline]
    pub fn find(&self, key: K) -> Cursor<'_, K, V> {
        self.trie.find(key)
    }

    #[inline]
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, K, V> {
        self.trie.cursor_front_mut()
    }

    #[inline]
    pub fn find_mut(&mut self, key: K) -> CursorMut<'_, K, V> {
        self.trie.find_mut(key)
    }

    /// Total memory used by the map in bytes.
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
    pub fn as_trie(&self) -> &Trie<K, V> {
        &self.trie
    }
}

impl<K: TrieKey, V> Default for TrieMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: TrieKey, V: Clone> Clone for TrieMap<K, V> {
    fn clone(&self) -> Self {
        TrieMap {
            trie: self.trie.clone(),
        }
    }
}

impl<K: TrieKey + fmt::Debug, V: fmt::Debug> fmt::Debug for TrieMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.trie, f)
    }
}

impl<K: TrieKey, V: PartialEq> PartialEq for TrieMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.trie == other.trie
    }
}

impl<K: TrieKey, V: Eq> Eq for TrieMap<K, V> {}

/// Read access by key.
///
/// # Panics
/// Panics if the key is absent.
impl<K: TrieKey, V> Index<K> for TrieMap<K, V> {
    type Output = V;

    fn index(&self, key: K) -> &V {
        match self.trie.get(key) {
            Some(value) => value,
            None => panic!("key not present in TrieMap"),
        }
    }
}

impl<K: TrieKey, V> FromIterator<(K, V)> for TrieMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        TrieMap {
            trie: Trie::from_iter(iter),
        }
    }
}

impl<K: TrieKey, V> Extend<(K, V)> for TrieMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.trie.extend(iter);
    }
}

impl<'a, K: TrieKey, V> IntoIterator for &'a TrieMap<K, V> {
    type Item = (K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.trie.iter()
    }
}
