//! Positional cursors over a trie.
//!
//! A cursor designates either one stored key or the end position (past
//! the last key). It holds the key itself rather than a node reference,
//! so a step is a successor/predecessor query. Mutation of the trie while
//! a `Cursor` is alive is ruled out by the shared borrow; a `CursorMut`
//! performs its own removal and is consumed by it.

use core::fmt;
use core::ptr;

use crate::key::TrieKey;
use crate::trie::Trie;

/// Read-only cursor positioned on a key or at the end.
///
/// # Example
/// ```
/// use sparse_word_trie::Trie;
///
/// let trie: Trie<u32, char> = [(1, 'a'), (5, 'e')].into_iter().collect();
///
/// let mut cursor = trie.cursor_front();
/// assert_eq!(cursor.key(), Some(1));
/// cursor.move_next();
/// assert_eq!(cursor.value(), Some(&'e'));
/// cursor.move_next();
/// assert!(cursor.is_end());
/// assert_eq!(cursor, trie.cursor_end());
/// ```
pub struct Cursor<'a, K: TrieKey, V> {
    trie: &'a Trie<K, V>,
    current: Option<K>,
}

impl<'a, K: TrieKey, V> Cursor<'a, K, V> {
    #[inline]
    pub(crate) fn new(trie: &'a Trie<K, V>, current: Option<K>) -> Self {
        Cursor { trie, current }
    }

    /// Key at the cursor, or None at the end position.
    #[inline]
    pub fn key(&self) -> Option<K> {
        self.current
    }

    /// Value at the cursor, or None at the end position.
    #[inline]
    pub fn value(&self) -> Option<&'a V> {
        self.trie.get(self.current?)
    }

    /// Check if the cursor is at the end position.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Advance to the next key in ascending order, or to the end
    /// position after the last key.
    ///
    /// # Panics
    /// Panics if the cursor is already at the end position.
    pub fn move_next(&mut self) {
        match self.current {
            Some(key) => self.current = self.trie.successor(key),
            None => panic!("move_next on a cursor at the end position"),
        }
    }

    /// Step back to the previous key in ascending order.
    ///
    /// From the end position this moves to the largest key.
    ///
    /// # Panics
    /// Panics if the cursor is on the smallest key, or at the end
    /// position of an empty trie.
    pub fn move_prev(&mut self) {
        let prev = match self.current {
            Some(key) => self.trie.predecessor(key),
            None => self.trie.last(),
        };
        match prev {
            Some(key) => self.current = Some(key),
            None => panic!("move_prev past the first key"),
        }
    }
}

impl<K: TrieKey, V> Clone for Cursor<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: TrieKey, V> Copy for Cursor<'_, K, V> {}

/// Two cursors are equal when they are both at the end position, or
/// when they refer to the same trie and the same key.
impl<K: TrieKey, V> PartialEq for Cursor<'_, K, V> {
    fn eq(&self, other: &Self) -> bool {
        match (self.current, other.current) {
            (None, None) => true,
            (Some(a), Some(b)) => a == b && ptr::eq(self.trie, other.trie),
            _ => false,
        }
    }
}

impl<K: TrieKey, V> Eq for Cursor<'_, K, V> {}

impl<K: TrieKey + fmt::Debug, V> fmt::Debug for Cursor<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.current).finish()
    }
}

/// Cursor with write access to the trie.
///
/// Supports editing the value in place and removing the current entry.
pub struct CursorMut<'a, K: TrieKey, V> {
    trie: &'a mut Trie<K, V>,
    current: Option<K>,
}

impl<'a, K: TrieKey, V> CursorMut<'a, K, V> {
    #[inline]
    pub(crate) fn new(trie: &'a mut Trie<K, V>, current: Option<K>) -> Self {
        CursorMut { trie, current }
    }

    #[inline]
    pub fn key(&self) -> Option<K> {
        self.current
    }

    #[inline]
    pub fn value(&self) -> Option<&V> {
        self.trie.get(self.current?)
    }

    /// Mutable access to the value at the cursor.
    #[inline]
    pub fn value_mut(&mut self) -> Option<&mut V> {
        self.trie.get_mut(self.current?)
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// # Panics
    /// Panics if the cursor is already at the end position.
    pub fn move_next(&mut self) {
        match self.current {
            Some(key) => self.current = self.trie.successor(key),
            None => panic!("move_next on a cursor at the end position"),
        }
    }

    /// # Panics
    /// Panics if the cursor is on the smallest key, or at the end
    /// position of an empty trie.
    pub fn move_prev(&mut self) {
        let prev = match self.current {
            Some(key) => self.trie.predecessor(key),
            None => self.trie.last(),
        };
        match prev {
            Some(key) => self.current = Some(key),
            None => panic!("move_prev past the first key"),
        }
    }

    /// Read-only view at the same position.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<'_, K, V> {
        Cursor::new(self.trie, self.current)
    }

    /// Remove the entry at the cursor.
    ///
    /// Consumes the cursor: it designated the removed key, so it cannot
    /// be used afterwards. Other positions are reached again through the
    /// trie.
    ///
    /// # Returns
    /// The removed key and value, or None at the end position
    pub fn remove_current(self) -> Option<(K, V)> {
        let key = self.current?;
        self.trie.remove(key).map(|value| (key, value))
    }
}

impl<K: TrieKey + fmt::Debug, V> fmt::Debug for CursorMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut").field(&self.current).finish()
    }
}

impl<K: TrieKey, V> Trie<K, V> {
    /// Cursor on the smallest key (the end position if empty).
    #[inline]
    pub fn cursor_front(&self) -> Cursor<'_, K, V> {
        Cursor::new(self, self.first())
    }

    /// Cursor on the largest key (the end position if empty).
    #[inline]
    pub fn cursor_back(&self) -> Cursor<'_, K, V> {
        Cursor::new(self, self.last())
    }

    /// Cursor at the end position.
    #[inline]
    pub fn cursor_end(&self) -> Cursor<'_, K, V> {
        Cursor::new(self, None)
    }

    /// Cursor on `key` if present, otherwise the end position.
    ///
    /// # Performance
    /// O(k) - one ceiling query plus an equality check
    #[inline]
    pub fn find(&self, key: K) -> Cursor<'_, K, V> {
        Cursor::new(self, self.ceiling(key).filter(|&found| found == key))
    }

    /// Mutable cursor on the smallest key.
    #[inline]
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, K, V> {
        let first = self.first();
        CursorMut::new(self, first)
    }

    /// Mutable cursor on `key` if present, otherwise the end position.
    #[inline]
    pub fn find_mut(&mut self, key: K) -> CursorMut<'_, K, V> {
        let found = self.ceiling(key).filter(|&found| found == key);
        CursorMut::new(self, found)
    }
}
