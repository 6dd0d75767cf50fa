//! Iterator support for Trie traversal.
//!
//! Iterators keep an inclusive window `[front, back]` of key bits and
//! step by ceiling/floor queries, so they never hold node references
//! across steps and are double-ended for free.
//!
//! # Performance
//! - O(k) per element (one ceiling or floor descent)
//! - O(k) setup for range queries (population-based length)

use core::iter::FusedIterator;
use core::ops::RangeBounds;

use crate::key::{inclusive_bounds, TrieKey};
use crate::trie::Trie;

/// Iterator over `(key, &value)` pairs in ascending key order.
///
/// Created by [`Trie::iter`] and [`Trie::range`].
///
/// # Example
/// ```rust
/// use sparse_word_trie::Trie;
///
/// let mut trie = Trie::<u64, char>::new();
/// trie.insert(30, 'c');
/// trie.insert(10, 'a');
/// trie.insert(20, 'b');
///
/// let keys: Vec<u64> = trie.iter().map(|(k, _)| k).collect();
/// assert_eq!(keys, vec![10, 20, 30]);
///
/// let last = trie.iter().next_back();
/// assert_eq!(last, Some((30, &'c')));
/// ```
pub struct Iter<'a, K: TrieKey, V> {
    trie: &'a Trie<K, V>,

    /// Smallest key bits not yet yielded from the front.
    front: u128,

    /// Largest key bits not yet yielded from the back.
    back: u128,

    /// Keys left inside `[front, back]`.
    remaining: usize,
}

impl<'a, K: TrieKey, V> Iter<'a, K, V> {
    fn new(trie: &'a Trie<K, V>, bounds: Option<(u128, u128)>) -> Self {
        match bounds {
            Some((front, back)) => Iter {
                trie,
                front,
                back,
                remaining: trie.count_le(back) - front.checked_sub(1).map_or(0, |b| trie.count_le(b)),
            },
            None => Iter {
                trie,
                front: 0,
                back: 0,
                remaining: 0,
            },
        }
    }
}

impl<'a, K: TrieKey, V> Iterator for Iter<'a, K, V> {
    type Item = (K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let (bits, pos) = self.trie.ceiling_hit(self.front)?;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.front = bits + 1;
        }
        Some((K::from_u128(bits), self.trie.value_at(pos)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K: TrieKey, V> DoubleEndedIterator for Iter<'a, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let (bits, pos) = self.trie.floor_hit(self.back)?;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.back = bits - 1;
        }
        Some((K::from_u128(bits), self.trie.value_at(pos)))
    }
}

impl<K: TrieKey, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K: TrieKey, V> FusedIterator for Iter<'_, K, V> {}

impl<K: TrieKey, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

/// Iterator over keys in ascending order.
pub struct Keys<'a, K: TrieKey, V> {
    inner: Iter<'a, K, V>,
}

impl<K: TrieKey, V> Iterator for Keys<'_, K, V> {
    type Item = K;

    #[inline]
    fn next(&mut self) -> Option<K> {
        self.inner.next().map(|(k, _)| k)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: TrieKey, V> DoubleEndedIterator for Keys<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<K> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K: TrieKey, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K: TrieKey, V> FusedIterator for Keys<'_, K, V> {}

impl<K: TrieKey, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

/// Iterator over values in ascending key order.
pub struct Values<'a, K: TrieKey, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K: TrieKey, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: TrieKey, V> DoubleEndedIterator for Values<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K: TrieKey, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K: TrieKey, V> FusedIterator for Values<'_, K, V> {}

impl<K: TrieKey, V> Trie<K, V> {
    /// Iterate over all entries in ascending key order.
    ///
    /// # Performance
    /// O(k) per element
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self, inclusive_bounds::<K, _>(&(..)))
    }

    /// Iterate over entries whose keys fall within `range`.
    ///
    /// # Example
    /// ```rust
    /// use sparse_word_trie::Trie;
    ///
    /// let trie: Trie<u32> = (0..100).map(|k| (k, ())).collect();
    /// let keys: Vec<u32> = trie.range(10..15).map(|(k, _)| k).collect();
    /// assert_eq!(keys, vec![10, 11, 12, 13, 14]);
    /// ```
    #[inline]
    pub fn range<R: RangeBounds<K>>(&self, range: R) -> Iter<'_, K, V> {
        Iter::new(self, inclusive_bounds::<K, R>(&range))
    }

    /// Iterate over keys in ascending order.
    #[inline]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Iterate over values in ascending key order.
    #[inline]
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
}

impl<'a, K: TrieKey, V> IntoIterator for &'a Trie<K, V> {
    type Item = (K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
