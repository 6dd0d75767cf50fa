//! Range counting from cached subtree populations.

use core::cmp::Ordering;
use core::ops::RangeBounds;

use crate::key::{byte_of, inclusive_bounds, prefix_mask, TrieKey};
use crate::trie::node::Link;
use crate::trie::Trie;

impl<K: TrieKey, V> Trie<K, V> {
    /// Count keys within a range.
    ///
    /// # Arguments
    /// * `range` - Any range over keys (`a..b`, `a..=b`, `..`, ...)
    ///
    /// # Returns
    /// Number of stored keys in the range (0 for an empty range)
    ///
    /// # Performance
    /// O(k) branch visits; each visit sums the populations of the
    /// siblings below the key's byte
    ///
    /// # Example
    /// ```
    /// use sparse_word_trie::Trie;
    ///
    /// let trie: Trie<u32> = (0..100).map(|k| (k * 10, ())).collect();
    /// assert_eq!(trie.count_range(100..200), 10);
    /// assert_eq!(trie.count_range(..=0), 1);
    /// assert_eq!(trie.count_range(..), 100);
    /// ```
    pub fn count_range<R: RangeBounds<K>>(&self, range: R) -> usize {
        let Some((lo, hi)) = inclusive_bounds::<K, R>(&range) else {
            return 0;
        };
        let below_lo = match lo.checked_sub(1) {
            Some(bits) => self.count_le(bits),
            None => 0,
        };
        self.count_le(hi) - below_lo
    }

    /// Number of keys `<= bits`.
    pub(crate) fn count_le(&self, bits: u128) -> usize {
        let mut link = match self.root {
            Some(link) => link,
            None => return 0,
        };
        let mut count = 0;

        loop {
            let idx = match link {
                Link::Branch(idx) => idx,
                Link::Leaf(idx) => return count + self.leaves.get(idx).count_le(bits),
            };

            let branch = self.branches.get(idx);
            let depth = branch.depth as usize;
            match (bits & prefix_mask::<K>(depth)).cmp(&branch.prefix) {
                Ordering::Less => return count,
                Ordering::Greater => return count + branch.population,
                Ordering::Equal => {}
            }

            let byte = byte_of::<K>(bits, depth);
            for (child_byte, child) in branch.children.iter() {
                if child_byte >= byte {
                    break;
                }
                count += self.population_of(child);
            }
            match branch.children.get(byte) {
                Some(child) => link = child,
                None => return count,
            }
        }
    }
}
