//! Memory accounting.

use core::mem::size_of;

use crate::key::TrieKey;
use crate::trie::node::Children;
use crate::trie::Trie;

/// Snapshot of a trie's node counts and memory footprint.
///
/// Node counts break branches down by child-table representation and
/// leaves by key representation, which shows how well the key set
/// compresses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryStats {
    /// Branches with a sorted-list child table.
    pub linear_branches: usize,

    /// Branches with a bitmap + compact child table.
    pub bitmap_branches: usize,

    /// Branches with a direct 256-slot child table.
    pub full_branches: usize,

    /// Leaves storing sorted key runs.
    pub linear_leaves: usize,

    /// Leaves storing keys as a 256-bit bitmap.
    pub bitmap_leaves: usize,

    /// Total bytes attributable to the trie, including the handle itself.
    pub bytes: usize,
}

impl MemoryStats {
    /// Total number of branch nodes.
    #[inline]
    pub fn branches(&self) -> usize {
        self.linear_branches + self.bitmap_branches + self.full_branches
    }

    /// Total number of leaf nodes.
    #[inline]
    pub fn leaves(&self) -> usize {
        self.linear_leaves + self.bitmap_leaves
    }
}

impl<K: TrieKey, V> Trie<K, V> {
    /// Collect node counts and memory footprint.
    ///
    /// # Performance
    /// O(n) in the number of nodes
    pub fn stats(&self) -> MemoryStats {
        let mut stats = MemoryStats {
            bytes: size_of::<Self>() + self.branches.slot_bytes() + self.leaves.slot_bytes(),
            ..MemoryStats::default()
        };

        for branch in self.branches.iter() {
            match branch.children {
                Children::Linear { .. } => stats.linear_branches += 1,
                Children::Bitmap { .. } => stats.bitmap_branches += 1,
                Children::Full { .. } => stats.full_branches += 1,
            }
            stats.bytes += branch.children.heap_bytes();
        }

        for leaf in self.leaves.iter() {
            if leaf.is_linear() {
                stats.linear_leaves += 1;
            } else {
                stats.bitmap_leaves += 1;
            }
            stats.bytes += leaf.heap_bytes();
        }

        stats
    }

    /// Total memory used by the trie in bytes.
    ///
    /// Counts node storage, child tables and key/value vectors; does not
    /// follow heap data owned by the values themselves.
    #[inline]
    pub fn memory_usage(&self) -> usize {
        self.stats().bytes
    }
}
