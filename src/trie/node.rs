//! Internal branch node with an adaptive 256-way child table.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::constants::{BITMAP_WORDS, FANOUT};
use crate::key::{prefix_mask, TrieKey};

/// Reference from a branch (or the trie root) to a child.
///
/// Both variants carry an arena index: `Branch` into the branch arena,
/// `Leaf` into the leaf arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Link {
    Branch(u32),
    Leaf(u32),
}

/// Child table of a branch, sized to its fan-out.
///
/// - `Linear`: sorted bytes with parallel links, for a handful of children
/// - `Bitmap`: 256-bit presence bitmap plus rank-indexed compact links
/// - `Full`: direct 256-slot table for dense fan-out
///
/// An absent child costs one clear bit (or nothing, for `Linear`), so runs
/// of absent keys never allocate.
#[derive(Debug, Clone)]
pub(crate) enum Children {
    Linear {
        bytes: Vec<u8>,
        links: Vec<Link>,
    },
    Bitmap {
        bitmap: [u64; BITMAP_WORDS],
        links: Vec<Link>,
    },
    Full {
        bitmap: [u64; BITMAP_WORDS],
        links: Box<[Option<Link>; FANOUT]>,
    },
}

impl Children {
    /// Create an empty linear child table.
    #[inline]
    pub fn new() -> Self {
        Children::Linear {
            bytes: Vec::new(),
            links: Vec::new(),
        }
    }
}

impl Default for Children {
    fn default() -> Self {
        Self::new()
    }
}

/// Internal node discriminating on one key byte.
///
/// A branch at `depth` d holds keys that agree on bytes `0..d` (stored in
/// `prefix`, lower bytes zeroed) and selects a child by byte `d`. A child
/// may sit several levels deeper than `d + 1`: the levels in between had a
/// single child and were skipped, and the child's own prefix records the
/// skipped bytes.
///
/// # Invariants
/// - `children.len() >= 2` between operations
/// - `population` equals the number of keys stored below this branch
#[derive(Debug, Clone)]
pub(crate) struct Branch {
    /// Shared key bits above `depth` (lower bytes zero).
    pub prefix: u128,

    /// Index of the discriminating byte (0 = most significant).
    pub depth: u8,

    /// Number of keys in this subtree.
    pub population: usize,

    /// Children keyed by byte `depth`.
    pub children: Children,
}

impl Branch {
    /// Create a branch with no children.
    ///
    /// # Arguments
    /// * `prefix` - Shared key bits above `depth`
    /// * `depth` - Discriminating byte index
    /// * `population` - Keys that will be linked below
    #[inline]
    pub fn new(prefix: u128, depth: u8, population: usize) -> Self {
        Branch {
            prefix,
            depth,
            population,
            children: Children::new(),
        }
    }

    /// Check whether `bits` agrees with this branch on bytes `0..depth`.
    #[inline(always)]
    pub fn covers<K: TrieKey>(&self, bits: u128) -> bool {
        bits & prefix_mask::<K>(self.depth as usize) == self.prefix
    }
}
