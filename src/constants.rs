//! Core constants and tuning parameters for sparse-word-trie.

/// Sentinel value for empty/null arena index.
///
/// Used to terminate the arena free list.
pub const EMPTY: u32 = u32::MAX;

/// Number of bits consumed per trie level (one key byte).
pub const BITS_PER_LEVEL: usize = 8;

/// Number of children a branch can address (2^8 = 256).
pub const FANOUT: usize = 256;

/// Number of u64 words in a 256-bit bitmap (256 / 64 = 4).
pub const BITMAP_WORDS: usize = 4;

/// Widest supported key in bytes (u128).
///
/// Bounds the fixed-size path arrays used by insert and remove.
pub const MAX_KEY_BYTES: usize = 16;

/// Maximum number of keys held by a linear leaf.
///
/// Inserting one more key bursts the leaf into either a bitmap leaf
/// (when all keys differ only in the last byte) or a branch whose
/// children are smaller linear leaves.
pub const LEAF_LINEAR_MAX: usize = 32;

/// Population at or below which a subtree folds back into one linear leaf.
///
/// Also the size at which a bitmap leaf converts back to a linear leaf.
/// Kept well under `LEAF_LINEAR_MAX` so alternating insert/remove at the
/// boundary does not thrash between representations.
pub const LEAF_MERGE_THRESHOLD: usize = 16;

/// Maximum children in a linear (sorted list) child table.
pub const BRANCH_LINEAR_MAX: usize = 8;

/// Children count at which a bitmap child table shrinks back to linear.
pub const BRANCH_BITMAP_MIN: usize = 4;

/// Children count above which a bitmap child table becomes a full table.
pub const BRANCH_FULL_MIN: usize = 160;

/// Children count at which a full table shrinks back to a bitmap table.
pub const BRANCH_FULL_SHRINK: usize = 96;
