//! # sparse-word-trie
//!
//! Ordered map and set for fixed-width integer and pointer keys, stored
//! as a compressed 256-way trie.
//!
//! Built for keys that are sparse over a huge domain (64-bit ids, memory
//! addresses, hashes) while the working set stays small. Memory follows
//! the number of keys and how they cluster, not the key width.
//!
//! ## Features
//! - O(k) insert, lookup, remove, successor and predecessor, k = key bytes
//! - O(k) range counting from cached subtree populations, O(1) `len`
//! - Double-ended ordered iteration and positional cursors
//! - Path compression and adaptive node layouts (sorted list, bitmap,
//!   direct table), eager release of emptied nodes
//! - Keys: `u8`..`u128`, `usize`, signed integers, raw pointers
//! - no_std compatible (requires alloc)
//!
//! ## Example
//! ```
//! use sparse_word_trie::{TrieMap, TrieSet};
//!
//! let mut owners: TrieMap<u64, &str> = TrieMap::new();
//! owners.set(0xDEAD_0000_0000, "kernel");
//! owners.set(0x0000_7FFF_0000, "stack");
//! assert_eq!(owners.first_key_value(), Some((0x0000_7FFF_0000, &"stack")));
//!
//! let mut ids = TrieSet::<u32>::new();
//! ids.extend([900, 5, 70_000]);
//! assert_eq!(ids.iter().collect::<Vec<_>>(), vec![5, 900, 70_000]);
//! ```

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod arena;
mod bitmap;
pub mod constants;
mod key;
mod map;
mod set;
mod trie;

#[cfg(test)]
mod proptests;

pub use key::TrieKey;
pub use map::TrieMap;
pub use set::TrieSet;
pub use trie::{Cursor, CursorMut, Iter, Keys, MemoryStats, Trie, Values};
