//! Trie node structures and main API.

mod basic;
mod count;
mod cursor;
mod iter;
mod leaf;
mod node;
mod search;
mod state;
mod stats;
#[allow(clippy::module_inception)]
mod trie;

pub use cursor::{Cursor, CursorMut};
pub use iter::{Iter, Keys, Values};
pub use stats::MemoryStats;
pub use trie::Trie;

#[cfg(test)]
pub(crate) use leaf::Leaf;
#[cfg(test)]
pub(crate) use node::{Children, Link};
