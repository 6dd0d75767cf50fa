//! Slot arena backing trie branches and leaves.
//!
//! Nodes refer to each other by `u32` arena index instead of pointers, so
//! the whole structure is owned by two flat vectors and released in bulk.

#[allow(clippy::module_inception)]
mod arena;

pub(crate) use arena::Arena;
