//! Arena structure for Branch and Leaf storage

use alloc::vec::Vec;
use core::mem;

use crate::constants::EMPTY;

/// Storage slot: either a live element or a link in the free list.
#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(T),
    Vacant { next_free: u32 },
}

/// Generic arena for storing trie elements (Branch or Leaf).
///
/// Provides contiguous storage with O(1) access by index. Freed slots are
/// threaded onto an intrusive free list and reused by the next
/// allocation, so an index handed out before a `free` may later name a
/// different element. Once the last live element is freed the backing
/// vector is released entirely.
///
/// # Type Parameters
/// * `T` - Element type (Branch or Leaf)
///
/// # Performance
/// - Allocation: O(1) amortized
/// - Access: O(1) by index
/// - Free: O(1)
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    /// Storage for elements. Index in this Vec is the arena index.
    slots: Vec<Slot<T>>,

    /// Head of the free list (`EMPTY` if no vacant slot).
    free_head: u32,

    /// Number of occupied slots.
    live: usize,
}

impl<T> Arena<T> {
    /// Create a new empty arena.
    ///
    /// # Performance
    /// O(1) - creates empty Vec, no allocation
    #[inline]
    pub fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free_head: EMPTY,
            live: 0,
        }
    }

    /// Store `value` and return its index.
    ///
    /// Reuses the most recently freed slot when one exists.
    ///
    /// # Performance
    /// O(1) amortized - Vec push or free-list pop
    #[inline]
    pub fn alloc(&mut self, value: T) -> u32 {
        self.live += 1;

        if self.free_head != EMPTY {
            let index = self.free_head;
            let slot = &mut self.slots[index as usize];
            if let Slot::Vacant { next_free } = *slot {
                self.free_head = next_free;
            }
            *slot = Slot::Occupied(value);
            return index;
        }

        let index = self.slots.len() as u32;
        debug_assert!(index != EMPTY, "arena index space exhausted");
        self.slots.push(Slot::Occupied(value));
        index
    }

    /// Release the element at `index` and return it.
    ///
    /// # Panics
    /// Panics if the slot is already vacant or out of bounds.
    #[inline]
    pub fn free(&mut self, index: u32) -> T {
        let slot = mem::replace(
            &mut self.slots[index as usize],
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        let value = match slot {
            Slot::Occupied(value) => value,
            Slot::Vacant { .. } => panic!("double free of arena slot {}", index),
        };

        self.free_head = index;
        self.live -= 1;

        if self.live == 0 {
            self.clear();
        }

        value
    }

    /// Get element by index.
    ///
    /// # Panics
    /// Panics if the slot is vacant or out of bounds.
    ///
    /// # Performance
    /// O(1) - direct Vec indexing
    #[inline(always)]
    pub fn get(&self, index: u32) -> &T {
        match &self.slots[index as usize] {
            Slot::Occupied(value) => value,
            Slot::Vacant { .. } => panic!("arena slot {} is vacant", index),
        }
    }

    /// Get mutable element by index.
    ///
    /// # Panics
    /// Panics if the slot is vacant or out of bounds.
    #[inline(always)]
    pub fn get_mut(&mut self, index: u32) -> &mut T {
        match &mut self.slots[index as usize] {
            Slot::Occupied(value) => value,
            Slot::Vacant { .. } => panic!("arena slot {} is vacant", index),
        }
    }

    /// Number of live elements.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Check if arena holds no live elements.
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Drop every element and release the backing storage.
    pub fn clear(&mut self) {
        self.slots = Vec::new();
        self.free_head = EMPTY;
        self.live = 0;
    }

    /// Iterate over live elements in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        })
    }

    /// Bytes held by the slot vector itself (excludes heap owned by `T`).
    pub fn slot_bytes(&self) -> usize {
        self.slots.capacity() * mem::size_of::<Slot<T>>()
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_new() {
        let arena: Arena<u64> = Arena::new();
        assert_eq!(arena.len(), 0);
        assert!(arena.is_empty());
        assert_eq!(arena.slot_bytes(), 0);
    }

    #[test]
    fn test_alloc_sequential_indices() {
        let mut arena = Arena::new();

        let idx0 = arena.alloc(10u64);
        assert_eq!(idx0, 0);
        assert_eq!(arena.len(), 1);

        let idx1 = arena.alloc(20u64);
        assert_eq!(idx1, 1);
        assert_eq!(arena.len(), 2);

        assert_eq!(*arena.get(idx0), 10);
        assert_eq!(*arena.get(idx1), 20);
    }

    #[test]
    fn test_get_mut() {
        let mut arena = Arena::new();
        let idx = arena.alloc(1u64);

        *arena.get_mut(idx) = 42;
        assert_eq!(*arena.get(idx), 42);
    }

    #[test]
    fn test_free_recycles_slot() {
        let mut arena = Arena::new();
        let a = arena.alloc(1u64);
        let b = arena.alloc(2u64);
        let _c = arena.alloc(3u64);

        assert_eq!(arena.free(b), 2);
        assert_eq!(arena.len(), 2);

        // Freed slot is reused first
        let d = arena.alloc(4u64);
        assert_eq!(d, b);
        assert_eq!(*arena.get(d), 4);
        assert_eq!(*arena.get(a), 1);
    }

    #[test]
    fn test_free_list_is_lifo() {
        let mut arena = Arena::new();
        for v in 0..5u64 {
            arena.alloc(v);
        }

        arena.free(1);
        arena.free(3);

        assert_eq!(arena.alloc(30), 3);
        assert_eq!(arena.alloc(10), 1);
        assert_eq!(arena.alloc(50), 5);
    }

    #[test]
    fn test_last_free_releases_storage() {
        let mut arena = Arena::new();
        let a = arena.alloc(1u64);
        let b = arena.alloc(2u64);

        arena.free(a);
        assert!(arena.slot_bytes() > 0);

        arena.free(b);
        assert!(arena.is_empty());
        assert_eq!(arena.slot_bytes(), 0);

        // Fresh allocation starts over at index 0
        assert_eq!(arena.alloc(3u64), 0);
    }

    #[test]
    fn test_iter_skips_vacant() {
        let mut arena = Arena::new();
        for v in 0..4u64 {
            arena.alloc(v);
        }
        arena.free(2);

        let live: alloc::vec::Vec<u64> = arena.iter().copied().collect();
        assert_eq!(live, alloc::vec![0, 1, 3]);
    }

    #[test]
    #[should_panic(expected = "vacant")]
    fn test_get_vacant_panics() {
        let mut arena = Arena::new();
        let a = arena.alloc(1u64);
        arena.alloc(2u64);
        arena.free(a);
        arena.get(a);
    }
}
