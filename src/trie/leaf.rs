//! Leaf node structure for storing keys and their values.

use alloc::vec::Vec;
use core::mem::size_of;

use crate::bitmap;
use crate::constants::{BITMAP_WORDS, LEAF_MERGE_THRESHOLD};
use crate::key::TrieKey;

/// Mask clearing the last key byte; identifies a bitmap leaf's 256-key range.
pub(crate) const LEAF_PREFIX_MASK: u128 = !0xFF;

/// Leaf node holding a sorted run of keys with their values.
///
/// # Representations
/// - `Linear`: parallel sorted key and value vectors, at most
///   `LEAF_LINEAR_MAX` keys. Accepts any key its parent routes to it.
/// - `Bitmap`: keys sharing every byte but the last. `prefix` holds the
///   shared bytes (last byte zero), bit `b` of `bitmap` marks key
///   `prefix | b`, and `values` is rank-indexed by that bit.
///
/// A slot is the position of a key within the leaf in ascending order;
/// for a bitmap leaf the slot of a key equals the rank of its bit.
///
/// # Performance
/// - Linear lookup: O(log n) binary search over at most 32 keys
/// - Bitmap lookup: O(1) bit test + POPCNT rank
#[derive(Debug, Clone)]
pub(crate) enum Leaf<K, V> {
    Linear {
        keys: Vec<K>,
        values: Vec<V>,
    },
    Bitmap {
        prefix: u128,
        bitmap: [u64; BITMAP_WORDS],
        values: Vec<V>,
    },
}

impl<K: TrieKey, V> Leaf<K, V> {
    /// Create a linear leaf holding one key.
    #[inline]
    pub fn single(key: K, value: V) -> Self {
        let mut keys = Vec::with_capacity(1);
        let mut values = Vec::with_capacity(1);
        keys.push(key);
        values.push(value);
        Leaf::Linear { keys, values }
    }

    /// Build a bitmap leaf from keys sorted ascending that share `prefix`.
    pub fn bitmap_from_sorted(prefix: u128, keys: Vec<K>, values: Vec<V>) -> Self {
        let mut bitmap = [0u64; BITMAP_WORDS];
        for key in keys {
            debug_assert_eq!(key.to_u128() & LEAF_PREFIX_MASK, prefix);
            bitmap::set_bit(&mut bitmap, key.to_u128() as u8);
        }
        Leaf::Bitmap {
            prefix,
            bitmap,
            values,
        }
    }

    /// Number of keys in this leaf.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Leaf::Linear { keys, .. } => keys.len(),
            Leaf::Bitmap { values, .. } => values.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn is_linear(&self) -> bool {
        matches!(self, Leaf::Linear { .. })
    }

    /// Shared prefix when this is a bitmap leaf.
    #[inline]
    pub fn bitmap_prefix(&self) -> Option<u128> {
        match self {
            Leaf::Bitmap { prefix, .. } => Some(*prefix),
            Leaf::Linear { .. } => None,
        }
    }

    /// Find the slot holding `bits`.
    ///
    /// # Returns
    /// Slot index, or None if the key is absent
    #[inline]
    pub fn find(&self, bits: u128) -> Option<usize> {
        match self {
            Leaf::Linear { keys, .. } => keys.binary_search_by(|k| k.to_u128().cmp(&bits)).ok(),
            Leaf::Bitmap { prefix, bitmap, .. } => {
                if bits & LEAF_PREFIX_MASK != *prefix || !bitmap::is_set(bitmap, bits as u8) {
                    return None;
                }
                Some(bitmap::rank(bitmap, bits as u8))
            }
        }
    }

    /// Value stored at `slot`.
    #[inline(always)]
    pub fn value(&self, slot: usize) -> &V {
        match self {
            Leaf::Linear { values, .. } | Leaf::Bitmap { values, .. } => &values[slot],
        }
    }

    #[inline(always)]
    pub fn value_mut(&mut self, slot: usize) -> &mut V {
        match self {
            Leaf::Linear { values, .. } | Leaf::Bitmap { values, .. } => &mut values[slot],
        }
    }

    /// Add a key that is not yet present.
    ///
    /// For a bitmap leaf the key must share the leaf's prefix. A linear
    /// leaf may temporarily exceed `LEAF_LINEAR_MAX`; the caller bursts it.
    ///
    /// # Returns
    /// Slot of the new key
    pub fn insert(&mut self, key: K, value: V) -> usize {
        let bits = key.to_u128();
        match self {
            Leaf::Linear { keys, values } => {
                let slot = keys.partition_point(|k| k.to_u128() < bits);
                keys.insert(slot, key);
                values.insert(slot, value);
                slot
            }
            Leaf::Bitmap {
                prefix,
                bitmap,
                values,
            } => {
                debug_assert_eq!(bits & LEAF_PREFIX_MASK, *prefix);
                let slot = bitmap::rank(bitmap, bits as u8);
                bitmap::set_bit(bitmap, bits as u8);
                values.insert(slot, value);
                slot
            }
        }
    }

    /// Remove `bits` and return its value.
    ///
    /// A bitmap leaf that drops to `LEAF_MERGE_THRESHOLD` keys converts
    /// back to a linear leaf.
    pub fn remove(&mut self, bits: u128) -> Option<V> {
        let slot = self.find(bits)?;
        let value = match self {
            Leaf::Linear { keys, values } => {
                keys.remove(slot);
                values.remove(slot)
            }
            Leaf::Bitmap { bitmap, values, .. } => {
                bitmap::clear_bit(bitmap, bits as u8);
                values.remove(slot)
            }
        };

        if !self.is_linear() && self.len() <= LEAF_MERGE_THRESHOLD {
            self.shrink_to_linear();
        }
        Some(value)
    }

    /// Smallest key `>= bits` in this leaf.
    ///
    /// # Returns
    /// `(key bits, slot)`, or None
    pub fn ceiling(&self, bits: u128) -> Option<(u128, usize)> {
        match self {
            Leaf::Linear { keys, .. } => {
                let slot = keys.partition_point(|k| k.to_u128() < bits);
                keys.get(slot).map(|k| (k.to_u128(), slot))
            }
            Leaf::Bitmap { prefix, bitmap, .. } => {
                let head = bits & LEAF_PREFIX_MASK;
                let from = if head < *prefix {
                    0
                } else if head > *prefix {
                    return None;
                } else {
                    bits as u8
                };
                let b = bitmap::next_set_bit(bitmap, from)?;
                Some((*prefix | b as u128, bitmap::rank(bitmap, b)))
            }
        }
    }

    /// Largest key `<= bits` in this leaf.
    ///
    /// # Returns
    /// `(key bits, slot)`, or None
    pub fn floor(&self, bits: u128) -> Option<(u128, usize)> {
        match self {
            Leaf::Linear { keys, .. } => {
                let slot = keys.partition_point(|k| k.to_u128() <= bits).checked_sub(1)?;
                Some((keys[slot].to_u128(), slot))
            }
            Leaf::Bitmap { prefix, bitmap, .. } => {
                let head = bits & LEAF_PREFIX_MASK;
                let upto = if head > *prefix {
                    u8::MAX
                } else if head < *prefix {
                    return None;
                } else {
                    bits as u8
                };
                let b = bitmap::prev_set_bit(bitmap, upto)?;
                Some((*prefix | b as u128, bitmap::rank(bitmap, b)))
            }
        }
    }

    /// Smallest key in this leaf with its slot.
    #[inline]
    pub fn first(&self) -> Option<(u128, usize)> {
        self.ceiling(0)
    }

    /// Largest key in this leaf with its slot.
    #[inline]
    pub fn last(&self) -> Option<(u128, usize)> {
        self.floor(u128::MAX)
    }

    /// Number of keys `<= bits`.
    pub fn count_le(&self, bits: u128) -> usize {
        match self {
            Leaf::Linear { keys, .. } => keys.partition_point(|k| k.to_u128() <= bits),
            Leaf::Bitmap {
                prefix,
                bitmap,
                values,
            } => {
                let head = bits & LEAF_PREFIX_MASK;
                if head < *prefix {
                    0
                } else if head > *prefix {
                    values.len()
                } else {
                    let b = bits as u8;
                    bitmap::rank(bitmap, b) + bitmap::is_set(bitmap, b) as usize
                }
            }
        }
    }

    /// Consume the leaf, appending its entries in ascending order.
    pub fn drain_into(self, out_keys: &mut Vec<K>, out_values: &mut Vec<V>) {
        match self {
            Leaf::Linear { mut keys, mut values } => {
                out_keys.append(&mut keys);
                out_values.append(&mut values);
            }
            Leaf::Bitmap {
                prefix,
                bitmap,
                values,
            } => {
                let mut byte = bitmap::first_set_bit(&bitmap);
                for value in values {
                    if let Some(b) = byte {
                        out_keys.push(K::from_u128(prefix | b as u128));
                        out_values.push(value);
                        byte = b.checked_add(1).and_then(|next| bitmap::next_set_bit(&bitmap, next));
                    }
                }
            }
        }
    }

    /// Consume the leaf into sorted key and value vectors.
    pub fn into_entries(self) -> (Vec<K>, Vec<V>) {
        match self {
            Leaf::Linear { keys, values } => (keys, values),
            bitmap_leaf => {
                let mut keys = Vec::with_capacity(bitmap_leaf.len());
                let mut values = Vec::with_capacity(bitmap_leaf.len());
                bitmap_leaf.drain_into(&mut keys, &mut values);
                (keys, values)
            }
        }
    }

    fn shrink_to_linear(&mut self) {
        let leaf = core::mem::replace(
            self,
            Leaf::Linear {
                keys: Vec::new(),
                values: Vec::new(),
            },
        );
        let (keys, values) = leaf.into_entries();
        *self = Leaf::Linear { keys, values };
    }

    /// Heap bytes owned by this leaf.
    pub fn heap_bytes(&self) -> usize {
        match self {
            Leaf::Linear { keys, values } => {
                keys.capacity() * size_of::<K>() + values.capacity() * size_of::<V>()
            }
            Leaf::Bitmap { values, .. } => values.capacity() * size_of::<V>(),
        }
    }
}
