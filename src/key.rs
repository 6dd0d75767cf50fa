//! Trait for trie key types (fixed-width integers and raw pointers).

use core::ops::{Bound, RangeBounds};

mod sealed {
    pub trait Sealed {}
}

/// Fixed-width key stored in the trie.
///
/// Implemented for the unsigned and signed integer types up to 128 bits,
/// `usize`/`isize`, and raw pointers. Every key is handled as its unsigned
/// bit pattern: signed keys and pointers are reinterpreted, never
/// dereferenced, and ordering is always unsigned order of that pattern
/// (so `-1i32` sorts after `i32::MAX`).
///
/// The trait is sealed; the set of supported widths is fixed so the
/// structural code can be monomorphized per width.
pub trait TrieKey: Copy + Eq + sealed::Sealed {
    /// Key width in bytes (number of trie levels).
    const BYTES: usize;

    /// Convert key to its unsigned bit pattern, widened to u128.
    ///
    /// # Performance
    /// O(1) - zero-cost for u128, single cast otherwise
    fn to_u128(self) -> u128;

    /// Rebuild a key from a bit pattern produced by `to_u128`.
    ///
    /// Truncates to the key width.
    fn from_u128(value: u128) -> Self;

    /// Largest bit pattern representable by this key type.
    #[inline(always)]
    fn max_value() -> u128 {
        if Self::BYTES >= 16 {
            u128::MAX
        } else {
            (1u128 << (Self::BYTES * 8)) - 1
        }
    }

    /// Extract byte at given level using big-endian ordering.
    ///
    /// # Arguments
    /// * `level` - Level index (0 = most significant byte)
    ///
    /// # Returns
    /// Byte value at the specified level (0-255)
    #[inline(always)]
    fn byte_at(self, level: usize) -> u8 {
        byte_of::<Self>(self.to_u128(), level)
    }
}

macro_rules! impl_unsigned_key {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl TrieKey for $t {
            const BYTES: usize = core::mem::size_of::<$t>();

            #[inline(always)]
            fn to_u128(self) -> u128 {
                self as u128
            }

            #[inline(always)]
            fn from_u128(value: u128) -> Self {
                value as $t
            }
        }
    )*};
}

macro_rules! impl_signed_key {
    ($($t:ty => $u:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl TrieKey for $t {
            const BYTES: usize = core::mem::size_of::<$t>();

            #[inline(always)]
            fn to_u128(self) -> u128 {
                self as $u as u128
            }

            #[inline(always)]
            fn from_u128(value: u128) -> Self {
                value as $u as $t
            }
        }
    )*};
}

impl_unsigned_key!(u8, u16, u32, u64, u128, usize);
impl_signed_key!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);

impl<T> sealed::Sealed for *const T {}

impl<T> TrieKey for *const T {
    const BYTES: usize = core::mem::size_of::<usize>();

    #[inline(always)]
    fn to_u128(self) -> u128 {
        self as usize as u128
    }

    #[inline(always)]
    fn from_u128(value: u128) -> Self {
        value as usize as *const T
    }
}

impl<T> sealed::Sealed for *mut T {}

impl<T> TrieKey for *mut T {
    const BYTES: usize = core::mem::size_of::<usize>();

    #[inline(always)]
    fn to_u128(self) -> u128 {
        self as usize as u128
    }

    #[inline(always)]
    fn from_u128(value: u128) -> Self {
        value as usize as *mut T
    }
}

/// Byte `level` (0 = most significant) of a `K`-wide bit pattern.
#[inline(always)]
pub(crate) fn byte_of<K: TrieKey>(bits: u128, level: usize) -> u8 {
    debug_assert!(level < K::BYTES, "level out of bounds");
    (bits >> ((K::BYTES - 1 - level) * 8)) as u8
}

/// Mask selecting the leading `depth` bytes of a `K`-wide bit pattern.
#[inline(always)]
pub(crate) fn prefix_mask<K: TrieKey>(depth: usize) -> u128 {
    if depth == 0 {
        return 0;
    }
    let low_bits = (K::BYTES - depth) * 8;
    K::max_value() & !((1u128 << low_bits) - 1)
}

/// Number of leading bytes two `K`-wide bit patterns share.
///
/// Returns `K::BYTES` when the patterns are equal.
#[inline(always)]
pub(crate) fn common_prefix_len<K: TrieKey>(a: u128, b: u128) -> usize {
    let diff = a ^ b;
    if diff == 0 {
        return K::BYTES;
    }
    let unused = 128 - K::BYTES * 8;
    (diff.leading_zeros() as usize - unused) / 8
}

/// Convert range bounds into an inclusive `[lo, hi]` bit-pattern interval.
///
/// Returns `None` when the range is empty.
pub(crate) fn inclusive_bounds<K: TrieKey, R: RangeBounds<K>>(range: &R) -> Option<(u128, u128)> {
    let lo = match range.start_bound() {
        Bound::Included(&k) => k.to_u128(),
        Bound::Excluded(&k) => k.to_u128().checked_add(1).filter(|&v| v <= K::max_value())?,
        Bound::Unbounded => 0,
    };
    let hi = match range.end_bound() {
        Bound::Included(&k) => k.to_u128(),
        Bound::Excluded(&k) => k.to_u128().checked_sub(1)?,
        Bound::Unbounded => K::max_value(),
    };
    if lo > hi {
        None
    } else {
        Some((lo, hi))
    }
}
