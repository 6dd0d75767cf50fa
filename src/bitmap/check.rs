//! Whole-bitmap population count.

/// Count all set bits in bitmap.
///
/// # Returns
/// Total number of set bits (0-256)
///
/// # Performance
/// O(1) - four POPCNT instructions
#[inline]
pub fn count_bits(bitmap: &[u64; 4]) -> usize {
    bitmap.iter().map(|w| w.count_ones() as usize).sum()
}
