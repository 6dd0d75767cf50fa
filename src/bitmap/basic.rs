//! Basic single-bit operations.

/// Set a bit in the bitmap at the given index.
///
/// # Arguments
/// * `bitmap` - Mutable reference to 4-word bitmap
/// * `idx` - Bit index (0-255)
///
/// # Returns
/// `true` if the bit was clear before the call
#[inline]
pub fn set_bit(bitmap: &mut [u64; 4], idx: u8) -> bool {
    let word = idx as usize / 64;
    let mask = 1u64 << (idx as usize % 64);
    let was_clear = bitmap[word] & mask == 0;
    bitmap[word] |= mask;
    was_clear
}

/// Clear a bit in the bitmap at the given index.
///
/// # Returns
/// `true` if the bit was set before the call
#[inline]
pub fn clear_bit(bitmap: &mut [u64; 4], idx: u8) -> bool {
    let word = idx as usize / 64;
    let mask = 1u64 << (idx as usize % 64);
    let was_set = bitmap[word] & mask != 0;
    bitmap[word] &= !mask;
    was_set
}

/// Check if a bit is set in the bitmap.
///
/// # Performance
/// O(1) - single word load and mask
#[inline]
pub fn is_set(bitmap: &[u64; 4], idx: u8) -> bool {
    let word = idx as usize / 64;
    let bit = idx as usize % 64;
    bitmap[word] & (1u64 << bit) != 0
}
