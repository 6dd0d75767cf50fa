//! Search operations for finding set bits in bitmap.

/// Find first set bit (minimum).
///
/// # Returns
/// Index of first set bit, or None if bitmap is empty
///
/// # Performance
/// O(1) - TZCNT over at most 4 words
#[inline]
pub fn first_set_bit(bitmap: &[u64; 4]) -> Option<u8> {
    next_set_bit(bitmap, 0)
}

/// Find the first set bit at or after `from`.
///
/// # Arguments
/// * `bitmap` - Reference to 4-word bitmap
/// * `from` - Inclusive lower bound (0-255)
///
/// # Returns
/// Index of the smallest set bit `>= from`, or None
#[inline]
pub fn next_set_bit(bitmap: &[u64; 4], from: u8) -> Option<u8> {
    let start_word = from as usize / 64;
    let start_bit = from as usize % 64;

    let masked = bitmap[start_word] & (!0u64 << start_bit);
    if masked != 0 {
        return Some((start_word * 64 + masked.trailing_zeros() as usize) as u8);
    }

    for (word_idx, &word) in bitmap.iter().enumerate().skip(start_word + 1) {
        if word != 0 {
            return Some((word_idx * 64 + word.trailing_zeros() as usize) as u8);
        }
    }

    None
}

/// Find the last set bit at or before `upto`.
///
/// # Arguments
/// * `bitmap` - Reference to 4-word bitmap
/// * `upto` - Inclusive upper bound (0-255)
///
/// # Returns
/// Index of the largest set bit `<= upto`, or None
#[inline]
pub fn prev_set_bit(bitmap: &[u64; 4], upto: u8) -> Option<u8> {
    let end_word = upto as usize / 64;
    let end_bit = upto as usize % 64;

    // Bits 0..=end_bit; shifting by 63 - end_bit keeps the top intact
    let masked = bitmap[end_word] & (!0u64 >> (63 - end_bit));
    if masked != 0 {
        return Some((end_word * 64 + 63 - masked.leading_zeros() as usize) as u8);
    }

    for word_idx in (0..end_word).rev() {
        let word = bitmap[word_idx];
        if word != 0 {
            return Some((word_idx * 64 + 63 - word.leading_zeros() as usize) as u8);
        }
    }

    None
}

/// Count set bits strictly below `idx`.
///
/// Used to map a bit to its position in a rank-indexed compact vector.
///
/// # Performance
/// O(1) - POPCNT over at most 4 words
#[inline]
pub fn rank(bitmap: &[u64; 4], idx: u8) -> usize {
    let word = idx as usize / 64;
    let bit = idx as usize % 64;

    let mut count = 0usize;
    for &full in &bitmap[..word] {
        count += full.count_ones() as usize;
    }
    count + (bitmap[word] & ((1u64 << bit) - 1)).count_ones() as usize
}
