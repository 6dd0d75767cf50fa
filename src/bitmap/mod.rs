//! Low-level bitmap operations for 256-bit child and key bitmaps.
//!
//! Bitmaps are represented as arrays of 4 u64 words; bit `i` lives in
//! word `i / 64` at position `i % 64`.

mod basic;
mod check;
mod search;

pub use basic::{clear_bit, is_set, set_bit};
pub use check::count_bits;
pub use search::{first_set_bit, next_set_bit, prev_set_bit, rank};
