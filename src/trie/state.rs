//! Child table queries: fan-out, ordered neighbour search and footprint.

use core::mem::size_of;

use crate::bitmap;
use crate::constants::FANOUT;
use crate::trie::node::{Children, Link};

impl Children {
    /// Get number of children in this table.
    ///
    /// # Performance
    /// O(1) - vector length or POPCNT
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Children::Linear { bytes, .. } => bytes.len(),
            Children::Bitmap { links, .. } => links.len(),
            Children::Full { bitmap, .. } => bitmap::count_bits(bitmap),
        }
    }

    /// Find the child with the smallest byte `>= from`.
    ///
    /// # Returns
    /// `(byte, link)` of that child, or None
    #[inline]
    pub fn next_child(&self, from: u8) -> Option<(u8, Link)> {
        match self {
            Children::Linear { bytes, links } => {
                let i = bytes.partition_point(|&b| b < from);
                bytes.get(i).map(|&b| (b, links[i]))
            }
            Children::Bitmap { bitmap, links } => {
                let b = bitmap::next_set_bit(bitmap, from)?;
                Some((b, links[bitmap::rank(bitmap, b)]))
            }
            Children::Full { bitmap, links } => {
                let b = bitmap::next_set_bit(bitmap, from)?;
                links[b as usize].map(|link| (b, link))
            }
        }
    }

    /// Find the child with the largest byte `<= upto`.
    ///
    /// # Returns
    /// `(byte, link)` of that child, or None
    #[inline]
    pub fn prev_child(&self, upto: u8) -> Option<(u8, Link)> {
        match self {
            Children::Linear { bytes, links } => {
                let i = bytes.partition_point(|&b| b <= upto).checked_sub(1)?;
                Some((bytes[i], links[i]))
            }
            Children::Bitmap { bitmap, links } => {
                let b = bitmap::prev_set_bit(bitmap, upto)?;
                Some((b, links[bitmap::rank(bitmap, b)]))
            }
            Children::Full { bitmap, links } => {
                let b = bitmap::prev_set_bit(bitmap, upto)?;
                links[b as usize].map(|link| (b, link))
            }
        }
    }

    /// Child with the smallest byte.
    #[inline]
    pub fn first(&self) -> Option<(u8, Link)> {
        self.next_child(0)
    }

    /// Child with the largest byte.
    #[inline]
    pub fn last(&self) -> Option<(u8, Link)> {
        self.prev_child(u8::MAX)
    }

    /// Iterate children in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Link)> + '_ {
        let mut from = Some(0u8);
        core::iter::from_fn(move || {
            let (byte, link) = self.next_child(from?)?;
            from = byte.checked_add(1);
            Some((byte, link))
        })
    }

    /// Heap bytes owned by this table.
    pub fn heap_bytes(&self) -> usize {
        match self {
            Children::Linear { bytes, links } => {
                bytes.capacity() + links.capacity() * size_of::<Link>()
            }
            Children::Bitmap { links, .. } => links.capacity() * size_of::<Link>(),
            Children::Full { .. } => FANOUT * size_of::<Option<Link>>(),
        }
    }
}
