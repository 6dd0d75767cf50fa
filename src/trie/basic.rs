//! Basic child operations for the branch child table.
//!
//! Insertion and removal also move the table between its linear, bitmap
//! and full representations as the fan-out crosses the thresholds in
//! `constants`.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::mem;

use crate::bitmap;
use crate::constants::{
    BITMAP_WORDS, BRANCH_BITMAP_MIN, BRANCH_FULL_MIN, BRANCH_FULL_SHRINK, BRANCH_LINEAR_MAX,
    FANOUT,
};
use crate::trie::node::{Children, Link};

impl Children {
    /// Get child at given byte.
    ///
    /// # Arguments
    /// * `byte` - Byte value (0-255)
    ///
    /// # Returns
    /// The child link, or None if no child exists
    ///
    /// # Performance
    /// O(1) for bitmap/full tables, O(8) scan for linear tables
    #[inline]
    pub fn get(&self, byte: u8) -> Option<Link> {
        match self {
            Children::Linear { bytes, links } => {
                bytes.iter().position(|&b| b == byte).map(|i| links[i])
            }
            Children::Bitmap { bitmap, links } => {
                if bitmap::is_set(bitmap, byte) {
                    Some(links[bitmap::rank(bitmap, byte)])
                } else {
                    None
                }
            }
            Children::Full { links, .. } => links[byte as usize],
        }
    }

    /// Get mutable reference to the child at given byte.
    #[inline]
    pub fn get_mut(&mut self, byte: u8) -> Option<&mut Link> {
        match self {
            Children::Linear { bytes, links } => {
                let i = bytes.iter().position(|&b| b == byte)?;
                Some(&mut links[i])
            }
            Children::Bitmap { bitmap, links } => {
                if bitmap::is_set(bitmap, byte) {
                    Some(&mut links[bitmap::rank(bitmap, byte)])
                } else {
                    None
                }
            }
            Children::Full { links, .. } => links[byte as usize].as_mut(),
        }
    }

    /// Add a child at given byte.
    ///
    /// The byte must not already have a child. Grows the table into the
    /// next representation when it would exceed its capacity.
    ///
    /// # Arguments
    /// * `byte` - Byte value (0-255)
    /// * `link` - Child to attach
    pub fn insert(&mut self, byte: u8, link: Link) {
        debug_assert!(self.get(byte).is_none(), "child {} already present", byte);

        if let Children::Linear { bytes, .. } = self {
            if bytes.len() >= BRANCH_LINEAR_MAX {
                self.grow_to_bitmap();
            }
        }

        match self {
            Children::Linear { bytes, links } => {
                let pos = bytes.partition_point(|&b| b < byte);
                bytes.insert(pos, byte);
                links.insert(pos, link);
            }
            Children::Bitmap { bitmap, links } => {
                let pos = bitmap::rank(bitmap, byte);
                bitmap::set_bit(bitmap, byte);
                links.insert(pos, link);
                if links.len() > BRANCH_FULL_MIN {
                    self.grow_to_full();
                }
            }
            Children::Full { bitmap, links } => {
                bitmap::set_bit(bitmap, byte);
                links[byte as usize] = Some(link);
            }
        }
    }

    /// Detach the child at given byte.
    ///
    /// Shrinks the table into the previous representation once the
    /// fan-out drops to the shrink threshold.
    ///
    /// # Returns
    /// The removed link, or None if no child existed
    pub fn remove(&mut self, byte: u8) -> Option<Link> {
        match self {
            Children::Linear { bytes, links } => {
                let i = bytes.iter().position(|&b| b == byte)?;
                bytes.remove(i);
                Some(links.remove(i))
            }
            Children::Bitmap { bitmap, links } => {
                if !bitmap::is_set(bitmap, byte) {
                    return None;
                }
                let pos = bitmap::rank(bitmap, byte);
                bitmap::clear_bit(bitmap, byte);
                let link = links.remove(pos);
                if links.len() <= BRANCH_BITMAP_MIN {
                    self.shrink_to_linear();
                }
                Some(link)
            }
            Children::Full { bitmap, links } => {
                let link = links[byte as usize].take()?;
                bitmap::clear_bit(bitmap, byte);
                if bitmap::count_bits(bitmap) <= BRANCH_FULL_SHRINK {
                    self.shrink_to_bitmap();
                }
                Some(link)
            }
        }
    }

    fn grow_to_bitmap(&mut self) {
        if let Children::Linear { bytes, links } = self {
            let mut bitmap = [0u64; BITMAP_WORDS];
            for &b in bytes.iter() {
                bitmap::set_bit(&mut bitmap, b);
            }
            // Sorted bytes already give rank order
            let links = mem::take(links);
            *self = Children::Bitmap { bitmap, links };
        }
    }

    fn grow_to_full(&mut self) {
        if let Children::Bitmap { bitmap, links } = self {
            let mut table: Box<[Option<Link>; FANOUT]> = Box::new([None; FANOUT]);
            let mut byte = bitmap::first_set_bit(bitmap);
            for &link in links.iter() {
                if let Some(b) = byte {
                    table[b as usize] = Some(link);
                    byte = b.checked_add(1).and_then(|next| bitmap::next_set_bit(bitmap, next));
                }
            }
            let bitmap = *bitmap;
            *self = Children::Full {
                bitmap,
                links: table,
            };
        }
    }

    fn shrink_to_bitmap(&mut self) {
        if let Children::Full { bitmap, links } = self {
            let compact: Vec<Link> = links.iter().flatten().copied().collect();
            let bitmap = *bitmap;
            *self = Children::Bitmap {
                bitmap,
                links: compact,
            };
        }
    }

    fn shrink_to_linear(&mut self) {
        if let Children::Bitmap { bitmap, links } = self {
            let mut bytes = Vec::with_capacity(links.len());
            let mut byte = bitmap::first_set_bit(bitmap);
            while let Some(b) = byte {
                bytes.push(b);
                byte = b.checked_add(1).and_then(|next| bitmap::next_set_bit(bitmap, next));
            }
            let links = mem::take(links);
            *self = Children::Linear { bytes, links };
        }
    }
}
