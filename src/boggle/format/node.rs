//! Fixed-size node records of the compact dictionary format.
//!
//! Every record is 12 bytes, little-endian:
//!
//! ```text
//! ┌──────────────────────────────┬──────────────────┬──────────────────┐
//! │ u32 child mask | is_word<<31 │ u32 first child  │ u32 word id      │
//! └──────────────────────────────┴──────────────────┴──────────────────┘
//! ```
//!
//! Children of a node are stored contiguously, in increasing letter order,
//! starting at `first child`. The child for letter `l` is found by counting
//! the mask bits below `l` and adding that rank to `first child`.

use byteorder::{ByteOrder, LittleEndian};

use crate::boggle::types::models::NUM_LETTERS;

/// Size in bytes of one encoded record.
pub const RECORD_SIZE: usize = 12;

/// Bit set in the mask word when the node ends a word.
const WORD_FLAG: u32 = 1 << 31;

/// Mask covering the 26 letter bits.
const LETTER_BITS: u32 = (1 << NUM_LETTERS) - 1;

/// Stored in the word-id slot of nodes that are not words.
pub const NO_WORD_ID: u32 = u32::MAX;

/// One decoded record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompactNode {
    pub child_mask: u32,
    pub first_child: u32,
    pub is_word: bool,
    pub word_id: u32,
}

impl CompactNode {
    /// Decodes the record at the start of `bytes` (at least [`RECORD_SIZE`] long).
    pub fn decode(bytes: &[u8]) -> Self {
        let flags = LittleEndian::read_u32(&bytes[0..4]);
        Self {
            child_mask: flags & LETTER_BITS,
            first_child: LittleEndian::read_u32(&bytes[4..8]),
            is_word: flags & WORD_FLAG != 0,
            word_id: LittleEndian::read_u32(&bytes[8..12]),
        }
    }

    /// Appends this record to `out`.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        let mut flags = self.child_mask & LETTER_BITS;
        if self.is_word {
            flags |= WORD_FLAG;
        }
        let mut buf = [0u8; RECORD_SIZE];
        LittleEndian::write_u32(&mut buf[0..4], flags);
        LittleEndian::write_u32(&mut buf[4..8], self.first_child);
        LittleEndian::write_u32(&mut buf[8..12], self.word_id);
        out.extend_from_slice(&buf);
    }

    pub fn num_children(&self) -> u32 {
        self.child_mask.count_ones()
    }

    /// Index of the child for `letter`, or `None` if absent.
    #[inline]
    pub fn child_index(&self, letter: u8) -> Option<u32> {
        if letter as usize >= NUM_LETTERS {
            return None;
        }
        let bit = 1u32 << letter;
        if self.child_mask & bit == 0 {
            return None;
        }
        let rank = (self.child_mask & (bit - 1)).count_ones();
        Some(self.first_child + rank)
    }
}
