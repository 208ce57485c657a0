//! Core data structures shared by the dictionaries and the solver.
//!
//! This module defines the fundamental types used throughout the library:
//! - Letter encoding (a-z as 0-25, plus the blocked-cell sentinel)
//! - Dictionary node handles
//! - Supported board shapes and the word-score table

use std::fmt;

use super::error::{BoggleError, Result};

/// Number of letters in the alphabet; every node has at most this many children.
pub const NUM_LETTERS: usize = 26;

/// Letter index of 'q'. A board cell holding it stands for the digraph "qu".
pub const LETTER_Q: u8 = b'q' - b'a';

/// Cell value for a blocked cell ('.' in a board string).
///
/// Never a valid letter, so descending a dictionary with it always fails.
pub const BLOCKED: u8 = u8::MAX;

/// Largest supported board (5x5).
pub const MAX_CELLS: usize = 25;

/// Points awarded for a word by path length (cells visited, 'q' counting twice).
///
/// Index 0..=2 score nothing; everything from 8 letters up scores 11.
pub const WORD_SCORES: [u32; 26] = [
    0, 0, 0, 1, 1, 2, 3, 5, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11,
];

/// Converts a lowercase ASCII letter to its letter index.
pub fn letter_index(c: u8) -> Option<u8> {
    c.is_ascii_lowercase().then(|| c - b'a')
}

/// Converts a letter index back to its lowercase ASCII letter.
pub fn letter_char(letter: u8) -> char {
    (b'a' + letter) as char
}

/// Handle to a node in either dictionary backend.
///
/// For [`WordSet`](crate::WordSet) this is an arena index; for
/// [`CompactWordSet`](crate::CompactWordSet) it is a record index.
/// Index 0 is always the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Board dimensions: `width` rows of `height` cells, row-major.
///
/// Cell `(x, y)` has linear index `x * height + y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardShape {
    width: usize,
    height: usize,
}

impl BoardShape {
    /// Every shape the solver has an adjacency table for.
    pub const SUPPORTED: [BoardShape; 7] = [
        BoardShape { width: 2, height: 2 },
        BoardShape { width: 2, height: 3 },
        BoardShape { width: 3, height: 3 },
        BoardShape { width: 3, height: 4 },
        BoardShape { width: 4, height: 4 },
        BoardShape { width: 4, height: 5 },
        BoardShape { width: 5, height: 5 },
    ];

    /// Validates `width x height` against the supported shapes.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let shape = BoardShape { width, height };
        if Self::SUPPORTED.contains(&shape) {
            Ok(shape)
        } else {
            Err(BoggleError::UnsupportedShape { width, height })
        }
    }

    /// Parses the two-digit form used on the command line (`33` is 3x3).
    pub fn from_size_code(code: u32) -> Result<Self> {
        Self::new((code / 10) as usize, (code % 10) as usize)
    }

    /// Finds the shape whose cell count matches a board string's length.
    pub fn from_cell_count(cells: usize) -> Option<Self> {
        Self::SUPPORTED.iter().copied().find(|s| s.cells() == cells)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> usize {
        self.width * self.height
    }

    /// Linear index of cell `(x, y)`.
    ///
    /// # Panics
    /// If `(x, y)` lies outside the board.
    pub fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({}, {}) is outside a {} board",
            x,
            y,
            self
        );
        x * self.height + y
    }

    /// Position of this shape in [`BoardShape::SUPPORTED`].
    pub(crate) fn slot(&self) -> usize {
        Self::SUPPORTED
            .iter()
            .position(|s| s == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for BoardShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
