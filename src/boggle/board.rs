//! Letter grids and board-string parsing.

use std::fmt;
use std::str::FromStr;

use log::warn;

use super::types::error::{BoggleError, Result};
use super::types::models::{letter_char, BoardShape, BLOCKED, MAX_CELLS, NUM_LETTERS};

/// An M×N grid of letter indices (0-25) or [`BLOCKED`] cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    shape: BoardShape,
    cells: [u8; MAX_CELLS],
}

impl Board {
    /// An all-'a' board of the given shape.
    pub fn new(shape: BoardShape) -> Self {
        Self {
            shape,
            cells: [0; MAX_CELLS],
        }
    }

    /// Parses a board string: one lowercase letter per cell, row-major.
    ///
    /// '.' marks a blocked cell and is accepted only when `allow_blocked`
    /// is set. The whole string is validated before a board is produced, and
    /// each rejection is logged once at `warn` level.
    pub fn parse(shape: BoardShape, letters: &str, allow_blocked: bool) -> Result<Self> {
        let expected = shape.cells();
        let found = letters.chars().count();
        if found != expected {
            warn!(
                "Board strings must contain {} characters, got {} ('{}')",
                expected, found, letters
            );
            return Err(BoggleError::BoardLength { expected, found });
        }

        let mut board = Self::new(shape);
        for (position, c) in letters.chars().enumerate() {
            board.cells[position] = match c {
                'a'..='z' => c as u8 - b'a',
                '.' if allow_blocked => BLOCKED,
                '.' => {
                    warn!("Found blocked cell at position {} while scoring", position);
                    return Err(BoggleError::BlockedCellNotAllowed { position });
                }
                'A'..='Z' => {
                    warn!("Found uppercase letter '{}'", c);
                    return Err(BoggleError::UppercaseLetter { letter: c, position });
                }
                _ => {
                    warn!("Found unexpected letter: '{}'", c);
                    return Err(BoggleError::UnexpectedCharacter { found: c, position });
                }
            };
        }
        Ok(board)
    }

    pub fn shape(&self) -> BoardShape {
        self.shape
    }

    /// The letter at row `x`, column `y`.
    ///
    /// # Panics
    /// If `(x, y)` lies outside the board.
    pub fn cell(&self, x: usize, y: usize) -> u8 {
        self.cells()[self.shape.index(x, y)]
    }

    /// Overwrites the letter at row `x`, column `y`.
    ///
    /// `letter` must be 0-25 or [`BLOCKED`]; this is only checked in debug
    /// builds.
    ///
    /// # Panics
    /// If `(x, y)` lies outside the board.
    pub fn set_cell(&mut self, x: usize, y: usize, letter: u8) {
        debug_assert!((letter as usize) < NUM_LETTERS || letter == BLOCKED);
        let i = self.shape.index(x, y);
        self.cells[i] = letter;
    }

    /// All cells in linear index order.
    pub fn cells(&self) -> &[u8] {
        &self.cells[..self.shape.cells()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &c in self.cells() {
            let ch = if c == BLOCKED { '.' } else { letter_char(c) };
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

/// Parses a board whose shape is inferred from the string length.
/// Blocked cells are allowed.
impl FromStr for Board {
    type Err = BoggleError;

    fn from_str(s: &str) -> Result<Self> {
        let found = s.chars().count();
        let shape = BoardShape::from_cell_count(found).ok_or(BoggleError::BoardLength {
            expected: BoardShape::SUPPORTED[BoardShape::SUPPORTED.len() - 1].cells(),
            found,
        })?;
        Board::parse(shape, s, true)
    }
}
