//! Custom error types for the boggle-solver crate.

use thiserror::Error;

/// Broad classification of a [`BoggleError`].
///
/// Load errors are recoverable and reported per call; configuration errors
/// are raised while constructing a solver and mean the setup itself is wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Load,
    Configuration,
}

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum BoggleError {
    /// An error originating from I/O operations (missing or unreadable file).
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The board string does not have exactly one character per cell.
    #[error("Board strings must contain {expected} characters, got {found}")]
    BoardLength { expected: usize, found: usize },

    /// An uppercase letter was found; board strings are lowercase only.
    #[error("Found uppercase letter '{letter}' at position {position}")]
    UppercaseLetter { letter: char, position: usize },

    /// A character other than a-z (or '.') was found in the board string.
    #[error("Found unexpected letter: {found:?} at position {position}")]
    UnexpectedCharacter { found: char, position: usize },

    /// A blocked cell ('.') was used where only letters are accepted.
    #[error("Blocked cell at position {position} is only supported when finding words")]
    BlockedCellNotAllowed { position: usize },

    /// The compact dictionary byte length is not a whole number of records.
    #[error("Invalid binary dictionary size: {size} bytes (not a multiple of {record_size})")]
    DictionarySize { size: u64, record_size: usize },

    /// The compact dictionary contains no records at all.
    #[error("Empty binary dictionary")]
    EmptyDictionary,

    /// The compact dictionary is structurally invalid.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// The requested board shape has no adjacency table.
    #[error("Unsupported board shape: {width}x{height}")]
    UnsupportedShape { width: usize, height: usize },

    /// The word-score table cannot cover every path length on this board.
    #[error("Word score table has {len} entries but a {cells}-cell board needs one per path length 0..={cells}")]
    ScoreTableTooShort { cells: usize, len: usize },
}

impl BoggleError {
    /// Classifies this error as a load error or a configuration error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BoggleError::UnsupportedShape { .. } | BoggleError::ScoreTableTooShort { .. } => {
                ErrorKind::Configuration
            }
            _ => ErrorKind::Load,
        }
    }

    pub fn is_load_error(&self) -> bool {
        self.kind() == ErrorKind::Load
    }
}

/// A convenience `Result` type alias using the crate's `BoggleError` type.
pub type Result<T> = std::result::Result<T, BoggleError>;
