//! # boggle-solver
//!
//! Scores and enumerates words on M×N Boggle boards (2×2 up to 5×5).
//!
//! Two dictionary backends share one query trait, [`Dictionary`]:
//! - [`WordSet`]: a mutable trie, built from a word list
//! - [`CompactWordSet`]: a read-only, bit-packed record array that can be
//!   memory-mapped and shared between searches
//!
//! [`Boggler`] runs the depth-first search over a board using either one.
//!
//! ```
//! use boggle_solver::{BoardShape, Boggler, WordSet};
//!
//! let mut words = WordSet::create_from_wordlist(["cat", "cats", "tsar"]);
//! let mut boggler = Boggler::new(&mut words, BoardShape::new(2, 2)?)?;
//! assert_eq!(boggler.score("ctsa")?, 2);
//! # Ok::<(), boggle_solver::BoggleError>(())
//! ```
pub mod boggle;

// Re-export the main types for convenience
pub use boggle::{
    bogglify_word, is_boggle_word, AdjacencyTable, Board, BoardShape, BoggleError, Boggler,
    CompactWordSet, Dictionary, ErrorKind, Generation, NodeId, Result, WordSet, BLOCKED,
    LOAD_ERROR_SENTINEL, WORD_SCORES,
};
