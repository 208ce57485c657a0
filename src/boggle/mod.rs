//! Core Boggle module: dictionaries, boards, and the solver.

pub mod board;
pub mod compact;
pub mod format;
pub mod neighbors;
pub mod solver;
pub mod trie;
pub mod types;
pub mod words;
mod utils;

pub use board::Board;
pub use compact::CompactWordSet;
pub use neighbors::AdjacencyTable;
pub use solver::{Boggler, LOAD_ERROR_SENTINEL};
pub use trie::WordSet;
pub use types::dictionary::{Dictionary, Generation};
pub use types::error::{BoggleError, ErrorKind, Result};
pub use types::models::{BoardShape, NodeId, BLOCKED, LETTER_Q, WORD_SCORES};
pub use words::{bogglify_word, is_boggle_word};
