//! Depth-first board search: scoring and word finding.
//!
//! A search walks every simple path of adjacent cells, descending the
//! dictionary one letter per cell and abandoning a path as soon as its
//! letters stop being a prefix of some word. Words reached by more than one
//! path are counted once per search using the dictionary's generation marks.

use std::collections::HashSet;

use log::debug;

use super::board::Board;
use super::neighbors::AdjacencyTable;
use super::types::dictionary::{Dictionary, Generation};
use super::types::error::{BoggleError, Result};
use super::types::models::{BoardShape, NodeId, BLOCKED, LETTER_Q, WORD_SCORES};

/// Value returned by the sentinel entry points when a board fails to load.
pub const LOAD_ERROR_SENTINEL: i32 = -1;

/// Scores and enumerates words on boards of one fixed shape.
///
/// The solver borrows its dictionary mutably for its whole lifetime because
/// searches write generation marks into it. Build one solver per dictionary
/// handle and reuse it across boards.
pub struct Boggler<'d, D: Dictionary> {
    dict: &'d mut D,
    board: Board,
    adjacency: &'static AdjacencyTable,
    scores: Box<[u32]>,
    used: u32,
    score: u32,
    generation: Generation,
    seq: Vec<usize>,
    found_words: HashSet<u64>,
}

impl<'d, D: Dictionary> Boggler<'d, D> {
    /// Creates a solver using the standard [`WORD_SCORES`] table.
    pub fn new(dict: &'d mut D, shape: BoardShape) -> Result<Self> {
        Self::with_score_table(dict, shape, &WORD_SCORES)
    }

    /// Creates a solver with a custom word-score table.
    ///
    /// # Errors
    /// [`BoggleError::ScoreTableTooShort`] if `scores` has no entry for some
    /// path length this board can produce (`0..=cells`).
    pub fn with_score_table(dict: &'d mut D, shape: BoardShape, scores: &[u32]) -> Result<Self> {
        if scores.len() < shape.cells() + 1 {
            return Err(BoggleError::ScoreTableTooShort {
                cells: shape.cells(),
                len: scores.len(),
            });
        }
        Ok(Self {
            dict,
            board: Board::new(shape),
            adjacency: AdjacencyTable::for_shape(shape),
            scores: scores.into(),
            used: 0,
            score: 0,
            generation: 0,
            seq: Vec::with_capacity(shape.cells()),
            found_words: HashSet::new(),
        })
    }

    pub fn shape(&self) -> BoardShape {
        self.board.shape()
    }

    pub fn num_cells(&self) -> usize {
        self.board.shape().cells()
    }

    /// The board used by the most recent search or `set_cell` call.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dictionary(&self) -> &D {
        &*self.dict
    }

    /// Letter at row `x`, column `y` of the current board.
    pub fn cell(&self, x: usize, y: usize) -> u8 {
        self.board.cell(x, y)
    }

    /// Sets a cell on the current board directly, bypassing string parsing.
    ///
    /// # Panics
    /// If `(x, y)` lies outside the board.
    pub fn set_cell(&mut self, x: usize, y: usize, letter: u8) {
        self.board.set_cell(x, y, letter);
    }

    /// Total points for every distinct word on the board `letters`.
    ///
    /// The board is parsed before anything else; on error neither the
    /// solver nor the dictionary is touched.
    pub fn score(&mut self, letters: &str) -> Result<u32> {
        self.board = Board::parse(self.shape(), letters, false)?;
        Ok(self.score_current())
    }

    /// Scores the current board, e.g. after [`set_cell`](Self::set_cell).
    pub fn score_current(&mut self) -> u32 {
        self.generation = self.dict.reset_marks();
        self.used = 0;
        self.score = 0;

        let root = self.dict.root();
        for i in 0..self.num_cells() {
            if let Some(node) = self.dict.descend(root, self.board.cells()[i]) {
                self.score_dfs(i, node, 0);
            }
        }
        debug!("Scored board {}: {}", self.board, self.score);
        self.score
    }

    fn score_dfs(&mut self, i: usize, node: NodeId, len: usize) {
        let letter = self.board.cells()[i];
        self.used ^= 1 << i;
        let len = len + if letter == LETTER_Q { 2 } else { 1 };
        if self.dict.is_word(node) && self.dict.read_mark(node) != self.generation {
            self.dict.mark(node, self.generation);
            self.score += self.word_score(len);
        }

        let adjacency = self.adjacency;
        for &n in adjacency.neighbors(i) {
            let n = n as usize;
            if self.used & (1 << n) == 0 {
                if let Some(child) = self.dict.descend(node, self.board.cells()[n]) {
                    self.score_dfs(n, child, len);
                }
            }
        }
        self.used ^= 1 << i;
    }

    /// Points for a path of `len` cells; lengths past the table (only
    /// reachable through 'q' doubling) score as the longest entry.
    fn word_score(&self, len: usize) -> u32 {
        let last = self.scores.len() - 1;
        self.scores[len.min(last)]
    }

    /// Lists the cell path of every word found on the board `letters`.
    ///
    /// Without `multiboggle` each word is reported once, by the first path
    /// that reaches it. With `multiboggle` a word is reported once per
    /// distinct set of cells that spells it. Cells marked '.' are never
    /// entered.
    pub fn find_words(&mut self, letters: &str, multiboggle: bool) -> Result<Vec<Vec<usize>>> {
        self.board = Board::parse(self.shape(), letters, true)?;

        self.found_words.clear();
        self.seq.clear();
        self.generation = self.dict.reset_marks();
        self.used = 0;

        let mut out = Vec::new();
        let root = self.dict.root();
        for i in 0..self.num_cells() {
            let letter = self.board.cells()[i];
            if letter == BLOCKED {
                continue;
            }
            if let Some(node) = self.dict.descend(root, letter) {
                self.find_words_dfs(i, node, multiboggle, &mut out);
            }
        }
        debug!("Found {} words on board {}", out.len(), self.board);
        Ok(out)
    }

    fn find_words_dfs(
        &mut self,
        i: usize,
        node: NodeId,
        multiboggle: bool,
        out: &mut Vec<Vec<usize>>,
    ) {
        self.used ^= 1 << i;
        self.seq.push(i);
        if self.dict.is_word(node) {
            let should_count = if multiboggle {
                // Same word over the same cells in another order is a repeat.
                let used = self.used;
                self.dict.word_id(node).is_some_and(|word_id| {
                    let key = (u64::from(word_id) << 32) | u64::from(used);
                    self.found_words.insert(key)
                })
            } else {
                self.dict.read_mark(node) != self.generation
            };
            if should_count {
                self.dict.mark(node, self.generation);
                out.push(self.seq.clone());
            }
        }

        let adjacency = self.adjacency;
        for &n in adjacency.neighbors(i) {
            let n = n as usize;
            if self.used & (1 << n) == 0 {
                let letter = self.board.cells()[n];
                if letter == BLOCKED {
                    continue;
                }
                if let Some(child) = self.dict.descend(node, letter) {
                    self.find_words_dfs(n, child, multiboggle, out);
                }
            }
        }

        self.used ^= 1 << i;
        self.seq.pop();
    }

    /// [`score`](Self::score) for hosts that expect `-1` on a bad board.
    /// The rejection itself is logged by [`Board::parse`].
    pub fn score_or_sentinel(&mut self, letters: &str) -> i32 {
        match self.score(letters) {
            Ok(score) => score as i32,
            Err(_) => LOAD_ERROR_SENTINEL,
        }
    }

    /// [`find_words`](Self::find_words) for hosts that expect `[[-1]]` on a
    /// bad board.
    pub fn find_words_or_sentinel(&mut self, letters: &str, multiboggle: bool) -> Vec<Vec<i32>> {
        match self.find_words(letters, multiboggle) {
            Ok(paths) => paths
                .into_iter()
                .map(|path| path.into_iter().map(|cell| cell as i32).collect())
                .collect(),
            Err(_) => vec![vec![LOAD_ERROR_SENTINEL]],
        }
    }
}
