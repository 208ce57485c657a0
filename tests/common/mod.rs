//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;

use boggle_solver::{bogglify_word, BoardShape, WORD_SCORES};

pub fn fixture_path(parts: &[&str]) -> PathBuf {
    let mut p = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    for part in parts {
        p.push(part);
    }
    p
}

/// True if cells `a` and `b` touch horizontally, vertically or diagonally.
pub fn adjacent(shape: BoardShape, a: usize, b: usize) -> bool {
    let h = shape.height() as i64;
    let (ax, ay) = (a as i64 / h, a as i64 % h);
    let (bx, by) = (b as i64 / h, b as i64 % h);
    a != b && (ax - bx).abs() <= 1 && (ay - by).abs() <= 1
}

/// Folded spelling of a cell path on `board`.
pub fn spell(board: &str, path: &[usize]) -> String {
    let letters = board.as_bytes();
    path.iter().map(|&i| letters[i] as char).collect()
}

/// Slow reference search: walks every simple path, pruning on a prefix set
/// built from the word list. Returns the distinct folded words found.
pub struct ReferenceSolver {
    words: HashSet<String>,
    prefixes: HashSet<String>,
}

impl ReferenceSolver {
    pub fn new(words: &[&str]) -> Self {
        let words: HashSet<String> = words.iter().filter_map(|w| bogglify_word(w)).collect();
        let prefixes = words
            .iter()
            .flat_map(|w| (1..=w.len()).map(move |n| w[..n].to_string()))
            .collect();
        Self { words, prefixes }
    }

    pub fn found_words(&self, shape: BoardShape, board: &str) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        let mut path = Vec::new();
        for start in 0..shape.cells() {
            self.walk(shape, board, start, &mut path, &mut found);
        }
        found
    }

    pub fn score(&self, shape: BoardShape, board: &str) -> u32 {
        self.found_words(shape, board)
            .iter()
            .map(|w| {
                let len = w.len() + w.matches('q').count();
                WORD_SCORES[len.min(WORD_SCORES.len() - 1)]
            })
            .sum()
    }

    fn walk(
        &self,
        shape: BoardShape,
        board: &str,
        cell: usize,
        path: &mut Vec<usize>,
        found: &mut BTreeSet<String>,
    ) {
        if board.as_bytes()[cell] == b'.' {
            return;
        }
        path.push(cell);
        let word = spell(board, path);
        if self.prefixes.contains(&word) {
            if self.words.contains(&word) {
                found.insert(word);
            }
            for next in 0..shape.cells() {
                if !path.contains(&next) && adjacent(shape, cell, next) {
                    self.walk(shape, board, next, path, found);
                }
            }
        }
        path.pop();
    }
}
