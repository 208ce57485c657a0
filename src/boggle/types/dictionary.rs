//! The query capability shared by both dictionary backends.

use super::models::{letter_index, NodeId};

/// A generation ("run") number used to mark words found during one search.
pub type Generation = u32;

/// A prefix/word membership oracle over folded Boggle words.
///
/// Implemented by [`WordSet`](crate::WordSet) (mutable trie) and
/// [`CompactWordSet`](crate::CompactWordSet) (read-only bit-packed view).
/// The solver only ever talks to a dictionary through this trait.
///
/// Marks are the only state that changes after construction. A dictionary
/// keeps a monotonically increasing generation counter; [`reset_marks`]
/// advances it so that every mark written earlier compares unequal to the
/// new generation, without touching the marks themselves.
///
/// [`reset_marks`]: Dictionary::reset_marks
pub trait Dictionary {
    /// Follows the edge for `letter` (0-25) out of `node`.
    ///
    /// Returns `None` if there is no such edge or `letter` is not a letter
    /// at all (e.g. [`BLOCKED`](crate::boggle::types::models::BLOCKED)).
    fn descend(&self, node: NodeId, letter: u8) -> Option<NodeId>;

    /// True if `node` spells a complete word.
    fn is_word(&self, node: NodeId) -> bool;

    /// The dense identifier assigned to the word at `node`, if it is one.
    fn word_id(&self, node: NodeId) -> Option<u32>;

    /// Records `value` as the last generation in which `node` was seen.
    fn mark(&mut self, node: NodeId, value: Generation);

    /// The last value passed to [`mark`](Dictionary::mark) for `node`, or 0.
    fn read_mark(&self, node: NodeId) -> Generation;

    /// Starts a new generation and returns it. O(1) amortized.
    fn reset_marks(&mut self) -> Generation;

    /// Number of complete words.
    fn size(&self) -> usize;

    /// Number of nodes, including the root.
    fn num_nodes(&self) -> usize;

    fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    fn starts_word(&self, node: NodeId, letter: u8) -> bool {
        self.descend(node, letter).is_some()
    }

    /// Walks `prefix` (lowercase a-z, already folded) from the root.
    fn lookup(&self, prefix: &str) -> Option<NodeId> {
        prefix.bytes().try_fold(self.root(), |node, c| {
            letter_index(c).and_then(|letter| self.descend(node, letter))
        })
    }

    /// True if some word starts with `prefix`. The empty prefix always exists.
    fn has_prefix(&self, prefix: &str) -> bool {
        self.lookup(prefix).is_some()
    }

    /// True if `word` is a complete word in this dictionary.
    fn contains_word(&self, word: &str) -> bool {
        self.lookup(word).is_some_and(|node| self.is_word(node))
    }
}
