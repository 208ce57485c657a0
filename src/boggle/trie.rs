//! Mutable prefix tree used to build dictionaries.
//!
//! Nodes live in a single arena and refer to their children by index, so a
//! `WordSet` is one allocation that can be cloned, dropped, or encoded into
//! the compact format without any pointer chasing.

use std::mem;
use std::path::Path;

use log::{debug, info};

use super::types::dictionary::{Dictionary, Generation};
use super::types::error::Result;
use super::types::models::{letter_char, letter_index, NodeId, NUM_LETTERS};
use super::utils::format_bytes;
use super::words::{bogglify_word, read_word_list};

/// Child slot value meaning "no child". The root is never anyone's child.
const NO_CHILD: u32 = 0;

#[derive(Debug, Clone)]
struct TrieNode {
    children: [u32; NUM_LETTERS],
    is_word: bool,
    word_id: u32,
    mark: Generation,
}

impl TrieNode {
    fn new() -> Self {
        Self {
            children: [NO_CHILD; NUM_LETTERS],
            is_word: false,
            word_id: 0,
            mark: 0,
        }
    }
}

/// A mutable trie of folded Boggle words.
///
/// Word ids are dense and follow insertion order: the first distinct word
/// added gets id 0. Re-adding an existing word keeps its original id.
#[derive(Debug, Clone)]
pub struct WordSet {
    nodes: Vec<TrieNode>,
    num_words: usize,
    generation: Generation,
}

impl Default for WordSet {
    fn default() -> Self {
        Self::new()
    }
}

impl WordSet {
    /// Creates an empty set holding only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new()],
            num_words: 0,
            generation: 0,
        }
    }

    /// Builds a set from candidate words, keeping only Boggle words and
    /// folding "qu" to "q". Everything else is skipped silently.
    pub fn create_from_wordlist<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        let mut skipped = 0usize;
        for word in words {
            match bogglify_word(word.as_ref()) {
                Some(folded) => {
                    set.add_word(&folded);
                }
                None => skipped += 1,
            }
        }
        debug!("Skipped {} non-Boggle words", skipped);

        let bytes_used = set.memory_usage();
        info!(
            "Loaded {} words into trie with {} nodes using {} ({} bytes per node)",
            set.num_words,
            set.nodes.len(),
            format_bytes(bytes_used),
            bytes_used / set.nodes.len()
        );
        set
    }

    /// Reads a newline-delimited word list and builds a set from it.
    pub fn create_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let words = read_word_list(path)?;
        Ok(Self::create_from_wordlist(words))
    }

    /// Inserts an already-folded word, returning its terminal node.
    ///
    /// Returns `None` (and inserts nothing) if the word contains anything
    /// other than `a-z`. No length or "qu" rule is applied here; callers are
    /// expected to pre-filter with [`bogglify_word`].
    pub fn add_word(&mut self, word: &str) -> Option<NodeId> {
        let letters: Vec<u8> = word.bytes().map(letter_index).collect::<Option<_>>()?;

        let mut node = 0usize;
        for letter in letters {
            let child = self.nodes[node].children[letter as usize];
            node = if child == NO_CHILD {
                let index = self.nodes.len();
                self.nodes.push(TrieNode::new());
                self.nodes[node].children[letter as usize] = index as u32;
                index
            } else {
                child as usize
            };
        }

        let terminal = &mut self.nodes[node];
        if !terminal.is_word {
            terminal.is_word = true;
            terminal.word_id = self.num_words as u32;
            self.num_words += 1;
        }
        Some(NodeId(node as u32))
    }

    /// Returns the node for `word` if it is a complete word.
    pub fn find_word(&self, word: &str) -> Option<NodeId> {
        self.lookup(word).filter(|&node| self.is_word(node))
    }

    /// Returns the node holding the word with the given id.
    pub fn find_word_id(&self, word_id: u32) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.is_word && n.word_id == word_id)
            .map(|i| NodeId(i as u32))
    }

    /// Recovers the letters on the path from `base` down to `target`.
    ///
    /// Searches exhaustively, trying letters in alphabetical order; the first
    /// path found wins. Returns `None` if `target` is not below `base`.
    pub fn reverse_lookup(&self, base: NodeId, target: NodeId) -> Option<String> {
        let mut out = String::new();
        self.reverse_lookup_into(base, target, &mut out).then_some(out)
    }

    /// The folded word spelled by `node`, read back from the root.
    pub fn word(&self, node: NodeId) -> Option<String> {
        self.reverse_lookup(NodeId::ROOT, node)
    }

    fn reverse_lookup_into(&self, base: NodeId, target: NodeId, out: &mut String) -> bool {
        if base == target {
            return true;
        }
        for (letter, child) in self.children(base) {
            out.push(letter_char(letter));
            if self.reverse_lookup_into(child, target, out) {
                return true;
            }
            out.pop();
        }
        false
    }

    /// Present children of `node`, in increasing letter order.
    pub fn children(&self, node: NodeId) -> impl Iterator<Item = (u8, NodeId)> + '_ {
        self.nodes[node.index()]
            .children
            .iter()
            .enumerate()
            .filter(|(_, &child)| child != NO_CHILD)
            .map(|(letter, &child)| (letter as u8, NodeId(child)))
    }

    /// Bitmask of present children of `node`, bit `i` for letter `i`.
    pub fn child_mask(&self, node: NodeId) -> u32 {
        self.children(node)
            .fold(0u32, |mask, (letter, _)| mask | (1 << letter))
    }

    fn count_words(&self, node: NodeId) -> usize {
        let own = usize::from(self.nodes[node.index()].is_word);
        own + self
            .children(node)
            .map(|(_, child)| self.count_words(child))
            .sum::<usize>()
    }

    /// Approximate heap footprint of the node arena.
    pub fn memory_usage(&self) -> usize {
        mem::size_of::<Self>() + self.nodes.capacity() * mem::size_of::<TrieNode>()
    }
}

impl Dictionary for WordSet {
    fn descend(&self, node: NodeId, letter: u8) -> Option<NodeId> {
        let child = *self.nodes[node.index()].children.get(letter as usize)?;
        (child != NO_CHILD).then_some(NodeId(child))
    }

    fn is_word(&self, node: NodeId) -> bool {
        self.nodes[node.index()].is_word
    }

    fn word_id(&self, node: NodeId) -> Option<u32> {
        let n = &self.nodes[node.index()];
        n.is_word.then_some(n.word_id)
    }

    fn mark(&mut self, node: NodeId, value: Generation) {
        self.nodes[node.index()].mark = value;
    }

    fn read_mark(&self, node: NodeId) -> Generation {
        self.nodes[node.index()].mark
    }

    fn reset_marks(&mut self) -> Generation {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: old marks could now collide with new generations.
            for node in &mut self.nodes {
                node.mark = 0;
            }
            self.generation = 1;
        }
        self.generation
    }

    fn size(&self) -> usize {
        self.count_words(NodeId::ROOT)
    }

    fn num_nodes(&self) -> usize {
        self.nodes.len()
    }
}
