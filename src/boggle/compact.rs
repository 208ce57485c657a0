//! Read-only dictionary backed by a flat array of compact node records.
//!
//! The records can come from a memory-mapped file or from an owned buffer.
//! Either way the bytes are never written; marks live in a side table that
//! belongs to each handle, so one buffer can back several independent
//! searches (see [`CompactWordSet::share`]).

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use log::{debug, info};
use memmap2::Mmap;

use super::format::encode::encode_word_set;
use super::format::node::{CompactNode, NO_WORD_ID, RECORD_SIZE};
use super::trie::WordSet;
use super::types::dictionary::{Dictionary, Generation};
use super::types::error::{BoggleError, Result};
use super::types::models::NodeId;
use super::utils::format_bytes;

/// Backing storage for the record array.
#[derive(Debug)]
enum NodeBuffer {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl NodeBuffer {
    fn as_bytes(&self) -> &[u8] {
        match self {
            NodeBuffer::Mapped(mmap) => mmap.as_ref(),
            NodeBuffer::Owned(bytes) => bytes.as_slice(),
        }
    }
}

/// A compact, immutable encoding of a [`WordSet`].
#[derive(Debug)]
pub struct CompactWordSet {
    buffer: Arc<NodeBuffer>,
    num_nodes: usize,
    marks: HashMap<u32, Generation>,
    generation: Generation,
}

impl CompactWordSet {
    /// Memory-maps a compact dictionary file.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be opened or mapped
    /// - Its length is not a multiple of the record size, or is zero
    /// - A node's child range points outside the record array
    /// - A word node carries no word id
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening compact dictionary: {}", path.display());
        let file = File::open(path)?;
        check_length(file.metadata()?.len())?;

        // SAFETY: the mapping is read-only and the file is expected not to be
        // modified while mapped; every access is bounds-checked against the
        // validated record count.
        let mmap = unsafe { Mmap::map(&file)? };
        let num_nodes = validate(&mmap)?;
        info!(
            "Loaded compact dictionary: {} nodes ({})",
            num_nodes,
            format_bytes(mmap.len())
        );
        Ok(Self::with_buffer(NodeBuffer::Mapped(mmap), num_nodes))
    }

    /// Loads a compact dictionary from an in-memory byte buffer.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        check_length(bytes.len() as u64)?;
        let num_nodes = validate(&bytes)?;
        debug!("Loaded compact dictionary from {} bytes", bytes.len());
        Ok(Self::with_buffer(NodeBuffer::Owned(bytes), num_nodes))
    }

    /// Encodes `words` and wraps the result, skipping file I/O.
    pub fn from_word_set(words: &WordSet) -> Self {
        let bytes = encode_word_set(words);
        let num_nodes = bytes.len() / RECORD_SIZE;
        Self::with_buffer(NodeBuffer::Owned(bytes), num_nodes)
    }

    fn with_buffer(buffer: NodeBuffer, num_nodes: usize) -> Self {
        Self {
            buffer: Arc::new(buffer),
            num_nodes,
            marks: HashMap::new(),
            generation: 0,
        }
    }

    /// A second handle over the same records with its own, empty mark table.
    ///
    /// Handles can be moved to other threads; each one runs its own searches.
    pub fn share(&self) -> Self {
        Self {
            buffer: Arc::clone(&self.buffer),
            num_nodes: self.num_nodes,
            marks: HashMap::new(),
            generation: 0,
        }
    }

    /// The raw record bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// Decodes the record for `node`.
    pub fn node(&self, node: NodeId) -> CompactNode {
        let start = node.index() * RECORD_SIZE;
        CompactNode::decode(&self.as_bytes()[start..start + RECORD_SIZE])
    }
}

fn check_length(size: u64) -> Result<()> {
    if size % RECORD_SIZE as u64 != 0 {
        return Err(BoggleError::DictionarySize {
            size,
            record_size: RECORD_SIZE,
        });
    }
    if size == 0 {
        return Err(BoggleError::EmptyDictionary);
    }
    Ok(())
}

/// Checks every child range and word id, and returns the record count.
fn validate(bytes: &[u8]) -> Result<usize> {
    let num_nodes = bytes.len() / RECORD_SIZE;
    for (index, record) in bytes.chunks_exact(RECORD_SIZE).enumerate() {
        let node = CompactNode::decode(record);
        if node.is_word && node.word_id == NO_WORD_ID {
            return Err(BoggleError::InvalidFormat(format!(
                "Node {} is a word but has no word id",
                index
            )));
        }
        let end = node.first_child as u64 + node.num_children() as u64;
        if end > num_nodes as u64 {
            return Err(BoggleError::InvalidFormat(format!(
                "Node {} has children up to {} but only {} nodes exist",
                index, end, num_nodes
            )));
        }
    }
    Ok(num_nodes)
}

impl Dictionary for CompactWordSet {
    #[inline]
    fn descend(&self, node: NodeId, letter: u8) -> Option<NodeId> {
        self.node(node).child_index(letter).map(NodeId)
    }

    fn is_word(&self, node: NodeId) -> bool {
        self.node(node).is_word
    }

    fn word_id(&self, node: NodeId) -> Option<u32> {
        let record = self.node(node);
        record.is_word.then_some(record.word_id)
    }

    fn mark(&mut self, node: NodeId, value: Generation) {
        self.marks.insert(node.0, value);
    }

    fn read_mark(&self, node: NodeId) -> Generation {
        self.marks.get(&node.0).copied().unwrap_or(0)
    }

    fn reset_marks(&mut self) -> Generation {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            self.marks.clear();
            self.generation = 1;
        }
        self.generation
    }

    fn size(&self) -> usize {
        self.as_bytes()
            .chunks_exact(RECORD_SIZE)
            .filter(|record| CompactNode::decode(record).is_word)
            .count()
    }

    fn num_nodes(&self) -> usize {
        self.num_nodes
    }
}
