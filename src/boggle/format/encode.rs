//! Serializes a [`WordSet`] into the compact record format.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use log::info;

use super::node::{CompactNode, NO_WORD_ID, RECORD_SIZE};
use crate::boggle::trie::WordSet;
use crate::boggle::types::dictionary::Dictionary;
use crate::boggle::types::error::Result;
use crate::boggle::types::models::NodeId;
use crate::boggle::utils::format_bytes;

/// Encodes `words` as a flat array of records, root first.
///
/// Nodes are laid out breadth-first. Processing nodes in that order and
/// handing each one the next free run of slots for its children gives every
/// node a contiguous, letter-ordered child range, which is exactly where the
/// breadth-first walk places those children.
pub fn encode_word_set(words: &WordSet) -> Vec<u8> {
    let mut order = Vec::with_capacity(words.num_nodes());
    let mut queue = VecDeque::from([NodeId::ROOT]);
    while let Some(node) = queue.pop_front() {
        order.push(node);
        queue.extend(words.children(node).map(|(_, child)| child));
    }

    let mut out = Vec::with_capacity(order.len() * RECORD_SIZE);
    let mut next_free = 1u32;
    for &node in &order {
        let child_mask = words.child_mask(node);
        let record = CompactNode {
            child_mask,
            first_child: if child_mask == 0 { 0 } else { next_free },
            is_word: words.is_word(node),
            word_id: words.word_id(node).unwrap_or(NO_WORD_ID),
        };
        next_free += record.num_children();
        record.encode_into(&mut out);
    }
    out
}

/// Encodes `words` and writes the result to `path`.
pub fn write_word_set(words: &WordSet, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode_word_set(words);
    fs::write(path, &bytes)?;
    info!(
        "Wrote {} nodes to {} ({})",
        bytes.len() / RECORD_SIZE,
        path.display(),
        format_bytes(bytes.len())
    );
    Ok(())
}
