//! Boggle word rules and word-list reading.
//!
//! A Boggle word is at least three letters long, contains only `a-z`, and
//! every 'q' is immediately followed by 'u'. Because a single die face shows
//! "Qu", words are stored "folded": each "qu" becomes a lone 'q'.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{info, trace};

use super::types::error::Result;

/// Minimum length of a scoring word, before folding.
pub const MIN_WORD_LEN: usize = 3;

/// Checks the Boggle word rule on an unfolded word.
pub fn is_boggle_word(word: &str) -> bool {
    let bytes = word.as_bytes();
    if bytes.len() < MIN_WORD_LEN {
        return false;
    }
    bytes.iter().enumerate().all(|(i, &c)| {
        c.is_ascii_lowercase() && (c != b'q' || bytes.get(i + 1) == Some(&b'u'))
    })
}

/// Returns the folded form of `word` ("qu" -> "q"), or `None` if it is not a
/// Boggle word.
///
/// ```
/// use boggle_solver::bogglify_word;
/// assert_eq!(bogglify_word("quinquennia").as_deref(), Some("qinqennia"));
/// assert_eq!(bogglify_word("qi"), None);
/// ```
pub fn bogglify_word(word: &str) -> Option<String> {
    is_boggle_word(word).then(|| word.replace("qu", "q"))
}

/// Reads a newline-delimited word list, trimming whitespace and dropping
/// blank lines. No filtering is applied here.
pub fn read_word_list(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    info!("Reading word list: {}", path.display());
    let reader = BufReader::new(File::open(path)?);

    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            trace!("Skipping blank line");
            continue;
        }
        words.push(word.to_string());
    }
    Ok(words)
}
