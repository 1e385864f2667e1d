//! Turning raw corpus text into training tokens.
//!
//! Words are split on whitespace, stripped of surrounding punctuation and
//! lower-cased. The `include_corpus!` macro applies the same rules at compile
//! time.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;

/// Characters trimmed from both ends of every word.
pub const TRIM_CHARS: &[char] = &['=', '+', '\'', '|', '_', ',', '-', '!', ';', ':', '"', '?', '.'];

/// Normalize a single word, or `None` if nothing is left after trimming.
pub fn normalize(word: &str) -> Option<String> {
    let trimmed = word.trim_matches(TRIM_CHARS);
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Split `text` into training tokens.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().filter_map(normalize)
}

/// Read every line of `reader` and tokenize it.
pub fn read_tokens<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    for line in reader.lines() {
        tokens.extend(tokenize(&line?));
    }
    Ok(tokens)
}

/// Open a corpus file and tokenize it.
pub fn load_tokens<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(path)?;
    read_tokens(BufReader::new(file))
}
