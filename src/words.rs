//! Word-file loading and tokenization
//!
//! The input format is one word per line. Blank lines carry no word and
//! are dropped; everything else on a line, whitespace included, is part
//! of the word and therefore part of what the root commits to.

use crate::Result;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load the words of a newline-separated file, in file order
pub fn load(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let words = split(&text);
    debug!(path = %path.display(), words = words.len(), "loaded word file");
    Ok(words)
}

/// Split text into words, one per line, dropping blank lines
pub fn split(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
