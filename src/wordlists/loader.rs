//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded constant.

use crate::core::Word;
use crate::game::{GameError, WordPool};
use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

/// Load words from a file, one per line
///
/// Blank lines are ignored. Lines that do not form a playable word are skipped with a
/// warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use unscramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content, &path.display().to_string()))
}

/// Parse newline-separated words, skipping blanks and unplayable entries
#[must_use]
pub fn parse_words(content: &str, source: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(index, line)| match Word::new(line) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!("{source}:{}: skipping word: {e}", index + 1);
                None
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use unscramble::wordlists::loader::words_from_slice;
/// use unscramble::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Build the built-in word pool
///
/// # Errors
///
/// Returns `GameError::EmptyPool` if the embedded list is empty.
pub fn builtin_pool() -> Result<WordPool, GameError> {
    WordPool::new(words_from_slice(super::WORDS))
}
