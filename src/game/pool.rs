//! The fixed set of words a session draws from

use super::GameError;
use crate::core::Word;
use rustc_hash::FxHashSet;

/// Ordered, deduplicated, immutable collection of playable words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<Word>,
}

impl WordPool {
    /// Build a pool, dropping duplicates while keeping first-seen order
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyPool` if no words are supplied.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, GameError> {
        let mut seen = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|w| seen.insert(w.text().to_string()))
            .collect();

        if words.is_empty() {
            return Err(GameError::EmptyPool);
        }

        Ok(Self { words })
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed pool; provided for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.words.iter().any(|w| w.text() == text)
    }
}
