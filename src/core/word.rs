//! Unscramble word representation
//!
//! A Word is a validated answer for one round. Its case is preserved: scrambles are compared
//! case-sensitively, guesses case-insensitively.

use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// A word that can appear as the answer of a round
///
/// Guaranteed to have at least two distinct characters, so a scramble different from the
/// word itself always exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for words that cannot be played
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word '{0}' has only one arrangement of its letters")]
    SingleArrangement(String),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed; case is kept.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed text is empty
    /// - Every character is the same (e.g. "a", "zzz"), leaving nothing to unscramble
    ///
    /// # Examples
    /// ```
    /// use unscramble::core::Word;
    ///
    /// let word = Word::new("  animal ").unwrap();
    /// assert_eq!(word.text(), "animal");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("ooo").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_string();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let distinct: FxHashSet<char> = text.chars().collect();
        if distinct.len() < 2 {
            return Err(WordError::SingleArrangement(text));
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters (not bytes) in the word
    #[inline]
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check whether a player's guess spells this word, ignoring case
    ///
    /// Compared character by character, so context-dependent lowercasing (a final Greek
    /// sigma, for one) cannot make equal words differ.
    #[must_use]
    pub fn matches_guess(&self, guess: &str) -> bool {
        guess.chars().count() == self.char_len()
            && guess
                .chars()
                .zip(self.text.chars())
                .all(|(a, b)| chars_eq_ignore_case(a, b))
    }

    /// Check whether `candidate` is a valid scramble of this word
    ///
    /// A valid scramble uses exactly the same characters and differs from the word under
    /// case-sensitive comparison.
    #[must_use]
    pub fn is_scrambled_by(&self, candidate: &str) -> bool {
        if candidate == self.text {
            return false;
        }

        let mut ours: Vec<char> = self.text.chars().collect();
        let mut theirs: Vec<char> = candidate.chars().collect();
        ours.sort_unstable();
        theirs.sort_unstable();
        ours == theirs
    }
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_uppercase().eq(b.to_uppercase()) || a.to_lowercase().eq(b.to_lowercase())
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("animal").unwrap();
        assert_eq!(word.text(), "animal");
        assert_eq!(word.char_len(), 6);
    }

    #[test]
    fn word_creation_trims_but_keeps_case() {
        let word = Word::new("  CaT\n").unwrap();
        assert_eq!(word.text(), "CaT");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_single_arrangement() {
        assert_eq!(
            Word::new("a"),
            Err(WordError::SingleArrangement("a".to_string()))
        );
        assert!(matches!(
            Word::new("zzz"),
            Err(WordError::SingleArrangement(_))
        ));
    }

    #[test]
    fn word_with_repeated_letters_is_valid() {
        assert!(Word::new("yoyo").is_ok());
        assert!(Word::new("x-ray").is_ok());
    }

    #[test]
    fn matches_guess_ignores_case() {
        let word = Word::new("CAT").unwrap();
        assert!(word.matches_guess("cat"));
        assert!(word.matches_guess("CaT"));
        assert!(!word.matches_guess("act"));
        assert!(!word.matches_guess("cat "));
        assert!(!word.matches_guess(""));
    }

    #[test]
    fn matches_guess_unicode() {
        let word = Word::new("Éclair").unwrap();
        assert!(word.matches_guess("éCLAIR"));
    }

    #[test]
    fn matches_guess_final_sigma() {
        let word = Word::new("ΟΔΟΣ").unwrap();
        assert!(word.matches_guess("οδοσ"));
        assert!(word.matches_guess("οδος"));
        assert!(word.matches_guess("ΟΔΟΣ"));
        assert!(!word.matches_guess("οδο"));

        let word = Word::new("οδος").unwrap();
        assert!(word.matches_guess("ΟΔΟΣ"));
    }

    #[test]
    fn matches_guess_requires_same_length() {
        let word = Word::new("cat").unwrap();
        assert!(!word.matches_guess("ca"));
        assert!(!word.matches_guess("cats"));
    }

    #[test]
    fn is_scrambled_by_rejects_identity() {
        let word = Word::new("cat").unwrap();
        assert!(!word.is_scrambled_by("cat"));
        assert!(word.is_scrambled_by("act"));
        assert!(word.is_scrambled_by("tca"));
    }

    #[test]
    fn is_scrambled_by_is_case_sensitive() {
        let word = Word::new("Cat").unwrap();
        // Same letters, different case: not a permutation of the word's characters
        assert!(!word.is_scrambled_by("cat"));
        assert!(word.is_scrambled_by("atC"));
    }

    #[test]
    fn is_scrambled_by_rejects_other_letters() {
        let word = Word::new("cat").unwrap();
        assert!(!word.is_scrambled_by("dog"));
        assert!(!word.is_scrambled_by("acts"));
        assert!(!word.is_scrambled_by("ac"));
    }

    #[test]
    fn word_display() {
        let word = Word::new("zebra").unwrap();
        assert_eq!(format!("{word}"), "zebra");
    }
}
