//! Word lists for Unscramble
//!
//! The built-in pool is embedded in the binary; custom pools are loaded from text files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameRules;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn builtin_words_are_playable() {
        for &word in WORDS {
            assert!(Word::new(word).is_ok(), "Word '{word}' cannot be scrambled");
            assert_eq!(word, word.trim(), "Word '{word}' has surrounding whitespace");
        }
    }

    #[test]
    fn builtin_words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn builtin_pool_fills_a_default_session() {
        assert!(WORDS_COUNT >= GameRules::default().max_words);
    }
}
