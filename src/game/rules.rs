//! Session rules

use super::GameError;
use crate::core::DEFAULT_SCRAMBLE_ATTEMPTS;
use serde::Deserialize;

/// Words presented per session
pub const DEFAULT_MAX_WORDS: usize = 10;

/// Points awarded per correct guess
pub const DEFAULT_SCORE_INCREASE: u32 = 20;

/// Tunable parameters of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameRules {
    /// Number of words presented before the session ends
    pub max_words: usize,
    /// Points added to the score for each correct guess
    pub score_increase: u32,
    /// Shuffles tried before the scramble falls back to a rotation
    pub scramble_attempts: u32,
}

impl GameRules {
    #[must_use]
    pub const fn new(max_words: usize, score_increase: u32) -> Self {
        Self {
            max_words,
            score_increase,
            scramble_attempts: DEFAULT_SCRAMBLE_ATTEMPTS,
        }
    }

    /// Highest score reachable in one session
    #[must_use]
    pub fn max_score(&self) -> u32 {
        u32::try_from(self.max_words)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.score_increase)
    }

    /// # Errors
    ///
    /// Returns `GameError::InvalidRules` if `max_words` is zero.
    pub const fn validate(&self) -> Result<(), GameError> {
        if self.max_words == 0 {
            return Err(GameError::InvalidRules("max_words must be at least 1"));
        }
        Ok(())
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WORDS, DEFAULT_SCORE_INCREASE)
    }
}
