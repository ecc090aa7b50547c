//! Game state
//!
//! The session owns all game logic: word selection, scrambling, guess checking and the
//! score/word-count bookkeeping. Front ends only forward actions into it.

mod error;
mod pool;
mod rules;
mod session;

pub use error::GameError;
pub use pool::WordPool;
pub use rules::{DEFAULT_MAX_WORDS, DEFAULT_SCORE_INCREASE, GameRules};
pub use session::{GameSession, StateField};
