//! Unscramble
//!
//! A single-player word-unscrambling game for the terminal: guess the word behind each
//! scramble, score points for every correct answer, and see the final score after a fixed
//! number of words.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use unscramble::game::{GameRules, GameSession};
//! use unscramble::wordlists::loader::builtin_pool;
//!
//! let pool = builtin_pool().unwrap();
//! let mut session =
//!     GameSession::create(pool, GameRules::default(), StdRng::seed_from_u64(1)).unwrap();
//!
//! let answer = session.current_word().text().to_uppercase();
//! assert!(session.check_guess(&answer));
//! assert_eq!(session.score(), 20);
//! ```

// Core domain types
pub mod core;

// Session state and rules
pub mod game;

// Word lists
pub mod wordlists;

// Rules, strings and word-list configuration
pub mod config;

// Presenter shared by every front end
pub mod shell;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
