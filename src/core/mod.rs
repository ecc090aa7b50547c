//! Core domain types for Unscramble
//!
//! Validated words, the scramble algorithm and the observable state container. Nothing in
//! here knows about sessions or terminals.

mod observable;
mod scramble;
mod word;

pub use observable::{Observable, SubscriptionId};
pub use scramble::{DEFAULT_SCRAMBLE_ATTEMPTS, scramble};
pub use word::{Word, WordError};
