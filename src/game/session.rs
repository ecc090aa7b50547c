//! Game session state and transitions
//!
//! A `GameSession` owns everything a play-through needs: the pool, the rules, the RNG, the
//! used-word set and the observable round state. Every operation is a synchronous state
//! transition; observers are notified before the operation returns.

use super::{GameError, GameRules, WordPool};
use crate::core::{Observable, SubscriptionId, Word, scramble};
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use tracing::{debug, info};

/// Observable fields of a session, used to address a subscription when unobserving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateField {
    Score,
    WordCount,
    Scramble,
}

/// One play-through of up to `max_words` rounds
#[derive(Debug)]
pub struct GameSession<R = StdRng> {
    pool: WordPool,
    rules: GameRules,
    rng: R,
    used_words: FxHashSet<String>,
    current_word: Word,
    score: Observable<u32>,
    word_count: Observable<usize>,
    current_scramble: Observable<String>,
}

impl<R: Rng> GameSession<R> {
    /// Create a session and populate the first round
    ///
    /// # Errors
    ///
    /// - `GameError::InvalidRules` if the rules are unusable
    /// - `GameError::PoolTooSmall` if the pool cannot fill a whole session without repeats
    pub fn create(pool: WordPool, rules: GameRules, rng: R) -> Result<Self, GameError> {
        rules.validate()?;

        if pool.len() < rules.max_words {
            return Err(GameError::PoolTooSmall {
                available: pool.len(),
                required: rules.max_words,
            });
        }

        // Placeholder until the first advance below replaces it
        let current_word = pool.words().first().cloned().ok_or(GameError::EmptyPool)?;

        let mut session = Self {
            pool,
            rules,
            rng,
            used_words: FxHashSet::default(),
            current_word,
            score: Observable::new(0),
            word_count: Observable::new(0),
            current_scramble: Observable::new(String::new()),
        };
        session.advance_word()?;

        info!(
            pool = session.pool.len(),
            max_words = session.rules.max_words,
            "Game session created"
        );
        Ok(session)
    }

    /// Present a new, unused word with a fresh scramble
    ///
    /// The word is drawn uniformly from the pool words not yet used this session.
    ///
    /// # Errors
    ///
    /// Returns `GameError::PoolExhausted` if every pool word has been used. State is left
    /// unchanged in that case.
    pub fn advance_word(&mut self) -> Result<(), GameError> {
        let remaining: Vec<&Word> = self
            .pool
            .words()
            .iter()
            .filter(|w| !self.used_words.contains(w.text()))
            .collect();

        let word = remaining
            .choose(&mut self.rng)
            .map(|w| (*w).clone())
            .ok_or(GameError::PoolExhausted)?;
        let scrambled = scramble(&word, &mut self.rng, self.rules.scramble_attempts);

        self.used_words.insert(word.text().to_string());
        self.current_word = word;
        self.current_scramble.set(scrambled);
        self.word_count.update(|count| *count += 1);

        debug!(
            round = *self.word_count.get(),
            scramble = %self.current_scramble.get(),
            "Advanced to next word"
        );
        Ok(())
    }

    /// Check a guess and award points when it is right
    ///
    /// Returns true iff `player_word` equals the current word ignoring case. A correct guess
    /// adds `score_increase` to the score as part of the same call.
    pub fn check_guess(&mut self, player_word: &str) -> bool {
        if !self.current_word.matches_guess(player_word) {
            debug!(round = *self.word_count.get(), "Incorrect guess");
            return false;
        }

        let increase = self.rules.score_increase;
        self.score.update(|score| *score = score.saturating_add(increase));
        debug!(score = *self.score.get(), "Correct guess");
        true
    }

    /// Advance to the next word if the session has rounds left
    ///
    /// Returns false, without touching any state, once `max_words` words have been shown.
    ///
    /// # Errors
    ///
    /// Propagates `advance_word` failures.
    pub fn try_advance(&mut self) -> Result<bool, GameError> {
        if *self.word_count.get() < self.rules.max_words {
            self.advance_word()?;
            Ok(true)
        } else {
            info!(score = *self.score.get(), "Game session finished");
            Ok(false)
        }
    }

    /// Start over: zero score and count, forget used words, present a new first word
    ///
    /// # Errors
    ///
    /// Propagates `advance_word` failures.
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.score.set(0);
        self.word_count.set(0);
        self.used_words.clear();
        self.advance_word()?;

        info!("Game session reset");
        Ok(())
    }
}

impl<R> GameSession<R> {
    /// End the session, dropping all observers, and return the final score
    #[must_use]
    pub fn dispose(mut self) -> u32 {
        self.score.clear_observers();
        self.word_count.clear_observers();
        self.current_scramble.clear_observers();

        let score = self.score.into_inner();
        info!(score, "Game session disposed");
        score
    }

    #[inline]
    #[must_use]
    pub fn score(&self) -> u32 {
        *self.score.get()
    }

    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        *self.word_count.get()
    }

    #[inline]
    #[must_use]
    pub fn current_word(&self) -> &Word {
        &self.current_word
    }

    #[inline]
    #[must_use]
    pub fn current_scramble(&self) -> &str {
        self.current_scramble.get()
    }

    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &FxHashSet<String> {
        &self.used_words
    }

    #[inline]
    #[must_use]
    pub const fn rules(&self) -> &GameRules {
        &self.rules
    }

    #[inline]
    #[must_use]
    pub const fn pool(&self) -> &WordPool {
        &self.pool
    }

    /// True when the word on screen is the final one of the session
    #[must_use]
    pub fn is_last_round(&self) -> bool {
        self.word_count() >= self.rules.max_words
    }

    /// Subscribe to score changes. The observer fires immediately with the current score.
    pub fn observe_score(&mut self, observer: impl FnMut(&u32) + 'static) -> SubscriptionId {
        self.score.subscribe(observer)
    }

    /// Subscribe to word count changes. The observer fires immediately.
    pub fn observe_word_count(
        &mut self,
        observer: impl FnMut(&usize) + 'static,
    ) -> SubscriptionId {
        self.word_count.subscribe(observer)
    }

    /// Subscribe to scramble changes. The observer fires immediately.
    pub fn observe_scramble(&mut self, observer: impl FnMut(&String) + 'static) -> SubscriptionId {
        self.current_scramble.subscribe(observer)
    }

    /// Remove an observer registered on `field`
    pub fn unobserve(&mut self, field: StateField, id: SubscriptionId) -> bool {
        match field {
            StateField::Score => self.score.unsubscribe(id),
            StateField::WordCount => self.word_count.unsubscribe(id),
            StateField::Scramble => self.current_scramble.unsubscribe(id),
        }
    }
}
