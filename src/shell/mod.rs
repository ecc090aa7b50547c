//! Presentation shell
//!
//! Framework-independent presenter between a front end and a [`GameSession`]. It keeps the
//! input buffer, the inline error flag and the session phase, and maintains a [`Screen`]
//! view model through session observers. Every game decision is delegated to the session.

use crate::config::Strings;
use crate::game::{GameError, GameSession};
use rand::Rng;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::info;

/// Where the player is in the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Rounds remain; submit and skip are accepted
    Playing,
    /// Final-score dialog is showing; only play-again and exit are accepted
    Finished,
    /// Player chose to exit; the front end should tear down
    Exited,
}

/// Result of a player action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Right answer; the next word is showing
    Correct,
    /// Wrong answer; the round is unchanged and the error is showing
    Incorrect,
    /// Word skipped; the next word is showing
    Skipped,
    /// No rounds left; the final-score dialog is showing
    Finished { score: u32 },
    /// Action not accepted in the current phase
    Ignored,
}

/// View model kept current by session observers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    pub scramble: String,
    pub word_count: usize,
    pub score: u32,
}

/// Content of the modal final-score dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalScoreDialog {
    pub title: String,
    pub message: String,
    pub play_again: String,
    pub exit: String,
}

pub struct Shell<R = StdRng> {
    session: GameSession<R>,
    strings: Strings,
    screen: Rc<RefCell<Screen>>,
    input: String,
    input_error: bool,
    phase: Phase,
}

impl<R: Rng> Shell<R> {
    /// Attach a shell to a session and subscribe the view model to it
    #[must_use]
    pub fn new(mut session: GameSession<R>, strings: Strings) -> Self {
        let screen = Rc::new(RefCell::new(Screen::default()));

        let view = Rc::clone(&screen);
        session.observe_scramble(move |scramble| view.borrow_mut().scramble.clone_from(scramble));
        let view = Rc::clone(&screen);
        session.observe_word_count(move |count| view.borrow_mut().word_count = *count);
        let view = Rc::clone(&screen);
        session.observe_score(move |score| view.borrow_mut().score = *score);

        Self {
            session,
            strings,
            screen,
            input: String::new(),
            input_error: false,
            phase: Phase::Playing,
        }
    }

    /// Check the typed word against the current round
    ///
    /// # Errors
    ///
    /// Propagates session errors from advancing to the next word.
    pub fn submit(&mut self) -> Result<Outcome, GameError> {
        if self.phase != Phase::Playing {
            return Ok(Outcome::Ignored);
        }

        if !self.session.check_guess(&self.input) {
            self.input_error = true;
            return Ok(Outcome::Incorrect);
        }

        self.clear_input();
        if self.session.try_advance()? {
            Ok(Outcome::Correct)
        } else {
            Ok(self.finish())
        }
    }

    /// Move on without scoring
    ///
    /// # Errors
    ///
    /// Propagates session errors from advancing to the next word.
    pub fn skip(&mut self) -> Result<Outcome, GameError> {
        if self.phase != Phase::Playing {
            return Ok(Outcome::Ignored);
        }

        if self.session.try_advance()? {
            self.clear_input();
            Ok(Outcome::Skipped)
        } else {
            Ok(self.finish())
        }
    }

    /// Dialog action: start a new session. Returns false outside the dialog.
    ///
    /// # Errors
    ///
    /// Propagates session errors from the reset.
    pub fn play_again(&mut self) -> Result<bool, GameError> {
        if self.phase != Phase::Finished {
            return Ok(false);
        }

        self.session.reset()?;
        self.clear_input();
        self.phase = Phase::Playing;
        Ok(true)
    }

    fn finish(&mut self) -> Outcome {
        self.phase = Phase::Finished;
        let score = self.session.score();
        info!(score, "Showing final score dialog");
        Outcome::Finished { score }
    }
}

impl<R> Shell<R> {
    /// Leave the game. Accepted from any phase.
    pub fn exit(&mut self) {
        self.phase = Phase::Exited;
    }

    /// Tear down the shell and its session, returning the final score
    #[must_use]
    pub fn dispose(self) -> u32 {
        self.session.dispose()
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen.borrow().clone()
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession<R> {
        &self.session
    }

    #[must_use]
    pub const fn strings(&self) -> &Strings {
        &self.strings
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the typed text. Ignored unless playing.
    pub fn set_input(&mut self, text: impl Into<String>) {
        if self.phase == Phase::Playing {
            self.input = text.into();
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.phase == Phase::Playing {
            self.input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if self.phase == Phase::Playing {
            self.input.pop();
        }
    }

    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.input_error
    }

    /// Inline validation message, shown after a wrong guess
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.input_error.then_some(self.strings.try_again.as_str())
    }

    #[must_use]
    pub fn word_count_label(&self) -> String {
        let screen = self.screen.borrow();
        self.strings
            .word_count_label(screen.word_count, self.session.rules().max_words)
    }

    #[must_use]
    pub fn score_label(&self) -> String {
        self.strings.score_label(self.screen.borrow().score)
    }

    /// The final-score dialog, present only once the session is finished
    #[must_use]
    pub fn dialog(&self) -> Option<FinalScoreDialog> {
        (self.phase == Phase::Finished).then(|| FinalScoreDialog {
            title: self.strings.congratulations.clone(),
            message: self
                .strings
                .final_score_message(self.screen.borrow().score),
            play_again: self.strings.play_again.clone(),
            exit: self.strings.exit.clone(),
        })
    }

    fn clear_input(&mut self) {
        self.input_error = false;
        self.input.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameRules, WordPool};
    use crate::wordlists::loader::{builtin_pool, words_from_slice};
    use rand::SeedableRng;

    fn shell(seed: u64) -> Shell {
        let session = GameSession::create(
            builtin_pool().unwrap(),
            GameRules::default(),
            StdRng::seed_from_u64(seed),
        )
        .unwrap();
        Shell::new(session, Strings::default())
    }

    fn answer(shell: &Shell) -> String {
        shell.session().current_word().text().to_string()
    }

    fn guess_right(shell: &mut Shell) -> Outcome {
        let word = answer(shell).to_uppercase();
        shell.set_input(word);
        shell.submit().unwrap()
    }

    #[test]
    fn screen_mirrors_session_on_attach() {
        let shell = shell(1);
        let screen = shell.screen();

        assert_eq!(screen.scramble, shell.session().current_scramble());
        assert_eq!(screen.word_count, 1);
        assert_eq!(screen.score, 0);
        assert_eq!(shell.phase(), Phase::Playing);
        assert_eq!(shell.word_count_label(), "1 of 10 words");
        assert_eq!(shell.score_label(), "Score: 0");
    }

    #[test]
    fn ten_correct_guesses_finish_with_200() {
        let mut shell = shell(2);

        for round in 1..10 {
            assert_eq!(guess_right(&mut shell), Outcome::Correct, "round {round}");
            assert_eq!(shell.screen().word_count, round + 1);
            assert!(shell.dialog().is_none());
        }

        assert_eq!(guess_right(&mut shell), Outcome::Finished { score: 200 });
        assert_eq!(shell.phase(), Phase::Finished);
        assert_eq!(shell.screen().score, 200);

        let dialog = shell.dialog().unwrap();
        assert_eq!(dialog.title, "Congratulations!");
        assert_eq!(dialog.message, "You scored: 200");
        assert_eq!(dialog.play_again, "Play Again");
        assert_eq!(dialog.exit, "Exit");
    }

    #[test]
    fn skip_then_correct_scores_once() {
        let mut shell = shell(3);
        let start = shell.screen().word_count;

        assert_eq!(shell.skip().unwrap(), Outcome::Skipped);
        assert_eq!(guess_right(&mut shell), Outcome::Correct);

        assert_eq!(shell.screen().score, 20);
        assert_eq!(shell.screen().word_count, start + 2);
    }

    #[test]
    fn wrong_guess_shows_error_and_keeps_input() {
        let mut shell = shell(4);
        let scramble = shell.screen().scramble;
        shell.set_input("definitely wrong");

        assert_eq!(shell.submit().unwrap(), Outcome::Incorrect);
        assert!(shell.has_error());
        assert_eq!(shell.error_message(), Some("Try again!"));
        assert_eq!(shell.input(), "definitely wrong");
        assert_eq!(shell.screen().scramble, scramble);
        assert_eq!(shell.screen().word_count, 1);
        assert_eq!(shell.screen().score, 0);
    }

    #[test]
    fn correct_guess_clears_error_and_input() {
        let mut shell = shell(5);
        shell.set_input("nope");
        shell.submit().unwrap();
        assert!(shell.has_error());

        assert_eq!(guess_right(&mut shell), Outcome::Correct);
        assert!(!shell.has_error());
        assert_eq!(shell.input(), "");
    }

    #[test]
    fn skip_clears_error() {
        let mut shell = shell(6);
        shell.set_input("nope");
        shell.submit().unwrap();

        shell.skip().unwrap();
        assert!(shell.error_message().is_none());
        assert_eq!(shell.input(), "");
    }

    #[test]
    fn skipping_every_word_finishes_with_zero() {
        let mut shell = shell(7);

        for _ in 1..10 {
            assert_eq!(shell.skip().unwrap(), Outcome::Skipped);
        }
        assert_eq!(shell.skip().unwrap(), Outcome::Finished { score: 0 });
        assert_eq!(shell.dialog().unwrap().message, "You scored: 0");
    }

    #[test]
    fn dialog_is_modal() {
        let mut shell = shell(8);
        while shell.skip().unwrap() != (Outcome::Finished { score: 0 }) {}

        let word = answer(&shell);
        shell.set_input(word);
        shell.push_char('x');
        assert_eq!(shell.input(), "");
        assert_eq!(shell.submit().unwrap(), Outcome::Ignored);
        assert_eq!(shell.skip().unwrap(), Outcome::Ignored);
        assert_eq!(shell.phase(), Phase::Finished);
        assert_eq!(shell.screen().score, 0);
    }

    #[test]
    fn play_again_resets_session() {
        let mut shell = shell(9);
        guess_right(&mut shell);
        shell.set_input("wrong");
        shell.submit().unwrap();
        while shell.phase() == Phase::Playing {
            shell.skip().unwrap();
        }

        assert!(shell.play_again().unwrap());
        assert_eq!(shell.phase(), Phase::Playing);
        assert!(!shell.has_error());
        assert!(shell.dialog().is_none());
        assert_eq!(
            shell.screen(),
            Screen {
                scramble: shell.session().current_scramble().to_string(),
                word_count: 1,
                score: 0,
            }
        );
    }

    #[test]
    fn play_again_only_from_dialog() {
        let mut shell = shell(10);
        assert!(!shell.play_again().unwrap());
        assert_eq!(shell.screen().word_count, 1);
    }

    #[test]
    fn exit_from_dialog_disposes_with_final_score() {
        let mut shell = shell(11);
        guess_right(&mut shell);
        while shell.phase() == Phase::Playing {
            shell.skip().unwrap();
        }

        shell.exit();
        assert_eq!(shell.phase(), Phase::Exited);
        assert!(shell.dialog().is_none());
        assert_eq!(shell.dispose(), 20);
    }

    #[test]
    fn input_editing() {
        let mut shell = shell(12);
        shell.push_char('a');
        shell.push_char('b');
        shell.pop_char();
        assert_eq!(shell.input(), "a");
    }

    #[test]
    fn single_word_session() {
        let pool = WordPool::new(words_from_slice(&["CAT"])).unwrap();
        let session =
            GameSession::create(pool, GameRules::new(1, 20), StdRng::seed_from_u64(0)).unwrap();
        let mut shell = Shell::new(session, Strings::default());

        shell.set_input("cat");
        assert_eq!(shell.submit().unwrap(), Outcome::Finished { score: 20 });
        assert_eq!(shell.word_count_label(), "1 of 1 words");
    }
}
