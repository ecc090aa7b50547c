//! User-visible strings
//!
//! Templates use `{name}` placeholders filled in by the accessor methods.

use serde::Deserialize;

/// Lookup table of display strings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Strings {
    pub title: String,
    pub instructions: String,
    /// Placeholders: `{count}`, `{max}`
    pub word_count: String,
    /// Placeholder: `{score}`
    pub score: String,
    pub congratulations: String,
    /// Placeholder: `{score}`
    pub you_scored: String,
    pub try_again: String,
    pub enter_word: String,
    pub submit: String,
    pub skip: String,
    pub play_again: String,
    pub exit: String,
}

impl Default for Strings {
    fn default() -> Self {
        Self {
            title: "Unscramble".to_string(),
            instructions: "Unscramble the word using all the letters.".to_string(),
            word_count: "{count} of {max} words".to_string(),
            score: "Score: {score}".to_string(),
            congratulations: "Congratulations!".to_string(),
            you_scored: "You scored: {score}".to_string(),
            try_again: "Try again!".to_string(),
            enter_word: "Enter your word".to_string(),
            submit: "Submit".to_string(),
            skip: "Skip".to_string(),
            play_again: "Play Again".to_string(),
            exit: "Exit".to_string(),
        }
    }
}

impl Strings {
    #[must_use]
    pub fn word_count_label(&self, count: usize, max: usize) -> String {
        fill(&self.word_count, &[("count", &count), ("max", &max)])
    }

    #[must_use]
    pub fn score_label(&self, score: u32) -> String {
        fill(&self.score, &[("score", &score)])
    }

    #[must_use]
    pub fn final_score_message(&self, score: u32) -> String {
        fill(&self.you_scored, &[("score", &score)])
    }

    /// Key bindings for the playing screen, labelled with the action strings
    #[must_use]
    pub fn key_help(&self) -> String {
        format!(
            "Enter: {} | Tab: {} | Esc: {}",
            self.submit, self.skip, self.exit
        )
    }
}

fn fill(template: &str, args: &[(&str, &dyn std::fmt::Display)]) -> String {
    args.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{name}}}"), &value.to_string())
    })
}
