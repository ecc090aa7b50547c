//! Pretty-printing for the plain terminal mode

use super::formatters::{spaced, word_progress};
use crate::config::Strings;
use crate::shell::{FinalScoreDialog, Shell};
use colored::Colorize;
use std::io::{self, Write};

/// Print the opening banner
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_header(out: &mut impl Write, strings: &Strings) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "  {}", strings.title.to_uppercase().bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "\n{}", strings.instructions)?;
    writeln!(
        out,
        "Type your guess and press Enter. Commands: ':skip' to {}, ':quit' to {}.\n",
        strings.skip.to_lowercase(),
        strings.exit.to_lowercase()
    )
}

/// Print the word count, score and scramble of the current round
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_round<R>(out: &mut impl Write, shell: &Shell<R>) -> io::Result<()> {
    let screen = shell.screen();
    let max = shell.session().rules().max_words;

    writeln!(out, "{}", "─".repeat(60).bright_black())?;
    writeln!(
        out,
        "{}   {}   {}",
        shell.word_count_label(),
        word_progress(screen.word_count, max, 10).bright_black(),
        shell.score_label().bright_green()
    )?;
    writeln!(out, "{}", "─".repeat(60).bright_black())?;
    writeln!(out, "\n    {}\n", spaced(&screen.scramble).bright_yellow().bold())
}

/// Print the final-score dialog
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_final_score(out: &mut impl Write, dialog: &FinalScoreDialog) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "  🎉 {}", dialog.title.bright_green().bold())?;
    writeln!(out, "  {}", dialog.message.bright_white())?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "\n  [yes] {}    [no] {}\n",
        dialog.play_again, dialog.exit
    )
}
