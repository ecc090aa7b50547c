//! Simple interactive CLI mode
//!
//! Line-based game without TUI: one guess or command per line.

use crate::output::{print_final_score, print_header, print_round};
use crate::shell::{Outcome, Phase, Shell};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout and return the final score
///
/// Returns when the player exits or input ends. The shell is disposed on the way out.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or the session fails to
/// advance.
pub fn run_simple<R: Rng>(mut shell: Shell<R>) -> Result<u32> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(&mut shell, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(shell.dispose())
}

/// Run the simple mode against arbitrary input and output streams
///
/// # Errors
///
/// Returns an error on I/O failure or if the session fails to advance.
pub fn run_simple_with<R: Rng>(
    shell: &mut Shell<R>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    print_header(out, shell.strings())?;

    loop {
        match shell.phase() {
            Phase::Playing => {
                print_round(out, shell)?;

                let Some(line) = get_user_input(input, out, &shell.strings().enter_word)? else {
                    shell.exit();
                    continue;
                };

                let outcome = match line.trim() {
                    ":quit" | ":q" | ":exit" => {
                        shell.exit();
                        continue;
                    }
                    ":skip" | ":s" => shell.skip()?,
                    _ => {
                        shell.set_input(line);
                        shell.submit()?
                    }
                };
                report_outcome(out, shell, outcome)?;
            }
            Phase::Finished => {
                if let Some(dialog) = shell.dialog() {
                    print_final_score(out, &dialog)?;
                }

                let answer = get_user_input(input, out, "Play again? (yes/no)")?;
                match answer.as_deref().map(str::trim).map(str::to_lowercase).as_deref() {
                    Some("yes" | "y") => {
                        shell.play_again()?;
                        writeln!(out, "\n🔄 New game started!\n")?;
                    }
                    _ => shell.exit(),
                }
            }
            Phase::Exited => {
                writeln!(
                    out,
                    "\n👋 Thanks for playing! {}\n",
                    shell.score_label()
                )?;
                return Ok(());
            }
        }
    }
}

fn report_outcome<R>(out: &mut impl Write, shell: &Shell<R>, outcome: Outcome) -> io::Result<()> {
    let increase = shell.session().rules().score_increase;
    match outcome {
        Outcome::Correct => writeln!(out, "{}\n", format!("✓ Correct! +{increase}").green()),
        Outcome::Incorrect => {
            let message = shell.error_message().unwrap_or_default();
            writeln!(out, "{}\n", format!("✗ {message}").red())
        }
        Outcome::Skipped => writeln!(out, "{}\n", "↷ Skipped".bright_black()),
        Outcome::Finished { .. } | Outcome::Ignored => Ok(()),
    }
}

/// Prompt and read one line. Returns `None` at end of input.
fn get_user_input(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Strings;
    use crate::game::{GameRules, GameSession, WordPool};
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn shell(words: &[&str], max_words: usize) -> Shell {
        let pool = WordPool::new(words_from_slice(words)).unwrap();
        let session = GameSession::create(
            pool,
            GameRules::new(max_words, 20),
            StdRng::seed_from_u64(0),
        )
        .unwrap();
        Shell::new(session, Strings::default())
    }

    fn play(shell: &mut Shell, script: &str) -> String {
        colored::control::set_override(false);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run_simple_with(shell, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn correct_guess_then_decline_replay() {
        let mut shell = shell(&["CAT"], 1);
        let transcript = play(&mut shell, "cat\nno\n");

        assert!(transcript.contains("You scored: 20"));
        assert!(transcript.contains("Thanks for playing!"));
        assert_eq!(shell.phase(), Phase::Exited);
        assert_eq!(shell.screen().score, 20);
    }

    #[test]
    fn correct_guesses_in_either_order() {
        let mut shell = shell(&["CAT", "DOG"], 2);
        // Whichever word comes first, this script solves both then declines the replay
        let transcript = play(&mut shell, "cat\ndog\ncat\ndog\n");

        assert!(transcript.contains("✓ Correct! +20"));
        assert!(transcript.contains("You scored: 40"));
        assert_eq!(shell.phase(), Phase::Exited);
    }

    #[test]
    fn wrong_guess_reports_error() {
        let mut shell = shell(&["CAT"], 1);
        let transcript = play(&mut shell, "dog\n:quit\n");

        assert!(transcript.contains("✗ Try again!"));
        assert_eq!(shell.screen().score, 0);
        assert_eq!(shell.phase(), Phase::Exited);
    }

    #[test]
    fn skip_then_replay() {
        let mut shell = shell(&["cat", "dog"], 2);
        let transcript = play(&mut shell, ":skip\n:skip\nyes\n:quit\n");

        assert!(transcript.contains("↷ Skipped"));
        assert!(transcript.contains("You scored: 0"));
        assert!(transcript.contains("New game started!"));
        assert_eq!(shell.screen().word_count, 1);
    }

    #[test]
    fn dispose_after_exit_keeps_final_score() {
        let mut shell = shell(&["CAT"], 1);
        play(&mut shell, "cat\nno\n");

        assert_eq!(shell.phase(), Phase::Exited);
        assert_eq!(shell.screen().score, 20);
        assert_eq!(shell.dispose(), 20);
    }

    #[test]
    fn end_of_input_exits() {
        let mut shell = shell(&["cat", "dog"], 2);
        play(&mut shell, "");

        assert_eq!(shell.phase(), Phase::Exited);
    }

    #[test]
    fn shows_scramble_and_labels() {
        let mut shell = shell(&["ab"], 1);
        let transcript = play(&mut shell, ":quit\n");

        assert!(transcript.contains("b a"));
        assert!(transcript.contains("1 of 1 words"));
        assert!(transcript.contains("Score: 0"));
    }
}
