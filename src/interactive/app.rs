//! TUI application state and logic

use crate::shell::{Outcome, Phase, Shell};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<R = StdRng> {
    pub shell: Shell<R>,
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(shell: Shell<R>) -> Self {
        let mut app = Self {
            shell,
            messages: Vec::new(),
        };
        let strings = app.shell.strings();
        let (instructions, key_help) = (strings.instructions.clone(), strings.key_help());
        app.add_message(&instructions, MessageStyle::Info);
        app.add_message(&key_help, MessageStyle::Info);
        app
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.shell.phase() == Phase::Exited
    }

    /// Dispatch a key press to the shell
    ///
    /// # Errors
    ///
    /// Returns an error if the session fails to advance or reset.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.shell.exit();
            return Ok(());
        }

        match self.shell.phase() {
            Phase::Playing => match key.code {
                KeyCode::Esc => self.shell.exit(),
                KeyCode::Enter => {
                    let outcome = self.shell.submit()?;
                    self.report(outcome);
                }
                KeyCode::Tab => {
                    let outcome = self.shell.skip()?;
                    self.report(outcome);
                }
                KeyCode::Backspace => self.shell.pop_char(),
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    self.shell.push_char(c);
                }
                _ => {}
            },
            Phase::Finished => match key.code {
                KeyCode::Char('p' | 'P' | 'y' | 'Y') | KeyCode::Enter => {
                    if self.shell.play_again()? {
                        self.messages.clear();
                        self.add_message("New game started!", MessageStyle::Info);
                    }
                }
                KeyCode::Char('e' | 'E' | 'q' | 'Q' | 'n' | 'N') | KeyCode::Esc => {
                    self.shell.exit();
                }
                _ => {
                    // Dialog is modal; ignore other keys
                }
            },
            Phase::Exited => {}
        }

        Ok(())
    }

    fn report(&mut self, outcome: Outcome) {
        let increase = self.shell.session().rules().score_increase;
        match outcome {
            Outcome::Correct => {
                self.add_message(&format!("✓ Correct! +{increase}"), MessageStyle::Success);
            }
            Outcome::Incorrect => {
                let text = format!("✗ {}", self.shell.strings().try_again);
                self.add_message(&text, MessageStyle::Error);
            }
            Outcome::Skipped => self.add_message("↷ Skipped", MessageStyle::Info),
            Outcome::Finished { score } => {
                let text = self.shell.strings().final_score_message(score);
                self.add_message(&text, MessageStyle::Success);
            }
            Outcome::Ignored => {}
        }
    }
}

impl<R> App<R> {
    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application and return the final score
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<u32> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map(|app| app.shell.dispose())
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<App<R>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key)?;
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}
