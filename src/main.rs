//! Unscramble - CLI
//!
//! Word-unscrambling game with TUI and plain terminal modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use unscramble::{
    commands::run_simple,
    config::{Config, WordSource},
    game::GameSession,
    interactive::{App, run_tui},
    shell::Shell,
};

#[derive(Parser)]
#[command(
    name = "unscramble",
    about = "Unscramble the word: guess the answer behind each scrambled word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// TOML config file with rules, strings and wordlist
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Words per session (overrides the config file)
    #[arg(short = 'n', long, global = true)]
    max_words: Option<usize>,

    /// Seed for a reproducible sequence of words and scrambles
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log file (use RUST_LOG to control the level)
    #[arg(long, global = true, default_value = "unscramble.log")]
    log_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode (no TUI)
    Simple,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_file)?;

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(max_words) = cli.max_words {
        config.rules.max_words = max_words;
    }

    let source = cli
        .wordlist
        .as_deref()
        .map_or_else(|| config.word_source(), WordSource::from_arg);
    let pool = source.load()?;

    let rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let session =
        GameSession::create(pool, config.rules, rng).context("Failed to start a game session")?;
    let shell = Shell::new(session, config.strings);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(shell),
        Commands::Simple => run_simple_command(shell),
    }
}

/// TUI apps can't log to stdout, so tracing writes to a file
fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn run_play_command(shell: Shell) -> Result<()> {
    let score = run_tui(App::new(shell))?;
    println!("👋 Thanks for playing! Final score: {score}");
    Ok(())
}

fn run_simple_command(shell: Shell) -> Result<()> {
    let score = run_simple(shell)?;
    tracing::info!(score, "Simple session closed");
    Ok(())
}
