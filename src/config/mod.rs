//! Configuration
//!
//! Game rules, display strings and the word-list source, optionally read from a TOML file.
//! Every key is optional; anything missing falls back to the built-in defaults.

mod strings;

pub use strings::Strings;

use crate::game::{GameRules, WordPool};
use crate::wordlists::loader::{builtin_pool, load_from_file};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Where the word pool comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordSource {
    /// Pool embedded at build time
    #[default]
    Builtin,
    /// Text file, one word per line
    File(PathBuf),
}

impl WordSource {
    /// Parse a CLI value: `builtin` or a path
    #[must_use]
    pub fn from_arg(value: &str) -> Self {
        match value {
            "builtin" => Self::Builtin,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Load the pool from this source
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or yields no playable words.
    pub fn load(&self) -> Result<WordPool> {
        match self {
            Self::Builtin => Ok(builtin_pool()?),
            Self::File(path) => {
                let words = load_from_file(path)
                    .with_context(|| format!("Failed to read word list {}", path.display()))?;
                let pool = WordPool::new(words)
                    .with_context(|| format!("No playable words in {}", path.display()))?;
                info!("Loaded {} words from {}", pool.len(), path.display());
                Ok(pool)
            }
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Word list path; `None` means the built-in pool
    pub wordlist: Option<PathBuf>,
    pub rules: GameRules,
    pub strings: Strings,
}

impl Config {
    /// Read configuration from `path`, or return defaults when no path is given
    ///
    /// A relative `wordlist` is resolved against the config file's directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for this schema.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let mut config = Self::parse(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;

        if let Some(wordlist) = &config.wordlist
            && wordlist.is_relative()
            && let Some(dir) = path.parent()
        {
            config.wordlist = Some(dir.join(wordlist));
        }

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or contains unknown keys.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    #[must_use]
    pub fn word_source(&self) -> WordSource {
        self.wordlist
            .clone()
            .map_or(WordSource::Builtin, WordSource::File)
    }
}
