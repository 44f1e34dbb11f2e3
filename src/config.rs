//! Runtime configuration from command-line arguments and environment.

use crate::core::constants::{DATA_DIR_ENV, MUTE_ENV};
use crate::utils::persistence::{default_data_dir, StorageError};
use std::path::PathBuf;
use thiserror::Error;

pub const USAGE: &str = "\
Trivia Mania - Terminal Trivia Quiz

Usage: trivia [command] [--mute]

Commands:
  (none)             Open the category menu
  play <category>    Jump straight into a category
  stats              Print saved progress and exit
  reset              Erase saved progress and exit
  --version          Show version information
  --help             Show this help message

Environment:
  TRIVIA_DATA_DIR    Where progress and logs are kept (default ~/.trivia)
  TRIVIA_MUTE=1      Start with sound disabled
  RUST_LOG           Log filter (default info)";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown command: {0}")]
    UnknownArgument(String),

    #[error("'play' needs a category id")]
    MissingCategory,

    #[error(transparent)]
    DataDir(#[from] StorageError),
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Interactive,
    Play(String),
    Stats,
    Reset,
    Version,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub command: Command,
    pub data_dir: PathBuf,
    pub muted: bool,
}

impl Config {
    /// Read the process arguments and environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::parse(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Parse arguments (without the program name) with an injectable
    /// environment lookup.
    pub fn parse<I, F>(args: I, env: F) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut command = Command::Interactive;
        let mut muted = env(MUTE_ENV).is_some_and(|v| is_truthy(&v));

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--mute" | "-m" => muted = true,
                "--version" | "-v" => command = Command::Version,
                "--help" | "-h" => command = Command::Help,
                "stats" => command = Command::Stats,
                "reset" => command = Command::Reset,
                "play" => {
                    let id = args.next().ok_or(ConfigError::MissingCategory)?;
                    command = Command::Play(id);
                }
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }

        let data_dir = match env(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => default_data_dir()?,
        };

        Ok(Self {
            command,
            data_dir,
            muted,
        })
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
