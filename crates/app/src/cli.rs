use std::path::PathBuf;

use clap::{Parser, Subcommand};
use quiz_core::model::Level;

/// Vocabulary quiz: translate English words into Turkish.
#[derive(Parser, Debug)]
#[command(name = "kelime-oyunu", version)]
pub struct Cli {
    /// JSON file with word banks; the built-in banks are used when omitted.
    #[arg(long, global = true, env = "QUIZ_BANKS")]
    pub banks: Option<PathBuf>,

    /// Level to start with instead of showing the menu (A1, A2-B1, B2+).
    #[arg(long, global = true, env = "QUIZ_LEVEL")]
    pub level: Option<Level>,

    /// Shuffle answer buttons on screen.
    #[arg(long, global = true, env = "QUIZ_SHUFFLE_CHOICES")]
    pub shuffle_choices: bool,

    /// Log filter directive, e.g. `info` or `services=debug`. Falls back to `RUST_LOG`.
    #[arg(long, global = true)]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Open the desktop window (default).
    Ui,
    /// Play in the terminal.
    Play,
    /// Validate the word banks and print their sizes.
    Check,
}

impl Cli {
    #[must_use]
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Ui)
    }

    /// Filter used when neither `--log-filter` nor `RUST_LOG` is set.
    #[must_use]
    pub fn default_log_filter(&self) -> &'static str {
        match self.command() {
            Command::Ui => "info",
            // Keep the terminal free of per-answer logs.
            Command::Play | Command::Check => "warn",
        }
    }
}
