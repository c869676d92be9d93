//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::model::{Level, SessionPhase, WordBankError};

/// Errors emitted by `QuizSessionController`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    /// An operation was called in a phase that does not allow it.
    #[error("{operation} is not allowed while the session is {phase}")]
    InvalidState {
        operation: &'static str,
        phase: SessionPhase,
    },
}

/// Errors emitted by word bank providers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProviderError {
    #[error("no word bank is configured for level {0}")]
    UnknownLevel(Level),
    #[error("word bank for level {0} is defined more than once")]
    DuplicateLevel(Level),
    #[error("word bank source contains no banks")]
    NoBanks,
    #[error("invalid word bank for level {level}: {source}")]
    InvalidBank {
        level: Level,
        #[source]
        source: WordBankError,
    },
    #[error("failed to read word banks from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
