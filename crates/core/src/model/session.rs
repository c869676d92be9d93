use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle phase of a quiz session.
///
/// No phase is terminal: `Finished` leads back to `InProgress` (play again)
/// or `NotStarted` (menu).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionPhase {
    #[default]
    NotStarted,
    InProgress,
    Finished,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionPhase::NotStarted => "not started",
            SessionPhase::InProgress => "in progress",
            SessionPhase::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// The question currently on screen, borrowed from the active bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question<'a> {
    pub term: &'a str,
    pub choices: &'a [String],
}

/// Result of submitting one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub session_finished: bool,
}

/// Running score: correct answers so far out of the active bank size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}
