use std::fmt;
use std::sync::Arc;

use quiz_core::model::{AnswerOutcome, Question, Score, SessionPhase, WordBank};
use tracing::debug;

use super::observer::{SessionEvent, SessionObserver};
use super::progress::SessionProgress;
use super::state::SessionState;
use crate::error::SessionError;

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Owns the quiz session and applies user actions to it.
///
/// The presentation layer forwards button presses here and re-renders from
/// the returned values. Every operation is synchronous and runs to completion.
#[derive(Default)]
pub struct QuizSessionController {
    state: SessionState,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl QuizSessionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_observer(mut self, observer: impl SessionObserver + 'static) -> Self {
        self.subscribe(observer);
        self
    }

    /// Register an observer for all subsequent transitions.
    pub fn subscribe(&mut self, observer: impl SessionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    #[must_use]
    pub fn active_bank(&self) -> Option<&Arc<WordBank>> {
        self.state.active_bank()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.state.correct_count()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress::from_state(&self.state)
    }

    /// Start a fresh playthrough of `bank`. Allowed in every phase.
    pub fn select_level(&mut self, bank: Arc<WordBank>) {
        let level = bank.level();
        let total = bank.len();
        self.state.start(bank);
        self.emit(&SessionEvent::LevelSelected { level, total });
    }

    /// The term to translate and its choices, in bank order.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidState` unless the session is in progress.
    pub fn current_question(&self) -> Result<Question<'_>, SessionError> {
        let bank = self.require_in_progress("current_question")?;
        let term = bank
            .term(self.state.current_index())
            .ok_or_else(|| self.invalid_state("current_question"))?;

        Ok(Question {
            term,
            choices: bank.choices(term).unwrap_or(&[]),
        })
    }

    /// Check `choice` against the current term and advance.
    ///
    /// A choice that is not among the listed options is simply incorrect.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidState` unless the session is in progress.
    pub fn submit_answer(&mut self, choice: &str) -> Result<AnswerOutcome, SessionError> {
        let bank = Arc::clone(self.require_in_progress("submit_answer")?);
        let term = bank
            .term(self.state.current_index())
            .ok_or_else(|| self.invalid_state("submit_answer"))?;

        let is_correct = bank.is_correct(term, choice);
        let session_finished = self.state.record_answer(is_correct);
        let outcome = AnswerOutcome {
            is_correct,
            session_finished,
        };

        let score = self.score();
        self.emit(&SessionEvent::Answered {
            term: term.to_string(),
            outcome,
            score,
        });
        Ok(outcome)
    }

    /// Replay the active bank from the first term with a zero score.
    ///
    /// Also accepted mid-game as a forced restart.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidState` when no level has been selected.
    pub fn play_again(&mut self) -> Result<(), SessionError> {
        let Some(level) = self.state.active_bank().map(|bank| bank.level()) else {
            return Err(self.invalid_state("play_again"));
        };

        self.state.restart();
        self.emit(&SessionEvent::Restarted { level });
        Ok(())
    }

    /// Drop the active bank and go back to level selection.
    pub fn return_to_menu(&mut self) {
        self.state.clear();
        self.emit(&SessionEvent::ReturnedToMenu);
    }

    #[must_use]
    pub fn score(&self) -> Score {
        Score {
            correct: self.state.correct_count(),
            total: self.state.total(),
        }
    }

    fn require_in_progress(&self, operation: &'static str) -> Result<&Arc<WordBank>, SessionError> {
        match (self.state.phase(), self.state.active_bank()) {
            (SessionPhase::InProgress, Some(bank)) => Ok(bank),
            _ => Err(self.invalid_state(operation)),
        }
    }

    fn invalid_state(&self, operation: &'static str) -> SessionError {
        let phase = self.state.phase();
        debug!(operation, %phase, "rejected session operation");
        SessionError::InvalidState { operation, phase }
    }

    fn emit(&mut self, event: &SessionEvent) {
        for observer in &mut self.observers {
            observer.on_event(event);
        }
    }
}

impl fmt::Debug for QuizSessionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSessionController")
            .field("state", &self.state)
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
