use std::sync::Arc;

use quiz_core::model::{SessionPhase, WordBank};

/// Quiz state owned by the controller.
///
/// Mutations are crate-private so every change goes through a controller
/// operation.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    phase: SessionPhase,
    active_bank: Option<Arc<WordBank>>,
    current_index: usize,
    correct_count: usize,
}

impl SessionState {
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn active_bank(&self) -> Option<&Arc<WordBank>> {
        self.active_bank.as_ref()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    /// Number of terms in the active bank, zero without one.
    #[must_use]
    pub fn total(&self) -> usize {
        self.active_bank.as_ref().map_or(0, |bank| bank.len())
    }

    pub(crate) fn start(&mut self, bank: Arc<WordBank>) {
        self.active_bank = Some(bank);
        self.restart();
    }

    pub(crate) fn restart(&mut self) {
        self.phase = SessionPhase::InProgress;
        self.current_index = 0;
        self.correct_count = 0;
    }

    /// Leaves `correct_count` alone; the next `start` clears it.
    pub(crate) fn clear(&mut self) {
        self.phase = SessionPhase::NotStarted;
        self.active_bank = None;
        self.current_index = 0;
    }

    /// Count the answer and move on. Returns true when that was the last term.
    pub(crate) fn record_answer(&mut self, is_correct: bool) -> bool {
        if is_correct {
            self.correct_count += 1;
        }

        let last_index = self.total().saturating_sub(1);
        if self.current_index < last_index {
            self.current_index += 1;
            false
        } else {
            self.current_index = 0;
            self.phase = SessionPhase::Finished;
            true
        }
    }
}
