use quiz_core::model::SessionPhase;

use super::state::SessionState;

/// Aggregated view of session progress, useful for UI.
///
/// `position` is the 1-based number of the question on screen, or 0 when no
/// question is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionProgress {
    pub position: usize,
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_finished: bool,
}

impl SessionProgress {
    pub(crate) fn from_state(state: &SessionState) -> Self {
        let total = state.total();
        match state.phase() {
            SessionPhase::NotStarted => Self::default(),
            SessionPhase::InProgress => Self {
                position: state.current_index() + 1,
                total,
                answered: state.current_index(),
                remaining: total.saturating_sub(state.current_index()),
                is_finished: false,
            },
            SessionPhase::Finished => Self {
                position: 0,
                total,
                answered: total,
                remaining: 0,
                is_finished: true,
            },
        }
    }
}
