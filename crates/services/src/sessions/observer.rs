use quiz_core::model::{AnswerOutcome, Level, Score};
use tracing::info;

/// A transition the controller has just applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    LevelSelected { level: Level, total: usize },
    Answered {
        term: String,
        outcome: AnswerOutcome,
        score: Score,
    },
    Restarted { level: Level },
    ReturnedToMenu,
}

/// Receives every successful controller transition, in order.
///
/// Rejected operations are not reported.
pub trait SessionObserver {
    fn on_event(&mut self, event: &SessionEvent);
}

impl<F> SessionObserver for F
where
    F: FnMut(&SessionEvent),
{
    fn on_event(&mut self, event: &SessionEvent) {
        self(event);
    }
}

/// Records session transitions as structured `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SessionObserver for TracingObserver {
    fn on_event(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::LevelSelected { level, total } => {
                info!(%level, total, "level selected");
            }
            SessionEvent::Answered {
                term,
                outcome,
                score,
            } => {
                info!(
                    term = %term,
                    correct = outcome.is_correct,
                    finished = outcome.session_finished,
                    score = %score,
                    "answer submitted"
                );
            }
            SessionEvent::Restarted { level } => info!(%level, "session restarted"),
            SessionEvent::ReturnedToMenu => info!("returned to menu"),
        }
    }
}
