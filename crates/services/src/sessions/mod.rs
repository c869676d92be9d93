mod controller;
mod observer;
mod progress;
mod state;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use controller::QuizSessionController;
pub use observer::{SessionEvent, SessionObserver, TracingObserver};
pub use progress::SessionProgress;
pub use state::SessionState;
