mod quiz_vm;

pub use quiz_vm::{AnswerFeedback, GameScreenVm, MenuScreenVm, QuizVm, ResultScreenVm};
