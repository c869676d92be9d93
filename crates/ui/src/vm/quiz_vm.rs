use std::sync::Arc;

use quiz_core::model::{AnswerOutcome, Level, SessionPhase};
use rand::seq::SliceRandom;
use services::{QuizSessionController, TracingObserver, WordBankProvider};

use crate::views::ViewError;

/// Feedback for the answer just given, shown above the next question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub term: String,
    pub is_correct: bool,
    pub answer: String,
}

impl AnswerFeedback {
    #[must_use]
    pub fn message(&self) -> String {
        if self.is_correct {
            "Doğru!".to_string()
        } else {
            format!("Yanlış! {} = {}", self.term, self.answer)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuScreenVm {
    pub levels: Vec<Level>,
    pub error: Option<ViewError>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameScreenVm {
    pub term: String,
    pub choices: Vec<String>,
    pub progress_label: String,
    pub correct_label: String,
    pub feedback: Option<AnswerFeedback>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultScreenVm {
    pub correct_label: String,
    pub score_label: String,
    pub feedback: Option<AnswerFeedback>,
}

fn correct_label(correct: usize) -> String {
    format!("Doğru Cevaplar: {correct}")
}

/// Presentation state over a `QuizSessionController`.
///
/// Holds only what the controller does not: the on-screen choice order, the
/// feedback for the previous answer and the last failed level selection.
pub struct QuizVm {
    controller: QuizSessionController,
    word_banks: Arc<dyn WordBankProvider>,
    shuffle_choices: bool,
    display_choices: Vec<String>,
    feedback: Option<AnswerFeedback>,
    menu_error: Option<ViewError>,
}

impl QuizVm {
    #[must_use]
    pub fn new(word_banks: Arc<dyn WordBankProvider>, shuffle_choices: bool) -> Self {
        Self {
            controller: QuizSessionController::new().with_observer(TracingObserver),
            word_banks,
            shuffle_choices,
            display_choices: Vec::new(),
            feedback: None,
            menu_error: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.controller.phase()
    }

    #[must_use]
    pub fn controller(&self) -> &QuizSessionController {
        &self.controller
    }

    /// # Errors
    ///
    /// Returns `ViewError::LevelUnavailable` when the provider has no bank for `level`.
    pub fn select_level(&mut self, level: Level) -> Result<(), ViewError> {
        let bank = match self.word_banks.bank(level) {
            Ok(bank) => bank,
            Err(_) => {
                let err = ViewError::LevelUnavailable(level);
                self.menu_error = Some(err);
                return Err(err);
            }
        };
        self.controller.select_level(bank);
        self.feedback = None;
        self.menu_error = None;
        self.refresh_choices();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ViewError::NoActiveQuestion` when no question is on screen.
    pub fn choose(&mut self, choice: &str) -> Result<AnswerOutcome, ViewError> {
        let (term, answer) = {
            let question = self
                .controller
                .current_question()
                .map_err(|_| ViewError::NoActiveQuestion)?;
            let answer = self
                .controller
                .active_bank()
                .and_then(|bank| bank.answer(question.term))
                .unwrap_or_default()
                .to_string();
            (question.term.to_string(), answer)
        };

        let outcome = self
            .controller
            .submit_answer(choice)
            .map_err(|_| ViewError::NoActiveQuestion)?;
        self.feedback = Some(AnswerFeedback {
            term,
            is_correct: outcome.is_correct,
            answer,
        });
        self.refresh_choices();
        Ok(outcome)
    }

    /// # Errors
    ///
    /// Returns `ViewError::NoLevelSelected` when no level has been chosen yet.
    pub fn play_again(&mut self) -> Result<(), ViewError> {
        self.controller
            .play_again()
            .map_err(|_| ViewError::NoLevelSelected)?;
        self.feedback = None;
        self.refresh_choices();
        Ok(())
    }

    pub fn return_to_menu(&mut self) {
        self.controller.return_to_menu();
        self.feedback = None;
        self.display_choices.clear();
    }

    #[must_use]
    pub fn menu_screen(&self) -> MenuScreenVm {
        MenuScreenVm {
            levels: self.word_banks.levels(),
            error: self.menu_error,
        }
    }

    #[must_use]
    pub fn game_screen(&self) -> Option<GameScreenVm> {
        let question = self.controller.current_question().ok()?;
        let progress = self.controller.progress();

        Some(GameScreenVm {
            term: question.term.to_string(),
            choices: self.display_choices.clone(),
            progress_label: format!("{} / {}", progress.position, progress.total),
            correct_label: correct_label(self.controller.correct_count()),
            feedback: self.feedback.clone(),
        })
    }

    #[must_use]
    pub fn result_screen(&self) -> ResultScreenVm {
        let score = self.controller.score();
        ResultScreenVm {
            correct_label: correct_label(score.correct),
            score_label: format!("{} / {}", score.correct, score.total),
            feedback: self.feedback.clone(),
        }
    }

    fn refresh_choices(&mut self) {
        self.display_choices = self
            .controller
            .current_question()
            .map(|question| question.choices.to_vec())
            .unwrap_or_default();
        if self.shuffle_choices {
            self.display_choices.shuffle(&mut rand::rng());
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
