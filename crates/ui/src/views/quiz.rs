use dioxus::prelude::*;
use quiz_core::model::SessionPhase;
use tracing::warn;

use crate::context::AppContext;
use crate::views::{GameView, MenuView, ResultView};
use crate::vm::QuizVm;

/// Owns the quiz view model for the lifetime of the window.
#[component]
pub fn QuizRoot() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = use_signal(move || {
        let mut vm = QuizVm::new(ctx.word_banks(), ctx.shuffle_choices());
        if let Some(level) = ctx.take_start_level() {
            if let Err(err) = vm.select_level(level) {
                warn!(%level, ?err, "start level unavailable, showing menu");
            }
        }
        vm
    });

    rsx! { PhaseSwitch { quiz } }
}

/// Picks the screen for the current session phase.
#[component]
pub fn PhaseSwitch(quiz: Signal<QuizVm>) -> Element {
    let phase = quiz.read().phase();

    match phase {
        SessionPhase::NotStarted => rsx! { MenuView { quiz } },
        SessionPhase::InProgress => rsx! { GameView { quiz } },
        SessionPhase::Finished => rsx! { ResultView { quiz } },
    }
}
