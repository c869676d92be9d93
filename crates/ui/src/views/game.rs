use dioxus::prelude::*;
use tracing::warn;

use crate::vm::QuizVm;

#[component]
pub fn GameView(quiz: Signal<QuizVm>) -> Element {
    let Some(screen) = quiz.read().game_screen() else {
        return rsx! {
            div { class: "page game-page",
                p { "Soru bulunamadı." }
            }
        };
    };

    let choice_buttons = screen.choices.iter().map(|choice| {
        let mut quiz = quiz;
        let picked = choice.clone();
        rsx! {
            button {
                key: "{choice}",
                class: "btn btn-choice",
                r#type: "button",
                onclick: move |_| {
                    if let Err(err) = quiz.write().choose(&picked) {
                        warn!(?err, "answer was not accepted");
                    }
                },
                "{choice}"
            }
        }
    });

    let feedback = screen.feedback.as_ref().map(|feedback| {
        let class = if feedback.is_correct {
            "feedback feedback--correct"
        } else {
            "feedback feedback--wrong"
        };
        (class, feedback.message())
    });

    rsx! {
        div { class: "page game-page",
            p { class: "progress", "{screen.progress_label}" }
            if let Some((class, message)) = feedback {
                p { class: "{class}", "{message}" }
            }
            h2 { class: "term", "{screen.term}" }
            div { class: "choice-list", {choice_buttons} }
            p { class: "score", "{screen.correct_label}" }
        }
    }
}
