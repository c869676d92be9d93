use dioxus::prelude::*;
use tracing::warn;

use crate::vm::QuizVm;

#[component]
pub fn ResultView(quiz: Signal<QuizVm>) -> Element {
    let result = quiz.read().result_screen();

    rsx! {
        div { class: "page result-page",
            if let Some(feedback) = result.feedback.as_ref() {
                p { class: "feedback", "{feedback.message()}" }
            }
            h1 { class: "view-title", "Tebrikler!" }
            p { class: "score", "{result.correct_label}" }
            p { class: "score-total", "{result.score_label}" }
            div { class: "result-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        let mut quiz = quiz;
                        if let Err(err) = quiz.write().play_again() {
                            warn!(?err, "play again was not accepted");
                        }
                    },
                    "Tekrar"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        let mut quiz = quiz;
                        quiz.write().return_to_menu();
                    },
                    "Menü"
                }
            }
        }
    }
}
