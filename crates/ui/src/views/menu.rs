use dioxus::prelude::*;
use tracing::warn;

use crate::vm::QuizVm;

#[component]
pub fn MenuView(quiz: Signal<QuizVm>) -> Element {
    let menu = quiz.read().menu_screen();

    let level_buttons = menu.levels.into_iter().map(|level| {
        let mut quiz = quiz;
        rsx! {
            button {
                key: "{level}",
                class: "btn btn-level",
                r#type: "button",
                onclick: move |_| {
                    if let Err(err) = quiz.write().select_level(level) {
                        warn!(%level, ?err, "level selection failed");
                    }
                },
                "{level}"
            }
        }
    });

    rsx! {
        div { class: "page menu-page",
            h1 { class: "view-title", "Kelime Oyunu" }
            p { class: "view-subtitle", "Başlamak için bir seviye seçin" }
            div { class: "level-list", {level_buttons} }
            if let Some(err) = menu.error {
                p { class: "error", "{err.message()}" }
            }
        }
    }
}
