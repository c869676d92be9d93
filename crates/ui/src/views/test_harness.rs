use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::Level;
use services::{StaticWordBanks, WordBankProvider};

use crate::context::{UiApp, build_app_context};
use crate::views::{PhaseSwitch, QuizRoot};
use crate::vm::QuizVm;

#[derive(Clone)]
struct TestApp {
    word_banks: Arc<StaticWordBanks>,
    start_level: Option<Level>,
}

impl UiApp for TestApp {
    fn word_banks(&self) -> Arc<dyn WordBankProvider> {
        self.word_banks.clone()
    }

    fn start_level(&self) -> Option<Level> {
        self.start_level
    }

    fn shuffle_choices(&self) -> bool {
        false
    }
}

/// Drives a fresh view model before the first render.
pub type Prepare = fn(&mut QuizVm);

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
    prepare: Option<Prepare>,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn Harness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));

    match props.prepare {
        None => rsx! { QuizRoot {} },
        Some(prepare) => {
            let quiz = use_signal(move || {
                let mut vm = QuizVm::new(ctx.word_banks(), ctx.shuffle_choices());
                prepare(&mut vm);
                vm
            });
            rsx! { PhaseSwitch { quiz } }
        }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        self.dom.process_events();
        self.dom.render_immediate(&mut NoOpMutations);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn setup_view_harness(start_level: Option<Level>, prepare: Option<Prepare>) -> ViewHarness {
    let word_banks = StaticWordBanks::builtin().expect("builtin banks");
    setup_view_harness_with_banks(word_banks, start_level, prepare)
}

pub fn setup_view_harness_with_banks(
    word_banks: StaticWordBanks,
    start_level: Option<Level>,
    prepare: Option<Prepare>,
) -> ViewHarness {
    let word_banks = Arc::new(word_banks);
    let app = Arc::new(TestApp {
        word_banks,
        start_level,
    });

    let dom = VirtualDom::new_with_props(Harness, HarnessProps { app, prepare });
    ViewHarness { dom }
}
