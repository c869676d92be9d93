use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use quiz_core::model::Level;
use services::WordBankProvider;

pub trait UiApp: Send + Sync {
    fn word_banks(&self) -> Arc<dyn WordBankProvider>;

    /// Level to open straight away instead of showing the menu.
    fn start_level(&self) -> Option<Level>;

    /// Shuffle answer buttons on screen. The quiz order is unaffected.
    fn shuffle_choices(&self) -> bool;
}

#[derive(Clone)]
pub struct AppContext {
    word_banks: Arc<dyn WordBankProvider>,
    start_level: Option<Level>,
    start_level_pending: Arc<AtomicBool>,
    shuffle_choices: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let start_level = app.start_level();

        Self {
            word_banks: app.word_banks(),
            start_level,
            start_level_pending: Arc::new(AtomicBool::new(start_level.is_some())),
            shuffle_choices: app.shuffle_choices(),
        }
    }

    #[must_use]
    pub fn word_banks(&self) -> Arc<dyn WordBankProvider> {
        Arc::clone(&self.word_banks)
    }

    /// The start level, handed out once so returning to the menu stays there.
    #[must_use]
    pub fn take_start_level(&self) -> Option<Level> {
        if self.start_level_pending.swap(false, Ordering::AcqRel) {
            self.start_level
        } else {
            None
        }
    }

    #[must_use]
    pub fn shuffle_choices(&self) -> bool {
        self.shuffle_choices
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
