#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;
pub mod word_bank_provider;

pub use error::{ProviderError, SessionError};
pub use word_bank_provider::{StaticWordBanks, WordBankProvider};

pub use sessions::{
    QuizSessionController, SessionEvent, SessionObserver, SessionProgress, SessionState,
    TracingObserver,
};
