mod level;
mod session;
mod word_bank;

pub use level::{Level, LevelParseError};
pub use session::{AnswerOutcome, Question, Score, SessionPhase};
pub use word_bank::{WordBank, WordBankDraft, WordBankError, WordEntryDraft};
