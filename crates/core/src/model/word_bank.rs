use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Level;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WordBankError {
    #[error("word bank has no terms")]
    Empty,

    #[error("term is listed more than once: {term}")]
    DuplicateTerm { term: String },

    #[error("term has no choices: {term}")]
    NoChoices { term: String },

    #[error("choice {choice:?} is listed more than once for {term:?}")]
    DuplicateChoice { term: String, choice: String },

    #[error("term has no answer: {term}")]
    MissingAnswer { term: String },

    #[error("answer {answer:?} for {term:?} is not among its choices")]
    AnswerNotAmongChoices { term: String, answer: String },
}

//
// ─── DRAFTS ───────────────────────────────────────────────────────────────────
//

/// One unvalidated question as it appears in word bank data files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntryDraft {
    pub term: String,
    pub choices: Vec<String>,
    pub answer: String,
}

impl WordEntryDraft {
    pub fn new(
        term: impl Into<String>,
        choices: impl IntoIterator<Item = impl Into<String>>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            term: term.into(),
            choices: choices.into_iter().map(Into::into).collect(),
            answer: answer.into(),
        }
    }
}

/// Unvalidated word bank, the serialized form loaded by providers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordBankDraft {
    pub level: Level,
    pub entries: Vec<WordEntryDraft>,
}

impl WordBankDraft {
    pub fn new(level: Level, entries: Vec<WordEntryDraft>) -> Self {
        Self { level, entries }
    }

    /// Validate the draft into a `WordBank`, keeping entry order as question order.
    ///
    /// # Errors
    ///
    /// Returns `WordBankError` when the bank is empty, a term or one of its
    /// choices repeats, a term has no choices, or an answer is missing from its
    /// choices.
    pub fn validate(self) -> Result<WordBank, WordBankError> {
        let mut words = Vec::with_capacity(self.entries.len());
        let mut options = HashMap::with_capacity(self.entries.len());
        let mut answer_key = HashMap::with_capacity(self.entries.len());

        for entry in self.entries {
            words.push(entry.term.clone());
            options.insert(entry.term.clone(), entry.choices);
            answer_key.insert(entry.term, entry.answer);
        }

        WordBank::new(self.level, words, options, answer_key)
    }
}

//
// ─── WORD BANK ────────────────────────────────────────────────────────────────
//

/// A validated, read-only list of quiz questions for one level.
///
/// Invariants:
/// - `words` is non-empty and has no duplicates
/// - every term has a non-empty `options` entry without repeats and an
///   `answer_key` entry
/// - each answer appears among its term's options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    level: Level,
    words: Vec<String>,
    options: HashMap<String, Vec<String>>,
    answer_key: HashMap<String, String>,
}

impl WordBank {
    /// # Errors
    ///
    /// Returns `WordBankError` if any bank invariant is violated.
    pub fn new(
        level: Level,
        words: Vec<String>,
        options: HashMap<String, Vec<String>>,
        answer_key: HashMap<String, String>,
    ) -> Result<Self, WordBankError> {
        if words.is_empty() {
            return Err(WordBankError::Empty);
        }

        let mut seen = HashSet::with_capacity(words.len());
        for term in &words {
            if !seen.insert(term.as_str()) {
                return Err(WordBankError::DuplicateTerm { term: term.clone() });
            }

            let choices = options
                .get(term)
                .filter(|choices| !choices.is_empty())
                .ok_or_else(|| WordBankError::NoChoices { term: term.clone() })?;
            let mut seen_choices = HashSet::with_capacity(choices.len());
            if let Some(choice) = choices.iter().find(|c| !seen_choices.insert(c.as_str())) {
                return Err(WordBankError::DuplicateChoice {
                    term: term.clone(),
                    choice: choice.clone(),
                });
            }
            let answer = answer_key
                .get(term)
                .ok_or_else(|| WordBankError::MissingAnswer { term: term.clone() })?;
            if !choices.contains(answer) {
                return Err(WordBankError::AnswerNotAmongChoices {
                    term: term.clone(),
                    answer: answer.clone(),
                });
            }
        }

        Ok(Self {
            level,
            words,
            options,
            answer_key,
        })
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Terms in question order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a validated bank; kept alongside `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn term(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn choices(&self, term: &str) -> Option<&[String]> {
        self.options.get(term).map(Vec::as_slice)
    }

    #[must_use]
    pub fn answer(&self, term: &str) -> Option<&str> {
        self.answer_key.get(term).map(String::as_str)
    }

    /// Plain equality against the answer key; unknown terms are never correct.
    #[must_use]
    pub fn is_correct(&self, term: &str, choice: &str) -> bool {
        self.answer(term) == Some(choice)
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_dog() -> WordBankDraft {
        WordBankDraft::new(
            Level::A1,
            vec![
                WordEntryDraft::new("cat", ["kedi", "köpek"], "kedi"),
                WordEntryDraft::new("dog", ["kedi", "köpek"], "köpek"),
            ],
        )
    }

    #[test]
    fn validate_keeps_entry_order() {
        let bank = cat_dog().validate().unwrap();
        assert_eq!(bank.words(), ["cat".to_string(), "dog".to_string()]);
        assert_eq!(bank.term(1), Some("dog"));
        assert_eq!(bank.term(2), None);
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.level(), Level::A1);
    }

    #[test]
    fn choices_and_answers_resolve() {
        let bank = cat_dog().validate().unwrap();
        assert_eq!(
            bank.choices("cat").unwrap(),
            ["kedi".to_string(), "köpek".to_string()]
        );
        assert_eq!(bank.answer("dog"), Some("köpek"));
        assert!(bank.is_correct("cat", "kedi"));
        assert!(!bank.is_correct("cat", "köpek"));
        assert!(!bank.is_correct("bird", "kuş"));
    }

    #[test]
    fn empty_bank_is_rejected() {
        let err = WordBankDraft::new(Level::A1, Vec::new())
            .validate()
            .unwrap_err();
        assert_eq!(err, WordBankError::Empty);
    }

    #[test]
    fn duplicate_term_is_rejected() {
        let mut draft = cat_dog();
        draft
            .entries
            .push(WordEntryDraft::new("cat", ["kedi"], "kedi"));
        let err = draft.validate().unwrap_err();
        assert_eq!(
            err,
            WordBankError::DuplicateTerm {
                term: "cat".to_string()
            }
        );
    }

    #[test]
    fn answer_outside_choices_is_rejected() {
        let draft = WordBankDraft::new(
            Level::A1,
            vec![WordEntryDraft::new(
                "bus",
                ["tekne", "otobus", "taksi", "uçak"],
                "otobüs",
            )],
        );
        let err = draft.validate().unwrap_err();
        assert!(matches!(err, WordBankError::AnswerNotAmongChoices { .. }));
    }

    #[test]
    fn term_without_choices_is_rejected() {
        let draft = WordBankDraft::new(
            Level::A1,
            vec![WordEntryDraft::new("cat", Vec::<String>::new(), "kedi")],
        );
        let err = draft.validate().unwrap_err();
        assert_eq!(
            err,
            WordBankError::NoChoices {
                term: "cat".to_string()
            }
        );
    }

    #[test]
    fn repeated_choice_is_rejected() {
        let draft = WordBankDraft::new(
            Level::A1,
            vec![WordEntryDraft::new("cat", ["kedi", "köpek", "kedi"], "kedi")],
        );
        let err = draft.validate().unwrap_err();
        assert_eq!(
            err,
            WordBankError::DuplicateChoice {
                term: "cat".to_string(),
                choice: "kedi".to_string()
            }
        );
    }

    #[test]
    fn missing_answer_key_is_rejected() {
        let words = vec!["cat".to_string()];
        let options = HashMap::from([("cat".to_string(), vec!["kedi".to_string()])]);
        let err = WordBank::new(Level::A1, words, options, HashMap::new()).unwrap_err();
        assert_eq!(
            err,
            WordBankError::MissingAnswer {
                term: "cat".to_string()
            }
        );
    }

    #[test]
    fn draft_deserializes_from_json() {
        let raw = r#"{
            "level": "B2+",
            "entries": [
                { "term": "fame", "choices": ["alev", "ün"], "answer": "ün" }
            ]
        }"#;
        let draft: WordBankDraft = serde_json::from_str(raw).unwrap();
        let bank = draft.validate().unwrap();
        assert_eq!(bank.level(), Level::B2Plus);
        assert_eq!(bank.answer("fame"), Some("ün"));
    }
}
