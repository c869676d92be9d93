use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use quiz_core::model::{Level, WordBank, WordBankDraft};
use tracing::debug;

use crate::error::ProviderError;

const A1_JSON: &str = include_str!("../data/a1.json");
const A2_B1_JSON: &str = include_str!("../data/a2_b1.json");
const B2_PLUS_JSON: &str = include_str!("../data/b2_plus.json");

/// Supplies validated word banks per level.
pub trait WordBankProvider: Send + Sync {
    /// Levels with a bank, in menu order.
    fn levels(&self) -> Vec<Level>;

    /// # Errors
    ///
    /// Returns `ProviderError::UnknownLevel` when no bank exists for `level`.
    fn bank(&self, level: Level) -> Result<Arc<WordBank>, ProviderError>;
}

/// A word bank file holds either one bank document or a list of them.
///
/// The shape is picked from the first token so serde reports the failing
/// field with its line and column.
fn parse_bank_file(raw: &str) -> Result<Vec<WordBankDraft>, serde_json::Error> {
    if raw.trim_start().starts_with('[') {
        serde_json::from_str(raw)
    } else {
        serde_json::from_str::<WordBankDraft>(raw).map(|draft| vec![draft])
    }
}

/// Word banks parsed and validated once, then served from memory.
#[derive(Debug, Clone)]
pub struct StaticWordBanks {
    banks: BTreeMap<Level, Arc<WordBank>>,
}

impl StaticWordBanks {
    /// The A1, A2-B1 and B2+ banks shipped with the application.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` if the embedded data fails to parse or validate.
    pub fn builtin() -> Result<Self, ProviderError> {
        let mut drafts = Vec::with_capacity(3);
        for raw in [A1_JSON, A2_B1_JSON, B2_PLUS_JSON] {
            drafts.extend(parse_bank_file(raw)?);
        }
        Self::from_drafts(drafts)
    }

    /// Load banks from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Io` if the file cannot be read, and the errors of
    /// `from_json_str` otherwise.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ProviderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = raw.len(), "loading word banks");
        Self::from_json_str(&raw)
    }

    /// # Errors
    ///
    /// Returns `ProviderError::Json` for malformed JSON and the errors of
    /// `from_drafts` for invalid content.
    pub fn from_json_str(raw: &str) -> Result<Self, ProviderError> {
        Self::from_drafts(parse_bank_file(raw)?)
    }

    /// # Errors
    ///
    /// Returns `ProviderError::NoBanks` for an empty list,
    /// `ProviderError::DuplicateLevel` when a level repeats, and
    /// `ProviderError::InvalidBank` when a bank breaks its invariants.
    pub fn from_drafts(drafts: Vec<WordBankDraft>) -> Result<Self, ProviderError> {
        if drafts.is_empty() {
            return Err(ProviderError::NoBanks);
        }

        let mut banks = BTreeMap::new();
        for draft in drafts {
            let level = draft.level;
            if banks.contains_key(&level) {
                return Err(ProviderError::DuplicateLevel(level));
            }
            let bank = draft
                .validate()
                .map_err(|source| ProviderError::InvalidBank { level, source })?;
            banks.insert(level, Arc::new(bank));
        }

        Ok(Self { banks })
    }

    /// Term count per level, in menu order.
    #[must_use]
    pub fn sizes(&self) -> Vec<(Level, usize)> {
        self.banks
            .iter()
            .map(|(level, bank)| (*level, bank.len()))
            .collect()
    }
}

impl WordBankProvider for StaticWordBanks {
    fn levels(&self) -> Vec<Level> {
        self.banks.keys().copied().collect()
    }

    fn bank(&self, level: Level) -> Result<Arc<WordBank>, ProviderError> {
        self.banks
            .get(&level)
            .cloned()
            .ok_or(ProviderError::UnknownLevel(level))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
