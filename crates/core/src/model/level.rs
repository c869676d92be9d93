use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown level: {raw} (expected one of A1, A2-B1, B2+)")]
pub struct LevelParseError {
    raw: String,
}

impl LevelParseError {
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

//
// ─── LEVEL ────────────────────────────────────────────────────────────────────
//

/// Difficulty band a word bank belongs to.
///
/// Labels follow the CEFR bands shown on the menu:
/// - `A1`: beginner vocabulary
/// - `A2B1`: elementary to intermediate
/// - `B2Plus`: upper intermediate and beyond
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "A1")]
    A1,
    #[serde(rename = "A2-B1", alias = "A2B1")]
    A2B1,
    #[serde(rename = "B2+", alias = "B2Plus")]
    B2Plus,
}

impl Level {
    /// Every level, in menu order.
    pub const ALL: [Level; 3] = [Level::A1, Level::A2B1, Level::B2Plus];

    /// Label shown to the user.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Level::A1 => "A1",
            Level::A2B1 => "A2-B1",
            Level::B2Plus => "B2+",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Level {
    type Err = LevelParseError;

    /// Accepts the menu labels case-insensitively, plus `a2b1` and `b2plus`
    /// for shells where `+` and `-` are awkward.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a1" => Ok(Level::A1),
            "a2-b1" | "a2b1" => Ok(Level::A2B1),
            "b2+" | "b2plus" => Ok(Level::B2Plus),
            _ => Err(LevelParseError { raw: s.to_string() }),
        }
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_menu() {
        let labels: Vec<_> = Level::ALL.iter().map(|level| level.label()).collect();
        assert_eq!(labels, vec!["A1", "A2-B1", "B2+"]);
    }

    #[test]
    fn parses_labels_and_aliases() {
        assert_eq!("a1".parse::<Level>().unwrap(), Level::A1);
        assert_eq!("A2-B1".parse::<Level>().unwrap(), Level::A2B1);
        assert_eq!("a2b1".parse::<Level>().unwrap(), Level::A2B1);
        assert_eq!(" B2+ ".parse::<Level>().unwrap(), Level::B2Plus);
        assert_eq!("b2plus".parse::<Level>().unwrap(), Level::B2Plus);
    }

    #[test]
    fn rejects_unknown_level() {
        let err = "C1".parse::<Level>().unwrap_err();
        assert_eq!(err.raw(), "C1");
    }

    #[test]
    fn serde_uses_labels() {
        let json = serde_json::to_string(&Level::B2Plus).unwrap();
        assert_eq!(json, "\"B2+\"");
        let level: Level = serde_json::from_str("\"A2-B1\"").unwrap();
        assert_eq!(level, Level::A2B1);
    }
}
