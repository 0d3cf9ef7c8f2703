use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors that can occur while reading a verdict from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JudgmentError {
    #[error("unrecognized verdict: {0}")]
    InvalidVerdict(String),
}

//
// ─── VERDICT ──────────────────────────────────────────────────────────────────
//

/// A judgment the user can select for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Correct => "correct",
            Verdict::Incorrect => "incorrect",
        }
    }
}

impl FromStr for Verdict {
    type Err = JudgmentError;

    /// Accepts the wire names plus the short forms used at the prompt
    /// (`c`/`o` for correct, `x`/`i` for incorrect), case-insensitively.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "correct" | "c" | "o" => Ok(Self::Correct),
            "incorrect" | "i" | "x" => Ok(Self::Incorrect),
            _ => Err(JudgmentError::InvalidVerdict(raw.to_string())),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── JUDGMENT ─────────────────────────────────────────────────────────────────
//

/// Current state of a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Judgment {
    #[default]
    Unanswered,
    Correct,
    Incorrect,
}

impl Judgment {
    #[must_use]
    pub fn is_answered(self) -> bool {
        !matches!(self, Judgment::Unanswered)
    }

    /// The selected verdict, if any.
    #[must_use]
    pub fn verdict(self) -> Option<Verdict> {
        match self {
            Judgment::Unanswered => None,
            Judgment::Correct => Some(Verdict::Correct),
            Judgment::Incorrect => Some(Verdict::Incorrect),
        }
    }
}

impl From<Verdict> for Judgment {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Correct => Judgment::Correct,
            Verdict::Incorrect => Judgment::Incorrect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_parsing_accepts_short_forms() {
        assert_eq!("correct".parse::<Verdict>().unwrap(), Verdict::Correct);
        assert_eq!(" O ".parse::<Verdict>().unwrap(), Verdict::Correct);
        assert_eq!("x".parse::<Verdict>().unwrap(), Verdict::Incorrect);
        let err = "maybe".parse::<Verdict>().unwrap_err();
        assert!(matches!(err, JudgmentError::InvalidVerdict(raw) if raw == "maybe"));
    }

    #[test]
    fn judgment_wire_names_are_lowercase() {
        assert_eq!(serde_json::to_string(&Judgment::Correct).unwrap(), "\"correct\"");
        assert_eq!(
            serde_json::to_string(&Judgment::Unanswered).unwrap(),
            "\"unanswered\""
        );
    }

    #[test]
    fn verdict_maps_to_answered_judgment() {
        let judgment = Judgment::from(Verdict::Incorrect);
        assert!(judgment.is_answered());
        assert_eq!(judgment.verdict(), Some(Verdict::Incorrect));
        assert!(!Judgment::default().is_answered());
    }
}
