use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

use crate::model::catalog::ItemCatalog;
use crate::model::ids::ItemId;
use crate::model::judgment::{Judgment, Verdict};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerError {
    #[error("`{label}` is not part of the item catalog")]
    UnknownItem { label: String },
}

//
// ─── PROGRESS ─────────────────────────────────────────────────────────────────
//

/// Aggregated view of answer progress, useful for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

//
// ─── ANSWER SET ───────────────────────────────────────────────────────────────
//

/// Per-item judgments for a whole catalog.
///
/// Every catalog item is present from construction on; entries are never
/// removed. Iteration and serialization follow catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet {
    entries: Vec<(ItemId, Judgment)>,
}

impl AnswerSet {
    /// Create an answer set with every item `Unanswered`.
    #[must_use]
    pub fn new(catalog: &ItemCatalog) -> Self {
        Self {
            entries: catalog
                .items()
                .iter()
                .map(|item| (item.clone(), Judgment::Unanswered))
                .collect(),
        }
    }

    /// Replace the judgment for `item`.
    ///
    /// Returns the previous judgment.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError::UnknownItem` if `item` is not in the catalog.
    pub fn set_judgment(&mut self, item: &str, verdict: Verdict) -> Result<Judgment, AnswerError> {
        let slot = self
            .entries
            .iter_mut()
            .find(|(id, _)| id.as_str() == item)
            .map(|(_, judgment)| judgment)
            .ok_or_else(|| AnswerError::UnknownItem {
                label: item.to_string(),
            })?;
        Ok(std::mem::replace(slot, verdict.into()))
    }

    /// Judgment for `item`, or `None` if it is not in the catalog.
    #[must_use]
    pub fn judgment(&self, item: &str) -> Option<Judgment> {
        self.entries
            .iter()
            .find(|(id, _)| id.as_str() == item)
            .map(|(_, judgment)| *judgment)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, Judgment)> {
        self.entries.iter().map(|(id, judgment)| (id, *judgment))
    }

    /// Number of catalog items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of items that have a verdict.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, judgment)| judgment.is_answered())
            .count()
    }

    /// Share of answered items in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_fraction(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.answered_count() as f64 / self.entries.len() as f64
    }

    /// Progress as a whole percentage, rounded to the nearest integer.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn progress_percent(&self) -> u8 {
        (self.progress_fraction() * 100.0).round().clamp(0.0, 100.0) as u8
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|(_, judgment)| judgment.is_answered())
    }

    #[must_use]
    pub fn progress(&self) -> AnswerProgress {
        let answered = self.answered_count();
        AnswerProgress {
            total: self.len(),
            answered,
            remaining: self.len().saturating_sub(answered),
            is_complete: self.is_complete(),
        }
    }
}

impl Serialize for AnswerSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, judgment) in &self.entries {
            map.serialize_entry(id, judgment)?;
        }
        map.end()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
