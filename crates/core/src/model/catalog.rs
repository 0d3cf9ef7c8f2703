use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::ItemId;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors raised while building an item catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("item catalog must contain at least one item")]
    Empty,

    #[error("item label at position {index} is blank")]
    BlankLabel { index: usize },

    #[error("item label `{label}` appears more than once")]
    Duplicate { label: String },
}

//
// ─── CATALOG ──────────────────────────────────────────────────────────────────
//

/// Fixed, ordered set of quiz items.
///
/// Labels are trimmed, must be non-blank and unique. The order given at
/// construction is the order used for display and for the submitted payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCatalog {
    items: Vec<ItemId>,
}

impl ItemCatalog {
    /// Build a catalog from labels in display order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` when no labels are given,
    /// `CatalogError::BlankLabel` for whitespace-only labels and
    /// `CatalogError::Duplicate` when a label repeats.
    pub fn new<I, S>(labels: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut items = Vec::new();

        for (index, label) in labels.into_iter().enumerate() {
            let label = label.as_ref().trim();
            if label.is_empty() {
                return Err(CatalogError::BlankLabel { index });
            }
            if !seen.insert(label.to_owned()) {
                return Err(CatalogError::Duplicate {
                    label: label.to_owned(),
                });
            }
            items.push(ItemId::new(label));
        }

        if items.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Self { items })
    }

    /// Parse a comma-separated list such as `"A, B, C"`.
    ///
    /// # Errors
    ///
    /// Same as [`ItemCatalog::new`].
    pub fn parse_list(raw: &str) -> Result<Self, CatalogError> {
        if raw.trim().is_empty() {
            return Err(CatalogError::Empty);
        }
        Self::new(raw.split(','))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for a constructed catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }
}
