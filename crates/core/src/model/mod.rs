mod answers;
mod catalog;
mod ids;
mod judgment;
mod outcome;

pub use ids::ItemId;

pub use answers::{AnswerError, AnswerProgress, AnswerSet};
pub use catalog::{CatalogError, ItemCatalog};
pub use judgment::{Judgment, JudgmentError, Verdict};
pub use outcome::{Messages, Notice, SubmissionOutcome};
