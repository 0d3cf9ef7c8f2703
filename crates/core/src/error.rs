use thiserror::Error;

use crate::model::{AnswerError, CatalogError, JudgmentError};

/// Any error raised by the quiz domain model.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Answer(#[from] AnswerError),
    #[error(transparent)]
    Judgment(#[from] JudgmentError),
}
