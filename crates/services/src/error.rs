//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::SessionError;
use storage::repository::StorageError;

/// Errors emitted by the quiz engine and the services that start it.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no questions available for quiz")]
    Empty,
    #[error("quiz already completed")]
    Completed,
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
