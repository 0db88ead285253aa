use async_trait::async_trait;
use quiz_core::model::{Question, QuestionError, QuestionId};
use std::sync::Arc;
use thiserror::Error;

use crate::builtin::builtin_questions;

/// Errors surfaced by question sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("invalid question {id}: {source}")]
    InvalidQuestion {
        id: QuestionId,
        #[source]
        source: QuestionError,
    },

    #[error("duplicate question id: {0}")]
    DuplicateQuestionId(QuestionId),
}

/// Source of the ordered question list a quiz runs over.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Load every question, in display order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source cannot be read or holds invalid records.
    async fn list_questions(&self) -> Result<Vec<Question>, StorageError>;
}

/// Question source backed by an already-built list.
#[derive(Clone, Debug, Default)]
pub struct InMemoryQuestionRepository {
    questions: Arc<[Question]>,
}

impl InMemoryQuestionRepository {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: questions.into(),
        }
    }

    /// Repository over the bundled question bank.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the bundled bank fails to parse.
    pub fn builtin() -> Result<Self, StorageError> {
        Ok(Self::new(builtin_questions()?))
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        Ok(self.questions.to_vec())
    }
}
