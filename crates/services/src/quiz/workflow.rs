use std::sync::Arc;

use storage::repository::QuestionRepository;

use super::engine::QuizEngine;
use crate::error::QuizError;

/// Starts quiz attempts from a question source.
#[derive(Clone)]
pub struct QuizLoopService {
    questions: Arc<dyn QuestionRepository>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    /// Load the bank and start a new attempt.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if the bank has no questions, or
    /// `QuizError::Storage` if it cannot be loaded.
    pub async fn start_quiz(&self) -> Result<QuizEngine, QuizError> {
        let questions = self.questions.list_questions().await?;
        QuizEngine::start(questions)
    }

    /// Number of questions an attempt would cover.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Storage` if the bank cannot be loaded.
    pub async fn question_count(&self) -> Result<usize, QuizError> {
        Ok(self.questions.list_questions().await?.len())
    }
}
