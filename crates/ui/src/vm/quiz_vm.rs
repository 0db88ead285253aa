use quiz_core::model::{ChoiceKey, QuestionKind, Score};
use services::{QuestionView, QuizEngine, QuizError, QuizLoopService};

use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(ChoiceKey),
    Next,
    Previous,
    Finish,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Continue,
    Completed(Score),
}

/// What the right-hand navigation button does on the current question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimaryAction {
    Next,
    Finish,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    engine: QuizEngine,
}

impl QuizVm {
    #[must_use]
    pub fn new(engine: QuizEngine) -> Self {
        Self { engine }
    }

    #[must_use]
    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    #[must_use]
    pub fn question(&self) -> QuestionView {
        self.engine.question_view()
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        let progress = self.engine.progress();
        format!("Question {}/{}", progress.position, progress.total)
    }

    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        self.engine.progress().percent
    }

    #[must_use]
    pub fn badge(&self) -> Option<&'static str> {
        match self.engine.current_question().kind() {
            QuestionKind::Multiple => Some("SELECT ALL THAT APPLY"),
            QuestionKind::Single => None,
        }
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.engine.is_first()
    }

    #[must_use]
    pub fn primary_action(&self) -> PrimaryAction {
        if self.engine.is_last() {
            PrimaryAction::Finish
        } else {
            PrimaryAction::Next
        }
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if the engine rejects the intent.
    pub fn apply(&mut self, intent: QuizIntent) -> Result<QuizOutcome, ViewError> {
        match intent {
            QuizIntent::Select(key) => self.engine.select_current(&key).map_err(ViewError::from)?,
            QuizIntent::Next => {
                self.engine.next().map_err(ViewError::from)?;
            }
            QuizIntent::Previous => {
                self.engine.previous().map_err(ViewError::from)?;
            }
            QuizIntent::Finish => return Ok(QuizOutcome::Completed(self.engine.finish())),
        }
        Ok(QuizOutcome::Continue)
    }
}

impl From<QuizError> for ViewError {
    fn from(err: QuizError) -> Self {
        match err {
            QuizError::Empty => ViewError::EmptyQuiz,
            _ => ViewError::Unknown,
        }
    }
}

/// # Errors
///
/// Returns `ViewError::EmptyQuiz` when the bank has no questions.
/// Returns `ViewError::Unknown` for other failures.
pub async fn start_quiz(quiz_loop: &QuizLoopService) -> Result<QuizVm, ViewError> {
    let engine = quiz_loop.start_quiz().await.map_err(ViewError::from)?;
    Ok(QuizVm::new(engine))
}
