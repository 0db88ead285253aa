use std::fmt;
use std::sync::Arc;

use quiz_core::model::{
    ChoiceKey, Direction, Navigation, Question, QuizProgress, QuizSession, SavedAnswer, Score,
    SessionError,
};

use super::view::QuestionView;
use crate::error::QuizError;

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Where a quiz is in its lifecycle. A quiz that has not started has no engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    InProgress,
    Completed(Score),
}

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

/// Drives one attempt at a quiz: selection, navigation and the final tally.
///
/// All operations are synchronous and take effect immediately; any animation
/// around them is the caller's business.
#[derive(Clone, PartialEq, Eq)]
pub struct QuizEngine {
    session: QuizSession,
    phase: QuizPhase,
}

impl QuizEngine {
    /// Start a new attempt over `questions`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if there are no questions.
    pub fn start(questions: impl Into<Arc<[Question]>>) -> Result<Self, QuizError> {
        let session = match QuizSession::new(questions) {
            Ok(session) => session,
            Err(SessionError::EmptyBank) => return Err(QuizError::Empty),
            Err(err) => return Err(err.into()),
        };
        tracing::info!(questions = session.len(), "quiz started");

        Ok(Self {
            session,
            phase: QuizPhase::InProgress,
        })
    }

    /// A fresh attempt over the same questions.
    #[must_use]
    pub fn restart(&self) -> Self {
        tracing::info!(questions = self.session.len(), "quiz restarted");
        Self {
            session: self.session.restarted(),
            phase: QuizPhase::InProgress,
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.phase, QuizPhase::Completed(_))
    }

    /// Final score, once the quiz is finished.
    #[must_use]
    pub fn score(&self) -> Option<Score> {
        match self.phase {
            QuizPhase::Completed(score) => Some(score),
            QuizPhase::InProgress => None,
        }
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.session.cursor()
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.session.len()
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.session.is_first()
    }

    /// True on the final question, where the UI offers "Finish" instead of "Next".
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.session.is_last()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        self.session.progress()
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        self.session.current_question()
    }

    #[must_use]
    pub fn current_answer(&self) -> Option<&SavedAnswer> {
        self.session.current_answer()
    }

    #[must_use]
    pub fn question_view(&self) -> QuestionView {
        QuestionView::from_session(&self.session)
    }

    fn ensure_in_progress(&self) -> Result<(), QuizError> {
        if self.is_complete() {
            return Err(QuizError::Completed);
        }
        Ok(())
    }

    /// Record a tap on `key` for the question at `index`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` after `finish`, or `QuizError::Session` if
    /// `index` or `key` is not part of the quiz.
    pub fn select_choice(&mut self, index: usize, key: &ChoiceKey) -> Result<(), QuizError> {
        self.ensure_in_progress()?;
        if let Err(err) = self.session.select_choice(index, key) {
            tracing::warn!(index, %key, error = %err, "rejected selection");
            return Err(err.into());
        }
        tracing::debug!(index, %key, answer = ?self.session.answer(index), "selection updated");
        Ok(())
    }

    /// Record a tap on `key` for the question under the cursor.
    ///
    /// # Errors
    ///
    /// See [`QuizEngine::select_choice`].
    pub fn select_current(&mut self, key: &ChoiceKey) -> Result<(), QuizError> {
        self.select_choice(self.session.cursor(), key)
    }

    /// Step the cursor; stepping past either end leaves everything unchanged.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` after `finish`.
    pub fn navigate(&mut self, direction: Direction) -> Result<Navigation, QuizError> {
        self.ensure_in_progress()?;
        let navigation = self.session.navigate(direction);
        tracing::debug!(
            ?direction,
            cursor = navigation.cursor(),
            moved = navigation.moved(),
            "navigate"
        );
        Ok(navigation)
    }

    /// # Errors
    ///
    /// Returns `QuizError::Completed` after `finish`.
    pub fn next(&mut self) -> Result<Navigation, QuizError> {
        self.navigate(Direction::Forward)
    }

    /// # Errors
    ///
    /// Returns `QuizError::Completed` after `finish`.
    pub fn previous(&mut self) -> Result<Navigation, QuizError> {
        self.navigate(Direction::Backward)
    }

    /// Score the attempt and move to the completed phase.
    ///
    /// Unanswered questions count as wrong. Calling this again returns the same
    /// score.
    pub fn finish(&mut self) -> Score {
        if let QuizPhase::Completed(score) = self.phase {
            return score;
        }
        let score = self.session.compute_score();
        self.phase = QuizPhase::Completed(score);
        tracing::info!(
            correct = score.correct(),
            total = score.total(),
            percentage = score.percentage(),
            answered = self.session.answered_count(),
            "quiz finished"
        );
        score
    }
}

impl fmt::Debug for QuizEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizEngine")
            .field("questions_len", &self.session.len())
            .field("cursor", &self.session.cursor())
            .field("answered", &self.session.answered_count())
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
