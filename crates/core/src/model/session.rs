use std::sync::Arc;

use thiserror::Error;

use crate::model::answer::{SavedAnswer, Selection};
use crate::model::question::{ChoiceKey, Question, QuestionKind};
use crate::model::score::{QuizProgress, Score};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("a quiz needs at least one question")]
    EmptyBank,

    #[error("question index {index} is out of range (len {len})")]
    QuestionOutOfRange { index: usize, len: usize },

    #[error("question {index} has no choice {key}")]
    UnknownChoice { index: usize, key: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Outcome of a navigation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The cursor moved; `restored` is what was saved for the new question.
    Moved {
        cursor: usize,
        restored: Option<SavedAnswer>,
    },
    /// The move would leave the bank, so nothing changed.
    AtBoundary { cursor: usize },
}

impl Navigation {
    #[must_use]
    pub fn cursor(&self) -> usize {
        match self {
            Navigation::Moved { cursor, .. } | Navigation::AtBoundary { cursor } => *cursor,
        }
    }

    #[must_use]
    pub fn moved(&self) -> bool {
        matches!(self, Navigation::Moved { .. })
    }
}

/// Answer state for one pass through a question bank.
///
/// Holds one slot per question. A slot's shape always matches its question's
/// kind and a multi-select slot is never an empty set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    questions: Arc<[Question]>,
    cursor: usize,
    answers: Vec<Option<SavedAnswer>>,
}

impl QuizSession {
    /// Start a fresh session: cursor on the first question, nothing answered.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyBank` if `questions` is empty.
    pub fn new(questions: impl Into<Arc<[Question]>>) -> Result<Self, SessionError> {
        let questions = questions.into();
        if questions.is_empty() {
            return Err(SessionError::EmptyBank);
        }
        let answers = vec![None; questions.len()];
        Ok(Self {
            questions,
            cursor: 0,
            answers,
        })
    }

    /// A blank session over the same questions.
    #[must_use]
    pub fn restarted(&self) -> Self {
        Self {
            questions: Arc::clone(&self.questions),
            cursor: 0,
            answers: vec![None; self.questions.len()],
        }
    }

    /// The shared question list. Cloning the `Arc` is how a retry reuses the bank.
    #[must_use]
    pub fn questions(&self) -> &Arc<[Question]> {
        &self.questions
    }

    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.cursor == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.cursor + 1 == self.questions.len()
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.cursor]
    }

    #[must_use]
    pub fn answer(&self, index: usize) -> Option<&SavedAnswer> {
        self.answers.get(index).and_then(Option::as_ref)
    }

    #[must_use]
    pub fn current_answer(&self) -> Option<&SavedAnswer> {
        self.answer(self.cursor)
    }

    #[must_use]
    pub fn answers(&self) -> &[Option<SavedAnswer>] {
        &self.answers
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress::at(self.cursor, self.questions.len())
    }

    /// Record a tap on `key` for the question at `index`.
    ///
    /// Single-choice questions replace the saved key. Multi-select questions
    /// toggle `key`; removing the last key clears the slot.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::QuestionOutOfRange` or `SessionError::UnknownChoice`
    /// for inputs that do not belong to the bank. The session is left untouched.
    pub fn select_choice(&mut self, index: usize, key: &ChoiceKey) -> Result<(), SessionError> {
        let question = self
            .questions
            .get(index)
            .ok_or(SessionError::QuestionOutOfRange {
                index,
                len: self.questions.len(),
            })?;
        if !question.has_choice(key) {
            return Err(SessionError::UnknownChoice {
                index,
                key: key.to_string(),
            });
        }

        let slot = &mut self.answers[index];
        *slot = match (question.kind(), slot.take()) {
            (QuestionKind::Single, _) => Some(SavedAnswer::Single(key.clone())),
            (QuestionKind::Multiple, Some(SavedAnswer::Multiple(selection))) => {
                selection.toggled(key).map(SavedAnswer::Multiple)
            }
            (QuestionKind::Multiple, _) => {
                Some(SavedAnswer::Multiple(Selection::single(key.clone())))
            }
        };
        Ok(())
    }

    /// Move the cursor one step. Steps past either end are no-ops.
    pub fn navigate(&mut self, direction: Direction) -> Navigation {
        let target = match direction {
            Direction::Forward => self.cursor.checked_add(1),
            Direction::Backward => self.cursor.checked_sub(1),
        };

        match target {
            Some(next) if next < self.questions.len() => {
                self.cursor = next;
                Navigation::Moved {
                    cursor: next,
                    restored: self.answers[next].clone(),
                }
            }
            _ => Navigation::AtBoundary {
                cursor: self.cursor,
            },
        }
    }

    /// Count questions whose saved answer matches the correct one.
    ///
    /// Unanswered questions count as wrong.
    #[must_use]
    pub fn compute_score(&self) -> Score {
        let correct = self
            .questions
            .iter()
            .zip(&self.answers)
            .filter(|(question, saved)| question.correct().is_satisfied_by(saved.as_ref()))
            .count();
        Score::tally(correct, self.questions.len())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
