use std::collections::{BTreeSet, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::answer::SavedAnswer;
use crate::model::ids::QuestionId;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question must offer at least one choice")]
    NoChoices,

    #[error("choice key cannot be empty")]
    EmptyChoiceKey,

    #[error("choice {key} has no text")]
    EmptyChoiceText { key: String },

    #[error("duplicate choice key: {key}")]
    DuplicateChoice { key: String },

    #[error("answer key {key} is not one of the choices")]
    UnknownAnswerKey { key: String },

    #[error("duplicate answer key: {key}")]
    DuplicateAnswerKey { key: String },

    #[error("{kind} question has an answer of the wrong shape")]
    AnswerShapeMismatch { kind: QuestionKind },

    #[error("multiple-choice question needs at least one correct key")]
    EmptyAnswer,
}

//
// ─── KIND ─────────────────────────────────────────────────────────────────────
//

/// How many choices a question accepts.
///
/// The bank format also accepts the radio/checkbox spelling used by form UIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Exactly one key is selected and exactly one key is correct.
    #[serde(alias = "radio")]
    Single,
    /// Any non-empty subset of keys may be selected; the correct answer is a set.
    #[serde(alias = "checkbox")]
    Multiple,
}

impl QuestionKind {
    #[must_use]
    pub fn is_multiple(self) -> bool {
        matches!(self, QuestionKind::Multiple)
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::Single => f.write_str("single"),
            QuestionKind::Multiple => f.write_str("multiple"),
        }
    }
}

//
// ─── CHOICES ──────────────────────────────────────────────────────────────────
//

/// Short key identifying a choice within a question, e.g. `"A"`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChoiceKey(String);

impl ChoiceKey {
    /// Build a key from raw text. Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyChoiceKey` if nothing remains after trimming.
    pub fn new(raw: impl Into<String>) -> Result<Self, QuestionError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(QuestionError::EmptyChoiceKey);
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ChoiceKey {
    type Error = QuestionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ChoiceKey> for String {
    fn from(key: ChoiceKey) -> Self {
        key.0
    }
}

impl fmt::Debug for ChoiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChoiceKey({})", self.0)
    }
}

impl fmt::Display for ChoiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    key: ChoiceKey,
    text: String,
}

impl Choice {
    #[must_use]
    pub fn key(&self) -> &ChoiceKey {
        &self.key
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

//
// ─── CORRECT ANSWER ───────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorrectAnswer {
    Single(ChoiceKey),
    Multiple(BTreeSet<ChoiceKey>),
}

impl CorrectAnswer {
    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        match self {
            CorrectAnswer::Single(_) => QuestionKind::Single,
            CorrectAnswer::Multiple(_) => QuestionKind::Multiple,
        }
    }

    /// Whether a saved answer earns the point for this question.
    ///
    /// Multi-select answers compare as sets: selection order is irrelevant and
    /// any missing or extra key fails the whole question.
    #[must_use]
    pub fn is_satisfied_by(&self, saved: Option<&SavedAnswer>) -> bool {
        match (self, saved) {
            (CorrectAnswer::Single(expected), Some(SavedAnswer::Single(chosen))) => {
                expected == chosen
            }
            (CorrectAnswer::Multiple(expected), Some(SavedAnswer::Multiple(chosen))) => {
                expected == chosen.keys()
            }
            _ => false,
        }
    }
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// Unvalidated correct answer as it arrives from a question source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerDraft {
    One(String),
    Many(Vec<String>),
}

/// Unvalidated question. `choices` keeps display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub id: QuestionId,
    pub prompt: String,
    pub kind: QuestionKind,
    pub choices: Vec<(String, String)>,
    pub answer: AnswerDraft,
}

impl QuestionDraft {
    /// Validate the draft into an immutable `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the prompt is blank, the choices are empty or
    /// repeat a key, or the answer references unknown keys or has the wrong shape
    /// for the question kind.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if self.choices.is_empty() {
            return Err(QuestionError::NoChoices);
        }

        let mut seen = HashSet::with_capacity(self.choices.len());
        let mut choices = Vec::with_capacity(self.choices.len());
        for (raw_key, text) in self.choices {
            let key = ChoiceKey::new(raw_key)?;
            if text.trim().is_empty() {
                return Err(QuestionError::EmptyChoiceText {
                    key: key.to_string(),
                });
            }
            if !seen.insert(key.clone()) {
                return Err(QuestionError::DuplicateChoice {
                    key: key.to_string(),
                });
            }
            choices.push(Choice { key, text });
        }

        let known = |raw: String| -> Result<ChoiceKey, QuestionError> {
            let key = ChoiceKey::new(raw)?;
            if seen.contains(&key) {
                Ok(key)
            } else {
                Err(QuestionError::UnknownAnswerKey {
                    key: key.to_string(),
                })
            }
        };

        let correct = match (self.kind, self.answer) {
            (QuestionKind::Single, AnswerDraft::One(raw)) => CorrectAnswer::Single(known(raw)?),
            (QuestionKind::Multiple, AnswerDraft::Many(raws)) => {
                if raws.is_empty() {
                    return Err(QuestionError::EmptyAnswer);
                }
                let mut keys = BTreeSet::new();
                for raw in raws {
                    let key = known(raw)?;
                    if keys.contains(&key) {
                        return Err(QuestionError::DuplicateAnswerKey {
                            key: key.to_string(),
                        });
                    }
                    keys.insert(key);
                }
                CorrectAnswer::Multiple(keys)
            }
            (kind, _) => return Err(QuestionError::AnswerShapeMismatch { kind }),
        };

        Ok(Question {
            id: self.id,
            prompt: prompt.to_owned(),
            kind: self.kind,
            choices,
            correct,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    kind: QuestionKind,
    choices: Vec<Choice>,
    correct: CorrectAnswer,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    /// Choices in display order.
    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    #[must_use]
    pub fn correct(&self) -> &CorrectAnswer {
        &self.correct
    }

    #[must_use]
    pub fn has_choice(&self, key: &ChoiceKey) -> bool {
        self.choices.iter().any(|choice| &choice.key == key)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
