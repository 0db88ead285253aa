use std::collections::HashSet;
use std::fmt;

use quiz_core::model::{AnswerDraft, Question, QuestionDraft, QuestionId, QuestionKind};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::repository::StorageError;

/// Serialized shape of a question in a bank file.
///
/// ```json
/// { "id": 3, "question": "...", "type": "multiple",
///   "choices": { "A": "...", "B": "..." }, "answer": ["A", "B"] }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRecord {
    pub id: QuestionId,
    #[serde(rename = "question")]
    pub prompt: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(deserialize_with = "ordered_choices")]
    pub choices: Vec<(String, String)>,
    pub answer: AnswerRecord,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AnswerRecord {
    One(String),
    Many(Vec<String>),
}

impl QuestionRecord {
    /// Convert the record into a validated domain `Question`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidQuestion` if the record fails validation.
    pub fn into_question(self) -> Result<Question, StorageError> {
        let id = self.id;
        let answer = match self.answer {
            AnswerRecord::One(key) => AnswerDraft::One(key),
            AnswerRecord::Many(keys) => AnswerDraft::Many(keys),
        };
        QuestionDraft {
            id,
            prompt: self.prompt,
            kind: self.kind,
            choices: self.choices,
            answer,
        }
        .validate()
        .map_err(|source| StorageError::InvalidQuestion { id, source })
    }
}

/// Parse a JSON array of question records into validated questions.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON,
/// `StorageError::InvalidQuestion` for records that fail validation and
/// `StorageError::DuplicateQuestionId` when two records share an id.
pub fn parse_questions(json: &str) -> Result<Vec<Question>, StorageError> {
    let records: Vec<QuestionRecord> =
        serde_json::from_str(json).map_err(|e| StorageError::Serialization(e.to_string()))?;

    let mut ids = HashSet::with_capacity(records.len());
    let mut questions = Vec::with_capacity(records.len());
    for record in records {
        if !ids.insert(record.id) {
            return Err(StorageError::DuplicateQuestionId(record.id));
        }
        questions.push(record.into_question()?);
    }
    Ok(questions)
}

// JSON objects carry the display order of choices; a map type would lose it.
fn ordered_choices<'de, D>(deserializer: D) -> Result<Vec<(String, String)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OrderedChoices;

    impl<'de> Visitor<'de> for OrderedChoices {
        type Value = Vec<(String, String)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of choice keys to choice text")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut choices = Vec::with_capacity(map.size_hint().unwrap_or(4));
            while let Some(entry) = map.next_entry::<String, String>()? {
                choices.push(entry);
            }
            Ok(choices)
        }
    }

    deserializer.deserialize_map(OrderedChoices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{ChoiceKey, CorrectAnswer, QuestionError};

    #[test]
    fn parses_single_and_multiple_records() {
        let json = r#"[
            {"id": 1, "question": "Pick B", "type": "radio",
             "choices": {"A": "a", "B": "b"}, "answer": "B"},
            {"id": 2, "question": "Pick A and C", "type": "checkbox",
             "choices": {"A": "a", "B": "b", "C": "c"}, "answer": ["C", "A"]}
        ]"#;

        let questions = parse_questions(json).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].kind(), QuestionKind::Single);
        assert_eq!(questions[1].kind(), QuestionKind::Multiple);

        let CorrectAnswer::Multiple(keys) = questions[1].correct() else {
            panic!("expected multiple answer");
        };
        let keys: Vec<_> = keys.iter().map(ChoiceKey::as_str).collect();
        assert_eq!(keys, ["A", "C"]);
    }

    #[test]
    fn choice_order_follows_document_order() {
        let json = r#"[{"id": 1, "question": "Order", "type": "single",
            "choices": {"C": "third", "A": "first", "B": "second"}, "answer": "A"}]"#;

        let questions = parse_questions(json).unwrap();
        let keys: Vec<_> = questions[0]
            .choices()
            .iter()
            .map(|c| c.key().as_str())
            .collect();
        assert_eq!(keys, ["C", "A", "B"]);
    }

    #[test]
    fn invalid_record_reports_question_id() {
        let json = r#"[{"id": 7, "question": "Bad", "type": "single",
            "choices": {"A": "a"}, "answer": "Z"}]"#;

        let err = parse_questions(json).unwrap_err();
        assert!(matches!(
            err,
            StorageError::InvalidQuestion {
                id,
                source: QuestionError::UnknownAnswerKey { .. },
            } if id == QuestionId::new(7)
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"[
            {"id": 1, "question": "One", "type": "single", "choices": {"A": "a"}, "answer": "A"},
            {"id": 1, "question": "Two", "type": "single", "choices": {"A": "a"}, "answer": "A"}
        ]"#;

        let err = parse_questions(json).unwrap_err();
        assert!(matches!(err, StorageError::DuplicateQuestionId(id) if id == QuestionId::new(1)));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = parse_questions("{not json").unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));

        let err = parse_questions(r#"[{"id": 1, "question": "x", "type": "essay",
            "choices": {"A": "a"}, "answer": "A"}]"#)
        .unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }
}
