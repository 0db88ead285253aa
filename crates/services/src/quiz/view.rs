use quiz_core::model::{ChoiceKey, QuestionId, QuestionKind, QuizProgress, QuizSession};

/// One row of the choice list, with its selection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceView {
    pub key: ChoiceKey,
    pub text: String,
    pub selected: bool,
}

/// Everything the UI needs to draw the question under the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub index: usize,
    pub id: QuestionId,
    pub prompt: String,
    pub kind: QuestionKind,
    pub choices: Vec<ChoiceView>,
    pub progress: QuizProgress,
    pub is_first: bool,
    pub is_last: bool,
}

impl QuestionView {
    #[must_use]
    pub fn from_session(session: &QuizSession) -> Self {
        let question = session.current_question();
        let saved = session.current_answer();

        let choices = question
            .choices()
            .iter()
            .map(|choice| ChoiceView {
                key: choice.key().clone(),
                text: choice.text().to_owned(),
                selected: saved.is_some_and(|answer| answer.contains(choice.key())),
            })
            .collect();

        Self {
            index: session.cursor(),
            id: question.id(),
            prompt: question.prompt().to_owned(),
            kind: question.kind(),
            choices,
            progress: session.progress(),
            is_first: session.is_first(),
            is_last: session.is_last(),
        }
    }

    /// Keys currently marked as selected, in display order.
    #[must_use]
    pub fn selected_keys(&self) -> Vec<&ChoiceKey> {
        self.choices
            .iter()
            .filter(|choice| choice.selected)
            .map(|choice| &choice.key)
            .collect()
    }
}
