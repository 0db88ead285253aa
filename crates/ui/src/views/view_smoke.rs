use std::sync::Arc;
use dioxus::prelude::ReadableExt;

use quiz_core::model::{ChoiceKey, Question};
use storage::repository::{InMemoryQuestionRepository, QuestionRepository, StorageError};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_repo};
use crate::vm::QuizIntent;

fn key(raw: &str) -> ChoiceKey {
    ChoiceKey::new(raw).expect("valid key")
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_question_count() {
    let mut harness = setup_view_harness(ViewKind::Home).await;
    harness.rebuild();
    let html = harness.render();

    for expected in ["Code Quiz", "13", "Questions", "Instant results", "Start Quiz"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_score() {
    let mut harness = setup_view_harness(ViewKind::Results {
        correct: 12,
        total: 13,
    })
    .await;
    harness.rebuild();
    let html = harness.render();

    for expected in ["92%", "Outstanding!", "Try Again", "Back to Home"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_rejects_bad_params() {
    let mut harness = setup_view_harness(ViewKind::Results {
        correct: 4,
        total: 0,
    })
    .await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("could not be shown"), "missing error in {html}");
    assert!(html.contains("Back to Home"), "missing home button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz).await;
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();

    for expected in ["Question 1/13", "const", "Previous", "Next"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("SELECT ALL THAT APPLY"), "unexpected badge in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_intents_drive_the_engine() {
    let mut harness = setup_view_harness(ViewKind::Quiz).await;
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let handles = harness.quiz_handles();
    let dispatch = handles.dispatch();
    let vm = handles.vm();

    dispatch.call(QuizIntent::Select(key("C")));
    harness.drive();
    dispatch.call(QuizIntent::Next);
    harness.drive();
    dispatch.call(QuizIntent::Next);
    harness.drive();

    let html = harness.render();
    assert!(html.contains("Question 3/13"), "missing progress in {html}");
    assert!(html.contains("SELECT ALL THAT APPLY"), "missing badge in {html}");

    dispatch.call(QuizIntent::Previous);
    dispatch.call(QuizIntent::Previous);
    harness.drive();

    let current = vm.read().clone().expect("quiz started");
    assert_eq!(current.engine().cursor(), 0);
    let selected: Vec<_> = current.question().selected_keys().into_iter().cloned().collect();
    assert_eq!(selected, vec![key("C")]);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_empty_bank_error() {
    let repo = Arc::new(InMemoryQuestionRepository::default());
    let mut harness = setup_view_harness_with_repo(ViewKind::Quiz, repo).await;
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();

    assert!(
        html.contains("There are no questions to answer yet."),
        "missing empty state in {html}"
    );
}

struct FailingRepo;

#[async_trait::async_trait]
impl QuestionRepository for FailingRepo {
    async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        Err(StorageError::Io("disk unavailable".into()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_storage_error() {
    let mut harness = setup_view_harness_with_repo(ViewKind::Quiz, Arc::new(FailingRepo)).await;
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();

    assert!(
        html.contains("Something went wrong. Please try again."),
        "missing error state in {html}"
    );
}
