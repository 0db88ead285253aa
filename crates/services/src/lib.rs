#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;

pub use error::QuizError;

pub use quiz::{ChoiceView, QuestionView, QuizEngine, QuizLoopService, QuizPhase};
