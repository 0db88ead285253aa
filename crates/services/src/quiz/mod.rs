mod engine;
mod view;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use engine::{QuizEngine, QuizPhase};
pub use view::{ChoiceView, QuestionView};
pub use workflow::QuizLoopService;
