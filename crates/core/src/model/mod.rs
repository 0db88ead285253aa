mod answer;
mod ids;
mod question;
mod score;
mod session;

pub use ids::QuestionId;

pub use answer::{SavedAnswer, Selection};
pub use question::{
    AnswerDraft, Choice, ChoiceKey, CorrectAnswer, Question, QuestionDraft, QuestionError,
    QuestionKind,
};
pub use score::{Performance, QuizProgress, Score, ScoreError};
pub use session::{Direction, Navigation, QuizSession, SessionError};
