#![forbid(unsafe_code)]

pub mod builtin;
pub mod json;
pub mod record;
pub mod repository;

pub use builtin::builtin_questions;
pub use json::JsonQuestionRepository;
pub use record::{QuestionRecord, parse_questions};
pub use repository::{InMemoryQuestionRepository, QuestionRepository, StorageError};
