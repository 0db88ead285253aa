use quiz_core::model::Question;

use crate::record::parse_questions;
use crate::repository::StorageError;

const BUILTIN_BANK: &str = include_str!("../assets/questions.json");

/// The programming quiz that ships with the app.
///
/// # Errors
///
/// Returns `StorageError` if the bundled JSON is malformed.
pub fn builtin_questions() -> Result<Vec<Question>, StorageError> {
    parse_questions(BUILTIN_BANK)
}
