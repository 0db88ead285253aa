mod home_vm;
mod quiz_vm;
mod results_vm;

pub use home_vm::{HomeVm, map_home};
pub use quiz_vm::{PrimaryAction, QuizIntent, QuizOutcome, QuizVm, start_quiz};
pub use results_vm::{ResultsVm, map_results};
