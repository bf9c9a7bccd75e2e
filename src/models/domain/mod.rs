pub mod history_entry;
pub mod quiz;
pub mod quiz_attempt;
pub mod quiz_question;
pub mod user;
pub use history_entry::HistoryEntry;
pub use quiz::{Difficulty, Quiz};
pub use quiz_attempt::AttemptResult;
pub use quiz_question::QuizQuestion;
pub use user::{User, UserRole};
