pub mod auth_service;
pub mod history_service;
pub mod question_service;
pub mod quiz_attempt_service;
pub mod quiz_service;
pub mod quiz_session;

pub use auth_service::AuthService;
pub use history_service::HistoryService;
pub use question_service::QuestionService;
pub use quiz_attempt_service::QuizAttemptService;
pub use quiz_service::{LoadedQuiz, QuizService};
pub use quiz_session::{NavAction, QuizSession};
