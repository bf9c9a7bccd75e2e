pub mod api_client;
pub mod memory;
pub mod question_repository;
pub mod quiz_repository;

pub use api_client::RestClient;
pub use memory::InMemoryApi;
pub use question_repository::{HttpQuestionRepository, QuestionRepository};
pub use quiz_repository::{HttpQuizRepository, QuizRepository};
