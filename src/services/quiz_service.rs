use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Quiz, QuizQuestion},
        dto::request::QuizRequest,
    },
    repositories::{QuestionRepository, QuizRepository},
};

/// A quiz with the questions that belong to it, ready to be taken.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedQuiz {
    pub quiz: Quiz,
    pub questions: Vec<QuizQuestion>,
}

pub struct QuizService {
    quizzes: Arc<dyn QuizRepository>,
    questions: Arc<dyn QuestionRepository>,
}

impl QuizService {
    pub fn new(quizzes: Arc<dyn QuizRepository>, questions: Arc<dyn QuestionRepository>) -> Self {
        Self { quizzes, questions }
    }

    pub async fn list_quizzes(&self) -> AppResult<Vec<Quiz>> {
        self.quizzes.list_quizzes().await
    }

    pub async fn get_quiz(&self, id: &str) -> AppResult<Quiz> {
        let quiz = self
            .quizzes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))?;

        Ok(quiz)
    }

    /// Fetches the quiz and its questions for a taking session. A quiz without
    /// questions cannot be taken and is reported as not found.
    pub async fn load_quiz(&self, id: &str) -> AppResult<LoadedQuiz> {
        let quiz = self.get_quiz(id).await.map_err(|err| {
            log::error!("Failed to load quiz {}: {}", id, err);
            err
        })?;

        let questions = self.questions.find_by_quiz(id).await.map_err(|err| {
            log::error!("Failed to load questions for quiz {}: {}", id, err);
            err
        })?;

        if questions.is_empty() {
            return Err(AppError::NotFound(format!(
                "Quiz '{}' has no questions",
                quiz.title
            )));
        }

        log::info!(
            "Loaded quiz '{}' ({}) with {} questions",
            quiz.title,
            quiz.id,
            questions.len()
        );
        Ok(LoadedQuiz { quiz, questions })
    }

    pub async fn create_quiz(&self, request: QuizRequest) -> AppResult<Quiz> {
        request.validate()?;
        self.quizzes.create(normalize(request)).await
    }

    pub async fn update_quiz(&self, id: &str, request: QuizRequest) -> AppResult<Quiz> {
        request.validate()?;
        let quiz = self.quizzes.update(id, normalize(request)).await?;
        log::info!("Updated quiz {}", quiz.id);
        Ok(quiz)
    }

    pub async fn delete_quiz(&self, id: &str) -> AppResult<()> {
        self.quizzes.delete(id).await
    }
}

fn normalize(mut request: QuizRequest) -> QuizRequest {
    request.title = request.title.trim().to_string();
    request.category = request.category.trim().to_string();
    request.description = request.description.trim().to_string();
    request
}
