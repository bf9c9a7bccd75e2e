use async_trait::async_trait;

use crate::{
    errors::AppResult,
    models::{domain::Quiz, dto::request::QuizRequest},
    repositories::api_client::{RestClient, QUIZZES},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>>;
    async fn list_quizzes(&self) -> AppResult<Vec<Quiz>>;
    async fn create(&self, request: QuizRequest) -> AppResult<Quiz>;
    async fn update(&self, id: &str, request: QuizRequest) -> AppResult<Quiz>;
    async fn delete(&self, id: &str) -> AppResult<()>;
}

pub struct HttpQuizRepository {
    client: RestClient,
}

impl HttpQuizRepository {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QuizRepository for HttpQuizRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        self.client.get_item(QUIZZES, id).await
    }

    async fn list_quizzes(&self) -> AppResult<Vec<Quiz>> {
        self.client.get_list(QUIZZES).await
    }

    async fn create(&self, request: QuizRequest) -> AppResult<Quiz> {
        let quiz: Quiz = self.client.post(QUIZZES, &request).await?;
        log::info!("Created quiz '{}' with id {}", quiz.title, quiz.id);
        Ok(quiz)
    }

    async fn update(&self, id: &str, request: QuizRequest) -> AppResult<Quiz> {
        self.client.put(QUIZZES, id, &request).await
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.client.delete(QUIZZES, id).await?;
        log::info!("Deleted quiz {}", id);
        Ok(())
    }
}
