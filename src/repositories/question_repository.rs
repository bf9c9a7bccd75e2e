use async_trait::async_trait;

use crate::{
    errors::AppResult,
    models::{domain::QuizQuestion, dto::request::QuestionPayload},
    repositories::api_client::{RestClient, QUESTIONS},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Questions belonging to `quiz_id`, in the order the API returns them.
    async fn find_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<QuizQuestion>>;
    async fn create(&self, payload: QuestionPayload) -> AppResult<QuizQuestion>;
    async fn update(&self, id: &str, payload: QuestionPayload) -> AppResult<QuizQuestion>;
    async fn delete(&self, id: &str) -> AppResult<()>;
}

pub struct HttpQuestionRepository {
    client: RestClient,
}

impl HttpQuestionRepository {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QuestionRepository for HttpQuestionRepository {
    async fn find_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<QuizQuestion>> {
        // The whole collection is fetched and filtered here
        let all: Vec<QuizQuestion> = self.client.get_list(QUESTIONS).await?;
        let total = all.len();
        let matching: Vec<QuizQuestion> = all.into_iter().filter(|q| q.quiz_id == quiz_id).collect();

        log::debug!(
            "{} of {} questions belong to quiz {}",
            matching.len(),
            total,
            quiz_id
        );
        Ok(matching)
    }

    async fn create(&self, payload: QuestionPayload) -> AppResult<QuizQuestion> {
        self.client.post(QUESTIONS, &payload).await
    }

    async fn update(&self, id: &str, payload: QuestionPayload) -> AppResult<QuizQuestion> {
        self.client.put(QUESTIONS, id, &payload).await
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.client.delete(QUESTIONS, id).await?;
        log::info!("Deleted question {}", id);
        Ok(())
    }
}
