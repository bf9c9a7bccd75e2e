use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::{
        domain::QuizQuestion,
        dto::request::{NewQuestionRequest, QuestionPayload},
    },
    repositories::QuestionRepository,
};

pub struct QuestionService {
    repository: Arc<dyn QuestionRepository>,
}

impl QuestionService {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_for_quiz(&self, quiz_id: &str) -> AppResult<Vec<QuizQuestion>> {
        self.repository.find_by_quiz(quiz_id).await
    }

    /// Validates the whole batch, then creates the questions one by one in
    /// form order. A failure part-way leaves the earlier questions in place.
    pub async fn add_questions(
        &self,
        quiz_id: &str,
        requests: Vec<NewQuestionRequest>,
    ) -> AppResult<Vec<QuizQuestion>> {
        for (idx, request) in requests.iter().enumerate() {
            request.check(idx + 1)?;
        }

        let mut created = Vec::with_capacity(requests.len());
        for request in requests {
            let payload = request.into_payload(quiz_id)?;
            let question = self.repository.create(payload).await.map_err(|err| {
                log::error!("Failed to save question for quiz {}: {}", quiz_id, err);
                err
            })?;
            created.push(question);
        }

        log::info!("Added {} questions to quiz {}", created.len(), quiz_id);
        Ok(created)
    }

    pub async fn update_question(&self, id: &str, payload: QuestionPayload) -> AppResult<QuizQuestion> {
        payload.check()?;
        self.repository.update(id, payload).await
    }

    pub async fn delete_question(&self, id: &str) -> AppResult<()> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::repositories::question_repository::MockQuestionRepository;

    fn new_question(text: &str, correct: Option<usize>) -> NewQuestionRequest {
        NewQuestionRequest {
            text: text.to_string(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_index: correct,
        }
    }

    fn echo(payload: QuestionPayload) -> AppResult<QuizQuestion> {
        Ok(QuizQuestion {
            id: format!("id-{}", payload.text),
            quiz_id: payload.quiz_id,
            text: payload.text,
            options: payload.options,
            correct_answer: payload.correct_answer,
        })
    }

    #[tokio::test]
    async fn test_add_questions_posts_each_in_order() {
        let mut repo = MockQuestionRepository::new();
        repo.expect_create().times(2).returning(echo);

        let created = QuestionService::new(Arc::new(repo))
            .add_questions(
                "quiz-1",
                vec![new_question("first", Some(0)), new_question("second", Some(3))],
            )
            .await
            .expect("questions should be added");

        assert_eq!(created[0].text, "first");
        assert_eq!(created[0].correct_answer, "a");
        assert_eq!(created[1].correct_answer, "d");
        assert!(created.iter().all(|q| q.quiz_id == "quiz-1"));
    }

    #[tokio::test]
    async fn test_add_questions_rejects_batch_with_invalid_row() {
        let mut repo = MockQuestionRepository::new();
        repo.expect_create().never();

        let result = QuestionService::new(Arc::new(repo))
            .add_questions(
                "quiz-1",
                vec![new_question("first", Some(0)), new_question("second", None)],
            )
            .await;

        match result {
            Err(AppError::ValidationError(msg)) => {
                assert_eq!(msg, "Please select a correct answer for Question 2")
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_question_checks_correct_answer() {
        let mut repo = MockQuestionRepository::new();
        repo.expect_update().never();

        let payload = QuestionPayload {
            quiz_id: "quiz-1".to_string(),
            text: "Pick one".to_string(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_answer: "z".to_string(),
        };

        let result = QuestionService::new(Arc::new(repo))
            .update_question("7", payload)
            .await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
