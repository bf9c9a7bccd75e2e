use std::{collections::HashMap, sync::Arc};

use chrono::Utc;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{AttemptResult, QuizQuestion},
        dto::response::ResultView,
    },
    services::{history_service::HistoryService, quiz_session::QuizSession},
    storage::{self, KeyValueStore, QUIZ_RESULT_KEY},
};

pub struct QuizAttemptService {
    store: Arc<dyn KeyValueStore>,
    history: Arc<HistoryService>,
}

impl QuizAttemptService {
    pub fn new(store: Arc<dyn KeyValueStore>, history: Arc<HistoryService>) -> Self {
        Self { store, history }
    }

    /// Counts exact matches against each question's correct answer. Missing
    /// answers count as incorrect.
    pub fn grade_attempt(
        quiz_id: &str,
        title: Option<&str>,
        questions: &[QuizQuestion],
        answers: &HashMap<String, String>,
    ) -> AttemptResult {
        let correct = questions
            .iter()
            .filter(|q| answers.get(&q.id).is_some_and(|a| q.is_correct(a)))
            .count();

        AttemptResult::new(quiz_id, title, questions.len() as u32, correct as u32)
    }

    /// Scores a finished session and stores it in the result slot, replacing
    /// whatever result was there.
    pub async fn submit(&self, session: &QuizSession) -> AppResult<AttemptResult> {
        if !session.can_submit() {
            return Err(AppError::ValidationError(
                "Answer the last question before submitting".to_string(),
            ));
        }

        let quiz = session.quiz();
        let result = Self::grade_attempt(
            &quiz.id,
            Some(quiz.title.as_str()),
            session.questions(),
            session.answers(),
        );

        storage::write_json(self.store.as_ref(), QUIZ_RESULT_KEY, &result).await?;
        log::info!(
            "Submitted quiz {}: {}/{} correct",
            result.quiz_id,
            result.correct_answers,
            result.total_questions
        );
        Ok(result)
    }

    pub async fn last_result(&self) -> AppResult<Option<AttemptResult>> {
        storage::read_json(self.store.as_ref(), QUIZ_RESULT_KEY).await
    }

    /// Loads the stored result for `quiz_id` and makes sure it is in the
    /// history exactly once. The attempt id is generated the first time the
    /// result is viewed and written back to the slot before the ledger is
    /// touched.
    pub async fn view_result(&self, quiz_id: &str) -> AppResult<Option<ResultView>> {
        let Some(mut result) = self.last_result().await? else {
            return Ok(None);
        };
        if result.quiz_id != quiz_id {
            log::debug!(
                "Stored result belongs to quiz {}, not {}",
                result.quiz_id,
                quiz_id
            );
            return Ok(None);
        }

        if result.ensure_attempt_id() {
            storage::write_json(self.store.as_ref(), QUIZ_RESULT_KEY, &result).await?;
        }
        self.history.record(&result, Utc::now()).await?;

        Ok(Some(ResultView::from(result)))
    }
}
