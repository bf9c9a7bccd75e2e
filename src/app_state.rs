use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    repositories::{
        HttpQuestionRepository, HttpQuizRepository, QuestionRepository, QuizRepository,
        RestClient,
    },
    services::{AuthService, HistoryService, QuestionService, QuizAttemptService, QuizService},
    storage::{JsonFileStore, KeyValueStore},
};

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub quiz_service: Arc<QuizService>,
    pub question_service: Arc<QuestionService>,
    pub attempt_service: Arc<QuizAttemptService>,
    pub history_service: Arc<HistoryService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let store = Arc::new(JsonFileStore::open(&config.storage_path).await?);

        let client = RestClient::new(&config.api_base_url);
        let quizzes = Arc::new(HttpQuizRepository::new(client.clone()));
        let questions = Arc::new(HttpQuestionRepository::new(client));

        let state = Self::with_backends(config, store, quizzes, questions);
        if state.config.seed_demo_users {
            state.auth_service.seed_users().await?;
        }
        Ok(state)
    }

    /// Wires the services over any store and repositories.
    pub fn with_backends(
        config: Config,
        store: Arc<dyn KeyValueStore>,
        quizzes: Arc<dyn QuizRepository>,
        questions: Arc<dyn QuestionRepository>,
    ) -> Self {
        let history_service = Arc::new(HistoryService::new(store.clone()));
        let attempt_service = Arc::new(QuizAttemptService::new(
            store.clone(),
            history_service.clone(),
        ));

        Self {
            auth_service: Arc::new(AuthService::new(store)),
            quiz_service: Arc::new(QuizService::new(quizzes, questions.clone())),
            question_service: Arc::new(QuestionService::new(questions)),
            attempt_service,
            history_service,
            config: Arc::new(config),
        }
    }
}
