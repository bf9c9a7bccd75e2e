use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicBool, AtomicU64, Ordering},
        Arc,
    },
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Quiz, QuizQuestion},
        dto::request::{QuestionPayload, QuizRequest},
    },
    repositories::{QuestionRepository, QuizRepository},
};

/// In-process stand-in for the remote API. Ids are sequential numbers, the
/// way the mock API hands them out, and list order is insertion order.
#[derive(Clone, Default)]
pub struct InMemoryApi {
    quizzes: Arc<RwLock<BTreeMap<u64, Quiz>>>,
    questions: Arc<RwLock<BTreeMap<u64, QuizQuestion>>>,
    next_id: Arc<AtomicU64>,
    offline: Arc<AtomicBool>,
}

impl InMemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// While offline every call fails with a network error.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub async fn insert_quiz(&self, mut quiz: Quiz) -> Quiz {
        let id = self.allocate_id();
        quiz.id = id.to_string();
        self.quizzes.write().await.insert(id, quiz.clone());
        quiz
    }

    pub async fn insert_question(&self, mut question: QuizQuestion) -> QuizQuestion {
        let id = self.allocate_id();
        question.id = id.to_string();
        self.questions.write().await.insert(id, question.clone());
        question
    }

    fn allocate_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn check_online(&self) -> AppResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::Network("connection refused".to_string()));
        }
        Ok(())
    }
}

fn parse_id(id: &str) -> Option<u64> {
    id.parse().ok()
}

fn quiz_from_request(id: u64, request: QuizRequest) -> Quiz {
    Quiz {
        id: id.to_string(),
        title: request.title,
        description: request.description,
        difficulty: request.difficulty,
        question_count: request.question_count,
        duration_minutes: request.duration_minutes,
        category: request.category,
    }
}

fn question_from_payload(id: u64, payload: QuestionPayload) -> QuizQuestion {
    QuizQuestion {
        id: id.to_string(),
        quiz_id: payload.quiz_id,
        text: payload.text,
        options: payload.options,
        correct_answer: payload.correct_answer,
    }
}

#[async_trait]
impl QuizRepository for InMemoryApi {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        self.check_online()?;
        let quizzes = self.quizzes.read().await;
        Ok(parse_id(id).and_then(|key| quizzes.get(&key).cloned()))
    }

    async fn list_quizzes(&self) -> AppResult<Vec<Quiz>> {
        self.check_online()?;
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.values().cloned().collect())
    }

    async fn create(&self, request: QuizRequest) -> AppResult<Quiz> {
        self.check_online()?;
        let id = self.allocate_id();
        let quiz = quiz_from_request(id, request);
        self.quizzes.write().await.insert(id, quiz.clone());
        Ok(quiz)
    }

    async fn update(&self, id: &str, request: QuizRequest) -> AppResult<Quiz> {
        self.check_online()?;
        let mut quizzes = self.quizzes.write().await;
        let key = parse_id(id)
            .filter(|key| quizzes.contains_key(key))
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))?;

        let quiz = quiz_from_request(key, request);
        quizzes.insert(key, quiz.clone());
        Ok(quiz)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.check_online()?;
        let mut quizzes = self.quizzes.write().await;
        parse_id(id)
            .and_then(|key| quizzes.remove(&key))
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))
    }
}

#[async_trait]
impl QuestionRepository for InMemoryApi {
    async fn find_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<QuizQuestion>> {
        self.check_online()?;
        let questions = self.questions.read().await;
        Ok(questions
            .values()
            .filter(|q| q.quiz_id == quiz_id)
            .cloned()
            .collect())
    }

    async fn create(&self, payload: QuestionPayload) -> AppResult<QuizQuestion> {
        self.check_online()?;
        let id = self.allocate_id();
        let question = question_from_payload(id, payload);
        self.questions.write().await.insert(id, question.clone());
        Ok(question)
    }

    async fn update(&self, id: &str, payload: QuestionPayload) -> AppResult<QuizQuestion> {
        self.check_online()?;
        let mut questions = self.questions.write().await;
        let key = parse_id(id)
            .filter(|key| questions.contains_key(key))
            .ok_or_else(|| AppError::NotFound(format!("Question with id '{}' not found", id)))?;

        let question = question_from_payload(key, payload);
        questions.insert(key, question.clone());
        Ok(question)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.check_online()?;
        let mut questions = self.questions.write().await;
        parse_id(id)
            .and_then(|key| questions.remove(&key))
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Question with id '{}' not found", id)))
    }
}
