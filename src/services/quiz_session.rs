use std::collections::HashMap;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Quiz, QuizQuestion},
    services::quiz_service::LoadedQuiz,
};

/// The forward control shown under the current question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    Next,
    Submit,
}

/// One pass through a quiz, one question at a time.
///
/// The cursor only moves forward once the current question has an answer,
/// and answers given to other questions are kept while moving back and forth.
#[derive(Clone, Debug)]
pub struct QuizSession {
    quiz: Quiz,
    questions: Vec<QuizQuestion>,
    current: usize,
    answers: HashMap<String, String>,
}

impl QuizSession {
    pub fn new(loaded: LoadedQuiz) -> AppResult<Self> {
        if loaded.questions.is_empty() {
            return Err(AppError::ValidationError(format!(
                "Quiz '{}' has no questions",
                loaded.quiz.title
            )));
        }

        Ok(Self {
            quiz: loaded.quiz,
            questions: loaded.questions,
            current: 0,
            answers: HashMap::new(),
        })
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn answers(&self) -> &HashMap<String, String> {
        &self.answers
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> &QuizQuestion {
        &self.questions[self.current]
    }

    pub fn current_answer(&self) -> Option<&str> {
        self.answers
            .get(&self.current_question().id)
            .map(String::as_str)
    }

    pub fn is_current_answered(&self) -> bool {
        self.current_answer().is_some_and(|a| !a.is_empty())
    }

    fn is_last(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    /// Records `option` for the current question, replacing any earlier choice.
    pub fn select_answer(&mut self, option: &str) -> AppResult<()> {
        let question = self.current_question();
        if option.is_empty() {
            return Err(AppError::ValidationError("Please select an answer".to_string()));
        }
        if !question.has_option(option) {
            return Err(AppError::ValidationError(format!(
                "'{}' is not an option for this question",
                option
            )));
        }

        let id = question.id.clone();
        self.answers.insert(id, option.to_string());
        Ok(())
    }

    /// Selects by zero-based position in the current question's options.
    pub fn select_option(&mut self, index: usize) -> AppResult<()> {
        let option = self
            .current_question()
            .options
            .get(index)
            .cloned()
            .ok_or_else(|| {
                AppError::ValidationError(format!("There is no option {}", index + 1))
            })?;
        self.select_answer(&option)
    }

    pub fn primary_action(&self) -> NavAction {
        if self.is_last() {
            NavAction::Submit
        } else {
            NavAction::Next
        }
    }

    pub fn can_go_previous(&self) -> bool {
        self.current > 0
    }

    pub fn can_go_next(&self) -> bool {
        !self.is_last() && self.is_current_answered()
    }

    pub fn can_submit(&self) -> bool {
        self.is_last() && self.is_current_answered()
    }

    pub fn next(&mut self) -> AppResult<()> {
        if self.is_last() {
            return Err(AppError::ValidationError(
                "Already at the last question".to_string(),
            ));
        }
        if !self.is_current_answered() {
            return Err(AppError::ValidationError(
                "Please select an answer before continuing".to_string(),
            ));
        }
        self.current += 1;
        Ok(())
    }

    pub fn previous(&mut self) -> AppResult<()> {
        if !self.can_go_previous() {
            return Err(AppError::ValidationError(
                "Already at the first question".to_string(),
            ));
        }
        self.current -= 1;
        Ok(())
    }
}
