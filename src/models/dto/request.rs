use std::borrow::Cow;

use once_cell::sync::Lazy;
use serde::Serialize;
use validator::{Validate, ValidationError};

use crate::errors::{AppError, AppResult};
use crate::models::domain::quiz::Difficulty;
use crate::models::domain::quiz_question::OPTION_COUNT;

static EMAIL_REGEX: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX is a valid regex pattern")
});

fn failure(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(failure("required", "Email is required"));
    }
    if !EMAIL_REGEX.is_match(email.trim()) {
        return Err(failure("email", "Invalid email format"));
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(failure("required", "Name is required"));
    }
    if name.trim().chars().count() < 2 {
        return Err(failure("length", "Name must be at least 2 characters"));
    }
    Ok(())
}

fn validate_new_password(password: &str) -> Result<(), ValidationError> {
    if password.trim().is_empty() {
        return Err(failure("required", "Password is required"));
    }
    if password.chars().count() < 6 {
        return Err(failure("length", "Password must be at least 6 characters"));
    }
    Ok(())
}

fn validate_present_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(failure("required", "Password is required"));
    }
    Ok(())
}

#[derive(Debug, Clone, Validate)]
pub struct LoginRequest {
    #[validate(custom(function = "validate_email"))]
    pub email: String,

    #[validate(custom(function = "validate_present_password"))]
    pub password: String,
}

#[derive(Debug, Clone, Validate)]
pub struct SignUpRequest {
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[validate(custom(function = "validate_email"))]
    pub email: String,

    #[validate(custom(function = "validate_new_password"))]
    pub password: String,

    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,
}

/// Body of a quiz create or update call, in the mock API's field names.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct QuizRequest {
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,

    pub description: String,

    pub difficulty: Difficulty,

    #[validate(length(min = 1, max = 100, message = "Category is required"))]
    pub category: String,

    #[serde(rename = "duration")]
    #[validate(range(min = 1, message = "Duration must be greater than 0"))]
    pub duration_minutes: u32,

    #[serde(rename = "questions")]
    #[validate(range(min = 1, message = "Number of questions must be greater than 0"))]
    pub question_count: u32,
}

/// One row of the "add questions" form; `correct_index` points into `options`.
#[derive(Debug, Clone, Default)]
pub struct NewQuestionRequest {
    pub text: String,
    pub options: Vec<String>,
    pub correct_index: Option<usize>,
}

impl NewQuestionRequest {
    /// `position` is 1-based, matching how the form numbers questions.
    pub fn check(&self, position: usize) -> AppResult<()> {
        if self.text.trim().is_empty() {
            return Err(AppError::ValidationError(format!(
                "Question {} is empty",
                position
            )));
        }
        if self.options.len() != OPTION_COUNT || self.options.iter().any(|o| o.trim().is_empty()) {
            return Err(AppError::ValidationError(format!(
                "All options must be filled for Question {}",
                position
            )));
        }
        match self.correct_index {
            Some(idx) if idx < self.options.len() => Ok(()),
            _ => Err(AppError::ValidationError(format!(
                "Please select a correct answer for Question {}",
                position
            ))),
        }
    }

    pub fn into_payload(self, quiz_id: &str) -> AppResult<QuestionPayload> {
        let correct_answer = self
            .correct_index
            .and_then(|idx| self.options.get(idx).cloned())
            .ok_or_else(|| {
                AppError::ValidationError("Please select a correct answer".to_string())
            })?;

        Ok(QuestionPayload {
            quiz_id: quiz_id.to_string(),
            text: self.text,
            options: self.options,
            correct_answer,
        })
    }
}

/// Question body sent to the remote API on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionPayload {
    #[serde(rename = "quizid")]
    pub quiz_id: String,
    #[serde(rename = "question")]
    pub text: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
}

impl QuestionPayload {
    pub fn check(&self) -> AppResult<()> {
        if self.text.trim().is_empty() {
            return Err(AppError::ValidationError("Question text is required".to_string()));
        }
        if self.options.len() != OPTION_COUNT || self.options.iter().any(|o| o.trim().is_empty()) {
            return Err(AppError::ValidationError(
                "All options must be filled".to_string(),
            ));
        }
        if !self.options.iter().any(|o| *o == self.correct_answer) {
            return Err(AppError::ValidationError(
                "Correct answer must be one of the options".to_string(),
            ));
        }
        Ok(())
    }
}
