use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::quiz_attempt::{self, AttemptResult};

pub const UNTITLED_QUIZ: &str = "Untitled Quiz";

/// One line of the attempt history ledger.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(deserialize_with = "attempt_id")]
    pub attempt_id: String,
    pub quiz_id: String,
    #[serde(default)]
    pub title: Option<String>,
    pub correct_answers: u32,
    pub incorrect_answers: u32,
    pub total_questions: u32,
    pub date: DateTime<Utc>,
}

impl HistoryEntry {
    /// Builds the ledger entry for a result that already carries an attempt id.
    pub fn from_result(result: &AttemptResult, date: DateTime<Utc>) -> Option<Self> {
        let attempt_id = result.attempt_id.clone()?;
        Some(HistoryEntry {
            attempt_id,
            quiz_id: result.quiz_id.clone(),
            title: Some(
                result
                    .title
                    .clone()
                    .unwrap_or_else(|| UNTITLED_QUIZ.to_string()),
            ),
            correct_answers: result.correct_answers,
            incorrect_answers: result.incorrect_answers,
            total_questions: result.total_questions,
            date,
        })
    }

    pub fn percentage(&self) -> f64 {
        quiz_attempt::percentage(self.correct_answers, self.total_questions)
    }

    pub fn display_title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("Quiz {}", self.quiz_id))
    }
}

fn attempt_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}
