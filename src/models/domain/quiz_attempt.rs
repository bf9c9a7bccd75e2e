use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Scores at or above this percentage count as a pass.
pub const PASS_THRESHOLD_PERCENT: f64 = 60.0;

/// The outcome of one submission, kept in the transient result slot.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptResult {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "optional_id"
    )]
    pub attempt_id: Option<String>,
    pub quiz_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub incorrect_answers: u32,
}

impl AttemptResult {
    pub fn new(quiz_id: &str, title: Option<&str>, total_questions: u32, correct_answers: u32) -> Self {
        AttemptResult {
            attempt_id: None,
            quiz_id: quiz_id.to_string(),
            title: title.map(|t| t.to_string()),
            total_questions,
            correct_answers,
            incorrect_answers: total_questions.saturating_sub(correct_answers),
        }
    }

    /// Assigns an attempt id unless one is already present. Returns true when
    /// a new id was generated.
    pub fn ensure_attempt_id(&mut self) -> bool {
        if self.attempt_id.is_some() {
            return false;
        }
        self.attempt_id = Some(Uuid::new_v4().to_string());
        true
    }

    pub fn percentage(&self) -> f64 {
        percentage(self.correct_answers, self.total_questions)
    }

    pub fn passed(&self) -> bool {
        self.percentage() >= PASS_THRESHOLD_PERCENT
    }
}

/// correct / total * 100, with an empty quiz scoring 0.
pub fn percentage(correct: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    f64::from(correct) / f64::from(total) * 100.0
}

/// Older results stored the attempt id as a millisecond timestamp.
fn optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Text(id)) if !id.is_empty() => Some(id),
        Some(RawId::Number(id)) => Some(id.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_result_derives_incorrect_count() {
        let result = AttemptResult::new("quiz-1", Some("Capitals"), 5, 3);

        assert_eq!(result.incorrect_answers, 2);
        assert_eq!(result.correct_answers + result.incorrect_answers, 5);
        assert!(result.attempt_id.is_none());
    }

    #[test]
    fn test_ensure_attempt_id_assigns_only_once() {
        let mut result = AttemptResult::new("quiz-1", None, 2, 1);

        assert!(result.ensure_attempt_id());
        let first = result.attempt_id.clone();

        assert!(!result.ensure_attempt_id());
        assert_eq!(result.attempt_id, first);
    }

    #[test]
    fn test_percentage_of_empty_quiz_is_zero() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(AttemptResult::new("quiz-1", None, 0, 0).percentage(), 0.0);
    }

    #[test]
    fn test_passed_uses_sixty_percent_threshold() {
        assert!(AttemptResult::new("q", None, 5, 3).passed());
        assert!(!AttemptResult::new("q", None, 2, 1).passed());
    }

    #[test]
    fn test_result_uses_camel_case_keys_and_omits_missing_id() {
        let json = serde_json::to_value(AttemptResult::new("quiz-1", None, 2, 1))
            .expect("result should serialize");

        assert_eq!(json["quizId"], "quiz-1");
        assert_eq!(json["totalQuestions"], 2);
        assert_eq!(json["incorrectAnswers"], 1);
        assert!(json.get("attemptId").is_none());
    }

    #[test]
    fn test_timestamp_attempt_ids_are_accepted() {
        let json = r#"{"attemptId": 1723456789012, "quizId": "3", "totalQuestions": 4, "correctAnswers": 4, "incorrectAnswers": 0}"#;
        let result: AttemptResult = serde_json::from_str(json).expect("should deserialize");

        assert_eq!(result.attempt_id.as_deref(), Some("1723456789012"));
    }
}
