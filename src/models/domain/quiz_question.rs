use serde::{Deserialize, Serialize};

/// Every question offers exactly this many options.
pub const OPTION_COUNT: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub id: String,
    #[serde(rename = "quizid")]
    pub quiz_id: String,
    #[serde(rename = "question")]
    pub text: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String, // Text of one of `options`
}

impl QuizQuestion {
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|opt| opt == value)
    }

    /// Exact, case-sensitive comparison against the correct option.
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capital_question() -> QuizQuestion {
        QuizQuestion {
            id: "q-1".to_string(),
            quiz_id: "quiz-1".to_string(),
            text: "Capital of France?".to_string(),
            options: vec![
                "Paris".to_string(),
                "Lyon".to_string(),
                "Nice".to_string(),
                "Lille".to_string(),
            ],
            correct_answer: "Paris".to_string(),
        }
    }

    #[test]
    fn test_question_uses_mock_api_field_names() {
        let json = serde_json::to_value(capital_question()).expect("should serialize");

        assert_eq!(json["quizid"], "quiz-1");
        assert_eq!(json["question"], "Capital of France?");
        assert_eq!(json["correctAnswer"], "Paris");
        assert_eq!(json["options"].as_array().map(|o| o.len()), Some(OPTION_COUNT));
    }

    #[test]
    fn test_correctness_is_case_sensitive() {
        let question = capital_question();

        assert!(question.is_correct("Paris"));
        assert!(!question.is_correct("paris"));
        assert!(!question.is_correct("Paris "));
    }

    #[test]
    fn test_has_option_matches_exact_text() {
        let question = capital_question();

        assert!(question.has_option("Lyon"));
        assert!(!question.has_option("Marseille"));
    }
}
