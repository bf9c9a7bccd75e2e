use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: String, // Assigned by the remote API
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(rename = "questions", default)]
    pub question_count: u32, // Advertised count, not the number of stored questions
    #[serde(rename = "duration", default)]
    pub duration_minutes: u32,
    #[serde(default)]
    pub category: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Copy)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(value.trim()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_deserializes_from_mock_api_shape() {
        let json = r#"{
            "id": "7",
            "title": "Capitals",
            "description": "European capitals",
            "difficulty": "Medium",
            "questions": 10,
            "duration": 15,
            "category": "Geography"
        }"#;

        let quiz: Quiz = serde_json::from_str(json).expect("quiz should deserialize");

        assert_eq!(quiz.id, "7");
        assert_eq!(quiz.difficulty, Difficulty::Medium);
        assert_eq!(quiz.question_count, 10);
        assert_eq!(quiz.duration_minutes, 15);
    }

    #[test]
    fn test_quiz_missing_optional_fields_uses_defaults() {
        let quiz: Quiz =
            serde_json::from_str(r#"{"id": "1", "title": "Bare"}"#).expect("should deserialize");

        assert_eq!(quiz.difficulty, Difficulty::Easy);
        assert_eq!(quiz.question_count, 0);
        assert!(quiz.category.is_empty());
    }

    #[test]
    fn test_difficulty_rejects_unknown_variant() {
        let parsed = serde_json::from_str::<Difficulty>("\"Insane\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_difficulty_parse_is_case_insensitive() {
        assert_eq!(Difficulty::parse("hard"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::parse(" EASY "), Some(Difficulty::Easy));
        assert_eq!(Difficulty::parse("extreme"), None);
    }
}
