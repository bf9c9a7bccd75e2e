#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{Difficulty, Quiz, QuizQuestion};
    use crate::services::LoadedQuiz;

    /// A two-question quiz whose answers are "Paris" and "42"
    pub fn capitals_quiz() -> Quiz {
        Quiz {
            id: "quiz-1".to_string(),
            title: "Capitals".to_string(),
            description: "A short warm-up".to_string(),
            difficulty: Difficulty::Easy,
            question_count: 2,
            duration_minutes: 5,
            category: "Geography".to_string(),
        }
    }

    pub fn question(id: &str, text: &str, options: [&str; 4], correct: &str) -> QuizQuestion {
        QuizQuestion {
            id: id.to_string(),
            quiz_id: "quiz-1".to_string(),
            text: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: correct.to_string(),
        }
    }

    pub fn capitals_questions() -> Vec<QuizQuestion> {
        vec![
            question("q-1", "Capital of France?", ["Paris", "Lyon", "Nice", "Lille"], "Paris"),
            question("q-2", "The answer to everything?", ["7", "42", "13", "0"], "42"),
        ]
    }

    pub fn capitals_loaded() -> LoadedQuiz {
        LoadedQuiz {
            quiz: capitals_quiz(),
            questions: capitals_questions(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixture_answers_are_options() {
        for q in capitals_questions() {
            assert!(q.has_option(&q.correct_answer));
            assert_eq!(q.quiz_id, capitals_quiz().id);
        }
    }

    #[test]
    fn test_fixture_loaded_quiz() {
        let loaded = capitals_loaded();
        assert_eq!(loaded.questions.len(), 2);
        assert_eq!(loaded.quiz.title, "Capitals");
    }
}
