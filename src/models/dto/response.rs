use serde::Serialize;

use crate::models::domain::{AttemptResult, HistoryEntry, User, UserRole};

/// A user as shown on screen, without the password digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDto {
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        UserDto {
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    pub result: AttemptResult,
    pub score_percent: u32, // Rounded for display
    pub passed: bool,
}

impl From<AttemptResult> for ResultView {
    fn from(result: AttemptResult) -> Self {
        ResultView {
            score_percent: result.percentage().round() as u32,
            passed: result.passed(),
            result,
        }
    }
}

/// Ledger summary: entries newest first, one per attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    pub entries: Vec<HistoryEntry>,
    pub total_attempts: usize,
    pub average_score: f64, // Percent, one decimal place
}

impl UserStats {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_dto_hides_password() {
        let user = User::test_user("jane@example.com");

        let dto: UserDto = user.into();
        let json = serde_json::to_value(&dto).expect("should serialize");
        assert!(json.get("password_hash").is_none());
        assert_eq!(dto.role, UserRole::User);
    }

    #[test]
    fn test_result_view_rounds_score() {
        let view = ResultView::from(AttemptResult::new("quiz-1", None, 3, 2));

        assert_eq!(view.score_percent, 67);
        assert!(view.passed);
    }

    #[test]
    fn test_result_view_half_score() {
        let view = ResultView::from(AttemptResult::new("quiz-1", None, 2, 1));

        assert_eq!(view.score_percent, 50);
        assert!(!view.passed);
    }
}
