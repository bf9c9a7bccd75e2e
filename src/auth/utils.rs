use crate::{
    auth::Route,
    errors::{AppError, AppResult},
    models::domain::{User, UserRole},
};

pub fn require_role(user: &User, role: UserRole) -> AppResult<()> {
    if user.role != role {
        return Err(AppError::Unauthorized(format!(
            "This page is only available to the {} role",
            role
        )));
    }
    Ok(())
}

/// Decides whether `user` may open `route`. Callers send the user to
/// [`Route::Login`] on error.
pub fn authorize<'a>(route: &Route, user: Option<&'a User>) -> AppResult<Option<&'a User>> {
    if route.is_public() {
        return Ok(user);
    }

    let user = user.ok_or_else(|| AppError::Unauthorized("Please log in first".to_string()))?;
    if let Some(required) = route.required_role() {
        require_role(user, required)?;
    }
    Ok(Some(user))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_role_success() {
        let admin = User::test_admin("admin@example.com");
        assert!(require_role(&admin, UserRole::Admin).is_ok());
    }

    #[test]
    fn test_require_role_failure() {
        let user = User::test_user("user@example.com");
        assert!(matches!(
            require_role(&user, UserRole::Admin),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_authorize_public_route_without_session() {
        assert!(authorize(&Route::Login, None).is_ok());
    }

    #[test]
    fn test_authorize_protected_route_without_session() {
        let result = authorize(&Route::UserDashboard, None);
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn test_authorize_role_mismatch() {
        let admin = User::test_admin("admin@example.com");
        let user = User::test_user("user@example.com");

        assert!(authorize(&Route::UserStats, Some(&admin)).is_err());
        assert!(authorize(&Route::ManageQuizzes, Some(&user)).is_err());
    }

    #[test]
    fn test_authorize_matching_role() {
        let user = User::test_user("user@example.com");

        let allowed = authorize(&Route::TakeQuiz("3".into()), Some(&user)).expect("allowed");
        assert_eq!(allowed.map(|u| u.email.as_str()), Some("user@example.com"));
    }
}
