use std::fmt;

use crate::models::domain::UserRole;

/// Screens of the application and the role each one requires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    SignUp,
    UserDashboard,
    TakeQuiz(String),
    QuizResult(String),
    UserStats,
    AdminDashboard,
    ManageQuizzes,
    CreateQuiz,
    EditQuiz(String),
    AddQuestions(String),
    EditQuestions(String),
}

impl Route {
    /// `None` for public screens.
    pub fn required_role(&self) -> Option<UserRole> {
        match self {
            Route::Login | Route::SignUp => None,
            Route::UserDashboard
            | Route::TakeQuiz(_)
            | Route::QuizResult(_)
            | Route::UserStats => Some(UserRole::User),
            Route::AdminDashboard
            | Route::ManageQuizzes
            | Route::CreateQuiz
            | Route::EditQuiz(_)
            | Route::AddQuestions(_)
            | Route::EditQuestions(_) => Some(UserRole::Admin),
        }
    }

    pub fn is_public(&self) -> bool {
        self.required_role().is_none()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Login => write!(f, "/login"),
            Route::SignUp => write!(f, "/signup"),
            Route::UserDashboard => write!(f, "/user/dashboard"),
            Route::TakeQuiz(id) => write!(f, "/user/quiz/{}", id),
            Route::QuizResult(id) => write!(f, "/user/result/{}", id),
            Route::UserStats => write!(f, "/user/stats"),
            Route::AdminDashboard => write!(f, "/admin/dashboard"),
            Route::ManageQuizzes => write!(f, "/admin/manage-quizzes"),
            Route::CreateQuiz => write!(f, "/admin/create-quiz"),
            Route::EditQuiz(id) => write!(f, "/admin/edit-quiz/{}", id),
            Route::AddQuestions(id) => write!(f, "/admin/add-questions/{}", id),
            Route::EditQuestions(id) => write!(f, "/admin/edit-questions/{}", id),
        }
    }
}
