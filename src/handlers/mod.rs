pub mod admin_handler;
pub mod auth_handler;
pub mod console;
pub mod quiz_handler;

use std::io::Write;

pub use console::{Console, LineInput, TerminalInput};

use crate::{
    app_state::AppState,
    auth::{authorize, Route},
    errors::AppResult,
    models::domain::User,
    services::auth_service::landing_route,
};

/// Drives the screens until the user quits or input ends. Every screen
/// returns the next route; protected routes are checked against the current
/// session before they open.
pub async fn run<I: LineInput, W: Write>(console: &mut Console<I, W>, state: &AppState) -> AppResult<()> {
    let mut route = match session_user(console, state).await? {
        Some(user) => landing_route(user.role),
        None => Route::Login,
    };

    loop {
        let user = session_user(console, state).await?;
        if let Err(err) = authorize(&route, user.as_ref()) {
            log::warn!("Redirecting {} to login: {}", route, err);
            route = Route::Login;
        }
        log::debug!("Opening {}", route);

        let next = match &route {
            Route::Login => auth_handler::login_screen(console, state).await?,
            Route::SignUp => auth_handler::sign_up_screen(console, state).await?,
            Route::UserDashboard => quiz_handler::user_dashboard(console, state).await?,
            Route::TakeQuiz(id) => quiz_handler::take_quiz(console, state, id).await?,
            Route::QuizResult(id) => quiz_handler::result_screen(console, state, id).await?,
            Route::UserStats => quiz_handler::stats_screen(console, state).await?,
            Route::AdminDashboard => admin_handler::admin_dashboard(console, state).await?,
            Route::ManageQuizzes => admin_handler::manage_quizzes(console, state).await?,
            Route::CreateQuiz => admin_handler::create_quiz(console, state).await?,
            Route::EditQuiz(id) => admin_handler::edit_quiz(console, state, id).await?,
            Route::AddQuestions(id) => admin_handler::add_questions(console, state, id).await?,
            Route::EditQuestions(id) => admin_handler::edit_questions(console, state, id).await?,
        };

        match next {
            Some(next) => route = next,
            None => break,
        }
    }

    console.say("Goodbye!")?;
    Ok(())
}

/// The logged-in user. An unreadable session is shown and treated as logged out.
async fn session_user<I: LineInput, W: Write>(
    console: &mut Console<I, W>,
    state: &AppState,
) -> AppResult<Option<User>> {
    match state.auth_service.current_user().await {
        Ok(user) => Ok(user),
        Err(err) => {
            console.report(&err)?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{io::Cursor, sync::Arc};

    use async_trait::async_trait;

    use super::*;
    use crate::{
        config::Config,
        errors::AppError,
        models::domain::{quiz_question::QuizQuestion, AttemptResult},
        repositories::InMemoryApi,
        storage::{self, KeyValueStore, MemoryStore, QUIZ_HISTORY_KEY, QUIZ_RESULT_KEY},
        test_utils::fixtures,
    };

    /// Store whose writes to one key always fail.
    struct FailingStore {
        inner: MemoryStore,
        broken_key: &'static str,
    }

    #[async_trait]
    impl KeyValueStore for FailingStore {
        async fn get(&self, key: &str) -> AppResult<Option<String>> {
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: String) -> AppResult<()> {
            if key == self.broken_key {
                return Err(AppError::Storage("disk full".to_string()));
            }
            self.inner.set(key, value).await
        }

        async fn remove(&self, key: &str) -> AppResult<()> {
            self.inner.remove(key).await
        }
    }

    async fn seeded_api() -> Arc<InMemoryApi> {
        let api = Arc::new(InMemoryApi::new());
        let quiz = api.insert_quiz(fixtures::capitals_quiz()).await;
        for q in fixtures::capitals_questions() {
            api.insert_question(QuizQuestion {
                quiz_id: quiz.id.clone(),
                ..q
            })
            .await;
        }
        api
    }

    async fn seeded_state() -> (AppState, Arc<MemoryStore>) {
        let api = seeded_api().await;
        let store = Arc::new(MemoryStore::new());
        let state = AppState::with_backends(Config::test_config(), store.clone(), api.clone(), api);
        state.auth_service.seed_users().await.unwrap();
        (state, store)
    }

    async fn drive(state: &AppState, script: &str) -> String {
        let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        run(&mut console, state).await.expect("run should finish");
        String::from_utf8(console.into_output()).expect("utf8 output")
    }

    #[tokio::test]
    async fn test_user_takes_quiz_and_sees_stats() {
        let (state, store) = seeded_state().await;

        // log in, pick quiz 1, answer Paris, next, answer 7, submit, back, stats, back, quit
        let script = "user@example.com\nuser123\n1\n1\nn\n1\ns\n\ns\n\nq\n";
        let out = drive(&state, script).await;

        assert!(out.contains("Question 1 of 2"));
        assert!(out.contains("Question 2 of 2"));
        assert!(out.contains("Score: 50%"));
        assert!(out.contains("Total attempts: 1"));
        assert!(out.contains("Goodbye!"));

        let stored: AttemptResult = storage::read_json(store.as_ref(), QUIZ_RESULT_KEY)
            .await
            .unwrap()
            .expect("result slot");
        assert!(stored.attempt_id.is_some());
        assert_eq!(state.history_service.entries().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_next_without_answer_is_refused() {
        let (state, _) = seeded_state().await;

        let script = "user@example.com\nuser123\n1\nn\nx\nq\n";
        let out = drive(&state, script).await;

        assert!(out.contains("Please select an answer before continuing"));
        assert!(!out.contains("Question 2 of 2"));
    }

    #[tokio::test]
    async fn test_wrong_password_returns_to_login() {
        let (state, _) = seeded_state().await;

        let out = drive(&state, "user@example.com\nnope123\nq\n").await;

        assert!(out.contains("! Incorrect password"));
        assert!(state.auth_service.current_user().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_admin_creates_quiz_with_questions() {
        let (state, _) = seeded_state().await;

        let script = concat!(
            "admin@example.com\nadmin123\n",
            "c\n",
            "Rivers\nLong rivers\nhard\nGeography\n10\n1\n",
            "Longest river?\nNile\nAmazon\nDanube\nRhine\n1\nn\n",
            "q\n"
        );
        let out = drive(&state, script).await;
        assert!(out.contains("1 questions added successfully!"));

        let quizzes = state.quiz_service.list_quizzes().await.unwrap();
        let rivers = quizzes.iter().find(|q| q.title == "Rivers").expect("created");
        let loaded = state.quiz_service.load_quiz(&rivers.id).await.unwrap();
        assert_eq!(loaded.questions[0].correct_answer, "Nile");
    }

    #[tokio::test]
    async fn test_logged_in_user_resumes_on_dashboard() {
        let (state, _) = seeded_state().await;
        state
            .auth_service
            .login(crate::models::dto::request::LoginRequest {
                email: "user@example.com".to_string(),
                password: "user123".to_string(),
            })
            .await
            .unwrap();

        assert!(authorize(&Route::ManageQuizzes, state.auth_service.current_user().await.unwrap().as_ref()).is_err());

        let out = drive(&state, "q\n").await;
        assert!(out.contains("Available quizzes"));
    }

    #[tokio::test]
    async fn test_history_write_failure_is_reported_inline() {
        let api = seeded_api().await;
        let store = Arc::new(FailingStore {
            inner: MemoryStore::new(),
            broken_key: QUIZ_HISTORY_KEY,
        });
        let state = AppState::with_backends(Config::test_config(), store, api.clone(), api);
        state.auth_service.seed_users().await.unwrap();

        // log in, answer both questions, submit, leave the result, stats, back, quit
        let script = "user@example.com\nuser123\n1\n1\nn\n2\ns\n\ns\n\nq\n";
        let out = drive(&state, script).await;

        assert!(out.contains("Could not record your result."));
        assert!(out.contains("! disk full"));
        assert!(out.contains("No quiz history yet"));
        assert!(out.contains("Goodbye!"));
    }

    #[tokio::test]
    async fn test_password_with_spaces_logs_in() {
        let (state, _) = seeded_state().await;
        state
            .auth_service
            .sign_up(crate::models::dto::request::SignUpRequest {
                name: "Spacey".to_string(),
                email: "spacey@example.com".to_string(),
                password: " open sesame ".to_string(),
                confirm_password: " open sesame ".to_string(),
            })
            .await
            .unwrap();
        state.auth_service.logout().await.unwrap();

        let out = drive(&state, "spacey@example.com\n open sesame \nq\n").await;

        assert!(out.contains("Signed in as spacey@example.com (User)"));
        assert!(out.contains("Available quizzes"));
    }

    #[tokio::test]
    async fn test_admin_dashboard_question_total_saturates() {
        let api = Arc::new(InMemoryApi::new());
        for _ in 0..2 {
            api.insert_quiz(crate::models::domain::Quiz {
                question_count: u32::MAX,
                ..fixtures::capitals_quiz()
            })
            .await;
        }
        let state = AppState::with_backends(
            Config::test_config(),
            Arc::new(MemoryStore::new()),
            api.clone(),
            api,
        );
        state.auth_service.seed_users().await.unwrap();

        let out = drive(&state, "admin@example.com\nadmin123\nq\n").await;

        assert!(out.contains(&format!("Planned questions: {}", u32::MAX)));
    }
}
