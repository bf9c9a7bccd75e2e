use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::Route,
    errors::{AppError, AppResult},
    models::{
        domain::{user, User, UserRole},
        dto::request::{LoginRequest, SignUpRequest},
    },
    storage::{self, KeyValueStore, CURRENT_USER_KEY, USERS_KEY},
};

/// Local accounts and the logged-in session. Not a security boundary.
pub struct AuthService {
    store: Arc<dyn KeyValueStore>,
}

impl AuthService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Writes the demo accounts unless a user list already exists.
    pub async fn seed_users(&self) -> AppResult<bool> {
        if self.store.get(USERS_KEY).await?.is_some() {
            return Ok(false);
        }

        storage::write_json(self.store.as_ref(), USERS_KEY, &user::seed_users()).await?;
        log::info!("Seeded demo users");
        Ok(true)
    }

    pub async fn users(&self) -> AppResult<Vec<User>> {
        storage::read_list(self.store.as_ref(), USERS_KEY).await
    }

    pub async fn sign_up(&self, request: SignUpRequest) -> AppResult<User> {
        request.validate()?;

        let email = request.email.trim();
        let users = self.users().await?;
        if users.iter().any(|u| u.email == email) {
            return Err(AppError::AlreadyExists("Email already registered".to_string()));
        }

        let user = User::from_request(&request);
        storage::append_json(self.store.as_ref(), USERS_KEY, user.clone()).await?;
        self.start_session(&user).await?;

        log::info!("Registered new user {}", user.email);
        Ok(user)
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<User> {
        request.validate()?;

        let email = request.email.trim();
        let user = self
            .users()
            .await?
            .into_iter()
            .find(|u| u.email == email)
            .ok_or_else(|| AppError::NotFound("No account found with this email".to_string()))?;

        if !user.verify_password(&request.password) {
            log::warn!("Failed login for {}", email);
            return Err(AppError::Unauthorized("Incorrect password".to_string()));
        }

        self.start_session(&user).await?;
        log::info!("{} logged in as {}", user.email, user.role);
        Ok(user)
    }

    pub async fn logout(&self) -> AppResult<()> {
        self.store.remove(CURRENT_USER_KEY).await
    }

    pub async fn current_user(&self) -> AppResult<Option<User>> {
        storage::read_json(self.store.as_ref(), CURRENT_USER_KEY).await
    }

    async fn start_session(&self, user: &User) -> AppResult<()> {
        storage::write_json(self.store.as_ref(), CURRENT_USER_KEY, user).await
    }
}

/// Where a user lands after logging in.
pub fn landing_route(role: UserRole) -> Route {
    match role {
        UserRole::Admin => Route::AdminDashboard,
        UserRole::User => Route::UserDashboard,
    }
}
