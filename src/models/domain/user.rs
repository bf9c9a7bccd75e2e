use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::dto::request::SignUpRequest;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Copy)]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::User => f.write_str("User"),
            UserRole::Admin => f.write_str("Admin"),
        }
    }
}

impl User {
    pub fn new(name: &str, email: &str, password: &str, role: UserRole) -> Self {
        User {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: hash_password(password),
            role,
        }
    }

    pub fn from_request(request: &SignUpRequest) -> Self {
        User::new(request.name.trim(), request.email.trim(), &request.password, UserRole::User)
    }

    pub fn verify_password(&self, password: &str) -> bool {
        self.password_hash == hash_password(password)
    }
}

/// The demo accounts written on first start.
pub fn seed_users() -> Vec<User> {
    vec![
        User::new("Admin", "admin@example.com", "admin123", UserRole::Admin),
        User::new("Test User", "user@example.com", "user123", UserRole::User),
    ]
}

pub fn hash_password(password: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
impl User {
    pub fn test_user(email: &str) -> Self {
        User::new("Test User", email, "secret1", UserRole::User)
    }
    pub fn test_admin(email: &str) -> Self {
        User::new("Test Admin", email, "secret1", UserRole::Admin)
    }
}
