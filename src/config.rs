use std::{env, path::PathBuf};

pub const DEFAULT_API_BASE_URL: &str = "https://6899e7ecfed141b96ba13488.mockapi.io";
pub const DEFAULT_STORAGE_PATH: &str = "quiz-portal-storage.json";

#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: String,
    pub storage_path: PathBuf,
    pub seed_demo_users: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("QUIZ_API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            storage_path: env::var("QUIZ_STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_PATH)),
            seed_demo_users: env::var("QUIZ_SEED_DEMO_USERS")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:9".to_string(),
            storage_path: env::temp_dir().join("quiz-portal-test-storage.json"),
            seed_demo_users: true,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
