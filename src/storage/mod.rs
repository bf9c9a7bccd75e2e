use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::AppResult;

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

pub const CURRENT_USER_KEY: &str = "currentUser";
pub const USERS_KEY: &str = "users";
pub const QUIZ_RESULT_KEY: &str = "quizResult";
pub const QUIZ_HISTORY_KEY: &str = "quizHistory";

/// String key/value persistence, the way a browser's local storage behaves.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> AppResult<Option<String>>;
    async fn set(&self, key: &str, value: String) -> AppResult<()>;
    async fn remove(&self, key: &str) -> AppResult<()>;
}

/// Reads a JSON value. A value that fails to parse is logged and treated as
/// absent.
pub async fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> AppResult<Option<T>> {
    let Some(raw) = store.get(key).await? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            log::warn!("Ignoring malformed value under '{}': {}", key, err);
            Ok(None)
        }
    }
}

pub async fn write_json<T: Serialize + Sync>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> AppResult<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, raw).await
}

/// Reads a JSON list item by item. Items that fail to parse are logged and
/// skipped; a value that is not a list at all reads as empty.
pub async fn read_list<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> AppResult<Vec<T>> {
    let Some(items) = read_json::<Vec<serde_json::Value>>(store, key).await? else {
        return Ok(Vec::new());
    };

    let items = items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| match serde_json::from_value(item) {
            Ok(item) => Some(item),
            Err(err) => {
                log::warn!("Skipping malformed item {} under '{}': {}", idx, key, err);
                None
            }
        })
        .collect();
    Ok(items)
}

pub async fn append_json<T: Serialize + DeserializeOwned + Sync>(
    store: &dyn KeyValueStore,
    key: &str,
    item: T,
) -> AppResult<()> {
    let mut items: Vec<T> = read_list(store, key).await?;
    items.push(item);
    write_json(store, key, &items).await
}
