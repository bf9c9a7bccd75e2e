use reqwest::{Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::{AppError, AppResult};

pub const QUIZZES: &str = "quizzes";
pub const QUESTIONS: &str = "questions";

/// Thin JSON client for the mock REST API's collection endpoints.
#[derive(Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.base_url, collection)
    }

    pub fn item_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, collection, id)
    }

    pub async fn get_list<T: DeserializeOwned>(&self, collection: &str) -> AppResult<Vec<T>> {
        let url = self.collection_url(collection);
        log::debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        // The mock API answers 404 instead of [] for an empty collection
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        let response = check_status(response, &Method::GET, &url)?;
        Ok(response.json().await?)
    }

    pub async fn get_item<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
    ) -> AppResult<Option<T>> {
        let url = self.item_url(collection, id);
        log::debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = check_status(response, &Method::GET, &url)?;
        Ok(Some(response.json().await?))
    }

    pub async fn post<B, T>(&self, collection: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.collection_url(collection);
        self.send_json(Method::POST, url, body).await
    }

    pub async fn put<B, T>(&self, collection: &str, id: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.item_url(collection, id);
        self.send_json(Method::PUT, url, body).await
    }

    pub async fn delete(&self, collection: &str, id: &str) -> AppResult<()> {
        let url = self.item_url(collection, id);
        log::debug!("DELETE {}", url);

        let response = self.http.delete(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!(
                "No {} entry with id '{}'",
                collection, id
            )));
        }
        check_status(response, &Method::DELETE, &url)?;
        Ok(())
    }

    async fn send_json<B, T>(&self, method: Method, url: String, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        log::debug!("{} {}", method, url);

        let response = self
            .http
            .request(method.clone(), &url)
            .json(body)
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("{} not found", url)));
        }
        let response = check_status(response, &method, &url)?;
        Ok(response.json().await?)
    }
}

fn check_status(
    response: reqwest::Response,
    method: &Method,
    url: &str,
) -> AppResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    log::error!("{} {} failed with status {}", method, url, status);
    Err(status_error(status, method, url))
}

fn status_error(status: StatusCode, method: &Method, url: &str) -> AppError {
    AppError::Network(format!("{} {} returned {}", method, url, status))
}
