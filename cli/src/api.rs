//! HTTP access to the sketchpad server.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `RemoteError::Status`, carrying the server's
//! `message` field when the body has one. Transport failures pass through as
//! `RemoteError::Http`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
}

/// Server response to a successful save.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSvg {
    pub id: String,
    pub file_name: String,
    pub path: String,
}

#[derive(Debug, Deserialize)]
struct FileListBody {
    files: Vec<String>,
}

/// The three store operations the drawing client depends on.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    async fn list(&self) -> Result<Vec<String>, RemoteError>;
    async fn save(&self, svg_content: &str) -> Result<SavedSvg, RemoteError>;
    async fn fetch(&self, file_name: &str) -> Result<Vec<u8>, RemoteError>;
}

pub(crate) fn health_endpoint(base_url: &str) -> String {
    format!("{}/api/health", base_url.trim_end_matches('/'))
}

pub(crate) fn list_endpoint(base_url: &str) -> String {
    format!("{}/api/svgs", base_url.trim_end_matches('/'))
}

/// Fetch URL with a `t` query parameter so intermediaries never serve a stale copy.
pub(crate) fn fetch_endpoint(base_url: &str, file_name: &str, cache_bust: u128) -> String {
    format!("{}/api/svgs/{file_name}?t={cache_bust}", base_url.trim_end_matches('/'))
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis())
}

/// Pull the `message` field out of an error body, falling back to the raw text.
pub(crate) fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(ToOwned::to_owned))
        .unwrap_or_else(|| body.trim().to_owned())
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(RemoteError::Status { status: status.as_u16(), message: error_message(&body) })
}

#[derive(Debug, Clone)]
pub struct HttpRemote {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRemote {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { client: reqwest::Client::new(), base_url: base_url.into() }
    }

    /// `GET /api/health`.
    ///
    /// # Errors
    ///
    /// Returns an error if the server is unreachable or unhealthy.
    pub async fn health(&self) -> Result<Value, RemoteError> {
        let response = self.client.get(health_endpoint(&self.base_url)).send().await?;
        Ok(ensure_success(response).await?.json().await?)
    }
}

#[async_trait]
impl RemoteStore for HttpRemote {
    async fn list(&self) -> Result<Vec<String>, RemoteError> {
        let response = self.client.get(list_endpoint(&self.base_url)).send().await?;
        let body: FileListBody = ensure_success(response).await?.json().await?;
        debug!(count = body.files.len(), "listed remote svgs");
        Ok(body.files)
    }

    async fn save(&self, svg_content: &str) -> Result<SavedSvg, RemoteError> {
        let response = self
            .client
            .post(list_endpoint(&self.base_url))
            .json(&json!({ "svgContent": svg_content }))
            .send()
            .await?;
        Ok(ensure_success(response).await?.json().await?)
    }

    async fn fetch(&self, file_name: &str) -> Result<Vec<u8>, RemoteError> {
        let url = fetch_endpoint(&self.base_url, file_name, now_millis());
        let response = self.client.get(url).send().await?;
        let bytes = ensure_success(response).await?.bytes().await?;
        debug!(%file_name, bytes = bytes.len(), "fetched remote svg");
        Ok(bytes.to_vec())
    }
}
