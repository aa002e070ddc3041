//! HTTP error taxonomy.
//!
//! Every non-success response body is a JSON object with a single
//! human-readable `message` field.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{error, warn};

use crate::store::StoreError;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

pub const MSG_INVALID_CONTENT: &str = "A valid svgContent string is required.";
pub const MSG_INVALID_NAME: &str = "Invalid file name format.";
pub const MSG_FILE_NOT_FOUND: &str = "File not found.";
pub const MSG_MALFORMED_JSON: &str = "Malformed JSON body.";
pub const MSG_ROUTE_NOT_FOUND: &str = "Not found";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("malformed json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Parse(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message for the response body.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Validation(msg) | Self::NotFound(msg) => (*msg).to_owned(),
            Self::Parse(_) => MSG_MALFORMED_JSON.to_owned(),
            Self::Internal(detail) => format!("Server error: {detail}"),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidContent => Self::Validation(MSG_INVALID_CONTENT),
            StoreError::InvalidName(_) => Self::Validation(MSG_INVALID_NAME),
            StoreError::NotFound(_) => Self::NotFound(MSG_FILE_NOT_FOUND),
            StoreError::Io(e) if e.kind() == std::io::ErrorKind::NotFound => Self::NotFound(MSG_FILE_NOT_FOUND),
            StoreError::Io(e) => Self::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(%status, error = %self, "request rejected");
        }
        (status, Json(MessageBody { message: self.message() })).into_response()
    }
}
