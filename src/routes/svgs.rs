//! `/api/svgs` routes: list, create, and fetch stored drawings.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::error::{ApiError, MSG_INVALID_CONTENT, MSG_INVALID_NAME};
use crate::state::AppState;

#[cfg(test)]
#[path = "svgs_test.rs"]
mod svgs_test;

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml; charset=utf-8";

#[derive(Debug, Serialize, Deserialize)]
pub struct SvgListResponse {
    pub files: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SvgCreatedResponse {
    pub id: Uuid,
    pub file_name: String,
    pub path: String,
}

/// Public path a stored file is served from.
#[must_use]
pub fn svg_path(file_name: &str) -> String {
    format!("/api/svgs/{file_name}")
}

/// Extract `svgContent` from a raw request body.
///
/// An empty body is treated as `{}`. Any non-string `svgContent` is a
/// validation failure rather than a parse failure.
pub(crate) fn parse_svg_content(raw: &[u8]) -> Result<String, ApiError> {
    let body: Value = if raw.is_empty() {
        Value::Object(serde_json::Map::new())
    } else {
        serde_json::from_slice(raw)?
    };

    body.get("svgContent")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(ApiError::Validation(MSG_INVALID_CONTENT))
}

/// `GET /api/svgs`: list stored file names, newest-looking first.
pub async fn list_svgs(State(state): State<AppState>) -> Result<Json<SvgListResponse>, ApiError> {
    let files = state.store.list().await?;
    Ok(Json(SvgListResponse { files }))
}

/// `POST /api/svgs`: persist `{"svgContent": "<svg ...>"}` under a new id.
pub async fn create_svg(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<SvgCreatedResponse>), ApiError> {
    let content = parse_svg_content(&body)?;
    let record = state.store.save(&content).await?;
    let path = svg_path(&record.file_name);
    Ok((
        StatusCode::CREATED,
        Json(SvgCreatedResponse { id: record.id, file_name: record.file_name, path }),
    ))
}

/// `GET /api/svgs/`: an empty name never passes admission.
pub async fn get_svg_without_name() -> ApiError {
    ApiError::Validation(MSG_INVALID_NAME)
}

/// `GET /api/svgs/{*file_name}`: raw SVG bytes.
pub async fn get_svg(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let bytes = state.store.read(&file_name).await?;
    Ok(([(CONTENT_TYPE, SVG_CONTENT_TYPE)], bytes))
}
