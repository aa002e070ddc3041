//! Static asset fallback.
//!
//! Any request that no API route claims is resolved against the asset root.
//! Misses fall back to the single-page entry document, then to a JSON 404.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use tracing::debug;

use super::error::{ApiError, MSG_ROUTE_NOT_FOUND};
use crate::state::AppState;

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

pub const INDEX_DOCUMENT: &str = "index.html";

const OCTET_STREAM: &str = "application/octet-stream";

/// Content type for a file, keyed on its extension (case-insensitive).
#[must_use]
pub fn mime_for(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return OCTET_STREAM;
    };
    match ext.to_ascii_lowercase().as_str() {
        "html" => "text/html; charset=utf-8",
        "js" => "text/javascript; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "json" => "application/json; charset=utf-8",
        "svg" => "image/svg+xml; charset=utf-8",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => OCTET_STREAM,
    }
}

/// Map a request path onto the asset root.
///
/// Returns `None` for anything that would escape the root (`..`, absolute
/// prefixes) so such requests fall through to the entry document.
#[must_use]
pub fn resolve_asset(root: &Path, request_path: &str) -> Option<PathBuf> {
    let requested = if request_path == "/" { INDEX_DOCUMENT } else { request_path.trim_start_matches('/') };
    let mut resolved = root.to_path_buf();
    for component in Path::new(requested).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(resolved)
}

async fn read_asset(path: &Path) -> Option<Response> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Some((StatusCode::OK, [(CONTENT_TYPE, mime_for(path))], bytes).into_response()),
        Err(e) => {
            if e.kind() != ErrorKind::NotFound {
                debug!(path = %path.display(), error = %e, "asset unreadable");
            }
            None
        }
    }
}

/// Router fallback: static file, then entry document, then 404.
pub async fn serve(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return ApiError::NotFound(MSG_ROUTE_NOT_FOUND).into_response();
    }

    if let Some(path) = resolve_asset(&state.asset_dir, uri.path()) {
        if let Some(response) = read_asset(&path).await {
            return response;
        }
    }

    if let Some(response) = read_asset(&state.asset_dir.join(INDEX_DOCUMENT)).await {
        return response;
    }

    ApiError::NotFound(MSG_ROUTE_NOT_FOUND).into_response()
}
