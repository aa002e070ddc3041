//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three JSON/SVG endpoints under `/api` sit in front of the store. Every
//! other request falls through to the static asset server, which hosts the
//! drawing front end.
//!
//! Everything after `/api/svgs/` is the file name, slashes included, so
//! nested or empty names reach the admission check and get a 400. Wrong
//! methods on API paths share the fallback's JSON 404 instead of a bare 405.

pub mod assets;
pub mod error;
pub mod svgs;

use axum::Json;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health))
        .route("/api/svgs", get(svgs::list_svgs).post(svgs::create_svg))
        .route("/api/svgs/", get(svgs::get_svg_without_name))
        .route("/api/svgs/{*file_name}", get(svgs::get_svg))
        .method_not_allowed_fallback(assets::serve)
        .layer(DefaultBodyLimit::max(state.body_limit))
        .layer(cors)
        .fallback(assets::serve)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
