//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. There
//! is no in-process mutable state: the store backend is the only thing shared
//! between requests.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::store::SvgStore;

/// Shared application state. Clone is required by Axum; all fields are cheap
/// to clone.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SvgStore>,
    /// Root directory for static assets and the entry document.
    pub asset_dir: Arc<Path>,
    /// Maximum accepted request body, in bytes.
    pub body_limit: usize,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn SvgStore>, asset_dir: PathBuf, body_limit: usize) -> Self {
        Self { store, asset_dir: Arc::from(asset_dir), body_limit }
    }
}
