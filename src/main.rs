mod config;
mod routes;
mod state;
mod store;

use std::sync::Arc;

use crate::config::{ServerConfig, StoreBackend};
use crate::store::{FsStore, MemoryStore, SvgStore};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env();

    let store: Arc<dyn SvgStore> = match config.store {
        StoreBackend::Fs => {
            let store = FsStore::open(&config.storage_dir)
                .await
                .expect("storage directory init failed");
            tracing::info!(storage = %store.dir().display(), "using directory store");
            Arc::new(store)
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory store; drawings are lost on restart");
            Arc::new(MemoryStore::new())
        }
    };
    let state = state::AppState::new(store, config.asset_dir.clone(), config.body_limit);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .expect("failed to bind");

    tracing::info!(
        port = config.port,
        assets = %config.asset_dir.display(),
        "sketchpad listening"
    );
    axum::serve(listener, app).await.expect("server failed");
}
