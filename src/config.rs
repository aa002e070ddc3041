//! Server configuration parsed from environment variables.
//!
//! Optional:
//! - `HOST`: bind address (default `0.0.0.0`)
//! - `PORT`: listen port (default 3000)
//! - `SKETCHPAD_STORE`: `fs` (default) or `memory`; unknown values fall back to `fs`
//! - `SKETCHPAD_STORAGE_DIR`: directory holding `<uuid>.svg` files (default `storage`)
//! - `SKETCHPAD_ASSET_DIR`: static asset root (default `dist`)
//! - `SKETCHPAD_BODY_LIMIT`: max request body bytes (default 32 MiB)

use std::path::PathBuf;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STORAGE_DIR: &str = "storage";
pub const DEFAULT_ASSET_DIR: &str = "dist";
/// Flattened full-viewport PNGs inflate by a third once base64-encoded.
pub const DEFAULT_BODY_LIMIT: usize = 32 * 1024 * 1024;

/// Which `SvgStore` backend the server runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    /// One file per drawing under `storage_dir`.
    #[default]
    Fs,
    /// Process-local map; drawings are lost on restart.
    Memory,
}

impl StoreBackend {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "fs" | "file" | "files" => Some(Self::Fs),
            "memory" | "mem" => Some(Self::Memory),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreBackend,
    pub storage_dir: PathBuf,
    pub asset_dir: PathBuf,
    pub body_limit: usize,
}

impl ServerConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_owned()),
            port: env_parse("PORT", DEFAULT_PORT),
            store: std::env::var("SKETCHPAD_STORE")
                .ok()
                .and_then(|v| StoreBackend::parse(&v))
                .unwrap_or_default(),
            storage_dir: env_path("SKETCHPAD_STORAGE_DIR", DEFAULT_STORAGE_DIR),
            asset_dir: env_path("SKETCHPAD_ASSET_DIR", DEFAULT_ASSET_DIR),
            body_limit: env_parse("SKETCHPAD_BODY_LIMIT", DEFAULT_BODY_LIMIT),
        }
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

fn env_path(key: &str, default: &str) -> PathBuf {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map_or_else(|| PathBuf::from(default), PathBuf::from)
}
