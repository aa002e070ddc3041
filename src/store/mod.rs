//! SVG file store.
//!
//! DESIGN
//! ======
//! Drawings are stored as opaque `<uuid>.svg` blobs in a flat namespace.
//! Route handlers only see the `SvgStore` trait so the backing medium (a
//! directory on disk in production, a map in tests) can change without
//! touching the HTTP layer.
//!
//! ADMISSION CONTROL
//! =================
//! Every read is gated by `is_valid_file_name` before the backend is touched.
//! The file name shape check is the only thing standing between a request
//! path and the filesystem, so backends must never resolve an unchecked name.

pub mod fs;
pub mod memory;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use async_trait::async_trait;
use uuid::Uuid;

pub use fs::FsStore;
pub use memory::MemoryStore;

/// File extension shared by every stored record.
pub const SVG_EXTENSION: &str = ".svg";

/// Length of a canonical hyphenated UUID.
const ID_LEN: usize = 36;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("svg content must be a string starting with '<'")]
    InvalidContent,
    #[error("invalid file name: {0}")]
    InvalidName(String),
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// A freshly persisted drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgRecord {
    pub id: Uuid,
    pub file_name: String,
}

impl SvgRecord {
    /// Build a record for a newly generated id.
    #[must_use]
    pub fn generate() -> Self {
        let id = Uuid::new_v4();
        Self { id, file_name: file_name_for(id) }
    }
}

/// Key-value style storage for SVG documents.
#[async_trait]
pub trait SvgStore: Send + Sync {
    /// All stored file names, sorted in descending lexicographic order.
    async fn list(&self) -> Result<Vec<String>, StoreError>;

    /// Persist `content` under a fresh id.
    async fn save(&self, content: &str) -> Result<SvgRecord, StoreError>;

    /// Raw bytes for a stored file.
    async fn read(&self, file_name: &str) -> Result<Vec<u8>, StoreError>;
}

// =============================================================================
// VALIDATION
// =============================================================================

/// `<id>.svg` for a record id (lowercase hyphenated form).
#[must_use]
pub fn file_name_for(id: Uuid) -> String {
    format!("{}{SVG_EXTENSION}", id.hyphenated())
}

/// Reject content that cannot plausibly be markup.
///
/// # Errors
///
/// Returns `StoreError::InvalidContent` if the trimmed content does not start
/// with `<`.
pub fn validate_content(content: &str) -> Result<(), StoreError> {
    if content.trim().starts_with('<') {
        Ok(())
    } else {
        Err(StoreError::InvalidContent)
    }
}

/// Whether `name` matches `^[a-f0-9-]{36}\.svg$`, case-insensitively.
#[must_use]
pub fn is_valid_file_name(name: &str) -> bool {
    let Some(split) = name.len().checked_sub(SVG_EXTENSION.len()) else {
        return false;
    };
    if !name.is_char_boundary(split) {
        return false;
    }
    let (stem, ext) = name.split_at(split);
    stem.len() == ID_LEN
        && ext.eq_ignore_ascii_case(SVG_EXTENSION)
        && stem.bytes().all(|b| b.is_ascii_hexdigit() || b == b'-')
}

/// Admission check for reads.
///
/// # Errors
///
/// Returns `StoreError::InvalidName` when the name fails `is_valid_file_name`.
pub fn check_file_name(name: &str) -> Result<(), StoreError> {
    if is_valid_file_name(name) {
        Ok(())
    } else {
        Err(StoreError::InvalidName(name.to_owned()))
    }
}

/// Sort file names newest-looking first (descending lexicographic).
pub(crate) fn sort_descending(names: &mut [String]) {
    names.sort_unstable_by(|a, b| b.cmp(a));
}
