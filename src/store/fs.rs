//! Directory-backed store: one `<uuid>.svg` file per record, no subdirectories.
//!
//! Writes are single-pass `tokio::fs::write` calls. There is no temp-file
//! rename, so a read racing a write may observe a partial file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, info};

use super::{StoreError, SvgRecord, SvgStore, SVG_EXTENSION, check_file_name, sort_descending, validate_content};

#[cfg(test)]
#[path = "fs_test.rs"]
mod fs_test;

#[derive(Debug, Clone)]
pub struct FsStore {
    dir: PathBuf,
}

impl FsStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory cannot be created.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await?;
        info!(path = %dir.display(), "svg store initialized");
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }
}

#[async_trait]
impl SvgStore for FsStore {
    async fn list(&self) -> Result<Vec<String>, StoreError> {
        let mut entries = fs::read_dir(&self.dir).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if let Some(name) = entry.file_name().to_str() {
                if name.ends_with(SVG_EXTENSION) {
                    names.push(name.to_owned());
                }
            }
        }
        sort_descending(&mut names);
        debug!(count = names.len(), "listed svg files");
        Ok(names)
    }

    async fn save(&self, content: &str) -> Result<SvgRecord, StoreError> {
        validate_content(content)?;
        let record = SvgRecord::generate();
        fs::write(self.path_for(&record.file_name), content.as_bytes()).await?;
        info!(file_name = %record.file_name, bytes = content.len(), "svg saved");
        Ok(record)
    }

    async fn read(&self, file_name: &str) -> Result<Vec<u8>, StoreError> {
        check_file_name(file_name)?;
        match fs::read(self.path_for(file_name)).await {
            Ok(bytes) => {
                debug!(%file_name, bytes = bytes.len(), "svg read");
                Ok(bytes)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StoreError::NotFound(file_name.to_owned())),
            Err(e) => Err(e.into()),
        }
    }
}
