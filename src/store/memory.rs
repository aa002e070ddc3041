//! In-process store with the same admission and ordering rules as `FsStore`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StoreError, SvgRecord, SvgStore, check_file_name, sort_descending, validate_content};

#[derive(Debug, Default)]
pub struct MemoryStore {
    files: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SvgStore for MemoryStore {
    async fn list(&self) -> Result<Vec<String>, StoreError> {
        let mut names: Vec<String> = self.files.read().await.keys().cloned().collect();
        sort_descending(&mut names);
        Ok(names)
    }

    async fn save(&self, content: &str) -> Result<SvgRecord, StoreError> {
        validate_content(content)?;
        let record = SvgRecord::generate();
        self.files
            .write()
            .await
            .insert(record.file_name.clone(), content.as_bytes().to_vec());
        Ok(record)
    }

    async fn read(&self, file_name: &str) -> Result<Vec<u8>, StoreError> {
        check_file_name(file_name)?;
        self.files
            .read()
            .await
            .get(file_name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(file_name.to_owned()))
    }
}
