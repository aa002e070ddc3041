//! Remote sync client: the saved-file picker, save, and load.
//!
//! DESIGN
//! ======
//! `SyncClient` owns the picker contents and a one-line status, the two bits
//! of UI a drawing front end shows for sync. The canvas itself is borrowed per
//! call so the client never holds drawing state.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is written to the status line and returned. Failed saves and
//! loads never touch the canvas: a load decodes the whole document before the
//! drawing layer is cleared.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use canvas::{CanvasError, DrawingSurface};
use tracing::{info, warn};

use crate::api::{RemoteError, RemoteStore, SavedSvg};

pub const PLACEHOLDER_LABEL: &str = "Select a saved SVG";

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error(transparent)]
    Remote(#[from] RemoteError),
    #[error(transparent)]
    Canvas(#[from] CanvasError),
    #[error("no file selected")]
    NoSelection,
}

/// One-line status shown under the toolbar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Status {
    pub message: String,
    pub is_error: bool,
}

impl Status {
    fn ok(message: impl Into<String>) -> Self {
        Self { message: message.into(), is_error: false }
    }

    fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), is_error: true }
    }
}

/// A picker entry. The placeholder has an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOption {
    pub value: String,
    pub label: String,
}

/// Saved-file picker: a placeholder followed by one entry per stored file.
#[derive(Debug, Clone, Default)]
pub struct FileList {
    files: Vec<String>,
    selected: Option<String>,
}

impl FileList {
    /// Replace the entries. Selection falls back to the placeholder.
    pub fn replace(&mut self, files: Vec<String>) {
        self.files = files;
        self.selected = None;
    }

    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    #[must_use]
    pub fn options(&self) -> Vec<FileOption> {
        std::iter::once(FileOption { value: String::new(), label: PLACEHOLDER_LABEL.to_owned() })
            .chain(self.files.iter().map(|f| FileOption { value: f.clone(), label: f.clone() }))
            .collect()
    }

    /// Select an entry by value. An empty value selects the placeholder.
    /// Returns `false` (selection unchanged) if no entry has that value.
    pub fn select(&mut self, value: &str) -> bool {
        if value.is_empty() {
            self.selected = None;
            return true;
        }
        if self.files.iter().any(|f| f == value) {
            self.selected = Some(value.to_owned());
            return true;
        }
        false
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}

pub struct SyncClient<R> {
    remote: R,
    files: FileList,
    status: Status,
}

impl<R: RemoteStore> SyncClient<R> {
    pub fn new(remote: R) -> Self {
        Self { remote, files: FileList::default(), status: Status::default() }
    }

    pub fn files(&self) -> &FileList {
        &self.files
    }

    pub fn files_mut(&mut self) -> &mut FileList {
        &mut self.files
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Reload the picker from the server.
    ///
    /// # Errors
    ///
    /// Returns the remote error; the picker keeps its previous entries.
    pub async fn refresh_list(&mut self) -> Result<(), SyncError> {
        match self.remote.list().await {
            Ok(files) => {
                self.status = Status::ok(format!("Loaded {} SVG file(s).", files.len()));
                self.files.replace(files);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "svg list refresh failed");
                self.status = Status::error(format!("List request failed: {e}"));
                Err(e.into())
            }
        }
    }

    /// Export the surface, upload it, then refresh and select the new file.
    ///
    /// A failed refresh after a successful upload is reported in the status
    /// line but does not fail the save.
    ///
    /// # Errors
    ///
    /// Returns export or upload failures.
    pub async fn save_current(&mut self, surface: &DrawingSurface) -> Result<SavedSvg, SyncError> {
        let result = match surface.export_svg() {
            Ok(svg) => self.remote.save(&svg).await.map_err(SyncError::from),
            Err(e) => Err(e.into()),
        };
        let saved = match result {
            Ok(saved) => saved,
            Err(e) => {
                warn!(error = %e, "svg save failed");
                self.status = Status::error(format!("Save failed: {e}"));
                return Err(e);
            }
        };

        info!(file_name = %saved.file_name, "svg saved to server");
        self.status = Status::ok(format!("Saved: {}", saved.file_name));
        if self.refresh_list().await.is_ok() {
            self.files.select(&saved.file_name);
        }
        Ok(saved)
    }

    /// Fetch the selected file and paint it over a cleared drawing layer.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::NoSelection` when only the placeholder is selected,
    /// otherwise the fetch or decode failure. The surface is untouched on error.
    pub async fn load_selected(&mut self, surface: &mut DrawingSurface) -> Result<(), SyncError> {
        let Some(file_name) = self.files.selected().map(ToOwned::to_owned) else {
            self.status = Status::error("Select an SVG to load.");
            return Err(SyncError::NoSelection);
        };

        let bytes = match self.remote.fetch(&file_name).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(%file_name, error = %e, "svg fetch failed");
                self.status = Status::error(format!("Load failed: {e}"));
                return Err(e.into());
            }
        };

        if let Err(e) = surface.load_svg(&bytes) {
            warn!(%file_name, error = %e, "svg render failed");
            self.status = Status::error(format!("SVG render failed: {file_name}"));
            return Err(e.into());
        }

        self.status = Status::ok(format!("Loaded: {file_name}"));
        Ok(())
    }
}
