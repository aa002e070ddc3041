//! Local canvas downloads, keyed on the output file extension.
//!
//! `.jpg` / `.jpeg` carry the flattened PNG bytes unchanged: the browser
//! download only relabels the data URI, so the file is PNG data under a JPEG
//! name.

#[cfg(test)]
#[path = "output_test.rs"]
mod output_test;

use std::path::Path;

use canvas::{CanvasError, DrawingSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
    /// PNG bytes under a JPEG label.
    Jpeg,
}

impl OutputFormat {
    /// Format for a path's extension (case-insensitive), if supported.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "svg" => Some(Self::Svg),
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            _ => None,
        }
    }
}

/// Encode the surface for `format`.
///
/// # Errors
///
/// Returns `CanvasError::Encode` if PNG encoding fails.
pub fn render(surface: &DrawingSurface, format: OutputFormat) -> Result<Vec<u8>, CanvasError> {
    match format {
        OutputFormat::Svg => Ok(surface.export_svg()?.into_bytes()),
        OutputFormat::Png | OutputFormat::Jpeg => surface.export_png(),
    }
}
