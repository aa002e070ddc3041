//! Raster → SVG envelope.
//!
//! The output carries no vector data: a single `<image>` element references
//! the flattened PNG through a base64 data URI. Pixels survive exactly; the
//! strokes do not survive as editable geometry.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// `data:image/png;base64,...` for raw PNG bytes.
#[must_use]
pub fn png_data_uri(png: &[u8]) -> String {
    format!("{PNG_DATA_URI_PREFIX}{}", STANDARD.encode(png))
}

/// Wrap PNG bytes in a fixed-template SVG document of the given pixel size.
#[must_use]
pub fn encode_svg(width: u32, height: u32, png: &[u8]) -> String {
    let href = png_data_uri(png);
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n  \
         <image width=\"100%\" height=\"100%\" href=\"{href}\" />\n\
         </svg>"
    )
}
