//! SVG → raster, for rehydrating a stored drawing.

use resvg::usvg;
use tiny_skia::{Pixmap, Transform};
use tracing::debug;

use crate::error::CanvasError;

/// Render an SVG document stretched to exactly `width` x `height` pixels.
///
/// Aspect ratio is not preserved.
///
/// # Errors
///
/// Returns `CanvasError::Decode` if the document does not parse, or
/// `CanvasError::InvalidSize` if the target surface cannot be allocated.
pub fn rasterize_svg(data: &[u8], width: u32, height: u32) -> Result<Pixmap, CanvasError> {
    let tree = usvg::Tree::from_data(data, &usvg::Options::default()).map_err(|e| CanvasError::Decode(e.to_string()))?;
    let mut pixmap = Pixmap::new(width, height).ok_or(CanvasError::InvalidSize { width, height })?;

    let size = tree.size();
    let transform = Transform::from_scale(width as f32 / size.width(), height as f32 / size.height());
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    debug!(src_width = size.width(), src_height = size.height(), width, height, "svg rasterized");
    Ok(pixmap)
}
