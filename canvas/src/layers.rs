//! Two stacked raster layers of identical size.
//!
//! The background layer holds the flat fill and the optional grid. The
//! drawing layer starts transparent and accumulates strokes. Flattening
//! paints background then drawing onto a fresh surface, in that order.

#[cfg(test)]
#[path = "layers_test.rs"]
mod layers_test;

use tiny_skia::{FilterQuality, LineCap, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke, Transform};

use crate::color::Rgb;
use crate::consts::{BACKGROUND_COLOR, GRID_COLOR, GRID_LINE_WIDTH_PX, GRID_SPACING_PX, VIEWPORT_MARGIN_X, VIEWPORT_MARGIN_Y};
use crate::error::CanvasError;
use crate::geom::Shape;

/// Pen settings for a single stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgb,
    pub width: f32,
    pub round_cap: bool,
}

/// Surface size for a viewport, after reserving the fixed margins.
///
/// Never smaller than 1x1.
#[must_use]
pub fn surface_size_for_viewport(viewport_width: u32, viewport_height: u32) -> (u32, u32) {
    (
        viewport_width.saturating_sub(VIEWPORT_MARGIN_X).max(1),
        viewport_height.saturating_sub(VIEWPORT_MARGIN_Y).max(1),
    )
}

fn new_pixmap(width: u32, height: u32) -> Result<Pixmap, CanvasError> {
    Pixmap::new(width, height).ok_or(CanvasError::InvalidSize { width, height })
}

/// Background + drawing layer pair.
#[derive(Debug, Clone)]
pub struct LayerStack {
    background: Pixmap,
    drawing: Pixmap,
}

impl LayerStack {
    /// Allocate both layers and paint the background (grid off).
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::InvalidSize` for zero or oversized dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        let mut stack = Self { background: new_pixmap(width, height)?, drawing: new_pixmap(width, height)? };
        stack.repaint_background(false);
        Ok(stack)
    }

    /// Layers sized for a viewport minus the fixed margins.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::InvalidSize` if the surface cannot be allocated.
    pub fn for_viewport(viewport_width: u32, viewport_height: u32) -> Result<Self, CanvasError> {
        let (width, height) = surface_size_for_viewport(viewport_width, viewport_height);
        Self::new(width, height)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.background.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.background.height()
    }

    #[must_use]
    pub fn background(&self) -> &Pixmap {
        &self.background
    }

    #[must_use]
    pub fn drawing(&self) -> &Pixmap {
        &self.drawing
    }

    /// Reallocate both layers. Drawing content does not survive a resize.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::InvalidSize` and leaves the layers untouched if
    /// the new size cannot be allocated.
    pub fn resize(&mut self, width: u32, height: u32, grid: bool) -> Result<(), CanvasError> {
        let background = new_pixmap(width, height)?;
        let drawing = new_pixmap(width, height)?;
        self.background = background;
        self.drawing = drawing;
        self.repaint_background(grid);
        Ok(())
    }

    /// Flat fill, then a 1px grid every 25px on both axes when `grid` is set.
    pub fn repaint_background(&mut self, grid: bool) {
        self.background.fill(BACKGROUND_COLOR.to_skia());
        if !grid {
            return;
        }

        let width = self.width() as f32;
        let height = self.height() as f32;
        let mut pb = PathBuilder::new();
        for x in (0..self.width()).step_by(GRID_SPACING_PX as usize) {
            pb.move_to(x as f32, 0.0);
            pb.line_to(x as f32, height);
        }
        for y in (0..self.height()).step_by(GRID_SPACING_PX as usize) {
            pb.move_to(0.0, y as f32);
            pb.line_to(width, y as f32);
        }
        let Some(path) = pb.finish() else {
            return;
        };

        let mut paint = Paint::default();
        paint.set_color(GRID_COLOR.to_skia());
        let stroke = Stroke { width: GRID_LINE_WIDTH_PX, ..Stroke::default() };
        self.background.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    /// Make the drawing layer fully transparent.
    pub fn clear_drawing(&mut self) {
        self.drawing.fill(tiny_skia::Color::TRANSPARENT);
    }

    /// Stroke `shape` onto the drawing layer. Degenerate shapes draw nothing.
    pub fn stroke_shape(&mut self, shape: &Shape, style: StrokeStyle) {
        let Some(path) = shape.to_path() else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color(style.color.to_skia());
        let stroke = Stroke {
            width: style.width,
            line_cap: if style.round_cap { LineCap::Round } else { LineCap::Butt },
            ..Stroke::default()
        };
        self.drawing.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    /// Draw `image` onto the drawing layer, stretched to the full layer size.
    pub fn draw_stretched(&mut self, image: &Pixmap) {
        let sx = self.width() as f32 / image.width() as f32;
        let sy = self.height() as f32 / image.height() as f32;
        let paint = PixmapPaint { quality: FilterQuality::Bilinear, ..PixmapPaint::default() };
        self.drawing
            .draw_pixmap(0, 0, image.as_ref(), &paint, Transform::from_scale(sx, sy), None);
    }

    /// Composite background then drawing onto a fresh surface.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::InvalidSize` if the output surface cannot be allocated.
    pub fn flatten(&self) -> Result<Pixmap, CanvasError> {
        let mut out = new_pixmap(self.width(), self.height())?;
        let paint = PixmapPaint::default();
        out.draw_pixmap(0, 0, self.background.as_ref(), &paint, Transform::identity(), None);
        out.draw_pixmap(0, 0, self.drawing.as_ref(), &paint, Transform::identity(), None);
        Ok(out)
    }

    /// Flatten and encode as PNG.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::Encode` if PNG encoding fails.
    pub fn flatten_png(&self) -> Result<Vec<u8>, CanvasError> {
        self.flatten()?
            .encode_png()
            .map_err(|e| CanvasError::Encode(e.to_string()))
    }
}
