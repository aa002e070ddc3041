//! The drawing surface: layers, session settings, and gesture handling.
//!
//! Pointer handlers mirror the three DOM mouse events. Pen and eraser commit
//! a segment on every move; line, rect, and circle commit once on release.
//! Each handler reports what it painted so hosts can decide whether to
//! re-present the surface.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::debug;

use crate::color::Rgb;
use crate::consts::BACKGROUND_COLOR;
use crate::error::CanvasError;
use crate::export::encode_svg;
use crate::geom::{Point, Shape};
use crate::import::rasterize_svg;
use crate::input::{InputState, SessionState, Tool, clamp_brush_size};
use crate::layers::{LayerStack, StrokeStyle, surface_size_for_viewport};

/// Result of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    None,
    Drew(Shape),
}

/// A drawing surface with its own session state.
#[derive(Debug, Clone)]
pub struct DrawingSurface {
    pub session: SessionState,
    pub input: InputState,
    layers: LayerStack,
    /// Line cap shared by every stroke. Starts butt; the first freehand
    /// segment switches it to round until the next resize.
    round_caps: bool,
}

impl DrawingSurface {
    /// Surface of exactly `width` x `height` pixels with default settings.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::InvalidSize` if the layers cannot be allocated.
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        Ok(Self {
            session: SessionState::default(),
            input: InputState::Idle,
            layers: LayerStack::new(width, height)?,
            round_caps: false,
        })
    }

    /// Surface sized for a viewport minus the fixed margins.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::InvalidSize` if the layers cannot be allocated.
    pub fn for_viewport(viewport_width: u32, viewport_height: u32) -> Result<Self, CanvasError> {
        let (width, height) = surface_size_for_viewport(viewport_width, viewport_height);
        Self::new(width, height)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.layers.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.layers.height()
    }

    #[must_use]
    pub fn layers(&self) -> &LayerStack {
        &self.layers
    }

    // --- Session ---

    pub fn set_tool(&mut self, tool: Tool) {
        self.session.tool = tool;
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.session.color = color;
    }

    pub fn set_brush_size(&mut self, size: f32) {
        self.session.brush_size = clamp_brush_size(size);
    }

    /// Toggle the grid and repaint the background. Strokes are untouched.
    pub fn set_grid(&mut self, grid: bool) {
        self.session.grid = grid;
        self.layers.repaint_background(grid);
    }

    /// Wipe the drawing layer.
    pub fn clear(&mut self) {
        self.layers.clear_drawing();
    }

    /// Follow a viewport resize. Like a browser canvas, strokes are lost and
    /// the line cap goes back to butt.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::InvalidSize` and keeps the current layers if the
    /// new size cannot be allocated.
    pub fn resize_viewport(&mut self, viewport_width: u32, viewport_height: u32) -> Result<(), CanvasError> {
        let (width, height) = surface_size_for_viewport(viewport_width, viewport_height);
        self.layers.resize(width, height, self.session.grid)?;
        self.input = InputState::Idle;
        self.round_caps = false;
        Ok(())
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, pt: Point) -> Action {
        self.input = InputState::Dragging { origin: pt, last: pt };
        Action::None
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Action {
        let InputState::Dragging { origin, last } = self.input else {
            return Action::None;
        };
        if !self.session.tool.is_freehand() {
            return Action::None;
        }

        let segment = Shape::Segment { from: last, to: pt };
        self.round_caps = true;
        self.layers.stroke_shape(&segment, self.freehand_style());
        self.input = InputState::Dragging { origin, last: pt };
        Action::Drew(segment)
    }

    pub fn on_pointer_up(&mut self, pt: Point) -> Action {
        let InputState::Dragging { origin, .. } = self.input else {
            return Action::None;
        };
        self.input = InputState::Idle;

        let shape = match self.session.tool {
            Tool::Pen | Tool::Eraser => return Action::None,
            Tool::Line => Shape::Segment { from: origin, to: pt },
            Tool::Rect => Shape::rect_between(origin, pt),
            Tool::Circle => Shape::circle_through(origin, pt),
        };
        self.layers.stroke_shape(&shape, self.shape_style());
        Action::Drew(shape)
    }

    fn freehand_style(&self) -> StrokeStyle {
        let color = if self.session.tool == Tool::Eraser { BACKGROUND_COLOR } else { self.session.color };
        StrokeStyle { color, width: self.session.brush_size, round_cap: true }
    }

    fn shape_style(&self) -> StrokeStyle {
        StrokeStyle { color: self.session.color, width: self.session.brush_size, round_cap: self.round_caps }
    }

    // --- Export / import ---

    /// Flattened canvas as PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::Encode` if PNG encoding fails.
    pub fn export_png(&self) -> Result<Vec<u8>, CanvasError> {
        self.layers.flatten_png()
    }

    /// Flattened canvas wrapped in the SVG envelope.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::Encode` if PNG encoding fails.
    pub fn export_svg(&self) -> Result<String, CanvasError> {
        let png = self.layers.flatten_png()?;
        debug!(width = self.width(), height = self.height(), png_bytes = png.len(), "canvas exported");
        Ok(encode_svg(self.width(), self.height(), &png))
    }

    /// Replace the drawing with a stored SVG, stretched to the surface.
    ///
    /// The document is decoded before anything is touched, so a failure
    /// leaves the current drawing intact.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::Decode` if the SVG cannot be parsed.
    pub fn load_svg(&mut self, data: &[u8]) -> Result<(), CanvasError> {
        let image = rasterize_svg(data, self.width(), self.height())?;
        self.input = InputState::Idle;
        self.layers.clear_drawing();
        self.layers.repaint_background(self.session.grid);
        self.layers.draw_stretched(&image);
        Ok(())
    }
}
