//! Shared numeric constants for the canvas crate.

use crate::color::Rgb;

// ── Layout ──────────────────────────────────────────────────────

/// Horizontal space reserved around the drawing surface, in pixels.
pub const VIEWPORT_MARGIN_X: u32 = 40;

/// Vertical space reserved for the toolbar and status line, in pixels.
pub const VIEWPORT_MARGIN_Y: u32 = 150;

// ── Background ──────────────────────────────────────────────────

/// Flat fill of the background layer. The eraser paints with this color.
pub const BACKGROUND_COLOR: Rgb = Rgb::new(0xff, 0xff, 0xff);

/// Grid line color.
pub const GRID_COLOR: Rgb = Rgb::new(0xe0, 0xe0, 0xe0);

/// Distance between grid lines on both axes.
pub const GRID_SPACING_PX: u32 = 25;

/// Grid line width.
pub const GRID_LINE_WIDTH_PX: f32 = 1.0;

// ── Brush ───────────────────────────────────────────────────────

pub const DEFAULT_BRUSH_SIZE: f32 = 5.0;
pub const MIN_BRUSH_SIZE: f32 = 1.0;
pub const MAX_BRUSH_SIZE: f32 = 100.0;
pub const DEFAULT_COLOR: Rgb = Rgb::new(0, 0, 0);
