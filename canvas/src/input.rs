//! Input model: tools, per-session brush settings, and the drag state machine.
//!
//! `SessionState` replaces what a page script would keep in globals: it is
//! owned by the surface and passed explicitly to whatever handles an event.
//! `InputState` is the gesture tracked between pointer-down and pointer-up.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::consts::{DEFAULT_BRUSH_SIZE, DEFAULT_COLOR, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};
use crate::geom::Point;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand stroke in the current color (default).
    #[default]
    Pen,
    /// Freehand stroke in the background color.
    Eraser,
    /// Straight segment from press to release.
    Line,
    /// Unfilled rectangle spanning press and release.
    Rect,
    /// Unfilled circle centered on the press point.
    Circle,
}

impl Tool {
    pub const ALL: [Tool; 5] = [Tool::Pen, Tool::Eraser, Tool::Line, Tool::Rect, Tool::Circle];

    /// Whether the tool paints continuously while dragging.
    #[must_use]
    pub fn is_freehand(self) -> bool {
        matches!(self, Self::Pen | Self::Eraser)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pen => "pen",
            Self::Eraser => "eraser",
            Self::Line => "line",
            Self::Rect => "rect",
            Self::Circle => "circle",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tool: {0}")]
pub struct UnknownTool(pub String);

impl FromStr for Tool {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTool(s.to_owned()))
    }
}

/// Brush settings that outlive a single gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionState {
    pub tool: Tool,
    pub color: Rgb,
    pub brush_size: f32,
    pub grid: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { tool: Tool::default(), color: DEFAULT_COLOR, brush_size: DEFAULT_BRUSH_SIZE, grid: false }
    }
}

/// Clamp a requested brush size into the supported range.
///
/// Non-finite input yields the default size.
#[must_use]
pub fn clamp_brush_size(size: f32) -> f32 {
    if size.is_finite() { size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE) } else { DEFAULT_BRUSH_SIZE }
}

/// Gesture state between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; pointer moves are ignored.
    #[default]
    Idle,
    /// Pointer is held down on the surface.
    Dragging {
        /// Where the press happened. Shape tools measure from here.
        origin: Point,
        /// End of the open freehand path; the next segment starts here.
        last: Point,
    },
}

impl InputState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}
