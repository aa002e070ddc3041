//! Gesture scripts: drive a `DrawingSurface` from a JSON array of steps.
//!
//! ```json
//! [{"tool": "rect"}, {"color": "#ff0000"}, {"brush_size": 3},
//!  {"stroke": [[10, 10], [120, 80]]}, "clear", {"grid": true}]
//! ```
//!
//! A stroke presses at its first point, moves through every point, and
//! releases at its last, so one step covers both freehand and shape tools.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use canvas::color::Rgb;
use canvas::geom::Point;
use canvas::{CanvasError, DrawingSurface, Tool};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("invalid script: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("step {index}: {source}")]
    Canvas {
        index: usize,
        #[source]
        source: CanvasError,
    },
    #[error("step {0}: stroke has no points")]
    EmptyStroke(usize),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Tool(Tool),
    Color(String),
    BrushSize(f32),
    Grid(bool),
    Clear,
    Stroke(Vec<[f32; 2]>),
}

/// Parse a script document.
///
/// # Errors
///
/// Returns `ScriptError::Parse` if the input is not an array of steps.
pub fn parse_script(raw: &str) -> Result<Vec<Step>, ScriptError> {
    Ok(serde_json::from_str(raw)?)
}

/// Apply steps in order and return how many strokes were drawn.
///
/// Stops at the first failing step; earlier steps stay applied.
///
/// # Errors
///
/// Returns the failing step's index with a bad color or an empty stroke.
pub fn apply(surface: &mut DrawingSurface, steps: &[Step]) -> Result<usize, ScriptError> {
    let mut strokes = 0;
    for (index, step) in steps.iter().enumerate() {
        match step {
            Step::Tool(tool) => surface.set_tool(*tool),
            Step::Color(raw) => {
                let color = Rgb::parse_hex(raw).map_err(|source| ScriptError::Canvas { index, source })?;
                surface.set_color(color);
            }
            Step::BrushSize(size) => surface.set_brush_size(*size),
            Step::Grid(grid) => surface.set_grid(*grid),
            Step::Clear => surface.clear(),
            Step::Stroke(points) => {
                stroke(surface, points).ok_or(ScriptError::EmptyStroke(index))?;
                strokes += 1;
            }
        }
    }
    Ok(strokes)
}

fn stroke(surface: &mut DrawingSurface, points: &[[f32; 2]]) -> Option<()> {
    let (first, rest) = points.split_first()?;
    surface.on_pointer_down(Point::new(first[0], first[1]));
    for &[x, y] in rest {
        surface.on_pointer_move(Point::new(x, y));
    }
    let &[x, y] = points.last()?;
    surface.on_pointer_up(Point::new(x, y));
    Some(())
}
