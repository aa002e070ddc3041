//! Raster drawing surface for the sketchpad.
//!
//! This crate owns the client-side half of the drawing pipeline: two stacked
//! raster layers, the pointer-driven tool state machine that paints onto
//! them, and the export/import path that turns the flattened canvas into a
//! raster-carrying SVG document and back. It has no I/O of its own; callers
//! feed it pointer events and bytes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::DrawingSurface`]: session state + layers + input |
//! | [`layers`] | Background/drawing layers, flatten, PNG encoding |
//! | [`input`] | Tools, session settings, and the drag state machine |
//! | [`geom`] | Points and the shapes a gesture produces |
//! | [`color`] | `#rgb` / `#rrggbb` parsing |
//! | [`export`] | Raster → SVG envelope encoder |
//! | [`import`] | SVG → raster decoding for reloads |
//! | [`consts`] | Shared numeric and color constants |

pub mod color;
pub mod consts;
pub mod engine;
pub mod error;
pub mod export;
pub mod geom;
pub mod import;
pub mod input;
pub mod layers;

pub use engine::{Action, DrawingSurface};
pub use error::CanvasError;
pub use input::Tool;
