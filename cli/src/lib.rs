//! Sketchpad client pipeline: remote store access, the sync client, and
//! gesture scripts.
//!
//! | Module   | Purpose                                              |
//! |----------|------------------------------------------------------|
//! | `api`    | HTTP client for the SVG store endpoints              |
//! | `sync`   | File picker, status line, save and load workflows    |
//! | `script` | JSON gesture scripts replayed onto a drawing surface |
//! | `output` | Local downloads: SVG, PNG, PNG under a JPEG name       |

pub mod api;
pub mod output;
pub mod script;
pub mod sync;
