//! Roundimage engine crate.
//!
//! Renderer-agnostic building blocks used by the widget layer: geometry,
//! paint, outlines, owned bitmaps, and the canvases that consume them.

pub mod bitmap;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod path;
pub mod render;
pub mod scene;
