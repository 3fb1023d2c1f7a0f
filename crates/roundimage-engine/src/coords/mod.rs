//! Coordinate and geometry types shared across canvases and UI.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Bitmap space uses the same orientation with one unit per source pixel.

mod corner_radii;
mod rect;
mod transform;
mod vec2;

pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use transform::Transform;
pub use vec2::Vec2;
