//! Drawing surfaces.
//!
//! Widgets never talk to a backend directly: they emit fills and strokes
//! through the [`Canvas`] trait. Two implementations ship with the engine:
//!
//! - [`DrawList`](crate::scene::DrawList) records commands for inspection and tests.
//! - [`RasterCanvas`] rasterizes on the CPU with tiny-skia.
//!
//! Convention:
//! - Geometry is in logical pixels (top-left origin, +Y down), one pixel per unit.
//! - Fills use the non-zero winding rule.
//! - Strokes are centered on the path.

mod raster;

pub use raster::RasterCanvas;

use crate::paint::Paint;
use crate::path::Path;
use crate::scene::Border;

/// A surface that can fill and stroke closed paths.
pub trait Canvas {
    /// Erases everything drawn so far.
    fn clear(&mut self);

    /// Fills the interior of `path` with `paint`.
    fn fill_path(&mut self, path: &Path, paint: &Paint<'_>);

    /// Strokes `path` with a solid color, centered on the outline.
    fn stroke_path(&mut self, path: &Path, border: &Border);
}
