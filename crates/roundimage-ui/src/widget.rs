use roundimage_engine::coords::Vec2;

use crate::constraints::Constraints;
use crate::painter::Painter;

// ── Widget trait ──────────────────────────────────────────────────────────

/// The trait a host drives through [`UiScene`](crate::scene::UiScene).
///
/// A frame is measure → resize (when the size changed) → paint (when the
/// widget asked for a redraw).
///
/// # Implementing a custom widget
///
/// ```rust,ignore
/// use roundimage_ui::prelude::*;
///
/// pub struct Swatch { color: Color, size: Vec2 }
///
/// impl Widget for Swatch {
///     fn measure(&self, _constraints: Constraints) -> Vec2 {
///         Vec2::new(16.0, 16.0)
///     }
///     fn resize(&mut self, size: Vec2) {
///         self.size = size;
///     }
///     fn paint(&self, painter: &mut Painter) {
///         let rect = Rect::new(0.0, 0.0, self.size.x, self.size.y);
///         painter.fill_path(&Path::from_rect(rect), &Paint::solid(self.color));
///     }
/// }
/// ```
pub trait Widget {
    /// Compute the size this widget wants given the available space.
    ///
    /// Must be deterministic: the same state and constraints give the same size.
    fn measure(&self, constraints: Constraints) -> Vec2;

    /// The host assigned a new size. The widget draws in `(0, 0)..size`.
    fn resize(&mut self, _size: Vec2) {}

    /// Draw this widget at its current size.
    fn paint(&self, painter: &mut Painter);

    /// Returns `true` once after the widget's visual state changed.
    ///
    /// The default never asks, so such widgets are painted only when the host
    /// forces it.
    fn take_redraw_request(&mut self) -> bool {
        false
    }
}
