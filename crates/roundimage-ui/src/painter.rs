use roundimage_engine::paint::Paint;
use roundimage_engine::path::Path;
use roundimage_engine::render::Canvas;
use roundimage_engine::scene::Border;

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps whatever [`Canvas`] the host renders into, so widgets stay
/// independent of the backend (recording list, CPU raster, ...).
pub struct Painter<'a> {
    canvas: &'a mut dyn Canvas,
    draws: usize,
}

impl<'a> Painter<'a> {
    pub fn new(canvas: &'a mut dyn Canvas) -> Self {
        Self { canvas, draws: 0 }
    }

    /// Number of fills and strokes issued through this painter.
    #[inline]
    pub fn draw_count(&self) -> usize {
        self.draws
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Fills the interior of `path`.
    pub fn fill_path(&mut self, path: &Path, paint: &Paint<'_>) {
        self.draws += 1;
        self.canvas.fill_path(path, paint);
    }

    /// Strokes `path`, centered on the outline. Invisible borders are dropped.
    pub fn stroke_path(&mut self, path: &Path, border: Border) {
        if !border.is_visible() {
            return;
        }
        self.draws += 1;
        self.canvas.stroke_path(path, &border);
    }
}
