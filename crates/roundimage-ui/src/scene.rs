use roundimage_engine::coords::Vec2;
use roundimage_engine::render::Canvas;

use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::Widget;

// ── UiScene ───────────────────────────────────────────────────────────────

/// Top-level coordinator that drives a widget across frames.
///
/// Remembers the size last handed to the root so `resize` is only called on
/// change, and paints only when the root has asked for a redraw.
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// let mut canvas = RasterCanvas::new(128, 128)?;
///
/// // In your frame callback:
/// if ui.frame(&mut image, Constraints::tight(Vec2::new(128.0, 128.0)), &mut canvas) {
///     present(&canvas);
/// }
/// ```
#[derive(Debug, Default)]
pub struct UiScene {
    size: Option<Vec2>,
    frames_painted: u64,
}

impl UiScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Size of the root after the most recent [`frame`](Self::frame).
    #[inline]
    pub fn size(&self) -> Option<Vec2> {
        self.size
    }

    /// How many frames actually painted.
    #[inline]
    pub fn frames_painted(&self) -> u64 {
        self.frames_painted
    }

    /// Measure, resize and, if requested, repaint `root` into `canvas`.
    ///
    /// The canvas is cleared before painting. Returns whether a paint happened.
    pub fn frame(
        &mut self,
        root: &mut dyn Widget,
        constraints: Constraints,
        canvas: &mut dyn Canvas,
    ) -> bool {
        // ── measure ───────────────────────────────────────────────────────
        let size = root.measure(constraints);
        if self.size != Some(size) {
            log::debug!("UiScene: root resized to {}x{}", size.x, size.y);
            root.resize(size);
            self.size = Some(size);
        }

        // ── paint ─────────────────────────────────────────────────────────
        if !root.take_redraw_request() {
            return false;
        }
        canvas.clear();
        let mut painter = Painter::new(canvas);
        root.paint(&mut painter);
        self.frames_painted += 1;
        log::trace!("UiScene: frame painted with {} draw calls", painter.draw_count());
        true
    }
}
