use anyhow::{Context, Result};
use tiny_skia::{FillRule, Pattern, Pixmap, PixmapRef, Stroke};

use crate::bitmap::Bitmap;
use crate::coords::Transform;
use crate::paint::{Color, FilterQuality, Paint, Shader, SpreadMode};
use crate::path::{Path, PathEl};
use crate::scene::Border;

use super::Canvas;

/// CPU canvas backed by a tiny-skia pixmap.
///
/// Pixels are premultiplied RGBA8, the same layout as [`Bitmap`], so a
/// finished canvas converts into a bitmap without copying.
pub struct RasterCanvas {
    pixmap: Pixmap,
    background: Color,
}

impl RasterCanvas {
    /// Creates a transparent canvas of `width × height` pixels.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        anyhow::ensure!(width > 0 && height > 0, "raster canvas has zero size ({width}x{height})");
        let pixmap = Pixmap::new(width, height)
            .with_context(|| format!("failed to allocate {width}x{height} pixmap"))?;
        Ok(Self { pixmap, background: Color::transparent() })
    }

    /// Color used by [`Canvas::clear`]. Applied immediately.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self.pixmap.fill(to_skia_color(color));
        self
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Premultiplied RGBA8 value at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixmap
            .pixel(x, y)
            .map(|p| [p.red(), p.green(), p.blue(), p.alpha()])
    }

    /// Consumes the canvas and hands its pixels over as a [`Bitmap`].
    pub fn into_bitmap(self) -> Result<Bitmap> {
        let (w, h) = (self.pixmap.width(), self.pixmap.height());
        Ok(Bitmap::from_pixels(w, h, self.pixmap.take())?)
    }

    /// Encodes the canvas as PNG at `path`.
    pub fn save_png(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        self.pixmap
            .save_png(path)
            .with_context(|| format!("failed to write {}", path.display()))
    }
}

impl Canvas for RasterCanvas {
    fn clear(&mut self) {
        self.pixmap.fill(to_skia_color(self.background));
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint<'_>) {
        let Some(sk_path) = to_skia_path(path) else {
            log::trace!("RasterCanvas: skipping fill of degenerate path");
            return;
        };

        let mut sk_paint = tiny_skia::Paint::default();
        sk_paint.anti_alias = paint.anti_alias;
        match &paint.shader {
            Shader::Solid(color) => sk_paint.set_color(to_skia_color(*color)),
            Shader::Image(pattern) => {
                let bitmap = pattern.bitmap;
                let Some(texture) =
                    PixmapRef::from_bytes(bitmap.pixels(), bitmap.width(), bitmap.height())
                else {
                    log::debug!("RasterCanvas: bitmap {:?} has no pixels; fill skipped", bitmap);
                    return;
                };
                if !pattern.transform.is_finite() {
                    log::debug!("RasterCanvas: non-finite pattern transform; fill skipped");
                    return;
                }
                sk_paint.shader = Pattern::new(
                    texture,
                    to_skia_spread(pattern.spread),
                    to_skia_quality(pattern.quality),
                    1.0,
                    to_skia_transform(pattern.transform),
                );
            }
        }

        self.pixmap.fill_path(
            &sk_path,
            &sk_paint,
            FillRule::Winding,
            tiny_skia::Transform::identity(),
            None,
        );
    }

    fn stroke_path(&mut self, path: &Path, border: &Border) {
        if !border.is_visible() {
            return;
        }
        let Some(sk_path) = to_skia_path(path) else {
            log::trace!("RasterCanvas: skipping stroke of degenerate path");
            return;
        };

        let mut sk_paint = tiny_skia::Paint::default();
        sk_paint.anti_alias = true;
        sk_paint.set_color(to_skia_color(border.color));

        let stroke = Stroke { width: border.width, ..Stroke::default() };
        self.pixmap
            .stroke_path(&sk_path, &sk_paint, &stroke, tiny_skia::Transform::identity(), None);
    }
}

// ── conversions ───────────────────────────────────────────────────────────

fn to_skia_path(path: &Path) -> Option<tiny_skia::Path> {
    let mut pb = tiny_skia::PathBuilder::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => pb.move_to(p.x, p.y),
            PathEl::LineTo(p) => pb.line_to(p.x, p.y),
            PathEl::CubicTo(c1, c2, p) => pb.cubic_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y),
            PathEl::Close => pb.close(),
        }
    }
    pb.finish()
}

fn to_skia_color(color: Color) -> tiny_skia::Color {
    let (r, g, b, a) = color.clamped().to_straight();
    tiny_skia::Color::from_rgba(r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0), a)
        .unwrap_or(tiny_skia::Color::TRANSPARENT)
}

fn to_skia_transform(t: Transform) -> tiny_skia::Transform {
    tiny_skia::Transform::from_row(t.sx, 0.0, 0.0, t.sy, t.tx, t.ty)
}

fn to_skia_spread(spread: SpreadMode) -> tiny_skia::SpreadMode {
    match spread {
        SpreadMode::Pad => tiny_skia::SpreadMode::Pad,
        SpreadMode::Repeat => tiny_skia::SpreadMode::Repeat,
        SpreadMode::Reflect => tiny_skia::SpreadMode::Reflect,
    }
}

fn to_skia_quality(quality: FilterQuality) -> tiny_skia::FilterQuality {
    match quality {
        FilterQuality::Nearest => tiny_skia::FilterQuality::Nearest,
        FilterQuality::Bilinear => tiny_skia::FilterQuality::Bilinear,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{CornerRadii, Rect};
    use crate::paint::ImagePattern;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];

    fn red() -> Color { Color::from_srgb_u8(255, 0, 0, 255) }
    fn blue() -> Color { Color::from_srgb_u8(0, 0, 255, 255) }

    fn red_blue_bitmap() -> Bitmap {
        let mut px = Vec::new();
        px.extend_from_slice(&RED);
        px.extend_from_slice(&BLUE);
        Bitmap::from_pixels(2, 1, px).unwrap()
    }

    #[test]
    fn zero_size_is_an_error() {
        assert!(RasterCanvas::new(0, 10).is_err());
    }

    #[test]
    fn solid_fill_covers_rect_only() {
        let mut canvas = RasterCanvas::new(20, 20).unwrap();
        canvas.fill_path(&Path::from_rect(Rect::new(5.0, 5.0, 10.0, 10.0)), &Paint::solid(red()));
        assert_eq!(canvas.pixel(10, 10), Some(RED));
        assert_eq!(canvas.pixel(2, 2), Some([0, 0, 0, 0]));
    }

    #[test]
    fn rounded_corner_is_left_empty() {
        let mut canvas = RasterCanvas::new(40, 40).unwrap();
        let path = Path::rounded_rect(Rect::new(0.0, 0.0, 40.0, 40.0), CornerRadii::all(20.0));
        canvas.fill_path(&path, &Paint::solid(red()));
        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(20, 20), Some(RED));
    }

    #[test]
    fn image_pattern_samples_through_transform() {
        let bm = red_blue_bitmap();
        let mut canvas = RasterCanvas::new(20, 10).unwrap();
        let pattern = ImagePattern::new(&bm, Transform::from_scale(10.0, 10.0));
        canvas.fill_path(&Path::from_rect(Rect::new(0.0, 0.0, 20.0, 10.0)), &Paint::image(pattern));
        assert_eq!(canvas.pixel(2, 5), Some(RED));
        assert_eq!(canvas.pixel(17, 5), Some(BLUE));
    }

    #[test]
    fn pad_spread_clamps_outside_bitmap() {
        let bm = red_blue_bitmap();
        let mut canvas = RasterCanvas::new(30, 10).unwrap();
        // Bitmap covers x in [10, 30); everything left of it repeats the red edge.
        let pattern = ImagePattern::new(&bm, Transform::from_scale(10.0, 10.0).post_translate(10.0, 0.0));
        canvas.fill_path(&Path::from_rect(Rect::new(0.0, 0.0, 30.0, 10.0)), &Paint::image(pattern));
        assert_eq!(canvas.pixel(1, 5), Some(RED));
        assert_eq!(canvas.pixel(28, 5), Some(BLUE));
    }

    #[test]
    fn stroke_is_centered_on_path() {
        let mut canvas = RasterCanvas::new(40, 40).unwrap();
        let path = Path::from_rect(Rect::new(10.0, 10.0, 20.0, 20.0));
        canvas.stroke_path(&path, &Border::new(4.0, blue()));
        // The left edge at x=10 spreads to [8, 12).
        assert_eq!(canvas.pixel(8, 20), Some(BLUE));
        assert_eq!(canvas.pixel(11, 20), Some(BLUE));
        assert_eq!(canvas.pixel(6, 20), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(13, 20), Some([0, 0, 0, 0]));
    }

    #[test]
    fn zero_width_stroke_draws_nothing() {
        let mut canvas = RasterCanvas::new(10, 10).unwrap();
        canvas.stroke_path(&Path::from_rect(Rect::new(2.0, 2.0, 6.0, 6.0)), &Border::new(0.0, blue()));
        assert_eq!(canvas.pixel(2, 5), Some([0, 0, 0, 0]));
    }

    #[test]
    fn clear_restores_background() {
        let mut canvas = RasterCanvas::new(4, 4).unwrap().with_background(blue());
        canvas.fill_path(&Path::from_rect(Rect::new(0.0, 0.0, 4.0, 4.0)), &Paint::solid(red()));
        canvas.clear();
        assert_eq!(canvas.pixel(1, 1), Some(BLUE));
    }

    #[test]
    fn into_bitmap_keeps_pixels() {
        let mut canvas = RasterCanvas::new(3, 3).unwrap();
        canvas.fill_path(&Path::from_rect(Rect::new(0.0, 0.0, 3.0, 3.0)), &Paint::solid(red()));
        let bm = canvas.into_bitmap().unwrap();
        assert_eq!(bm.size(), (3, 3));
        assert_eq!(bm.pixel(2, 2), Some(RED));
    }
}
