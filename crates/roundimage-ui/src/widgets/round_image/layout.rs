//! Maps a bitmap onto the rounded viewport.
//!
//! [`resolve`] is a pure function of the viewport, the corner radii, the
//! scale mode and the bitmap's dimensions. The widget recomputes it after
//! every input change, so geometry is never stale at paint time.

use roundimage_engine::coords::{CornerRadii, Rect, Transform};
use roundimage_engine::path::Path;

use crate::constraints::Edges;

use super::config::ScaleMode;

/// The space the widget was given, minus what padding and border take.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewportSpec {
    pub width: f32,
    pub height: f32,
    pub padding: Edges,
    pub border_width: f32,
}

/// Everything the emitter needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedGeometry {
    /// Inset rect the bitmap is mapped into and the outline runs along.
    pub draw_rect: Rect,
    /// Bitmap space → canvas space.
    pub transform: Transform,
    /// Closed rounded rect over `draw_rect`; shared by fill and stroke.
    pub outline: Path,
}

/// Adds one half and truncates toward zero. Non-negative `x.5` lands on the
/// larger integer; negative sizes move toward zero (`-38.0` becomes `-37.0`).
#[inline]
fn round_half_up(x: f32) -> f32 {
    (x + 0.5).trunc()
}

/// Computes the geometry for one bitmap, or `None` when there is nothing to draw.
///
/// The border is centered on the outline, so the draw rect is inset by half
/// the border width on each side. Padding or borders larger than the viewport
/// produce an empty (possibly negative) rect rather than an error.
pub fn resolve(
    viewport: &ViewportSpec,
    radii: CornerRadii,
    mode: ScaleMode,
    bitmap_size: Option<(u32, u32)>,
) -> Option<ResolvedGeometry> {
    let (bitmap_w, bitmap_h) = bitmap_size?;
    if bitmap_w == 0 || bitmap_h == 0 {
        log::debug!("resolve: bitmap {bitmap_w}x{bitmap_h} has no pixels");
        return None;
    }
    let (bitmap_w, bitmap_h) = (bitmap_w as f32, bitmap_h as f32);

    let pad = viewport.padding;
    let border = viewport.border_width;
    let usable_w = round_half_up(viewport.width - pad.h() - border);
    let usable_h = round_half_up(viewport.height - pad.v() - border);

    let left = pad.left + border / 2.0;
    let top = pad.top + border / 2.0;
    let draw_rect = Rect::new(left, top, usable_w, usable_h);

    let sx = usable_w / bitmap_w;
    let sy = usable_h / bitmap_h;
    let transform = match mode {
        ScaleMode::CropFill => {
            let scale = sx.max(sy);
            Transform::from_scale(scale, scale).post_translate(
                left + (usable_w - bitmap_w * scale) / 2.0,
                top + (usable_h - bitmap_h * scale) / 2.0,
            )
        }
        ScaleMode::StretchFit => Transform::from_scale(sx, sy).post_translate(left, top),
    };

    Some(ResolvedGeometry {
        draw_rect,
        transform,
        outline: Path::rounded_rect(draw_rect, radii),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use roundimage_engine::coords::Vec2;

    fn square(side: f32) -> ViewportSpec {
        ViewportSpec { width: side, height: side, ..ViewportSpec::default() }
    }

    // ── scenarios ─────────────────────────────────────────────────────────

    #[test]
    fn crop_fill_wide_bitmap_centers_horizontally() {
        let g = resolve(&square(100.0), CornerRadii::all(20.0), ScaleMode::CropFill, Some((200, 50)))
            .unwrap();
        assert_eq!(g.draw_rect, Rect::from_ltrb(0.0, 0.0, 100.0, 100.0));
        assert_eq!(g.transform, Transform { sx: 2.0, sy: 2.0, tx: -150.0, ty: 0.0 });
    }

    #[test]
    fn border_insets_by_half_on_each_side() {
        let vp = ViewportSpec { border_width: 10.0, ..square(100.0) };
        let g = resolve(&vp, CornerRadii::all(20.0), ScaleMode::CropFill, Some((200, 50))).unwrap();
        assert_eq!(g.draw_rect, Rect::from_ltrb(5.0, 5.0, 95.0, 95.0));
    }

    #[test]
    fn zero_radii_outline_is_plain_rect() {
        let vp = ViewportSpec { border_width: 10.0, ..square(100.0) };
        let g = resolve(&vp, CornerRadii::zero(), ScaleMode::CropFill, Some((10, 10))).unwrap();
        assert_eq!(g.outline, Path::from_rect(g.draw_rect));
    }

    #[test]
    fn no_bitmap_resolves_to_nothing() {
        assert!(resolve(&square(100.0), CornerRadii::all(4.0), ScaleMode::CropFill, None).is_none());
        assert!(resolve(&square(100.0), CornerRadii::zero(), ScaleMode::CropFill, Some((0, 5))).is_none());
    }

    #[test]
    fn stretch_fit_scales_axes_independently() {
        let vp = ViewportSpec {
            width: 90.0,
            height: 50.0,
            padding: Edges { left: 6.0, top: 4.0, right: 4.0, bottom: 6.0 },
            border_width: 0.0,
        };
        let g = resolve(&vp, CornerRadii::zero(), ScaleMode::StretchFit, Some((40, 40))).unwrap();
        assert_eq!(g.draw_rect, Rect::new(6.0, 4.0, 80.0, 40.0));
        assert_eq!(g.transform, Transform { sx: 2.0, sy: 1.0, tx: 6.0, ty: 4.0 });
    }

    // ── properties ────────────────────────────────────────────────────────

    #[test]
    fn usable_size_rounds_half_up() {
        let vp = ViewportSpec { width: 100.5, height: 100.4, ..ViewportSpec::default() };
        let g = resolve(&vp, CornerRadii::zero(), ScaleMode::CropFill, Some((1, 1))).unwrap();
        assert_eq!(g.draw_rect.width(), 101.0);
        assert_eq!(g.draw_rect.height(), 100.0);
    }

    #[test]
    fn crop_fill_covers_draw_rect() {
        let vp = ViewportSpec {
            width: 120.0,
            height: 70.0,
            padding: Edges::all(3.0),
            border_width: 4.0,
        };
        for size in [(200, 50), (50, 200), (33, 33), (1, 1000), (640, 480)] {
            let g = resolve(&vp, CornerRadii::all(8.0), ScaleMode::CropFill, Some(size)).unwrap();
            let t = g.transform;
            assert_eq!(t.sx, t.sy, "uniform scale for {size:?}");
            let min = t.map_point(Vec2::zero());
            let max = t.map_point(Vec2::new(size.0 as f32, size.1 as f32));
            let r = g.draw_rect;
            let eps = 1e-3;
            assert!(min.x <= r.left() + eps && min.y <= r.top() + eps, "{size:?}");
            assert!(max.x >= r.right() - eps && max.y >= r.bottom() - eps, "{size:?}");
            // Centered: equal overflow on both sides.
            assert!(((r.left() - min.x) - (max.x - r.right())).abs() < eps);
            assert!(((r.top() - min.y) - (max.y - r.bottom())).abs() < eps);
        }
    }

    #[test]
    fn stretch_fit_maps_corners_onto_draw_rect() {
        let vp = ViewportSpec { border_width: 2.0, padding: Edges::all(5.0), ..square(64.0) };
        let g = resolve(&vp, CornerRadii::all(6.0), ScaleMode::StretchFit, Some((13, 29))).unwrap();
        let r = g.draw_rect;
        let eps = 1e-4;
        let top_left = g.transform.map_point(Vec2::zero());
        let bottom_right = g.transform.map_point(Vec2::new(13.0, 29.0));
        assert!((top_left.x - r.left()).abs() < eps && (top_left.y - r.top()).abs() < eps);
        assert!((bottom_right.x - r.right()).abs() < eps && (bottom_right.y - r.bottom()).abs() < eps);
    }

    #[test]
    fn resolve_is_idempotent() {
        let vp = ViewportSpec { border_width: 3.0, padding: Edges::symmetric(2.0, 7.0), ..square(77.0) };
        let radii = CornerRadii::new(1.0, 9.0, 0.0, 14.0);
        let a = resolve(&vp, radii, ScaleMode::CropFill, Some((31, 17)));
        let b = resolve(&vp, radii, ScaleMode::CropFill, Some((31, 17)));
        assert_eq!(a, b);
    }

    #[test]
    fn oversized_padding_gives_empty_rect() {
        let vp = ViewportSpec { padding: Edges::all(40.0), border_width: 8.0, ..square(50.0) };
        let g = resolve(&vp, CornerRadii::all(5.0), ScaleMode::CropFill, Some((10, 10))).unwrap();
        assert!(g.draw_rect.is_empty());
        assert_eq!(g.draw_rect.width(), -37.0);
        assert_eq!(g.draw_rect.height(), -37.0);
    }

    #[test]
    fn negative_usable_size_truncates_toward_zero() {
        let vp = ViewportSpec { width: 10.0, height: 10.4, padding: Edges::all(6.0), ..ViewportSpec::default() };
        let g = resolve(&vp, CornerRadii::zero(), ScaleMode::StretchFit, Some((4, 4))).unwrap();
        // -2.0 + 0.5 and -1.6 + 0.5 both truncate to -1.
        assert_eq!(g.draw_rect.width(), -1.0);
        assert_eq!(g.draw_rect.height(), -1.0);
    }
}
