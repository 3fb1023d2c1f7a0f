use crate::coords::{CornerRadii, Rect, Vec2};

use super::{Path, PathBuilder};

/// Control-point distance for a quarter circle approximated by one cubic,
/// as a fraction of the radius.
const KAPPA: f32 = 0.552_284_8;

impl Path {
    /// A closed rounded rectangle over `rect`, clockwise from the top-left corner.
    ///
    /// Corners are emitted top-left, top-right, bottom-right, bottom-left; each is
    /// a quarter arc using its radius on both axes. A zero radius yields a sharp
    /// corner, and with all radii zero the result equals [`Path::from_rect`].
    ///
    /// Radii are not limited by the rect's size. A radius larger than half of an
    /// adjacent side makes neighbouring arcs overlap and the outline self-intersect;
    /// callers that need a simple outline must keep radii within bounds themselves.
    /// Negative radii count as zero.
    pub fn rounded_rect(rect: Rect, radii: CornerRadii) -> Self {
        let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
        let [tl, tr, br, bl] = radii.to_array().map(|v| v.max(0.0));

        let mut pb = PathBuilder::new();
        pb.move_to(l + tl, t);

        pb.line_to(r - tr, t);
        corner(&mut pb, Vec2::new(r - tr, t), Vec2::new(r, t), Vec2::new(r, t + tr), tr);

        pb.line_to(r, b - br);
        corner(&mut pb, Vec2::new(r, b - br), Vec2::new(r, b), Vec2::new(r - br, b), br);

        pb.line_to(l + bl, b);
        corner(&mut pb, Vec2::new(l + bl, b), Vec2::new(l, b), Vec2::new(l, b - bl), bl);

        // With a sharp top-left corner the closing segment already reaches the start.
        if tl > 0.0 {
            pb.line_to(l, t + tl);
            corner(&mut pb, Vec2::new(l, t + tl), Vec2::new(l, t), Vec2::new(l + tl, t), tl);
        }

        pb.close();
        pb.finish()
    }
}

/// Quarter arc from `from` to `to` bending towards the rect corner `apex`.
fn corner(pb: &mut PathBuilder, from: Vec2, apex: Vec2, to: Vec2, radius: f32) {
    if radius <= 0.0 {
        return;
    }
    let c1 = from.lerp(apex, KAPPA);
    let c2 = to.lerp(apex, KAPPA);
    pb.cubic_to(c1, c2, to);
}
