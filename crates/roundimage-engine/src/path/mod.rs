//! Closed outlines shared by fills and strokes.
//!
//! A [`Path`] is a renderer-agnostic list of [`PathEl`] verbs. Canvases
//! translate it into their own representation; the same instance is used
//! for both fill and stroke so their edges line up exactly.

mod round_rect;

use crate::coords::{Rect, Vec2};

/// A single path verb. Points are absolute, in canvas coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathEl {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Cubic Bézier: two control points, then the end point.
    CubicTo(Vec2, Vec2, Vec2),
    Close,
}

/// An immutable sequence of path verbs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    els: Vec<PathEl>,
}

impl Path {
    /// A closed, clockwise rectangle starting at the top-left corner.
    pub fn from_rect(rect: Rect) -> Self {
        let mut pb = PathBuilder::new();
        pb.move_to(rect.left(), rect.top());
        pb.line_to(rect.right(), rect.top());
        pb.line_to(rect.right(), rect.bottom());
        pb.line_to(rect.left(), rect.bottom());
        pb.close();
        pb.finish()
    }

    #[inline]
    pub fn elements(&self) -> &[PathEl] {
        &self.els
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.els.is_empty()
    }

    /// Bounding box of every point, control points included.
    ///
    /// Returns `None` for a path without points. The result is normalized,
    /// so a path built over an inverted rect still reports positive extents.
    pub fn bounds(&self) -> Option<Rect> {
        let mut extent: Option<(Vec2, Vec2)> = None;
        let mut add = |p: Vec2| {
            extent = Some(match extent {
                None => (p, p),
                Some((min, max)) => (
                    Vec2::new(min.x.min(p.x), min.y.min(p.y)),
                    Vec2::new(max.x.max(p.x), max.y.max(p.y)),
                ),
            });
        };

        for el in &self.els {
            match *el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => add(p),
                PathEl::CubicTo(c1, c2, p) => {
                    add(c1);
                    add(c2);
                    add(p);
                }
                PathEl::Close => {}
            }
        }

        extent.map(|(min, max)| Rect::from_ltrb(min.x, min.y, max.x, max.y))
    }
}

/// Incremental [`Path`] construction.
#[derive(Debug, Default)]
pub struct PathBuilder {
    els: Vec<PathEl>,
}

impl PathBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.els.push(PathEl::MoveTo(Vec2::new(x, y)));
    }

    #[inline]
    pub fn line_to(&mut self, x: f32, y: f32) {
        self.els.push(PathEl::LineTo(Vec2::new(x, y)));
    }

    #[inline]
    pub fn cubic_to(&mut self, c1: Vec2, c2: Vec2, to: Vec2) {
        self.els.push(PathEl::CubicTo(c1, c2, to));
    }

    #[inline]
    pub fn close(&mut self) {
        self.els.push(PathEl::Close);
    }

    #[inline]
    pub fn finish(self) -> Path {
        Path { els: self.els }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rect_is_closed_clockwise() {
        let p = Path::from_rect(Rect::new(1.0, 2.0, 10.0, 20.0));
        assert_eq!(
            p.elements(),
            &[
                PathEl::MoveTo(Vec2::new(1.0, 2.0)),
                PathEl::LineTo(Vec2::new(11.0, 2.0)),
                PathEl::LineTo(Vec2::new(11.0, 22.0)),
                PathEl::LineTo(Vec2::new(1.0, 22.0)),
                PathEl::Close,
            ]
        );
    }

    #[test]
    fn bounds_of_empty_path_is_none() {
        assert!(Path::default().bounds().is_none());
        assert!(PathBuilder::new().finish().is_empty());
    }

    #[test]
    fn bounds_cover_control_points() {
        let mut pb = PathBuilder::new();
        pb.move_to(0.0, 0.0);
        pb.cubic_to(Vec2::new(-5.0, 3.0), Vec2::new(8.0, 12.0), Vec2::new(4.0, 4.0));
        pb.close();
        assert_eq!(pb.finish().bounds(), Some(Rect::from_ltrb(-5.0, 0.0, 8.0, 12.0)));
    }
}
