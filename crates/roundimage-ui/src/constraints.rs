use roundimage_engine::coords::Vec2;

// ── Edges ─────────────────────────────────────────────────────────────────

/// Insets on all four sides (padding).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    #[inline]
    pub fn all(v: f32) -> Self {
        Self { top: v, right: v, bottom: v, left: v }
    }

    #[inline]
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self { top: vertical, bottom: vertical, left: horizontal, right: horizontal }
    }

    /// Total inset on the horizontal axis.
    #[inline]
    pub fn h(self) -> f32 {
        self.left + self.right
    }

    /// Total inset on the vertical axis.
    #[inline]
    pub fn v(self) -> f32 {
        self.top + self.bottom
    }
}

// ── Constraints ───────────────────────────────────────────────────────────

/// Size limits a host hands to [`Widget::measure`](crate::widget::Widget::measure).
///
/// Each axis is either exact (`min == max`) or a range the widget may pick
/// its natural size from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Tight: widget must be exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    /// Loose: widget can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    /// No constraint: widget can take any positive size.
    #[inline]
    pub fn unbounded() -> Self {
        Self { min: Vec2::zero(), max: Vec2::new(f32::INFINITY, f32::INFINITY) }
    }

    /// Fixes the width, leaving the height as is.
    #[inline]
    #[must_use]
    pub fn with_exact_width(self, width: f32) -> Self {
        Self { min: Vec2::new(width, self.min.y), max: Vec2::new(width, self.max.y) }
    }

    /// Fixes the height, leaving the width as is.
    #[inline]
    #[must_use]
    pub fn with_exact_height(self, height: f32) -> Self {
        Self { min: Vec2::new(self.min.x, height), max: Vec2::new(self.max.x, height) }
    }

    /// The width when the horizontal axis is exact.
    #[inline]
    pub fn exact_width(self) -> Option<f32> {
        (self.min.x == self.max.x).then_some(self.max.x)
    }

    /// The height when the vertical axis is exact.
    #[inline]
    pub fn exact_height(self) -> Option<f32> {
        (self.min.y == self.max.y).then_some(self.max.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── exactness ─────────────────────────────────────────────────────────

    #[test]
    fn tight_is_exact_on_both_axes() {
        let c = Constraints::tight(Vec2::new(30.0, 40.0));
        assert_eq!(c.exact_width(), Some(30.0));
        assert_eq!(c.exact_height(), Some(40.0));
    }

    #[test]
    fn loose_and_unbounded_are_not_exact() {
        assert_eq!(Constraints::loose(Vec2::new(30.0, 40.0)).exact_width(), None);
        assert_eq!(Constraints::unbounded().exact_height(), None);
    }

    #[test]
    fn exact_axis_is_independent() {
        let c = Constraints::unbounded().with_exact_height(12.0);
        assert_eq!(c.exact_width(), None);
        assert_eq!(c.exact_height(), Some(12.0));
    }

    #[test]
    fn loose_zero_is_exact() {
        // min == max == 0 still pins the axis.
        assert_eq!(Constraints::loose(Vec2::zero()).exact_width(), Some(0.0));
    }

    // ── Edges helpers ─────────────────────────────────────────────────────

    #[test]
    fn edges_h_and_v() {
        let e = Edges::symmetric(4.0, 8.0);
        assert_eq!(e.h(), 16.0); // left + right
        assert_eq!(e.v(), 8.0);  // top + bottom
    }
}
