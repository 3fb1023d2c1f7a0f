use super::Vec2;

/// Axis-aligned affine transform: per-axis scale followed by a translation.
///
/// Maps a point `p` to `(p.x * sx + tx, p.y * sy + ty)`. Rotation and skew are
/// not representable; nothing in the layout pipeline produces them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub sx: f32,
    pub sy: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    #[inline]
    pub const fn identity() -> Self {
        Self { sx: 1.0, sy: 1.0, tx: 0.0, ty: 0.0 }
    }

    #[inline]
    pub const fn from_scale(sx: f32, sy: f32) -> Self {
        Self { sx, sy, tx: 0.0, ty: 0.0 }
    }

    /// Applies a translation after this transform.
    #[inline]
    #[must_use]
    pub fn post_translate(self, tx: f32, ty: f32) -> Self {
        Self { tx: self.tx + tx, ty: self.ty + ty, ..self }
    }

    #[inline]
    pub fn map_point(self, p: Vec2) -> Vec2 {
        Vec2::new(p.x * self.sx + self.tx, p.y * self.sy + self.ty)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.sx.is_finite() && self.sy.is_finite() && self.tx.is_finite() && self.ty.is_finite()
    }
}
