use crate::bitmap::Bitmap;
use crate::coords::Transform;

/// Sampling behavior outside the bitmap bounds.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum SpreadMode {
    /// Clamp to the edge pixels.
    #[default]
    Pad,
    /// Repeat the bitmap.
    Repeat,
    /// Mirror-repeat the bitmap.
    Reflect,
}

/// Texture filtering used when the pattern is scaled.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum FilterQuality {
    Nearest,
    #[default]
    Bilinear,
}

/// A bitmap sampled through `transform` (bitmap space → canvas space).
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePattern<'a> {
    pub bitmap: &'a Bitmap,
    pub transform: Transform,
    pub spread: SpreadMode,
    pub quality: FilterQuality,
}

impl<'a> ImagePattern<'a> {
    /// Edge-clamped, bilinear pattern.
    #[inline]
    pub fn new(bitmap: &'a Bitmap, transform: Transform) -> Self {
        Self {
            bitmap,
            transform,
            spread: SpreadMode::Pad,
            quality: FilterQuality::Bilinear,
        }
    }
}
