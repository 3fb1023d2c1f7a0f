//! Paint model shared between UI and canvases.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//! - shaders (solid, bitmap pattern)
//!
//! Geometry types remain in `coords`; outlines live in `path`.

pub mod color;
pub mod pattern;

pub use color::Color;
pub use pattern::{FilterQuality, ImagePattern, SpreadMode};

/// Source of color for a fill.
///
/// Borrowed: an image shader refers to a bitmap owned elsewhere, so a
/// `Shader` only lives for the duration of a single canvas call.
#[derive(Debug, Clone, PartialEq)]
pub enum Shader<'a> {
    Solid(Color),
    Image(ImagePattern<'a>),
}

/// Fill style handed to [`Canvas::fill_path`](crate::render::Canvas::fill_path).
#[derive(Debug, Clone, PartialEq)]
pub struct Paint<'a> {
    pub shader: Shader<'a>,
    pub anti_alias: bool,
}

impl<'a> Paint<'a> {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Self { shader: Shader::Solid(color), anti_alias: true }
    }

    #[inline]
    pub fn image(pattern: ImagePattern<'a>) -> Self {
        Self { shader: Shader::Image(pattern), anti_alias: true }
    }
}

impl From<Color> for Paint<'_> {
    fn from(color: Color) -> Self {
        Paint::solid(color)
    }
}
