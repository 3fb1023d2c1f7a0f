use roundimage_engine::coords::{CornerRadii, Vec2};
use roundimage_engine::paint::Color;
use roundimage_engine::scene::Border;

use crate::constraints::Edges;

/// How the bitmap is mapped into the drawing rect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScaleMode {
    /// Uniform scale that covers the whole rect, centered; the overflow is cut
    /// off by the outline.
    #[default]
    CropFill,
    /// Independent horizontal and vertical scale so the bitmap exactly fills
    /// the rect, anchored at its top-left corner.
    StretchFit,
}

impl ScaleMode {
    /// Parses the `.mkml` spelling: `crop_fill` or `stretch_fit`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "crop_fill" => Some(Self::CropFill),
            "stretch_fit" => Some(Self::StretchFit),
            _ => None,
        }
    }
}

/// Appearance settings for a [`RoundImage`](super::RoundImage).
///
/// Individual corner radii are optional; an unset corner falls back to
/// `radius`. Build with struct-literal syntax or the chained setters:
///
/// ```rust,ignore
/// let config = RoundImageConfig::default()
///     .radius(12.0)
///     .top_left_radius(0.0)
///     .border(2.0, Color::white())
///     .scale_mode(ScaleMode::StretchFit);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RoundImageConfig {
    pub radius: f32,
    pub top_left_radius: Option<f32>,
    pub top_right_radius: Option<f32>,
    pub bottom_right_radius: Option<f32>,
    pub bottom_left_radius: Option<f32>,
    pub border_width: f32,
    pub border_color: Color,
    pub scale_mode: ScaleMode,
    /// Lower bound for the natural size when the host does not fix it.
    pub min_size: Vec2,
    pub padding: Edges,
}

impl Default for RoundImageConfig {
    fn default() -> Self {
        Self {
            radius: 0.0,
            top_left_radius: None,
            top_right_radius: None,
            bottom_right_radius: None,
            bottom_left_radius: None,
            border_width: 0.0,
            border_color: Color::transparent(),
            scale_mode: ScaleMode::CropFill,
            min_size: Vec2::zero(),
            padding: Edges::default(),
        }
    }
}

impl RoundImageConfig {
    pub fn radius(mut self, r: f32) -> Self {
        self.radius = r;
        self
    }

    pub fn top_left_radius(mut self, r: f32) -> Self {
        self.top_left_radius = Some(r);
        self
    }

    pub fn top_right_radius(mut self, r: f32) -> Self {
        self.top_right_radius = Some(r);
        self
    }

    pub fn bottom_right_radius(mut self, r: f32) -> Self {
        self.bottom_right_radius = Some(r);
        self
    }

    pub fn bottom_left_radius(mut self, r: f32) -> Self {
        self.bottom_left_radius = Some(r);
        self
    }

    pub fn border(mut self, width: f32, color: Color) -> Self {
        self.border_width = width.max(0.0);
        self.border_color = color;
        self
    }

    pub fn scale_mode(mut self, mode: ScaleMode) -> Self {
        self.scale_mode = mode;
        self
    }

    pub fn min_size(mut self, width: f32, height: f32) -> Self {
        self.min_size = Vec2::new(width, height);
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    /// Effective radii: each corner's own value, else the uniform `radius`.
    pub fn corner_radii(&self) -> CornerRadii {
        let pick = |corner: Option<f32>| corner.unwrap_or(self.radius);
        CornerRadii::new(
            pick(self.top_left_radius),
            pick(self.top_right_radius),
            pick(self.bottom_right_radius),
            pick(self.bottom_left_radius),
        )
    }

    /// The stroke drawn along the outline.
    #[inline]
    pub fn border_style(&self) -> Border {
        Border::new(self.border_width, self.border_color)
    }
}
