//! A bitmap shown inside a rounded rectangle with an optional border.
//!
//! Every corner has its own radius. The bitmap is either cropped to fill the
//! outline ([`ScaleMode::CropFill`]) or stretched onto it
//! ([`ScaleMode::StretchFit`]).
//!
//! ```rust,ignore
//! let mut avatar = RoundImage::new(RoundImageConfig::default().radius(24.0))
//!     .with_source(bitmap);
//! avatar.set_border_width(3.0);
//! ```

pub mod config;
pub mod emit;
pub mod layout;
pub mod source;

pub use config::{RoundImageConfig, ScaleMode};
pub use layout::{resolve, ResolvedGeometry, ViewportSpec};
pub use source::{Drawable, ImageSource};

use roundimage_engine::bitmap::Bitmap;
use roundimage_engine::coords::Vec2;
use roundimage_engine::paint::Color;

use crate::constraints::{Constraints, Edges};
use crate::painter::Painter;
use crate::widget::Widget;

/// Natural size floor on each axis when the host does not fix the size.
pub const MIN_NATURAL_SIZE: f32 = 45.0;

/// Rounded-corner image widget.
///
/// Owns its bitmap: replacing it drops the previous one first. Every setter
/// re-resolves the geometry and raises the redraw flag, which the host
/// collects with [`Widget::take_redraw_request`].
#[derive(Debug)]
pub struct RoundImage {
    config: RoundImageConfig,
    bitmap: Option<Bitmap>,
    size: Vec2,
    geometry: Option<ResolvedGeometry>,
    redraw_requested: bool,
}

impl RoundImage {
    pub fn new(config: RoundImageConfig) -> Self {
        let mut image = Self {
            config,
            bitmap: None,
            size: Vec2::zero(),
            geometry: None,
            redraw_requested: false,
        };
        image.refresh();
        image
    }

    pub fn with_source(mut self, source: impl Into<ImageSource>) -> Self {
        self.set_source(Some(source.into()));
        self
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &RoundImageConfig {
        &self.config
    }

    #[inline]
    pub fn bitmap(&self) -> Option<&Bitmap> {
        self.bitmap.as_ref()
    }

    /// Geometry for the current inputs, `None` while there is no bitmap.
    #[inline]
    pub fn geometry(&self) -> Option<&ResolvedGeometry> {
        self.geometry.as_ref()
    }

    pub fn viewport(&self) -> ViewportSpec {
        ViewportSpec {
            width: self.size.x,
            height: self.size.y,
            padding: self.config.padding,
            border_width: self.config.border_width,
        }
    }

    // ── setters ───────────────────────────────────────────────────────────

    /// Replaces the displayed source. A source that cannot be turned into
    /// pixels is logged and leaves the widget empty.
    pub fn set_source(&mut self, source: Option<ImageSource>) {
        let bitmap = source.and_then(|source| match source.materialize() {
            Ok(bitmap) => Some(bitmap),
            Err(e) => {
                log::error!("RoundImage: failed to materialize source: {e:#}");
                None
            }
        });
        self.set_bitmap(bitmap);
    }

    pub fn set_bitmap(&mut self, bitmap: Option<Bitmap>) {
        if let Some(old) = self.bitmap.take() {
            log::debug!("RoundImage: releasing {old:?}");
            drop(old);
        }
        self.bitmap = bitmap;
        self.refresh();
    }

    pub fn set_scale_mode(&mut self, mode: ScaleMode) {
        self.config.scale_mode = mode;
        self.refresh();
    }

    /// Sets every corner to `radius`, dropping per-corner overrides.
    pub fn set_radius(&mut self, radius: f32) {
        self.config.top_left_radius = None;
        self.config.top_right_radius = None;
        self.config.bottom_right_radius = None;
        self.config.bottom_left_radius = None;
        self.config.radius = radius;
        self.refresh();
    }

    pub fn set_top_left_radius(&mut self, radius: f32) {
        self.config.top_left_radius = Some(radius);
        self.refresh();
    }

    pub fn set_top_right_radius(&mut self, radius: f32) {
        self.config.top_right_radius = Some(radius);
        self.refresh();
    }

    pub fn set_bottom_right_radius(&mut self, radius: f32) {
        self.config.bottom_right_radius = Some(radius);
        self.refresh();
    }

    pub fn set_bottom_left_radius(&mut self, radius: f32) {
        self.config.bottom_left_radius = Some(radius);
        self.refresh();
    }

    /// Negative widths count as no border.
    pub fn set_border_width(&mut self, width: f32) {
        self.config.border_width = width.max(0.0);
        self.refresh();
    }

    pub fn set_border_color(&mut self, color: Color) {
        self.config.border_color = color;
        self.refresh();
    }

    pub fn set_padding(&mut self, padding: Edges) {
        self.config.padding = padding;
        self.refresh();
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn refresh(&mut self) {
        self.geometry = resolve(
            &self.viewport(),
            self.config.corner_radii(),
            self.config.scale_mode,
            self.bitmap.as_ref().map(Bitmap::size),
        );
        if let Some(g) = &self.geometry {
            log::debug!("RoundImage: resolved draw rect {:?}, {:?}", g.draw_rect, g.transform);
        }
        self.redraw_requested = true;
    }
}

impl Widget for RoundImage {
    /// An exact axis is taken as is. Otherwise the natural size is the
    /// largest of the bitmap's dimension, [`MIN_NATURAL_SIZE`] and the
    /// configured minimum; it is not clamped to the constraint's maximum.
    fn measure(&self, constraints: Constraints) -> Vec2 {
        let (bw, bh) = self.bitmap.as_ref().map_or((0, 0), Bitmap::size);
        let natural = |dim: u32, min: f32| (dim as f32).max(MIN_NATURAL_SIZE).max(min);
        Vec2::new(
            constraints.exact_width().unwrap_or_else(|| natural(bw, self.config.min_size.x)),
            constraints.exact_height().unwrap_or_else(|| natural(bh, self.config.min_size.y)),
        )
    }

    fn resize(&mut self, size: Vec2) {
        self.size = size;
        self.refresh();
    }

    fn paint(&self, painter: &mut Painter) {
        emit::emit(painter, self.geometry.as_ref(), self.bitmap.as_ref(), self.config.border_style());
    }

    fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}
