use anyhow::{ensure, Result};
use roundimage_engine::bitmap::Bitmap;
use roundimage_engine::coords::Vec2;
use roundimage_engine::paint::Color;
use roundimage_engine::render::{Canvas, RasterCanvas};

/// Side length of the bitmap a [`ImageSource::SolidColor`] turns into.
const SOLID_COLOR_SIZE: u32 = 2;

/// Anything that can draw itself at an intrinsic pixel size.
pub trait Drawable {
    /// Natural size in pixels. Zero on either axis cannot be rasterized.
    fn intrinsic_size(&self) -> (u32, u32);

    /// Draw into `canvas`, covering `(0, 0)..size`.
    fn draw(&self, canvas: &mut dyn Canvas, size: Vec2);
}

/// What a [`RoundImage`](super::RoundImage) can display.
///
/// Every variant is turned into an owned [`Bitmap`] once, when assigned.
pub enum ImageSource {
    RawBitmap(Bitmap),
    SolidColor(Color),
    Generic(Box<dyn Drawable>),
}

impl ImageSource {
    pub fn drawable(d: impl Drawable + 'static) -> Self {
        Self::Generic(Box::new(d))
    }

    /// Converts the source into pixels.
    pub fn materialize(self) -> Result<Bitmap> {
        match self {
            Self::RawBitmap(bitmap) => Ok(bitmap),
            Self::SolidColor(color) => Ok(Bitmap::filled(SOLID_COLOR_SIZE, SOLID_COLOR_SIZE, color)),
            Self::Generic(drawable) => {
                let (w, h) = drawable.intrinsic_size();
                ensure!(w > 0 && h > 0, "drawable has no intrinsic size ({w}x{h})");
                let mut canvas = RasterCanvas::new(w, h)?;
                drawable.draw(&mut canvas, Vec2::new(w as f32, h as f32));
                canvas.into_bitmap()
            }
        }
    }
}

impl std::fmt::Debug for ImageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RawBitmap(b) => f.debug_tuple("RawBitmap").field(b).finish(),
            Self::SolidColor(c) => f.debug_tuple("SolidColor").field(c).finish(),
            Self::Generic(d) => f.debug_tuple("Generic").field(&d.intrinsic_size()).finish(),
        }
    }
}

impl From<Bitmap> for ImageSource {
    fn from(bitmap: Bitmap) -> Self {
        Self::RawBitmap(bitmap)
    }
}

impl From<Color> for ImageSource {
    fn from(color: Color) -> Self {
        Self::SolidColor(color)
    }
}
