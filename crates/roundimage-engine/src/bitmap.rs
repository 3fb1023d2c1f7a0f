//! Owned pixel buffers.

use std::fmt;

use crate::paint::Color;

/// Bytes per pixel of the premultiplied RGBA8 layout.
pub const BYTES_PER_PIXEL: usize = 4;

/// Error returned when a pixel buffer does not match its declared size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapError {
    pub width: u32,
    pub height: u32,
    pub len: usize,
}

impl fmt::Display for BitmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bitmap {}x{} needs {} bytes, got {}",
            self.width,
            self.height,
            self.width as usize * self.height as usize * BYTES_PER_PIXEL,
            self.len
        )
    }
}

impl std::error::Error for BitmapError {}

/// A premultiplied RGBA8 image, row-major and tightly packed.
///
/// Exclusively owned: whoever holds the `Bitmap` decides when its buffer is
/// released, and dropping it frees the pixels immediately.
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Wraps an existing premultiplied RGBA8 buffer.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, BitmapError> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if pixels.len() != expected {
            return Err(BitmapError { width, height, len: pixels.len() });
        }
        Ok(Self { width, height, pixels })
    }

    /// A bitmap where every pixel is `color`.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let px = color.to_premul_u8();
        let count = width as usize * height as usize;
        let mut pixels = Vec::with_capacity(count * BYTES_PER_PIXEL);
        for _ in 0..count {
            pixels.extend_from_slice(&px);
        }
        Self { width, height, pixels }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Raw premultiplied RGBA8 bytes.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The premultiplied RGBA8 value at `(x, y)`, or `None` out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let p = &self.pixels[i..i + BYTES_PER_PIXEL];
        Some([p[0], p[1], p[2], p[3]])
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pixels_checks_length() {
        assert!(Bitmap::from_pixels(2, 2, vec![0; 16]).is_ok());
        let err = Bitmap::from_pixels(2, 2, vec![0; 15]).unwrap_err();
        assert_eq!(err.len, 15);
        assert_eq!(err.to_string(), "bitmap 2x2 needs 16 bytes, got 15");
    }

    #[test]
    fn filled_writes_every_pixel() {
        let bm = Bitmap::filled(3, 2, Color::from_srgb_u8(255, 0, 0, 255));
        assert_eq!(bm.size(), (3, 2));
        assert_eq!(bm.pixels().len(), 24);
        assert_eq!(bm.pixel(2, 1), Some([255, 0, 0, 255]));
    }

    #[test]
    fn pixel_out_of_bounds_is_none() {
        let bm = Bitmap::filled(1, 1, Color::white());
        assert_eq!(bm.pixel(1, 0), None);
        assert_eq!(bm.pixel(0, 1), None);
    }

    #[test]
    fn zero_sized_is_empty() {
        assert!(Bitmap::filled(0, 4, Color::white()).is_empty());
        assert!(!Bitmap::filled(1, 1, Color::white()).is_empty());
    }
}
