//! Decoded source image.

use crate::api::RenderError;

/// Bytes per pixel of an RGBA8 raster.
pub const RGBA_BYTES_PER_PIXEL: usize = 4;

/// A decoded image in row-major RGBA8 order.
///
/// Rows are stored back to back; [`row`](Self::row) returns one of them.
/// Opaque sources are expected to carry alpha 255.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRaster {
    width: u32,
    height: u32,
    bytes_per_pixel: usize,
    data: Vec<u8>,
}

impl SourceRaster {
    /// Wrap decoded pixel data.
    ///
    /// Fails for a zero-area image, for any layout other than 4 bytes per
    /// pixel, or when `data` is not exactly `width * height * 4` bytes.
    pub fn new(
        width: u32,
        height: u32,
        bytes_per_pixel: usize,
        data: Vec<u8>,
    ) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyRaster { width, height });
        }
        if bytes_per_pixel != RGBA_BYTES_PER_PIXEL {
            return Err(RenderError::UnsupportedPixelFormat { bytes_per_pixel });
        }
        let expected = width as usize * height as usize * bytes_per_pixel;
        if data.len() != expected {
            return Err(RenderError::RasterLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            bytes_per_pixel,
            data,
        })
    }

    /// Wrap tightly packed RGBA8 data.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, RenderError> {
        Self::new(width, height, RGBA_BYTES_PER_PIXEL, data)
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
    pub fn bytes_per_pixel(&self) -> usize {
        self.bytes_per_pixel
    }

    /// Bytes in one row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * self.bytes_per_pixel
    }

    /// Row `y`, `stride()` bytes long.
    ///
    /// # Panics
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.stride();
        &self.data[start..start + self.stride()]
    }

    /// The `[R, G, B, A]` bytes of pixel `(x, y)`.
    ///
    /// # Panics
    /// Panics if the pixel is outside the raster.
    #[inline]
    pub fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        let offset = x as usize * self.bytes_per_pixel;
        let row = self.row(y);
        [row[offset], row[offset + 1], row[offset + 2], row[offset + 3]]
    }

    /// The raw pixel buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
