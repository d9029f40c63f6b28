//! Device-ready output buffer.

use crate::model::ColorMode;

/// Packed panel contents, ready to hand to the controller unchanged.
///
/// Rows are `color_mode.bytes_per_row(width)` bytes long, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
    color_mode: ColorMode,
}

impl Framebuffer {
    /// Wrap packed bytes.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `bytes.len()` matches the layout.
    pub fn new(bytes: Vec<u8>, width: u32, height: u32, color_mode: ColorMode) -> Self {
        debug_assert_eq!(
            bytes.len(),
            color_mode.bytes_per_row(width) * height as usize,
            "framebuffer length must match {width}x{height} at {color_mode}"
        );
        Self {
            bytes,
            width,
            height,
            color_mode,
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Native panel width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Native panel height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    #[inline]
    pub fn bytes_per_row(&self) -> usize {
        self.color_mode.bytes_per_row(self.width)
    }

    /// Row `y` of packed bytes.
    ///
    /// # Panics
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.bytes_per_row();
        let start = y as usize * stride;
        &self.bytes[start..start + stride]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for Framebuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
