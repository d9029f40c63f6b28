//! Panel description.

use crate::api::RenderError;
use crate::geometry::Orientation;
use std::fmt;

/// Intensity of a black pixel.
pub const BLACK: u8 = 0;
/// Intensity of a white pixel.
pub const WHITE: u8 = 255;

/// Pixel depth the panel controller accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// One bit per pixel, eight pixels per byte, MSB first. 1 is white.
    Mono1bpp,
    /// One grayscale byte per pixel.
    Gray8bpp,
}

impl ColorMode {
    /// Map a bits-per-pixel count (1 or 8) to a mode.
    pub fn from_bits_per_pixel(bits: u8) -> Option<Self> {
        match bits {
            1 => Some(ColorMode::Mono1bpp),
            8 => Some(ColorMode::Gray8bpp),
            _ => None,
        }
    }

    pub fn bits_per_pixel(self) -> u8 {
        match self {
            ColorMode::Mono1bpp => 1,
            ColorMode::Gray8bpp => 8,
        }
    }

    /// Bytes in one framebuffer row for a panel `width` pixels wide.
    ///
    /// For 1bpp this truncates: columns past the last whole byte are not
    /// represented.
    #[inline]
    pub fn bytes_per_row(self, width: u32) -> usize {
        match self {
            ColorMode::Mono1bpp => width as usize / 8,
            ColorMode::Gray8bpp => width as usize,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Mono1bpp => write!(f, "1 bit per pixel"),
            ColorMode::Gray8bpp => write!(f, "8 bits per pixel"),
        }
    }
}

/// The physical panel: native size, depth, fill color and optional fixed
/// rotation.
///
/// Built once and shared read-only by every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayProfile {
    width: u32,
    height: u32,
    color_mode: ColorMode,
    background_color: u8,
    default_orientation: Option<Orientation>,
}

impl DisplayProfile {
    /// Create a profile with a white background and automatic orientation.
    ///
    /// Fails when either dimension is zero.
    pub fn new(width: u32, height: u32, color_mode: ColorMode) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyDisplay { width, height });
        }
        Ok(Self {
            width,
            height,
            color_mode,
            background_color: WHITE,
            default_orientation: None,
        })
    }

    /// Set the raw intensity used wherever the image does not reach.
    pub fn with_background(mut self, background_color: u8) -> Self {
        self.background_color = background_color;
        self
    }

    /// Pin an orientation for requests that do not carry their own.
    pub fn with_default_orientation(mut self, orientation: Option<Orientation>) -> Self {
        self.default_orientation = orientation;
        self
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
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    #[inline]
    pub fn background_color(&self) -> u8 {
        self.background_color
    }

    #[inline]
    pub fn default_orientation(&self) -> Option<Orientation> {
        self.default_orientation
    }

    /// True when the native panel is taller than it is wide.
    #[inline]
    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }

    #[inline]
    pub fn bytes_per_row(&self) -> usize {
        self.color_mode.bytes_per_row(self.width)
    }

    /// Length of a complete framebuffer for this panel.
    #[inline]
    pub fn framebuffer_len(&self) -> usize {
        self.bytes_per_row() * self.height as usize
    }
}
