//! Error type for the panel-render public API.
//!
//! The pipeline itself cannot fail; [`RenderError`] is raised when
//! constructing its inputs from values that break their preconditions.

use std::fmt;

/// A pipeline input that cannot be rendered.
///
/// # Example
///
/// ```
/// use panel_render::{ColorMode, DisplayProfile, RenderError};
///
/// let err = DisplayProfile::new(0, 384, ColorMode::Mono1bpp).unwrap_err();
/// assert_eq!(err, RenderError::EmptyDisplay { width: 0, height: 384 });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Display profile with a zero dimension
    EmptyDisplay {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
    /// Source raster with a zero dimension
    EmptyRaster {
        /// Raster width
        width: u32,
        /// Raster height
        height: u32,
    },
    /// Pixel buffer length does not match the raster dimensions
    RasterLength {
        /// `width * height * bytes_per_pixel`
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },
    /// Pixel layout other than RGBA8
    UnsupportedPixelFormat {
        /// Bytes per pixel supplied
        bytes_per_pixel: usize,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::EmptyDisplay { width, height } => {
                write!(f, "display dimensions must be positive, got {}x{}", width, height)
            }
            RenderError::EmptyRaster { width, height } => {
                write!(f, "source image is empty ({}x{})", width, height)
            }
            RenderError::RasterLength { expected, actual } => {
                write!(
                    f,
                    "raster buffer holds {} bytes, expected {}",
                    actual, expected
                )
            }
            RenderError::UnsupportedPixelFormat { bytes_per_pixel } => {
                write!(
                    f,
                    "unsupported pixel format: {} bytes per pixel (expected RGBA, 4)",
                    bytes_per_pixel
                )
            }
        }
    }
}

impl std::error::Error for RenderError {}
