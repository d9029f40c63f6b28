//! Luminance-based RGBA to grayscale conversion.

use super::lut::{linear_to_srgb, srgb_to_linear};

/// Rec. 709 luminosity weight for red.
pub const LUMA_R: f64 = 0.2126;
/// Rec. 709 luminosity weight for green.
pub const LUMA_G: f64 = 0.7152;
/// Rec. 709 luminosity weight for blue.
pub const LUMA_B: f64 = 0.0722;

/// Convert an RGBA pixel to a 0..=255 intensity.
///
/// Channels are decoded to linear light, weighted by perceived luminosity,
/// re-encoded to sRGB and finally scaled by alpha. Alpha is a blend factor
/// against black, so a half-transparent white lands near 128 rather than
/// staying white.
///
/// # Example
/// ```
/// use panel_render::grayscale;
///
/// // Pure green is far brighter than pure blue.
/// assert!(grayscale(0, 255, 0, 255) > grayscale(0, 0, 255, 255));
/// ```
#[inline]
pub fn grayscale(r: u8, g: u8, b: u8, a: u8) -> u8 {
    let linear =
        LUMA_R * srgb_to_linear(r) + LUMA_G * srgb_to_linear(g) + LUMA_B * srgb_to_linear(b);
    // Saturating cast: the weights sum to 1.0 give or take an ulp.
    (linear_to_srgb(linear) * a as f64).round() as u8
}

/// Convert a pixel given as `[R, G, B, A]` bytes.
#[inline]
pub fn grayscale_pixel(rgba: [u8; 4]) -> u8 {
    grayscale(rgba[0], rgba[1], rgba[2], rgba[3])
}
