//! sRGB transfer functions
//!
//! The decode direction only ever sees 8-bit channels, so it is a table
//! lookup into values generated at compile time by build.rs. The encode
//! direction takes an arbitrary linear value and is computed directly.

// Include the generated LUT from build.rs
include!(concat!(env!("OUT_DIR"), "/gamma_lut.rs"));

/// Linear-light value of an 8-bit sRGB channel.
#[inline]
pub fn srgb_to_linear(channel: u8) -> f64 {
    SRGB_TO_LINEAR[channel as usize]
}

/// Encode a linear-light value (0.0..=1.0) back to sRGB (0.0..=1.0).
#[inline]
pub fn linear_to_srgb(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        12.92 * linear
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}
