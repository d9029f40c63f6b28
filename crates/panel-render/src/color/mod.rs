//! Grayscale conversion
//!
//! Maps an RGBA source pixel to a single 0..=255 intensity using
//! gamma-correct luminance.
//!
//! # Example
//!
//! ```
//! use panel_render::grayscale;
//!
//! assert_eq!(grayscale(255, 255, 255, 255), 255);
//! assert_eq!(grayscale(0, 0, 0, 255), 0);
//! // Fully transparent pixels blend against black.
//! assert_eq!(grayscale(255, 255, 255, 0), 0);
//! ```

mod gray;
mod lut;

pub use gray::{grayscale, grayscale_pixel, LUMA_B, LUMA_G, LUMA_R};
pub use lut::{linear_to_srgb, srgb_to_linear};
