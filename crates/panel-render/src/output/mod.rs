//! Framebuffer packing.
//!
//! [`pack`] scans the native panel grid top to bottom, left to right, and
//! serializes sampled intensities into the controller's layout:
//!
//! - **1bpp**: `width / 8` bytes per row, MSB is the leftmost pixel, a bit
//!   is set when the intensity is above 127.
//! - **8bpp**: `width` bytes per row, one intensity per byte.

mod framebuffer;
mod pack;

pub use framebuffer::Framebuffer;
pub use pack::{pack, MONO_THRESHOLD};
