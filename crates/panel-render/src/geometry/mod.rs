//! Placement of the source image on the panel grid.
//!
//! [`resolve`] turns a request into a concrete [`Geometry`]; the geometry
//! then answers, for every native panel pixel, which source pixel (if any)
//! lands there.
//!
//! Only the 0° and 90° mappings are written out. 180° and 270° reflect the
//! panel coordinate through the centre of the grid and reuse them:
//!
//! ```text
//!   0°  : (x, y)                               -> direct
//!  180° : (width-1-x, height-1-y)              -> direct
//!   90° : (x, y)                               -> quarter turn
//!  270° : (display_height-1-x, display_width-1-y) -> quarter turn
//! ```
//!
//! `display_width`/`display_height` are the effective (rotated) dimensions,
//! so for 270° the reflection still spans the native grid.

mod mapping;
mod orientation;
mod resolve;

pub use orientation::{Orientation, ParseOrientationError};
pub use resolve::{resolve, Geometry};
