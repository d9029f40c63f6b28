//! panel-render: bit-exact framebuffers for fixed-resolution e-paper panels
//!
//! This library turns a decoded RGBA raster into the flat byte sequence a
//! display controller expects. It owns no I/O: PNG decoding, transport and
//! the device write path live in the caller.
//!
//! # Quick Start
//!
//! ```
//! use panel_render::{ColorMode, DisplayProfile, PanelRenderer, RenderRequest, SourceRaster};
//!
//! let profile = DisplayProfile::new(16, 2, ColorMode::Mono1bpp).unwrap();
//! let raster = SourceRaster::from_rgba(2, 2, vec![0; 2 * 2 * 4]).unwrap();
//!
//! let rendered = PanelRenderer::new(&profile).render(&RenderRequest::default(), &raster);
//!
//! assert_eq!(rendered.geometry.offset_x, 7);
//! assert_eq!(rendered.framebuffer.as_bytes().len(), 2 * 2);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! SourceRaster + RenderRequest + DisplayProfile
//!     |
//!     v
//! geometry::resolve        (orientation, effective dims, offsets)
//!     |
//!     v
//! sample::sample           (per panel pixel: source lookup or background)
//!     |        \
//!     |      color::grayscale   (sRGB decode, luminance, sRGB encode, alpha)
//!     v
//! output::pack             (1bpp MSB-first bits or 8bpp bytes)
//!     |
//!     v
//! Framebuffer              (row-major, top row first)
//! ```
//!
//! # Why Grayscale Goes Through Linear Light
//!
//! Averaging raw sRGB channel values darkens saturated colors and moves
//! the 50% cutoff used by 1bpp panels. The converter decodes each channel
//! to linear light, combines them with the Rec. 709 luminosity weights and
//! encodes the result back to sRGB before scaling by alpha. The decode side
//! is a 256-entry table generated by `build.rs`, holding exactly the values
//! the transfer function produces for each 8-bit input.
//!
//! # Orientation
//!
//! Only two mappings exist, 0° and 90°. 180° and 270° reflect the panel
//! coordinate first and then reuse them; see [`geometry`].

pub mod api;
pub mod color;
pub mod geometry;
pub mod model;
pub mod output;
pub mod sample;


pub use api::{render, PanelRenderer, RenderError, Rendered};
pub use color::grayscale;
pub use geometry::{resolve, Geometry, Orientation, ParseOrientationError};
pub use model::{ColorMode, DisplayProfile, RenderRequest, SourceRaster, BLACK, WHITE};
pub use output::{pack, Framebuffer};
