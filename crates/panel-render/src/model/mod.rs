//! Inputs to the pipeline: the decoded image, the panel, and the request.

mod profile;
mod raster;
mod request;

pub use profile::{ColorMode, DisplayProfile, BLACK, WHITE};
pub use raster::{SourceRaster, RGBA_BYTES_PER_PIXEL};
pub use request::RenderRequest;
