//! Per-pixel sampling of the source image.

use crate::color::grayscale_pixel;
use crate::geometry::Geometry;
use crate::model::SourceRaster;

/// Intensity shown at native panel pixel `(x, y)`.
///
/// Covered pixels are converted with [`grayscale`](crate::color::grayscale);
/// everything else gets `background` verbatim. The background is a raw
/// panel intensity and is never gamma converted.
#[inline]
pub fn sample(x: u32, y: u32, geometry: &Geometry, raster: &SourceRaster, background: u8) -> u8 {
    sample_source(x, y, geometry, raster).unwrap_or(background)
}

/// Intensity of the source pixel at native panel pixel `(x, y)`, or `None`
/// where the image does not reach.
#[inline]
pub fn sample_source(x: u32, y: u32, geometry: &Geometry, raster: &SourceRaster) -> Option<u8> {
    geometry
        .source_pixel(x, y)
        .map(|(src_x, src_y)| grayscale_pixel(raster.rgba(src_x, src_y)))
}
