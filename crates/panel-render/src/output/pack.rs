//! Serialization of sampled pixels into the panel byte layout.

use super::Framebuffer;
use crate::geometry::Geometry;
use crate::model::{ColorMode, DisplayProfile, SourceRaster};
use crate::sample::{sample, sample_source};

/// Intensities strictly above this value are white in 1bpp mode.
pub const MONO_THRESHOLD: u8 = 127;

/// Render the full panel grid into a framebuffer.
///
/// The scan always follows the native panel dimensions; `geometry` has
/// already folded the orientation into its per-pixel lookup.
pub fn pack(profile: &DisplayProfile, geometry: &Geometry, raster: &SourceRaster) -> Framebuffer {
    let bytes = match profile.color_mode() {
        ColorMode::Mono1bpp => pack_mono(profile, geometry, raster),
        ColorMode::Gray8bpp => pack_gray(profile, geometry, raster),
    };
    debug_assert_eq!(bytes.len(), profile.framebuffer_len());
    Framebuffer::new(bytes, profile.width(), profile.height(), profile.color_mode())
}

fn pack_mono(profile: &DisplayProfile, geometry: &Geometry, raster: &SourceRaster) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(profile.framebuffer_len());
    // The background is never converted, so one threshold covers every
    // uncovered pixel.
    let background_white = profile.background_color() > MONO_THRESHOLD;

    for y in 0..profile.height() {
        let mut current = 0u8;
        for x in 0..profile.width() {
            let white = sample_source(x, y, geometry, raster)
                .map_or(background_white, |intensity| intensity > MONO_THRESHOLD);
            if white {
                current |= 0x80 >> (x % 8);
            }
            // A trailing partial byte never reaches this point and is dropped.
            if x % 8 == 7 {
                bytes.push(current);
                current = 0;
            }
        }
    }
    bytes
}

fn pack_gray(profile: &DisplayProfile, geometry: &Geometry, raster: &SourceRaster) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(profile.framebuffer_len());
    let background = profile.background_color();

    for y in 0..profile.height() {
        for x in 0..profile.width() {
            bytes.push(sample(x, y, geometry, raster, background));
        }
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{resolve, Orientation};
    use crate::model::RenderRequest;

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> SourceRaster {
        let data = rgba
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        SourceRaster::from_rgba(width, height, data).unwrap()
    }

    fn render(
        profile: &DisplayProfile,
        request: RenderRequest,
        raster: &SourceRaster,
    ) -> Framebuffer {
        let geometry = resolve(profile, &request, raster.width(), raster.height());
        pack(profile, &geometry, raster)
    }

    #[test]
    fn test_mono_bits_are_msb_first() {
        let profile = DisplayProfile::new(8, 1, ColorMode::Mono1bpp)
            .unwrap()
            .with_background(0);
        // White pixel at column 1 only.
        let raster = solid(1, 1, [255, 255, 255, 255]);
        let request = RenderRequest::default()
            .orientation(Orientation::Deg0)
            .offset_x(1)
            .offset_y(0);

        assert_eq!(render(&profile, request, &raster).as_bytes(), &[0b0100_0000]);
    }

    #[test]
    fn test_mono_threshold_is_strict() {
        let profile = DisplayProfile::new(16, 1, ColorMode::Mono1bpp)
            .unwrap()
            .with_background(0);
        let request = RenderRequest::default()
            .orientation(Orientation::Deg0)
            .offset_x(0)
            .offset_y(0);

        // Gray 127 stays black, gray 128 turns white.
        let dark = solid(16, 1, [127, 127, 127, 255]);
        assert_eq!(render(&profile, request, &dark).as_bytes(), &[0x00, 0x00]);

        let light = solid(16, 1, [128, 128, 128, 255]);
        assert_eq!(render(&profile, request, &light).as_bytes(), &[0xFF, 0xFF]);
    }

    #[test]
    fn test_mono_background_threshold() {
        let raster = solid(1, 1, [0, 0, 0, 255]);
        let request = RenderRequest::default().offset_x(100);

        for (background, expected) in [(127u8, 0x00u8), (128, 0xFF), (0, 0x00), (255, 0xFF)] {
            let profile = DisplayProfile::new(8, 1, ColorMode::Mono1bpp)
                .unwrap()
                .with_background(background);
            assert_eq!(
                render(&profile, request, &raster).as_bytes(),
                &[expected],
                "background {background}"
            );
        }
    }

    #[test]
    fn test_mono_partial_byte_is_dropped() {
        let profile = DisplayProfile::new(12, 2, ColorMode::Mono1bpp).unwrap();
        let raster = solid(12, 2, [0, 0, 0, 255]);
        let request = RenderRequest::default().orientation(Orientation::Deg0);

        let framebuffer = render(&profile, request, &raster);
        assert_eq!(framebuffer.bytes_per_row(), 1);
        assert_eq!(framebuffer.as_bytes(), &[0x00, 0x00]);
    }

    #[test]
    fn test_gray_writes_raw_intensities() {
        let profile = DisplayProfile::new(4, 1, ColorMode::Gray8bpp)
            .unwrap()
            .with_background(200);
        let raster = SourceRaster::from_rgba(2, 1, vec![0, 0, 0, 255, 64, 64, 64, 255]).unwrap();
        let request = RenderRequest::default()
            .orientation(Orientation::Deg0)
            .offset_x(1)
            .offset_y(0);

        assert_eq!(render(&profile, request, &raster).as_bytes(), &[200, 0, 64, 200]);
    }

    #[test]
    fn test_gray_quarter_turn_layout() {
        // 3x2 native panel, 2x3 portrait image auto-rotates to 90°.
        let profile = DisplayProfile::new(3, 2, ColorMode::Gray8bpp).unwrap();
        let raster = SourceRaster::from_rgba(
            2,
            3,
            [10u8, 20, 30, 40, 50, 60]
                .iter()
                .flat_map(|&v| [v, v, v, 255])
                .collect(),
        )
        .unwrap();

        let framebuffer = render(&profile, RenderRequest::default(), &raster);
        // Image row r becomes panel column r; image column 0 ends up on the
        // bottom panel row.
        assert_eq!(framebuffer.as_bytes(), &[20, 40, 60, 10, 30, 50]);
    }
}
