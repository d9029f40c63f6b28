//! Grayscale PNG previews of framebuffers.
//!
//! 1bpp frames are written as 1-bit grayscale PNGs straight from the packed
//! rows: the panel's MSB-first layout and its "1 is white" convention are
//! exactly what a 1-bit PNG expects. 8bpp frames become 8-bit grayscale.

use panel_render::{ColorMode, Framebuffer};
use std::io::Cursor;

use crate::error::SinkError;

/// Encode a framebuffer as a grayscale PNG.
///
/// The PNG width is the number of pixels actually packed per row, so a 1bpp
/// panel whose width is not a multiple of 8 previews without the dropped
/// trailing columns.
pub fn encode_preview(framebuffer: &Framebuffer) -> Result<Vec<u8>, SinkError> {
    let (width, bit_depth) = match framebuffer.color_mode() {
        ColorMode::Mono1bpp => (framebuffer.bytes_per_row() as u32 * 8, png::BitDepth::One),
        ColorMode::Gray8bpp => (framebuffer.width(), png::BitDepth::Eight),
    };
    if width == 0 || framebuffer.height() == 0 {
        return Err(SinkError::EmptyPreview);
    }

    encode_png(width, framebuffer.height(), bit_depth, framebuffer.as_bytes())
}

fn encode_png(
    width: u32,
    height: u32,
    bit_depth: png::BitDepth,
    rows: &[u8],
) -> Result<Vec<u8>, SinkError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(bit_depth);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| SinkError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(rows)
            .map_err(|e| SinkError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
