//! PNG files to RGBA rasters.

use panel_render::SourceRaster;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::DecodeError;

/// Decode a PNG file into an 8-bit RGBA raster.
///
/// Every PNG layout is normalized: palettes and low bit depths are expanded,
/// 16-bit channels stripped to 8, gray promoted to RGB and missing alpha
/// filled with 255. A missing file is [`DecodeError::SourceNotFound`].
pub fn decode_png_file(path: &Path) -> Result<SourceRaster, DecodeError> {
    let file = File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            DecodeError::SourceNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DecodeError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    decode_png(BufReader::new(file), path)
}

/// Decode PNG data from any reader. `path` is only used in error messages.
pub fn decode_png<R: Read>(reader: R, path: &Path) -> Result<SourceRaster, DecodeError> {
    let decode_err = |e: png::DecodingError| DecodeError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info().map_err(decode_err)?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).map_err(decode_err)?;
    buf.truncate(info.buffer_size());

    if info.bit_depth != png::BitDepth::Eight {
        return Err(DecodeError::UnsupportedLayout {
            path: path.to_path_buf(),
            layout: format!("{:?} bit depth after expansion", info.bit_depth),
        });
    }

    let rgba = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        png::ColorType::Indexed => {
            return Err(DecodeError::UnsupportedLayout {
                path: path.to_path_buf(),
                layout: "indexed color after expansion".to_string(),
            })
        }
    };

    tracing::debug!(
        path = %path.display(),
        width = info.width,
        height = info.height,
        color_type = ?info.color_type,
        "Decoded image"
    );

    Ok(SourceRaster::from_rgba(info.width, info.height, rgba)?)
}
