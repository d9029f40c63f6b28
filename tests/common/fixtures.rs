//! PNG fixtures written to scratch directories.

use std::path::{Path, PathBuf};

/// Opaque colors used across tests
pub mod colors {
    pub const BLACK: [u8; 4] = [0, 0, 0, 255];
    pub const WHITE: [u8; 4] = [255, 255, 255, 255];
    pub const RED: [u8; 4] = [255, 0, 0, 255];
    pub const GREEN: [u8; 4] = [0, 255, 0, 255];
    pub const BLUE: [u8; 4] = [0, 0, 255, 255];
    pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];
}

/// Write an 8-bit RGBA PNG.
pub fn write_rgba_png(path: &Path, width: u32, height: u32, rgba: &[u8]) {
    assert_eq!(rgba.len(), (width * height * 4) as usize, "fixture size mismatch");
    let file = std::fs::File::create(path).expect("Failed to create fixture");
    let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().expect("Failed to write PNG header");
    writer
        .write_image_data(rgba)
        .expect("Failed to write PNG data");
}

/// Write an 8-bit grayscale PNG.
pub fn write_gray_png(path: &Path, width: u32, height: u32, gray: &[u8]) {
    let file = std::fs::File::create(path).expect("Failed to create fixture");
    let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().expect("Failed to write PNG header");
    writer
        .write_image_data(gray)
        .expect("Failed to write PNG data");
}

/// Write a single-color RGBA PNG into `dir` and return its path.
pub fn solid_png(dir: &Path, name: &str, width: u32, height: u32, color: [u8; 4]) -> PathBuf {
    let path = dir.join(name);
    let rgba = color.repeat((width * height) as usize);
    write_rgba_png(&path, width, height, &rgba);
    path
}

/// JSON refresh message in the socket envelope format.
pub fn refresh_envelope(image: &Path, extra: &str) -> String {
    let mut data = format!(r#""action":"refresh","image":"{}""#, image.display());
    if !extra.is_empty() {
        data.push(',');
        data.push_str(extra);
    }
    format!(r#"{{"type":"message","data":{{{data}}}}}"#)
}
