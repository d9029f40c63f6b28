//! Assertion helpers for framebuffers.

use panel_render::Framebuffer;

/// Whether the 1bpp pixel at (x, y) is white.
pub fn mono_pixel(framebuffer: &Framebuffer, x: u32, y: u32) -> bool {
    let row = framebuffer.row(y);
    row[(x / 8) as usize] & (0x80 >> (x % 8)) != 0
}

/// Assert every 1bpp pixel inside `[x0, x1) x [y0, y1)` is black and every
/// other pixel white.
pub fn assert_black_rect(framebuffer: &Framebuffer, x0: u32, y0: u32, x1: u32, y1: u32) {
    for y in 0..framebuffer.height() {
        for x in 0..framebuffer.bytes_per_row() as u32 * 8 {
            let inside = (x0..x1).contains(&x) && (y0..y1).contains(&y);
            assert_eq!(
                mono_pixel(framebuffer, x, y),
                !inside,
                "pixel ({x}, {y}) should be {}",
                if inside { "black" } else { "white" }
            );
        }
    }
}

/// Assert a byte buffer is a PNG file.
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}
