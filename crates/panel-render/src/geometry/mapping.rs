//! Panel pixel to source pixel mapping.

use super::{Geometry, Orientation};

impl Geometry {
    /// Source pixel shown at native panel coordinate `(x, y)`, or `None`
    /// when the image does not cover that pixel.
    ///
    /// `x` runs across the panel's native width and `y` down its native
    /// height, whatever the resolved orientation.
    pub fn source_pixel(&self, x: u32, y: u32) -> Option<(u32, u32)> {
        let (x, y) = (x as i64, y as i64);
        match self.orientation {
            Orientation::Deg0 => self.direct(x, y),
            Orientation::Deg180 => {
                let (x, y) = self.reflect(x, y);
                self.direct(x, y)
            }
            Orientation::Deg90 => self.quarter_turn(x, y),
            Orientation::Deg270 => {
                let (x, y) = self.reflect(x, y);
                self.quarter_turn(x, y)
            }
        }
    }

    /// Point reflection through the centre of the native panel grid.
    ///
    /// Native width is `display_width` at 0°/180° and `display_height` at
    /// 90°/270°, so the reflection never needs to know which case it is in.
    #[inline]
    fn reflect(&self, x: i64, y: i64) -> (i64, i64) {
        let (native_width, native_height) = if self.orientation.swaps_dimensions() {
            (self.display_height, self.display_width)
        } else {
            (self.display_width, self.display_height)
        };
        (native_width as i64 - 1 - x, native_height as i64 - 1 - y)
    }

    /// 0°: the image sits at `(offset_x, offset_y)` on the panel.
    ///
    /// Offsets far enough out to overflow can never land on the image.
    #[inline]
    fn direct(&self, x: i64, y: i64) -> Option<(u32, u32)> {
        let src_x = x.checked_sub(self.offset_x)?;
        let src_y = y.checked_sub(self.offset_y)?;
        self.checked(src_x, src_y)
    }

    /// 90°: panel columns walk down image rows, panel rows walk image
    /// columns from right to left.
    #[inline]
    fn quarter_turn(&self, x: i64, y: i64) -> Option<(u32, u32)> {
        let width = self.display_width as i64;
        let src_x = (width - 1 - y).checked_sub(self.offset_x)?;
        let src_y = x.checked_sub(self.offset_y)?;
        self.checked(src_x, src_y)
    }

    #[inline]
    fn checked(&self, src_x: i64, src_y: i64) -> Option<(u32, u32)> {
        let in_bounds = (0..self.image_width as i64).contains(&src_x)
            && (0..self.image_height as i64).contains(&src_y);
        in_bounds.then_some((src_x as u32, src_y as u32))
    }
}
