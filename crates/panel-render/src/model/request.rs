//! Per-refresh overrides.

use crate::geometry::Orientation;

/// Optional placement overrides for one refresh.
///
/// Anything left `None` is resolved from the profile or the image; see
/// [`resolve`](crate::geometry::resolve).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderRequest {
    pub orientation: Option<Orientation>,
    /// May be negative or beyond the panel; the image is clipped.
    pub offset_x: Option<i64>,
    pub offset_y: Option<i64>,
}

impl RenderRequest {
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn offset_x(mut self, offset_x: i64) -> Self {
        self.offset_x = Some(offset_x);
        self
    }

    pub fn offset_y(mut self, offset_y: i64) -> Self {
        self.offset_y = Some(offset_y);
        self
    }
}
