//! Orientation and offset resolution.

use super::Orientation;
use crate::model::{DisplayProfile, RenderRequest};

/// The concrete placement used for one render.
///
/// Produced by [`resolve`]; every optional input has been settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Resolved rotation.
    pub orientation: Orientation,
    /// Effective display width: the panel's native width, or its native
    /// height for 90° and 270°.
    pub display_width: u32,
    /// Effective display height (swapped like `display_width`).
    pub display_height: u32,
    /// Source image width in pixels.
    pub image_width: u32,
    /// Source image height in pixels.
    pub image_height: u32,
    /// Horizontal placement of the image origin, in effective display pixels.
    pub offset_x: i64,
    /// Vertical placement of the image origin, in effective display pixels.
    pub offset_y: i64,
}

/// Resolve the geometry for one render.
///
/// Orientation comes from the request, then the profile default, then
/// auto-selection: 0° when the image and the native panel agree on being
/// portrait (`height > width`), otherwise 90°. Unset offsets center the
/// image, rounding toward negative infinity; explicit offsets are taken
/// literally even when they push the image off the panel.
///
/// # Example
/// ```
/// use panel_render::{resolve, ColorMode, DisplayProfile, Orientation, RenderRequest};
///
/// let profile = DisplayProfile::new(640, 384, ColorMode::Mono1bpp).unwrap();
/// let geometry = resolve(&profile, &RenderRequest::default(), 384, 640);
///
/// assert_eq!(geometry.orientation, Orientation::Deg90);
/// assert_eq!((geometry.display_width, geometry.display_height), (384, 640));
/// assert_eq!((geometry.offset_x, geometry.offset_y), (0, 0));
/// ```
pub fn resolve(
    profile: &DisplayProfile,
    request: &RenderRequest,
    source_width: u32,
    source_height: u32,
) -> Geometry {
    let orientation = request
        .orientation
        .or(profile.default_orientation())
        .unwrap_or_else(|| auto_orientation(profile, source_width, source_height));

    let (display_width, display_height) = if orientation.swaps_dimensions() {
        (profile.height(), profile.width())
    } else {
        (profile.width(), profile.height())
    };

    Geometry {
        orientation,
        display_width,
        display_height,
        image_width: source_width,
        image_height: source_height,
        offset_x: request
            .offset_x
            .unwrap_or_else(|| centered(display_width, source_width)),
        offset_y: request
            .offset_y
            .unwrap_or_else(|| centered(display_height, source_height)),
    }
}

/// Compares portrait-ness against the native, unrotated panel.
fn auto_orientation(
    profile: &DisplayProfile,
    source_width: u32,
    source_height: u32,
) -> Orientation {
    let image_portrait = source_height > source_width;
    if image_portrait == profile.is_portrait() {
        Orientation::Deg0
    } else {
        Orientation::Deg90
    }
}

#[inline]
fn centered(display: u32, image: u32) -> i64 {
    (display as i64 - image as i64).div_euclid(2)
}
