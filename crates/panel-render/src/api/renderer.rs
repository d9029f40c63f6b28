//! PanelRenderer: resolve geometry and pack in one call.

use crate::geometry::{resolve, Geometry};
use crate::model::{DisplayProfile, RenderRequest, SourceRaster};
use crate::output::{pack, Framebuffer};

/// Result of one render: the bytes for the panel and the placement that
/// produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub geometry: Geometry,
    pub framebuffer: Framebuffer,
}

/// Renders rasters for one panel.
///
/// Holds the profile by reference; [`render`](Self::render) takes `&self`
/// so one renderer serves any number of requests, including concurrently.
///
/// # Example
///
/// ```
/// use panel_render::{ColorMode, DisplayProfile, PanelRenderer, RenderRequest, SourceRaster};
///
/// let profile = DisplayProfile::new(8, 1, ColorMode::Mono1bpp)
///     .unwrap()
///     .with_background(0);
/// let renderer = PanelRenderer::new(&profile);
///
/// // A white image pushed entirely off the panel leaves only background.
/// let raster = SourceRaster::from_rgba(1, 1, vec![255; 4]).unwrap();
/// let request = RenderRequest::default().offset_x(50);
///
/// assert_eq!(renderer.render(&request, &raster).framebuffer.as_bytes(), &[0x00]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PanelRenderer<'a> {
    profile: &'a DisplayProfile,
}

impl<'a> PanelRenderer<'a> {
    pub fn new(profile: &'a DisplayProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &'a DisplayProfile {
        self.profile
    }

    /// Resolve the placement of `raster` without rendering it.
    pub fn geometry(&self, request: &RenderRequest, raster: &SourceRaster) -> Geometry {
        resolve(self.profile, request, raster.width(), raster.height())
    }

    /// Resolve the placement and pack the full framebuffer.
    pub fn render(&self, request: &RenderRequest, raster: &SourceRaster) -> Rendered {
        let geometry = self.geometry(request, raster);
        let framebuffer = pack(self.profile, &geometry, raster);
        Rendered {
            geometry,
            framebuffer,
        }
    }
}

/// One-shot render without keeping a [`PanelRenderer`] around.
pub fn render(profile: &DisplayProfile, request: &RenderRequest, raster: &SourceRaster) -> Rendered {
    PanelRenderer::new(profile).render(request, raster)
}
