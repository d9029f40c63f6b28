use panel_render::{DisplayProfile, Geometry, PanelRenderer, Rendered};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use crate::error::{DecodeError, RefreshError};
use crate::models::{parse_message, RefreshMessage};
use crate::services::decoder::decode_png_file;
use crate::services::sink::FramebufferSink;

/// What a completed refresh did, for logging and tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshOutcome {
    pub geometry: Geometry,
    pub bytes: usize,
    pub elapsed: Duration,
}

/// Runs refresh requests against one panel.
///
/// The profile is shared read-only. Decode and render run on the blocking
/// pool; delivery goes through a mutex so frames never interleave on the
/// device.
pub struct RefreshService {
    profile: Arc<DisplayProfile>,
    sink: Mutex<Box<dyn FramebufferSink>>,
}

impl RefreshService {
    pub fn new(profile: DisplayProfile, sink: Box<dyn FramebufferSink>) -> Self {
        Self {
            profile: Arc::new(profile),
            sink: Mutex::new(sink),
        }
    }

    pub fn profile(&self) -> &DisplayProfile {
        &self.profile
    }

    /// Parse one socket line and run it. Ignored parameters are logged.
    pub async fn handle_line(&self, line: &str) -> Result<RefreshOutcome, RefreshError> {
        tracing::info!(message = %line.trim(), "Received message");
        let parsed = parse_message(line)?;
        for warning in &parsed.warnings {
            tracing::warn!(%warning, "Invalid parameter");
        }
        self.refresh(&parsed.refresh).await
    }

    /// Decode the image, render it for the panel and deliver the frame.
    pub async fn refresh(&self, message: &RefreshMessage) -> Result<RefreshOutcome, RefreshError> {
        let start = Instant::now();

        let rendered = self.render_in_blocking_context(message).await?;
        let geometry = rendered.geometry;
        tracing::info!(
            image = %message.image.display(),
            orientation = %geometry.orientation,
            width = geometry.display_width,
            height = geometry.display_height,
            offset_x = geometry.offset_x,
            offset_y = geometry.offset_y,
            "Rendering image"
        );

        {
            let sink = self.sink.lock().await;
            sink.deliver(&rendered.framebuffer).await?;
        }

        let elapsed = start.elapsed();
        tracing::info!("Took {:.2} ms", elapsed.as_secs_f64() * 1000.0);

        Ok(RefreshOutcome {
            geometry,
            bytes: rendered.framebuffer.len(),
            elapsed,
        })
    }

    async fn render_in_blocking_context(
        &self,
        message: &RefreshMessage,
    ) -> Result<Rendered, RefreshError> {
        let profile = Arc::clone(&self.profile);
        let image = message.image.clone();
        let request = message.request;

        let rendered = tokio::task::spawn_blocking(move || -> Result<Rendered, DecodeError> {
            let raster = decode_png_file(&image)?;
            Ok(PanelRenderer::new(&profile).render(&request, &raster))
        })
        .await
        .map_err(|e| RefreshError::Task(e.to_string()))??;

        Ok(rendered)
    }
}
