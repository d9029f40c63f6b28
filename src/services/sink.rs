use async_trait::async_trait;
use panel_render::Framebuffer;
use std::path::{Path, PathBuf};

use crate::error::SinkError;
use crate::models::OutputConfig;
use crate::rendering::encode_preview;

/// Destination for rendered framebuffers
#[async_trait]
pub trait FramebufferSink: Send + Sync {
    /// Hand one finished frame to the destination
    async fn deliver(&self, framebuffer: &Framebuffer) -> Result<(), SinkError>;

    /// Short label for logs
    fn describe(&self) -> String;
}

/// Dry run: logs the frame size and discards it
#[derive(Debug, Default)]
pub struct LogSink;

#[async_trait]
impl FramebufferSink for LogSink {
    async fn deliver(&self, framebuffer: &Framebuffer) -> Result<(), SinkError> {
        tracing::info!(
            width = framebuffer.width(),
            height = framebuffer.height(),
            bytes = framebuffer.len(),
            mode = %framebuffer.color_mode(),
            "Framebuffer ready (no output configured)"
        );
        Ok(())
    }

    fn describe(&self) -> String {
        "log only".to_string()
    }
}

/// Writes the raw framebuffer bytes to a file or device node
#[derive(Debug)]
pub struct RawFileSink {
    path: PathBuf,
}

impl RawFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl FramebufferSink for RawFileSink {
    async fn deliver(&self, framebuffer: &Framebuffer) -> Result<(), SinkError> {
        write_file(&self.path, framebuffer.as_bytes()).await?;
        tracing::debug!(path = %self.path.display(), bytes = framebuffer.len(), "Wrote framebuffer");
        Ok(())
    }

    fn describe(&self) -> String {
        format!("raw {}", self.path.display())
    }
}

/// Writes a grayscale PNG of each frame for inspection
#[derive(Debug)]
pub struct PreviewSink {
    path: PathBuf,
}

impl PreviewSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl FramebufferSink for PreviewSink {
    async fn deliver(&self, framebuffer: &Framebuffer) -> Result<(), SinkError> {
        let png_bytes = encode_preview(framebuffer)?;
        write_file(&self.path, &png_bytes).await?;
        tracing::debug!(path = %self.path.display(), bytes = png_bytes.len(), "Wrote preview");
        Ok(())
    }

    fn describe(&self) -> String {
        format!("preview {}", self.path.display())
    }
}

/// Delivers to several sinks in order, stopping at the first failure
pub struct FanoutSink {
    sinks: Vec<Box<dyn FramebufferSink>>,
}

impl FanoutSink {
    pub fn new(sinks: Vec<Box<dyn FramebufferSink>>) -> Self {
        Self { sinks }
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

#[async_trait]
impl FramebufferSink for FanoutSink {
    async fn deliver(&self, framebuffer: &Framebuffer) -> Result<(), SinkError> {
        for sink in &self.sinks {
            sink.deliver(framebuffer).await?;
        }
        Ok(())
    }

    fn describe(&self) -> String {
        self.sinks
            .iter()
            .map(|s| s.describe())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Build the sink described by the output section of the config.
pub fn sink_from_config(output: &OutputConfig) -> Box<dyn FramebufferSink> {
    let mut sinks: Vec<Box<dyn FramebufferSink>> = Vec::new();
    if let Some(raw) = &output.raw {
        sinks.push(Box::new(RawFileSink::new(raw)));
    }
    if let Some(preview) = &output.preview {
        sinks.push(Box::new(PreviewSink::new(preview)));
    }

    match sinks.len() {
        0 => Box::new(LogSink),
        1 => sinks.remove(0),
        _ => Box::new(FanoutSink::new(sinks)),
    }
}

async fn write_file(path: &Path, bytes: &[u8]) -> Result<(), SinkError> {
    tokio::fs::write(path, bytes)
        .await
        .map_err(|source| SinkError::Io {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_render::ColorMode;

    fn frame() -> Framebuffer {
        Framebuffer::new(vec![0xFF, 0x00, 0x81, 0x7E], 16, 2, ColorMode::Mono1bpp)
    }

    #[tokio::test]
    async fn test_log_sink_accepts_frames() {
        LogSink.deliver(&frame()).await.unwrap();
    }

    #[tokio::test]
    async fn test_raw_sink_writes_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("panel.fb");

        RawFileSink::new(&path).deliver(&frame()).await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), vec![0xFF, 0x00, 0x81, 0x7E]);
    }

    #[tokio::test]
    async fn test_raw_sink_overwrites_previous_frame() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("panel.fb");
        let sink = RawFileSink::new(&path);

        sink.deliver(&frame()).await.unwrap();
        let second = Framebuffer::new(vec![1, 2], 16, 1, ColorMode::Mono1bpp);
        sink.deliver(&second).await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_raw_sink_missing_directory() {
        let sink = RawFileSink::new("/nonexistent/airpanel/panel.fb");
        let err = sink.deliver(&frame()).await.unwrap_err();
        assert!(matches!(err, SinkError::Io { .. }));
    }

    #[tokio::test]
    async fn test_preview_sink_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preview.png");

        PreviewSink::new(&path).deliver(&frame()).await.unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[tokio::test]
    async fn test_fanout_delivers_to_all() {
        let dir = tempfile::tempdir().unwrap();
        let raw = dir.path().join("a.fb");
        let preview = dir.path().join("a.png");

        let sink = FanoutSink::new(vec![
            Box::new(RawFileSink::new(&raw)),
            Box::new(PreviewSink::new(&preview)),
        ]);
        sink.deliver(&frame()).await.unwrap();

        assert!(raw.exists());
        assert!(preview.exists());
    }

    #[test]
    fn test_sink_from_config() {
        let none = sink_from_config(&OutputConfig::default());
        assert_eq!(none.describe(), "log only");

        let raw_only = sink_from_config(&OutputConfig {
            raw: Some(PathBuf::from("/dev/epd")),
            preview: None,
        });
        assert_eq!(raw_only.describe(), "raw /dev/epd");

        let both = sink_from_config(&OutputConfig {
            raw: Some(PathBuf::from("/dev/epd")),
            preview: Some(PathBuf::from("/tmp/p.png")),
        });
        assert_eq!(both.describe(), "raw /dev/epd, preview /tmp/p.png");
    }
}
