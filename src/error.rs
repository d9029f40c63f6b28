use std::path::PathBuf;
use thiserror::Error;

use crate::models::MessageError;

/// Failure of one refresh request. The daemon logs it and keeps serving.
#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("Message error: {0}")]
    Message(#[from] MessageError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Output error: {0}")]
    Sink(#[from] SinkError),

    #[error("Render task failed: {0}")]
    Task(String),
}

/// Failure to turn an image file into a raster.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Image file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PNG decode error in {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    #[error("Unsupported PNG layout in {}: {layout}", path.display())]
    UnsupportedLayout { path: PathBuf, layout: String },

    #[error("Invalid raster: {0}")]
    Raster(#[from] panel_render::RenderError),
}

/// Configuration that cannot describe a panel. Aborts startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Supported processors are BCM2835 and IT8951, '{0}' isn't available")]
    UnknownProcessor(String),

    #[error("Supported display orientations are 0, 90, 180 and 270, '{0}' isn't possible")]
    InvalidOrientation(i64),

    #[error("Supported bits per pixel are 1 and 8, got {0}")]
    InvalidBitsPerPixel(u8),

    #[error("Invalid display: {0}")]
    Display(#[from] panel_render::RenderError),
}

/// Failure to hand a framebuffer to its destination.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Framebuffer has no pixels to preview")]
    EmptyPreview,
}
