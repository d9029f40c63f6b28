//! Public API for the panel-render crate.
//!
//! This module provides the high-level entry point: [`PanelRenderer`] and
//! the [`RenderError`] type returned when building pipeline inputs.

mod error;
mod renderer;

pub use error::RenderError;
pub use renderer::{render, PanelRenderer, Rendered};
