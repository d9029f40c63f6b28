//! Airpanel - renders PNG images onto e-paper panels
//!
//! Socket daemon and CLI around the `panel-render` pipeline.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod server;
pub mod services;
