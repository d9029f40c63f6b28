pub mod config;
pub mod message;

pub use config::{AppConfig, ConfigOverrides, DisplayConfig, OutputConfig, Processor, CONFIG_ENV};
pub use message::{parse_message, MessageError, ParameterWarning, ParsedMessage, RefreshMessage};
