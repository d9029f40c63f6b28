use panel_render::{ColorMode, DisplayProfile, Orientation};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::ConfigError;

/// Environment variable naming the YAML config file.
pub const CONFIG_ENV: &str = "AIRPANEL_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Panel description
    #[serde(default)]
    pub display: DisplayConfig,

    /// Unix socket the daemon listens on
    #[serde(default = "default_socket")]
    pub socket: PathBuf,

    /// Where rendered framebuffers go
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_socket() -> PathBuf {
    PathBuf::from("/tmp/airpanel")
}

/// Physical panel configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Native width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Native height in pixels
    #[serde(default = "default_height")]
    pub height: u32,

    /// Display controller, selects the default color mode
    #[serde(default = "default_processor")]
    pub processor: String,

    /// Overrides the processor's color mode (1 or 8)
    #[serde(default)]
    pub bits_per_pixel: Option<u8>,

    /// Gray value of pixels not covered by the image
    #[serde(default = "default_background")]
    pub background: u8,

    /// Fixed orientation in degrees; automatic when absent
    #[serde(default)]
    pub orientation: Option<i64>,
}

fn default_width() -> u32 {
    640
}

fn default_height() -> u32 {
    384
}

fn default_processor() -> String {
    Processor::Bcm2835.to_string()
}

fn default_background() -> u8 {
    panel_render::WHITE
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            processor: default_processor(),
            bits_per_pixel: None,
            background: default_background(),
            orientation: None,
        }
    }
}

/// Framebuffer destinations. With neither set, frames are only logged.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct OutputConfig {
    /// Raw framebuffer bytes are written here (file or device node)
    #[serde(default)]
    pub raw: Option<PathBuf>,

    /// A grayscale PNG of each frame is written here
    #[serde(default)]
    pub preview: Option<PathBuf>,
}

/// Supported display controllers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Processor {
    /// Waveshare HAT driven over SPI, 1 bit per pixel
    Bcm2835,
    /// IT8951 controller, 8 bits per pixel
    It8951,
}

impl Processor {
    pub fn color_mode(self) -> ColorMode {
        match self {
            Processor::Bcm2835 => ColorMode::Mono1bpp,
            Processor::It8951 => ColorMode::Gray8bpp,
        }
    }
}

impl fmt::Display for Processor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Processor::Bcm2835 => write!(f, "BCM2835"),
            Processor::It8951 => write!(f, "IT8951"),
        }
    }
}

impl FromStr for Processor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BCM2835" => Ok(Processor::Bcm2835),
            "IT8951" => Ok(Processor::It8951),
            _ => Err(ConfigError::UnknownProcessor(s.to_string())),
        }
    }
}

/// Values given on the command line. Each one that is set wins over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub orientation: Option<i64>,
    pub processor: Option<String>,
    pub bits_per_pixel: Option<u8>,
    pub background: Option<u8>,
    pub socket: Option<PathBuf>,
    pub raw_output: Option<PathBuf>,
    pub preview: Option<PathBuf>,
}

impl ConfigOverrides {
    pub fn apply(self, config: &mut AppConfig) {
        let display = &mut config.display;
        if let Some(width) = self.width {
            display.width = width;
        }
        if let Some(height) = self.height {
            display.height = height;
        }
        if let Some(orientation) = self.orientation {
            display.orientation = Some(orientation);
        }
        if let Some(processor) = self.processor {
            display.processor = processor;
        }
        if let Some(bpp) = self.bits_per_pixel {
            display.bits_per_pixel = Some(bpp);
        }
        if let Some(background) = self.background {
            display.background = background;
        }
        if let Some(socket) = self.socket {
            config.socket = socket;
        }
        if let Some(raw) = self.raw_output {
            config.output.raw = Some(raw);
        }
        if let Some(preview) = self.preview {
            config.output.preview = Some(preview);
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file, falling back to defaults.
    ///
    /// A missing, unreadable or malformed file is logged and ignored so the
    /// daemon still comes up with the built-in panel description.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        width = config.display.width,
                        height = config.display.height,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Config file path: the explicit argument, else `AIRPANEL_CONFIG`.
    pub fn resolve_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit.or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from))
    }

    pub fn processor(&self) -> Result<Processor, ConfigError> {
        self.display.processor.parse()
    }

    pub fn color_mode(&self) -> Result<ColorMode, ConfigError> {
        match self.display.bits_per_pixel {
            Some(bpp) => {
                ColorMode::from_bits_per_pixel(bpp).ok_or(ConfigError::InvalidBitsPerPixel(bpp))
            }
            None => Ok(self.processor()?.color_mode()),
        }
    }

    pub fn orientation(&self) -> Result<Option<Orientation>, ConfigError> {
        self.display
            .orientation
            .map(|deg| Orientation::from_degrees(deg).ok_or(ConfigError::InvalidOrientation(deg)))
            .transpose()
    }

    /// Validate the display section and build the immutable panel profile.
    pub fn display_profile(&self) -> Result<DisplayProfile, ConfigError> {
        let display = &self.display;
        // Validate the processor even when bits_per_pixel overrides it
        self.processor()?;
        let profile = DisplayProfile::new(display.width, display.height, self.color_mode()?)?
            .with_background(display.background)
            .with_default_orientation(self.orientation()?);
        Ok(profile)
    }

    /// One-line description logged at startup, e.g.
    /// `640×384, BCM2835 (1 bit per pixel), auto orientation`.
    pub fn summary(&self) -> Result<String, ConfigError> {
        let orientation = match self.orientation()? {
            Some(o) => format!("orientation: {}°", o),
            None => "auto orientation".to_string(),
        };
        Ok(format!(
            "{}×{}, {} ({}), {}",
            self.display.width,
            self.display.height,
            self.processor()?,
            self.color_mode()?,
            orientation
        ))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            socket: default_socket(),
            output: OutputConfig::default(),
        }
    }
}
