use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use airpanel::models::{AppConfig, ConfigOverrides, RefreshMessage, CONFIG_ENV};
use airpanel::server::SocketServer;
use airpanel::services::{sink_from_config, RefreshService};
use panel_render::{Orientation, RenderRequest};

#[derive(Parser)]
#[command(name = "airpanel")]
#[command(about = "Airpanel - renders PNG images onto e-paper display panels")]
struct Cli {
    #[command(flatten)]
    display: DisplayArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Panel and output settings; each one given here wins over the config file
#[derive(Args)]
struct DisplayArgs {
    /// YAML config file (default: $AIRPANEL_CONFIG)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Display's native width in pixels
    #[arg(short = 'W', long, global = true)]
    width: Option<u32>,

    /// Display's native height in pixels
    #[arg(short = 'H', long, global = true)]
    height: Option<u32>,

    /// Display orientation: 0, 90, 180 or 270 (automatic when omitted)
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    orientation: Option<i64>,

    /// Display controller: BCM2835 (1 bit per pixel) or IT8951 (8 bits per pixel)
    #[arg(short, long, global = true)]
    processor: Option<String>,

    /// Bits per pixel, overriding the processor default (1 or 8)
    #[arg(short, long, global = true)]
    bpp: Option<u8>,

    /// Gray value (0-255) for pixels not covered by the image
    #[arg(long, global = true)]
    background: Option<u8>,

    /// Write raw framebuffer bytes to this file or device
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Write a grayscale PNG preview of each frame to this file
    #[arg(long, global = true)]
    preview: Option<PathBuf>,

    /// Switch on verbose logging
    #[arg(short = 'V', long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Listen on a Unix socket for refresh messages
    Serve {
        /// Socket path (default: /tmp/airpanel)
        #[arg(short, long)]
        socket: Option<PathBuf>,
    },
    /// Display one image and exit
    Refresh {
        /// PNG image to display
        #[arg(short, long)]
        image: PathBuf,

        /// Image left offset in pixels (centered when omitted)
        #[arg(short = 'x', long, allow_negative_numbers = true)]
        offset_x: Option<i64>,

        /// Image top offset in pixels (centered when omitted)
        #[arg(short = 'y', long, allow_negative_numbers = true)]
        offset_y: Option<i64>,

        /// Orientation for this image only: 0, 90, 180 or 270
        #[arg(long)]
        image_orientation: Option<Orientation>,
    },
}

impl DisplayArgs {
    fn overrides(&self, socket: Option<PathBuf>) -> ConfigOverrides {
        ConfigOverrides {
            width: self.width,
            height: self.height,
            orientation: self.orientation,
            processor: self.processor.clone(),
            bits_per_pixel: self.bpp,
            background: self.background,
            socket,
            raw_output: self.output.clone(),
            preview: self.preview.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.display.verbose);

    let socket = match &cli.command {
        Some(Commands::Serve { socket }) => socket.clone(),
        _ => None,
    };
    let config = load_config(&cli.display, socket);

    match cli.command {
        Some(Commands::Serve { .. }) => run_server(config).await,
        Some(Commands::Refresh {
            image,
            offset_x,
            offset_y,
            image_orientation,
        }) => {
            let request = RenderRequest {
                orientation: image_orientation,
                offset_x,
                offset_y,
            };
            run_refresh_command(config, RefreshMessage { image, request }).await
        }
        None => run_status_command(&config),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "airpanel=debug"
    } else {
        "airpanel=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
    if verbose {
        tracing::debug!("Enabled verbose logging mode");
    }
}

/// Defaults, then the YAML file, then command line flags
fn load_config(args: &DisplayArgs, socket: Option<PathBuf>) -> AppConfig {
    let path = AppConfig::resolve_path(args.config.clone());
    let mut config = AppConfig::load(path.as_deref());
    args.overrides(socket).apply(&mut config);
    config
}

/// Validate the config and build the refresh service
fn build_service(config: &AppConfig) -> anyhow::Result<RefreshService> {
    let profile = config
        .display_profile()
        .context("Invalid display configuration")?;
    tracing::info!("{}", config.summary()?);

    let sink = sink_from_config(&config.output);
    tracing::info!(output = %sink.describe(), "Output configured");

    Ok(RefreshService::new(profile, sink))
}

/// Render one image and exit
async fn run_refresh_command(config: AppConfig, message: RefreshMessage) -> anyhow::Result<()> {
    let service = build_service(&config)?;
    service
        .refresh(&message)
        .await
        .with_context(|| format!("Failed to display {}", message.image.display()))?;
    Ok(())
}

/// Run the socket daemon until Ctrl-C
async fn run_server(config: AppConfig) -> anyhow::Result<()> {
    let service = Arc::new(build_service(&config)?);
    let server = SocketServer::bind(&config.socket)?;

    server
        .run(service, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(%e, "Failed to listen for Ctrl-C");
            }
        })
        .await
}

/// Display version and effective configuration
fn run_status_command(config: &AppConfig) -> anyhow::Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Airpanel v{VERSION}");
    println!("Renders PNG images onto e-paper display panels\n");

    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV} = {}",
        std::env::var(CONFIG_ENV).unwrap_or_else(|_| "(not set)".to_string())
    );

    println!("\nDisplay:");
    match config.summary() {
        Ok(summary) => println!("  {summary}"),
        Err(e) => println!("  invalid: {e}"),
    }
    println!("  Background: {}", config.display.background);

    println!("\nSocket:  {}", config.socket.display());
    println!("Output:  {}", sink_from_config(&config.output).describe());

    println!("\nCommands:");
    println!("  airpanel serve     Listen on the socket for refresh messages");
    println!("  airpanel refresh   Display one image and exit");
    println!("\nRun 'airpanel --help' for more details.");

    Ok(())
}
