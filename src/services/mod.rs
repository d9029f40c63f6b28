pub mod decoder;
pub mod refresh;
pub mod sink;

pub use decoder::{decode_png, decode_png_file};
pub use refresh::{RefreshOutcome, RefreshService};
pub use sink::{
    sink_from_config, FanoutSink, FramebufferSink, LogSink, PreviewSink, RawFileSink,
};
