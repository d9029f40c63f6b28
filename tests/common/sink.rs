//! Sink that hands delivered frames back to the test.

use async_trait::async_trait;
use panel_render::Framebuffer;
use std::time::Duration;
use tokio::sync::mpsc;

use airpanel::error::SinkError;
use airpanel::services::FramebufferSink;

/// Forwards every delivered framebuffer over a channel
pub struct RecordingSink {
    frames: mpsc::UnboundedSender<Framebuffer>,
}

/// Receiving end of a [`RecordingSink`]
pub struct Frames {
    rx: mpsc::UnboundedReceiver<Framebuffer>,
}

impl RecordingSink {
    pub fn new() -> (Self, Frames) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { frames: tx }, Frames { rx })
    }
}

#[async_trait]
impl FramebufferSink for RecordingSink {
    async fn deliver(&self, framebuffer: &Framebuffer) -> Result<(), SinkError> {
        let _ = self.frames.send(framebuffer.clone());
        Ok(())
    }

    fn describe(&self) -> String {
        "recording".to_string()
    }
}

impl Frames {
    /// Wait for the next delivered frame
    pub async fn next(&mut self) -> Framebuffer {
        tokio::time::timeout(Duration::from_secs(5), self.rx.recv())
            .await
            .expect("Timed out waiting for a frame")
            .expect("Sink dropped")
    }

    /// Assert nothing arrives within a short window
    pub async fn assert_none(&mut self) {
        let next = tokio::time::timeout(Duration::from_millis(200), self.rx.recv()).await;
        assert!(next.is_err(), "Unexpected frame delivered");
    }

    /// Frame already delivered, if any
    pub fn try_next(&mut self) -> Option<Framebuffer> {
        self.rx.try_recv().ok()
    }
}
