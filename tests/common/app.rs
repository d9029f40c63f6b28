//! Socket daemon harness for integration tests.

use panel_render::DisplayProfile;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::io::AsyncWriteExt;
use tokio::net::UnixStream;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use airpanel::server::SocketServer;
use airpanel::services::RefreshService;

use super::sink::{Frames, RecordingSink};

/// A daemon listening on a socket in its own scratch directory
pub struct TestDaemon {
    pub dir: TempDir,
    pub socket: PathBuf,
    pub frames: Frames,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<anyhow::Result<()>>>,
}

impl TestDaemon {
    /// Start a daemon for the given panel, recording every frame
    pub async fn start(profile: DisplayProfile) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let socket = dir.path().join("airpanel.sock");

        let (sink, frames) = RecordingSink::new();
        let service = Arc::new(RefreshService::new(profile, Box::new(sink)));
        let server = SocketServer::bind(&socket).expect("Failed to bind socket");

        let (tx, rx) = oneshot::channel();
        let handle = tokio::spawn(server.run(service, async {
            let _ = rx.await;
        }));

        Self {
            dir,
            socket,
            frames,
            shutdown: Some(tx),
            handle: Some(handle),
        }
    }

    /// Scratch directory for fixtures
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Open a connection, write the given lines and close it
    pub async fn send_lines(&self, lines: &[&str]) {
        let mut stream = UnixStream::connect(&self.socket)
            .await
            .expect("Failed to connect to daemon");
        for line in lines {
            stream.write_all(line.as_bytes()).await.unwrap();
            stream.write_all(b"\n").await.unwrap();
        }
        stream.shutdown().await.unwrap();
    }

    /// Stop the daemon and wait for it to finish
    pub async fn stop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle
                .await
                .expect("Daemon task panicked")
                .expect("Daemon returned an error");
        }
    }
}
