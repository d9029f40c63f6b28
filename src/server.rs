//! Unix socket server.
//!
//! Clients write newline-terminated JSON refresh messages; each connection
//! is served by its own task and may send any number of lines. The daemon
//! never replies, outcomes are only logged. Lines longer than
//! [`MAX_LINE_BYTES`] are dropped without buffering them.

use anyhow::Context;
use std::future::Future;
use std::os::unix::fs::FileTypeExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::net::{UnixListener, UnixStream};

use crate::services::RefreshService;

/// Longest accepted message line in bytes, line terminator excluded.
pub const MAX_LINE_BYTES: usize = 64 * 1024;

/// A bound control socket
pub struct SocketServer {
    listener: UnixListener,
    path: PathBuf,
}

impl SocketServer {
    /// Bind the socket, replacing a stale socket file left by a previous run.
    ///
    /// Must be called inside a tokio runtime.
    pub fn bind(path: &Path) -> anyhow::Result<Self> {
        remove_stale_socket(path)?;
        let listener = UnixListener::bind(path)
            .with_context(|| format!("Failed to bind socket {}", path.display()))?;

        Ok(Self {
            listener,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Accept connections until `shutdown` completes, then remove the socket file.
    pub async fn run<F>(self, service: Arc<RefreshService>, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()>,
    {
        tracing::info!(socket = %self.path.display(), "Listening on socket");
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("Shutting down");
                    break;
                }
                accepted = self.listener.accept() => match accepted {
                    Ok((stream, _)) => {
                        tokio::spawn(handle_connection(stream, Arc::clone(&service)));
                    }
                    Err(e) => tracing::error!(%e, "Accept error"),
                },
            }
        }

        drop(self.listener);
        if let Err(e) = std::fs::remove_file(&self.path) {
            tracing::warn!(%e, socket = %self.path.display(), "Failed to remove socket file");
        }
        Ok(())
    }
}

async fn handle_connection(stream: UnixStream, service: Arc<RefreshService>) {
    tracing::debug!("Client connected");
    let mut reader = BufReader::new(stream);

    loop {
        match read_line(&mut reader, MAX_LINE_BYTES).await {
            Ok(LineRead::Line(line)) => {
                if line.trim().is_empty() {
                    continue;
                }
                if let Err(e) = service.handle_line(&line).await {
                    tracing::error!(%e, "Refresh failed");
                }
            }
            Ok(LineRead::TooLong) => {
                tracing::warn!(limit = MAX_LINE_BYTES, "Message too long, dropped");
            }
            Ok(LineRead::Eof) => {
                tracing::debug!("EOF");
                break;
            }
            Err(e) => {
                tracing::warn!(%e, "Read error");
                break;
            }
        }
    }
}

#[derive(Debug, PartialEq)]
enum LineRead {
    Line(String),
    TooLong,
    Eof,
}

/// Read one line of at most `limit` bytes.
///
/// An over-long line is consumed through its newline in `limit`-sized
/// chunks, so memory stays bounded however much the client sends.
async fn read_line<R>(reader: &mut R, limit: usize) -> std::io::Result<LineRead>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    let read = (&mut *reader)
        .take(limit as u64 + 1)
        .read_until(b'\n', &mut buf)
        .await?;
    if read == 0 {
        return Ok(LineRead::Eof);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    } else if buf.len() > limit {
        loop {
            buf.clear();
            let read = (&mut *reader)
                .take(limit as u64)
                .read_until(b'\n', &mut buf)
                .await?;
            if read == 0 || buf.last() == Some(&b'\n') {
                return Ok(LineRead::TooLong);
            }
        }
    }

    Ok(LineRead::Line(String::from_utf8_lossy(&buf).into_owned()))
}

/// Remove a leftover socket file. Anything else at the path is an error.
fn remove_stale_socket(path: &Path) -> anyhow::Result<()> {
    match std::fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_socket() => {
            tracing::debug!(socket = %path.display(), "Removing stale socket");
            std::fs::remove_file(path)
                .with_context(|| format!("Failed to remove stale socket {}", path.display()))
        }
        Ok(_) => anyhow::bail!("{} exists and is not a socket", path.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("Failed to inspect {}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::LogSink;
    use panel_render::{ColorMode, DisplayProfile};

    fn service() -> Arc<RefreshService> {
        let profile = DisplayProfile::new(8, 8, ColorMode::Mono1bpp).unwrap();
        Arc::new(RefreshService::new(profile, Box::new(LogSink)))
    }

    async fn read_all(mut input: &[u8], limit: usize) -> Vec<LineRead> {
        let mut out = Vec::new();
        loop {
            match read_line(&mut input, limit).await.unwrap() {
                LineRead::Eof => return out,
                read => out.push(read),
            }
        }
    }

    fn line(s: &str) -> LineRead {
        LineRead::Line(s.to_string())
    }

    #[tokio::test]
    async fn test_read_line_splits_lines() {
        let reads = read_all(b"one\ntwo\r\n\nlast", 8).await;
        assert_eq!(reads, vec![line("one"), line("two"), line(""), line("last")]);
    }

    #[tokio::test]
    async fn test_read_line_at_limit_is_kept() {
        let reads = read_all(b"12345678\n12345678", 8).await;
        assert_eq!(reads, vec![line("12345678"), line("12345678")]);
    }

    #[tokio::test]
    async fn test_read_line_drops_long_line_and_continues() {
        let mut input = vec![b'x'; 50];
        input.extend_from_slice(b"\nnext\n");
        let reads = read_all(&input, 8).await;
        assert_eq!(reads, vec![LineRead::TooLong, line("next")]);
    }

    #[tokio::test]
    async fn test_read_line_long_line_at_eof() {
        let reads = read_all(&[b'x'; 9], 8).await;
        assert_eq!(reads, vec![LineRead::TooLong]);
    }

    #[tokio::test]
    async fn test_read_line_replaces_invalid_utf8() {
        let reads = read_all(b"a\xFFb\n", 8).await;
        assert_eq!(reads, vec![line("a\u{FFFD}b")]);
    }

    #[tokio::test]
    async fn test_bind_replaces_stale_socket() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("airpanel.sock");

        let first = std::os::unix::net::UnixListener::bind(&path).unwrap();
        drop(first);
        assert!(path.exists());

        let server = SocketServer::bind(&path).unwrap();
        assert_eq!(server.path(), path.as_path());
    }

    #[tokio::test]
    async fn test_bind_refuses_regular_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-a-socket");
        std::fs::write(&path, b"data").unwrap();

        let err = SocketServer::bind(&path).err().unwrap();
        assert!(err.to_string().contains("is not a socket"));
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_run_removes_socket_on_shutdown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("airpanel.sock");

        let server = SocketServer::bind(&path).unwrap();
        assert!(path.exists());

        server.run(service(), async {}).await.unwrap();
        assert!(!path.exists());
    }
}
