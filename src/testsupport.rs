//! Shared test fixtures for loader and pipeline test modules.
//!
//! Temp-dir and one-shot HTTP helpers live here so each test module does not
//! rebuild its own.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!(
            "themeport-{prefix}-{}-{millis}-{suffix}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Root directory path for this fixture.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Serve exactly one HTTP response on a loopback port.
///
/// Returns the URL to request. `status` is the status line tail, e.g.
/// `"200 OK"`.
pub async fn serve_once(status: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind loopback listener");
    let addr = listener.local_addr().expect("listener address");
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    tokio::spawn(async move {
        let Ok((mut stream, _)) = listener.accept().await else {
            return;
        };
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        // Drain request headers before answering.
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut chunk).await {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&chunk[..n]),
            }
        }
        let _ = stream.write_all(response.as_bytes()).await;
        let _ = stream.shutdown().await;
    });

    format!("http://{addr}/theme.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
        assert!(fixture.path().is_dir());
    }

    #[test]
    fn temp_dir_fixture_cleans_up_on_drop() {
        let path = {
            let fixture = TestTempDir::new("cleanup");
            fixture.write_text("a.json", "{}");
            fixture.path().to_path_buf()
        };
        assert!(!path.exists());
    }
}
