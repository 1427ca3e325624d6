//! Shared test harness for integration tests.
//!
//! Provides [`MediaLayout`], a temporary directory tree shaped like a real
//! deployment (`<tmp>/parent/app` as the working dir, `<tmp>/parent` as the
//! local sibling root), and [`TestHarness`] which wires it into a full
//! [`AppContext`]. The [`TestHarness::with_server`] constructor starts Axum
//! on a random port for HTTP-level testing.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::Router;
use folio::config::Config;
use folio::server::{create_router, AppContext};
use http_body_util::BodyExt;
use tempfile::TempDir;

pub const MEDIA_PREFIX: &str = "/api/project-media";

/// Temporary on-disk layout with a sibling root and a working dir.
pub struct MediaLayout {
    _tmp: TempDir,
    pub base: PathBuf,
    pub sibling: PathBuf,
    pub app: PathBuf,
}

impl MediaLayout {
    pub fn new() -> Self {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let base = tmp.path().to_path_buf();
        let sibling = base.join("parent");
        let app = sibling.join("app");
        std::fs::create_dir_all(&app).expect("failed to create app dir");
        Self {
            _tmp: tmp,
            base,
            sibling,
            app,
        }
    }

    /// Write a file under the local sibling root.
    pub fn write_sibling(&self, rel: &str, data: &[u8]) -> PathBuf {
        write_file(&self.sibling.join(rel), data)
    }

    /// Write a file under the working dir.
    pub fn write_app(&self, rel: &str, data: &[u8]) -> PathBuf {
        write_file(&self.app.join(rel), data)
    }

    /// Write a file outside both relative roots, reachable only as an absolute path.
    pub fn write_outside(&self, rel: &str, data: &[u8]) -> PathBuf {
        write_file(&self.base.join("outside").join(rel), data)
    }

    /// Config anchored at this layout's working dir.
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.server.host = "127.0.0.1".to_string();
        config.media.working_dir = Some(self.app.clone());
        config
    }
}

fn write_file(path: &Path, data: &[u8]) -> PathBuf {
    std::fs::create_dir_all(path.parent().unwrap()).expect("failed to create parent dir");
    std::fs::write(path, data).expect("failed to write fixture");
    path.to_path_buf()
}

/// Deterministic byte pattern so slices can be checked by position.
pub fn patterned(len: usize) -> Vec<u8> {
    (0..=255u8).cycle().take(len).collect()
}

/// URL path under the media prefix for an absolute filesystem path.
pub fn absolute_media_url(path: &Path) -> String {
    let rel = path.to_str().unwrap().trim_start_matches('/');
    format!("{MEDIA_PREFIX}/{rel}")
}

/// Helper to get response body as bytes.
pub async fn body_bytes(body: Body) -> Vec<u8> {
    body.collect().await.unwrap().to_bytes().to_vec()
}

/// Test harness wrapping a fully-constructed [`AppContext`].
pub struct TestHarness {
    pub ctx: AppContext,
    pub layout: MediaLayout,
}

impl TestHarness {
    /// Create a new harness with default configuration over a fresh layout.
    pub fn new() -> Self {
        let layout = MediaLayout::new();
        let config = layout.config();
        Self::with_config(layout, config)
    }

    /// Create a harness with a custom configuration over an existing layout.
    pub fn with_config(layout: MediaLayout, config: Config) -> Self {
        let ctx = AppContext::from_config(config).expect("failed to build context");
        Self { ctx, layout }
    }

    pub fn router(&self) -> Router {
        create_router(self.ctx.clone(), None)
    }

    /// Start an Axum server on a random port and return the harness together
    /// with the bound socket address.
    pub async fn with_server() -> (Self, SocketAddr) {
        let harness = Self::new();
        let app = harness.router();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind random port");
        let addr = listener.local_addr().expect("failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        (harness, addr)
    }
}
