use folio_media::{CandidateRoot, MediaRoots, RootKind};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub media: MediaConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Built front-end to serve for any route the API does not handle
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediaConfig {
    /// URL prefix the media route is mounted under
    #[serde(default = "default_route_prefix")]
    pub route_prefix: String,

    /// `max-age` for the `Cache-Control` header, in seconds
    #[serde(default = "default_cache_max_age")]
    pub cache_max_age: u64,

    /// Reject paths containing `..` instead of handing them to the filesystem
    #[serde(default = "default_confine_paths")]
    pub confine_paths: bool,

    /// Directory anchoring the sibling and working-dir roots (default: process cwd)
    #[serde(default)]
    pub working_dir: Option<PathBuf>,

    /// Explicit root list replacing the default sibling/working-dir/absolute order
    #[serde(default)]
    pub roots: Option<Vec<RootEntry>>,
}

fn default_route_prefix() -> String {
    "/api/project-media".to_string()
}
fn default_cache_max_age() -> u64 {
    31_536_000
}
fn default_confine_paths() -> bool {
    true
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            route_prefix: default_route_prefix(),
            cache_max_age: default_cache_max_age(),
            confine_paths: default_confine_paths(),
            working_dir: None,
            roots: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RootEntry {
    pub kind: RootKind,
    pub path: PathBuf,
}

impl MediaConfig {
    /// Build the ordered root list this config describes.
    pub fn media_roots(&self) -> std::io::Result<MediaRoots> {
        if let Some(entries) = &self.roots {
            let roots = entries
                .iter()
                .map(|e| {
                    let base = shellexpand::tilde(&e.path.to_string_lossy()).into_owned();
                    CandidateRoot::new(e.kind, base)
                })
                .collect();
            return Ok(MediaRoots::new(roots));
        }

        match &self.working_dir {
            Some(dir) => Ok(MediaRoots::from_working_dir(dir)),
            None => MediaRoots::from_current_dir(),
        }
    }

    /// Value for the `Cache-Control` header on served media.
    pub fn cache_control(&self) -> String {
        format!("public, max-age={}", self.cache_max_age)
    }
}
