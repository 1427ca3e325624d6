//! First-match resolution of a logical path across candidate roots.

use std::path::{Path, PathBuf};

use crate::content_type::{content_type_for_extension, extension_of, is_video_content_type};
use crate::error::{Error, Result};
use crate::request::MediaRequest;
use crate::roots::{MediaRoots, RootKind};

/// A located media file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    pub path: PathBuf,
    pub size: u64,
    /// Lower-cased extension without the dot.
    pub extension: String,
    pub content_type: &'static str,
    /// Root the file was found under.
    pub root: RootKind,
}

impl ResolvedFile {
    /// Whether `Range` requests are honored for this file.
    pub fn accepts_ranges(&self) -> bool {
        is_video_content_type(self.content_type)
    }
}

/// Outcome of checking one candidate path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    pub root: RootKind,
    pub path: PathBuf,
    pub exists: bool,
}

/// Resolves media requests against an ordered root list.
#[derive(Debug, Clone)]
pub struct MediaResolver {
    roots: MediaRoots,
    confine_paths: bool,
}

impl MediaResolver {
    pub fn new(roots: MediaRoots) -> Self {
        Self {
            roots,
            confine_paths: true,
        }
    }

    /// Reject (`true`) or pass through (`false`) paths containing `..`.
    pub fn confine_paths(mut self, confine: bool) -> Self {
        self.confine_paths = confine;
        self
    }

    pub fn roots(&self) -> &MediaRoots {
        &self.roots
    }

    /// Locate the first root holding `request` as a regular file.
    pub async fn resolve(&self, request: &MediaRequest) -> Result<ResolvedFile> {
        let relative = self.checked_relative_path(request)?;

        tracing::debug!(
            requested = %request.logical_path(),
            working_dir = ?self.roots.working_dir(),
            roots = self.roots.len(),
            "Resolving media path"
        );

        for (root, path) in self.roots.candidates(&relative) {
            let found = probe_file(&path).await;
            tracing::debug!(root = %root, path = %path.display(), exists = found.is_some(), "Checked candidate");

            if let Some(size) = found {
                let extension = extension_of(&path);
                let content_type = content_type_for_extension(&extension);
                tracing::debug!(path = %path.display(), root = %root, size, "Resolved media file");
                return Ok(ResolvedFile {
                    path,
                    size,
                    extension,
                    content_type,
                    root,
                });
            }
        }

        tracing::debug!(requested = %request.logical_path(), "File not found under any root");
        Err(Error::not_found(request.logical_path()))
    }

    /// Check every candidate without stopping at the first hit.
    ///
    /// Used for diagnostics; serving goes through [`MediaResolver::resolve`].
    pub async fn probe_all(&self, request: &MediaRequest) -> Result<Vec<Probe>> {
        let relative = self.checked_relative_path(request)?;
        let mut probes = Vec::with_capacity(self.roots.len());

        for (root, path) in self.roots.candidates(&relative) {
            let exists = probe_file(&path).await.is_some();
            probes.push(Probe { root, path, exists });
        }

        Ok(probes)
    }

    fn checked_relative_path(&self, request: &MediaRequest) -> Result<PathBuf> {
        if request.is_empty() {
            return Err(Error::not_found("empty media path"));
        }
        if self.confine_paths && request.escapes_root() {
            tracing::warn!(requested = %request.logical_path(), "Rejected path escaping media roots");
            return Err(Error::not_found(request.logical_path()));
        }
        Ok(request.relative_path())
    }
}

/// Size of `path` if it is a regular file.
///
/// Any stat failure counts as absence so probing moves on to the next root.
async fn probe_file(path: &Path) -> Option<u64> {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() => Some(meta.len()),
        Ok(_) => None,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %e, "Candidate not accessible");
            }
            None
        }
    }
}
