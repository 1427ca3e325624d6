//! Candidate roots tried, in order, when locating a media file.

use std::fmt;
use std::path::{Path, PathBuf};

/// Deployment layout a root stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum RootKind {
    /// One level above the working directory (media checked out next to the app).
    LocalSibling,
    /// The working directory itself (co-located or volume-mounted media).
    WorkingDir,
    /// The filesystem root, treating the logical path as absolute.
    Absolute,
}

impl RootKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RootKind::LocalSibling => "local_sibling",
            RootKind::WorkingDir => "working_dir",
            RootKind::Absolute => "absolute",
        }
    }
}

impl fmt::Display for RootKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A base directory paired with the layout it represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRoot {
    pub kind: RootKind,
    pub base: PathBuf,
}

impl CandidateRoot {
    pub fn new(kind: RootKind, base: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            base: base.into(),
        }
    }

    /// Physical path for a relative logical path under this root.
    pub fn candidate(&self, relative: &Path) -> PathBuf {
        self.base.join(relative)
    }
}

/// Ordered list of candidate roots; earlier entries win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRoots {
    roots: Vec<CandidateRoot>,
    /// Directory the default order was anchored at, if any.
    working_dir: Option<PathBuf>,
}

impl MediaRoots {
    /// Explicit root list, kept in the given order.
    pub fn new(roots: Vec<CandidateRoot>) -> Self {
        Self {
            roots,
            working_dir: None,
        }
    }

    /// Default order anchored at `working_dir`: sibling, working dir, then `/`.
    pub fn from_working_dir(working_dir: impl AsRef<Path>) -> Self {
        let working_dir = working_dir.as_ref();
        Self {
            roots: vec![
                CandidateRoot::new(RootKind::LocalSibling, working_dir.join("..")),
                CandidateRoot::new(RootKind::WorkingDir, working_dir),
                CandidateRoot::new(RootKind::Absolute, filesystem_root()),
            ],
            working_dir: Some(working_dir.to_path_buf()),
        }
    }

    /// Default order anchored at the process working directory.
    pub fn from_current_dir() -> std::io::Result<Self> {
        Ok(Self::from_working_dir(std::env::current_dir()?))
    }

    /// Anchor directory, or `None` for an explicit root list.
    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CandidateRoot> {
        self.roots.iter()
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// All candidate paths for `relative`, in priority order.
    pub fn candidates(&self, relative: &Path) -> Vec<(RootKind, PathBuf)> {
        self.roots
            .iter()
            .map(|root| (root.kind, root.candidate(relative)))
            .collect()
    }
}

fn filesystem_root() -> PathBuf {
    PathBuf::from(std::path::MAIN_SEPARATOR_STR)
}
