//! Logical media paths built from URL segments.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// A request for a file under some project media directory.
///
/// Segments are stored decoded. The logical path is the segments joined
/// with `/`, so a segment holding an encoded slash (`%2F`) contributes an
/// extra path level, just as it would in the joined string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRequest {
    segments: Vec<String>,
}

impl MediaRequest {
    /// Build a request from already-decoded segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a request from raw, percent-encoded segments.
    ///
    /// Each segment is decoded on its own before joining. Empty segments
    /// (from doubled or trailing slashes) are dropped. A `%` not followed by
    /// two hex digits is an error, as is a decoded segment that is not UTF-8.
    pub fn from_encoded<'a, I>(segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let segments = segments
            .into_iter()
            .filter(|s| !s.is_empty())
            .map(|s| {
                check_escapes(s)?;
                urlencoding::decode(s)
                    .map(|decoded| decoded.into_owned())
                    .map_err(|e| Error::invalid_path(format!("{s}: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { segments })
    }

    /// Build a request from the raw remainder of a URL path, e.g.
    /// `My%20Project/images/shot%201.png`.
    pub fn from_raw_path(raw: &str) -> Result<Self> {
        Self::from_encoded(raw.split('/'))
    }

    /// Decoded segments in request order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Segments joined with `/`.
    pub fn logical_path(&self) -> String {
        self.segments.join("/")
    }

    /// Logical path as a relative filesystem path.
    ///
    /// Leading separators are stripped so that joining onto a root never
    /// replaces the root.
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(self.logical_path().trim_start_matches('/'))
    }

    /// Whether the path climbs out of its root via `..`.
    pub fn escapes_root(&self) -> bool {
        Path::new(&self.logical_path())
            .components()
            .any(|c| matches!(c, Component::ParentDir))
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Reject `%` sequences that are not followed by two hex digits.
fn check_escapes(segment: &str) -> Result<()> {
    let bytes = segment.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                return Err(Error::invalid_path(format!(
                    "{segment}: malformed percent-escape at byte {i}"
                )));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}
