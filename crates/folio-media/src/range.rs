//! HTTP `Range` header parsing.
//!
//! Parsing and satisfiability are separate steps: a header that does not
//! parse is ignored by callers (full response), while a header that parses
//! but falls outside the file is rejected with 416.

use crate::error::{Error, Result};

/// A single byte-range request as written by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSpec {
    /// `bytes=START-` or `bytes=START-END`.
    FromTo(u64, Option<u64>),
    /// `bytes=-LEN`, the last `LEN` bytes.
    Suffix(u64),
}

/// An inclusive byte range within a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    /// Number of bytes covered by the range.
    pub fn length(&self) -> u64 {
        self.end - self.start + 1
    }

    /// Value for the `Content-Range` response header.
    pub fn content_range(&self, total: u64) -> String {
        format!("bytes {}-{}/{}", self.start, self.end, total)
    }
}

/// Parse a `Range` header value.
///
/// Supports formats:
/// - bytes=0-499
/// - bytes=500-
/// - bytes=-500 (last 500 bytes)
///
/// Returns `None` for anything else, including multi-range requests.
pub fn parse_range_header(value: &str) -> Option<RangeSpec> {
    let spec = value.trim().strip_prefix("bytes=")?;
    if spec.contains(',') {
        return None;
    }

    let (start, end) = spec.split_once('-')?;
    let start = start.trim();
    let end = end.trim();

    match (start.is_empty(), end.is_empty()) {
        (true, false) => Some(RangeSpec::Suffix(end.parse().ok()?)),
        (false, true) => Some(RangeSpec::FromTo(start.parse().ok()?, None)),
        (false, false) => Some(RangeSpec::FromTo(
            start.parse().ok()?,
            Some(end.parse().ok()?),
        )),
        (true, true) => None,
    }
}

impl RangeSpec {
    /// Resolve against a file of `file_size` bytes.
    ///
    /// An end offset past EOF is clamped to the last byte.
    pub fn resolve(self, file_size: u64) -> Result<ByteRange> {
        let unsatisfiable = Error::RangeNotSatisfiable { size: file_size };
        if file_size == 0 {
            return Err(unsatisfiable);
        }
        let last = file_size - 1;

        match self {
            RangeSpec::Suffix(0) => Err(unsatisfiable),
            RangeSpec::Suffix(len) => Ok(ByteRange {
                start: file_size.saturating_sub(len),
                end: last,
            }),
            RangeSpec::FromTo(start, _) if start > last => Err(unsatisfiable),
            RangeSpec::FromTo(start, end) => {
                let end = end.unwrap_or(last).min(last);
                if start > end {
                    return Err(unsatisfiable);
                }
                Ok(ByteRange { start, end })
            }
        }
    }
}
