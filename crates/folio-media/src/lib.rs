//! Project media resolution for folio.
//!
//! A media request names a file by a logical, project-relative path. The
//! file may live in one of several places depending on how the site is
//! deployed, so [`MediaResolver`] probes an ordered list of
//! [`CandidateRoot`]s and serves the first hit. This crate covers the
//! framework-free half of that: decoding, resolution, content types, and
//! `Range` parsing.

pub mod content_type;
pub mod error;
pub mod range;
pub mod request;
pub mod resolve;
pub mod roots;

pub use content_type::{
    content_type_for_extension, content_type_for_path, is_video_content_type, OCTET_STREAM,
};
pub use error::{Error, Result};
pub use range::{parse_range_header, ByteRange, RangeSpec};
pub use request::MediaRequest;
pub use resolve::{MediaResolver, Probe, ResolvedFile};
pub use roots::{CandidateRoot, MediaRoots, RootKind};
