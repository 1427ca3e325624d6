//! Error taxonomy for media resolution and serving.
//!
//! Each variant maps to exactly one HTTP outcome; the mapping itself lives
//! in the server crate so this crate stays free of any web framework.

/// Errors produced while resolving or slicing a media file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No candidate root contains the requested file.
    ///
    /// The message is for server-side logs only and may name filesystem paths.
    #[error("File not found: {0}")]
    NotFound(String),

    /// A path segment holds a malformed escape or does not decode to UTF-8.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// The requested byte range lies outside the file.
    #[error("Range not satisfiable for file of {size} bytes")]
    RangeNotSatisfiable {
        /// Total size of the file, echoed back in `Content-Range: bytes */size`.
        size: u64,
    },

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new NotFound error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a new InvalidPath error.
    pub fn invalid_path<S: Into<String>>(msg: S) -> Self {
        Self::InvalidPath(msg.into())
    }

    /// Create a new Internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }

    /// HTTP status code this error should surface as.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::RangeNotSatisfiable { .. } => 416,
            Self::InvalidPath(_) | Self::Io(_) | Self::Internal(_) => 500,
        }
    }
}

/// Result type alias using the media Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::not_found("Projects/demo.mp4");
        assert_eq!(err.to_string(), "File not found: Projects/demo.mp4");

        let err = Error::RangeNotSatisfiable { size: 42 };
        assert_eq!(err.to_string(), "Range not satisfiable for file of 42 bytes");
    }

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(Error::not_found("x").http_status(), 404);
        assert_eq!(Error::invalid_path("x").http_status(), 500);
        assert_eq!(Error::RangeNotSatisfiable { size: 1 }.http_status(), 416);
        assert_eq!(Error::internal("x").http_status(), 500);

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(Error::from(io).http_status(), 500);
    }
}
