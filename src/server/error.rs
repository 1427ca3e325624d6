//! Error-to-HTTP response conversion.
//!
//! Implements `IntoResponse` for [`folio_media::Error`] so that route
//! handlers can return `Result<T, AppError>` directly. Bodies are plain
//! text; not-found responses never say which roots were probed.
//! Decoding and I/O failures carry their detail in the body.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

/// Wrapper so we can implement `IntoResponse` for an external type.
#[derive(Debug)]
pub struct AppError {
    inner: folio_media::Error,
}

impl AppError {
    pub fn new(inner: folio_media::Error) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &folio_media::Error {
        &self.inner
    }
}

impl From<folio_media::Error> for AppError {
    fn from(e: folio_media::Error) -> Self {
        Self::new(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        Self::new(folio_media::Error::Io(e))
    }
}

impl From<axum::http::Error> for AppError {
    fn from(e: axum::http::Error) -> Self {
        Self::new(folio_media::Error::internal(e.to_string()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.inner.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(
                status = %status,
                error = %self.inner,
                "Error serving media"
            );
        } else {
            tracing::debug!(status = %status, error = %self.inner, "Media request rejected");
        }

        match self.inner {
            folio_media::Error::NotFound(_) => (status, "File not found").into_response(),
            folio_media::Error::RangeNotSatisfiable { size } => (
                status,
                [(header::CONTENT_RANGE, format!("bytes */{size}"))],
            )
                .into_response(),
            err @ (folio_media::Error::InvalidPath(_)
            | folio_media::Error::Io(_)
            | folio_media::Error::Internal(_)) => {
                (status, format!("Error serving file: {err}")).into_response()
            }
        }
    }
}
