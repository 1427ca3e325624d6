//! Project media serving with HTTP range support.
//!
//! `GET {prefix}/{*path}` resolves the logical path across the configured
//! candidate roots and streams the file back. `Range` requests are honored
//! for video types only; images always come back whole.

use axum::{
    body::Body,
    extract::{OriginalUri, State},
    http::{header, HeaderMap, StatusCode},
    response::Response,
    routing::get,
    Router,
};
use folio_media::{parse_range_header, ByteRange, MediaRequest, ResolvedFile};
use std::io::SeekFrom;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio_util::io::ReaderStream;

use super::error::AppError;
use super::AppContext;

const STREAM_CHUNK_SIZE: usize = 64 * 1024;

/// Create the media route mounted at `prefix`.
pub fn media_routes(prefix: &str) -> Router<AppContext> {
    Router::new().route(&format!("{prefix}/*path"), get(serve_media))
}

/// Serve a project media file, whole or as a byte range.
pub async fn serve_media(
    State(ctx): State<AppContext>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let prefix = ctx.config.media.route_prefix.as_str();
    let raw = uri
        .path()
        .strip_prefix(prefix)
        .ok_or_else(|| folio_media::Error::internal(format!("unexpected path {}", uri.path())))?;

    let request = MediaRequest::from_raw_path(raw)?;
    tracing::debug!(requested = %request.logical_path(), "Media request");

    let file = ctx.resolver.resolve(&request).await?;

    // Range is only meaningful for scrubbable video.
    let range = if file.accepts_ranges() {
        headers
            .get(header::RANGE)
            .and_then(|h| h.to_str().ok())
            .and_then(parse_range_header)
    } else {
        None
    };

    let cache_control = ctx.config.media.cache_control();

    match range {
        Some(spec) => {
            let range = spec.resolve(file.size)?;
            tracing::debug!(
                path = %file.path.display(),
                start = range.start,
                end = range.end,
                size = file.size,
                "Range request"
            );
            partial_response(&file, range, &cache_control).await
        }
        None => {
            tracing::debug!(
                path = %file.path.display(),
                content_type = file.content_type,
                size = file.size,
                "Serving full file"
            );
            full_response(&file, &cache_control).await
        }
    }
}

async fn partial_response(
    file: &ResolvedFile,
    range: ByteRange,
    cache_control: &str,
) -> Result<Response, AppError> {
    let mut handle = File::open(&file.path).await?;
    handle.seek(SeekFrom::Start(range.start)).await?;

    let stream = ReaderStream::with_capacity(handle.take(range.length()), STREAM_CHUNK_SIZE);

    let response = Response::builder()
        .status(StatusCode::PARTIAL_CONTENT)
        .header(header::CONTENT_TYPE, file.content_type)
        .header(header::CONTENT_LENGTH, range.length().to_string())
        .header(header::CONTENT_RANGE, range.content_range(file.size))
        .header(header::ACCEPT_RANGES, "bytes")
        .header(header::CACHE_CONTROL, cache_control)
        .body(Body::from_stream(stream))?;

    Ok(response)
}

async fn full_response(file: &ResolvedFile, cache_control: &str) -> Result<Response, AppError> {
    let handle = File::open(&file.path).await?;
    // Bound the body to the stat'ed size so it always matches Content-Length.
    let stream = ReaderStream::with_capacity(handle.take(file.size), STREAM_CHUNK_SIZE);

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, file.content_type)
        .header(header::CONTENT_LENGTH, file.size.to_string())
        .header(header::ACCEPT_RANGES, "bytes")
        .header(header::CACHE_CONTROL, cache_control)
        .body(Body::from_stream(stream))?;

    Ok(response)
}
