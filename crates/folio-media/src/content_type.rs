//! Extension to MIME type mapping.

use std::path::Path;

/// Fallback MIME type for extensions outside the table.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Video MIME types that honor `Range` requests.
const VIDEO_CONTENT_TYPES: &[&str] = &["video/mp4", "video/webm", "video/quicktime"];

/// Map a file extension (without the dot, any case) to its MIME type.
///
/// # Examples
///
/// ```
/// use folio_media::content_type_for_extension;
///
/// assert_eq!(content_type_for_extension("PNG"), "image/png");
/// assert_eq!(content_type_for_extension("mov"), "video/quicktime");
/// assert_eq!(content_type_for_extension("bin"), "application/octet-stream");
/// ```
pub fn content_type_for_extension(ext: &str) -> &'static str {
    match ext.to_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        _ => OCTET_STREAM,
    }
}

/// Lower-cased extension of `path`, or an empty string when it has none.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default()
}

/// MIME type for a path, derived from its extension.
pub fn content_type_for_path(path: &Path) -> &'static str {
    content_type_for_extension(&extension_of(path))
}

/// Whether a MIME type is one of the scrubbable video types.
pub fn is_video_content_type(content_type: &str) -> bool {
    VIDEO_CONTENT_TYPES.contains(&content_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_types() {
        assert_eq!(content_type_for_extension("jpg"), "image/jpeg");
        assert_eq!(content_type_for_extension("jpeg"), "image/jpeg");
        assert_eq!(content_type_for_extension("png"), "image/png");
        assert_eq!(content_type_for_extension("gif"), "image/gif");
        assert_eq!(content_type_for_extension("webp"), "image/webp");
    }

    #[test]
    fn test_video_types() {
        assert_eq!(content_type_for_extension("mp4"), "video/mp4");
        assert_eq!(content_type_for_extension("webm"), "video/webm");
        assert_eq!(content_type_for_extension("mov"), "video/quicktime");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(content_type_for_extension("JPG"), "image/jpeg");
        assert_eq!(content_type_for_extension("Mp4"), "video/mp4");
    }

    #[test]
    fn test_unknown_falls_back_to_octet_stream() {
        assert_eq!(content_type_for_extension("bin"), OCTET_STREAM);
        assert_eq!(content_type_for_extension("mkv"), OCTET_STREAM);
        assert_eq!(content_type_for_extension(""), OCTET_STREAM);
    }

    #[test]
    fn test_content_type_for_path() {
        assert_eq!(content_type_for_path(Path::new("a/b/Shot 1.PNG")), "image/png");
        assert_eq!(content_type_for_path(Path::new("README")), OCTET_STREAM);
        assert_eq!(content_type_for_path(Path::new("clip.tar.webm")), "video/webm");
    }

    #[test]
    fn test_is_video_content_type() {
        assert!(is_video_content_type("video/mp4"));
        assert!(is_video_content_type("video/quicktime"));
        assert!(!is_video_content_type("image/png"));
        assert!(!is_video_content_type(OCTET_STREAM));
    }
}
