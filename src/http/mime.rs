//! MIME type resolution module
//!
//! Resolves a Content-Type for a file path with an ordered lookup:
//! the override table wins, then the library guess, then a generic
//! binary type.

use std::path::Path;

/// Content type used when no extension-based guess is possible.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Resolve the Content-Type for a file path.
///
/// Browsers refuse to execute module scripts or apply stylesheets served
/// with a loose type, so `js`/`mjs`/`css` are pinned regardless of what
/// the platform database would say. Every other extension goes through
/// `mime_guess`.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use devserve::http::mime::content_type;
/// assert_eq!(content_type(Path::new("app.mjs")), "application/javascript");
/// assert_eq!(content_type(Path::new("image.png")), "image/png");
/// ```
pub fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("js" | "mjs") => "application/javascript",
        Some("css") => "text/css",
        _ => mime_guess::from_path(path)
            .first_raw()
            .unwrap_or(FALLBACK_CONTENT_TYPE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_table() {
        assert_eq!(content_type(Path::new("app.js")), "application/javascript");
        assert_eq!(
            content_type(Path::new("module.mjs")),
            "application/javascript"
        );
        assert_eq!(content_type(Path::new("style.css")), "text/css");
    }

    #[test]
    fn test_override_wins_inside_directories() {
        assert_eq!(
            content_type(Path::new("assets/js/bundle.js")),
            "application/javascript"
        );
    }

    #[test]
    fn test_library_guess() {
        assert_eq!(content_type(Path::new("index.html")), "text/html");
        assert_eq!(content_type(Path::new("photo.png")), "image/png");
        assert_eq!(content_type(Path::new("data.json")), "application/json");
    }

    #[test]
    fn test_unknown_extension_falls_back_to_binary() {
        assert_eq!(content_type(Path::new("blob.xyzzy")), FALLBACK_CONTENT_TYPE);
        assert_eq!(
            content_type(Path::new("no_extension")),
            FALLBACK_CONTENT_TYPE
        );
    }
}
