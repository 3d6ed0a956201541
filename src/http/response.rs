//! HTTP response building module
//!
//! Provides builders for the response shapes the server emits, decoupled
//! from path resolution and filesystem access. The permissive CORS header
//! is NOT added here; the request handler injects it at a single choke
//! point so no response path can bypass it.

use crate::error::ServeError;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

/// Build 200 OK response for a regular file.
///
/// `last_modified` is a preformatted HTTP-date from the file's mtime.
pub fn build_file_response(
    content: Vec<u8>,
    content_type: &str,
    last_modified: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    let mut builder = Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length);

    if let Some(mtime) = last_modified {
        builder = builder.header("Last-Modified", mtime);
    }

    builder.body(Full::new(body)).unwrap_or_else(|e| {
        log_build_error("200", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build generic HTML response (directory listings)
pub fn build_html_response(content: String, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    Response::builder()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("HTML", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 301 redirect response (directory URL missing its trailing slash)
pub fn build_redirect_response(location: &str, is_head: bool) -> Response<Full<Bytes>> {
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from("Redirecting...")
    };

    Response::builder()
        .status(301)
        .header("Location", location)
        .header("Content-Type", "text/plain")
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("301", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 400 Bad Request response
pub fn build_400_response(is_head: bool) -> Response<Full<Bytes>> {
    build_plain_status(StatusCode::BAD_REQUEST, "400 Bad Request", is_head)
}

/// Build 403 Forbidden response
pub fn build_403_response(is_head: bool) -> Response<Full<Bytes>> {
    build_plain_status(StatusCode::FORBIDDEN, "403 Forbidden", is_head)
}

/// Build 404 Not Found response
pub fn build_404_response(is_head: bool) -> Response<Full<Bytes>> {
    build_plain_status(StatusCode::NOT_FOUND, "404 Not Found", is_head)
}

/// Build 500 Internal Server Error response
pub fn build_500_response(is_head: bool) -> Response<Full<Bytes>> {
    build_plain_status(
        StatusCode::INTERNAL_SERVER_ERROR,
        "500 Internal Server Error",
        is_head,
    )
}

/// Build 501 Not Implemented response (any method other than GET/HEAD)
pub fn build_501_response() -> Response<Full<Bytes>> {
    build_plain_status(StatusCode::NOT_IMPLEMENTED, "501 Not Implemented", false)
}

/// Convert a per-request error into its HTTP response.
pub fn build_error_response(err: &ServeError, is_head: bool) -> Response<Full<Bytes>> {
    match err.status() {
        StatusCode::NOT_FOUND => build_404_response(is_head),
        StatusCode::FORBIDDEN => build_403_response(is_head),
        StatusCode::BAD_REQUEST => build_400_response(is_head),
        _ => build_500_response(is_head),
    }
}

/// Plain-text status response shared by the error builders.
fn build_plain_status(
    status: StatusCode,
    message: &'static str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(message)
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain")
        .header("Content-Length", message.len())
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_response_headers() {
        let resp = build_file_response(
            b"body".to_vec(),
            "text/css",
            Some("Mon, 01 Jan 2024 00:00:00 GMT"),
            false,
        );
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/css");
        assert_eq!(resp.headers()["Content-Length"], "4");
        assert_eq!(
            resp.headers()["Last-Modified"],
            "Mon, 01 Jan 2024 00:00:00 GMT"
        );
    }

    #[test]
    fn test_redirect_has_location() {
        let resp = build_redirect_response("/assets/", false);
        assert_eq!(resp.status(), 301);
        assert_eq!(resp.headers()["Location"], "/assets/");
    }

    #[test]
    fn test_error_response_mapping() {
        assert_eq!(
            build_error_response(&ServeError::NotFound, false).status(),
            404
        );
        assert_eq!(
            build_error_response(&ServeError::Forbidden, false).status(),
            403
        );
        assert_eq!(
            build_error_response(&ServeError::BadRequest, false).status(),
            400
        );
        let io = std::io::Error::other("disk");
        assert_eq!(
            build_error_response(&ServeError::Internal(io), false).status(),
            500
        );
    }

    #[test]
    fn test_head_keeps_content_length() {
        let resp = build_file_response(b"12345".to_vec(), "text/plain", None, true);
        assert_eq!(resp.headers()["Content-Length"], "5");
    }
}
