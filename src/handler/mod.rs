//! Request handling module
//!
//! Entry point for HTTP request processing: method gating, path decoding,
//! dispatch to the static file server, and the response-header policy.

pub mod static_files;

use crate::config::ServerState;
use crate::error::ServeError;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, ACCESS_CONTROL_ALLOW_ORIGIN};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling.
///
/// Every response leaves through this function, which injects the
/// permissive CORS header last; no response path can bypass it.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<ServerState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let raw_path = req.uri().path().to_owned();

    let mut response = respond(&method, &raw_path, &state).await;

    response
        .headers_mut()
        .insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));

    if state.access_log {
        logger::log_access(&method, &raw_path, response.status().as_u16());
    }

    Ok(response)
}

/// Translate one request into one response. Per-request errors are
/// converted to status responses here; none propagate further.
async fn respond(method: &Method, raw_path: &str, state: &ServerState) -> Response<Full<Bytes>> {
    if !matches!(*method, Method::GET | Method::HEAD) {
        return http::build_501_response();
    }
    let is_head = *method == Method::HEAD;

    let Some(path) = decode_path(raw_path) else {
        return http::build_400_response(is_head);
    };

    match static_files::serve(state, &path, is_head).await {
        Ok(response) => response,
        Err(err) => {
            if let ServeError::Internal(io_err) = &err {
                logger::log_error(&format!("Failed to serve '{path}': {io_err}"));
            }
            http::build_error_response(&err, is_head)
        }
    }
}

/// Percent-decode a request path.
///
/// Returns `None` for truncated or non-hex escapes, non-UTF-8 results,
/// and embedded NUL bytes; the caller answers 400. `+` is left alone,
/// it only means space in query strings.
fn decode_path(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes.get(i + 1..i + 3)?;
            let hi = char::from(hex[0]).to_digit(16)?;
            let lo = char::from(hex[1]).to_digit(16)?;
            out.push(u8::try_from(hi * 16 + lo).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }

    let decoded = String::from_utf8(out).ok()?;
    if decoded.contains('\0') {
        return None;
    }
    Some(decoded)
}
