//! Error types for startup and per-request failures.

use hyper::StatusCode;
use std::net::SocketAddr;
use thiserror::Error;

/// Fatal startup error: the listening socket could not be created.
///
/// Never retried; the process reports the cause and exits.
#[derive(Error, Debug)]
#[error("failed to bind {addr}: {source}")]
pub struct BindError {
    pub addr: SocketAddr,
    #[source]
    pub source: std::io::Error,
}

/// Per-request failure, converted to an HTTP response at the handler
/// boundary. None of these propagate past the handler.
#[derive(Error, Debug)]
pub enum ServeError {
    #[error("not found")]
    NotFound,

    #[error("forbidden")]
    Forbidden,

    #[error("bad request")]
    BadRequest,

    #[error("i/o error: {0}")]
    Internal(std::io::Error),
}

impl ServeError {
    /// HTTP status this error maps to.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<std::io::Error> for ServeError {
    /// Classify filesystem errors: a missing file is an ordinary 404,
    /// a permission failure is 403, anything else is a 500.
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound,
            std::io::ErrorKind::PermissionDenied => Self::Forbidden,
            _ => Self::Internal(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_classification() {
        let not_found = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(ServeError::from(not_found).status(), StatusCode::NOT_FOUND);

        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        assert_eq!(ServeError::from(denied).status(), StatusCode::FORBIDDEN);

        let other = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe");
        assert_eq!(
            ServeError::from(other).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ServeError::BadRequest.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ServeError::Forbidden.status(), StatusCode::FORBIDDEN);
    }
}
