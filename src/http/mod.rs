//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from the
//! request handler's path resolution logic.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_400_response, build_404_response, build_501_response, build_error_response,
    build_file_response, build_html_response, build_redirect_response,
};
