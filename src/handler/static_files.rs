//! Static file serving module
//!
//! Resolves request paths against the document root and serves files,
//! index pages, and generated directory listings.

use crate::config::ServerState;
use crate::error::ServeError;
use crate::http::{self, mime};
use crate::logger;
use chrono::{DateTime, Utc};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Serve a percent-decoded URL path from the document root.
///
/// Directories without a trailing slash redirect to the slashed form;
/// with the slash, the first existing index file wins, else a generated
/// listing. Regular files are served with the resolved content type.
pub async fn serve(
    state: &ServerState,
    path: &str,
    is_head: bool,
) -> Result<Response<Full<Bytes>>, ServeError> {
    let resolved = resolve_path(&state.root, path)?;
    let metadata = fs::metadata(&resolved).await?;

    if metadata.is_dir() {
        if !path.ends_with('/') {
            return Ok(http::build_redirect_response(&format!("{path}/"), is_head));
        }

        for index in &state.index_files {
            let candidate = resolved.join(index);
            if fs::metadata(&candidate)
                .await
                .map(|m| m.is_file())
                .unwrap_or(false)
            {
                return serve_regular_file(&candidate, is_head).await;
            }
        }

        let html = render_listing(&resolved, path).await?;
        return Ok(http::build_html_response(html, is_head));
    }

    serve_regular_file(&resolved, is_head).await
}

/// Resolve a URL path to a filesystem path inside `root`.
///
/// `root` must already be canonical. Upward-stepping components are
/// rejected before touching the filesystem; canonicalizing the candidate
/// afterwards keeps symlinked entries from escaping the root.
fn resolve_path(root: &Path, url_path: &str) -> Result<PathBuf, ServeError> {
    let relative = url_path.trim_start_matches('/');
    let mut candidate = root.to_path_buf();

    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => candidate.push(part),
            Component::CurDir => {}
            _ => {
                logger::log_warning(&format!("Path traversal attempt blocked: {url_path}"));
                return Err(ServeError::Forbidden);
            }
        }
    }

    let canonical = candidate.canonicalize().map_err(ServeError::from)?;
    if !canonical.starts_with(root) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            url_path,
            canonical.display()
        ));
        return Err(ServeError::Forbidden);
    }

    Ok(canonical)
}

/// Read a regular file and build its 200 response.
async fn serve_regular_file(
    path: &Path,
    is_head: bool,
) -> Result<Response<Full<Bytes>>, ServeError> {
    let metadata = fs::metadata(path).await?;
    let content = fs::read(path).await?;
    let content_type = mime::content_type(path);
    let last_modified = metadata.modified().ok().map(format_http_date);

    Ok(http::build_file_response(
        content,
        content_type,
        last_modified.as_deref(),
        is_head,
    ))
}

/// Generate the HTML listing for an index-less directory.
///
/// Entries are sorted directories-first, then by name, and emitted as
/// relative links (the URL path is guaranteed to end with a slash here).
async fn render_listing(dir: &Path, url_path: &str) -> Result<String, ServeError> {
    let mut reader = fs::read_dir(dir).await?;
    let mut entries: Vec<(String, bool)> = Vec::new();

    while let Some(entry) = reader.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry
            .file_type()
            .await
            .map(|t| t.is_dir())
            .unwrap_or(false);
        entries.push((name, is_dir));
    }

    entries.sort_by(|a, b| match (a.1, b.1) {
        (true, false) => std::cmp::Ordering::Less,
        (false, true) => std::cmp::Ordering::Greater,
        _ => a.0.cmp(&b.0),
    });

    let mut items = String::new();
    for (name, is_dir) in entries {
        let display = if is_dir {
            format!("{name}/")
        } else {
            name
        };
        items.push_str(&format!(
            "        <li><a href=\"{0}\">{0}</a></li>\n",
            escape_html(&display)
        ));
    }

    let title = format!("Index of {}", escape_html(url_path));
    Ok(format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
             <meta charset=\"utf-8\">\n\
             <title>{title}</title>\n\
         </head>\n\
         <body>\n\
             <h1>{title}</h1>\n\
             <hr>\n\
             <ul>\n\
         {items}\
             </ul>\n\
             <hr>\n\
         </body>\n\
         </html>\n"
    ))
}

/// Escape text for inclusion in HTML content and attribute values.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Format a filesystem timestamp as an HTTP-date.
fn format_http_date(time: std::time::SystemTime) -> String {
    DateTime::<Utc>::from(time)
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}
