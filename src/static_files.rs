//! Static file serving.
//!
//! An external collaborator built on the handler contract: it resolves the
//! request path under a configured root directory, maps the file extension
//! to a content type, and answers 404 when the file cannot be read.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder};

/// Maps a request path's extension to a Content-Type value.
pub fn content_type(path: &str) -> &'static str {
    match Path::new(path).extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html",
        Some("css") => "text/css",
        Some("js") => "text/javascript",
        _ => "text/plain",
    }
}

/// Serves the file under `root` named by the request path.
pub fn serve(root: &Path, request: &Request) -> Response {
    let file_path = root.join(request.path.trim_start_matches('/'));

    match std::fs::read(&file_path) {
        Ok(contents) => ResponseBuilder::new(200, "OK")
            .protocol(echoed_protocol(request))
            .header("Content-Type", content_type(&request.path))
            .body(contents)
            .build(),
        Err(e) => {
            warn!("Can't open file {}: {}", file_path.display(), e);
            ResponseBuilder::new(404, "Not Found")
                .protocol(echoed_protocol(request))
                .build()
        }
    }
}

/// Returns a handler serving files from `root`, suitable for registration.
pub fn static_handler(root: PathBuf) -> impl Fn(&Request) -> Response + Send + Sync {
    move |request| serve(&root, request)
}

fn echoed_protocol(request: &Request) -> String {
    if request.protocol.is_empty() {
        "HTTP/1.1".to_string()
    } else {
        request.protocol.clone()
    }
}
