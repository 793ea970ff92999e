//! Embedded front-end assets.

use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use rust_embed::RustEmbed;
use tracing::debug;

/// Landing page inside the static mount.
pub const INDEX_PATH: &str = "/static/index.html";

#[derive(RustEmbed)]
#[folder = "src/static/"]
struct StaticAssets;

/// GET / redirects to the UI.
pub async fn root() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

/// Serve an embedded file.
///
/// GET /static/{*path}
pub async fn serve_static(Path(path): Path<String>) -> Response {
    let path = path.trim_start_matches('/');
    match StaticAssets::get(path) {
        Some(content) => (
            [(header::CONTENT_TYPE, content_type_for(path))],
            content.data.into_owned(),
        )
            .into_response(),
        None => {
            debug!("Static asset not found: {}", path);
            (StatusCode::NOT_FOUND, "Not Found").into_response()
        }
    }
}

fn content_type_for(path: &str) -> &'static str {
    match path.rsplit('.').next() {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}
