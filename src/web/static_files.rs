//! Bundled stylesheet and icons, served from the binary.
//!
//! The `assets/` directory is embedded at compile time so the server needs
//! nothing on disk besides the optional media and runtime directories.

use axum::{
    body::Body,
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::Embed;

/// Files under `assets/`, served at `/assets/`.
#[derive(Embed)]
#[folder = "assets/"]
#[include = "*.css"]
#[include = "*.svg"]
#[include = "*.png"]
#[include = "*.ico"]
#[include = "*.woff2"]
pub struct BundledAssets;

/// Serves one bundled asset by its path below `/assets/`.
pub async fn serve_asset(Path(path): Path<String>) -> Response {
    let path = path.trim_start_matches('/');
    match BundledAssets::get(path) {
        Some(content) => file_response(path, content.data.as_ref()),
        None => (StatusCode::NOT_FOUND, "File not found").into_response(),
    }
}

/// Creates an HTTP response for a file with appropriate content type.
fn file_response(path: &str, content: &[u8]) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime.as_ref())
        .header(header::CACHE_CONTROL, cache_control_for_path(path))
        .body(Body::from(content.to_vec()))
        .unwrap_or_else(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create response",
            )
                .into_response()
        })
}

/// Cache policy for a bundled asset.
///
/// Stylesheets change with every release and are revalidated; icons and
/// fonts keep for a day.
fn cache_control_for_path(path: &str) -> &'static str {
    if std::path::Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("css"))
    {
        "no-cache"
    } else {
        "public, max-age=86400"
    }
}

/// Names of every embedded asset.
#[must_use]
pub fn embedded_assets() -> Vec<String> {
    BundledAssets::iter().map(|s| s.to_string()).collect()
}
