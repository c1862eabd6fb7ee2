//! Integration tests for the preview server.
//!
//! These tests require the `web` feature (enabled by default).

#![cfg(feature = "web")]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;
use tower::ServiceExt;

use folio::contact::parse_mail_link;
use folio::models::SiteContent;
use folio::render::PageOptions;
use folio::web::{create_router, AppState};

fn test_state() -> AppState {
    let content = SiteContent::builtin().expect("built-in content");
    let options = PageOptions {
        year: 2026,
        runtime_module: None,
        ..PageOptions::default()
    };
    AppState::from_content(content, &options)
}

async fn get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, body.to_vec())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_health_check() {
    let (status, json) = get_json(create_router(test_state()), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_index_serves_page() {
    let (status, headers, body) = get(create_router(test_state()), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let page = String::from_utf8(body).unwrap();
    assert!(page.contains("<title>Manya Jain | 3D Animator</title>"));
    assert!(page.contains("&copy; 2026 Manya Jain."));
}

#[tokio::test]
async fn test_contact_redirects_to_mail_link() {
    let app = create_router(test_state());
    let (status, headers, _) = get(
        app,
        "/contact?name=Ada&email=ada%40example.com&message=Hello%20there",
    )
    .await;

    assert_eq!(status, StatusCode::SEE_OTHER);
    let location = headers[header::LOCATION].to_str().unwrap();
    assert_eq!(
        location,
        "mailto:manyaj.work@gmail.com?subject=Contact%20from%20Ada%20(ada@example.com)&body=Hello%20there"
    );
}

#[tokio::test]
async fn test_contact_with_missing_fields_still_redirects() {
    let app = create_router(test_state());
    let (status, headers, _) = get(app, "/contact?message=caf%C3%A9").await;

    assert_eq!(status, StatusCode::SEE_OTHER);
    let location = headers[header::LOCATION].to_str().unwrap();
    let (_, subject, body) = parse_mail_link(location).unwrap();
    assert_eq!(subject, "Contact from  ()");
    assert_eq!(body, "café");
}

#[tokio::test]
async fn test_api_content() {
    let (status, json) = get_json(create_router(test_state()), "/api/content").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["owner"]["name"], "Manya Jain");
    assert_eq!(json["hero"]["video_id"], "vMenI7pQ2-8");
}

#[tokio::test]
async fn test_api_sections_in_navigation_order() {
    let (status, json) = get_json(create_router(test_state()), "/api/sections").await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<&str> = json["sections"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        ["hero", "about", "services", "skills", "projects", "achievements", "contact"]
    );
    assert_eq!(json["sections"][0]["label"], "Home");
}

#[tokio::test]
async fn test_bundled_assets() {
    let app = create_router(test_state());
    let (status, headers, body) = get(app.clone(), "/assets/site.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "text/css");
    assert!(String::from_utf8(body).unwrap().contains(".js-ready"));

    let (status, _, _) = get(app, "/assets/missing.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_path_without_media_dir() {
    let (status, json) = get_json(create_router(test_state()), "/nothing-here.png").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Not found");
}

#[tokio::test]
async fn test_media_and_runtime_directories() {
    let temp_dir = TempDir::new().unwrap();
    let media = temp_dir.path().join("media");
    let pkg = temp_dir.path().join("pkg");
    fs::create_dir_all(media.join("images")).unwrap();
    fs::create_dir_all(&pkg).unwrap();
    fs::write(media.join("images/clip.gif"), b"GIF89a").unwrap();
    fs::write(pkg.join("folio.js"), "export default function init() {}").unwrap();

    let state = test_state().with_media_dir(&media).with_wasm_dir(&pkg);
    let app = create_router(state);

    let (status, _, body) = get(app.clone(), "/images/clip.gif").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"GIF89a");

    let (status, headers, _) = get(app.clone(), "/pkg/folio.js").await;
    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .contains("javascript"));

    // Routes still win over the media fallback
    let (status, _) = get_json(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
}
