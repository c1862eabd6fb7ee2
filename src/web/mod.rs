//! Local HTTP server for previewing the portfolio.
//!
//! # Endpoints
//!
//! - `GET /` - The rendered page
//! - `GET /health` - Health check
//! - `GET /contact` - No-script contact fallback, redirects to the mail link
//! - `GET /api/content` - Site content as JSON
//! - `GET /api/sections` - Tracked sections in navigation order
//! - `GET /assets/{*path}` - Bundled stylesheet and icons
//! - `/pkg/*` - Browser runtime, when a wasm directory is configured
//! - anything else - Media directory, when configured

pub mod static_files;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::branding::WASM_MODULE_PATH;
use crate::config::Config;
use crate::contact::ContactForm;
use crate::models::{Section, SiteContent};
use crate::render::{render_page, PageOptions};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the server.
///
/// The page is rendered once at startup; everything here is immutable.
#[derive(Clone)]
pub struct AppState {
    page: Arc<String>,
    content: Arc<SiteContent>,
    media_dir: Option<PathBuf>,
    wasm_dir: Option<PathBuf>,
}

impl AppState {
    /// Loads content and renders the page according to `config`.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let content = SiteContent::load_or_builtin(config.paths.content.as_deref())?;
        let options = PageOptions {
            reveal_threshold: config.viewport.reveal_threshold,
            runtime_module: config
                .paths
                .wasm_dir
                .as_ref()
                .map(|_| WASM_MODULE_PATH.to_string()),
            ..PageOptions::default()
        };

        let mut state = Self::from_content(content, &options);
        state.media_dir.clone_from(&config.paths.media_dir);
        state.wasm_dir.clone_from(&config.paths.wasm_dir);
        Ok(state)
    }

    /// Builds state from already loaded content, without file serving.
    #[must_use]
    pub fn from_content(content: SiteContent, options: &PageOptions) -> Self {
        let page = render_page(&content, options);
        Self {
            page: Arc::new(page),
            content: Arc::new(content),
            media_dir: None,
            wasm_dir: None,
        }
    }

    /// Serves files from `dir` for any path no route claims.
    #[must_use]
    pub fn with_media_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.media_dir = Some(dir.into());
        self
    }

    /// Serves the browser runtime from `dir` under `/pkg`.
    #[must_use]
    pub fn with_wasm_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.wasm_dir = Some(dir.into());
        self
    }

    /// The rendered page.
    #[must_use]
    pub fn page(&self) -> &str {
        &self.page
    }

    /// The site content.
    #[must_use]
    pub fn content(&self) -> &SiteContent {
        &self.content
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// One navigable section.
#[derive(Debug, Serialize)]
pub struct SectionInfo {
    /// Anchor id
    pub id: &'static str,
    /// Navigation label
    pub label: &'static str,
    /// Position in navigation order
    pub index: usize,
}

impl From<Section> for SectionInfo {
    fn from(section: Section) -> Self {
        Self {
            id: section.id(),
            label: section.nav_label(),
            index: section.index(),
        }
    }
}

/// Section list response.
#[derive(Debug, Serialize)]
pub struct SectionListResponse {
    /// Sections in navigation order
    pub sections: Vec<SectionInfo>,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET / - The portfolio page.
async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.page.as_str().to_owned())
}

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /contact - Redirects a submitted form to the composed mail link.
///
/// This is what the form does when the browser runtime is not loaded. Missing
/// fields are treated as empty.
async fn contact_redirect(
    State(state): State<AppState>,
    Query(form): Query<ContactForm>,
) -> Result<Response, (StatusCode, Json<ApiError>)> {
    let href = form.mail_link(&state.content.contact.email).href();
    debug!(%href, "contact form redirected");

    let location = HeaderValue::from_str(&href).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError::with_details(
                "Could not compose mail link",
                e.to_string(),
            )),
        )
    })?;

    Ok((StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response())
}

/// GET /api/content - Site content.
async fn get_content(State(state): State<AppState>) -> Json<SiteContent> {
    Json(state.content.as_ref().clone())
}

/// GET /api/sections - Tracked sections in navigation order.
async fn list_sections() -> Json<SectionListResponse> {
    Json(SectionListResponse {
        sections: Section::ALL.into_iter().map(SectionInfo::from).collect(),
    })
}

/// Fallback when no media directory is configured.
async fn not_found() -> (StatusCode, Json<ApiError>) {
    (StatusCode::NOT_FOUND, Json(ApiError::new("Not found")))
}

// ============================================================================
// Router
// ============================================================================

/// Creates the router for `state`.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/contact", get(contact_redirect))
        .route("/api/content", get(get_content))
        .route("/api/sections", get(list_sections))
        .route("/assets/{*path}", get(static_files::serve_asset));

    if let Some(wasm_dir) = &state.wasm_dir {
        router = router.nest_service("/pkg", ServeDir::new(wasm_dir));
    }

    router = match &state.media_dir {
        Some(media_dir) => router.fallback_service(ServeDir::new(media_dir)),
        None => router.fallback(not_found),
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Runs the server until the process is stopped.
///
/// # Errors
///
/// Returns an error if the content cannot be loaded or the address cannot be
/// bound.
pub async fn run_server(config: Config) -> anyhow::Result<()> {
    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .context(format!("Invalid bind address: {}", config.bind_address()))?;

    let state = AppState::new(&config)?;
    let app = create_router(state);

    info!("Serving portfolio on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context(format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
