// Axum host for the profile page
//
// Serves the rendered page, the bound model as JSON, and a health check.
// The model is built once at startup and shared read-only across requests;
// every request renders it again.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::error::{ModelError, RenderError};
use crate::model::{create_model, PageModel};
use crate::mount::MountPoint;
use crate::render::HtmlRenderer;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub page: Arc<PageModel>,
    pub mount: MountPoint,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Result<Self, ModelError> {
        Self::with_model(create_model(), config.mount.clone())
    }

    /// State around an explicit model; the model must pass validation
    pub fn with_model(page: PageModel, mount: MountPoint) -> Result<Self, ModelError> {
        page.validate()?;
        tracing::info!(
            "Page model ready: {} sections, {} gallery images",
            page.sections().len(),
            page.gallery().len()
        );

        Ok(Self {
            page: Arc::new(page),
            mount,
        })
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(profile_page))
        .route("/api/page", get(page_model))
        .route("/health", get(health_check))
        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn profile_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let html = HtmlRenderer::render(&state.page, &state.mount)?;
    Ok(Html(html))
}

async fn page_model(State(state): State<AppState>) -> Json<PageModel> {
    tracing::debug!("Serving page model");
    Json(state.page.as_ref().clone())
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    Render(RenderError),
}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        AppError::Render(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Render(err) => {
                tracing::error!("Render failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_default_config() {
        let state = AppState::new(&ServerConfig::default()).unwrap();
        assert_eq!(*state.page, create_model());
        assert_eq!(state.mount.id(), "app");
    }

    #[test]
    fn test_state_rejects_blank_title() {
        let mut page = create_model();
        page.title = String::new();
        let result = AppState::with_model(page, MountPoint::default());
        assert!(matches!(result, Err(ModelError::EmptyField("title"))));
    }

    #[test]
    fn test_render_error_maps_to_500() {
        let err = AppError::from(RenderError::InvalidMountPoint("bad id".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
