//! REST API endpoints.
//!
//! Axum-based HTTP API serving match records, derived statistics,
//! dataset uploads and the static front-end.

pub mod routes;
pub mod state;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::storage::StorageError;
use state::AppState;

/// Largest accepted upload body.
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ReadOnly(_) => ApiError::BadRequest(err.to_string()),
            other => {
                tracing::error!("Storage failure: {}", other);
                ApiError::Internal(other.to_string())
            }
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// CORS policy for a configured origin; `*` allows any origin.
pub fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origin == "*" {
        return layer.allow_origin(Any);
    }

    match HeaderValue::from_str(origin) {
        Ok(value) => layer.allow_origin(value),
        Err(_) => {
            tracing::warn!("Invalid CORS origin {:?}, allowing any origin", origin);
            layer.allow_origin(Any)
        }
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.server.static_dir);
    let cors = cors_layer(&state.server.cors_origin);

    Router::new()
        .route("/", get(routes::assets::index))
        .route("/api/matches", get(routes::matches::list_matches))
        .route("/api/summary", get(routes::matches::summary))
        .route("/api/trends", get(routes::matches::trends))
        .route("/api/maps", get(routes::matches::maps))
        .route(
            "/api/upload",
            post(routes::upload::upload).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .fallback_service(assets)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
