//! HTTP surface: routing and error mapping.
//!
//! Every domain failure renders as `400 Bad Request` with the same
//! `{"response": message}` shape a successful analysis uses; only the status
//! code distinguishes the two.

pub mod handlers;

use crate::models::AnalysisResponse;
use crate::service::VideoAnalysisService;
use crate::Error;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use std::sync::Arc;

/// Upper bound on request bodies; covers multi-file upload batches.
const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

pub struct AppState {
    pub service: VideoAnalysisService,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/v1/video/analysis/from-local",
            post(handlers::analyze_from_local),
        )
        .route(
            "/api/v1/video/analysis/from-files",
            post(handlers::analyze_from_files),
        )
        .route(
            "/api/v1/video/analysis/from-urls",
            post(handlers::analyze_from_urls),
        )
        .route(
            "/api/v1/video/analysis/from-base64",
            post(handlers::analyze_from_base64),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!("Request failed: {}", self);
        let body = AnalysisResponse {
            response: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
