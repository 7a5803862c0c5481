//! Request handlers for the four analysis endpoints.

use super::AppState;
use crate::models::{
    AnalysisResponse, Base64AnalysisRequest, LocalAnalysisRequest, UploadedVideo,
    UrlAnalysisRequest,
};
use crate::{Error, Result};
use axum::extract::{Multipart, State};
use axum::Json;
use std::sync::Arc;

/// Analyze a single video from the bundled video directory.
pub async fn analyze_from_local(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LocalAnalysisRequest>,
) -> Result<Json<AnalysisResponse>> {
    let response = state
        .service
        .analyze_local(&request.file_name, &request.prompt)
        .await?;
    Ok(Json(response))
}

/// Analyze one or more uploaded videos (multipart/form-data).
///
/// Fields: repeated `videoFiles` file parts plus a `prompt` text part; unknown
/// fields are ignored.
pub async fn analyze_from_files(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResponse>> {
    let mut videos: Vec<UploadedVideo> = Vec::new();
    let mut prompt = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::FileProcessing(e.to_string()))?
    {
        let field_name = field.name().map(|name| name.to_string());
        match field_name.as_deref() {
            Some("videoFiles") => {
                let file_name = field
                    .file_name()
                    .unwrap_or("unnamed")
                    .to_string();
                let content_type = field.content_type().map(|value| value.to_string());
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| Error::FileProcessing(file_name.clone()))?;
                videos.push(UploadedVideo {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            Some("prompt") => {
                prompt = field
                    .text()
                    .await
                    .map_err(|e| Error::FileProcessing(e.to_string()))?;
            }
            _ => {} // ignore unknown fields
        }
    }

    let response = state.service.analyze_uploads(videos, &prompt).await?;
    Ok(Json(response))
}

/// Analyze one or more videos referenced by URL.
pub async fn analyze_from_urls(
    State(state): State<Arc<AppState>>,
    Json(request): Json<UrlAnalysisRequest>,
) -> Result<Json<AnalysisResponse>> {
    let response = state
        .service
        .analyze_urls(&request.video_urls, &request.prompt)
        .await?;
    Ok(Json(response))
}

/// Analyze one or more Base64-encoded videos.
pub async fn analyze_from_base64(
    State(state): State<Arc<AppState>>,
    Json(request): Json<Base64AnalysisRequest>,
) -> Result<Json<AnalysisResponse>> {
    let response = state
        .service
        .analyze_base64(&request.base64_video_list, &request.prompt)
        .await?;
    Ok(Json(response))
}
