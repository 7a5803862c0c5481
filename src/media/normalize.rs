//! The four input-to-media conversions.
//!
//! All conversions abort the whole batch on the first failure; there is no
//! partial success.

use super::{Media, VideoMimeType};
use crate::models::{Base64Video, UploadedVideo};
use crate::{Error, Result};
use base64::Engine as _;
use std::path::Path;
use std::time::Duration;

/// Connect and read timeout applied to each URL probe.
pub const URL_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolve a bundled video by name under the configured video directory.
///
/// The MIME type is fixed to `video/mp4` regardless of the file's actual
/// container, matching the published contract for this channel.
pub fn from_local(video_dir: &Path, file_name: &str) -> Result<Media> {
    let path = video_dir.join(file_name);
    if !path.is_file() {
        return Err(Error::ResourceNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(&path)?;
    Ok(Media::from_bytes(VideoMimeType::Mp4.as_str(), bytes))
}

/// Convert uploaded files into media, skipping zero-length entries.
///
/// The declared content type is mapped through [`VideoMimeType`]; the bytes
/// themselves are never inspected.
pub fn from_uploads(videos: &[UploadedVideo]) -> Vec<Media> {
    videos
        .iter()
        .filter(|video| !video.bytes.is_empty())
        .map(|video| {
            let mime = VideoMimeType::from_content_type(video.content_type.as_deref());
            Media::from_bytes(mime.as_str(), video.bytes.clone())
        })
        .collect()
}

/// Probe each URL and build a lazy remote reference for it.
///
/// Only the response headers are consulted; the body is never downloaded here.
/// The URL is forwarded to the model provider, which fetches it itself.
pub async fn from_urls(client: &reqwest::Client, urls: &[String]) -> Result<Vec<Media>> {
    let mut media = Vec::with_capacity(urls.len());
    for url in urls {
        media.push(from_url(client, url).await?);
    }
    Ok(media)
}

async fn from_url(client: &reqwest::Client, url: &str) -> Result<Media> {
    tracing::info!("Probing video URL: {}", url);

    let response = client
        .get(url)
        .timeout(URL_FETCH_TIMEOUT)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!("URL probe failed for {}: {}", url, e);
            Error::UrlFetch(url.to_string())
        })?;

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string());

    match content_type {
        Some(content_type) if content_type.starts_with("video/") => {
            Ok(Media::from_url(content_type, url))
        }
        _ => Err(Error::InvalidMediaType(url.to_string())),
    }
}

/// Decode Base64 payloads into in-memory media.
///
/// The caller-declared MIME type is kept verbatim; unlike uploads it is not
/// normalized against the supported set.
pub fn from_base64(videos: &[Base64Video]) -> Result<Vec<Media>> {
    videos.iter().map(decode_base64_video).collect()
}

fn decode_base64_video(video: &Base64Video) -> Result<Media> {
    if video.mime_type.trim().is_empty() || video.data.trim().is_empty() {
        return Err(Error::EmptyField);
    }

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(video.data.as_bytes())
        .map_err(Error::InvalidBase64)?;

    Ok(Media::from_bytes(video.mime_type.clone(), bytes))
}
