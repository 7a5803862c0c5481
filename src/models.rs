//! Data models and structures
//!
//! Defines the request and response bodies for the analysis endpoints and the
//! environment-driven configuration. JSON field names are camelCase to match
//! the published API contract.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Request body for analyzing a video bundled in the local video directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalAnalysisRequest {
    pub file_name: String,
    pub prompt: String,
}

/// Request body for analyzing one or more videos by URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlAnalysisRequest {
    pub video_urls: Vec<String>,
    pub prompt: String,
}

/// Request body for analyzing one or more Base64-encoded videos.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Base64AnalysisRequest {
    pub base64_video_list: Vec<Base64Video>,
    pub prompt: String,
}

/// A single video encoded as Base64, with its declared MIME type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Base64Video {
    pub mime_type: String,
    pub data: String,
}

/// One uploaded video pulled out of a multipart request.
#[derive(Debug, Clone)]
pub struct UploadedVideo {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Final text answer returned to the client. Error responses reuse this shape
/// with the error message in `response`, distinguished only by HTTP status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub response: String,
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub video_dir: PathBuf,
    pub host: String,
    pub port: u16,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        let timeout_secs = match std::env::var("AI_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|_| crate::Error::Config(format!("Invalid AI_TIMEOUT_SECS: {}", raw)))?,
            Err(_) => 30,
        };

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| crate::Error::Config(format!("Invalid PORT: {}", raw)))?,
            Err(_) => 8080,
        };

        Ok(Self {
            api_key: std::env::var("AI_API_KEY")
                .map_err(|_| crate::Error::Config("AI_API_KEY not set".to_string()))?,
            model: std::env::var("AI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            base_url: std::env::var("AI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com".to_string()),
            video_dir: PathBuf::from(
                std::env::var("VIDEO_DIR").unwrap_or_else(|_| "video".to_string()),
            ),
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_url_request_uses_camel_case_field_names() {
        let json = r#"{"videoUrls": ["https://example.com/a.mp4"], "prompt": "Describe"}"#;
        let request: UrlAnalysisRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.video_urls.len(), 1);
        assert_eq!(request.prompt, "Describe");
    }

    #[test]
    fn test_base64_request_round_trips() {
        let request = Base64AnalysisRequest {
            base64_video_list: vec![Base64Video {
                mime_type: "video/webm".to_string(),
                data: "AAAA".to_string(),
            }],
            prompt: "Summarize".to_string(),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"base64VideoList\""));
        assert!(json.contains("\"mimeType\":\"video/webm\""));

        let parsed: Base64AnalysisRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.base64_video_list[0].data, "AAAA");
    }

    #[test]
    fn test_local_request_parses_file_name() {
        let json = r#"{"fileName": "sample.mp4", "prompt": "Describe this video"}"#;
        let request: LocalAnalysisRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.file_name, "sample.mp4");
    }

    #[test]
    fn test_analysis_response_serializes_response_field() {
        let response = AnalysisResponse {
            response: "A short clip.".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"response":"A short clip."}"#);
    }
}
