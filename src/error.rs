//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.
//! Every variant renders to the client as the same bad-request payload; the
//! variants exist so callers and tests can match on the failure kind.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Prompt cannot be empty.")]
    EmptyPrompt,

    #[error("{0}")]
    EmptyInput(String),

    #[error("Video file not found: {0}")]
    ResourceNotFound(String),

    #[error("Failed to process uploaded file: {0}")]
    FileProcessing(String),

    #[error("Failed to download or process video from URL: {0}")]
    UrlFetch(String),

    #[error("Invalid or non-video MIME type for URL: {0}")]
    InvalidMediaType(String),

    #[error("Base64 video data and MIME type cannot be empty.")]
    EmptyField,

    #[error("Invalid Base64 data provided.")]
    InvalidBase64(#[source] base64::DecodeError),

    #[error("The provided prompt is not related to video analysis.")]
    OffTopicPrompt,

    #[error("AI provider error: {0}")]
    Provider(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
