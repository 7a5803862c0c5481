//! Normalization of heterogeneous video inputs into a single media shape.
//!
//! Each of the four input channels (local directory, multipart upload, remote
//! URL, inline Base64) converts into a [`Media`] value that the dispatcher can
//! attach to a model request without caring where it came from.

pub mod mime;
pub mod normalize;

pub use mime::VideoMimeType;
pub use normalize::{from_base64, from_local, from_uploads, from_urls};

/// One unit of video content ready to attach to a model request.
#[derive(Debug, Clone, PartialEq)]
pub struct Media {
    pub mime_type: String,
    pub content: MediaContent,
}

/// Video payload: bytes held in memory, or a remote reference the provider
/// fetches itself.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaContent {
    Bytes(Vec<u8>),
    Url(String),
}

impl Media {
    pub fn from_bytes(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            content: MediaContent::Bytes(bytes),
        }
    }

    pub fn from_url(mime_type: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            content: MediaContent::Url(url.into()),
        }
    }
}
