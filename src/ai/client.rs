use super::types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ChatMessageContent, MessagePart,
    VideoUrl,
};
use super::VisionService;
use crate::media::{Media, MediaContent};
use crate::{Error, Result};
use async_trait::async_trait;
use base64::Engine as _;
use reqwest::Client;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Vision client over the OpenAI-compatible chat-completions API.
///
/// Built once at startup and shared behind the service; holds no per-request
/// state beyond the connection pool.
pub struct OpenAiVisionClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiVisionClient {
    pub fn new(api_key: String, model: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model,
        }
    }

    /// Point the client at a different OpenAI-compatible endpoint.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to vision endpoint: {}", e);
                e
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::error!("Vision API error (status {}): {}", status, error_text);
            return Err(Error::Provider(format!(
                "API error (status {}): {}",
                status, error_text
            )));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse vision response: {}\nBody: {}", e, body);
            Error::Provider(format!("Failed to parse vision response: {}", e))
        })
    }

    fn media_part(media: &Media) -> MessagePart {
        let url = match &media.content {
            MediaContent::Url(url) => url.clone(),
            MediaContent::Bytes(bytes) => format!(
                "data:{};base64,{}",
                media.mime_type,
                base64::engine::general_purpose::STANDARD.encode(bytes)
            ),
        };

        MessagePart {
            part_type: "video_url".to_string(),
            text: None,
            video_url: Some(VideoUrl { url }),
        }
    }
}

#[async_trait]
impl VisionService for OpenAiVisionClient {
    async fn analyze(&self, system: &str, prompt: &str, media: &[Media]) -> Result<String> {
        tracing::debug!("Sending analysis request with {} media item(s)", media.len());

        let mut parts = vec![MessagePart {
            part_type: "text".to_string(),
            text: Some(prompt.to_string()),
            video_url: None,
        }];
        parts.extend(media.iter().map(Self::media_part));

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: Some(ChatMessageContent::Text(system.to_string())),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: Some(ChatMessageContent::Parts(parts)),
                },
            ],
        };

        let response = self.chat_completion(&request).await?;

        response
            .choices
            .first()
            .and_then(|choice| match &choice.message.content {
                Some(ChatMessageContent::Text(text)) => Some(text.clone()),
                _ => None,
            })
            .ok_or_else(|| Error::Provider("No response from vision API".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn make_client(server: &MockServer) -> OpenAiVisionClient {
        OpenAiVisionClient::new(
            "test-key".to_string(),
            "gpt-4o".to_string(),
            Duration::from_secs(5),
        )
        .with_base_url(server.uri())
    }

    fn completion_body(text: &str) -> serde_json::Value {
        serde_json::json!({
            "choices": [{
                "message": { "role": "assistant", "content": text },
                "finish_reason": "stop"
            }]
        })
    }

    #[tokio::test]
    async fn test_analyze_parses_text_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("A short clip.")))
            .mount(&server)
            .await;

        let client = make_client(&server);
        let media = vec![Media::from_bytes("video/mp4", vec![0u8])];

        let answer = client
            .analyze("system", "Describe this video", &media)
            .await
            .unwrap();
        assert_eq!(answer, "A short clip.");
    }

    #[tokio::test]
    async fn test_analyze_inlines_bytes_as_data_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_string_contains("data:video/mp4;base64,AAECAw=="))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server);
        let media = vec![Media::from_bytes("video/mp4", vec![0, 1, 2, 3])];

        client.analyze("system", "prompt", &media).await.unwrap();
    }

    #[tokio::test]
    async fn test_analyze_forwards_remote_url_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_string_contains("https://videos.example.com/clip.webm"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server);
        let media = vec![Media::from_url(
            "video/webm",
            "https://videos.example.com/clip.webm",
        )];

        client.analyze("system", "prompt", &media).await.unwrap();
    }

    #[tokio::test]
    async fn test_analyze_sends_configured_model() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_string_contains("\"model\":\"gpt-4o\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server);
        client.analyze("system", "prompt", &[]).await.unwrap();
    }

    #[tokio::test]
    async fn test_api_error_status_maps_to_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let client = make_client(&server);
        let err = client.analyze("system", "prompt", &[]).await.unwrap_err();
        assert!(matches!(err, Error::Provider(_)));
    }

    #[tokio::test]
    async fn test_empty_choices_maps_to_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })),
            )
            .mount(&server)
            .await;

        let client = make_client(&server);
        let err = client.analyze("system", "prompt", &[]).await.unwrap_err();
        assert!(matches!(err, Error::Provider(_)));
    }
}
