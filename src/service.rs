//! Core analysis flow: validate the request, normalize the input into media,
//! dispatch one multimodal call, and apply the off-topic guardrail.

use crate::ai::VisionService;
use crate::media::{self, Media};
use crate::models::{AnalysisResponse, Base64Video, UploadedVideo};
use crate::{prompts, Error, Result};
use std::path::PathBuf;
use tracing::info;

pub struct VideoAnalysisService {
    vision: Box<dyn VisionService>,
    http: reqwest::Client,
    video_dir: PathBuf,
}

impl VideoAnalysisService {
    pub fn new(vision: Box<dyn VisionService>, video_dir: PathBuf) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(media::normalize::URL_FETCH_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            vision,
            http,
            video_dir,
        }
    }

    /// Analyze a video bundled in the local video directory.
    pub async fn analyze_local(&self, file_name: &str, prompt: &str) -> Result<AnalysisResponse> {
        validate_prompt(prompt)?;

        if file_name.trim().is_empty() {
            return Err(Error::EmptyInput("File name cannot be empty.".to_string()));
        }

        let media = media::from_local(&self.video_dir, file_name)?;
        self.perform_analysis(prompt, vec![media]).await
    }

    /// Analyze one or more uploaded videos.
    pub async fn analyze_uploads(
        &self,
        videos: Vec<UploadedVideo>,
        prompt: &str,
    ) -> Result<AnalysisResponse> {
        validate_prompt(prompt)?;

        if videos.is_empty() || videos.iter().all(|video| video.bytes.is_empty()) {
            return Err(Error::EmptyInput(
                "Video files list cannot be empty.".to_string(),
            ));
        }

        let media = media::from_uploads(&videos);
        self.perform_analysis(prompt, media).await
    }

    /// Analyze one or more videos referenced by URL.
    pub async fn analyze_urls(&self, urls: &[String], prompt: &str) -> Result<AnalysisResponse> {
        validate_prompt(prompt)?;

        if urls.is_empty() {
            return Err(Error::EmptyInput(
                "Video URL list cannot be empty.".to_string(),
            ));
        }

        let media = media::from_urls(&self.http, urls).await?;
        self.perform_analysis(prompt, media).await
    }

    /// Analyze one or more Base64-encoded videos.
    pub async fn analyze_base64(
        &self,
        videos: &[Base64Video],
        prompt: &str,
    ) -> Result<AnalysisResponse> {
        validate_prompt(prompt)?;

        if videos.is_empty() {
            return Err(Error::EmptyInput(
                "Base64 video list cannot be empty.".to_string(),
            ));
        }

        let media = media::from_base64(videos)?;
        self.perform_analysis(prompt, media).await
    }

    /// Send the composed request to the model and guard the reply.
    async fn perform_analysis(
        &self,
        prompt: &str,
        media: Vec<Media>,
    ) -> Result<AnalysisResponse> {
        if media.is_empty() {
            return Err(Error::EmptyInput(
                "No valid video files were provided for analysis.".to_string(),
            ));
        }

        info!("Dispatching analysis with {} media item(s)", media.len());

        let answer = self
            .vision
            .analyze(prompts::ANALYSIS_SYSTEM, prompt, &media)
            .await?;

        // Exact-match guardrail against the instructed refusal phrase. Not a
        // security boundary; a steered model can word its reply differently.
        if answer.eq_ignore_ascii_case(prompts::OFF_TOPIC_REPLY) {
            return Err(Error::OffTopicPrompt);
        }

        Ok(AnalysisResponse { response: answer })
    }
}

fn validate_prompt(prompt: &str) -> Result<()> {
    if prompt.trim().is_empty() {
        return Err(Error::EmptyPrompt);
    }
    Ok(())
}
