use super::VisionService;
use crate::media::Media;
use crate::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// One recorded call to [`MockVisionClient::analyze`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub system: String,
    pub prompt: String,
    pub media_count: usize,
}

#[derive(Clone)]
pub struct MockVisionClient {
    responses: Arc<Mutex<Vec<String>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockVisionClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(response.into());
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn get_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockVisionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VisionService for MockVisionClient {
    async fn analyze(&self, system: &str, prompt: &str, media: &[Media]) -> Result<String> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(RecordedCall {
            system: system.to_string(),
            prompt: prompt.to_string(),
            media_count: media.len(),
        });
        let count = calls.len();
        drop(calls);

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response
            Ok(format!("Mock analysis of {} video(s): {}", media.len(), prompt))
        } else {
            let index = (count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}
