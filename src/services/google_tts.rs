//! Speech synthesis via the Google Translate `translate_tts` endpoint.
//!
//! The endpoint the translate website uses for its speaker button. A GET
//! with the text and language returns an MP3 body directly.

use async_trait::async_trait;

use crate::defaults;
use crate::error::{ParloError, Result};
use crate::services::synthesizer::Synthesizer;

/// Text-to-speech backed by the `translate_tts` endpoint.
pub struct GoogleTts {
    base_url: String,
    client: reqwest::Client,
}

impl Default for GoogleTts {
    fn default() -> Self {
        Self::new()
    }
}

impl GoogleTts {
    pub fn new() -> Self {
        Self {
            base_url: defaults::TTS_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Builder method: point the client at a different API base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder method: use a caller-supplied `reqwest::Client`.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/translate_tts", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Synthesizer for GoogleTts {
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(self.endpoint())
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| ParloError::Synthesis {
                message: format!("request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ParloError::Synthesis {
                message: format!("service returned {status}"),
            });
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| ParloError::Synthesis {
                message: format!("failed to read audio: {e}"),
            })?
            .to_vec();

        if audio.is_empty() {
            return Err(ParloError::Synthesis {
                message: "service returned no audio".to_string(),
            });
        }
        Ok(audio)
    }
}
