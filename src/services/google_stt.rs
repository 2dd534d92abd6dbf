//! Speech recognition via the Google Cloud `speech:recognize` REST API.
//!
//! One-shot batch recognition: the whole captured clip is base64-encoded
//! as LINEAR16 PCM and sent in a single POST. This is not a streaming
//! endpoint, so nothing is returned until the full clip has been
//! processed.

use async_trait::async_trait;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::audio::AudioClip;
use crate::defaults;
use crate::error::Result;
use crate::services::recognizer::{Recognition, SpeechToText};

/// Recognition configuration sent to the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognitionConfig {
    /// Encoding of the audio data. Always "LINEAR16" here.
    encoding: &'static str,
    /// Sample rate of the audio in Hertz.
    sample_rate_hertz: u32,
    /// Number of interleaved channels in the audio.
    audio_channel_count: u16,
    /// BCP-47 language code. Omitted to let the service use its default.
    #[serde(skip_serializing_if = "Option::is_none")]
    language_code: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
struct RecognitionAudio {
    /// Base64-encoded PCM bytes.
    content: String,
}

/// Full request body for the `speech:recognize` endpoint.
#[derive(Debug, Clone, Serialize)]
struct RecognizeRequest {
    config: RecognitionConfig,
    audio: RecognitionAudio,
}

#[derive(Debug, Clone, Deserialize)]
struct RecognitionAlternative {
    #[serde(default)]
    transcript: String,
}

#[derive(Debug, Clone, Deserialize)]
struct RecognitionResult {
    #[serde(default)]
    alternatives: Vec<RecognitionAlternative>,
}

/// Response body for the `speech:recognize` endpoint. An empty or absent
/// `results` array means the service recognized no speech in the clip.
#[derive(Debug, Clone, Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<RecognitionResult>,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

/// Speech-to-text backed by Google Cloud Speech.
///
/// Remote trouble is reported through [`Recognition::ServiceUnreachable`]
/// rather than an error: a dead network or a 5xx from the service is an
/// expected outcome of a recognition attempt, not a local fault.
pub struct GoogleRecognizer {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl GoogleRecognizer {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: defaults::RECOGNIZER_URL.to_string(),
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

    pub(crate) fn endpoint(&self) -> String {
        format!(
            "{}/v1/speech:recognize",
            self.base_url.trim_end_matches('/')
        )
    }

    fn build_request(&self, clip: &AudioClip, language: Option<&str>) -> RecognizeRequest {
        let encoded = base64::engine::general_purpose::STANDARD.encode(clip.pcm_bytes());
        RecognizeRequest {
            config: RecognitionConfig {
                encoding: "LINEAR16",
                sample_rate_hertz: clip.sample_rate(),
                audio_channel_count: clip.channels(),
                language_code: language.map(str::to_string),
            },
            audio: RecognitionAudio { content: encoded },
        }
    }

    /// Collect the top alternative of every result into one transcript.
    fn extract_transcript(response: &RecognizeResponse) -> String {
        response
            .results
            .iter()
            .filter_map(|result| result.alternatives.first())
            .map(|alt| alt.transcript.trim())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[async_trait]
impl SpeechToText for GoogleRecognizer {
    async fn recognize(&self, clip: &AudioClip, language: Option<&str>) -> Result<Recognition> {
        let body = self.build_request(clip, language);

        let response = match self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                return Ok(Recognition::ServiceUnreachable {
                    reason: format!("request failed: {e}"),
                });
            }
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                return Ok(Recognition::ServiceUnreachable {
                    reason: format!("failed to read response: {e}"),
                });
            }
        };

        if !status.is_success() {
            let reason = match serde_json::from_str::<ApiErrorResponse>(&text) {
                Ok(err) => format!("{status}: {}", err.error.message),
                Err(_) => status.to_string(),
            };
            return Ok(Recognition::ServiceUnreachable { reason });
        }

        let parsed: RecognizeResponse = match serde_json::from_str(&text) {
            Ok(parsed) => parsed,
            Err(e) => {
                return Ok(Recognition::ServiceUnreachable {
                    reason: format!("unexpected response: {e}"),
                });
            }
        };

        let transcript = Self::extract_transcript(&parsed);
        if transcript.is_empty() {
            return Ok(Recognition::NoSpeech);
        }
        Ok(Recognition::Transcript(transcript))
    }
}
