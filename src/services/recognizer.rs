use crate::audio::AudioClip;
use crate::error::{ParloError, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Outcome of a recognition request.
///
/// Both failure variants are recoverable: the pipeline reports them to the
/// user and stops, without treating them as errors. Transport and
/// service-side failures are folded into `ServiceUnreachable` so callers
/// match on an exhaustive enum instead of catching error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recognition {
    /// The service recognized speech and returned its transcript.
    Transcript(String),
    /// The service processed the audio but could not map it to text.
    NoSpeech,
    /// The request itself failed.
    ServiceUnreachable { reason: String },
}

/// Trait for remote speech-to-text clients.
///
/// This trait allows swapping implementations (real service vs mock).
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Submit a complete clip for recognition.
    ///
    /// # Arguments
    /// * `clip` - The captured audio, submitted in one request
    /// * `language` - Recognition-language code; None lets the service use
    ///   its default
    ///
    /// # Returns
    /// The typed recognition outcome. `Err` is reserved for local failures;
    /// remote failures surface as `Recognition::ServiceUnreachable`.
    async fn recognize(&self, clip: &AudioClip, language: Option<&str>) -> Result<Recognition>;
}

/// Implement SpeechToText for Arc<T> to allow sharing between a test and a
/// running pipeline.
#[async_trait]
impl<T: SpeechToText> SpeechToText for Arc<T> {
    async fn recognize(&self, clip: &AudioClip, language: Option<&str>) -> Result<Recognition> {
        (**self).recognize(clip, language).await
    }
}

/// Mock speech-to-text client for testing
#[derive(Debug)]
pub struct MockSpeechToText {
    outcome: Recognition,
    should_fail: bool,
    calls: Arc<Mutex<Vec<Option<String>>>>,
}

impl MockSpeechToText {
    /// Create a new mock that recognizes a fixed transcript
    pub fn new() -> Self {
        Self {
            outcome: Recognition::Transcript("mock transcript".to_string()),
            should_fail: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Configure the mock to return a specific transcript
    pub fn with_transcript(mut self, transcript: &str) -> Self {
        self.outcome = Recognition::Transcript(transcript.to_string());
        self
    }

    /// Configure the mock to report unintelligible audio
    pub fn with_no_speech(mut self) -> Self {
        self.outcome = Recognition::NoSpeech;
        self
    }

    /// Configure the mock to report an unreachable service
    pub fn with_unreachable(mut self, reason: &str) -> Self {
        self.outcome = Recognition::ServiceUnreachable {
            reason: reason.to_string(),
        };
        self
    }

    /// Configure the mock to fail with a local error
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }

    /// Shared log of the language hints passed to `recognize`.
    pub fn calls(&self) -> Arc<Mutex<Vec<Option<String>>>> {
        Arc::clone(&self.calls)
    }
}

impl Default for MockSpeechToText {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechToText for MockSpeechToText {
    async fn recognize(&self, _clip: &AudioClip, language: Option<&str>) -> Result<Recognition> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(language.map(str::to_string));
        }
        if self.should_fail {
            return Err(ParloError::Other("mock recognition failure".to_string()));
        }
        Ok(self.outcome.clone())
    }
}
