use crate::error::{ParloError, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Trait for remote text-to-speech clients.
///
/// This trait allows swapping implementations (real service vs mock).
#[async_trait]
pub trait Synthesizer: Send + Sync {
    /// Synthesize spoken audio for text in the given language.
    ///
    /// # Arguments
    /// * `text` - Text to speak
    /// * `language` - Language code for the synthesized voice
    ///
    /// # Returns
    /// Compressed audio bytes (an MP3-like container). Any failure is an
    /// error; synthesis has no recoverable outcomes.
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>>;
}

/// Implement Synthesizer for Arc<T> to allow sharing between a test and a
/// running pipeline.
#[async_trait]
impl<T: Synthesizer> Synthesizer for Arc<T> {
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>> {
        (**self).synthesize(text, language).await
    }
}

/// Mock synthesizer for testing
#[derive(Debug)]
pub struct MockSynthesizer {
    audio: Vec<u8>,
    should_fail: bool,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockSynthesizer {
    /// Create a new mock returning placeholder audio bytes
    pub fn new() -> Self {
        Self {
            audio: b"mock-mp3-audio".to_vec(),
            should_fail: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Configure the mock to return specific audio bytes
    pub fn with_audio(mut self, audio: Vec<u8>) -> Self {
        self.audio = audio;
        self
    }

    /// Configure the mock to fail on synthesize
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }

    /// Shared log of (text, language) requests.
    pub fn calls(&self) -> Arc<Mutex<Vec<(String, String)>>> {
        Arc::clone(&self.calls)
    }
}

impl Default for MockSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Synthesizer for MockSynthesizer {
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((text.to_string(), language.to_string()));
        }
        if self.should_fail {
            return Err(ParloError::Synthesis {
                message: "mock synthesis failure".to_string(),
            });
        }
        Ok(self.audio.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_configured_audio() {
        let synth = MockSynthesizer::new().with_audio(vec![1, 2, 3]);

        let audio = synth.synthesize("hola", "es").await.unwrap();

        assert_eq!(audio, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_mock_failure_is_a_synthesis_error() {
        let synth = MockSynthesizer::new().with_failure();

        let result = synth.synthesize("hola", "es").await;

        match result {
            Err(ParloError::Synthesis { message }) => {
                assert_eq!(message, "mock synthesis failure");
            }
            other => panic!("Expected Synthesis error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_mock_logs_requests() {
        let synth = MockSynthesizer::new();
        let calls = synth.calls();

        synth.synthesize("hola", "es").await.unwrap();
        synth.synthesize("こんにちは", "ja").await.unwrap();

        let logged = calls.lock().unwrap();
        assert_eq!(
            *logged,
            vec![
                ("hola".to_string(), "es".to_string()),
                ("こんにちは".to_string(), "ja".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_arc_wrapper_shares_call_log() {
        let synth = Arc::new(MockSynthesizer::new());
        let calls = synth.calls();

        synth.synthesize("x", "de").await.unwrap();

        assert_eq!(calls.lock().unwrap().len(), 1);
    }
}
