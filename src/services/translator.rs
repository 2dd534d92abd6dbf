use crate::error::{ParloError, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// One recorded translation request, for mock assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateCall {
    pub text: String,
    pub source: Option<String>,
    pub target: String,
}

/// Trait for remote translation clients.
///
/// This trait allows swapping implementations (real service vs mock).
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate text into the target language.
    ///
    /// # Arguments
    /// * `text` - Source text
    /// * `source` - Source-language code; None requests auto-detection
    /// * `target` - Target-language code
    ///
    /// # Returns
    /// The translated text. Any failure is an error; translation has no
    /// recoverable outcomes.
    async fn translate(&self, text: &str, source: Option<&str>, target: &str) -> Result<String>;
}

/// Implement Translator for Arc<T> to allow sharing between a test and a
/// running pipeline.
#[async_trait]
impl<T: Translator> Translator for Arc<T> {
    async fn translate(&self, text: &str, source: Option<&str>, target: &str) -> Result<String> {
        (**self).translate(text, source, target).await
    }
}

/// Mock translator for testing
#[derive(Debug)]
pub struct MockTranslator {
    response: String,
    identity_for_same_language: bool,
    should_fail: bool,
    calls: Arc<Mutex<Vec<TranslateCall>>>,
}

impl MockTranslator {
    /// Create a new mock translator with a fixed response
    pub fn new() -> Self {
        Self {
            response: "mock translation".to_string(),
            identity_for_same_language: false,
            should_fail: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Configure the mock to return a specific translation
    pub fn with_response(mut self, response: &str) -> Self {
        self.response = response.to_string();
        self
    }

    /// Configure the mock to echo the input when source and target match
    pub fn with_identity_for_same_language(mut self) -> Self {
        self.identity_for_same_language = true;
        self
    }

    /// Configure the mock to fail on translate
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }

    /// Shared log of translation requests.
    pub fn calls(&self) -> Arc<Mutex<Vec<TranslateCall>>> {
        Arc::clone(&self.calls)
    }
}

impl Default for MockTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(&self, text: &str, source: Option<&str>, target: &str) -> Result<String> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(TranslateCall {
                text: text.to_string(),
                source: source.map(str::to_string),
                target: target.to_string(),
            });
        }
        if self.should_fail {
            return Err(ParloError::Translation {
                message: "mock translation failure".to_string(),
            });
        }
        if self.identity_for_same_language && source == Some(target) {
            return Ok(text.to_string());
        }
        Ok(self.response.clone())
    }
}
