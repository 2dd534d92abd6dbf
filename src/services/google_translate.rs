//! Text translation via the unofficial Google Translate `gtx` endpoint.
//!
//! This is the same endpoint the translate website uses. It wants no API
//! key and replies with a nested JSON array rather than an object: the
//! first element is a list of segments, and the first element of each
//! segment is a chunk of translated text.

use async_trait::async_trait;

use crate::defaults;
use crate::error::{ParloError, Result};
use crate::services::translator::Translator;

/// Translation backed by the `translate_a/single` endpoint.
pub struct GtxTranslator {
    base_url: String,
    client: reqwest::Client,
}

impl Default for GtxTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl GtxTranslator {
    pub fn new() -> Self {
        Self {
            base_url: defaults::TRANSLATOR_URL.to_string(),
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
        format!(
            "{}/translate_a/single",
            self.base_url.trim_end_matches('/')
        )
    }

    /// Concatenate the translated chunks out of the nested-array response.
    ///
    /// Returns `None` when the body does not have the expected shape.
    fn parse_segments(body: &serde_json::Value) -> Option<String> {
        let segments = body.get(0)?.as_array()?;
        let mut translated = String::new();
        let mut found = false;
        for segment in segments {
            if let Some(chunk) = segment.get(0).and_then(|v| v.as_str()) {
                translated.push_str(chunk);
                found = true;
            }
        }
        found.then_some(translated)
    }
}

#[async_trait]
impl Translator for GtxTranslator {
    async fn translate(&self, text: &str, source: Option<&str>, target: &str) -> Result<String> {
        let response = self
            .client
            .get(self.endpoint())
            .query(&[
                ("client", "gtx"),
                ("sl", source.unwrap_or("auto")),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| ParloError::Translation {
                message: format!("request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ParloError::Translation {
                message: format!("service returned {status}"),
            });
        }

        let body: serde_json::Value =
            response.json().await.map_err(|e| ParloError::Translation {
                message: format!("failed to parse response: {e}"),
            })?;

        Self::parse_segments(&body).ok_or_else(|| ParloError::Translation {
            message: "unexpected response shape".to_string(),
        })
    }
}
