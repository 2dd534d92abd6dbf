//! Presentation seam between the pipeline and the user.

use std::sync::{Arc, Mutex};

use crate::error::{ParloError, Result};

/// Pluggable output handler for pipeline results.
///
/// Events arrive in pipeline order: `transcript`, then `translation`, then
/// exactly one terminal event. `audio` ends a successful run; `error` ends
/// a run whose recognition failed. Nothing follows a terminal event.
pub trait Presenter: Send {
    /// Show the recognized source-language text.
    fn transcript(&mut self, text: &str) -> Result<()>;

    /// Show the translated target-language text.
    fn translation(&mut self, text: &str) -> Result<()>;

    /// Show a recognition failure message.
    fn error(&mut self, message: &str) -> Result<()>;

    /// Present the synthesized audio.
    fn audio(&mut self, bytes: &[u8], mime: &str) -> Result<()>;

    /// Name for logging/debugging.
    fn name(&self) -> &'static str {
        "presenter"
    }
}

/// One event as received by a presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentedEvent {
    Transcript(String),
    Translation(String),
    Error(String),
    Audio { bytes: Vec<u8>, mime: String },
}

/// Records every event it receives. Clones share the same log, so a test
/// can keep one clone and hand the other to the pipeline.
#[derive(Debug, Clone, Default)]
pub struct CollectingPresenter {
    events: Arc<Mutex<Vec<PresentedEvent>>>,
}

impl CollectingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared log of received events, for assertions after the presenter
    /// has been moved into a pipeline.
    pub fn events(&self) -> Arc<Mutex<Vec<PresentedEvent>>> {
        Arc::clone(&self.events)
    }

    fn push(&self, event: PresentedEvent) -> Result<()> {
        self.events
            .lock()
            .map_err(|_| ParloError::Other("presenter event log poisoned".to_string()))?
            .push(event);
        Ok(())
    }
}

impl Presenter for CollectingPresenter {
    fn transcript(&mut self, text: &str) -> Result<()> {
        self.push(PresentedEvent::Transcript(text.to_string()))
    }

    fn translation(&mut self, text: &str) -> Result<()> {
        self.push(PresentedEvent::Translation(text.to_string()))
    }

    fn error(&mut self, message: &str) -> Result<()> {
        self.push(PresentedEvent::Error(message.to_string()))
    }

    fn audio(&mut self, bytes: &[u8], mime: &str) -> Result<()> {
        self.push(PresentedEvent::Audio {
            bytes: bytes.to_vec(),
            mime: mime.to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "collecting"
    }
}
