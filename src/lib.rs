//! parlo - Voice translation from the command line
//!
//! Record speech, transcribe it, translate it, and speak the result.

// Enforce error handling discipline
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod audio;
pub mod cli;
pub mod config;
pub mod defaults;
pub mod error;
pub mod languages;
pub mod pipeline;
pub mod present;
pub mod services;

// Composition root - needs the capture stack
#[cfg(feature = "capture")]
pub mod app;

// Core traits (record → recognize → translate → synthesize → present)
pub use audio::{AudioClip, Recorder};
pub use present::Presenter;
pub use services::{Recognition, SpeechToText, Synthesizer, Translator};

// Pipeline
pub use pipeline::{Pipeline, RunOutcome, ScratchSession};

// Error handling
pub use error::{ParloError, Result};

// Config
pub use config::Config;

// Languages
pub use languages::{LANGUAGES, Language};

/// Build version string with optional git commit hash.
///
/// Returns `"0.3.1+abc1234"` when git hash is available, `"0.3.1"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}
