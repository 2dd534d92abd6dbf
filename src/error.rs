//! Error types for parlo.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParloError {
    // Configuration errors
    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    // Language registry errors
    #[error("Unknown language: {selector}")]
    UnknownLanguage { selector: String },

    // Audio capture errors
    #[error("Audio device not found: {device}")]
    AudioDeviceNotFound { device: String },

    #[error("Audio capture failed: {message}")]
    AudioCapture { message: String },

    // Waveform file errors
    #[error("Failed to encode WAV: {message}")]
    WavEncode { message: String },

    #[error("Failed to decode WAV: {message}")]
    WavDecode { message: String },

    // Remote service errors (translation and synthesis are fatal to the run)
    #[error("Translation failed: {message}")]
    Translation { message: String },

    #[error("Speech synthesis failed: {message}")]
    Synthesis { message: String },

    // Presentation errors
    #[error("Audio playback failed: {message}")]
    Playback { message: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, ParloError>;
