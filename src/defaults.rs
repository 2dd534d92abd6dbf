//! Default configuration constants for parlo.
//!
//! This module provides shared constants used across different configuration types
//! to ensure consistency and eliminate duplication.

/// Default audio sample rate in Hz.
///
/// 44.1kHz is CD-quality capture. The recognition service downsamples on its
/// side, so recording at full quality costs nothing but a larger upload.
pub const SAMPLE_RATE: u32 = 44_100;

/// Default capture channel count.
///
/// Stereo capture matches the common microphone default; the recognizer
/// accepts multi-channel PCM as-is.
pub const CHANNELS: u16 = 2;

/// Default recording duration in seconds.
///
/// Capture always runs for the full duration. There is no voice-activity
/// detection and no early stop.
pub const RECORD_SECS: u64 = 10;

/// File name of the captured waveform inside the scratch directory.
pub const CAPTURE_FILE_NAME: &str = "capture.wav";

/// File name of the synthesized speech inside the scratch directory.
pub const SPEECH_FILE_NAME: &str = "speech.mp3";

/// MIME type of the synthesized speech handed to presenters.
pub const SPEECH_MIME: &str = "audio/mpeg";

/// Message shown when the recognizer heard audio but produced no text.
pub const NO_SPEECH_MESSAGE: &str = "Could not understand audio";

/// Message shown when the recognition request itself failed.
pub const SERVICE_UNREACHABLE_MESSAGE: &str = "Could not request results";

/// Default base URL of the speech-recognition service.
pub const RECOGNIZER_URL: &str = "https://speech.googleapis.com";

/// Default base URL of the translation service.
pub const TRANSLATOR_URL: &str = "https://translate.googleapis.com";

/// Default base URL of the speech-synthesis service.
pub const TTS_URL: &str = "https://translate.google.com";
