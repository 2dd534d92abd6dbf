use crate::defaults;
use crate::error::{ParloError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub audio: AudioConfig,
    pub services: ServicesConfig,
    pub output: OutputConfig,
}

/// Audio capture configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    /// Preferred input device name substring; None selects the default device.
    pub device: Option<String>,
    pub duration_secs: u64,
}

/// Remote service configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServicesConfig {
    pub recognizer_api_key: Option<String>,
    pub recognizer_url: String,
    pub translator_url: String,
    pub tts_url: String,
}

/// Presentation configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Play synthesized speech through the speakers.
    pub play: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            device: None,
            duration_secs: defaults::RECORD_SECS,
        }
    }
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            recognizer_api_key: None,
            recognizer_url: defaults::RECOGNIZER_URL.to_string(),
            translator_url: defaults::TRANSLATOR_URL.to_string(),
            tts_url: defaults::TTS_URL.to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { play: true }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file is missing or contains invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ParloError::ConfigFileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                ParloError::Io(e)
            }
        })?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if file doesn't exist
    ///
    /// Only falls back to defaults when the file is missing.
    /// Invalid TOML is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(ParloError::ConfigFileNotFound { .. }) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - PARLO_API_KEY → services.recognizer_api_key
    /// - PARLO_AUDIO_DEVICE → audio.device
    /// - PARLO_RECOGNIZER_URL → services.recognizer_url
    /// - PARLO_TRANSLATOR_URL → services.translator_url
    /// - PARLO_TTS_URL → services.tts_url
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(key) = std::env::var("PARLO_API_KEY")
            && !key.is_empty()
        {
            self.services.recognizer_api_key = Some(key);
        }

        if let Ok(device) = std::env::var("PARLO_AUDIO_DEVICE")
            && !device.is_empty()
        {
            self.audio.device = Some(device);
        }

        if let Ok(url) = std::env::var("PARLO_RECOGNIZER_URL")
            && !url.is_empty()
        {
            self.services.recognizer_url = url;
        }

        if let Ok(url) = std::env::var("PARLO_TRANSLATOR_URL")
            && !url.is_empty()
        {
            self.services.translator_url = url;
        }

        if let Ok(url) = std::env::var("PARLO_TTS_URL")
            && !url.is_empty()
        {
            self.services.tts_url = url;
        }

        self
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/parlo/config.toml on Linux
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .expect("Could not determine config directory")
            .join("parlo")
            .join("config.toml")
    }
}
