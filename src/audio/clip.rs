//! In-memory audio clip with WAV encode/decode.

use crate::error::{ParloError, Result};
use std::path::Path;
use std::time::Duration;

/// A captured audio clip: interleaved 16-bit signed samples plus the format
/// needed to interpret them.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    samples: Vec<i16>,
    sample_rate: u32,
    channels: u16,
}

impl AudioClip {
    /// Create a clip from interleaved samples.
    pub fn new(samples: Vec<i16>, sample_rate: u32, channels: u16) -> Self {
        Self {
            samples,
            sample_rate,
            channels,
        }
    }

    /// Interleaved 16-bit samples.
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of interleaved channels.
    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Clip length in wall-clock time.
    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 || self.channels == 0 {
            return Duration::ZERO;
        }
        let frames = self.samples.len() as u64 / u64::from(self.channels);
        Duration::from_secs_f64(frames as f64 / f64::from(self.sample_rate))
    }

    /// Raw little-endian PCM bytes, as the recognition service expects them.
    pub fn pcm_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.samples.len() * 2);
        for &sample in &self.samples {
            bytes.extend_from_slice(&sample.to_le_bytes());
        }
        bytes
    }

    /// Write the clip as a 16-bit PCM WAV file, overwriting any existing file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let spec = hound::WavSpec {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).map_err(|e| {
            ParloError::WavEncode {
                message: format!("Failed to create {}: {}", path.display(), e),
            }
        })?;
        for &sample in &self.samples {
            writer
                .write_sample(sample)
                .map_err(|e| ParloError::WavEncode {
                    message: format!("Failed to write sample: {e}"),
                })?;
        }
        writer.finalize().map_err(|e| ParloError::WavEncode {
            message: format!("Failed to finalize {}: {}", path.display(), e),
        })?;
        Ok(())
    }

    /// Read a 16-bit PCM WAV file back into a clip.
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = hound::WavReader::open(path).map_err(|e| ParloError::WavDecode {
            message: format!("Failed to open {}: {}", path.display(), e),
        })?;
        let spec = reader.spec();
        let samples: Vec<i16> = reader
            .samples::<i16>()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| ParloError::WavDecode {
                message: format!("Failed to read samples from {}: {}", path.display(), e),
            })?;

        Ok(Self {
            samples,
            sample_rate: spec.sample_rate,
            channels: spec.channels,
        })
    }
}
