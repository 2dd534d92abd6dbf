use crate::audio::clip::AudioClip;
use crate::defaults;
use crate::error::{ParloError, Result};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Trait for audio capture devices.
///
/// This trait allows swapping implementations (real audio device vs mock).
pub trait Recorder: Send {
    /// Record from the input device, blocking for the full duration.
    ///
    /// # Returns
    /// The captured clip, or an error if the device is unavailable or
    /// capture fails.
    fn record(&mut self, duration: Duration) -> Result<AudioClip>;
}

/// Configuration for recorder initialization
#[derive(Debug, Clone)]
pub struct RecorderConfig {
    pub sample_rate: u32,
    pub channels: u16,
    /// Preferred input device name substring; None selects the default device.
    pub device: Option<String>,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            sample_rate: defaults::SAMPLE_RATE,
            channels: defaults::CHANNELS,
            device: None,
        }
    }
}

/// Mock recorder for testing
#[derive(Debug, Clone)]
pub struct MockRecorder {
    clip: AudioClip,
    should_fail: bool,
    missing_device: Option<String>,
    error_message: String,
    requests: Arc<Mutex<Vec<Duration>>>,
}

impl MockRecorder {
    /// Create a new mock recorder returning a short silent clip
    pub fn new() -> Self {
        Self {
            clip: AudioClip::new(
                vec![0i16; 1600],
                defaults::SAMPLE_RATE,
                defaults::CHANNELS,
            ),
            should_fail: false,
            missing_device: None,
            error_message: "mock capture error".to_string(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Configure the mock to return a specific clip
    pub fn with_clip(mut self, clip: AudioClip) -> Self {
        self.clip = clip;
        self
    }

    /// Configure the mock to fail with a capture error
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }

    /// Configure the mock to fail as if the named device were missing
    pub fn with_missing_device(mut self, device: &str) -> Self {
        self.missing_device = Some(device.to_string());
        self
    }

    /// Configure the error message for capture failures
    pub fn with_error_message(mut self, message: &str) -> Self {
        self.error_message = message.to_string();
        self
    }

    /// Shared log of requested durations, for assertions after the mock has
    /// been moved into a pipeline.
    pub fn requests(&self) -> Arc<Mutex<Vec<Duration>>> {
        Arc::clone(&self.requests)
    }
}

impl Default for MockRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Recorder for MockRecorder {
    fn record(&mut self, duration: Duration) -> Result<AudioClip> {
        self.requests
            .lock()
            .map_err(|_| ParloError::AudioCapture {
                message: "mock request log poisoned".to_string(),
            })?
            .push(duration);

        if let Some(device) = &self.missing_device {
            return Err(ParloError::AudioDeviceNotFound {
                device: device.clone(),
            });
        }
        if self.should_fail {
            return Err(ParloError::AudioCapture {
                message: self.error_message.clone(),
            });
        }
        Ok(self.clip.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_recorder_returns_configured_clip() {
        let clip = AudioClip::new(vec![100i16, 200, 300, 400], 44_100, 2);
        let mut recorder = MockRecorder::new().with_clip(clip.clone());

        let result = recorder.record(Duration::from_secs(10));

        assert!(result.is_ok());
        assert_eq!(result.unwrap(), clip);
    }

    #[test]
    fn test_mock_recorder_returns_default_silence() {
        let mut recorder = MockRecorder::new();

        let clip = recorder.record(Duration::from_secs(1)).unwrap();

        assert_eq!(clip.sample_rate(), 44_100);
        assert_eq!(clip.channels(), 2);
        assert!(clip.samples().iter().all(|&s| s == 0));
    }

    #[test]
    fn test_mock_recorder_capture_failure() {
        let mut recorder = MockRecorder::new().with_failure();

        let result = recorder.record(Duration::from_secs(10));

        match result {
            Err(ParloError::AudioCapture { message }) => {
                assert_eq!(message, "mock capture error");
            }
            other => panic!("Expected AudioCapture error, got {other:?}"),
        }
    }

    #[test]
    fn test_mock_recorder_custom_error_message() {
        let mut recorder = MockRecorder::new()
            .with_failure()
            .with_error_message("stream died");

        let result = recorder.record(Duration::from_secs(10));

        match result {
            Err(ParloError::AudioCapture { message }) => {
                assert_eq!(message, "stream died");
            }
            other => panic!("Expected AudioCapture error, got {other:?}"),
        }
    }

    #[test]
    fn test_mock_recorder_missing_device() {
        let mut recorder = MockRecorder::new().with_missing_device("usb-mic");

        let result = recorder.record(Duration::from_secs(10));

        match result {
            Err(ParloError::AudioDeviceNotFound { device }) => {
                assert_eq!(device, "usb-mic");
            }
            other => panic!("Expected AudioDeviceNotFound error, got {other:?}"),
        }
    }

    #[test]
    fn test_mock_recorder_logs_requested_durations() {
        let mut recorder = MockRecorder::new();
        let requests = recorder.requests();

        recorder.record(Duration::from_secs(10)).unwrap();
        recorder.record(Duration::from_secs(3)).unwrap();

        let logged = requests.lock().unwrap();
        assert_eq!(
            *logged,
            vec![Duration::from_secs(10), Duration::from_secs(3)]
        );
    }

    #[test]
    fn test_mock_recorder_logs_failed_requests_too() {
        let mut recorder = MockRecorder::new().with_failure();
        let requests = recorder.requests();

        let _ = recorder.record(Duration::from_secs(5));

        assert_eq!(requests.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_recorder_trait_is_object_safe() {
        let mut recorder: Box<dyn Recorder> = Box::new(
            MockRecorder::new().with_clip(AudioClip::new(vec![1i16, 2, 3, 4], 44_100, 2)),
        );

        let clip = recorder.record(Duration::from_secs(10)).unwrap();
        assert_eq!(clip.samples(), &[1i16, 2, 3, 4]);
    }

    #[test]
    fn test_mock_recorder_builder_pattern() {
        let mut recorder = MockRecorder::new()
            .with_clip(AudioClip::new(vec![10i16, 20], 44_100, 2))
            .with_error_message("unused")
            .with_clip(AudioClip::new(vec![30i16, 40], 44_100, 2));

        let clip = recorder.record(Duration::from_secs(10)).unwrap();
        assert_eq!(clip.samples(), &[30i16, 40]);
    }

    #[test]
    fn test_recorder_config_default() {
        let config = RecorderConfig::default();
        assert_eq!(config.sample_rate, 44_100);
        assert_eq!(config.channels, 2);
        assert!(config.device.is_none());
    }

    #[test]
    fn test_recorder_config_custom() {
        let config = RecorderConfig {
            sample_rate: 48_000,
            channels: 1,
            device: Some("pipewire".to_string()),
        };
        assert_eq!(config.sample_rate, 48_000);
        assert_eq!(config.channels, 1);
        assert_eq!(config.device.as_deref(), Some("pipewire"));
    }

    #[test]
    fn test_mock_recorder_default_trait() {
        let mut recorder = MockRecorder::default();
        assert!(recorder.record(Duration::from_millis(100)).is_ok());
    }

    #[test]
    fn test_mock_recorder_repeated_records_return_same_clip() {
        let clip = AudioClip::new(vec![5i16, 6, 7, 8], 44_100, 2);
        let mut recorder = MockRecorder::new().with_clip(clip.clone());

        assert_eq!(recorder.record(Duration::from_secs(1)).unwrap(), clip);
        assert_eq!(recorder.record(Duration::from_secs(1)).unwrap(), clip);
    }
}
