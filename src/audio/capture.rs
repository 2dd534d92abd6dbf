//! Real audio capture using CPAL (Cross-Platform Audio Library).

use crate::audio::clip::AudioClip;
use crate::audio::recorder::{Recorder, RecorderConfig};
use crate::error::{ParloError, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Run a closure with stderr temporarily redirected to /dev/null.
///
/// This suppresses noisy ALSA/JACK/PipeWire messages that CPAL triggers
/// when probing audio backends. The messages are harmless but confusing to users.
///
/// # Safety
/// Uses `libc::dup`/`libc::dup2` to save and restore file descriptor 2 (stderr).
/// Safe as long as no other thread is concurrently manipulating fd 2.
fn with_suppressed_stderr<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    unsafe {
        let saved_fd = libc::dup(2);
        let devnull = libc::open(c"/dev/null".as_ptr(), libc::O_WRONLY);
        if saved_fd >= 0 && devnull >= 0 {
            libc::dup2(devnull, 2);
            libc::close(devnull);
        }

        let result = f();

        if saved_fd >= 0 {
            libc::dup2(saved_fd, 2);
            libc::close(saved_fd);
        }

        result
    }
}

/// Suppress noisy JACK/ALSA error messages that occur during audio backend probing.
/// These are harmless but confusing to users.
///
/// # Safety
/// This modifies environment variables which is safe when called before spawning threads.
pub fn suppress_audio_warnings() {
    // SAFETY: Called at startup before any threads are spawned
    unsafe {
        std::env::set_var("JACK_NO_START_SERVER", "1");
        std::env::set_var("JACK_NO_AUDIO_RESERVATION", "1");
        std::env::set_var("PIPEWIRE_DEBUG", "0");
        std::env::set_var("ALSA_DEBUG", "0");
        std::env::set_var("PW_LOG", "0");
    }
}

/// Preferred device names for GNOME/PipeWire environments.
const PREFERRED_DEVICES: &[&str] = &["pipewire", "pulse", "PulseAudio"];

/// Device name patterns to filter out (not useful for voice input).
const FILTERED_PATTERNS: &[&str] = &[
    "surround",
    "front:",
    "rear:",
    "center:",
    "side:",
    "Digital Output",
    "HDMI",
    "S/PDIF",
];

/// Check if a device name should be filtered out.
fn should_filter_device(name: &str) -> bool {
    let lower = name.to_lowercase();
    FILTERED_PATTERNS
        .iter()
        .any(|pattern| lower.contains(&pattern.to_lowercase()))
}

/// Check if a device is a preferred device.
fn is_preferred_device(name: &str) -> bool {
    let lower = name.to_lowercase();
    PREFERRED_DEVICES
        .iter()
        .any(|pref| lower.contains(&pref.to_lowercase()))
}

/// List all available audio input devices with filtering and recommendations.
///
/// # Returns
/// A vector of device names, with preferred devices marked with "\[recommended\]".
/// Filters out obviously unusable devices (surround channels, HDMI, etc.).
///
/// # Errors
/// Returns `ParloError::AudioCapture` if device enumeration fails.
pub fn list_devices() -> Result<Vec<String>> {
    let (host, devices) = with_suppressed_stderr(|| {
        let host = cpal::default_host();
        let devices = host.input_devices();
        (host, devices)
    });
    let _ = host; // keep host alive while iterating devices
    let devices = devices.map_err(|e| ParloError::AudioCapture {
        message: format!("Failed to enumerate input devices: {}", e),
    })?;

    let mut device_names = Vec::new();
    for device in devices {
        if let Ok(name) = device.name() {
            if should_filter_device(&name) {
                continue;
            }

            if is_preferred_device(&name) {
                device_names.push(format!("{} [recommended]", name));
            } else {
                device_names.push(name);
            }
        }
    }

    Ok(device_names)
}

/// Find an input device whose name contains the given substring
/// (case-insensitive).
fn find_device(name: &str) -> Result<cpal::Device> {
    let host = cpal::default_host();
    let devices = host.input_devices().map_err(|e| ParloError::AudioCapture {
        message: format!("Failed to enumerate devices: {}", e),
    })?;

    let wanted = name.to_lowercase();
    for device in devices {
        if let Ok(dev_name) = device.name()
            && dev_name.to_lowercase().contains(&wanted)
        {
            return Ok(device);
        }
    }

    Err(ParloError::AudioDeviceNotFound {
        device: name.to_string(),
    })
}

/// Get the best default input device, preferring PipeWire/PulseAudio.
///
/// This ensures we respect the desktop's audio device selection.
///
/// # Errors
/// Returns `ParloError::AudioDeviceNotFound` if no input device is available.
fn get_best_default_device() -> Result<cpal::Device> {
    let host = cpal::default_host();

    if let Ok(devices) = host.input_devices() {
        for device in devices {
            if let Ok(name) = device.name()
                && is_preferred_device(&name)
            {
                return Ok(device);
            }
        }
    }

    host.default_input_device()
        .ok_or_else(|| ParloError::AudioDeviceNotFound {
            device: "default".to_string(),
        })
}

/// Real recorder implementation using CPAL.
///
/// Captures 16-bit PCM at the configured rate and channel count (stereo
/// 44.1kHz by default). Tries an i16 stream first — PipeWire/PulseAudio
/// convert transparently — then falls back to f32 with sample conversion for
/// devices that only expose float formats.
pub struct CpalRecorder {
    device: cpal::Device,
    config: RecorderConfig,
}

impl CpalRecorder {
    /// Create a new CPAL recorder.
    ///
    /// Resolves the configured device name (substring match) or picks the
    /// best default input device.
    ///
    /// # Errors
    /// Returns `ParloError::AudioDeviceNotFound` if the named device is
    /// missing or no input device exists at all.
    pub fn new(config: RecorderConfig) -> Result<Self> {
        let device = with_suppressed_stderr(|| match config.device.as_deref() {
            Some(name) => find_device(name),
            None => get_best_default_device(),
        })?;

        Ok(Self { device, config })
    }

    /// Name of the resolved input device.
    pub fn device_name(&self) -> String {
        self.device
            .name()
            .unwrap_or_else(|_| "unknown".to_string())
    }

    fn build_stream(&self, buffer: Arc<Mutex<Vec<i16>>>) -> Result<cpal::Stream> {
        let stream_config = cpal::StreamConfig {
            channels: self.config.channels,
            sample_rate: self.config.sample_rate,
            buffer_size: cpal::BufferSize::Default,
        };

        let err_callback = |err| {
            eprintln!("Audio stream error: {}", err);
        };

        // Try i16 — works with PipeWire/PulseAudio which convert transparently
        let cb_buffer = Arc::clone(&buffer);
        if let Ok(stream) = self.device.build_input_stream(
            &stream_config,
            move |data: &[i16], _: &cpal::InputCallbackInfo| {
                if let Ok(mut buf) = cb_buffer.lock() {
                    buf.extend_from_slice(data);
                }
            },
            err_callback,
            None,
        ) {
            return Ok(stream);
        }

        // Fall back to f32 for devices that only expose float formats
        let cb_buffer = Arc::clone(&buffer);
        self.device
            .build_input_stream(
                &stream_config,
                move |data: &[f32], _: &cpal::InputCallbackInfo| {
                    if let Ok(mut buf) = cb_buffer.lock() {
                        buf.extend(
                            data.iter()
                                .map(|&s| (s.clamp(-1.0, 1.0) * i16::MAX as f32) as i16),
                        );
                    }
                },
                err_callback,
                None,
            )
            .map_err(|e| ParloError::AudioCapture {
                message: format!("Failed to build input stream: {}", e),
            })
    }
}

impl Recorder for CpalRecorder {
    fn record(&mut self, duration: Duration) -> Result<AudioClip> {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let stream = self.build_stream(Arc::clone(&buffer))?;

        stream.play().map_err(|e| ParloError::AudioCapture {
            message: format!("Failed to start audio stream: {}", e),
        })?;

        // Fixed-length take: block for the full duration, no early stop.
        std::thread::sleep(duration);

        stream.pause().map_err(|e| ParloError::AudioCapture {
            message: format!("Failed to stop audio stream: {}", e),
        })?;
        drop(stream);

        let mut samples = {
            let mut buf = buffer.lock().map_err(|_| ParloError::AudioCapture {
                message: "Audio buffer lock poisoned".to_string(),
            })?;
            std::mem::take(&mut *buf)
        };

        if samples.is_empty() {
            return Err(ParloError::AudioCapture {
                message: format!(
                    "Input stream on '{}' delivered no data. \
                     Try another device (see `parlo devices`).",
                    self.device_name()
                ),
            });
        }

        // The last callback may overshoot the window; trim to the requested length.
        let expected = (duration.as_secs_f64() * f64::from(self.config.sample_rate)) as usize
            * usize::from(self.config.channels);
        if expected > 0 && samples.len() > expected {
            samples.truncate(expected);
        }

        Ok(AudioClip::new(
            samples,
            self.config.sample_rate,
            self.config.channels,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_filter_device() {
        assert!(should_filter_device("surround51"));
        assert!(should_filter_device("front:CARD=PCH"));
        assert!(should_filter_device("HDMI Output"));
        assert!(should_filter_device("Digital Output S/PDIF"));
        assert!(!should_filter_device("pipewire"));
        assert!(!should_filter_device("PulseAudio"));
        assert!(!should_filter_device("Built-in Audio"));
    }

    #[test]
    fn test_is_preferred_device() {
        assert!(is_preferred_device("pipewire"));
        assert!(is_preferred_device("PipeWire"));
        assert!(is_preferred_device("pulse"));
        assert!(is_preferred_device("PulseAudio"));
        assert!(!is_preferred_device("hw:0,0"));
        assert!(!is_preferred_device("default"));
    }

    #[test]
    fn test_create_with_invalid_device_name() {
        let config = RecorderConfig {
            device: Some("NonExistentDevice12345".to_string()),
            ..RecorderConfig::default()
        };
        let recorder = CpalRecorder::new(config);
        match recorder {
            Err(ParloError::AudioDeviceNotFound { device }) => {
                assert_eq!(device, "NonExistentDevice12345");
            }
            Ok(_) => panic!("Expected AudioDeviceNotFound error"),
            Err(other) => panic!("Expected AudioDeviceNotFound error, got {other:?}"),
        }
    }

    #[test]
    #[ignore] // Requires audio hardware
    fn test_list_devices_returns_at_least_one_device() {
        let devices = list_devices();
        assert!(devices.is_ok());
        assert!(
            !devices.unwrap().is_empty(),
            "Expected at least one audio device"
        );
    }

    #[test]
    #[ignore] // Requires audio hardware
    fn test_list_devices_filters_unusable_outputs() {
        let devices = list_devices().expect("Failed to list devices");
        for device in &devices {
            assert!(
                !device.to_lowercase().contains("surround"),
                "Should filter surround devices: {}",
                device
            );
            assert!(
                !device.to_lowercase().contains("hdmi"),
                "Should filter HDMI devices: {}",
                device
            );
        }
    }

    #[test]
    #[ignore] // Requires audio hardware
    fn test_create_with_default_device() {
        let recorder = CpalRecorder::new(RecorderConfig::default());
        assert!(
            recorder.is_ok(),
            "Failed to create recorder with default device"
        );
    }

    #[test]
    #[ignore] // Requires audio hardware
    fn test_record_returns_clip_in_configured_format() {
        let mut recorder =
            CpalRecorder::new(RecorderConfig::default()).expect("Failed to create recorder");

        let clip = recorder
            .record(Duration::from_millis(200))
            .expect("Failed to record");

        assert_eq!(clip.sample_rate(), 44_100);
        assert_eq!(clip.channels(), 2);
        assert!(!clip.is_empty());
    }

    #[test]
    #[ignore] // Requires audio hardware
    fn test_can_be_used_as_trait_object() {
        let mut recorder: Box<dyn Recorder> = Box::new(
            CpalRecorder::new(RecorderConfig::default()).expect("Failed to create recorder"),
        );
        assert!(recorder.record(Duration::from_millis(100)).is_ok());
    }
}
