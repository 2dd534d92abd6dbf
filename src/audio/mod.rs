//! Audio capture, clip handling, and playback.

#[cfg(feature = "capture")]
pub mod capture;
pub mod clip;
#[cfg(feature = "playback")]
pub mod playback;
pub mod recorder;

#[cfg(feature = "capture")]
pub use capture::{CpalRecorder, list_devices, suppress_audio_warnings};
pub use clip::AudioClip;
#[cfg(feature = "playback")]
pub use playback::play_bytes;
pub use recorder::{MockRecorder, Recorder, RecorderConfig};
