//! Speaker playback of synthesized speech.

use crate::error::{ParloError, Result};
use std::io::Cursor;

/// Play compressed audio bytes through the default output device, blocking
/// until playback finishes.
///
/// Decoding happens before the output device is opened, so malformed bytes
/// fail fast without touching audio hardware.
///
/// # Errors
/// Returns `ParloError::Playback` if the bytes cannot be decoded or no
/// output device is available.
pub fn play_bytes(bytes: Vec<u8>) -> Result<()> {
    let source = rodio::Decoder::new(Cursor::new(bytes)).map_err(|e| ParloError::Playback {
        message: format!("Failed to decode audio: {}", e),
    })?;

    let (_stream, handle) =
        rodio::OutputStream::try_default().map_err(|e| ParloError::Playback {
            message: format!("No output device: {}", e),
        })?;
    let sink = rodio::Sink::try_new(&handle).map_err(|e| ParloError::Playback {
        message: format!("Failed to open playback sink: {}", e),
    })?;

    sink.append(source);
    sink.sleep_until_end();
    Ok(())
}
