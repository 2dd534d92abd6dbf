//! Terminal rendition of pipeline results.
//!
//! Texts go to stdout, failure banners to stderr. Speaker playback stands
//! in for the browser's autoplay and can be switched off.

use owo_colors::OwoColorize;

use crate::error::Result;
use crate::present::presenter::Presenter;

pub struct TerminalPresenter {
    play: bool,
}

impl TerminalPresenter {
    pub fn new() -> Self {
        Self { play: true }
    }

    /// Builder method: print a note instead of playing the audio.
    pub fn without_playback(mut self) -> Self {
        self.play = false;
        self
    }
}

impl Default for TerminalPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for TerminalPresenter {
    fn transcript(&mut self, text: &str) -> Result<()> {
        println!("{}", "Original Text:".dimmed());
        println!("  {text}");
        Ok(())
    }

    fn translation(&mut self, text: &str) -> Result<()> {
        println!("{}", "Translated Text:".dimmed());
        println!("  {}", text.green());
        Ok(())
    }

    fn error(&mut self, message: &str) -> Result<()> {
        eprintln!("{}", message.red());
        Ok(())
    }

    fn audio(&mut self, bytes: &[u8], mime: &str) -> Result<()> {
        if !self.play {
            println!(
                "{}",
                format!("Speech ready ({mime}, {} bytes); playback disabled", bytes.len()).dimmed()
            );
            return Ok(());
        }

        #[cfg(feature = "playback")]
        {
            crate::audio::play_bytes(bytes.to_vec())
        }
        #[cfg(not(feature = "playback"))]
        {
            println!(
                "{}",
                format!("Speech ready ({mime}, {} bytes); built without playback", bytes.len())
                    .dimmed()
            );
            Ok(())
        }
    }

    fn name(&self) -> &'static str {
        "terminal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // stdout/stderr cannot be captured here; these verify the render paths
    // do not panic and return the expected results.

    #[test]
    fn test_text_events_succeed() {
        let mut presenter = TerminalPresenter::new();
        presenter.transcript("hello world").unwrap();
        presenter.translation("hola mundo").unwrap();
        presenter.error("Could not request results").unwrap();
    }

    #[test]
    fn test_audio_skipped_when_playback_disabled() {
        let mut presenter = TerminalPresenter::new().without_playback();
        presenter.audio(b"not real mp3", "audio/mpeg").unwrap();
    }

    #[cfg(feature = "playback")]
    #[test]
    fn test_audio_with_undecodable_bytes_fails() {
        // Decoding happens before any output device is opened, so this
        // fails the same way with or without audio hardware.
        let mut presenter = TerminalPresenter::new();
        let result = presenter.audio(&[0u8; 16], "audio/mpeg");
        assert!(result.is_err());
    }

    #[test]
    fn test_name() {
        let presenter = TerminalPresenter::new();
        assert_eq!(presenter.name(), "terminal");
    }
}
