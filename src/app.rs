//! Voice translation application entry point.
//!
//! Wires configuration and CLI overrides into a concrete pipeline:
//! record → transcribe → translate → synthesize → present

use crate::audio::{CpalRecorder, RecorderConfig, suppress_audio_warnings};
use crate::config::{Config, ServicesConfig};
use crate::error::{ParloError, Result};
use crate::languages::{self, Language};
use crate::pipeline::{Pipeline, RunOutcome};
use crate::present::{HtmlPresenter, Presenter, TerminalPresenter};
use crate::services::{GoogleRecognizer, GoogleTts, GtxTranslator};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Run the translate command: record speech, transcribe it, translate it,
/// and speak the result.
///
/// # Arguments
/// * `config` - Base configuration (can be overridden by CLI args)
/// * `from` - Optional spoken-language selector from CLI (code or name)
/// * `to` - Target-language selector from CLI (code or name)
/// * `duration` - Optional recording-duration override from CLI
/// * `device` - Optional input-device override from CLI
/// * `html` - Write results to this HTML file instead of the terminal
/// * `no_play` - Skip speaker playback of the synthesized speech
/// * `quiet` - Suppress status messages
/// * `verbosity` - Verbosity level (0=default, 1=service diagnostics)
///
/// # Returns
/// The pipeline outcome, or an error if any fatal step fails. Recognition
/// failures are reported through the presenter and returned as clean
/// outcomes, not errors.
#[allow(clippy::too_many_arguments)]
pub async fn run_translate_command(
    mut config: Config,
    from: Option<String>,
    to: String,
    duration: Option<Duration>,
    device: Option<String>,
    html: Option<PathBuf>,
    no_play: bool,
    quiet: bool,
    verbosity: u8,
) -> Result<RunOutcome> {
    // Suppress noisy JACK/ALSA warnings before audio init
    suppress_audio_warnings();

    // Apply CLI overrides
    if let Some(d) = device {
        config.audio.device = Some(d);
    }
    if let Some(d) = duration {
        config.audio.duration_secs = d.as_secs();
    }
    if no_play {
        config.output.play = false;
    }

    let source = resolve_source_language(from.as_deref())?;
    let target = resolve_language(&to)?;

    let recorder = CpalRecorder::new(RecorderConfig {
        device: config.audio.device.clone(),
        ..Default::default()
    })?;

    let recognizer = build_recognizer(&config.services);
    let translator = GtxTranslator::new().with_base_url(&config.services.translator_url);
    let synthesizer = GoogleTts::new().with_base_url(&config.services.tts_url);
    let presenter = build_presenter(html.as_deref(), config.output.play)?;

    let mut pipeline = Pipeline::new(
        Box::new(recorder),
        Arc::new(recognizer),
        Arc::new(translator),
        Arc::new(synthesizer),
        presenter,
    )
    .with_duration(Duration::from_secs(config.audio.duration_secs))
    .with_quiet(quiet)
    .with_verbosity(verbosity);

    pipeline.run(source, target).await
}

/// Resolve a language selector (code or English name) against the registry.
fn resolve_language(selector: &str) -> Result<&'static Language> {
    languages::find(selector).ok_or_else(|| ParloError::UnknownLanguage {
        selector: selector.to_string(),
    })
}

/// Resolve the optional spoken-language selector.
///
/// Absence and "auto" both mean auto-detection.
fn resolve_source_language(selector: Option<&str>) -> Result<Option<&'static Language>> {
    match selector {
        None => Ok(None),
        Some(s) if s.trim().eq_ignore_ascii_case("auto") => Ok(None),
        Some(s) => resolve_language(s).map(Some),
    }
}

fn build_recognizer(services: &ServicesConfig) -> GoogleRecognizer {
    GoogleRecognizer::new(services.recognizer_api_key.clone().unwrap_or_default())
        .with_base_url(&services.recognizer_url)
}

/// Choose the presentation surface: an HTML page when requested, otherwise
/// the terminal.
fn build_presenter(html: Option<&Path>, play: bool) -> Result<Box<dyn Presenter>> {
    match html {
        Some(path) => {
            let file = File::create(path)?;
            Ok(Box::new(HtmlPresenter::new(BufWriter::new(file))))
        }
        None => {
            let presenter = if play {
                TerminalPresenter::new()
            } else {
                TerminalPresenter::new().without_playback()
            };
            Ok(Box::new(presenter))
        }
    }
}
