//! Voice translation pipeline implementation.
//!
//! Orchestrates the complete flow:
//! record → transcribe → translate → synthesize → present
//!
//! Every stage runs exactly once per invocation, in order, with no
//! retries. The two scratch files (captured WAV, synthesized MP3) live
//! in a per-run temporary directory that is gone by the time `run`
//! returns, on every exit path.

use crate::audio::{AudioClip, Recorder};
use crate::defaults;
use crate::error::Result;
use crate::languages::Language;
use crate::present::Presenter;
use crate::services::{Recognition, SpeechToText, Synthesizer, Translator};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Per-run scratch directory holding the two pipeline temp files.
///
/// The directory name is unique per invocation, so concurrent runs cannot
/// collide. `close` removes it and surfaces removal errors; dropping an
/// unclosed session removes it best-effort instead.
pub struct ScratchSession {
    dir: tempfile::TempDir,
}

impl ScratchSession {
    /// Create the scratch directory under the system temp directory.
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new().prefix("parlo-").tempdir()?;
        Ok(Self { dir })
    }

    /// Create the scratch directory under a caller-chosen base directory.
    pub fn in_dir(base: &Path) -> Result<Self> {
        let dir = tempfile::Builder::new().prefix("parlo-").tempdir_in(base)?;
        Ok(Self { dir })
    }

    /// Path of the captured waveform file.
    pub fn wav_path(&self) -> PathBuf {
        self.dir.path().join(defaults::CAPTURE_FILE_NAME)
    }

    /// Path of the synthesized speech file.
    pub fn mp3_path(&self) -> PathBuf {
        self.dir.path().join(defaults::SPEECH_FILE_NAME)
    }

    /// The scratch directory itself.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Remove the directory and both files, surfacing removal errors.
    pub fn close(self) -> Result<()> {
        self.dir.close()?;
        Ok(())
    }
}

/// How a pipeline run ended.
///
/// Recognition failures are outcomes, not errors: the run completed, the
/// user saw the failure banner, and the process exits cleanly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Full pipeline success.
    Translated {
        transcript: String,
        translation: String,
    },
    /// The recognizer heard the clip but found no usable speech.
    NotRecognized,
    /// The recognition request itself failed.
    ServiceUnreachable,
}

/// The five-stage pipeline with its collaborators injected.
pub struct Pipeline {
    recorder: Box<dyn Recorder>,
    recognizer: Arc<dyn SpeechToText>,
    translator: Arc<dyn Translator>,
    synthesizer: Arc<dyn Synthesizer>,
    presenter: Box<dyn Presenter>,
    record_duration: Duration,
    scratch_root: Option<PathBuf>,
    quiet: bool,
    verbosity: u8,
}

impl Pipeline {
    pub fn new(
        recorder: Box<dyn Recorder>,
        recognizer: Arc<dyn SpeechToText>,
        translator: Arc<dyn Translator>,
        synthesizer: Arc<dyn Synthesizer>,
        presenter: Box<dyn Presenter>,
    ) -> Self {
        Self {
            recorder,
            recognizer,
            translator,
            synthesizer,
            presenter,
            record_duration: Duration::from_secs(defaults::RECORD_SECS),
            scratch_root: None,
            quiet: false,
            verbosity: 0,
        }
    }

    /// Record for a different duration than the default.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.record_duration = duration;
        self
    }

    /// Place the scratch directory under `root` instead of the system
    /// temp directory.
    pub fn with_scratch_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.scratch_root = Some(root.into());
        self
    }

    /// Suppress status lines.
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Set the verbosity level for extra diagnostics.
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    fn status(&self, message: &str) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }

    fn open_scratch(&self) -> Result<ScratchSession> {
        match &self.scratch_root {
            Some(root) => ScratchSession::in_dir(root),
            None => ScratchSession::new(),
        }
    }

    /// Run the pipeline once.
    ///
    /// `source` is the user-selected source language. It is passed to the
    /// recognizer as a language hint and to the translator in place of
    /// auto-detection. `target` is the language to translate into and
    /// speak.
    ///
    /// Recognition failures end the run early with a non-error outcome;
    /// every other failure is returned as an error. Errors from later
    /// stages drop the scratch session, which removes the directory on
    /// the way out.
    pub async fn run(
        &mut self,
        source: Option<&Language>,
        target: &Language,
    ) -> Result<RunOutcome> {
        let source_code = source.map(|lang| lang.code);

        self.status("Recording...");
        let clip = self.recorder.record(self.record_duration)?;

        let scratch = self.open_scratch()?;
        clip.save(&scratch.wav_path())?;

        self.status("Transcribing...");
        let captured = AudioClip::load(&scratch.wav_path())?;
        let recognition = self.recognizer.recognize(&captured, source_code).await?;

        let transcript = match recognition {
            Recognition::Transcript(text) => text,
            Recognition::NoSpeech => {
                self.presenter.error(defaults::NO_SPEECH_MESSAGE)?;
                scratch.close()?;
                return Ok(RunOutcome::NotRecognized);
            }
            Recognition::ServiceUnreachable { reason } => {
                self.presenter.error(defaults::SERVICE_UNREACHABLE_MESSAGE)?;
                if self.verbosity >= 1 {
                    eprintln!("  ({reason})");
                }
                scratch.close()?;
                return Ok(RunOutcome::ServiceUnreachable);
            }
        };
        self.presenter.transcript(&transcript)?;

        self.status("Translating...");
        let translation = self
            .translator
            .translate(&transcript, source_code, target.code)
            .await?;
        self.presenter.translation(&translation)?;

        self.status("Generating speech...");
        let audio = self.synthesizer.synthesize(&translation, target.code).await?;
        fs::write(scratch.mp3_path(), &audio)?;

        let speech = fs::read(scratch.mp3_path())?;
        self.presenter.audio(&speech, defaults::SPEECH_MIME)?;

        scratch.close()?;
        Ok(RunOutcome::Translated {
            transcript,
            translation,
        })
    }
}
