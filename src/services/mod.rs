//! Remote services: speech recognition, translation, and speech synthesis.
//!
//! Each service is a trait so the pipeline can run against mocks in tests;
//! the Google-backed clients implement them for real use.

pub mod google_stt;
pub mod google_translate;
pub mod google_tts;
pub mod recognizer;
pub mod synthesizer;
pub mod translator;

pub use google_stt::GoogleRecognizer;
pub use google_translate::GtxTranslator;
pub use google_tts::GoogleTts;
pub use recognizer::{MockSpeechToText, Recognition, SpeechToText};
pub use synthesizer::{MockSynthesizer, Synthesizer};
pub use translator::{MockTranslator, Translator};
