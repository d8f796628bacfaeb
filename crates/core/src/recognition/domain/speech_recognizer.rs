use thiserror::Error;

use crate::audio::domain::audio_clip::AudioClip;

#[derive(Error, Debug)]
pub enum RecognizeError {
    #[error("audio was not understood")]
    NotUnderstood,
    #[error("{0}")]
    Service(String),
}

/// Domain interface for a speech-recognition backend.
///
/// Implementations are constructed for one spoken language and perform a
/// single blocking request per call; retries are the caller's decision.
pub trait SpeechRecognizer: Send {
    fn transcribe(&self, clip: &AudioClip) -> Result<String, RecognizeError>;
}
