use super::backend::Backend;
use super::speech_recognizer::SpeechRecognizer;

/// Resolves a backend selection to a recognizer for the given language.
///
/// Returns `None` when no adapter is available for the backend; the caller
/// must treat that as an unsupported configuration without touching the
/// input device.
pub trait RecognizerFactory: Send {
    fn create(&self, backend: Backend, spoken_language: &str) -> Option<Box<dyn SpeechRecognizer>>;
}
