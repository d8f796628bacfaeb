use crate::recognition::domain::backend::Backend;
use crate::recognition::domain::recognizer_factory::RecognizerFactory;
use crate::recognition::domain::speech_recognizer::SpeechRecognizer;

use super::google_recognizer::GoogleRecognizer;
use super::sphinx_recognizer::SphinxRecognizer;

/// Creates the recognizer adapter for the selected backend.
pub struct DefaultRecognizerFactory;

impl RecognizerFactory for DefaultRecognizerFactory {
    fn create(
        &self,
        backend: Backend,
        spoken_language: &str,
    ) -> Option<Box<dyn SpeechRecognizer>> {
        log::info!("using {backend} recognition backend (lang={spoken_language})");
        match backend {
            Backend::Google => Some(Box::new(GoogleRecognizer::new(spoken_language))),
            Backend::Sphinx => Some(Box::new(SphinxRecognizer::new(spoken_language))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_covers_every_backend() {
        let factory = DefaultRecognizerFactory;
        for backend in Backend::ALL {
            assert!(factory.create(*backend, "fr-FR").is_some());
        }
    }
}
