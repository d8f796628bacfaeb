use crate::audio::domain::audio_source::AudioSource;
use crate::recognition::domain::recognition_request::RecognitionRequest;
use crate::recognition::domain::recognition_result::RecognitionResult;
use crate::recognition::domain::recognizer_factory::RecognizerFactory;
use crate::recognition::domain::speech_recognizer::RecognizeError;
use crate::translation::domain::translation_request::TranslationRequest;
use crate::translation::domain::translation_result::TranslationResult;
use crate::translation::domain::translator::Translator;

/// Capture-recognize-translate flow over injected adapters.
///
/// Every method performs exactly one attempt; retrying is the user's
/// decision, not this layer's.
pub struct TranscribeSpeechUseCase {
    source: Box<dyn AudioSource>,
    recognizers: Box<dyn RecognizerFactory>,
    translator: Box<dyn Translator>,
}

impl TranscribeSpeechUseCase {
    pub fn new(
        source: Box<dyn AudioSource>,
        recognizers: Box<dyn RecognizerFactory>,
        translator: Box<dyn Translator>,
    ) -> Self {
        Self {
            source,
            recognizers,
            translator,
        }
    }

    /// One bounded capture routed to the selected backend.
    ///
    /// The backend is resolved before capture so an unsupported selection
    /// never touches the input device. Capture faults are folded into
    /// `BackendError`, mirroring the rest of the failure taxonomy.
    pub fn recognize(&self, request: &RecognitionRequest) -> RecognitionResult {
        let recognizer = match self
            .recognizers
            .create(request.backend(), request.spoken_language())
        {
            Some(recognizer) => recognizer,
            None => return RecognitionResult::UnsupportedBackend,
        };

        let clip = match self
            .source
            .capture(request.listen_timeout(), request.max_duration())
        {
            Ok(clip) => clip,
            Err(e) => {
                return RecognitionResult::BackendError {
                    message: e.to_string(),
                }
            }
        };

        log::info!(
            "recognizing {:.1}s clip with {} backend",
            clip.duration(),
            request.backend()
        );
        match recognizer.transcribe(&clip) {
            Ok(text) => RecognitionResult::Success { text },
            Err(RecognizeError::NotUnderstood) => RecognitionResult::NotUnderstood,
            Err(RecognizeError::Service(message)) => RecognitionResult::BackendError { message },
        }
    }

    /// Translate recognized text, or skip when no target is configured.
    /// Faults never escape this boundary.
    pub fn translate(&self, request: &TranslationRequest) -> TranslationResult {
        let target = match request.target.as_deref() {
            Some(target) => target,
            None => return TranslationResult::Skipped,
        };
        if request.source_text.trim().is_empty() {
            return TranslationResult::Failure {
                message: "nothing to translate".to_string(),
            };
        }
        match self.translator.translate(&request.source_text, target) {
            Ok(text) => TranslationResult::Success { text },
            Err(e) => TranslationResult::Failure {
                message: e.to_string(),
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::test_support::{StubFactory, StubSource, StubTranslator};
    use super::*;
    use crate::recognition::domain::backend::Backend;
    use crate::recognition::domain::speech_recognizer::RecognizeError;

    fn request() -> RecognitionRequest {
        RecognitionRequest::new(Backend::Google, "fr-FR", 1, 60).unwrap()
    }

    fn use_case(
        source: StubSource,
        factory: StubFactory,
        translator: StubTranslator,
    ) -> TranscribeSpeechUseCase {
        TranscribeSpeechUseCase::new(Box::new(source), Box::new(factory), Box::new(translator))
    }

    #[test]
    fn test_unsupported_backend_does_not_attempt_capture() {
        let (source, captures) = StubSource::ok();
        let (translator, _) = StubTranslator::returning_hello_world();
        let uc = use_case(source, StubFactory { recognizer: None }, translator);

        let result = uc.recognize(&request());

        assert_eq!(result, RecognitionResult::UnsupportedBackend);
        assert_eq!(captures.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_successful_recognition_returns_text() {
        let (source, captures) = StubSource::ok();
        let (translator, _) = StubTranslator::returning_hello_world();
        let factory = StubFactory {
            recognizer: Some(|| Ok("bonjour le monde".to_string())),
        };
        let uc = use_case(source, factory, translator);

        let result = uc.recognize(&request());

        assert_eq!(
            result,
            RecognitionResult::Success {
                text: "bonjour le monde".to_string()
            }
        );
        assert_eq!(captures.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_not_understood_is_classified() {
        let (source, _) = StubSource::ok();
        let (translator, _) = StubTranslator::returning_hello_world();
        let factory = StubFactory {
            recognizer: Some(|| Err(RecognizeError::NotUnderstood)),
        };
        let uc = use_case(source, factory, translator);

        assert_eq!(uc.recognize(&request()), RecognitionResult::NotUnderstood);
    }

    #[test]
    fn test_service_fault_maps_to_backend_error() {
        let (source, _) = StubSource::ok();
        let (translator, _) = StubTranslator::returning_hello_world();
        let factory = StubFactory {
            recognizer: Some(|| Err(RecognizeError::Service("quota exceeded".to_string()))),
        };
        let uc = use_case(source, factory, translator);

        let result = uc.recognize(&request());
        assert_eq!(
            result,
            RecognitionResult::BackendError {
                message: "quota exceeded".to_string()
            }
        );
    }

    #[test]
    fn test_capture_timeout_maps_to_backend_error() {
        let (source, captures) = StubSource::timing_out();
        let (translator, _) = StubTranslator::returning_hello_world();
        let factory = StubFactory {
            recognizer: Some(|| Ok("unused".to_string())),
        };
        let uc = use_case(source, factory, translator);

        let result = uc.recognize(&request());
        assert!(matches!(result, RecognitionResult::BackendError { .. }));
        assert_eq!(captures.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_translate_without_target_is_skipped_with_no_call() {
        let (source, _) = StubSource::ok();
        let (translator, calls) = StubTranslator::returning_hello_world();
        let factory = StubFactory { recognizer: None };
        let uc = use_case(source, factory, translator);

        let result = uc.translate(&TranslationRequest::new("bonjour", None));

        assert_eq!(result, TranslationResult::Skipped);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_translate_empty_text_is_failure_without_call() {
        let (source, _) = StubSource::ok();
        let (translator, calls) = StubTranslator::returning_hello_world();
        let uc = use_case(source, StubFactory { recognizer: None }, translator);

        let result = uc.translate(&TranslationRequest::new("   ", Some("en")));

        assert!(matches!(result, TranslationResult::Failure { .. }));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_translate_success() {
        let (source, _) = StubSource::ok();
        let (translator, calls) = StubTranslator::returning_hello_world();
        let uc = use_case(source, StubFactory { recognizer: None }, translator);

        let result = uc.translate(&TranslationRequest::new("bonjour le monde", Some("en")));

        assert_eq!(
            result,
            TranslationResult::Success {
                text: "hello world".to_string()
            }
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_translate_fault_becomes_failure() {
        let (source, _) = StubSource::ok();
        let (translator, _) = StubTranslator::failing();
        let uc = use_case(source, StubFactory { recognizer: None }, translator);

        let result = uc.translate(&TranslationRequest::new("bonjour", Some("en")));

        assert_eq!(
            result,
            TranslationResult::Failure {
                message: "service unavailable".to_string()
            }
        );
    }
}
