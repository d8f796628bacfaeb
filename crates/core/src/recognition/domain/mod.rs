pub mod backend;
pub mod recognition_request;
pub mod recognition_result;
pub mod recognizer_factory;
pub mod speech_recognizer;
