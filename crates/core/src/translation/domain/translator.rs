use thiserror::Error;

#[derive(Error, Debug)]
#[error("{0}")]
pub struct TranslateError(pub String);

/// Domain interface for an external text-translation capability.
pub trait Translator: Send {
    fn translate(&self, text: &str, target_language: &str) -> Result<String, TranslateError>;
}
