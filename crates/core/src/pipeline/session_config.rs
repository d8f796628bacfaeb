use thiserror::Error;

use crate::recognition::domain::backend::Backend;
use crate::recognition::domain::recognition_request::{InvalidRequest, RecognitionRequest};
use crate::shared::constants::{SPOKEN_LANGUAGES, TRANSLATION_TARGETS};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unknown spoken language: '{0}'")]
    UnknownSpokenLanguage(String),
    #[error("unknown translation target: '{0}'")]
    UnknownTranslationTarget(String),
    #[error(transparent)]
    Invalid(#[from] InvalidRequest),
}

/// User-selected options for the session, validated against the enumerated
/// sets. Owned by the caller: a session `reset` clears transcript state but
/// leaves the configuration untouched.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    request: RecognitionRequest,
    translation_target: Option<String>,
}

impl SessionConfig {
    pub fn new(
        backend: Backend,
        spoken_language: &str,
        translation_target: Option<&str>,
        listen_timeout_secs: u64,
        max_duration_secs: u64,
    ) -> Result<Self, ConfigError> {
        if !SPOKEN_LANGUAGES.contains(&spoken_language) {
            return Err(ConfigError::UnknownSpokenLanguage(
                spoken_language.to_string(),
            ));
        }
        if let Some(target) = translation_target {
            if !TRANSLATION_TARGETS.contains(&target) {
                return Err(ConfigError::UnknownTranslationTarget(target.to_string()));
            }
        }
        let request = RecognitionRequest::new(
            backend,
            spoken_language,
            listen_timeout_secs,
            max_duration_secs,
        )?;
        Ok(Self {
            request,
            translation_target: translation_target.map(str::to_string),
        })
    }

    pub fn recognition_request(&self) -> &RecognitionRequest {
        &self.request
    }

    pub fn translation_target(&self) -> Option<&str> {
        self.translation_target.as_deref()
    }
}
