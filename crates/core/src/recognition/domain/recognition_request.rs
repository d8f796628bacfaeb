use std::time::Duration;

use thiserror::Error;

use super::backend::Backend;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InvalidRequest {
    #[error("listen timeout must be at least 1 second")]
    ListenTimeoutTooShort,
    #[error("max phrase duration must be at least 1 second")]
    MaxDurationTooShort,
}

/// Parameters for one recognition attempt. Immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecognitionRequest {
    backend: Backend,
    spoken_language: String,
    listen_timeout_secs: u64,
    max_duration_secs: u64,
}

impl RecognitionRequest {
    pub fn new(
        backend: Backend,
        spoken_language: &str,
        listen_timeout_secs: u64,
        max_duration_secs: u64,
    ) -> Result<Self, InvalidRequest> {
        if listen_timeout_secs < 1 {
            return Err(InvalidRequest::ListenTimeoutTooShort);
        }
        if max_duration_secs < 1 {
            return Err(InvalidRequest::MaxDurationTooShort);
        }
        Ok(Self {
            backend,
            spoken_language: spoken_language.to_string(),
            listen_timeout_secs,
            max_duration_secs,
        })
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn spoken_language(&self) -> &str {
        &self.spoken_language
    }

    pub fn listen_timeout(&self) -> Duration {
        Duration::from_secs(self.listen_timeout_secs)
    }

    pub fn max_duration(&self) -> Duration {
        Duration::from_secs(self.max_duration_secs)
    }
}
