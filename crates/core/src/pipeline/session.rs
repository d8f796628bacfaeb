use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::persistence::domain::file_opener::FileOpener;
use crate::persistence::infrastructure::transcript_store::{self, StoreError};
use crate::recognition::domain::recognition_result::RecognitionResult;
use crate::translation::domain::translation_request::TranslationRequest;
use crate::translation::domain::translation_result::TranslationResult;

use super::session_config::SessionConfig;
use super::session_state::{SessionPhase, SessionState};
use super::transcribe_speech_use_case::TranscribeSpeechUseCase;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    Completed,
    /// The session was paused; no capture was attempted.
    Blocked,
}

#[derive(Debug)]
pub struct SaveOutcome {
    pub path: PathBuf,
    /// Set when the transcript was written but the OS-default open failed.
    pub open_error: Option<String>,
}

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("no transcript to save")]
    NothingToSave,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One interactive transcription session.
///
/// Owns the session state and drives the capture/recognize/translate flow in
/// response to user actions. Execution is synchronous: `start` blocks the
/// caller for up to listen timeout plus max phrase duration, and pausing
/// only gates future starts — it never interrupts a call in flight.
pub struct Session {
    state: SessionState,
    has_result: bool,
    flow: TranscribeSpeechUseCase,
    opener: Box<dyn FileOpener>,
}

impl Session {
    pub fn new(flow: TranscribeSpeechUseCase, opener: Box<dyn FileOpener>) -> Self {
        Self {
            state: SessionState::default(),
            has_result: false,
            flow,
            opener,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> SessionPhase {
        if self.state.paused {
            SessionPhase::Paused
        } else if self.has_result {
            SessionPhase::HasResult
        } else {
            SessionPhase::Idle
        }
    }

    /// Run one recognition attempt and update the state with its outcome.
    ///
    /// On success the transcript holds the recognized text and, when a
    /// target is configured and translation succeeds, the translation is
    /// stored alongside. On any failure the transcript holds the failure's
    /// user-facing message and the translation is cleared.
    pub fn start(&mut self, config: &SessionConfig) -> StartOutcome {
        if self.state.paused {
            log::info!("session is paused; start ignored");
            return StartOutcome::Blocked;
        }

        let result = self.flow.recognize(config.recognition_request());
        match &result {
            RecognitionResult::Success { text } => {
                self.state.last_transcript = text.clone();
                self.state.last_translation = match self.flow.translate(
                    &TranslationRequest::new(text, config.translation_target()),
                ) {
                    TranslationResult::Success { text } => Some(text),
                    TranslationResult::Skipped => None,
                    TranslationResult::Failure { message } => {
                        log::warn!("translation failed: {message}");
                        None
                    }
                };
            }
            failure => {
                log::warn!("recognition attempt failed: {failure:?}");
                self.state.last_transcript = failure.user_message();
                self.state.last_translation = None;
            }
        }
        self.has_result = true;
        StartOutcome::Completed
    }

    pub fn pause(&mut self) {
        self.state.paused = true;
    }

    pub fn resume(&mut self) {
        self.state.paused = false;
    }

    /// Clear all session state back to initial values. The configuration is
    /// owned by the caller and survives.
    pub fn reset(&mut self) {
        self.state.reset();
        self.has_result = false;
    }

    /// Persist the current transcript and ask the host to open the file.
    /// A failed open is reported but does not invalidate the save.
    pub fn save(&self, path: &Path) -> Result<SaveOutcome, SaveError> {
        if self.state.last_transcript.is_empty() {
            return Err(SaveError::NothingToSave);
        }
        let path = transcript_store::save(&self.state.last_transcript, path)?;
        let open_error = self.opener.open(&path).err().map(|e| e.to_string());
        if let Some(message) = &open_error {
            log::warn!("could not open {}: {message}", path.display());
        }
        Ok(SaveOutcome { path, open_error })
    }
}
