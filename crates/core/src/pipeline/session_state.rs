/// Mutable state of one interactive session.
///
/// Owned by the `Session` that mutates it; created per session rather than
/// process-wide so the flow can be reused across sessions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub last_transcript: String,
    /// Set if and only if the most recent translation attempt succeeded.
    pub last_translation: Option<String>,
    pub paused: bool,
}

impl SessionState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Observable resting phase of the session. `Recording` is not a resting
/// phase: recognition is one blocking call with no cancellation point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Paused,
    HasResult,
}
