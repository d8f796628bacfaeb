/// Outcome of one recognition attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecognitionResult {
    Success { text: String },
    /// The backend heard audio but could not make out any words.
    NotUnderstood,
    /// Service, network, device, or resource fault.
    BackendError { message: String },
    /// No adapter exists for the requested backend. Unreachable through the
    /// typed configuration surface; kept as a defensive variant.
    UnsupportedBackend,
}

impl RecognitionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, RecognitionResult::Success { .. })
    }

    /// Text shown to the user in place of a transcript when the attempt
    /// did not produce one.
    pub fn user_message(&self) -> String {
        match self {
            RecognitionResult::Success { text } => text.clone(),
            RecognitionResult::NotUnderstood => {
                "Sorry, I did not understand that.".to_string()
            }
            RecognitionResult::BackendError { message } => {
                format!("Speech recognition error: {message}")
            }
            RecognitionResult::UnsupportedBackend => {
                "Unsupported recognition backend.".to_string()
            }
        }
    }
}
