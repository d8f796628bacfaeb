/// Outcome of one translation attempt. This boundary never raises: every
/// fault is folded into `Failure`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TranslationResult {
    /// No target language was configured; no external call was made.
    Skipped,
    Success { text: String },
    Failure { message: String },
}

impl TranslationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, TranslationResult::Success { .. })
    }
}
