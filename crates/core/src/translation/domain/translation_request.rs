/// One translation attempt. `target: None` means "perform no translation".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslationRequest {
    pub source_text: String,
    pub target: Option<String>,
}

impl TranslationRequest {
    pub fn new(source_text: &str, target: Option<&str>) -> Self {
        Self {
            source_text: source_text.to_string(),
            target: target.map(str::to_string),
        }
    }
}
