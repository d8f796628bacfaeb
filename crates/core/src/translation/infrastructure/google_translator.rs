use std::time::Duration;

use crate::shared::constants::GOOGLE_TRANSLATE_ENDPOINT;
use crate::translation::domain::translator::{TranslateError, Translator};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Translator backed by the public Google Translate web endpoint.
pub struct GoogleTranslator;

impl GoogleTranslator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GoogleTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator for GoogleTranslator {
    fn translate(&self, text: &str, target_language: &str) -> Result<String, TranslateError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TranslateError(e.to_string()))?;

        log::debug!("translating {} chars to '{target_language}'", text.len());
        let response = client
            .get(GOOGLE_TRANSLATE_ENDPOINT)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target_language),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .map_err(|e| TranslateError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError(format!(
                "translation service returned HTTP {status}"
            )));
        }

        let body = response.text().map_err(|e| TranslateError(e.to_string()))?;
        parse_translation(&body)
    }
}

/// The endpoint answers with nested arrays: `[[[translated, original, ...],
/// ...], ...]`. Long inputs come back split into segments, which are
/// concatenated here.
fn parse_translation(body: &str) -> Result<String, TranslateError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| TranslateError(format!("malformed translation response: {e}")))?;
    let segments = value
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| TranslateError("unexpected translation response shape".to_string()))?;

    let mut translated = String::new();
    for segment in segments {
        if let Some(part) = segment.get(0).and_then(|v| v.as_str()) {
            translated.push_str(part);
        }
    }
    if translated.is_empty() {
        return Err(TranslateError("translation response was empty".to_string()));
    }
    Ok(translated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_translation_single_segment() {
        let body = r#"[[["hello world","bonjour le monde",null,null,10]],null,"fr"]"#;
        assert_eq!(parse_translation(body).unwrap(), "hello world");
    }

    #[test]
    fn test_parse_translation_concatenates_segments() {
        let body = r#"[[["hello ","bonjour ",null],["world","le monde",null]],null,"fr"]"#;
        assert_eq!(parse_translation(body).unwrap(), "hello world");
    }

    #[test]
    fn test_parse_translation_rejects_unexpected_shape() {
        let err = parse_translation(r#"{"error":"quota"}"#).unwrap_err();
        assert!(err.to_string().contains("unexpected"));
    }

    #[test]
    fn test_parse_translation_rejects_malformed_json() {
        assert!(parse_translation("<html>").is_err());
    }

    #[test]
    #[ignore] // Requires network access
    fn test_translate_round_trip_against_live_endpoint() {
        let translator = GoogleTranslator::new();
        let result = translator.translate("bonjour", "en");
        assert!(result.is_ok(), "translation failed: {result:?}");
    }
}
