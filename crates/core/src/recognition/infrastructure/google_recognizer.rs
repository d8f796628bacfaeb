use std::time::Duration;

use reqwest::header::CONTENT_TYPE;

use crate::audio::domain::audio_clip::AudioClip;
use crate::recognition::domain::speech_recognizer::{RecognizeError, SpeechRecognizer};
use crate::shared::constants::{GOOGLE_SPEECH_API_KEY_ENV, GOOGLE_SPEECH_ENDPOINT};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Speech recognizer backed by the Google speech HTTP endpoint.
///
/// Sends the captured phrase as raw 16-bit PCM and parses the
/// newline-delimited JSON response. The API key is read from the
/// environment; no key ships with the source.
pub struct GoogleRecognizer {
    language: String,
    api_key: Option<String>,
}

impl GoogleRecognizer {
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
            api_key: std::env::var(GOOGLE_SPEECH_API_KEY_ENV).ok(),
        }
    }

    pub fn with_api_key(language: &str, api_key: &str) -> Self {
        Self {
            language: language.to_string(),
            api_key: Some(api_key.to_string()),
        }
    }
}

impl SpeechRecognizer for GoogleRecognizer {
    fn transcribe(&self, clip: &AudioClip) -> Result<String, RecognizeError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            RecognizeError::Service(format!(
                "no Google speech API key configured; set {GOOGLE_SPEECH_API_KEY_ENV}"
            ))
        })?;

        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| RecognizeError::Service(e.to_string()))?;

        log::debug!(
            "sending {:.1}s clip to Google speech endpoint (lang={})",
            clip.duration(),
            self.language
        );
        let response = client
            .post(GOOGLE_SPEECH_ENDPOINT)
            .query(&[
                ("client", "chromium"),
                ("lang", self.language.as_str()),
                ("key", api_key),
            ])
            .header(
                CONTENT_TYPE,
                format!("audio/l16; rate={}", clip.sample_rate()),
            )
            .body(clip.pcm_bytes())
            .send()
            .map_err(|e| RecognizeError::Service(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecognizeError::Service(format!(
                "recognition service returned HTTP {status}"
            )));
        }

        let body = response
            .text()
            .map_err(|e| RecognizeError::Service(e.to_string()))?;
        parse_transcript(&body)?.ok_or(RecognizeError::NotUnderstood)
    }
}

/// The endpoint streams one JSON object per line; the first lines are often
/// empty `{"result":[]}` placeholders. Returns the first alternative of the
/// first non-empty result, or `None` when nothing was recognized.
fn parse_transcript(body: &str) -> Result<Option<String>, RecognizeError> {
    for line in body.lines().filter(|l| !l.trim().is_empty()) {
        let value: serde_json::Value = serde_json::from_str(line)
            .map_err(|e| RecognizeError::Service(format!("malformed service response: {e}")))?;
        let results = match value.get("result").and_then(|r| r.as_array()) {
            Some(results) => results,
            None => continue,
        };
        for result in results {
            let transcript = result
                .get("alternative")
                .and_then(|a| a.as_array())
                .and_then(|a| a.first())
                .and_then(|alt| alt.get("transcript"))
                .and_then(|t| t.as_str());
            if let Some(text) = transcript {
                return Ok(Some(text.to_string()));
            }
        }
    }
    Ok(None)
}
