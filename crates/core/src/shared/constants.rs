/// Spoken-language locale codes offered by the configuration surface.
pub const SPOKEN_LANGUAGES: &[&str] = &["fr-FR", "en-US", "es-ES", "de-DE", "it-IT", "ar-SA"];

/// Translation target codes offered by the configuration surface.
/// The absence of a target (no translation) is modeled as `None`, not a code.
pub const TRANSLATION_TARGETS: &[&str] = &["en", "es", "de", "it", "ar"];

pub const DEFAULT_TRANSCRIPT_FILENAME: &str = "transcription.txt";

/// How long to wait for speech to begin before giving up.
pub const DEFAULT_LISTEN_TIMEOUT_SECS: u64 = 1;

/// Upper bound on one captured phrase once speech has begun.
pub const DEFAULT_MAX_DURATION_SECS: u64 = 60;

pub const CAPTURE_SAMPLE_RATE: u32 = 16000;

/// RMS level above which a capture window counts as speech.
pub const SPEECH_RMS_THRESHOLD: f32 = 0.015;

/// Trailing silence that ends a phrase before the duration cap is hit.
pub const TRAILING_SILENCE_MS: u64 = 800;

pub const GOOGLE_SPEECH_ENDPOINT: &str = "http://www.google.com/speech-api/v2/recognize";
pub const GOOGLE_SPEECH_API_KEY_ENV: &str = "GOOGLE_SPEECH_API_KEY";

pub const GOOGLE_TRANSLATE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Overrides the PocketSphinx resource root (default: platform data dir).
pub const POCKETSPHINX_HOME_ENV: &str = "POCKETSPHINX_HOME";
pub const POCKETSPHINX_BINARY: &str = "pocketsphinx_continuous";
