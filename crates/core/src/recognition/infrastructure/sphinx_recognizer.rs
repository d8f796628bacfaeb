use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::audio::domain::audio_clip::AudioClip;
use crate::recognition::domain::speech_recognizer::{RecognizeError, SpeechRecognizer};
use crate::shared::constants::{POCKETSPHINX_BINARY, POCKETSPHINX_HOME_ENV};

/// Locally-resolved PocketSphinx resources for one spoken language.
///
/// All three paths are derived deterministically from the language code
/// under a single resource root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SphinxResources {
    pub language_model: PathBuf,
    pub acoustic_model: PathBuf,
    pub dictionary: PathBuf,
}

impl SphinxResources {
    /// Resolve under `$POCKETSPHINX_HOME`, falling back to the platform
    /// data directory.
    pub fn resolve(language: &str) -> Self {
        Self::under(&default_root(), language)
    }

    pub fn under(root: &Path, language: &str) -> Self {
        let lang_dir = root.join(language);
        Self {
            language_model: lang_dir
                .join("language-model")
                .join(format!("{language}.lm.bin")),
            acoustic_model: lang_dir.join("acoustic-model"),
            dictionary: lang_dir.join("language-model").join(format!("{language}.dic")),
        }
    }

    /// All three resources must exist at recognition time.
    fn verify(&self) -> Result<(), RecognizeError> {
        for path in [&self.language_model, &self.acoustic_model, &self.dictionary] {
            if !path.exists() {
                return Err(RecognizeError::Service(format!(
                    "missing PocketSphinx resource: {}",
                    path.display()
                )));
            }
        }
        Ok(())
    }
}

fn default_root() -> PathBuf {
    if let Ok(home) = std::env::var(POCKETSPHINX_HOME_ENV) {
        return PathBuf::from(home);
    }
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pocketsphinx")
}

/// Offline speech recognizer shelling out to the `pocketsphinx_continuous`
/// binary over a temporary WAV file.
pub struct SphinxRecognizer {
    resources: SphinxResources,
}

impl SphinxRecognizer {
    pub fn new(language: &str) -> Self {
        Self {
            resources: SphinxResources::resolve(language),
        }
    }

    pub fn with_resources(resources: SphinxResources) -> Self {
        Self { resources }
    }
}

impl SpeechRecognizer for SphinxRecognizer {
    fn transcribe(&self, clip: &AudioClip) -> Result<String, RecognizeError> {
        self.resources.verify()?;

        let wav = clip
            .wav_bytes()
            .map_err(|e| RecognizeError::Service(format!("failed to encode clip: {e}")))?;
        let wav_path =
            std::env::temp_dir().join(format!("speechnote-{}.wav", std::process::id()));
        fs::write(&wav_path, wav)
            .map_err(|e| RecognizeError::Service(format!("failed to write temp clip: {e}")))?;

        let output = Command::new(POCKETSPHINX_BINARY)
            .arg("-infile")
            .arg(&wav_path)
            .arg("-hmm")
            .arg(&self.resources.acoustic_model)
            .arg("-lm")
            .arg(&self.resources.language_model)
            .arg("-dict")
            .arg(&self.resources.dictionary)
            .arg("-logfn")
            .arg(null_device())
            .output();
        let _ = fs::remove_file(&wav_path);

        let output = output.map_err(|e| {
            RecognizeError::Service(format!("failed to run {POCKETSPHINX_BINARY}: {e}"))
        })?;
        if !output.status.success() {
            return Err(RecognizeError::Service(format!(
                "{POCKETSPHINX_BINARY} exited with {}",
                output.status
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if text.is_empty() {
            Err(RecognizeError::NotUnderstood)
        } else {
            Ok(text)
        }
    }
}

fn null_device() -> &'static str {
    if cfg!(windows) {
        "NUL"
    } else {
        "/dev/null"
    }
}
