use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to write transcript to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write the transcript as UTF-8 text, overwriting any previous file of the
/// same name. No append, no versioning.
pub fn save(text: &str, path: &Path) -> Result<PathBuf, StoreError> {
    fs::write(path, text).map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_writes_exact_contents() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("transcription.txt");
        save("hello", &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_save_is_idempotent_for_identical_text() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("transcription.txt");
        save("bonjour le monde", &path).unwrap();
        let first = fs::read(&path).unwrap();
        save("bonjour le monde", &path).unwrap();
        assert_eq!(fs::read(&path).unwrap(), first);
    }

    #[test]
    fn test_save_overwrites_previous_transcript() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("transcription.txt");
        save("a much longer first transcript", &path).unwrap();
        save("short", &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_save_to_unwritable_location_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing-dir").join("transcription.txt");
        let err = save("hello", &path).unwrap_err();
        assert!(err.to_string().contains("failed to write transcript"));
    }
}
