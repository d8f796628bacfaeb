use std::fmt;
use std::str::FromStr;

/// Closed set of speech-recognition backends.
///
/// Dispatch happens over this enum, so an unsupported backend cannot reach
/// the recognition flow from typed code; only string parsing can reject.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Google,
    Sphinx,
}

impl Backend {
    pub const ALL: &'static [Backend] = &[Backend::Google, Backend::Sphinx];

    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Google => "google",
            Backend::Sphinx => "sphinx",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "google" => Ok(Backend::Google),
            "sphinx" => Ok(Backend::Sphinx),
            other => Err(format!("unsupported recognition backend: '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("google", Backend::Google)]
    #[case("Google", Backend::Google)]
    #[case("sphinx", Backend::Sphinx)]
    #[case("SPHINX", Backend::Sphinx)]
    fn test_parse_known_backends(#[case] input: &str, #[case] expected: Backend) {
        assert_eq!(input.parse::<Backend>().unwrap(), expected);
    }

    #[rstest]
    #[case("deepspeech")]
    #[case("whisper")]
    #[case("")]
    fn test_parse_unknown_backend_fails(#[case] input: &str) {
        let err = input.parse::<Backend>().unwrap_err();
        assert!(err.contains("unsupported"));
    }

    #[test]
    fn test_display_round_trips() {
        for backend in Backend::ALL {
            assert_eq!(backend.as_str().parse::<Backend>().unwrap(), *backend);
        }
    }
}
