pub mod session;
pub mod session_config;
pub mod session_state;
pub mod transcribe_speech_use_case;
