use std::time::Duration;

use thiserror::Error;

use super::audio_clip::AudioClip;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("no speech detected within {0:?}")]
    Timeout(Duration),
    #[error("audio input device error: {0}")]
    Device(String),
}

/// Domain interface for acquiring one bounded phrase from an input device.
///
/// `listen_timeout` bounds the wait for speech to begin; `max_duration`
/// bounds the phrase once speech has started. Implementations must release
/// the device handle on every exit path.
pub trait AudioSource: Send {
    fn capture(
        &self,
        listen_timeout: Duration,
        max_duration: Duration,
    ) -> Result<AudioClip, CaptureError>;
}
