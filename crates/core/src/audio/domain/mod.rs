pub mod audio_clip;
pub mod audio_source;
