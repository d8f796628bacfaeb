pub mod cpal_microphone;
