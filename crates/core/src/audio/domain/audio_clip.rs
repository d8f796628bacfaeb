use std::io::Cursor;

use hound::{SampleFormat, WavSpec, WavWriter};

/// One bounded phrase captured from the input device: signed 16-bit PCM.
#[derive(Clone, Debug, PartialEq)]
pub struct AudioClip {
    samples: Vec<i16>,
    sample_rate: u32,
    channels: u16,
}

impl AudioClip {
    pub fn new(samples: Vec<i16>, sample_rate: u32, channels: u16) -> Self {
        Self {
            samples,
            sample_rate,
            channels,
        }
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / (self.sample_rate as f64 * self.channels as f64)
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Raw little-endian PCM bytes, as sent to the Google speech endpoint.
    pub fn pcm_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.samples.len() * 2);
        for sample in &self.samples {
            bytes.extend_from_slice(&sample.to_le_bytes());
        }
        bytes
    }

    /// Encode the clip as an in-memory WAV file.
    pub fn wav_bytes(&self) -> Result<Vec<u8>, hound::Error> {
        let spec = WavSpec {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = WavWriter::new(&mut cursor, spec)?;
            for &sample in &self.samples {
                writer.write_sample(sample)?;
            }
            writer.finalize()?;
        }
        Ok(cursor.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_creates_clip_with_correct_fields() {
        let samples = vec![0i16; 16000];
        let clip = AudioClip::new(samples.clone(), 16000, 1);
        assert_eq!(clip.samples(), &samples[..]);
        assert_eq!(clip.sample_rate(), 16000);
        assert_eq!(clip.channels(), 1);
    }

    #[test]
    fn test_duration_mono() {
        let clip = AudioClip::new(vec![0; 48000], 16000, 1);
        assert_relative_eq!(clip.duration(), 3.0, epsilon = 0.001);
    }

    #[test]
    fn test_duration_stereo() {
        let clip = AudioClip::new(vec![0; 96000], 48000, 2);
        assert_relative_eq!(clip.duration(), 1.0, epsilon = 0.001);
    }

    #[test]
    fn test_pcm_bytes_little_endian() {
        let clip = AudioClip::new(vec![1, -2], 16000, 1);
        assert_eq!(clip.pcm_bytes(), vec![0x01, 0x00, 0xFE, 0xFF]);
    }

    #[test]
    fn test_wav_bytes_has_riff_header_and_samples() {
        let clip = AudioClip::new(vec![0; 100], 16000, 1);
        let bytes = clip.wav_bytes().unwrap();
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        // 44-byte canonical header plus two bytes per sample
        assert_eq!(bytes.len(), 44 + 200);
    }
}
