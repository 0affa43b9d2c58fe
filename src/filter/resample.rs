use crate::error::{AudioError, AudioResult};
use crate::format::AudioFormat;
use crate::media::Audio;

/// Resamples the audio to a target rate
///
/// The rate is stored unchecked; a zero rate is rejected when the filter is
/// applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResampleFilter {
    rate: u32,
}

impl ResampleFilter {
    /// Create a resample filter
    ///
    /// # Arguments
    /// * `rate` - Target sample rate in Hz
    pub fn new(rate: u32) -> Self {
        ResampleFilter { rate }
    }

    /// Get the target sample rate
    pub fn rate(&self) -> u32 {
        self.rate
    }
}

impl super::Filter for ResampleFilter {
    fn apply(&self, _audio: &Audio, _format: &AudioFormat) -> AudioResult<Vec<String>> {
        if self.rate == 0 {
            return Err(AudioError::InvalidSampleRate { rate: self.rate });
        }

        Ok(vec![
            "-ac".to_string(),
            "2".to_string(),
            "-ar".to_string(),
            self.rate.to_string(),
        ])
    }
}
