use super::FilterInput;
use crate::error::{AudioError, AudioResult};
use crate::format::AudioFormat;
use crate::media::Audio;
use std::path::{Path, PathBuf};

/// Preset used when none was given
pub const DEFAULT_PRESET: &str = "veryslow";

/// x264 presets, fastest first
pub const PRESETS: [&str; 10] = [
    "ultrafast",
    "superfast",
    "veryfast",
    "faster",
    "fast",
    "medium",
    "slow",
    "slower",
    "veryslow",
    "placebo",
];

/// Loops a still image over the audio to produce a video
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageVideoFilter {
    artwork_path: PathBuf,
    preset: Option<String>,
    extra_flags: Option<Vec<String>>,
}

impl ImageVideoFilter {
    /// Create an image-to-video filter
    ///
    /// # Arguments
    /// * `artwork_path` - Image shown for the whole length of the audio
    /// * `preset` - x264 speed/compression preset, [`DEFAULT_PRESET`] if unset
    /// * `extra_flags` - Arguments appended verbatim to the video encoding options
    pub fn new(
        artwork_path: impl Into<PathBuf>,
        preset: Option<String>,
        extra_flags: Option<Vec<String>>,
    ) -> Self {
        ImageVideoFilter {
            artwork_path: artwork_path.into(),
            preset,
            extra_flags,
        }
    }

    /// Path of the artwork image
    pub fn artwork_path(&self) -> &Path {
        &self.artwork_path
    }

    /// Preset as given, without the default applied
    pub fn preset(&self) -> Option<&str> {
        self.preset.as_deref()
    }

    /// Preset with the default applied
    pub fn effective_preset(&self) -> &str {
        self.preset.as_deref().unwrap_or(DEFAULT_PRESET)
    }

    /// Extra flags as given
    pub fn extra_flags(&self) -> Option<&[String]> {
        self.extra_flags.as_deref()
    }
}

impl super::Filter for ImageVideoFilter {
    fn apply(&self, _audio: &Audio, _format: &AudioFormat) -> AudioResult<Vec<String>> {
        if !self.artwork_path.is_file() {
            return Err(AudioError::MissingArtwork(self.artwork_path.clone()));
        }

        let preset = self.effective_preset();
        if !PRESETS.iter().any(|p| *p == preset) {
            return Err(AudioError::InvalidPreset(preset.to_string()));
        }

        let mut args: Vec<String> = ["-c:v", "libx264", "-preset", preset, "-tune", "stillimage"]
            .into_iter()
            .map(String::from)
            .collect();

        if let Some(flags) = &self.extra_flags {
            args.extend(flags.iter().cloned());
        }

        args.extend(
            ["-pix_fmt", "yuv420p", "-shortest"]
                .into_iter()
                .map(String::from),
        );

        Ok(args)
    }

    fn extra_input(&self) -> Option<FilterInput> {
        Some(FilterInput::new(
            vec!["-loop".to_string(), "1".to_string()],
            &self.artwork_path,
        ))
    }
}
