//! Audio filter descriptors and the queue builder

/// Fluent filter builder
pub mod builder;
/// Time-range clipping
pub mod clip;
/// Still-image video
pub mod image_video;
/// Metadata tags
pub mod metadata;
/// Ordered filter storage
pub mod queue;
/// Sample rate conversion
pub mod resample;

pub use builder::AudioFilters;
pub use clip::ClipFilter;
pub use image_video::ImageVideoFilter;
pub use metadata::MetadataFilter;
pub use queue::FilterQueue;
pub use resample::ResampleFilter;

use crate::error::AudioResult;
use crate::format::AudioFormat;
use crate::media::Audio;
use std::path::{Path, PathBuf};

/// An extra input file a filter reads next to the audio
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterInput {
    options: Vec<String>,
    path: PathBuf,
}

impl FilterInput {
    /// Create an input; `options` go right before its `-i`
    pub fn new(options: Vec<String>, path: impl Into<PathBuf>) -> Self {
        FilterInput {
            options,
            path: path.into(),
        }
    }

    /// Path of the input file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Input options followed by `-i <path>`
    pub fn args(&self) -> Vec<String> {
        let mut args = self.options.clone();
        args.push("-i".to_string());
        args.push(self.path.to_string_lossy().into_owned());
        args
    }
}

/// Trait for filters that contribute ffmpeg arguments
pub trait Filter {
    /// Output options this filter adds to the invocation
    fn apply(&self, audio: &Audio, format: &AudioFormat) -> AudioResult<Vec<String>>;

    /// Extra input this filter needs, placed before every output option
    fn extra_input(&self) -> Option<FilterInput> {
        None
    }

    /// Filters with a higher priority are applied first
    fn priority(&self) -> i32 {
        0
    }
}

/// Any filter that can be queued on an [`Audio`] handle
#[derive(Debug, Clone, PartialEq)]
pub enum AudioFilter {
    /// Change the sample rate
    Resample(ResampleFilter),
    /// Write or strip metadata tags
    Metadata(MetadataFilter),
    /// Cut a time range
    Clip(ClipFilter),
    /// Turn the audio into a still-image video
    ImageVideo(ImageVideoFilter),
}

impl AudioFilter {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            AudioFilter::Resample(_) => "resample",
            AudioFilter::Metadata(_) => "metadata",
            AudioFilter::Clip(_) => "clip",
            AudioFilter::ImageVideo(_) => "image-video",
        }
    }

    fn inner(&self) -> &dyn Filter {
        match self {
            AudioFilter::Resample(f) => f,
            AudioFilter::Metadata(f) => f,
            AudioFilter::Clip(f) => f,
            AudioFilter::ImageVideo(f) => f,
        }
    }
}

impl Filter for AudioFilter {
    fn apply(&self, audio: &Audio, format: &AudioFormat) -> AudioResult<Vec<String>> {
        self.inner().apply(audio, format)
    }

    fn extra_input(&self) -> Option<FilterInput> {
        self.inner().extra_input()
    }

    fn priority(&self) -> i32 {
        self.inner().priority()
    }
}

impl From<ResampleFilter> for AudioFilter {
    fn from(filter: ResampleFilter) -> Self {
        AudioFilter::Resample(filter)
    }
}

impl From<MetadataFilter> for AudioFilter {
    fn from(filter: MetadataFilter) -> Self {
        AudioFilter::Metadata(filter)
    }
}

impl From<ClipFilter> for AudioFilter {
    fn from(filter: ClipFilter) -> Self {
        AudioFilter::Clip(filter)
    }
}

impl From<ImageVideoFilter> for AudioFilter {
    fn from(filter: ImageVideoFilter) -> Self {
        AudioFilter::ImageVideo(filter)
    }
}
