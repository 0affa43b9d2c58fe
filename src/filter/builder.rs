use super::{ClipFilter, ImageVideoFilter, MetadataFilter, ResampleFilter};
use crate::core::{MetadataFields, TimeCode};
use crate::media::Audio;
use std::path::PathBuf;

/// Fluent builder that queues filters on an [`Audio`] handle
///
/// Every method appends exactly one filter and returns the builder. Nothing
/// is validated here; bad values surface when the command is assembled.
///
/// ```
/// use ffmpeg_filters::{Audio, TimeCode};
///
/// let mut audio = Audio::new("song.flac");
/// audio
///     .filters()
///     .resample(44100)
///     .clip(TimeCode::new(0, 0, 30, 0), None)
///     .add_metadata(None);
/// assert_eq!(audio.filter_queue().len(), 3);
/// ```
#[derive(Debug)]
pub struct AudioFilters<'a> {
    media: &'a mut Audio,
}

impl<'a> AudioFilters<'a> {
    /// Create a builder bound to `media`
    pub fn new(media: &'a mut Audio) -> Self {
        AudioFilters { media }
    }

    /// Resamples the audio to `rate` Hz
    pub fn resample(&mut self, rate: u32) -> &mut Self {
        self.media.add_filter(ResampleFilter::new(rate));
        self
    }

    /// Writes the given metadata fields; `None` or an empty map strips all metadata
    ///
    /// Keys are normally `title`, `artist`, `composer`, `album`, `track`,
    /// `artwork` (an image path), `year`, `genre` and `description`.
    pub fn add_metadata(&mut self, fields: Option<MetadataFields>) -> &mut Self {
        self.media.add_filter(MetadataFilter::new(fields));
        self
    }

    /// Cuts the audio at `start`; without `duration` the clip runs to the end
    pub fn clip(&mut self, start: TimeCode, duration: Option<TimeCode>) -> &mut Self {
        self.media.add_filter(ClipFilter::new(start, duration));
        self
    }

    /// Adds `artwork_path` as a still image, turning the audio into a video
    pub fn image_video(
        &mut self,
        artwork_path: impl Into<PathBuf>,
        preset: Option<String>,
        extra_flags: Option<Vec<String>>,
    ) -> &mut Self {
        self.media
            .add_filter(ImageVideoFilter::new(artwork_path, preset, extra_flags));
        self
    }
}
