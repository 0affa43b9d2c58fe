//! Audio media handle

use crate::command::Invocation;
use crate::config::FfmpegConfig;
use crate::error::AudioResult;
use crate::filter::{AudioFilter, AudioFilters, FilterQueue};
use crate::format::AudioFormat;
use log::debug;
use std::path::{Path, PathBuf};

/// An audio file and the filters queued for it
#[derive(Debug, Clone)]
pub struct Audio {
    path: PathBuf,
    filters: FilterQueue,
}

impl Audio {
    /// Create a handle for the audio file at `path`
    ///
    /// The file is not opened; ffmpeg reports a missing input when run.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Audio {
            path: path.into(),
            filters: FilterQueue::new(),
        }
    }

    /// Path of the input file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Builder for queueing filters on this handle
    pub fn filters(&mut self) -> AudioFilters<'_> {
        AudioFilters::new(self)
    }

    /// Append a filter to the queue
    pub fn add_filter(&mut self, filter: impl Into<AudioFilter>) -> &mut Self {
        let filter = filter.into();
        debug!("Queued {} filter on {}", filter.name(), self.path.display());
        self.filters.push(filter);
        self
    }

    /// Filters queued so far, in call order
    pub fn filter_queue(&self) -> &FilterQueue {
        &self.filters
    }

    /// Assemble the ffmpeg invocation that writes `output` in `format`
    pub fn command(
        &self,
        format: &AudioFormat,
        output: impl AsRef<Path>,
        config: &FfmpegConfig,
    ) -> AudioResult<Invocation> {
        Invocation::build(self, format, output.as_ref(), config)
    }
}
