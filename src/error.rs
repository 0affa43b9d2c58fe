use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for filter and command operations
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors raised while turning queued filters into an ffmpeg invocation
#[derive(Error, Debug)]
pub enum AudioError {
    /// IO error (file checks, disk access)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Timecode string could not be parsed
    #[error("Invalid timecode: {0}")]
    InvalidTimecode(String),

    /// Invalid sample rate
    #[error("Invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate
        rate: u32,
    },

    /// Output format settings are inconsistent
    #[error("Invalid output format: {0}")]
    InvalidFormat(String),

    /// Unknown x264 preset
    #[error("Invalid preset: {0}")]
    InvalidPreset(String),

    /// Artwork image does not exist
    #[error("Artwork not found: {}", .0.display())]
    MissingArtwork(PathBuf),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
