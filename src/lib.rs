#![warn(missing_docs)]

//! # ffmpeg-filters: declarative audio filters for ffmpeg
//!
//! Queue transformations on an audio file, then assemble the ffmpeg command
//! line that performs them.
//!
//! ## Features
//!
//! - **Resample** - Change the sample rate
//! - **Metadata** - Write tags and cover art, or strip all metadata
//! - **Clip** - Cut a time range
//! - **Image video** - Loop a still image over the audio to make a video
//! - **CLI** - Print the ffmpeg invocation for a set of filters
//!
//! ## Quick Start
//!
//! ```
//! use ffmpeg_filters::{Audio, AudioFormat, FfmpegConfig, TimeCode};
//!
//! let mut audio = Audio::new("input.flac");
//! audio
//!     .filters()
//!     .resample(44100)
//!     .clip(TimeCode::new(0, 0, 30, 0), Some(TimeCode::new(0, 0, 15, 0)));
//!
//! let invocation = audio
//!     .command(&AudioFormat::default(), "clip.mp3", &FfmpegConfig::default())
//!     .unwrap();
//! assert_eq!(invocation.args()[..3], ["-y", "-i", "input.flac"]);
//! ```

/// Invocation assembly
pub mod command;
/// ffmpeg binary settings
pub mod config;
/// Core value types (timecodes, metadata keys)
pub mod core;
/// Error types
pub mod error;
/// Filter descriptors and the queue builder
pub mod filter;
/// Output formats
pub mod format;
/// Media handle
pub mod media;

pub use command::Invocation;
pub use config::FfmpegConfig;
pub use crate::core::{MetadataFields, MetadataKey, TimeCode};
pub use error::{AudioError, AudioResult};
pub use filter::{AudioFilter, AudioFilters, Filter};
pub use format::{AudioCodec, AudioFormat};
pub use media::Audio;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
