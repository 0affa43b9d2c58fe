//! Settings for the ffmpeg invocation

use crate::error::{AudioError, AudioResult};
use std::env;
use std::path::PathBuf;

/// Environment variable naming the ffmpeg binary
pub const BINARY_ENV: &str = "FFMPEG_BINARY";
/// Environment variable holding the encoder thread count
pub const THREADS_ENV: &str = "FFMPEG_THREADS";

/// How ffmpeg is invoked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfmpegConfig {
    /// Program to run
    pub binary: PathBuf,
    /// Overwrite the output file without asking (`-y`)
    pub overwrite: bool,
    /// Encoder threads, ffmpeg decides if unset
    pub threads: Option<u32>,
}

impl Default for FfmpegConfig {
    fn default() -> Self {
        FfmpegConfig {
            binary: PathBuf::from("ffmpeg"),
            overwrite: true,
            threads: None,
        }
    }
}

impl FfmpegConfig {
    /// Defaults overridden by `FFMPEG_BINARY` and `FFMPEG_THREADS`
    pub fn from_env() -> AudioResult<Self> {
        Self::from_vars(env::var(BINARY_ENV).ok(), env::var(THREADS_ENV).ok())
    }

    fn from_vars(binary: Option<String>, threads: Option<String>) -> AudioResult<Self> {
        let mut config = FfmpegConfig::default();

        if let Some(binary) = binary.filter(|b| !b.trim().is_empty()) {
            config.binary = PathBuf::from(binary);
        }

        if let Some(threads) = threads {
            let threads = threads.trim().parse::<u32>().map_err(|_| {
                AudioError::ConfigError(format!("{THREADS_ENV} must be a number, got '{threads}'"))
            })?;
            config.threads = Some(threads);
        }

        Ok(config)
    }

    /// Set the ffmpeg binary
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Set the thread count
    pub fn with_threads(mut self, threads: u32) -> Self {
        self.threads = Some(threads);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FfmpegConfig::from_vars(None, None).unwrap();
        assert_eq!(config, FfmpegConfig::default());
        assert_eq!(config.binary, PathBuf::from("ffmpeg"));
        assert!(config.overwrite);
    }

    #[test]
    fn test_env_overrides() {
        let config = FfmpegConfig::from_vars(
            Some("/opt/ffmpeg/bin/ffmpeg".to_string()),
            Some(" 4 ".to_string()),
        )
        .unwrap();
        assert_eq!(config.binary, PathBuf::from("/opt/ffmpeg/bin/ffmpeg"));
        assert_eq!(config.threads, Some(4));
    }

    #[test]
    fn test_bad_threads() {
        let result = FfmpegConfig::from_vars(None, Some("many".to_string()));
        assert!(matches!(result, Err(AudioError::ConfigError(_))));
    }
}
