//! Output audio formats

use crate::error::{AudioError, AudioResult};
use std::fmt;
use std::str::FromStr;

/// Audio codecs ffmpeg can encode to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCodec {
    /// MP3 through LAME
    Mp3,
    /// FLAC
    Flac,
    /// 16-bit PCM in a WAV container
    Wav,
    /// AAC (native encoder)
    Aac,
    /// Ogg Vorbis
    Vorbis,
    /// Opus
    Opus,
}

impl AudioCodec {
    /// Encoder library name passed to `-acodec`
    pub fn encoder(&self) -> &'static str {
        match self {
            AudioCodec::Mp3 => "libmp3lame",
            AudioCodec::Flac => "flac",
            AudioCodec::Wav => "pcm_s16le",
            AudioCodec::Aac => "aac",
            AudioCodec::Vorbis => "libvorbis",
            AudioCodec::Opus => "libopus",
        }
    }

    /// Whether the codec has a bitrate setting
    pub fn is_lossless(&self) -> bool {
        matches!(self, AudioCodec::Flac | AudioCodec::Wav)
    }

    /// Default bitrate in kbps for lossy codecs
    pub fn default_kbps(&self) -> Option<u32> {
        match self {
            AudioCodec::Mp3 | AudioCodec::Aac | AudioCodec::Vorbis => Some(128),
            AudioCodec::Opus => Some(96),
            AudioCodec::Flac | AudioCodec::Wav => None,
        }
    }
}

impl FromStr for AudioCodec {
    type Err = AudioError;

    fn from_str(s: &str) -> AudioResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mp3" => Ok(AudioCodec::Mp3),
            "flac" => Ok(AudioCodec::Flac),
            "wav" => Ok(AudioCodec::Wav),
            "aac" => Ok(AudioCodec::Aac),
            "vorbis" | "ogg" => Ok(AudioCodec::Vorbis),
            "opus" => Ok(AudioCodec::Opus),
            other => Err(AudioError::InvalidFormat(format!("unknown codec: {other}"))),
        }
    }
}

impl fmt::Display for AudioCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AudioCodec::Mp3 => "mp3",
            AudioCodec::Flac => "flac",
            AudioCodec::Wav => "wav",
            AudioCodec::Aac => "aac",
            AudioCodec::Vorbis => "vorbis",
            AudioCodec::Opus => "opus",
        };
        f.write_str(name)
    }
}

/// Target format for the output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFormat {
    codec: AudioCodec,
    kbps: Option<u32>,
    channels: Option<u32>,
}

impl AudioFormat {
    /// Create a format with the codec's default bitrate
    pub fn new(codec: AudioCodec) -> Self {
        AudioFormat {
            codec,
            kbps: codec.default_kbps(),
            channels: None,
        }
    }

    /// Set bitrate in kbps
    pub fn with_kbps(mut self, kbps: u32) -> Self {
        self.kbps = Some(kbps);
        self
    }

    /// Set output channel count
    pub fn with_channels(mut self, channels: u32) -> Self {
        self.channels = Some(channels);
        self
    }

    /// Get the codec
    pub fn codec(&self) -> AudioCodec {
        self.codec
    }

    /// Get the bitrate in kbps, if any
    pub fn kbps(&self) -> Option<u32> {
        self.kbps
    }

    /// Get the channel count, if forced
    pub fn channels(&self) -> Option<u32> {
        self.channels
    }

    /// Arguments selecting codec, bitrate and channel count
    pub fn args(&self) -> AudioResult<Vec<String>> {
        let mut args = vec!["-acodec".to_string(), self.codec.encoder().to_string()];

        if let Some(kbps) = self.kbps {
            if self.codec.is_lossless() {
                return Err(AudioError::InvalidFormat(format!(
                    "{} does not take a bitrate",
                    self.codec
                )));
            }
            if kbps == 0 {
                return Err(AudioError::InvalidFormat("bitrate must be positive".to_string()));
            }
            args.push("-b:a".to_string());
            args.push(format!("{kbps}k"));
        }

        if let Some(channels) = self.channels {
            if channels == 0 {
                return Err(AudioError::InvalidFormat(
                    "channel count must be positive".to_string(),
                ));
            }
            args.push("-ac".to_string());
            args.push(channels.to_string());
        }

        Ok(args)
    }
}

impl Default for AudioFormat {
    fn default() -> Self {
        AudioFormat::new(AudioCodec::Mp3)
    }
}
