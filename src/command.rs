//! Turns a media handle and its filter queue into ffmpeg arguments

use crate::config::FfmpegConfig;
use crate::error::AudioResult;
use crate::filter::Filter;
use crate::format::AudioFormat;
use crate::media::Audio;
use log::debug;
use std::fmt;
use std::path::{Path, PathBuf};

/// A program and the arguments to run it with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: PathBuf,
    args: Vec<String>,
}

impl Invocation {
    /// Assemble the invocation for `audio`
    ///
    /// Layout: `[-y] -i <input> <extra inputs> [-threads n] [maps] <filters>
    /// <format> <output>`. Every input comes before the first output option;
    /// filters are applied in priority order.
    pub fn build(
        audio: &Audio,
        format: &AudioFormat,
        output: &Path,
        config: &FfmpegConfig,
    ) -> AudioResult<Self> {
        let mut inputs = Vec::new();
        let mut options = Vec::new();

        for filter in audio.filter_queue().by_priority() {
            let filter_args = filter.apply(audio, format)?;
            debug!("Applied {} filter: {:?}", filter.name(), filter_args);
            options.extend(filter_args);

            if let Some(input) = filter.extra_input() {
                debug!("{} filter reads {}", filter.name(), input.path().display());
                inputs.push(input);
            }
        }

        let mut args = Vec::new();
        if config.overwrite {
            args.push("-y".to_string());
        }
        args.push("-i".to_string());
        args.push(audio.path().to_string_lossy().into_owned());
        for input in &inputs {
            args.extend(input.args());
        }

        if let Some(threads) = config.threads {
            args.push("-threads".to_string());
            args.push(threads.to_string());
        }

        // Explicit maps turn off automatic stream selection, so every input is mapped
        if !inputs.is_empty() {
            for index in 0..=inputs.len() {
                args.push("-map".to_string());
                args.push(index.to_string());
            }
        }

        args.extend(options);
        args.extend(format.args()?);
        args.push(output.to_string_lossy().into_owned());

        Ok(Invocation {
            program: config.binary.clone(),
            args,
        })
    }

    /// Program to run
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments, program excluded
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Consume into program and arguments
    pub fn into_parts(self) -> (PathBuf, Vec<String>) {
        (self.program, self.args)
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let program = self.program.to_string_lossy();
        let words = std::iter::once(program.as_ref()).chain(self.args.iter().map(String::as_str));
        f.write_str(&shell_words::join(words))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MetadataFields, TimeCode};
    use crate::error::AudioError;
    use crate::format::AudioCodec;
    use tempfile::NamedTempFile;

    fn position(args: &[String], flag: &str) -> usize {
        args.iter().position(|a| a == flag).unwrap()
    }

    #[test]
    fn test_plain_conversion() {
        let audio = Audio::new("in.wav");
        let invocation = audio
            .command(&AudioFormat::default(), "out.mp3", &FfmpegConfig::default())
            .unwrap();

        assert_eq!(invocation.program(), Path::new("ffmpeg"));
        assert_eq!(
            invocation.args(),
            ["-y", "-i", "in.wav", "-acodec", "libmp3lame", "-b:a", "128k", "out.mp3"]
        );
    }

    #[test]
    fn test_filters_follow_priority() {
        let mut audio = Audio::new("in.wav");
        let mut fields = MetadataFields::new();
        fields.insert("title".to_string(), "Intro".to_string());
        audio
            .filters()
            .resample(48000)
            .clip(TimeCode::new(0, 0, 1, 0), Some(TimeCode::new(0, 0, 2, 0)))
            .add_metadata(Some(fields));

        let config = FfmpegConfig::default().with_threads(2);
        let invocation = audio
            .command(&AudioFormat::new(AudioCodec::Flac), "out.flac", &config)
            .unwrap();

        assert_eq!(
            invocation.args(),
            [
                "-y", "-i", "in.wav", "-threads", "2", "-metadata", "title=Intro", "-ac", "2",
                "-ar", "48000", "-ss", "00:00:01.00", "-t", "00:00:02.00", "-acodec", "flac",
                "out.flac",
            ]
        );
    }

    #[test]
    fn test_filter_error_surfaces() {
        let mut audio = Audio::new("in.wav");
        audio.filters().resample(0);

        let result = audio.command(&AudioFormat::default(), "out.mp3", &FfmpegConfig::default());
        assert!(matches!(result, Err(AudioError::InvalidSampleRate { rate: 0 })));
    }

    #[test]
    fn test_display_quotes_arguments() {
        let mut audio = Audio::new("my song.wav");
        let mut fields = MetadataFields::new();
        fields.insert("artist".to_string(), "O'Brien".to_string());
        audio.filters().add_metadata(Some(fields));

        let mut config = FfmpegConfig::default();
        config.overwrite = false;
        let invocation = audio
            .command(&AudioFormat::new(AudioCodec::Wav), "out.wav", &config)
            .unwrap();

        assert_eq!(
            invocation.to_string(),
            r"ffmpeg -i 'my song.wav' -metadata 'artist=O'\''Brien' -acodec pcm_s16le out.wav"
        );
    }

    #[test]
    fn test_display_quotes_empty_argument() {
        let invocation = Invocation {
            program: PathBuf::from("ffmpeg"),
            args: vec!["-metadata".to_string(), String::new(), "out.wav".to_string()],
        };
        assert_eq!(invocation.to_string(), "ffmpeg -metadata '' out.wav");
    }

    #[test]
    fn test_extra_inputs_precede_output_options() {
        let artwork = NamedTempFile::new().unwrap();
        let mut audio = Audio::new("in.wav");
        audio
            .filters()
            .clip(TimeCode::new(0, 0, 10, 0), Some(TimeCode::new(0, 0, 5, 0)))
            .resample(22050)
            .image_video(artwork.path(), None, None);

        let invocation = audio
            .command(&AudioFormat::new(AudioCodec::Aac), "out.mp4", &FfmpegConfig::default())
            .unwrap();
        let args = invocation.args();
        let artwork = artwork.path().to_string_lossy().into_owned();

        let last_input = args.iter().rposition(|a| a == "-i").unwrap();
        assert_eq!(args[last_input + 1], artwork);
        assert_eq!(args[last_input - 2..last_input], ["-loop", "1"]);
        for flag in ["-ss", "-t", "-ar", "-c:v", "-map", "-acodec"] {
            assert!(position(args, flag) > last_input + 1, "{flag} before last input");
        }
        assert_eq!(args[last_input + 2..last_input + 6], ["-map", "0", "-map", "1"]);
    }

    #[test]
    fn test_cover_and_image_video_are_both_mapped() {
        let artwork = NamedTempFile::new().unwrap();
        let mut fields = MetadataFields::new();
        fields.insert("artwork".to_string(), "cover.jpg".to_string());

        let mut audio = Audio::new("in.wav");
        audio
            .filters()
            .image_video(artwork.path(), None, None)
            .add_metadata(Some(fields));

        let invocation = audio
            .command(&AudioFormat::default(), "out.mp4", &FfmpegConfig::default())
            .unwrap();
        let args = invocation.args();

        // Metadata has the higher priority, so the cover is input 1
        assert_eq!(args[3..5], ["-i", "cover.jpg"]);
        assert_eq!(args.iter().filter(|a| *a == "-i").count(), 3);

        let maps: Vec<&str> = args
            .windows(2)
            .filter(|w| w[0] == "-map")
            .map(|w| w[1].as_str())
            .collect();
        assert_eq!(maps, vec!["0", "1", "2"]);
    }
}
