//! ffmpeg-filters Command Line Interface
//!
//! Builds the ffmpeg command for a set of audio filters and prints it.

use clap::Parser;
use ffmpeg_filters::{
    Audio, AudioCodec, AudioFormat, FfmpegConfig, MetadataFields, TimeCode,
};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ffmpeg-filters")]
#[command(about = "Print the ffmpeg command for a chain of audio filters", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Input audio file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output file
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Resample to this rate (Hz)
    #[arg(short, long)]
    resample: Option<u32>,

    /// Metadata tag, repeatable (e.g. title=Intro)
    #[arg(short, long, value_name = "KEY=VALUE", value_parser = parse_tag)]
    metadata: Vec<(String, String)>,

    /// Remove all metadata
    #[arg(long, conflicts_with = "metadata")]
    strip_metadata: bool,

    /// Clip start (HH:MM:SS.FF)
    #[arg(long, value_name = "TIMECODE")]
    clip_start: Option<TimeCode>,

    /// Clip length (HH:MM:SS.FF), runs to the end if omitted
    #[arg(long, value_name = "TIMECODE", requires = "clip_start")]
    clip_duration: Option<TimeCode>,

    /// Still image to turn the audio into a video
    #[arg(long, value_name = "IMAGE")]
    artwork: Option<PathBuf>,

    /// x264 preset for --artwork (default: veryslow)
    #[arg(long, requires = "artwork")]
    preset: Option<String>,

    /// Extra video encoding flag for --artwork, repeatable
    #[arg(long = "flag", value_name = "FLAG", requires = "artwork", allow_hyphen_values = true)]
    flags: Vec<String>,

    /// Output codec (mp3, flac, wav, aac, vorbis, opus)
    #[arg(short, long, default_value = "mp3")]
    codec: AudioCodec,

    /// Audio bitrate in kbps
    #[arg(short, long)]
    kbps: Option<u32>,

    /// Output channel count
    #[arg(long)]
    channels: Option<u32>,

    /// ffmpeg binary (overrides FFMPEG_BINARY)
    #[arg(long)]
    ffmpeg: Option<PathBuf>,

    /// Encoder threads (overrides FFMPEG_THREADS)
    #[arg(long)]
    threads: Option<u32>,
}

fn parse_tag(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    if key.is_empty() {
        return Err(format!("empty metadata key in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    info!("ffmpeg-filters {}", ffmpeg_filters::VERSION);

    let mut audio = Audio::new(&cli.input);
    {
        let mut filters = audio.filters();

        if let Some(rate) = cli.resample {
            filters.resample(rate);
        }

        if let Some(start) = cli.clip_start {
            filters.clip(start, cli.clip_duration);
        }

        if cli.strip_metadata {
            filters.add_metadata(None);
        } else if !cli.metadata.is_empty() {
            filters.add_metadata(Some(cli.metadata.into_iter().collect::<MetadataFields>()));
        }

        if let Some(artwork) = cli.artwork {
            let flags = (!cli.flags.is_empty()).then_some(cli.flags);
            filters.image_video(artwork, cli.preset, flags);
        }
    }

    let mut format = AudioFormat::new(cli.codec);
    if let Some(kbps) = cli.kbps {
        format = format.with_kbps(kbps);
    }
    if let Some(channels) = cli.channels {
        format = format.with_channels(channels);
    }

    let mut config = FfmpegConfig::from_env()?;
    if let Some(binary) = cli.ffmpeg {
        config = config.with_binary(binary);
    }
    if let Some(threads) = cli.threads {
        config = config.with_threads(threads);
    }

    info!(
        "{} filter(s) queued on {}",
        audio.filter_queue().len(),
        audio.path().display()
    );

    let invocation = audio.command(&format, &cli.output, &config)?;
    println!("{}", invocation);

    Ok(())
}
