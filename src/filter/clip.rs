use crate::core::TimeCode;
use crate::error::AudioResult;
use crate::format::AudioFormat;
use crate::media::Audio;

/// Cuts the audio at `start`, optionally limiting its length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipFilter {
    start: TimeCode,
    duration: Option<TimeCode>,
}

impl ClipFilter {
    /// Create a clip filter; without a duration the clip runs to the end
    pub fn new(start: TimeCode, duration: Option<TimeCode>) -> Self {
        ClipFilter { start, duration }
    }

    /// Where the clip starts
    pub fn start(&self) -> TimeCode {
        self.start
    }

    /// How long the clip is, if bounded
    pub fn duration(&self) -> Option<TimeCode> {
        self.duration
    }
}

impl super::Filter for ClipFilter {
    fn apply(&self, _audio: &Audio, _format: &AudioFormat) -> AudioResult<Vec<String>> {
        let mut args = vec!["-ss".to_string(), self.start.to_string()];

        if let Some(duration) = self.duration {
            args.push("-t".to_string());
            args.push(duration.to_string());
        }

        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Filter;

    #[test]
    fn test_clip_to_end() {
        let filter = ClipFilter::new(TimeCode::from_seconds(30.0), None);
        let args = filter
            .apply(&Audio::new("in.flac"), &AudioFormat::default())
            .unwrap();
        assert_eq!(args, vec!["-ss", "00:00:30.00"]);
    }

    #[test]
    fn test_clip_with_duration() {
        let filter = ClipFilter::new(
            TimeCode::new(0, 1, 0, 0),
            Some(TimeCode::new(0, 0, 15, 50)),
        );
        let args = filter
            .apply(&Audio::new("in.flac"), &AudioFormat::default())
            .unwrap();
        assert_eq!(args, vec!["-ss", "00:01:00.00", "-t", "00:00:15.50"]);
    }
}
