use crate::error::{AudioError, AudioResult};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

const MAX_SECONDS: f64 = u32::MAX as f64 * 3600.0;

/// Point in time or duration within a media stream
///
/// Rendered as `HH:MM:SS.FF`, where `FF` are hundredths of a second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeCode {
    hours: u32,
    minutes: u32,
    seconds: u32,
    frames: u32,
}

impl TimeCode {
    /// Create a timecode from its components
    ///
    /// Components are taken as given; `12:75:00.00` is a valid timecode that
    /// the external tool normalises itself.
    pub fn new(hours: u32, minutes: u32, seconds: u32, frames: u32) -> Self {
        TimeCode {
            hours,
            minutes,
            seconds,
            frames,
        }
    }

    /// Create a timecode from a number of seconds
    ///
    /// Negative and NaN inputs give zero; values past `u32::MAX` hours saturate.
    pub fn from_seconds(quantity: f64) -> Self {
        let quantity = if quantity.is_nan() {
            0.0
        } else {
            quantity.clamp(0.0, MAX_SECONDS)
        };
        let mut whole = quantity.floor() as u64;
        let mut frames = ((quantity - whole as f64) * 100.0).round() as u32;
        if frames >= 100 {
            whole += 1;
            frames = 0;
        }

        TimeCode {
            hours: u32::try_from(whole / 3600).unwrap_or(u32::MAX),
            minutes: ((whole % 3600) / 60) as u32,
            seconds: (whole % 60) as u32,
            frames,
        }
    }

    /// Hours component
    pub fn hours(&self) -> u32 {
        self.hours
    }

    /// Minutes component
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Seconds component
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Hundredths of a second
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Total length in seconds
    pub fn to_seconds(&self) -> f64 {
        self.hours as f64 * 3600.0
            + self.minutes as f64 * 60.0
            + self.seconds as f64
            + self.frames as f64 / 100.0
    }

    /// Total length as a [`Duration`]
    pub fn to_duration(&self) -> Duration {
        Duration::from_secs_f64(self.to_seconds())
    }
}

impl From<Duration> for TimeCode {
    fn from(duration: Duration) -> Self {
        TimeCode::from_seconds(duration.as_secs_f64())
    }
}

impl FromStr for TimeCode {
    type Err = AudioError;

    /// Parse `HH:MM:SS.FF`; the digits after the dot are read as a count of
    /// hundredths, so `00:00:30.5` is 30.05 seconds, not 30.5
    fn from_str(s: &str) -> AudioResult<Self> {
        let invalid = || AudioError::InvalidTimecode(format!("{s}, expected HH:MM:SS.FF"));

        let (clock, frames) = s.split_once('.').ok_or_else(invalid)?;
        let parts: Vec<&str> = clock.split(':').collect();
        if parts.len() != 3 {
            return Err(invalid());
        }

        let field = |part: &str| -> AudioResult<u32> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse::<u32>().map_err(|_| invalid())
        };

        Ok(TimeCode::new(
            field(parts[0])?,
            field(parts[1])?,
            field(parts[2])?,
            field(frames)?,
        ))
    }
}

impl fmt::Display for TimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:02}",
            self.hours, self.minutes, self.seconds, self.frames
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timecode_display() {
        let tc = TimeCode::new(1, 2, 3, 4);
        assert_eq!(tc.to_string(), "01:02:03.04");
    }

    #[test]
    fn test_timecode_parse() {
        let tc: TimeCode = "00:01:30.50".parse().unwrap();
        assert_eq!(tc.minutes(), 1);
        assert_eq!(tc.seconds(), 30);
        assert_eq!(tc.frames(), 50);
        assert!((tc.to_seconds() - 90.5).abs() < 1e-9);
    }

    #[test]
    fn test_timecode_parse_invalid() {
        assert!("01:30".parse::<TimeCode>().is_err());
        assert!("00:01:30".parse::<TimeCode>().is_err());
        assert!("aa:01:30.00".parse::<TimeCode>().is_err());
        assert!("00:-1:30.00".parse::<TimeCode>().is_err());
        assert!("".parse::<TimeCode>().is_err());
    }

    #[test]
    fn test_from_seconds() {
        let tc = TimeCode::from_seconds(3725.25);
        assert_eq!(tc, TimeCode::new(1, 2, 5, 25));

        // Rounding up to a full second carries over
        let tc = TimeCode::from_seconds(59.999);
        assert_eq!(tc, TimeCode::new(0, 1, 0, 0));
    }

    #[test]
    fn test_from_seconds_out_of_range() {
        let tc = TimeCode::from_seconds(f64::INFINITY);
        assert_eq!(tc.hours(), u32::MAX);
        assert!(tc.minutes() < 60 && tc.seconds() < 60 && tc.frames() < 100);

        let tc = TimeCode::from_seconds(1e300);
        assert_eq!(tc.hours(), u32::MAX);

        assert_eq!(TimeCode::from_seconds(f64::NAN), TimeCode::new(0, 0, 0, 0));
        assert_eq!(TimeCode::from_seconds(-5.0), TimeCode::new(0, 0, 0, 0));
    }

    #[test]
    fn test_short_fraction_is_hundredths() {
        let tc: TimeCode = "00:00:30.5".parse().unwrap();
        assert_eq!(tc.frames(), 5);
        assert_eq!(tc.to_string(), "00:00:30.05");
    }
}
