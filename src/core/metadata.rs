use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Metadata fields keyed by tag name
pub type MetadataFields = BTreeMap<String, String>;

/// Metadata tags ffmpeg understands for audio containers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataKey {
    /// Track title
    Title,
    /// Performing artist
    Artist,
    /// Composer
    Composer,
    /// Album name
    Album,
    /// Track number
    Track,
    /// Path to a cover image, attached as an extra input stream
    Artwork,
    /// Release year
    Year,
    /// Genre
    Genre,
    /// Free-form description
    Description,
}

impl MetadataKey {
    /// All known keys
    pub const ALL: [MetadataKey; 9] = [
        MetadataKey::Title,
        MetadataKey::Artist,
        MetadataKey::Composer,
        MetadataKey::Album,
        MetadataKey::Track,
        MetadataKey::Artwork,
        MetadataKey::Year,
        MetadataKey::Genre,
        MetadataKey::Description,
    ];

    /// Tag name as passed to ffmpeg
    pub fn as_str(&self) -> &'static str {
        match self {
            MetadataKey::Title => "title",
            MetadataKey::Artist => "artist",
            MetadataKey::Composer => "composer",
            MetadataKey::Album => "album",
            MetadataKey::Track => "track",
            MetadataKey::Artwork => "artwork",
            MetadataKey::Year => "year",
            MetadataKey::Genre => "genre",
            MetadataKey::Description => "description",
        }
    }

    /// Whether `key` names one of the known tags
    pub fn is_known(key: &str) -> bool {
        key.parse::<MetadataKey>().is_ok()
    }
}

impl FromStr for MetadataKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetadataKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown metadata key: {s}"))
    }
}

impl fmt::Display for MetadataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<MetadataKey> for String {
    fn from(key: MetadataKey) -> Self {
        key.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_round_trip() {
        for key in MetadataKey::ALL {
            assert_eq!(key.as_str().parse::<MetadataKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_unknown_key() {
        assert!(!MetadataKey::is_known("lyrics"));
        assert!(!MetadataKey::is_known("Title"));
        assert!(MetadataKey::is_known("genre"));
    }
}
