use super::FilterInput;
use crate::core::{MetadataFields, MetadataKey};
use crate::error::AudioResult;
use crate::format::AudioFormat;
use crate::media::Audio;
use log::warn;

/// Writes metadata tags, or strips all of them when no fields are given
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MetadataFilter {
    fields: Option<MetadataFields>,
}

impl MetadataFilter {
    /// Create a metadata filter
    ///
    /// `None` and an empty map both mean "remove all metadata".
    pub fn new(fields: Option<MetadataFields>) -> Self {
        MetadataFilter { fields }
    }

    /// Fields to write, if any were given
    pub fn fields(&self) -> Option<&MetadataFields> {
        self.fields.as_ref()
    }

    /// Whether this filter removes all metadata
    pub fn strips_all(&self) -> bool {
        self.fields.as_ref().is_none_or(|f| f.is_empty())
    }
}

impl super::Filter for MetadataFilter {
    fn apply(&self, _audio: &Audio, _format: &AudioFormat) -> AudioResult<Vec<String>> {
        let fields = match &self.fields {
            Some(fields) if !fields.is_empty() => fields,
            _ => {
                return Ok(vec![
                    "-map_metadata".to_string(),
                    "-1".to_string(),
                    "-vn".to_string(),
                ]);
            }
        };

        let mut args = Vec::new();

        for (key, value) in fields {
            if key == MetadataKey::Artwork.as_str() {
                continue;
            }
            if !MetadataKey::is_known(key) {
                warn!("Passing unknown metadata key '{}' through", key);
            }
            args.push("-metadata".to_string());
            args.push(format!("{key}={value}"));
        }

        Ok(args)
    }

    /// Artwork is read as an extra input and mapped next to the audio
    fn extra_input(&self) -> Option<FilterInput> {
        self.fields
            .as_ref()?
            .get(MetadataKey::Artwork.as_str())
            .map(|artwork| FilterInput::new(Vec::new(), artwork))
    }

    fn priority(&self) -> i32 {
        9
    }
}
