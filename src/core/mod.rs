//! Core value types shared by filters and command assembly

/// Metadata tag names
pub mod metadata;
/// `HH:MM:SS.FF` timecodes
pub mod timecode;

pub use metadata::{MetadataFields, MetadataKey};
pub use timecode::TimeCode;
