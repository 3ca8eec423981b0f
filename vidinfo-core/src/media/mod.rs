//! Media data model.
//!
//! `MediaMetadata` holds the attributes shared by every media type, and
//! `MediaFile` is the closed set of media variants exposing the shared
//! report-generation operation. Video is currently the only variant; audio
//! and image records would be added here.

pub mod video;

use crate::error::{CoreError, CoreResult};

pub use video::VideoFile;

/// Attributes shared by all media files.
#[derive(Debug, Clone)]
pub struct MediaMetadata {
    /// Base filename, without the extension
    pub filename: String,

    /// Duration in seconds (positive; enforced by the input collector)
    pub duration_secs: f64,

    /// File size in bytes (positive; enforced by the input collector)
    pub size_bytes: f64,

    /// File extension including the leading dot (e.g. ".mp4")
    pub format: String,
}

impl MediaMetadata {
    pub fn new(
        filename: impl Into<String>,
        duration_secs: f64,
        size_bytes: f64,
        format: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            duration_secs,
            size_bytes,
            format: format.into(),
        }
    }
}

/// Checks whether a candidate format string is a member of the accepted set.
/// Exact, case-sensitive match including the leading dot.
#[must_use]
pub fn is_valid_format(format: &str, accepted: &[&str]) -> bool {
    accepted.contains(&format)
}

/// Validates a format against an accepted set, producing the construction
/// error that lists the accepted formats on failure.
pub(crate) fn validate_format(format: &str, accepted: &[&str]) -> CoreResult<()> {
    if is_valid_format(format, accepted) {
        log::debug!("validated media format {format}");
        Ok(())
    } else {
        Err(CoreError::UnsupportedFormat {
            format: format.to_string(),
            supported: accepted.iter().map(|s| (*s).to_string()).collect(),
        })
    }
}

/// A media file of any supported type.
///
/// Closed variant set rather than an open class hierarchy: every variant
/// implements the report operation, and adding a media type means adding a
/// variant here.
#[derive(Debug, Clone)]
pub enum MediaFile {
    Video(VideoFile),
}

impl MediaFile {
    /// Shared attributes of the underlying record.
    #[must_use]
    pub fn metadata(&self) -> &MediaMetadata {
        match self {
            MediaFile::Video(video) => video.metadata(),
        }
    }

    /// Renders the fixed-layout information report for this file.
    #[must_use]
    pub fn report(&self) -> String {
        match self {
            MediaFile::Video(video) => video.report(),
        }
    }
}
