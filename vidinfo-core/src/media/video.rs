//! Video file records and their derived display values.

use std::fmt;
use std::fmt::Write as _;

use crate::error::CoreResult;
use crate::media::{validate_format, MediaMetadata};
use crate::utils::{format_duration, format_size};

/// Video formats accepted at construction time.
pub const SUPPORTED_VIDEO_FORMATS: [&str; 4] = [".mp4", ".mkv", ".avi", ".mov"];

/// Resolution classes, ordered from largest to smallest threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionClass {
    Uhd4K,
    Hd1080,
    Hd720,
    Sd,
}

impl ResolutionClass {
    /// Classifies pixel dimensions. The thresholds are nested, so the first
    /// matching rule wins and every input maps to exactly one class.
    #[must_use]
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        if width >= 3840 && height >= 2160 {
            ResolutionClass::Uhd4K
        } else if width >= 1920 && height >= 1080 {
            ResolutionClass::Hd1080
        } else if width >= 1280 && height >= 720 {
            ResolutionClass::Hd720
        } else {
            ResolutionClass::Sd
        }
    }
}

impl fmt::Display for ResolutionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionClass::Uhd4K => write!(f, "4K"),
            ResolutionClass::Hd1080 => write!(f, "1080p"),
            ResolutionClass::Hd720 => write!(f, "720p"),
            ResolutionClass::Sd => write!(f, "SD"),
        }
    }
}

/// A validated video file record.
///
/// Construction checks the format against [`SUPPORTED_VIDEO_FORMATS`]; all
/// other fields are taken as provided. The record is immutable once built.
#[derive(Debug, Clone)]
pub struct VideoFile {
    meta: MediaMetadata,
    width: u32,
    height: u32,
    frame_rate: f64,
    codec: String,
}

impl VideoFile {
    /// Builds a video record, failing with `CoreError::UnsupportedFormat` if
    /// the metadata's format is not in the supported set.
    pub fn new(
        meta: MediaMetadata,
        width: u32,
        height: u32,
        frame_rate: f64,
        codec: impl Into<String>,
    ) -> CoreResult<Self> {
        validate_format(&meta.format, &SUPPORTED_VIDEO_FORMATS)?;
        Ok(Self {
            meta,
            width,
            height,
            frame_rate,
            codec: codec.into(),
        })
    }

    #[must_use]
    pub fn metadata(&self) -> &MediaMetadata {
        &self.meta
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    #[must_use]
    pub fn codec(&self) -> &str {
        &self.codec
    }

    /// Average bitrate in megabits per second, derived from size and
    /// duration. Duration is positive by the record's invariant.
    #[must_use]
    pub fn bitrate_mbps(&self) -> f64 {
        (self.meta.size_bytes * 8.0) / (self.meta.duration_secs * 1_000_000.0)
    }

    /// Resolution class of this video's pixel dimensions.
    #[must_use]
    pub fn resolution_class(&self) -> ResolutionClass {
        ResolutionClass::from_dimensions(self.width, self.height)
    }

    /// Renders the fixed-layout information report.
    #[must_use]
    pub fn report(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "=== Video Information ===");
        let _ = writeln!(out, "Filename: {}{}", self.meta.filename, self.meta.format);
        let _ = writeln!(out, "Duration: {}", format_duration(self.meta.duration_secs));
        let _ = writeln!(out, "Size: {}", format_size(self.meta.size_bytes));
        let _ = writeln!(
            out,
            "Resolution: {}x{} ({})",
            self.width,
            self.height,
            self.resolution_class()
        );
        let _ = writeln!(out, "Frame Rate: {} fps", self.frame_rate);
        let _ = writeln!(out, "Video Codec: {}", self.codec);
        let _ = writeln!(out, "Bitrate: {:.2} Mbps", self.bitrate_mbps());
        let _ = writeln!(out, "=====================");
        out
    }
}
