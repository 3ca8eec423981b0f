//! Core library for the vidinfo video metadata inspector.
//!
//! This crate provides the media data model, format validation, derived-value
//! computation (bitrate, resolution class) and report rendering. It performs
//! no console I/O itself; the `vidinfo` binary collects input and prints the
//! rendered report.
//!
//! ## Usage Example
//!
//! ```rust
//! use vidinfo_core::{MediaFile, MediaMetadata, VideoFile};
//!
//! let meta = MediaMetadata::new("clip", 125.0, 10_485_760.0, ".mp4");
//! let video = VideoFile::new(meta, 1920, 1080, 30.0, "H.264").unwrap();
//! let report = MediaFile::Video(video).report();
//! assert!(report.contains("Resolution: 1920x1080 (1080p)"));
//! ```

pub mod error;
pub mod media;
pub mod utils;

// Re-exports for public API
pub use error::{CoreError, CoreResult};
pub use media::{MediaFile, MediaMetadata, is_valid_format};
pub use media::video::{ResolutionClass, VideoFile, SUPPORTED_VIDEO_FORMATS};
pub use utils::{format_duration, format_size};
