use vidinfo_core::*; // Import items from the vidinfo_core crate

// --- Formatting utilities (public API) ---

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0.0), "0:00:00");
    assert_eq!(format_duration(59.0), "0:00:59");
    assert_eq!(format_duration(60.0), "0:01:00");
    assert_eq!(format_duration(3599.0), "0:59:59");
    assert_eq!(format_duration(3600.0), "1:00:00");
    assert_eq!(format_duration(3725.0), "1:02:05");
    assert_eq!(format_duration(2.0 * 3600.0 + 30.0 * 60.0 + 15.0), "2:30:15");
}

#[test]
fn test_format_size() {
    assert_eq!(format_size(0.0), "0 bytes");
    assert_eq!(format_size(1023.0), "1023 bytes");
    assert_eq!(format_size(1024.0), "1 KB");
    assert_eq!(format_size(1536.0), "1.5 KB");
    assert_eq!(format_size(1024.0 * 1024.0), "1 MB");
    assert_eq!(format_size(1024.0 * 1024.0 * 1.5), "1.5 MB");
    assert_eq!(format_size(1024.0 * 1024.0 * 1024.0), "1 GB");
    assert_eq!(format_size(1024.0 * 1024.0 * 1024.0 * 1.5), "1.5 GB");
}

// --- Record construction ---

#[test]
fn test_video_construction_rejects_unsupported_format() {
    let meta = MediaMetadata::new("clip", 125.0, 10_485_760.0, ".wmv");
    let result = VideoFile::new(meta, 1920, 1080, 30.0, "H.264");
    assert!(result.is_err());
    match result.err().unwrap() {
        CoreError::UnsupportedFormat { format, .. } => assert_eq!(format, ".wmv"),
        e => panic!("Unexpected error type: {e:?}"),
    }
}

#[test]
fn test_video_construction_accepts_every_supported_format() {
    for format in SUPPORTED_VIDEO_FORMATS {
        let meta = MediaMetadata::new("clip", 125.0, 10_485_760.0, format);
        assert!(
            VideoFile::new(meta, 1920, 1080, 30.0, "H.264").is_ok(),
            "construction failed for {format}"
        );
    }
}

// --- Derived values ---

#[test]
fn test_bitrate_exact() {
    let meta = MediaMetadata::new("clip", 100.0, 125_000_000.0, ".mkv");
    let video = VideoFile::new(meta, 1280, 720, 24.0, "AV1").unwrap();
    assert_eq!(video.bitrate_mbps(), 10.0);
}

#[test]
fn test_resolution_classifier_is_total() {
    // Every non-negative pair maps to exactly one class.
    let cases = [
        (3840, 2160, "4K"),
        (7680, 4320, "4K"),
        (1920, 1080, "1080p"),
        (2560, 1440, "1080p"),
        (1280, 720, "720p"),
        (640, 480, "SD"),
        (0, 0, "SD"),
    ];
    for (width, height, expected) in cases {
        assert_eq!(
            ResolutionClass::from_dimensions(width, height).to_string(),
            expected,
            "for {width}x{height}"
        );
    }
}

// --- End-to-end report through the shared MediaFile operation ---

#[test]
fn test_media_file_report() {
    let meta = MediaMetadata::new("clip", 125.0, 10_485_760.0, ".mp4");
    let video = VideoFile::new(meta, 1920, 1080, 30.0, "H.264").unwrap();
    let media = MediaFile::Video(video);

    assert_eq!(media.metadata().filename, "clip");

    let report = media.report();
    assert!(report.contains("Filename: clip.mp4"));
    assert!(report.contains("Duration: 0:02:05"));
    assert!(report.contains("Size: 10 MB"));
    assert!(report.contains("Resolution: 1920x1080 (1080p)"));
    assert!(report.contains("Frame Rate: 30 fps"));
    assert!(report.contains("Video Codec: H.264"));
    assert!(report.contains("Bitrate: 0.67 Mbps"));
}
