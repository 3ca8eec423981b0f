//! Utility functions for formatting durations and byte sizes.
//!
//! These are the general-purpose display helpers used by the report renderer.

/// Formats seconds as H:MM:SS (e.g., 3725.0 -> "1:02:05"). Hours are not
/// zero-padded; fractional seconds are truncated. Returns "?:??:??" for
/// invalid inputs.
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    if seconds < 0.0 || !seconds.is_finite() {
        return "?:??:??".to_string();
    }

    let total_seconds = seconds as u64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    format!("{hours}:{minutes:02}:{secs:02}")
}

/// Formats a byte count with binary units (bytes, KB, MB, GB), selecting the
/// largest unit where the value is at least 1. The numeric part is rendered
/// with up to two decimals, trailing zeros trimmed (1536 -> "1.5 KB",
/// 10485760 -> "10 MB").
#[must_use]
pub fn format_size(size_in_bytes: f64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    if size_in_bytes >= GB {
        format!("{} GB", trim_decimal(size_in_bytes / GB))
    } else if size_in_bytes >= MB {
        format!("{} MB", trim_decimal(size_in_bytes / MB))
    } else if size_in_bytes >= KB {
        format!("{} KB", trim_decimal(size_in_bytes / KB))
    } else {
        format!("{} bytes", trim_decimal(size_in_bytes))
    }
}

/// Renders a value with two fixed decimals, then trims trailing zeros and a
/// trailing decimal point (10.00 -> "10", 1.50 -> "1.5").
fn trim_decimal(value: f64) -> String {
    let fixed = format!("{value:.2}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}
