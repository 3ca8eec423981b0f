//! Interactive field collection.
//!
//! Each field is driven by a small prompt state machine (awaiting-input,
//! invalid-retry, accepted) parameterized by a parse-and-accept predicate.
//! Everything is generic over `BufRead`/`Write`, so tests drive the prompts
//! with in-memory readers instead of the console.

use std::io::{BufRead, Write};
use std::str::FromStr;

use log::debug;
use vidinfo_core::{CoreError, MediaMetadata, VideoFile};

use crate::error::{CliErrorContext, CliResult};

/// The eight fields collected from the console, in prompt order.
#[derive(Debug, Clone)]
pub struct VideoFields {
    pub filename: String,
    pub format: String,
    pub duration_secs: f64,
    pub size_bytes: f64,
    pub width: u32,
    pub height: u32,
    pub frame_rate: f64,
    pub codec: String,
}

impl VideoFields {
    /// Builds the validated record. Fails only on an unsupported format; the
    /// numeric constraints were already enforced during collection.
    pub fn into_video(self) -> CliResult<VideoFile> {
        let meta = MediaMetadata::new(
            self.filename,
            self.duration_secs,
            self.size_bytes,
            self.format,
        );
        VideoFile::new(meta, self.width, self.height, self.frame_rate, self.codec)
    }
}

/// States of a single field prompt.
enum FieldState<T> {
    AwaitingInput,
    InvalidRetry,
    Accepted(T),
}

/// Collects all video fields in the fixed prompt order.
pub fn collect_video_fields<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> CliResult<VideoFields> {
    writeln!(output, "Enter video information:")?;

    let filename = prompt_line(input, output, "Filename (without extension): ")?;
    let format = prompt_line(input, output, "Format (e.g., .mp4, .mkv): ")?;

    let duration_secs = prompt_validated(
        input,
        output,
        "Duration (in seconds): ",
        "Please enter a valid duration: ",
        positive_finite,
    )?;
    let size_bytes = prompt_validated(
        input,
        output,
        "Size (in bytes): ",
        "Please enter a valid size: ",
        positive_finite,
    )?;
    let width = prompt_validated(
        input,
        output,
        "Width (pixels): ",
        "Please enter a valid width: ",
        positive_u32,
    )?;
    let height = prompt_validated(
        input,
        output,
        "Height (pixels): ",
        "Please enter a valid height: ",
        positive_u32,
    )?;
    let frame_rate = prompt_validated(
        input,
        output,
        "Frame Rate (fps): ",
        "Please enter a valid frame rate: ",
        positive_finite,
    )?;

    let codec = prompt_line(input, output, "Video Codec (e.g., H.264, H.265): ")?;

    Ok(VideoFields {
        filename,
        format,
        duration_secs,
        size_bytes,
        width,
        height,
        frame_rate,
        codec,
    })
}

// Non-finite values would poison the duration and bitrate formatting
// downstream, so "inf" is rejected along with zero and negatives.
fn positive_finite(value: &f64) -> bool {
    value.is_finite() && *value > 0.0
}

fn positive_u32(value: &u32) -> bool {
    *value > 0
}

/// Prompts for a free-text line. Any line is accepted, including empty ones.
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> CliResult<String> {
    write!(output, "{prompt}")?;
    output.flush()?;
    read_line(input)
}

/// Prompts for a value until one parses and satisfies the predicate. There is
/// no retry bound; only a closed input stream ends the loop early.
fn prompt_validated<T, R, W, P>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    retry_prompt: &str,
    accept: P,
) -> CliResult<T>
where
    T: FromStr,
    R: BufRead,
    W: Write,
    P: Fn(&T) -> bool,
{
    let mut state = FieldState::AwaitingInput;
    loop {
        match state {
            FieldState::AwaitingInput => write!(output, "{prompt}")?,
            FieldState::InvalidRetry => write!(output, "{retry_prompt}")?,
            FieldState::Accepted(value) => return Ok(value),
        }
        output.flush()?;

        let line = read_line(input)?;
        state = match line.trim().parse::<T>() {
            Ok(value) if accept(&value) => FieldState::Accepted(value),
            _ => {
                debug!("rejected input {line:?} for prompt {prompt:?}");
                FieldState::InvalidRetry
            }
        };
    }
}

/// Reads one line without its trailing newline. A closed stream is an error:
/// the collector cannot re-prompt once stdin is gone.
fn read_line<R: BufRead>(input: &mut R) -> CliResult<String> {
    let mut line = String::new();
    let bytes_read = input
        .read_line(&mut line)
        .cli_context("failed to read from standard input")?;
    if bytes_read == 0 {
        return Err(CoreError::InvalidInput(
            "unexpected end of input".to_string(),
        ));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
