// vidinfo-cli/src/main.rs
//
// Entry point for the vidinfo binary. Responsibilities:
// - Parsing command-line flags (`Cli`).
// - Setting up stderr logging.
// - Running the interactive collection, record construction, and report
//   printing via vidinfo-core.
// - Mapping errors to a styled stderr message and a non-zero exit code.

mod cli;
mod error;
mod input;
mod output;

use std::io;
use std::process;

use clap::Parser;
use log::debug;
use vidinfo_core::MediaFile;

use crate::cli::Cli;
use crate::error::CliResult;
use crate::input::collect_video_fields;
use crate::output::print_error;

fn run() -> CliResult<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    let fields = collect_video_fields(&mut input, &mut stdout)?;
    debug!("collected metadata for '{}{}'", fields.filename, fields.format);

    let video = fields.into_video()?;
    let media = MediaFile::Video(video);

    // Blank line separates the report from the last prompt.
    print!("\n{}", media.report());
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run() {
        print_error(&e.to_string());
        process::exit(1);
    }
}
