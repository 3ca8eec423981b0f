// vidinfo-cli/src/cli.rs
//
// Defines the command-line argument structure using clap.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Vidinfo: video metadata inspector",
    long_about = "Collects video metadata from interactive console input and prints an \
                  information report via the vidinfo-core library."
)]
pub struct Cli {
    /// Disable colored terminal output
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Enable verbose (debug-level) logging on stderr
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
