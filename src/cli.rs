//! Command-line argument surface.

use std::path::PathBuf;

use clap::Parser;

/// Interactive serial console.
#[derive(Debug, Parser)]
#[command(name = "portline", version, about)]
pub struct Cli {
    /// List available serial ports and exit.
    #[arg(short, long)]
    pub list: bool,

    /// Path to an alternate config file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
