//! CLI argument parsing via clap.

use clap::Parser;

use crate::build_info;

/// Walk around the office scene in the terminal.
#[derive(Debug, Parser)]
#[command(name = "office", version, long_version = build_info::LONG_VERSION)]
pub struct Args {
    /// Path to config file (default: ./office.toml or ~/.config/office/office.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Keep hover feedback wired but silent.
    #[arg(long = "mute")]
    pub mute: bool,
}
