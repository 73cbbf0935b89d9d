//! Command-line argument definitions using clap
//!
//! The build itself is configured through prompts; the command line only
//! carries `--help`, `--version` and the packager override.

use clap::Parser;

use crate::build::DEFAULT_PACKAGER;

/// Environment variable naming the packager executable
pub const PACKAGER_ENV: &str = "PYFORGE_PACKAGER";

/// pyforge - Turn a Python script into a standalone executable, interactively
#[derive(Parser, Debug)]
#[command(name = "pyforge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Packager executable to run
    #[arg(long, env = PACKAGER_ENV, default_value = DEFAULT_PACKAGER, hide = true)]
    pub packager: String,
}
