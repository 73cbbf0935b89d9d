//! pyforge: Python script to executable CLI
//!
//! Asks for build options interactively and runs the packager with them.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use pyforge::cli::{run_session, Cli, CollectError, DialoguerPrompter, SessionMemory};
use pyforge::utils::{print_error, TerminalSink};

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("using packager {:?}", cli.packager);

    let mut prompter = DialoguerPrompter::new();
    let mut sink = TerminalSink::new();

    match run_session(&cli.packager, &mut prompter, &mut sink, SessionMemory::default()) {
        Ok((_memory, status)) => {
            log::debug!("session finished: {:?}", status);
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ CollectError::Aborted(_)) => {
            print_error(&mut sink, &e.to_string());
            Ok(ExitCode::from(e.exit_code()))
        }
        Err(e) => Err(e).context("interactive session failed"),
    }
}
