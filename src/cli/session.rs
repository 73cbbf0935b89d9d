//! One interactive session: collect, confirm, build

use super::collector::{collect_config, CollectError};
use super::config::{ConfigBuilder, SessionMemory};
use super::prompts::{ask_bool_with_help, Prompter};
use crate::build::{run_build, BuildOutcome, PackagerCommand};
use crate::report::display_build_summary;
use crate::utils::{print_info, OutputSink};

/// How a session ended once a configuration was collected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    /// The packager ran; the outcome says whether it succeeded
    Built(BuildOutcome),
    /// The packager could not be started
    LaunchFailed,
    /// The user declined the final confirmation
    Cancelled,
}

/// Collect a configuration and run `packager` with it.
///
/// When the configuration does not skip confirmations, a summary is shown and
/// the user gets one last chance to back out before anything is spawned.
pub fn run_session(
    packager: &str,
    prompter: &mut dyn Prompter,
    sink: &mut dyn OutputSink,
    memory: SessionMemory,
) -> Result<(SessionMemory, SessionStatus), CollectError> {
    let (memory, config) = collect_config(prompter, sink, memory)?;
    let command = PackagerCommand::from_config(packager, &config);

    if !config.no_confirm {
        display_build_summary(sink, &config);
        let state = ConfigBuilder::from(&config);
        if !ask_bool_with_help(prompter, sink, "Start the build now?", true, &state)? {
            print_info(sink, "Build cancelled.");
            return Ok((memory, SessionStatus::Cancelled));
        }
    }

    let status = match run_build(&command, &config.output, sink) {
        Ok(outcome) => SessionStatus::Built(outcome),
        Err(e) => {
            log::debug!("packager launch failed: {:?}", e);
            SessionStatus::LaunchFailed
        }
    };

    Ok((memory, status))
}
