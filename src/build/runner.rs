//! Running the packager and reporting what happened

use std::path::Path;

use thiserror::Error;

use super::command::PackagerCommand;
use crate::utils::{
    print_captured, print_completion, print_failure, print_info, print_labelled, print_success,
    OutputSink,
};

/// Errors raised before the packager produced an exit status
#[derive(Debug, Error)]
pub enum RunError {
    /// The process could not be started at all (missing binary, permissions)
    #[error("Error running {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result of a packager run that did start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// Exit status zero
    Succeeded { stdout: String },
    /// Any other exit status; `code` is `None` when killed by a signal
    Failed { code: Option<i32>, stderr: String },
}

impl BuildOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, BuildOutcome::Succeeded { .. })
    }
}

/// Run the packager to completion with its output captured.
///
/// Blocks until the child exits; there is no timeout.
pub fn execute(command: &PackagerCommand) -> Result<BuildOutcome, RunError> {
    log::debug!("spawning packager: {}", command);

    let output = command
        .to_command()
        .output()
        .map_err(|source| RunError::Launch {
            program: command.program.clone(),
            source,
        })?;

    log::debug!("packager exited with {}", output.status);

    if output.status.success() {
        Ok(BuildOutcome::Succeeded {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    } else {
        Ok(BuildOutcome::Failed {
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Announce the command, play the animation, run it and report the result
pub fn run_build(
    command: &PackagerCommand,
    output_dir: &Path,
    sink: &mut dyn OutputSink,
) -> Result<BuildOutcome, RunError> {
    print_labelled(sink, "Running command:", &command.to_string());
    print_info(sink, "This may take a while");
    sink.building_animation();

    let result = execute(command);
    report_outcome(&result, output_dir, sink);
    result
}

/// Tell the user how the run went
pub fn report_outcome(
    result: &Result<BuildOutcome, RunError>,
    output_dir: &Path,
    sink: &mut dyn OutputSink,
) {
    match result {
        Ok(BuildOutcome::Succeeded { stdout }) => {
            print_success(sink, "Build successful!");
            print_captured(sink, stdout);
            print_completion(sink, &output_dir.display().to_string());
        }
        Ok(BuildOutcome::Failed { code, stderr }) => {
            let message = match code {
                Some(code) => format!("Build failed! (exit status {})", code),
                None => "Build failed! (terminated by signal)".to_string(),
            };
            print_failure(sink, &message);
            print_captured(sink, stderr);
        }
        Err(e) => print_failure(sink, &e.to_string()),
    }
}
