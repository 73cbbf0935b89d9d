//! Prompt-driven collection of a build configuration
//!
//! The collector asks a fixed sequence of questions and returns the finished
//! [`BuildConfig`] together with updated [`SessionMemory`]. The only question
//! that can stop the run is the script path: an invalid path is asked again
//! until the user declines to retry.

use std::path::PathBuf;

use thiserror::Error;

use super::config::{BuildConfig, ConfigBuilder, SessionMemory};
use super::prompts::{ask_bool_with_help, PromptError, Prompter};
use crate::utils::{
    is_script_file, non_empty, print_banner, print_error, print_success, resolve_optional_path,
    resolve_path, split_list, OutputSink, SCRIPT_EXTENSION,
};

/// Reasons collection can end without a configuration
#[derive(Debug, Error)]
pub enum CollectError {
    /// The user gave an invalid script path and chose not to try again
    #[error("no valid Python script was given (last attempt: {})", .0.display())]
    Aborted(PathBuf),

    #[error(transparent)]
    Prompt(#[from] PromptError),
}

impl CollectError {
    /// Process exit status for this failure
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// Run the full question sequence.
///
/// `memory` supplies the defaults for the script path, output directory and
/// the two mode questions, and is returned updated with this run's choices.
pub fn collect_config(
    prompter: &mut dyn Prompter,
    sink: &mut dyn OutputSink,
    mut memory: SessionMemory,
) -> Result<(SessionMemory, BuildConfig), CollectError> {
    print_banner(sink, env!("CARGO_PKG_VERSION"));

    let input_file = ask_script_path(prompter, sink, &memory)?;
    let mut state = ConfigBuilder::new(input_file);

    let name = prompter.input(
        "Executable name (optional, leave blank to use script name)",
        "",
    )?;
    state.name = non_empty(&name);

    let output = prompter.input(
        "Output directory",
        &memory.last_output.display().to_string(),
    )?;
    state.output = Some(resolve_output(&output, &memory));

    state.onefile = Some(ask_bool_with_help(
        prompter,
        sink,
        "Build as single file?",
        memory.last_onefile,
        &state,
    )?);
    state.windowed = Some(ask_bool_with_help(
        prompter,
        sink,
        "Windowed (no console)?",
        memory.last_windowed,
        &state,
    )?);

    let icon = prompter.input("Icon path (optional)", "")?;
    state.icon = resolve_icon(&icon);

    let hidden = prompter.input("Hidden imports (comma separated, optional)", "")?;
    state.hidden_imports = split_list(&hidden);
    let exclude = prompter.input("Exclude modules (comma separated, optional)", "")?;
    state.exclude_modules = split_list(&exclude);
    let add_data = prompter.input(
        "Add data (repeat format 'SRC;DEST' comma separated, optional)",
        "",
    )?;
    state.add_data = split_list(&add_data);

    let upx_dir = prompter.input("UPX directory path (optional, for compression)", "")?;
    state.upx_dir = resolve_optional_path(&upx_dir);
    let runtime_hook = prompter.input("Runtime hook file (optional)", "")?;
    state.runtime_hook = resolve_optional_path(&runtime_hook);
    let version_file = prompter.input("Version info file (optional)", "")?;
    state.version_file = resolve_optional_path(&version_file);
    let manifest = prompter.input("Manifest file (optional)", "")?;
    state.manifest = resolve_optional_path(&manifest);
    let key = prompter.input("Encryption key (optional, for bytecode encryption)", "")?;
    state.key = non_empty(&key);

    state.strip = ask_bool_with_help(prompter, sink, "Strip debug information?", false, &state)?;
    state.bootloader_ignore_signals = ask_bool_with_help(
        prompter,
        sink,
        "Bootloader ignore signals?",
        false,
        &state,
    )?;

    let codesign = prompter.input("Codesign identity (optional, for macOS)", "")?;
    state.codesign_identity = non_empty(&codesign);
    let entitlements = prompter.input("Entitlements file (optional, for macOS)", "")?;
    state.entitlements_file = resolve_optional_path(&entitlements);

    state.clean = ask_bool_with_help(prompter, sink, "Clean build (remove cache)?", false, &state)?;
    state.debug = ask_bool_with_help(prompter, sink, "Enable debug?", false, &state)?;
    state.verbose = ask_bool_with_help(prompter, sink, "Verbose output?", false, &state)?;

    state.dev_mode = ask_bool_with_help(
        prompter,
        sink,
        "Enable developer mode? (spec/work/python paths)",
        false,
        &state,
    )?;
    if state.dev_mode {
        let spec_path = prompter.input("Spec path (optional)", "")?;
        state.spec_path = resolve_optional_path(&spec_path);
        let work_path = prompter.input("Work path (optional)", "")?;
        state.work_path = resolve_optional_path(&work_path);
        let python_path = prompter.input("Python executable path (optional)", "")?;
        state.python_path = non_empty(&python_path);
    }

    state.no_confirm = ask_bool_with_help(
        prompter,
        sink,
        "Skip confirmations and run now?",
        false,
        &state,
    )?;

    let config = state.finish(&memory);
    memory.remember(&config);
    log::debug!("collected configuration: {:?}", config);

    print_success(sink, "Configuration complete!");
    Ok((memory, config))
}

/// Ask for the script until it exists with the right extension.
fn ask_script_path(
    prompter: &mut dyn Prompter,
    sink: &mut dyn OutputSink,
    memory: &SessionMemory,
) -> Result<PathBuf, CollectError> {
    let default = memory.last_input_text();

    loop {
        let raw = prompter.input("Path to Python file", &default)?;
        let path = resolve_path(&raw);
        log::debug!("script path {:?} resolved to {}", raw, path.display());

        if is_script_file(&path) {
            return Ok(path);
        }

        print_error(
            sink,
            &format!(
                "File does not exist or is not a .{} file: {}",
                SCRIPT_EXTENSION,
                path.display()
            ),
        );
        if !prompter.confirm("Try again?", true)? {
            return Err(CollectError::Aborted(path));
        }
    }
}

fn resolve_output(raw: &str, memory: &SessionMemory) -> PathBuf {
    resolve_optional_path(raw).unwrap_or_else(|| memory.last_output.clone())
}

/// An icon that does not exist is dropped without complaint
fn resolve_icon(raw: &str) -> Option<PathBuf> {
    let icon = resolve_optional_path(raw)?;
    if icon.exists() {
        Some(icon)
    } else {
        log::debug!("icon {} not found, building without one", icon.display());
        None
    }
}
