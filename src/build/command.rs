//! Translation of a build configuration into a packager command line

use std::ffi::OsStr;
use std::fmt;
use std::path::Path;
use std::process::Command;

use crate::cli::config::BuildConfig;

/// Program run when no override is configured
pub const DEFAULT_PACKAGER: &str = "pyinstaller";

/// Program plus arguments for one packager run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagerCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl PackagerCommand {
    /// Compose the command for `config` using `program` as the packager
    pub fn from_config(program: impl Into<String>, config: &BuildConfig) -> Self {
        Self {
            program: program.into(),
            args: compose_args(config),
        }
    }

    /// A `std::process::Command` ready to spawn
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(OsStr::new(&self.program));
        command.args(&self.args);
        command
    }
}

impl fmt::Display for PackagerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

fn flag_value(flag: &str, value: impl fmt::Display) -> String {
    format!("--{}={}", flag, value)
}

fn push_path(args: &mut Vec<String>, flag: &str, value: Option<&Path>) {
    if let Some(path) = value {
        args.push(flag_value(flag, path.display()));
    }
}

fn push_str(args: &mut Vec<String>, flag: &str, value: Option<&str>) {
    if let Some(value) = value {
        args.push(flag_value(flag, value));
    }
}

fn push_switch(args: &mut Vec<String>, flag: &str, enabled: bool) {
    if enabled {
        args.push(format!("--{}", flag));
    }
}

/// Map a configuration to packager arguments.
///
/// Absent values and disabled toggles produce no argument at all. The script
/// is always the last, positional argument.
pub fn compose_args(config: &BuildConfig) -> Vec<String> {
    let mut args = Vec::new();

    args.push(if config.onefile { "--onefile" } else { "--onedir" }.to_string());
    push_switch(&mut args, "windowed", config.windowed);

    push_str(&mut args, "name", config.name.as_deref());
    push_path(&mut args, "icon", config.icon.as_deref());

    for module in &config.hidden_imports {
        args.push(flag_value("hidden-import", module));
    }
    for module in &config.exclude_modules {
        args.push(flag_value("exclude-module", module));
    }
    for data in &config.add_data {
        args.push(flag_value("add-data", data));
    }

    push_path(&mut args, "upx-dir", config.upx_dir.as_deref());
    push_path(&mut args, "runtime-hook", config.runtime_hook.as_deref());
    push_path(&mut args, "version-file", config.version_file.as_deref());
    push_path(&mut args, "manifest", config.manifest.as_deref());
    push_str(&mut args, "key", config.key.as_deref());
    push_switch(&mut args, "strip", config.strip);
    push_switch(
        &mut args,
        "bootloader-ignore-signals",
        config.bootloader_ignore_signals,
    );
    push_str(
        &mut args,
        "codesign-identity",
        config.codesign_identity.as_deref(),
    );
    push_path(
        &mut args,
        "entitlements-file",
        config.entitlements_file.as_deref(),
    );

    push_switch(&mut args, "clean", config.clean);
    if config.debug {
        args.push(flag_value("debug", "all"));
    }
    push_switch(&mut args, "verbose", config.verbose);

    // Emitted whenever present, whatever dev_mode says now
    push_path(&mut args, "specpath", config.spec_path.as_deref());
    push_path(&mut args, "workpath", config.work_path.as_deref());
    push_str(&mut args, "python", config.python_path.as_deref());

    args.push(config.input_file.display().to_string());
    args
}
