//! Build configuration types
//!
//! - [`SessionMemory`]: the four values remembered between collector runs
//! - [`ConfigBuilder`]: scratch state filled in one answer at a time
//! - [`BuildConfig`]: the finished, read-only record handed to the composer

use std::path::PathBuf;

/// Directory name used for the default output location
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

/// Defaults carried from one collector run to the next within a process
#[derive(Debug, Clone, PartialEq)]
pub struct SessionMemory {
    pub last_input: Option<PathBuf>,
    pub last_output: PathBuf,
    pub last_onefile: bool,
    pub last_windowed: bool,
}

impl Default for SessionMemory {
    fn default() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            last_input: None,
            last_output: cwd.join(DEFAULT_OUTPUT_DIR),
            last_onefile: true,
            last_windowed: false,
        }
    }
}

impl SessionMemory {
    /// Remember the choices of a finished configuration
    pub fn remember(&mut self, config: &BuildConfig) {
        self.last_input = Some(config.input_file.clone());
        self.last_output = config.output.clone();
        self.last_onefile = config.onefile;
        self.last_windowed = config.windowed;
    }

    /// Last input path as prompt default text (empty when none yet)
    pub fn last_input_text(&self) -> String {
        self.last_input
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    }
}

/// Configuration under construction while the prompts run.
///
/// Only the collector touches this type. Call [`ConfigBuilder::finish`] to get
/// the [`BuildConfig`] the composer accepts.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    pub input_file: PathBuf,
    pub output: Option<PathBuf>,
    pub name: Option<String>,
    pub onefile: Option<bool>,
    pub windowed: Option<bool>,
    pub icon: Option<PathBuf>,
    pub hidden_imports: Vec<String>,
    pub exclude_modules: Vec<String>,
    pub add_data: Vec<String>,
    pub upx_dir: Option<PathBuf>,
    pub runtime_hook: Option<PathBuf>,
    pub version_file: Option<PathBuf>,
    pub manifest: Option<PathBuf>,
    pub key: Option<String>,
    pub strip: bool,
    pub bootloader_ignore_signals: bool,
    pub codesign_identity: Option<String>,
    pub entitlements_file: Option<PathBuf>,
    pub clean: bool,
    pub debug: bool,
    pub verbose: bool,
    pub no_confirm: bool,
    pub dev_mode: bool,
    pub spec_path: Option<PathBuf>,
    pub work_path: Option<PathBuf>,
    pub python_path: Option<String>,
}

impl ConfigBuilder {
    /// Start a configuration for an already validated script
    pub fn new(input_file: PathBuf) -> Self {
        Self {
            input_file,
            output: None,
            name: None,
            onefile: None,
            windowed: None,
            icon: None,
            hidden_imports: Vec::new(),
            exclude_modules: Vec::new(),
            add_data: Vec::new(),
            upx_dir: None,
            runtime_hook: None,
            version_file: None,
            manifest: None,
            key: None,
            strip: false,
            bootloader_ignore_signals: false,
            codesign_identity: None,
            entitlements_file: None,
            clean: false,
            debug: false,
            verbose: false,
            no_confirm: false,
            dev_mode: false,
            spec_path: None,
            work_path: None,
            python_path: None,
        }
    }

    /// Freeze the answers. Unanswered output and mode questions fall back to
    /// the session defaults.
    pub fn finish(self, defaults: &SessionMemory) -> BuildConfig {
        BuildConfig {
            input_file: self.input_file,
            output: self.output.unwrap_or_else(|| defaults.last_output.clone()),
            name: self.name,
            onefile: self.onefile.unwrap_or(defaults.last_onefile),
            windowed: self.windowed.unwrap_or(defaults.last_windowed),
            icon: self.icon,
            hidden_imports: self.hidden_imports,
            exclude_modules: self.exclude_modules,
            add_data: self.add_data,
            upx_dir: self.upx_dir,
            runtime_hook: self.runtime_hook,
            version_file: self.version_file,
            manifest: self.manifest,
            key: self.key,
            strip: self.strip,
            bootloader_ignore_signals: self.bootloader_ignore_signals,
            codesign_identity: self.codesign_identity,
            entitlements_file: self.entitlements_file,
            clean: self.clean,
            debug: self.debug,
            verbose: self.verbose,
            no_confirm: self.no_confirm,
            dev_mode: self.dev_mode,
            spec_path: self.spec_path,
            work_path: self.work_path,
            python_path: self.python_path,
        }
    }
}

impl From<&BuildConfig> for ConfigBuilder {
    /// Reopen a finished configuration, e.g. to show it in the help panel
    fn from(config: &BuildConfig) -> Self {
        let config = config.clone();
        Self {
            input_file: config.input_file,
            output: Some(config.output),
            name: config.name,
            onefile: Some(config.onefile),
            windowed: Some(config.windowed),
            icon: config.icon,
            hidden_imports: config.hidden_imports,
            exclude_modules: config.exclude_modules,
            add_data: config.add_data,
            upx_dir: config.upx_dir,
            runtime_hook: config.runtime_hook,
            version_file: config.version_file,
            manifest: config.manifest,
            key: config.key,
            strip: config.strip,
            bootloader_ignore_signals: config.bootloader_ignore_signals,
            codesign_identity: config.codesign_identity,
            entitlements_file: config.entitlements_file,
            clean: config.clean,
            debug: config.debug,
            verbose: config.verbose,
            no_confirm: config.no_confirm,
            dev_mode: config.dev_mode,
            spec_path: config.spec_path,
            work_path: config.work_path,
            python_path: config.python_path,
        }
    }
}

/// Finished build configuration
#[derive(Debug, Clone, PartialEq)]
pub struct BuildConfig {
    /// Script to package (absolute, exists, `.py`)
    pub input_file: PathBuf,
    /// Directory the executable is expected in
    pub output: PathBuf,
    /// Executable base name; the packager uses the script name when absent
    pub name: Option<String>,
    /// Single-file bundle instead of a directory tree
    pub onefile: bool,
    /// Hide the console window
    pub windowed: bool,
    pub icon: Option<PathBuf>,
    pub hidden_imports: Vec<String>,
    pub exclude_modules: Vec<String>,
    /// `SRC;DEST` pairs, passed on unchecked
    pub add_data: Vec<String>,
    pub upx_dir: Option<PathBuf>,
    pub runtime_hook: Option<PathBuf>,
    pub version_file: Option<PathBuf>,
    pub manifest: Option<PathBuf>,
    /// Bytecode encryption key, passed on verbatim
    pub key: Option<String>,
    pub strip: bool,
    pub bootloader_ignore_signals: bool,
    pub codesign_identity: Option<String>,
    pub entitlements_file: Option<PathBuf>,
    pub clean: bool,
    pub debug: bool,
    pub verbose: bool,
    /// Start the build without a final confirmation
    pub no_confirm: bool,
    pub dev_mode: bool,
    pub spec_path: Option<PathBuf>,
    pub work_path: Option<PathBuf>,
    pub python_path: Option<String>,
}

impl BuildConfig {
    /// Configuration with every optional field absent and every toggle off
    pub fn new(input_file: PathBuf, output: PathBuf) -> Self {
        let defaults = SessionMemory {
            last_input: None,
            last_output: output,
            last_onefile: true,
            last_windowed: false,
        };
        ConfigBuilder::new(input_file).finish(&defaults)
    }
}
