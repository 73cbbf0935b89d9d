//! Shared test utilities: scripted answers, a recording sink and fixture files

#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use pyforge::cli::{PromptError, Prompter};
use pyforge::utils::{resolve_path, OutputSink};
use tempfile::TempDir;

/// Upper bound on prompts per test, so a broken loop fails instead of hanging
const MAX_PROMPTS: usize = 500;

/// Prompter answering from per-prompt queues.
///
/// Answers are matched on the start of the prompt text. A prompt with no
/// queued answer gets a blank input (the default) or the default confirmation.
#[derive(Default)]
pub struct ScriptedPrompter {
    inputs: Vec<(String, VecDeque<String>)>,
    confirms: Vec<(String, VecDeque<bool>)>,
    /// Every prompt asked, in order
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue text answers for prompts starting with `prefix`
    pub fn answer(mut self, prefix: &str, answers: &[&str]) -> Self {
        self.inputs.push((
            prefix.to_string(),
            answers.iter().map(|a| a.to_string()).collect(),
        ));
        self
    }

    /// Queue confirmation answers for prompts starting with `prefix`
    pub fn confirm_with(mut self, prefix: &str, answers: &[bool]) -> Self {
        self.confirms
            .push((prefix.to_string(), answers.iter().copied().collect()));
        self
    }

    /// Number of times a prompt starting with `prefix` was asked
    pub fn times_asked(&self, prefix: &str) -> usize {
        self.asked.iter().filter(|p| p.starts_with(prefix)).count()
    }

    fn record(&mut self, prompt: &str) -> Result<(), PromptError> {
        self.asked.push(prompt.to_string());
        if self.asked.len() > MAX_PROMPTS {
            return Err(PromptError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "scripted prompter ran out of patience",
            )));
        }
        Ok(())
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, prompt: &str, default: &str) -> Result<String, PromptError> {
        self.record(prompt)?;
        let queued = self
            .inputs
            .iter_mut()
            .find(|(prefix, answers)| prompt.starts_with(prefix.as_str()) && !answers.is_empty())
            .and_then(|(_, answers)| answers.pop_front());

        match queued {
            Some(answer) if !answer.is_empty() => Ok(answer),
            _ => Ok(default.to_string()),
        }
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, PromptError> {
        self.record(prompt)?;
        let queued = self
            .confirms
            .iter_mut()
            .find(|(prefix, answers)| prompt.starts_with(prefix.as_str()) && !answers.is_empty())
            .and_then(|(_, answers)| answers.pop_front());

        Ok(queued.unwrap_or(default))
    }
}

/// Sink that keeps every line for later inspection
#[derive(Default)]
pub struct CaptureSink {
    pub lines: Vec<String>,
    pub animations: usize,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All output with styling removed
    pub fn text(&self) -> String {
        console::strip_ansi_codes(&self.lines.join("\n")).into_owned()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.text().contains(needle)
    }
}

impl OutputSink for CaptureSink {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn building_animation(&mut self) {
        self.animations += 1;
    }
}

/// Create `name` inside `dir` with a trivial Python body
pub fn write_script(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, "print('hello')\n").unwrap();
    path
}

/// Temporary directory holding `app.py`, plus the canonical script path
pub fn temp_project() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let script = write_script(temp_dir.path(), "app.py");
    let resolved = canonical(&script);
    (temp_dir, resolved)
}

/// Canonical form of an existing path, for comparisons with resolved values
pub fn canonical(path: &Path) -> PathBuf {
    resolve_path(path.to_str().unwrap())
}
