//! Interactive prompts using dialoguer

use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use thiserror::Error;

use super::config::ConfigBuilder;
use crate::report::display_help_state;
use crate::utils::{print_warning, OutputSink};

/// Keyword that shows the collected state at a yes/no prompt
pub const HELP_KEYWORD: &str = "help";

/// Errors raised while reading an answer from the user
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt failed: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    #[error("could not read answer: {0}")]
    Io(#[from] std::io::Error),
}

/// Input port for answers
pub trait Prompter {
    /// Ask for free text. A blank answer yields `default`.
    fn input(&mut self, prompt: &str, default: &str) -> Result<String, PromptError>;

    /// Ask a plain yes/no question
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, PromptError>;
}

/// Prompter reading from the user's terminal
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&mut self, prompt: &str, default: &str) -> Result<String, PromptError> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default.to_string())
            .show_default(!default.is_empty())
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, PromptError> {
        let confirmed = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(confirmed)
    }
}

/// Answer to a yes/no/help question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolAnswer {
    Yes,
    No,
    Help,
}

/// Interpret one typed answer; `None` means the text was not understood
pub fn parse_bool_answer(raw: &str) -> Option<BoolAnswer> {
    match raw.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(BoolAnswer::Yes),
        "n" | "no" => Some(BoolAnswer::No),
        HELP_KEYWORD => Some(BoolAnswer::Help),
        _ => None,
    }
}

/// Ask a yes/no question that also accepts `help`.
///
/// `help` prints the configuration collected so far and asks the same
/// question again. Unrecognised answers print a warning and ask again.
/// Neither path touches `state`.
pub fn ask_bool_with_help(
    prompter: &mut dyn Prompter,
    sink: &mut dyn OutputSink,
    prompt: &str,
    default: bool,
    state: &ConfigBuilder,
) -> Result<bool, PromptError> {
    let default_str = if default { "y" } else { "n" };
    let full_prompt = format!("{} [y/n/{}]", prompt, HELP_KEYWORD);

    loop {
        let answer = prompter.input(&full_prompt, default_str)?;
        match parse_bool_answer(&answer) {
            Some(BoolAnswer::Yes) => return Ok(true),
            Some(BoolAnswer::No) => return Ok(false),
            Some(BoolAnswer::Help) => display_help_state(sink, state),
            None => print_warning(sink, "Please answer 'y', 'n', or 'help'."),
        }
    }
}
