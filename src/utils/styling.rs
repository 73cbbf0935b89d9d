//! Terminal styling helpers
//!
//! Each helper formats one message with `console` and hands it to an
//! [`OutputSink`], so the same look is kept whether the sink is a terminal or
//! a recorder.

use console::{style, Emoji};

use super::output::OutputSink;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static PACKAGE: Emoji<'_, '_> = Emoji("📦 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");

/// Print the welcome banner
pub fn print_banner(sink: &mut dyn OutputSink, version: &str) {
    let line = "─".repeat(50);

    sink.write_line("");
    sink.write_line(&format!("    {}", style(&line).dim()));
    sink.write_line(&format!(
        "    {}{}",
        PACKAGE,
        style("pyforge: Python script to executable").green().bold()
    ));
    sink.write_line(&format!(
        "    {}",
        style("Configure PyInstaller options via prompts").dim()
    ));
    sink.write_line(&format!("    {}", style(format!("v{}", version)).dim()));
    sink.write_line(&format!("    {}", style(&line).dim()));
    sink.write_line("");
}

/// Print a section header, e.g. above a table
pub fn print_section(sink: &mut dyn OutputSink, title: &str) {
    sink.write_line("");
    sink.write_line(&format!("    {}", style(title).cyan().bold()));
    sink.write_line(&format!("    {}", style("─".repeat(50)).dim()));
}

/// Print a success message
pub fn print_success(sink: &mut dyn OutputSink, message: &str) {
    sink.write_line(&format!(
        "    {} {}",
        style("✓").green().bold(),
        style(message).green()
    ));
}

/// Print a warning message
pub fn print_warning(sink: &mut dyn OutputSink, message: &str) {
    sink.write_line(&format!("    {} {}", style("!").yellow().bold(), style(message).yellow()));
}

/// Print an error message
pub fn print_error(sink: &mut dyn OutputSink, message: &str) {
    sink.write_line(&format!(
        "    {} {}",
        style("✗ Error:").red().bold(),
        message
    ));
}

/// Print an info message
pub fn print_info(sink: &mut dyn OutputSink, message: &str) {
    sink.write_line(&format!("    {}{}", INFO, message));
}

/// Print a labelled value, e.g. the command line or the output directory
pub fn print_labelled(sink: &mut dyn OutputSink, label: &str, value: &str) {
    sink.write_line(&format!("    {} {}", style(label).blue().bold(), value));
}

/// Print a failure line, for messages that already say what went wrong
pub fn print_failure(sink: &mut dyn OutputSink, message: &str) {
    sink.write_line(&format!("    {} {}", style("✗").red().bold(), style(message).red()));
}

/// Print output captured from another program without any decoration.
///
/// Trailing line breaks are dropped so the text does not end in blank lines,
/// and empty output prints nothing. Everything else is passed through as is.
pub fn print_captured(sink: &mut dyn OutputSink, text: &str) {
    let text = text.trim_end_matches(['\r', '\n']);
    if !text.is_empty() {
        sink.write_line(text);
    }
}

/// Print where the packager put the executable
pub fn print_completion(sink: &mut dyn OutputSink, output_dir: &str) {
    sink.write_line(&format!(
        "    {}{} {}",
        FOLDER,
        style("Executable located in:").bold(),
        output_dir
    ));
}
