//! Spinner helpers using indicatif

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Number of frames in the decorative building animation
pub const BUILD_ANIMATION_FRAMES: usize = 20;

/// Delay between two frames of the building animation
pub const BUILD_ANIMATION_INTERVAL: Duration = Duration::from_millis(80);

/// Create a spinner that only moves when the caller ticks it.
///
/// No background ticker thread is started.
pub fn create_manual_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(spinner_style());
    pb.set_message(message.to_string());
    pb
}

fn spinner_style() -> ProgressStyle {
    // The template is a literal, so parsing only fails if it is edited badly
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg:.blue.bold}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
}
