//! Output port used by the collector and the runner
//!
//! Everything the tool shows the user goes through an [`OutputSink`], so a
//! host (or a test) can swap the terminal for something that records lines.

use console::Term;

use super::progress::{create_manual_spinner, BUILD_ANIMATION_FRAMES, BUILD_ANIMATION_INTERVAL};

/// Destination for user-facing text
pub trait OutputSink {
    /// Write one (possibly multi-line, possibly styled) line of output
    fn write_line(&mut self, line: &str);

    /// Play the decorative "Building..." animation.
    ///
    /// The animation has a fixed duration and says nothing about how far the
    /// packager actually is. Sinks that are not a terminal skip it.
    fn building_animation(&mut self) {}
}

/// Sink that writes to the process's stdout
pub struct TerminalSink {
    term: Term,
    animate: bool,
}

impl TerminalSink {
    pub fn new() -> Self {
        let term = Term::stdout();
        let animate = term.is_term();
        Self { term, animate }
    }
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for TerminalSink {
    fn write_line(&mut self, line: &str) {
        // A closed stdout leaves nothing to report to
        if let Err(e) = self.term.write_line(line) {
            log::warn!("failed to write to terminal: {}", e);
        }
    }

    fn building_animation(&mut self) {
        if !self.animate {
            return;
        }

        let spinner = create_manual_spinner("Building");
        for frame in 0..BUILD_ANIMATION_FRAMES {
            spinner.set_message(format!("Building{}", ".".repeat(frame % 4)));
            spinner.tick();
            std::thread::sleep(BUILD_ANIMATION_INTERVAL);
        }
        spinner.finish_and_clear();
    }
}
