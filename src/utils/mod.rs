//! Terminal output, styling and path helpers

pub mod output;
pub mod paths;
pub mod progress;
pub mod styling;

pub use output::*;
pub use paths::*;
pub use progress::*;
pub use styling::*;
