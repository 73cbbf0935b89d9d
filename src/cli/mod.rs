//! CLI module - argument parsing, interactive prompts and configuration collection

pub mod args;
pub mod collector;
pub mod config;
pub mod prompts;
pub mod session;

pub use args::*;
pub use collector::*;
pub use config::*;
pub use prompts::*;
pub use session::*;
