//! Build module - composing and running the packager command

pub mod command;
pub mod runner;

pub use command::*;
pub use runner::*;
