//! pyforge: interactive front-end for packaging Python scripts
//!
//! Collects PyInstaller options through prompts, composes the packager
//! command line and runs it.

pub mod build;
pub mod cli;
pub mod report;
pub mod utils;
