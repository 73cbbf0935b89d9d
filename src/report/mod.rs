//! Report module - tables describing the build configuration

pub mod summary;

pub use summary::*;
