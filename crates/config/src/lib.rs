//! Configuration for the Model Zoo inference runner
//!
//! This crate provides the process-wide flag surface and the run
//! configuration loader that turns parsed flags into the immutable
//! settings a single inference session consumes.

pub mod flags;
pub mod run;

// Re-export commonly used types
pub use flags::Flags;
pub use run::{load_config, RunConfig};
