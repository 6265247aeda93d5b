//! Common types for the Model Zoo inference runner
//!
//! This crate provides the shared vocabulary used across the workspace:
//! error types, the dense tensor type, and the named parameter store that
//! checkpoints are saved from and restored into.

pub mod error;
pub mod params;
pub mod tensor;

// Re-export commonly used types
pub use error::{Error, Result};
pub use params::ParameterStore;
pub use tensor::{get_shape, Shape, Tensor};
