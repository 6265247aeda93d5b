//! Error types for the common crate
//!
//! This module defines the common error types used throughout the Model Zoo
//! inference runner.

use thiserror::Error;

/// Result type for Model Zoo operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for Model Zoo operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Shape error
    #[error("Shape error: {0}")]
    Shape(String),

    /// Data preparation error
    #[error("Data error: {0}")]
    Data(String),

    /// Model error
    #[error("Model error: {0}")]
    Model(String),

    /// Checkpoint restore error
    #[error("Checkpoint restore error: {0}")]
    CheckpointRestore(String),

    /// Inference error
    #[error("Inference error: {0}")]
    Inference(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Returns true if the error is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Returns true if the error is a shape error
    pub fn is_shape(&self) -> bool {
        matches!(self, Error::Shape(_))
    }

    /// Returns true if the error is a checkpoint restore error
    pub fn is_checkpoint_restore(&self) -> bool {
        matches!(self, Error::CheckpointRestore(_))
    }

    /// Returns true if the error is an inference error
    pub fn is_inference(&self) -> bool {
        matches!(self, Error::Inference(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_predicates() {
        assert!(Error::Config("missing flag".into()).is_config());
        assert!(Error::CheckpointRestore("bad shape".into()).is_checkpoint_restore());
        assert!(!Error::Model("boom".into()).is_checkpoint_restore());
    }

    #[test]
    fn test_error_display() {
        let err = Error::CheckpointRestore("shape mismatch for weight".into());
        assert_eq!(
            err.to_string(),
            "Checkpoint restore error: shape mismatch for weight"
        );
    }
}
