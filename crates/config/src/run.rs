//! Run configuration
//!
//! This module turns the parsed flag set into the immutable configuration
//! object one inference session consumes: the checkpoint location plus an
//! opaque map of model-specific hyperparameters.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use common::error::{Error, Result};

use crate::flags::Flags;

/// Immutable configuration for a single inference run
#[derive(Debug, Clone)]
pub struct RunConfig {
    checkpoint_dir: PathBuf,
    checkpoint_name: String,
    hyperparameters: HashMap<String, Value>,
}

impl RunConfig {
    /// Returns the directory checkpoints are restored from
    pub fn checkpoint_dir(&self) -> &Path {
        &self.checkpoint_dir
    }

    /// Returns the checkpoint file name
    pub fn checkpoint_name(&self) -> &str {
        &self.checkpoint_name
    }

    /// Gets a hyperparameter as a `usize`
    pub fn get_usize(&self, name: &str) -> Option<usize> {
        self.hyperparameters
            .get(name)
            .and_then(Value::as_u64)
            .map(|v| v as usize)
    }

    /// Gets a hyperparameter as an `f64`
    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.hyperparameters.get(name).and_then(Value::as_f64)
    }

    /// Gets a hyperparameter as a string slice
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.hyperparameters.get(name).and_then(Value::as_str)
    }

    /// Gets a hyperparameter as a `bool`
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.hyperparameters.get(name).and_then(Value::as_bool)
    }

    /// Returns the number of hyperparameters
    pub fn hyperparameter_count(&self) -> usize {
        self.hyperparameters.len()
    }
}

/// Loads the run configuration from a parsed flag set
///
/// Reads the optional hyperparameter file named by `--config`; the file
/// must hold a single JSON object. Missing or malformed input surfaces as
/// a configuration error.
pub fn load_config(flags: &Flags) -> Result<RunConfig> {
    if flags.checkpoint_name.trim().is_empty() {
        return Err(Error::Config("checkpoint_name must not be empty".into()));
    }

    let hyperparameters = match &flags.config {
        Some(path) => read_hyperparameters(path)?,
        None => HashMap::new(),
    };

    debug!(
        checkpoint_dir = %flags.checkpoint_dir.display(),
        checkpoint_name = %flags.checkpoint_name,
        hyperparameters = hyperparameters.len(),
        "loaded run configuration"
    );

    Ok(RunConfig {
        checkpoint_dir: flags.checkpoint_dir.clone(),
        checkpoint_name: flags.checkpoint_name.clone(),
        hyperparameters,
    })
}

fn read_hyperparameters(path: &Path) -> Result<HashMap<String, Value>> {
    let raw = fs::read_to_string(path).map_err(|e| {
        Error::Config(format!(
            "failed to read hyperparameter file {:?}: {}",
            path, e
        ))
    })?;

    let value: Value = serde_json::from_str(&raw).map_err(|e| {
        Error::Config(format!(
            "failed to parse hyperparameter file {:?}: {}",
            path, e
        ))
    })?;

    match value {
        Value::Object(map) => Ok(map.into_iter().collect()),
        other => Err(Error::Config(format!(
            "hyperparameter file {:?} must hold a JSON object, got {}",
            path, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_load_config_defaults() {
        let flags = Flags::parse_from(["model-zoo"]);
        let config = load_config(&flags).unwrap();

        assert_eq!(config.checkpoint_dir(), Path::new("checkpoints"));
        assert_eq!(config.checkpoint_name(), "model.ckpt");
        assert_eq!(config.hyperparameter_count(), 0);
    }

    #[test]
    fn test_load_config_rejects_empty_checkpoint_name() {
        let mut flags = Flags::parse_from(["model-zoo"]);
        flags.checkpoint_name = "  ".into();

        let err = load_config(&flags).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_load_config_reads_hyperparameter_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hparams.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, r#"{{"output_dim": 4, "scale": 0.5, "name": "demo"}}"#).unwrap();

        let mut flags = Flags::parse_from(["model-zoo"]);
        flags.config = Some(path);

        let config = load_config(&flags).unwrap();
        assert_eq!(config.get_usize("output_dim"), Some(4));
        assert_eq!(config.get_f64("scale"), Some(0.5));
        assert_eq!(config.get_str("name"), Some("demo"));
        assert_eq!(config.get_bool("missing"), None);
    }

    #[test]
    fn test_load_config_rejects_non_object_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hparams.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let mut flags = Flags::parse_from(["model-zoo"]);
        flags.config = Some(path);

        let err = load_config(&flags).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_load_config_rejects_missing_file() {
        let mut flags = Flags::parse_from(["model-zoo"]);
        flags.config = Some(PathBuf::from("/nonexistent/hparams.json"));

        let err = load_config(&flags).unwrap_err();
        assert!(err.is_config());
    }
}
