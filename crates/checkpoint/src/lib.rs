//! Checkpoint save and restore for Model Zoo models
//!
//! A checkpoint is a single versioned JSON file holding a model's named
//! parameters. Restore is all-or-nothing: a missing file leaves the model
//! untouched, and an incompatible file fails before any parameter is
//! overwritten.

use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use common::error::{Error, Result};
use common::params::ParameterStore;

/// Current checkpoint file format version
const FORMAT_VERSION: u32 = 1;

/// On-disk checkpoint layout
#[derive(Debug, Serialize, Deserialize)]
struct CheckpointFile {
    format_version: u32,
    parameters: ParameterStore,
}

/// Outcome of a checkpoint restore attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Parameters were overwritten from the checkpoint
    Restored {
        /// Number of parameters restored
        parameters: usize,
    },
    /// No checkpoint exists at the configured location
    NotFound,
}

/// Saves a model's parameters to `dir/name`
///
/// Creates the checkpoint directory if it does not exist and returns the
/// path the checkpoint was written to.
pub fn save_model(params: &ParameterStore, dir: &Path, name: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(name);

    let file = fs::File::create(&path)?;
    let checkpoint = CheckpointFile {
        format_version: FORMAT_VERSION,
        parameters: params.clone(),
    };
    serde_json::to_writer(BufWriter::new(file), &checkpoint)?;

    info!(path = %path.display(), parameters = params.len(), "saved checkpoint");
    Ok(path)
}

/// Restores a model's parameters from `dir/name` if a checkpoint exists
///
/// A missing file is a no-op and returns [`RestoreOutcome::NotFound`]. A
/// file that cannot be parsed, carries an unknown format version, or whose
/// parameter names or shapes differ from the model's fails with a
/// checkpoint restore error; `target` is only mutated once the whole
/// checkpoint has been validated.
pub fn load_model(target: &mut ParameterStore, dir: &Path, name: &str) -> Result<RestoreOutcome> {
    let path = dir.join(name);
    if !path.exists() {
        debug!(path = %path.display(), "no checkpoint found");
        return Ok(RestoreOutcome::NotFound);
    }

    let file = fs::File::open(&path)?;
    let checkpoint: CheckpointFile =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            Error::CheckpointRestore(format!("unreadable checkpoint {:?}: {}", path, e))
        })?;

    if checkpoint.format_version != FORMAT_VERSION {
        return Err(Error::CheckpointRestore(format!(
            "checkpoint {:?} has format version {}, expected {}",
            path, checkpoint.format_version, FORMAT_VERSION
        )));
    }

    validate_compatible(target, &checkpoint.parameters, &path)?;

    let count = checkpoint.parameters.len();
    for (name, stored) in checkpoint.parameters.iter() {
        // validated above, every stored name exists in the target
        if let Some(param) = target.get_mut(name) {
            *param = stored.clone();
        }
    }

    info!(path = %path.display(), parameters = count, "restored checkpoint");
    Ok(RestoreOutcome::Restored { parameters: count })
}

fn validate_compatible(
    target: &ParameterStore,
    stored: &ParameterStore,
    path: &Path,
) -> Result<()> {
    for (name, tensor) in stored.iter() {
        match target.get(name) {
            None => {
                return Err(Error::CheckpointRestore(format!(
                    "checkpoint {:?} holds parameter {:?} the model does not define",
                    path, name
                )));
            }
            Some(param) if param.shape() != tensor.shape() => {
                return Err(Error::CheckpointRestore(format!(
                    "checkpoint {:?} parameter {:?} has shape {:?}, model expects {:?}",
                    path,
                    name,
                    tensor.shape(),
                    param.shape()
                )));
            }
            Some(_) => {}
        }
    }

    for name in target.names() {
        if !stored.contains(name) {
            return Err(Error::CheckpointRestore(format!(
                "checkpoint {:?} is missing parameter {:?}",
                path, name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::tensor::Tensor;

    fn sample_params() -> ParameterStore {
        let mut params = ParameterStore::new();
        params.insert(
            "weight",
            Tensor::from_vec(&[2, 2], vec![1.0, 2.0, 3.0, 4.0]).unwrap(),
        );
        params.insert("bias", Tensor::from_vec(&[2], vec![0.5, -0.5]).unwrap());
        params
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let saved = sample_params();
        save_model(&saved, dir.path(), "model.ckpt").unwrap();

        let mut target = ParameterStore::new();
        target.insert("weight", Tensor::zeros(&[2, 2]));
        target.insert("bias", Tensor::zeros(&[2]));

        let outcome = load_model(&mut target, dir.path(), "model.ckpt").unwrap();
        assert_eq!(outcome, RestoreOutcome::Restored { parameters: 2 });
        assert_eq!(target, saved);
    }

    #[test]
    fn test_missing_checkpoint_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut target = sample_params();
        let before = target.clone();

        let outcome = load_model(&mut target, dir.path(), "model.ckpt").unwrap();
        assert_eq!(outcome, RestoreOutcome::NotFound);
        assert_eq!(target, before);
    }

    #[test]
    fn test_shape_mismatch_fails_without_mutation() {
        let dir = tempfile::tempdir().unwrap();
        save_model(&sample_params(), dir.path(), "model.ckpt").unwrap();

        let mut target = ParameterStore::new();
        target.insert("weight", Tensor::zeros(&[3, 3]));
        target.insert("bias", Tensor::zeros(&[2]));
        let before = target.clone();

        let err = load_model(&mut target, dir.path(), "model.ckpt").unwrap_err();
        assert!(err.is_checkpoint_restore());
        assert_eq!(target, before);
    }

    #[test]
    fn test_unknown_parameter_fails() {
        let dir = tempfile::tempdir().unwrap();
        save_model(&sample_params(), dir.path(), "model.ckpt").unwrap();

        let mut target = ParameterStore::new();
        target.insert("weight", Tensor::zeros(&[2, 2]));

        let err = load_model(&mut target, dir.path(), "model.ckpt").unwrap_err();
        assert!(err.is_checkpoint_restore());
    }

    #[test]
    fn test_missing_parameter_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut partial = ParameterStore::new();
        partial.insert("weight", Tensor::zeros(&[2, 2]));
        save_model(&partial, dir.path(), "model.ckpt").unwrap();

        let mut target = sample_params();
        let err = load_model(&mut target, dir.path(), "model.ckpt").unwrap_err();
        assert!(err.is_checkpoint_restore());
    }

    #[test]
    fn test_corrupt_checkpoint_fails() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("model.ckpt"), "not json").unwrap();

        let mut target = sample_params();
        let err = load_model(&mut target, dir.path(), "model.ckpt").unwrap_err();
        assert!(err.is_checkpoint_restore());
    }

    #[test]
    fn test_truncated_tensor_fails() {
        let dir = tempfile::tempdir().unwrap();
        // shape claims three elements but the buffer carries one
        let raw = r#"{
            "format_version": 1,
            "parameters": { "entries": { "weight": { "shape": [3, 1], "data": [9.0] } } }
        }"#;
        fs::write(dir.path().join("model.ckpt"), raw).unwrap();

        let mut target = ParameterStore::new();
        target.insert("weight", Tensor::zeros(&[3, 1]));
        let before = target.clone();

        let err = load_model(&mut target, dir.path(), "model.ckpt").unwrap_err();
        assert!(err.is_checkpoint_restore());
        assert_eq!(target, before);
    }

    #[test]
    fn test_version_mismatch_fails() {
        let dir = tempfile::tempdir().unwrap();
        let raw = serde_json::json!({
            "format_version": 99,
            "parameters": { "entries": {} }
        });
        fs::write(
            dir.path().join("model.ckpt"),
            serde_json::to_string(&raw).unwrap(),
        )
        .unwrap();

        let mut target = ParameterStore::new();
        let err = load_model(&mut target, dir.path(), "model.ckpt").unwrap_err();
        assert!(err.is_checkpoint_restore());
    }
}
