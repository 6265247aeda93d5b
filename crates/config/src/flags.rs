//! Process-wide flag surface
//!
//! This module defines the command-line flags an inference session is
//! configured from. Every flag can also be supplied through the
//! environment, so embedding callers can override defaults without
//! touching the command line.

use std::path::PathBuf;

use clap::Parser;

/// Command-line flags for an inference run
#[derive(Parser, Debug, Clone)]
#[command(name = "model-zoo", about = "Run inference with a pre-trained model")]
pub struct Flags {
    /// Directory checkpoints are restored from
    #[arg(long, default_value = "checkpoints", env = "MODEL_ZOO_CHECKPOINT_DIR")]
    pub checkpoint_dir: PathBuf,

    /// Checkpoint file name inside the checkpoint directory
    #[arg(long, default_value = "model.ckpt", env = "MODEL_ZOO_CHECKPOINT_NAME")]
    pub checkpoint_name: String,

    /// Optional JSON file of model-specific hyperparameters
    #[arg(long, env = "MODEL_ZOO_CONFIG")]
    pub config: Option<PathBuf>,
}
