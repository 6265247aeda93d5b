//! Model Zoo inference runner
//!
//! This crate ties the workspace together and provides the public facade:
//! construct an [`InferenceRunner`] with a data source and a model
//! factory, and `run()` performs one inference session end to end,
//! restoring saved parameters from a checkpoint when one exists.
//!
//! ## Example
//!
//! ```rust,no_run
//! use model_zoo::{load_config, Flags, InferenceRunner, LinearModel, RunConfig, Tensor};
//! use clap::Parser;
//!
//! # fn main() -> model_zoo::Result<()> {
//! let config = load_config(&Flags::parse())?;
//! let runner = InferenceRunner::new(
//!     config,
//!     || Tensor::from_vec(&[1, 10], vec![0.5; 10]),
//!     |config: &RunConfig| LinearModel::from_config(config),
//! );
//! let predictions = runner.run()?;
//! # Ok(())
//! # }
//! ```

use tracing_subscriber::{fmt, EnvFilter};

pub use checkpoint::{load_model, save_model, RestoreOutcome};
pub use common::error::{Error, Result};
pub use common::params::ParameterStore;
pub use common::tensor::{get_shape, Shape, Tensor};
pub use config::{load_config, Flags, RunConfig};
pub use runner::{DataSource, InferenceRunner, LinearModel, Model, ModelFactory};

/// Initializes logging for the process
///
/// One-time process setup, kept separate from per-run logic. Respects
/// `RUST_LOG`; defaults to `info`. Safe to call more than once; later
/// calls are no-ops.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}
