//! Inference session orchestration
//!
//! One [`InferenceRunner`] drives exactly one inference session. The
//! sequence is fixed: prepare data, build the model, initialize it, force
//! parameter allocation with a zero-valued shape probe, restore a
//! checkpoint if one exists, then delegate to the model's `infer`. Every
//! failure aborts the session and surfaces to the caller unchanged.

use tracing::{debug, info};

use checkpoint::RestoreOutcome;
use common::error::Result;
use common::tensor::{get_shape, Tensor};
use config::{load_config, Flags, RunConfig};

use crate::data::DataSource;
use crate::model::{Model, ModelFactory};

/// Runs one inference session with a caller-supplied data source and model
/// factory
pub struct InferenceRunner<D, F> {
    config: RunConfig,
    source: D,
    factory: F,
}

impl<D, F> InferenceRunner<D, F>
where
    D: DataSource,
    F: ModelFactory,
{
    /// Creates a runner from an already-loaded configuration
    pub fn new(config: RunConfig, source: D, factory: F) -> Self {
        Self {
            config,
            source,
            factory,
        }
    }

    /// Creates a runner by loading configuration from a parsed flag set
    pub fn from_flags(flags: &Flags, source: D, factory: F) -> Result<Self> {
        Ok(Self::new(load_config(flags)?, source, factory))
    }

    /// Returns the configuration this session runs with
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Runs the inference session and returns the model's output
    ///
    /// Consumes the runner: a session is single-use, and a fresh model is
    /// constructed on every run. If no checkpoint exists at the configured
    /// location the model keeps its freshly initialized parameters; an
    /// incompatible checkpoint aborts the session before `infer` is
    /// reached.
    pub fn run(mut self) -> Result<<F::Model as Model>::Output> {
        let test_data = self.source.prepare_data()?;
        debug!(shape = ?get_shape(&test_data), "prepared test data");

        let mut model = self.factory.create(&self.config)?;
        model.initialize()?;

        // Zero-valued probe with the test data's shape forces the model to
        // allocate its parameters; the output is discarded.
        let probe = Tensor::zeros(get_shape(&test_data));
        model.forward(&probe, false)?;

        match checkpoint::load_model(
            model.parameters_mut(),
            self.config.checkpoint_dir(),
            self.config.checkpoint_name(),
        )? {
            RestoreOutcome::Restored { parameters } => {
                info!(parameters, "restored model parameters from checkpoint");
            }
            RestoreOutcome::NotFound => {
                debug!("no checkpoint found, keeping initialized parameters");
            }
        }

        model.infer(&test_data)
    }
}
