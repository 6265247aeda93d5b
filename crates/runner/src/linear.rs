//! Reference linear model
//!
//! A single affine layer that allocates its parameters lazily on the first
//! forward pass, from the input's feature dimension. It exists to exercise
//! the whole pipeline end to end: the runner's shape probe makes the
//! parameters addressable, checkpoint restore overwrites them, and `infer`
//! maps a rank-2 batch to predictions.

use tracing::debug;

use common::error::{Error, Result};
use common::params::ParameterStore;
use common::tensor::Tensor;

use config::RunConfig;

use crate::model::Model;

const WEIGHT: &str = "weight";
const BIAS: &str = "bias";

/// Default scale for random weight initialization
const INIT_SCALE: f32 = 0.05;

/// Affine model `y = x W + b` over a rank-2 input batch
pub struct LinearModel {
    output_dim: usize,
    input_dim: Option<usize>,
    params: ParameterStore,
    initialized: bool,
}

impl LinearModel {
    /// Creates a model from run configuration
    ///
    /// Reads the `output_dim` hyperparameter, defaulting to 1.
    pub fn from_config(config: &RunConfig) -> Result<Self> {
        let output_dim = config.get_usize("output_dim").unwrap_or(1);
        if output_dim == 0 {
            return Err(Error::Config("output_dim must be positive".into()));
        }
        Ok(Self::with_output_dim(output_dim))
    }

    /// Creates a model with an explicit output dimension
    pub fn with_output_dim(output_dim: usize) -> Self {
        Self {
            output_dim,
            input_dim: None,
            params: ParameterStore::new(),
            initialized: false,
        }
    }

    /// Allocates weight and bias from the input's feature dimension
    fn build(&mut self, input_dim: usize) {
        debug!(input_dim, output_dim = self.output_dim, "allocating parameters");
        self.params.insert(
            WEIGHT,
            Tensor::random(&[input_dim, self.output_dim], INIT_SCALE),
        );
        self.params.insert(BIAS, Tensor::zeros(&[self.output_dim]));
        self.input_dim = Some(input_dim);
    }
}

impl Model for LinearModel {
    type Output = Tensor;

    fn initialize(&mut self) -> Result<()> {
        self.initialized = true;
        Ok(())
    }

    fn forward(&mut self, input: &Tensor, _training: bool) -> Result<Tensor> {
        if !self.initialized {
            return Err(Error::Model("forward called before initialize".into()));
        }
        if input.rank() != 2 {
            return Err(Error::Shape(format!(
                "expected a rank-2 batch, got shape {:?}",
                input.shape()
            )));
        }

        let (batch, features) = (input.shape()[0], input.shape()[1]);
        if self.input_dim.is_none() {
            self.build(features);
        }
        let input_dim = self.input_dim.unwrap_or(features);
        if features != input_dim {
            return Err(Error::Shape(format!(
                "input has {} features, model was built for {}",
                features, input_dim
            )));
        }

        let weight = self
            .params
            .get(WEIGHT)
            .ok_or_else(|| Error::Model("weight parameter missing".into()))?;
        let bias = self
            .params
            .get(BIAS)
            .ok_or_else(|| Error::Model("bias parameter missing".into()))?;

        let mut out = vec![0.0f32; batch * self.output_dim];
        let x = input.as_slice();
        let w = weight.as_slice();
        let b = bias.as_slice();
        for row in 0..batch {
            for col in 0..self.output_dim {
                let mut acc = b[col];
                for k in 0..input_dim {
                    acc += x[row * input_dim + k] * w[k * self.output_dim + col];
                }
                out[row * self.output_dim + col] = acc;
            }
        }

        Tensor::from_vec(&[batch, self.output_dim], out)
    }

    fn infer(&mut self, data: &Tensor) -> Result<Tensor> {
        self.forward(data, false)
            .map_err(|e| Error::Inference(e.to_string()))
    }

    fn parameters(&self) -> &ParameterStore {
        &self.params
    }

    fn parameters_mut(&mut self) -> &mut ParameterStore {
        &mut self.params
    }
}
