//! Model capability traits
//!
//! A model is anything the runner can initialize, probe with a forward
//! pass, restore parameters into, and ask for predictions. Which concrete
//! model a session uses is decided by the [`ModelFactory`] handed to the
//! runner at construction, never by the runner itself.

use common::error::Result;
use common::params::ParameterStore;
use common::tensor::Tensor;

use config::RunConfig;

/// A model the inference runner can drive
pub trait Model {
    /// Result type produced by [`Model::infer`]
    type Output;

    /// Readies any model-level execution state before the first forward pass
    fn initialize(&mut self) -> Result<()>;

    /// Runs one forward pass
    ///
    /// The runner calls this once with a zero-valued input of the test
    /// data's shape and `training == false` to force parameter allocation;
    /// implementations that allocate lazily must have all parameters
    /// registered in [`Model::parameters`] after this call returns.
    fn forward(&mut self, input: &Tensor, training: bool) -> Result<Tensor>;

    /// Runs the model's inference entry point on prepared data
    fn infer(&mut self, data: &Tensor) -> Result<Self::Output>;

    /// Returns the model's named parameters
    fn parameters(&self) -> &ParameterStore;

    /// Returns the model's named parameters for checkpoint restore
    fn parameters_mut(&mut self) -> &mut ParameterStore;
}

/// Builds the model a session runs, from the session's configuration
pub trait ModelFactory {
    /// Model type this factory produces
    type Model: Model;

    /// Constructs one fresh model instance
    fn create(&self, config: &RunConfig) -> Result<Self::Model>;
}

impl<M, F> ModelFactory for F
where
    M: Model,
    F: Fn(&RunConfig) -> Result<M>,
{
    type Model = M;

    fn create(&self, config: &RunConfig) -> Result<M> {
        self(config)
    }
}
