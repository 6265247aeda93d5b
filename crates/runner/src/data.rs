//! Data source contract
//!
//! Supplying the test data is the one decision the runner always defers
//! to its caller. The trait replaces the abstract `prepare_data` hook of
//! a base class: a session cannot be constructed without one, so a
//! missing implementation is a compile error rather than a runtime fault.

use common::error::Result;
use common::tensor::Tensor;

/// Produces the input data one inference session runs on
pub trait DataSource {
    /// Prepares the test data, in the shape the paired model expects
    fn prepare_data(&mut self) -> Result<Tensor>;
}

impl<F> DataSource for F
where
    F: FnMut() -> Result<Tensor>,
{
    fn prepare_data(&mut self) -> Result<Tensor> {
        self()
    }
}
