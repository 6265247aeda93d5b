//! Dense tensor type
//!
//! This module defines the minimal dense `f32` tensor the inference runner
//! moves between data sources, models, and checkpoints, along with the
//! shape inspector used to build the zero-valued probe input.

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Shape descriptor for a tensor, outermost dimension first
pub type Shape = Vec<usize>;

/// Dense tensor of `f32` values in row-major order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tensor {
    shape: Shape,
    data: Vec<f32>,
}

// Deserialization goes through `from_vec` so a decoded tensor always
// upholds the shape/buffer-length invariant, whatever the input claims.
impl<'de> Deserialize<'de> for Tensor {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            shape: Shape,
            data: Vec<f32>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Tensor::from_vec(&raw.shape, raw.data).map_err(serde::de::Error::custom)
    }
}

impl Tensor {
    /// Creates a tensor of the given shape filled with zeros
    pub fn zeros(shape: &[usize]) -> Self {
        Self {
            shape: shape.to_vec(),
            data: vec![0.0; shape.iter().product()],
        }
    }

    /// Creates a tensor of the given shape with values drawn uniformly
    /// from `[-scale, scale]`
    pub fn random(shape: &[usize], scale: f32) -> Self {
        let mut rng = rand::thread_rng();
        let data = (0..shape.iter().product::<usize>())
            .map(|_| rng.gen_range(-scale..=scale))
            .collect();
        Self {
            shape: shape.to_vec(),
            data,
        }
    }

    /// Creates a tensor from a shape and a flat value buffer
    ///
    /// Fails if the buffer length does not match the shape's element count.
    pub fn from_vec(shape: &[usize], data: Vec<f32>) -> Result<Self> {
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(Error::Shape(format!(
                "buffer of {} values does not fit shape {:?} ({} elements)",
                data.len(),
                shape,
                expected
            )));
        }
        Ok(Self {
            shape: shape.to_vec(),
            data,
        })
    }

    /// Returns the tensor's shape, outermost dimension first
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the number of dimensions
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Returns the total number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the tensor holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the values as a flat slice in row-major order
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Returns the values as a mutable flat slice
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }
}

/// Returns the shape of a tensor
///
/// Shape inspector used by the runner to size the zero-valued probe input
/// that forces a model to allocate its parameters.
pub fn get_shape(tensor: &Tensor) -> &[usize] {
    tensor.shape()
}
