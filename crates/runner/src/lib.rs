//! Inference session orchestration for Model Zoo
//!
//! This crate defines the model capability traits and the
//! [`InferenceRunner`] that drives one inference session: prepare data,
//! build the model, force parameter allocation with a shape probe, restore
//! a checkpoint if one exists, and run the model's own inference entry
//! point.

pub mod data;
pub mod inferer;
pub mod linear;
pub mod model;

// Re-export commonly used types
pub use data::DataSource;
pub use inferer::InferenceRunner;
pub use linear::LinearModel;
pub use model::{Model, ModelFactory};
