//! Named parameter store
//!
//! This module defines the ordered name -> tensor map that models expose
//! for checkpoint save and restore.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tensor::Tensor;

/// Ordered collection of named model parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterStore {
    entries: BTreeMap<String, Tensor>,
}

impl ParameterStore {
    /// Creates an empty parameter store
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parameter, replacing any previous value under the name
    pub fn insert(&mut self, name: impl Into<String>, tensor: Tensor) {
        self.entries.insert(name.into(), tensor);
    }

    /// Gets a parameter by name
    pub fn get(&self, name: &str) -> Option<&Tensor> {
        self.entries.get(name)
    }

    /// Gets a mutable parameter by name
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Tensor> {
        self.entries.get_mut(name)
    }

    /// Returns true if a parameter with the given name exists
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the parameter names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over name/tensor pairs in sorted name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tensor)> {
        self.entries.iter().map(|(name, t)| (name.as_str(), t))
    }

    /// Returns the number of parameters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no parameters
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut params = ParameterStore::new();
        params.insert("weight", Tensor::zeros(&[2, 3]));
        params.insert("bias", Tensor::zeros(&[3]));

        assert_eq!(params.len(), 2);
        assert!(params.contains("weight"));
        assert_eq!(params.get("bias").unwrap().shape(), &[3]);
        assert!(params.get("missing").is_none());
    }

    #[test]
    fn test_names_are_sorted() {
        let mut params = ParameterStore::new();
        params.insert("weight", Tensor::zeros(&[1]));
        params.insert("bias", Tensor::zeros(&[1]));

        let names: Vec<_> = params.names().collect();
        assert_eq!(names, vec!["bias", "weight"]);
    }
}
