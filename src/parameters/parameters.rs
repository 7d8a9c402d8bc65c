//! Parameters collection implementation
//!
//! [`Parameters`] is an ordered collection of [`Parameter`] objects and the
//! ready-made leaf for parameter trees. Parameters are reported and assigned
//! positionally in the order they were added.

use crate::error::Result;
use crate::parameters::parameter::{Parameter, ParameterError};
use crate::parameters::reconcile::merge_args;
use crate::parameters::traits::{HasParams, ParamMap};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// An ordered collection of named parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Map of parameter names to Parameter objects, in insertion order
    params: IndexMap<String, Parameter>,
}

impl Parameters {
    /// Create a new empty parameters collection
    ///
    /// # Examples
    ///
    /// ```
    /// use paramtree_rs::parameters::Parameters;
    ///
    /// let params = Parameters::new();
    /// assert_eq!(params.len(), 0);
    /// ```
    pub fn new() -> Self {
        Self {
            params: IndexMap::new(),
        }
    }

    /// Add a parameter to the collection
    ///
    /// # Returns
    ///
    /// `Ok(())` if the parameter was added, or an error if the name is empty
    /// or already taken, or the value is NaN
    pub fn add(&mut self, param: Parameter) -> std::result::Result<(), ParameterError> {
        let name = param.name().to_string();

        if name.is_empty() {
            return Err(ParameterError::InvalidName {
                name,
                reason: "name must not be empty".to_string(),
            });
        }
        if self.params.contains_key(&name) {
            return Err(ParameterError::DuplicateParameter { name });
        }
        // Stored values always pass `set_value`
        if param.value().is_nan() {
            return Err(ParameterError::InvalidValue {
                name,
                value: param.value(),
            });
        }

        self.params.insert(name, param);
        Ok(())
    }

    /// Add a new unbounded parameter with the given name and value
    ///
    /// # Examples
    ///
    /// ```
    /// use paramtree_rs::parameters::Parameters;
    ///
    /// let mut params = Parameters::new();
    /// params.add_param("spread", 0.1).unwrap();
    /// assert!(params.add_param("spread", 0.2).is_err());
    /// assert_eq!(params.len(), 1);
    /// ```
    pub fn add_param(&mut self, name: &str, value: f64) -> std::result::Result<(), ParameterError> {
        self.add(Parameter::new(name, value))
    }

    /// Add a new parameter with the given name, value, and bounds
    pub fn add_param_with_bounds(
        &mut self,
        name: &str,
        value: f64,
        min: f64,
        max: f64,
    ) -> std::result::Result<(), ParameterError> {
        let param = Parameter::with_bounds(name, value, min, max)?;
        self.add(param)
    }

    /// Get a parameter by name
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.params.get(name)
    }

    /// Get a mutable reference to a parameter by name
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Parameter> {
        self.params.get_mut(name)
    }

    /// Check if the collection contains a parameter with the given name
    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Get the number of parameters in the collection
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over the parameters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.params.values()
    }

    /// Reset every parameter to its initial value
    pub fn reset_all(&mut self) {
        for param in self.params.values_mut() {
            param.reset();
        }
    }
}

impl HasParams for Parameters {
    fn get_params(&self) -> ParamMap {
        self.params
            .iter()
            .map(|(name, param)| (name.clone(), param.value()))
            .collect()
    }

    fn set_params(&mut self, args: &[f64], kwargs: &ParamMap) -> Result<Vec<f64>> {
        let (updates, rest) = merge_args(self.params.keys().cloned(), args, kwargs);
        if !rest.is_empty() {
            trace!(surplus = rest.len(), "leaf dropped surplus positional values");
        }

        for (name, value) in updates {
            match self.params.get_mut(&name) {
                Some(param) => param.set_value(value)?,
                None => trace!(param = %name, "leaf ignored unknown parameter"),
            }
        }

        Ok(Vec::new())
    }

    fn accepts(&self, name: &str) -> bool {
        self.contains(name)
    }
}
