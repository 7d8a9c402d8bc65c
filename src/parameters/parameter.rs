//! Parameter definition and implementation
//!
//! A [`Parameter`] is a single named scalar with optional bounds. It is the
//! building block of the provided [`Parameters`](super::Parameters) leaf.

use crate::parameters::bounds::{Bounds, BoundsError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when working with parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("Bounds error: {0}")]
    BoundsError(#[from] BoundsError),

    #[error("Parameter '{name}' already exists")]
    DuplicateParameter { name: String },

    #[error("Parameter name '{name}' is invalid: {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Parameter '{name}' cannot hold the value {value}")]
    InvalidValue { name: String, value: f64 },
}

/// A named scalar parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Name of the parameter
    name: String,

    /// Current value of the parameter
    value: f64,

    /// Initial value when created (for reset operations)
    init_value: f64,

    /// Minimum and maximum bounds for the parameter value
    #[serde(default)]
    bounds: Bounds,
}

impl Parameter {
    /// Create a new unbounded parameter with the given name and value
    ///
    /// The value is not validated here; [`Parameters::add`](super::Parameters::add)
    /// refuses a NaN value.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramtree_rs::parameters::parameter::Parameter;
    ///
    /// let param = Parameter::new("spread", 0.3);
    /// assert_eq!(param.name(), "spread");
    /// assert_eq!(param.value(), 0.3);
    /// ```
    pub fn new(name: &str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            value,
            init_value: value,
            bounds: Bounds::default(),
        }
    }

    /// Create a new parameter with the given name, value, and bounds
    ///
    /// The value is clamped into the bounds.
    ///
    /// # Returns
    ///
    /// The parameter, or an error if the bounds are invalid or the value is NaN
    pub fn with_bounds(name: &str, value: f64, min: f64, max: f64) -> Result<Self, ParameterError> {
        let bounds = Bounds::new(min, max)?;
        if value.is_nan() {
            return Err(ParameterError::InvalidValue {
                name: name.to_string(),
                value,
            });
        }
        let value = bounds.clamp(value);

        Ok(Self {
            name: name.to_string(),
            value,
            init_value: value,
            bounds,
        })
    }

    /// Get the name of the parameter
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the current value of the parameter
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set the value of the parameter
    ///
    /// # Returns
    ///
    /// `Ok(())` if the value was set, or an error if the value is outside bounds.
    /// The stored value is unchanged on error.
    pub fn set_value(&mut self, value: f64) -> Result<(), ParameterError> {
        self.value = self.bounds.check(value)?;
        Ok(())
    }

    /// Get the initial value of the parameter
    pub fn init_value(&self) -> f64 {
        self.init_value
    }

    /// Reset the parameter to its initial value
    pub fn reset(&mut self) {
        // Bounds may have changed since creation
        self.value = self.bounds.clamp(self.init_value);
    }

    /// Get the bounds of the parameter
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Get the minimum allowed value for the parameter
    pub fn min(&self) -> f64 {
        self.bounds.min
    }

    /// Get the maximum allowed value for the parameter
    pub fn max(&self) -> f64 {
        self.bounds.max
    }

    /// Set the bounds for the parameter, clamping the current value into them
    pub fn set_bounds(&mut self, min: f64, max: f64) -> Result<(), ParameterError> {
        let bounds = Bounds::new(min, max)?;
        self.bounds = bounds;
        self.value = bounds.clamp(self.value);

        Ok(())
    }
}
