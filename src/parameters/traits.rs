//! The get/set capability shared by leaves and trees
//!
//! Every object that takes part in a parameter tree implements [`HasParams`]:
//! it can report its parameters as an ordered flat mapping, and it can accept
//! an update given as positional values (in the order of that mapping) and/or
//! named values. [`ParameterTree`](crate::parameters::ParameterTree) implements
//! the same trait, which is what makes the structure recursive.

use crate::error::Result;
use indexmap::IndexMap;
use std::cell::RefCell;
use std::rc::Rc;

#[cfg(feature = "array")]
use ndarray::Array1;

/// Ordered mapping from parameter name to value.
///
/// Iteration order is significant: it is the order in which positional
/// values are assigned.
pub type ParamMap = IndexMap<String, f64>;

/// Separator between the segments of a flat parameter name.
pub const SEPARATOR: char = '_';

/// Objects that expose scalar parameters by name.
pub trait HasParams {
    /// Returns the current parameters as an ordered mapping.
    ///
    /// The order must be stable across calls for the same object state.
    fn get_params(&self) -> ParamMap;

    /// Updates parameters from positional and named values.
    ///
    /// Positional values are matched against the names of [`get_params`] in
    /// order. Named values take precedence over positional ones for the same
    /// name. Names the object does not know are ignored.
    ///
    /// # Returns
    ///
    /// The positional values that were not consumed. Terminal leaves consume
    /// everything and return an empty vector.
    ///
    /// [`get_params`]: HasParams::get_params
    fn set_params(&mut self, args: &[f64], kwargs: &ParamMap) -> Result<Vec<f64>>;

    /// Whether an update under `name` would change anything in this object.
    fn accepts(&self, name: &str) -> bool {
        self.get_params().contains_key(name)
    }
}

impl<T: HasParams + ?Sized> HasParams for Box<T> {
    fn get_params(&self) -> ParamMap {
        (**self).get_params()
    }

    fn set_params(&mut self, args: &[f64], kwargs: &ParamMap) -> Result<Vec<f64>> {
        (**self).set_params(args, kwargs)
    }

    fn accepts(&self, name: &str) -> bool {
        (**self).accepts(name)
    }
}

impl<T: HasParams + ?Sized> HasParams for &mut T {
    fn get_params(&self) -> ParamMap {
        (**self).get_params()
    }

    fn set_params(&mut self, args: &[f64], kwargs: &ParamMap) -> Result<Vec<f64>> {
        (**self).set_params(args, kwargs)
    }

    fn accepts(&self, name: &str) -> bool {
        (**self).accepts(name)
    }
}

/// Shared children: the host model keeps a typed handle while a tree routes
/// updates to the same object.
///
/// Panics if the child is already mutably borrowed when the tree reaches it.
impl<T: HasParams + ?Sized> HasParams for Rc<RefCell<T>> {
    fn get_params(&self) -> ParamMap {
        self.borrow().get_params()
    }

    fn set_params(&mut self, args: &[f64], kwargs: &ParamMap) -> Result<Vec<f64>> {
        self.borrow_mut().set_params(args, kwargs)
    }

    fn accepts(&self, name: &str) -> bool {
        self.borrow().accepts(name)
    }
}

/// Convenience methods available on every [`HasParams`] implementor.
pub trait HasParamsExt: HasParams {
    /// Names of all parameters, in canonical order.
    fn param_names(&self) -> Vec<String> {
        self.get_params().into_keys().collect()
    }

    /// Number of parameters.
    fn param_count(&self) -> usize {
        self.get_params().len()
    }

    /// Sets a single named parameter.
    fn set_named(&mut self, name: &str, value: f64) -> Result<()> {
        let mut kwargs = ParamMap::with_capacity(1);
        kwargs.insert(name.to_string(), value);
        self.set_params(&[], &kwargs)?;
        Ok(())
    }

    /// Sets parameters positionally, returning the surplus values.
    fn set_positional(&mut self, values: &[f64]) -> Result<Vec<f64>> {
        self.set_params(values, &ParamMap::new())
    }

    /// Current parameter values as an array, in canonical order.
    #[cfg(feature = "array")]
    fn to_array(&self) -> Array1<f64> {
        self.get_params().into_values().collect()
    }

    /// Sets parameters positionally from an array, returning the surplus values.
    #[cfg(feature = "array")]
    fn set_from_array(&mut self, values: &Array1<f64>) -> Result<Vec<f64>> {
        match values.as_slice() {
            Some(slice) => self.set_positional(slice),
            None => self.set_positional(&values.to_vec()),
        }
    }
}

impl<T: HasParams + ?Sized> HasParamsExt for T {}
