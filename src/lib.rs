//! # paramtree-rs
//!
//! `paramtree-rs` is a hierarchical parameter broker for nested models.
//!
//! The library provides:
//! - A [`HasParams`] trait for anything that exposes named scalar parameters
//! - A [`ParameterTree`] composite that flattens the parameters of its children
//!   into one namespace and routes updates back to them
//! - Broadcasting of unprefixed names to every matching descendant
//! - A bounded [`Parameters`] collection usable as a leaf
//!
//! ## Basic Usage
//!
//! ```
//! use paramtree_rs::{HasParams, HasParamsExt, ParameterTree, Parameters};
//!
//! let mut tumor = Parameters::new();
//! tumor.add_param("spread", 0.1).unwrap();
//! let mut lnl = Parameters::new();
//! lnl.add_param("spread", 0.2).unwrap();
//!
//! let mut graph = ParameterTree::from_children([("tumor", tumor), ("lnl", lnl)]).unwrap();
//! assert_eq!(graph.param_names(), vec!["tumor_spread", "lnl_spread"]);
//!
//! let rest = graph.set_positional(&[0.4, 0.5, 0.6]).unwrap();
//! assert_eq!(rest, vec![0.6]);
//! assert_eq!(graph.get_params()["lnl_spread"], 0.5);
//! ```

// Public modules
pub mod error;

// Parameter system
pub mod parameters;

// Re-exports for convenience
pub use error::{ParamTreeError, Result};
pub use parameters::{
    HasParams, HasParamsExt, ParamMap, ParameterTree, Parameters, TreeOptions, UnmatchedPolicy,
};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
