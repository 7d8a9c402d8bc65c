//! # Parameter System
//!
//! This module lets a tree of model objects expose and receive scalar
//! parameters through one flat namespace.
//!
//! ## Key Features
//!
//! - **Prefixed names**: a leaf parameter is addressed by the path of child names
//!   leading to it, joined by underscores (`ipsi_tumor_spread`)
//! - **Broadcast**: leaving out an intermediate name sends the value to every
//!   descendant that has a matching parameter (`tumor_spread`)
//! - **Single-child elision**: a node with one child adds no name segment
//! - **Positional updates**: values can be given in the order reported by `get_params`,
//!   with any surplus handed back to the caller
//!
//! ## Core Components
//!
//! - [`HasParams`]: the get/set capability every leaf and tree implements
//! - [`ParameterTree`]: the composite that flattens and routes parameters
//! - [`TreeOptions`] and [`UnmatchedPolicy`]: per-node configuration
//! - [`Parameter`] and [`Parameters`]: a ready-made leaf with bounds checking
//!
//! ## Example Usage
//!
//! ```rust
//! use paramtree_rs::parameters::{HasParams, HasParamsExt, Parameters, ParameterTree};
//!
//! let mut ipsi = Parameters::new();
//! ipsi.add_param_with_bounds("spread", 0.1, 0.0, 1.0).unwrap();
//! let mut contra = Parameters::new();
//! contra.add_param_with_bounds("spread", 0.05, 0.0, 1.0).unwrap();
//!
//! let mut model = ParameterTree::builder()
//!     .child("ipsi", ipsi)
//!     .child("contra", contra)
//!     .build()
//!     .unwrap();
//!
//! // Address a single leaf
//! model.set_named("ipsi_spread", 0.2).unwrap();
//!
//! // Or every leaf with that local name
//! model.set_named("spread", 0.3).unwrap();
//!
//! assert_eq!(model.get_params()["contra_spread"], 0.3);
//! ```

pub mod bounds;
pub mod config;
pub mod parameter;
pub mod parameters;
pub mod reconcile;
pub mod traits;
pub mod tree;


// Re-export key types
pub use bounds::{Bounds, BoundsError};
pub use config::{TreeOptions, UnmatchedPolicy};
pub use parameter::{Parameter, ParameterError};
pub use parameters::Parameters;
pub use reconcile::{merge_args, pair_positional};
pub use traits::{HasParams, HasParamsExt, ParamMap, SEPARATOR};
pub use tree::{Child, ParameterTree, ParameterTreeBuilder};
