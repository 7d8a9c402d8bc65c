use thiserror::Error;

use crate::parameters::parameter::ParameterError;

/// Error types for the paramtree-rs library.
#[derive(Error, Debug)]
pub enum ParamTreeError {
    /// A parameter tree was constructed without any children.
    #[error("Parameter tree must have at least one child")]
    EmptyTree,

    /// Two siblings were registered under the same name.
    #[error("Duplicate child name: {0}")]
    DuplicateChild(String),

    /// A parameter name is not recognized by any leaf below the node.
    ///
    /// Only raised when the node is configured with [`UnmatchedPolicy::Reject`].
    ///
    /// [`UnmatchedPolicy::Reject`]: crate::parameters::UnmatchedPolicy::Reject
    #[error("Parameter not recognized: {0}")]
    UnknownParameter(String),

    /// Validation error from one of the provided leaf types.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// Error raised by a user-defined leaf, passed through untouched.
    #[error(transparent)]
    Leaf(Box<dyn std::error::Error + Send + Sync>),
}

impl ParamTreeError {
    /// Wrap an arbitrary leaf error so it can travel through the tree.
    pub fn leaf<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ParamTreeError::Leaf(Box::new(err))
    }
}

/// Result type alias for paramtree-rs operations.
pub type Result<T> = std::result::Result<T, ParamTreeError>;
