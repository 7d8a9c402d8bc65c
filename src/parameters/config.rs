//! Configuration options for parameter trees.
//!
//! Options are attached to a single [`ParameterTree`](super::ParameterTree)
//! node. Nested trees carry their own options; nothing is inherited.

use serde::{Deserialize, Serialize};

/// What a tree does with update names that no leaf below it recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmatchedPolicy {
    /// Route the name as usual and let the leaves ignore it
    Ignore,

    /// Emit a warning, then route the name as usual
    Warn,

    /// Fail the whole update before any leaf is touched
    Reject,
}

impl Default for UnmatchedPolicy {
    fn default() -> Self {
        UnmatchedPolicy::Ignore
    }
}

/// Configuration options for a parameter tree node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeOptions {
    /// Whether a node with a single child contributes no name segment. Default: true
    pub elide_single_child: bool,

    /// Handling of unrecognized update names. Default: Ignore
    pub unmatched: UnmatchedPolicy,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            elide_single_child: true,
            unmatched: UnmatchedPolicy::default(),
        }
    }
}

impl TreeOptions {
    /// Options that reject unknown names instead of silently dropping them.
    pub fn strict() -> Self {
        Self {
            unmatched: UnmatchedPolicy::Reject,
            ..Self::default()
        }
    }

    /// Set whether single-child nodes are transparent to naming.
    pub fn with_elision(mut self, elide_single_child: bool) -> Self {
        self.elide_single_child = elide_single_child;
        self
    }

    /// Set the unmatched-name policy.
    pub fn with_unmatched(mut self, unmatched: UnmatchedPolicy) -> Self {
        self.unmatched = unmatched;
        self
    }
}
