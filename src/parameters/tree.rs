//! Nested parameter trees
//!
//! A [`ParameterTree`] groups named children, each of which is either a leaf
//! or another tree, and exposes all of their parameters under one flat
//! namespace. A leaf parameter `foo` of child `bar` inside child `middle1`
//! is addressed as `middle1_bar_foo`.
//!
//! When an update name does not start with a known child name, it is offered
//! to every child instead. Setting `bar_foo` on the root therefore reaches
//! `middle1_bar_foo` and `middle2_bar_foo` at once.
//!
//! ```
//! use paramtree_rs::parameters::{HasParams, HasParamsExt, Parameters, ParameterTree};
//!
//! fn leaf() -> Parameters {
//!     let mut params = Parameters::new();
//!     params.add_param("foo", 1.0).unwrap();
//!     params
//! }
//!
//! let middle = |_| {
//!     ParameterTree::builder()
//!         .child("bar", leaf())
//!         .child("qux", leaf())
//!         .build()
//!         .unwrap()
//! };
//! let mut root = ParameterTree::builder()
//!     .child("middle1", middle(1))
//!     .child("middle2", middle(2))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     root.param_names(),
//!     vec!["middle1_bar_foo", "middle1_qux_foo", "middle2_bar_foo", "middle2_qux_foo"]
//! );
//!
//! root.set_named("bar_foo", 2.0).unwrap();
//! root.set_named("middle2_foo", 3.0).unwrap();
//!
//! let values: Vec<f64> = root.get_params().into_values().collect();
//! assert_eq!(values, vec![2.0, 1.0, 3.0, 3.0]);
//! ```

use crate::error::{ParamTreeError, Result};
use crate::parameters::config::{TreeOptions, UnmatchedPolicy};
use crate::parameters::reconcile::merge_args;
use crate::parameters::traits::{HasParams, ParamMap, SEPARATOR};
use indexmap::IndexMap;
use std::fmt;
use tracing::{debug, trace, warn};

/// A child of a parameter tree: a leaf or a nested tree.
pub type Child<'a> = Box<dyn HasParams + 'a>;

/// A named, ordered collection of parameter-bearing children
///
/// The tree owns no parameter values. Reads collect the children's values
/// under prefixed names; writes route each value to the child named by the
/// first segment of its name, or to all children if no child matches.
///
/// Children can be owned (boxed leaves), shared (`Rc<RefCell<T>>`, so the host
/// model keeps a typed handle) or borrowed (`&'a mut T`, for a short-lived tree
/// over sub-models the host stores in its own fields).
pub struct ParameterTree<'a> {
    /// Children in insertion order
    children: IndexMap<String, Child<'a>>,

    /// Options for this node only
    options: TreeOptions,
}

impl<'a> ParameterTree<'a> {
    /// Create a tree from an ordered map of children
    ///
    /// # Returns
    ///
    /// The new tree, or [`ParamTreeError::EmptyTree`] if `children` is empty
    pub fn new(children: IndexMap<String, Child<'a>>) -> Result<Self> {
        Self::with_options(children, TreeOptions::default())
    }

    /// Create a tree from an ordered map of children with explicit options
    pub fn with_options(children: IndexMap<String, Child<'a>>, options: TreeOptions) -> Result<Self> {
        if children.is_empty() {
            return Err(ParamTreeError::EmptyTree);
        }

        Ok(Self { children, options })
    }

    /// Create a tree from `(name, child)` pairs, keeping their order
    ///
    /// # Returns
    ///
    /// The new tree, or an error if there are no children or a name repeats
    ///
    /// # Examples
    ///
    /// ```
    /// use paramtree_rs::parameters::{HasParamsExt, Parameters, ParameterTree};
    ///
    /// let mut ipsi = Parameters::new();
    /// ipsi.add_param("spread", 0.1).unwrap();
    /// let mut contra = Parameters::new();
    /// contra.add_param("spread", 0.05).unwrap();
    ///
    /// let tree = ParameterTree::from_children([("ipsi", ipsi), ("contra", contra)]).unwrap();
    /// assert_eq!(tree.param_names(), vec!["ipsi_spread", "contra_spread"]);
    /// ```
    pub fn from_children<I, S, C>(children: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, C)>,
        S: Into<String>,
        C: HasParams + 'a,
    {
        children
            .into_iter()
            .fold(Self::builder(), |builder, (name, child)| builder.child(name, child))
            .build()
    }

    /// Start building a tree child by child
    pub fn builder() -> ParameterTreeBuilder<'a> {
        ParameterTreeBuilder::new()
    }

    /// Options of this node
    pub fn options(&self) -> &TreeOptions {
        &self.options
    }

    /// Number of direct children (always at least one)
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Names of the direct children, in insertion order
    pub fn child_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.children.keys().map(String::as_str)
    }

    /// Get a direct child by name
    pub fn child(&self, name: &str) -> Option<&(dyn HasParams + 'a)> {
        self.children.get(name).map(|child| &**child)
    }

    /// Get a mutable reference to a direct child by name
    pub fn child_mut(&mut self, name: &str) -> Option<&mut (dyn HasParams + 'a)> {
        self.children.get_mut(name).map(|child| &mut **child)
    }

    /// The only child, if this node is transparent to naming
    fn sole_child(&self) -> Option<&Child<'a>> {
        if self.options.elide_single_child && self.children.len() == 1 {
            self.children.values().next()
        } else {
            None
        }
    }

    fn sole_child_mut(&mut self) -> Option<&mut Child<'a>> {
        if self.options.elide_single_child && self.children.len() == 1 {
            self.children.values_mut().next()
        } else {
            None
        }
    }

    /// Apply the unmatched-name policy before anything is mutated
    fn check_unmatched<'n>(&self, names: impl IntoIterator<Item = &'n String>) -> Result<()> {
        if self.options.unmatched == UnmatchedPolicy::Ignore {
            return Ok(());
        }

        for name in names {
            if self.accepts(name) {
                continue;
            }

            match self.options.unmatched {
                UnmatchedPolicy::Ignore => {}
                UnmatchedPolicy::Warn => {
                    warn!(param = %name, "parameter not recognized by any leaf");
                }
                UnmatchedPolicy::Reject => {
                    return Err(ParamTreeError::UnknownParameter(name.clone()));
                }
            }
        }

        Ok(())
    }

    /// Send one value either to the child named by its first segment or to all children
    fn route(&mut self, name: &str, value: f64) -> Result<()> {
        if let Some((head, tail)) = name.split_once(SEPARATOR) {
            if let Some(child) = self.children.get_mut(head) {
                trace!(child = head, param = tail, value, "routing parameter");
                child.set_params(&[], &single(tail, value))?;
                return Ok(());
            }
        }

        debug!(
            param = name,
            children = self.children.len(),
            "no child matches, broadcasting parameter"
        );
        let kwargs = single(name, value);
        for child in self.children.values_mut() {
            child.set_params(&[], &kwargs)?;
        }

        Ok(())
    }
}

fn single(name: &str, value: f64) -> ParamMap {
    let mut kwargs = ParamMap::with_capacity(1);
    kwargs.insert(name.to_string(), value);
    kwargs
}

impl HasParams for ParameterTree<'_> {
    fn get_params(&self) -> ParamMap {
        if let Some(child) = self.sole_child() {
            return child.get_params();
        }

        let mut params = ParamMap::new();
        for (child_name, child) in &self.children {
            for (name, value) in child.get_params() {
                params.insert(format!("{child_name}{SEPARATOR}{name}"), value);
            }
        }
        params
    }

    fn set_params(&mut self, args: &[f64], kwargs: &ParamMap) -> Result<Vec<f64>> {
        if self.sole_child().is_some() {
            self.check_unmatched(kwargs.keys())?;
        }
        if let Some(child) = self.sole_child_mut() {
            return child.set_params(args, kwargs);
        }

        if args.is_empty() && kwargs.is_empty() {
            return Ok(Vec::new());
        }

        let (updates, rest) = merge_args(self.get_params().into_keys(), args, kwargs);
        self.check_unmatched(updates.keys())?;

        for (name, value) in &updates {
            self.route(name, *value)?;
        }

        if !rest.is_empty() {
            debug!(surplus = rest.len(), "returning unconsumed positional values");
        }
        Ok(rest.to_vec())
    }

    fn accepts(&self, name: &str) -> bool {
        if let Some(child) = self.sole_child() {
            return child.accepts(name);
        }

        if let Some((head, tail)) = name.split_once(SEPARATOR) {
            if let Some(child) = self.children.get(head) {
                return child.accepts(tail);
            }
        }

        self.children.values().any(|child| child.accepts(name))
    }
}

impl fmt::Debug for ParameterTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterTree")
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .field("options", &self.options)
            .finish()
    }
}

/// Builder for [`ParameterTree`]
///
/// Errors are deferred to [`build`](ParameterTreeBuilder::build) so children
/// can be chained without intermediate `?`.
pub struct ParameterTreeBuilder<'a> {
    children: IndexMap<String, Child<'a>>,
    duplicate: Option<String>,
    options: TreeOptions,
}

impl<'a> ParameterTreeBuilder<'a> {
    fn new() -> Self {
        Self {
            children: IndexMap::new(),
            duplicate: None,
            options: TreeOptions::default(),
        }
    }

    /// Append a child under `name`
    pub fn child<C>(mut self, name: impl Into<String>, child: C) -> Self
    where
        C: HasParams + 'a,
    {
        let name = name.into();
        if self.children.contains_key(&name) {
            self.duplicate.get_or_insert(name);
        } else {
            self.children.insert(name, Box::new(child));
        }
        self
    }

    /// Set the options of the node being built
    pub fn options(mut self, options: TreeOptions) -> Self {
        self.options = options;
        self
    }

    /// Finish the tree
    ///
    /// # Returns
    ///
    /// The tree, or [`ParamTreeError::DuplicateChild`] for the first repeated
    /// name, or [`ParamTreeError::EmptyTree`] if no child was added
    pub fn build(self) -> Result<ParameterTree<'a>> {
        if let Some(name) = self.duplicate {
            return Err(ParamTreeError::DuplicateChild(name));
        }

        ParameterTree::with_options(self.children, self.options)
    }
}
