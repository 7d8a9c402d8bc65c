//! Reconciling positional and named parameter values
//!
//! Updates arrive as a slice of positional values plus a map of named values.
//! These helpers turn both into a single ordered update set.

use crate::parameters::traits::ParamMap;

/// Pair names with positional values.
///
/// Pairing stops as soon as either sequence runs out. A length mismatch is
/// never an error: surplus values are handed back to the caller and surplus
/// names are simply left out of the result.
///
/// # Examples
///
/// ```
/// use paramtree_rs::parameters::reconcile::pair_positional;
///
/// let names = ["spread", "late_p"];
/// let (paired, rest) = pair_positional(names, &[0.1, 0.3, 0.5]);
///
/// assert_eq!(paired["spread"], 0.1);
/// assert_eq!(paired["late_p"], 0.3);
/// assert_eq!(rest, &[0.5]);
/// ```
pub fn pair_positional<'v, I, S>(names: I, values: &'v [f64]) -> (ParamMap, &'v [f64])
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut paired = ParamMap::with_capacity(values.len());
    let mut consumed = 0;

    for (name, value) in names.into_iter().zip(values) {
        paired.insert(name.into(), *value);
        consumed += 1;
    }

    (paired, &values[consumed..])
}

/// Pair names with positional values, then overlay the named values.
///
/// Named values win over positional ones for the same key. Keys that were
/// already paired keep their position; new keys are appended in the order
/// they appear in `kwargs`.
pub fn merge_args<'v, I, S>(names: I, args: &'v [f64], kwargs: &ParamMap) -> (ParamMap, &'v [f64])
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let (mut updates, rest) = pair_positional(names, args);
    for (name, value) in kwargs {
        updates.insert(name.clone(), *value);
    }
    (updates, rest)
}
