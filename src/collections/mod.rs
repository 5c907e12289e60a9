//! Helpers for building collections from fallible functions.

use std::hash::Hash;

use indexmap::IndexMap;

/// Builds an ordered map with the given keys, each value computed by a
/// fallible function.
///
/// The map's iteration order is the order of `keys`. Evaluation is eager
/// and in key order; the first failure is returned as is, later keys are
/// never evaluated, and no partial mapping escapes. Keys are expected to be
/// unique; a later duplicate overwrites the earlier value while keeping the
/// first insertion's position.
///
/// # Errors
///
/// Returns `Err` holding the first failure raised by `value_function`.
///
/// # Examples
///
/// ```rust
/// use tryout::collections::to_map;
///
/// let lengths = to_map(["alpha", "beta"], |key| Ok::<_, String>(key.len()));
/// assert_eq!(
///     lengths.map(|mapping| mapping.into_iter().collect::<Vec<_>>()),
///     Ok(vec![("alpha", 5), ("beta", 4)]),
/// );
/// ```
///
/// A failure short-circuits: keys after the failing one are not evaluated.
///
/// ```rust
/// use tryout::collections::to_map;
///
/// let mut evaluated = Vec::new();
/// let mapping = to_map(["a", "b", "c"], |key| {
///     evaluated.push(*key);
///     if *key == "b" {
///         Err(format!("no value for {key}"))
///     } else {
///         Ok(key.len())
///     }
/// });
/// assert_eq!(mapping, Err("no value for b".to_string()));
/// assert_eq!(evaluated, vec!["a", "b"]);
/// ```
pub fn to_map<K, V, X, I, F>(keys: I, mut value_function: F) -> Result<IndexMap<K, V>, X>
where
    K: Hash + Eq,
    I: IntoIterator<Item = K>,
    F: FnMut(&K) -> Result<V, X>,
{
    let keys = keys.into_iter();
    let mut mapping = IndexMap::with_capacity(keys.size_hint().0);
    for key in keys {
        let value = value_function(&key)?;
        mapping.insert(key, value);
    }
    Ok(mapping)
}
