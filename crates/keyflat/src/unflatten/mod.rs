//! Unflattening: delimited keys back to a nested JSON tree.
//!
//! Keys are processed in lexicographic order so the outcome never depends on
//! the map's iteration order. A key sorts before any key it is a prefix of,
//! so when `a.b` and `a.b.c` both exist the deeper key replaces the scalar
//! (or, in strict mode, the conflict is reported).

mod arrays;
mod tree;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    FlatMap,
    error::{Error, Result, kind_name},
    options::Options,
};

use tree::Tree;

/// Rebuild a nested tree from a flat map. The result is always an object.
pub fn unflatten(flat: &FlatMap, options: &Options) -> Result<Value> {
    let mut entries: Vec<(&String, &Value)> = flat.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    tracing::trace!(entries = entries.len(), "unflatten");

    let mut tree = Tree::new(options);
    for (key, value) in entries {
        tree.place(key, value)?;
    }
    Ok(tree.into_value())
}

/// Parse a flat JSON object and unflatten it.
pub fn unflatten_str(s: &str, options: &Options) -> Result<Value> {
    let value: Value = serde_json::from_str(s).map_err(Error::Parse)?;
    match value {
        Value::Object(flat) => unflatten(&flat, options),
        other => Err(Error::RootNotObject {
            found: kind_name(&other),
        }),
    }
}

/// Unflatten and deserialize the tree into `T`.
pub fn unflatten_to<T: DeserializeOwned>(flat: &FlatMap, options: &Options) -> Result<T> {
    let value = unflatten(flat, options)?;
    serde_json::from_value(value).map_err(Error::Json)
}
