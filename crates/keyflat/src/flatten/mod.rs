//! Flattening: nested JSON tree to a single-level map of delimited keys.

mod walk;

use std::io::Read;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    FlatMap,
    error::{Error, Result, kind_name},
    options::Options,
};

/// Flatten an object-rooted tree. The input is not modified.
pub fn flatten(tree: &Map<String, Value>, options: &Options) -> FlatMap {
    tracing::trace!(entries = tree.len(), "flatten");
    walk::flatten_object(tree, options)
}

/// Flatten any value; fails unless the root is an object.
pub fn flatten_value(value: &Value, options: &Options) -> Result<FlatMap> {
    match value {
        Value::Object(map) => Ok(flatten(map, options)),
        other => Err(Error::RootNotObject {
            found: kind_name(other),
        }),
    }
}

/// Parse JSON bytes and flatten the result. Parse failures yield no partial output.
pub fn flatten_slice(bytes: &[u8], options: &Options) -> Result<FlatMap> {
    let value: Value = serde_json::from_slice(bytes).map_err(Error::Parse)?;
    flatten_value(&value, options)
}

pub fn flatten_str(s: &str, options: &Options) -> Result<FlatMap> {
    flatten_slice(s.as_bytes(), options)
}

pub fn flatten_reader<R: Read>(mut reader: R, options: &Options) -> Result<FlatMap> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    flatten_slice(&buf, options)
}

/// Flatten any serializable value whose JSON form is an object.
pub fn flatten_serialize<T: Serialize + ?Sized>(value: &T, options: &Options) -> Result<FlatMap> {
    let v = serde_json::to_value(value).map_err(Error::Json)?;
    flatten_value(&v, options)
}
