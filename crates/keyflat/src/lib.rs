#![doc = include_str!("../README.md")]

pub mod error;
pub mod options;
pub mod path;
pub mod flatten;
pub mod unflatten;

pub use crate::error::{Error, Result};
pub use crate::flatten::{
    flatten, flatten_reader, flatten_serialize, flatten_slice, flatten_str, flatten_value,
};
pub use crate::options::{DEFAULT_MAX_SEGMENTS, Delimiter, IndexStyle, Options};
pub use crate::path::{KeyPath, Segment};
pub use crate::unflatten::{unflatten, unflatten_str, unflatten_to};

/// A single-level map from delimited key paths to values.
pub type FlatMap = serde_json::Map<String, serde_json::Value>;
