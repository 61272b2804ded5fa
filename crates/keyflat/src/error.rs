use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input text was not valid JSON. Carries the parser's error untouched.
    #[error("parse error: {0}")]
    Parse(serde_json::Error),

    /// Conversion between a typed value and a JSON tree failed.
    #[error("serde_json error: {0}")]
    Json(serde_json::Error),

    #[error("expected an object at the root, found {found}")]
    RootNotObject { found: &'static str },

    /// Strict unflatten found `prefix` already holding a non-object while placing `key`.
    #[error("path conflict at '{prefix}' while placing key '{key}'")]
    PathConflict { key: String, prefix: String },

    #[error("key '{key}' has more than {limit} segments")]
    PathTooDeep { key: String, limit: usize },

    #[error("delimiter must not be empty")]
    InvalidDelimiter,
}

pub type Result<T> = core::result::Result<T, Error>;

/// Name of a JSON value's kind, for error messages.
pub(crate) fn kind_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
