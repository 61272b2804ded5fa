use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Separator placed between path segments. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Delimiter(String);

impl Delimiter {
    pub fn new(s: impl Into<String>) -> Result<Self> {
        let s = s.into();
        if s.is_empty() {
            return Err(Error::InvalidDelimiter);
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self(String::from("."))
    }
}

impl TryFrom<String> for Delimiter {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Delimiter {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl From<Delimiter> for String {
    fn from(d: Delimiter) -> Self {
        d.0
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How array indices are written inside a flattened key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexStyle {
    /// `hobbies.[0]`
    #[default]
    Bracketed,
    /// `hobbies.0`
    Bare,
}

/// Same nesting bound serde_json applies while parsing.
pub const DEFAULT_MAX_SEGMENTS: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub delimiter: Delimiter,
    /// Levels that may be split, the root object being the first
    /// (None = unlimited; Some(0) and Some(1) keep top-level entries whole)
    pub max_depth: Option<usize>,
    pub index_style: IndexStyle,
    /// Turn branches keyed `0..n` back into arrays when unflattening
    pub rebuild_arrays: bool,
    /// Fail on type conflicts while unflattening instead of letting the later key win
    pub strict: bool,
    /// Most segments a single key may have when unflattening
    pub max_segments: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::default(),
            max_depth: None,
            index_style: IndexStyle::Bracketed,
            rebuild_arrays: true,
            strict: false,
            max_segments: DEFAULT_MAX_SEGMENTS,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Result<Self> {
        self.delimiter = Delimiter::new(delimiter)?;
        Ok(self)
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_index_style(mut self, index_style: IndexStyle) -> Self {
        self.index_style = index_style;
        self
    }

    pub fn rebuild_arrays(mut self, rebuild: bool) -> Self {
        self.rebuild_arrays = rebuild;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_max_segments(mut self, max_segments: usize) -> Self {
        self.max_segments = max_segments;
        self
    }
}
