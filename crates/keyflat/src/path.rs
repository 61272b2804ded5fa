//! Key path codec shared by flatten and unflatten.
//!
//! A flattened key is a list of segments joined by the configured delimiter.
//! Object keys are written as-is; array indices are written as `[N]` or `N`
//! depending on [`IndexStyle`]. Only canonical index tokens decode back to
//! indices: no leading zeros, no sign, no empty brackets.
//!
//! A key that itself contains the delimiter cannot be told apart from two
//! segments. That is a limitation of the encoding, not something the codec
//! tries to escape.

use core::fmt::Write;

use crate::options::{IndexStyle, Options};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Key(String),
    Index(usize),
}

impl Segment {
    /// Decode one raw segment. Anything that is not a canonical index token is a key.
    pub fn parse(raw: &str, style: IndexStyle) -> Segment {
        match parse_index(raw, style) {
            Some(i) => Segment::Index(i),
            None => Segment::Key(raw.to_string()),
        }
    }

    pub fn render(&self, style: IndexStyle) -> String {
        let mut out = String::new();
        self.write_to(&mut out, style);
        out
    }

    fn write_to(&self, out: &mut String, style: IndexStyle) {
        match self {
            Segment::Key(k) => out.push_str(k),
            Segment::Index(i) => write_index(out, *i, style),
        }
    }
}

impl From<&str> for Segment {
    fn from(k: &str) -> Self {
        Segment::Key(k.to_string())
    }
}

impl From<String> for Segment {
    fn from(k: String) -> Self {
        Segment::Key(k)
    }
}

impl From<usize> for Segment {
    fn from(i: usize) -> Self {
        Segment::Index(i)
    }
}

/// A decoded flattened key
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<Segment>,
}

impl KeyPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `key` on the delimiter. Always yields at least one segment.
    pub fn parse(key: &str, options: &Options) -> KeyPath {
        split_key(key, options)
            .map(|raw| Segment::parse(raw, options.index_style))
            .collect()
    }

    pub fn render(&self, options: &Options) -> String {
        let mut out = String::new();
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push_str(options.delimiter.as_str());
            }
            seg.write_to(&mut out, options.index_style);
        }
        out
    }

    pub fn push_key(&mut self, key: impl Into<String>) {
        self.segments.push(Segment::Key(key.into()));
    }

    pub fn push_index(&mut self, index: usize) {
        self.segments.push(Segment::Index(index));
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl FromIterator<Segment> for KeyPath {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        KeyPath {
            segments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a KeyPath {
    type Item = &'a Segment;
    type IntoIter = core::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Split a flattened key into raw segments.
pub(crate) fn split_key<'a>(key: &'a str, options: &'a Options) -> core::str::Split<'a, &'a str> {
    key.split(options.delimiter.as_str())
}

/// Append a child key to a non-root prefix.
pub(crate) fn join_key(prefix: &str, key: &str, options: &Options) -> String {
    let delim = options.delimiter.as_str();
    let mut out = String::with_capacity(prefix.len() + delim.len() + key.len());
    out.push_str(prefix);
    out.push_str(delim);
    out.push_str(key);
    out
}

pub(crate) fn join_index(prefix: &str, index: usize, options: &Options) -> String {
    let mut out = String::with_capacity(prefix.len() + 8);
    out.push_str(prefix);
    out.push_str(options.delimiter.as_str());
    write_index(&mut out, index, options.index_style);
    out
}

fn write_index(out: &mut String, index: usize, style: IndexStyle) {
    // Writing to a String cannot fail
    let _ = match style {
        IndexStyle::Bracketed => write!(out, "[{}]", index),
        IndexStyle::Bare => write!(out, "{}", index),
    };
}

/// Decode a canonical index token for the given style.
pub(crate) fn parse_index(raw: &str, style: IndexStyle) -> Option<usize> {
    let digits = match style {
        IndexStyle::Bracketed => raw.strip_prefix('[')?.strip_suffix(']')?,
        IndexStyle::Bare => raw,
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    digits.parse().ok()
}
