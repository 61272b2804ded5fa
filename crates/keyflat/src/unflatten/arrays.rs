//! Array reconstruction for branches keyed by index tokens.
//!
//! A branch becomes an array only when every child key is a canonical index
//! token and the indices cover exactly `0..n`. Sparse or mixed branches stay
//! objects keyed by the raw tokens.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::{
    options::{IndexStyle, Options},
    path::parse_index,
    unflatten::tree::Node,
};

pub(crate) fn is_contiguous(children: &BTreeMap<String, Node>, style: IndexStyle) -> bool {
    if children.is_empty() {
        return false;
    }
    let mut seen = vec![false; children.len()];
    for key in children.keys() {
        match parse_index(key, style) {
            Some(i) if i < seen.len() && !seen[i] => seen[i] = true,
            _ => return false,
        }
    }
    true
}

/// Callers must check [`is_contiguous`] first.
pub(crate) fn into_array(children: BTreeMap<String, Node>, opts: &Options) -> Value {
    let mut items: Vec<(usize, Value)> = children
        .into_iter()
        .filter_map(|(k, node)| parse_index(&k, opts.index_style).map(|i| (i, node.into_value(opts))))
        .collect();
    items.sort_unstable_by_key(|(i, _)| *i);
    Value::Array(items.into_iter().map(|(_, v)| v).collect())
}
