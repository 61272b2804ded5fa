use serde_json::{Map, Value};

use crate::{
    FlatMap,
    options::Options,
    path::{join_index, join_key},
};

/// Depth-first descent below one top-level entry.
///
/// `remaining` is the number of container levels still allowed to split;
/// `None` means unbounded. Empty containers emit nothing.
pub(crate) fn walk(
    prefix: String,
    value: &Value,
    out: &mut FlatMap,
    opts: &Options,
    remaining: Option<usize>,
) {
    if remaining == Some(0) {
        if value.is_object() || value.is_array() {
            tracing::trace!(key = %prefix, "depth limit reached, storing subtree verbatim");
        }
        out.insert(prefix, value.clone());
        return;
    }
    let next = remaining.map(|d| d - 1);

    match value {
        Value::Object(map) => {
            for (k, v) in map {
                walk(join_key(&prefix, k, opts), v, out, opts, next);
            }
        }
        Value::Array(items) => {
            for (i, v) in items.iter().enumerate() {
                walk(join_index(&prefix, i, opts), v, out, opts, next);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            out.insert(prefix, value.clone());
        }
    }
}

/// The root object counts as the first level: `Some(1)` keeps each top-level
/// entry whole. `Some(0)` does the same rather than storing the whole tree
/// under an empty key.
pub(crate) fn flatten_object(root: &Map<String, Value>, opts: &Options) -> FlatMap {
    let below_root = opts.max_depth.map(|d| d.saturating_sub(1));
    let mut out = FlatMap::new();
    for (k, v) in root {
        walk(k.clone(), v, &mut out, opts, below_root);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_walk_scalar_at_zero_depth() {
        let mut out = FlatMap::new();
        walk("a".to_string(), &json!(1), &mut out, &Options::default(), Some(0));
        assert_eq!(Value::Object(out), json!({"a": 1}));
    }

    #[test]
    fn test_walk_one_level() {
        let mut out = FlatMap::new();
        walk(
            "a".to_string(),
            &json!({"b": {"c": 1}, "d": [1, 2]}),
            &mut out,
            &Options::default(),
            Some(1),
        );
        assert_eq!(Value::Object(out), json!({"a.b": {"c": 1}, "a.d": [1, 2]}));
    }

    #[test]
    fn test_root_counts_as_a_level() {
        let Value::Object(root) = json!({"a": {"b": {"c": 1}}, "x": 1}) else { unreachable!() };
        for depth in [0, 1] {
            let opts = Options::default().with_max_depth(Some(depth));
            let out = flatten_object(&root, &opts);
            assert_eq!(Value::Object(out), json!({"a": {"b": {"c": 1}}, "x": 1}));
        }
        let opts = Options::default().with_max_depth(Some(2));
        let out = flatten_object(&root, &opts);
        assert_eq!(Value::Object(out), json!({"a.b": {"c": 1}, "x": 1}));
    }

    #[test]
    fn test_empty_containers_vanish() {
        let root = json!({"a": {}, "b": [], "c": 1});
        let Value::Object(root) = root else { unreachable!() };
        let out = flatten_object(&root, &Options::default());
        assert_eq!(Value::Object(out), json!({"c": 1}));
    }
}
