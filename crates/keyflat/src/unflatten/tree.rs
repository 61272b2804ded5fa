use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::{
    error::{Error, Result},
    options::Options,
    path::{Segment, split_key},
    unflatten::arrays,
};

/// Intermediate tree used while placing keys.
///
/// Branches are nodes created (or merged into) by placement; leaves hold the
/// flat map's values verbatim.
#[derive(Debug)]
pub(crate) enum Node {
    Leaf(Value),
    Branch(BTreeMap<String, Node>),
}

impl Node {
    pub(crate) fn into_value(self, opts: &Options) -> Value {
        match self {
            Node::Leaf(v) => v,
            Node::Branch(children) => {
                if opts.rebuild_arrays && arrays::is_contiguous(&children, opts.index_style) {
                    arrays::into_array(children, opts)
                } else {
                    Value::Object(branch_to_object(children, opts))
                }
            }
        }
    }
}

fn branch_to_object(children: BTreeMap<String, Node>, opts: &Options) -> Map<String, Value> {
    children
        .into_iter()
        .map(|(k, n)| (k, n.into_value(opts)))
        .collect()
}

pub(crate) struct Tree<'o> {
    root: BTreeMap<String, Node>,
    opts: &'o Options,
}

impl<'o> Tree<'o> {
    pub(crate) fn new(opts: &'o Options) -> Self {
        Self {
            root: BTreeMap::new(),
            opts,
        }
    }

    /// Place `value` at the path encoded by `key`, creating branches on the way.
    pub(crate) fn place(&mut self, key: &str, value: &Value) -> Result<()> {
        let limit = self.opts.max_segments;
        let segments: Vec<&str> = split_key(key, self.opts)
            .take(limit.saturating_add(1))
            .collect();
        if segments.len() > limit {
            return Err(Error::PathTooDeep {
                key: key.to_string(),
                limit,
            });
        }
        let Some((last, parents)) = segments.split_last() else {
            return Ok(());
        };

        let opts = self.opts;
        let mut current = &mut self.root;
        for (depth, seg) in parents.iter().enumerate() {
            let slot = current
                .entry((*seg).to_string())
                .or_insert_with(|| Node::Branch(BTreeMap::new()));
            if let Node::Leaf(existing) = slot {
                let children = open_leaf(existing, key, &parents[..=depth], opts)?;
                *slot = Node::Branch(children);
            }
            current = match slot {
                Node::Branch(children) => children,
                Node::Leaf(_) => {
                    return Err(Error::PathConflict {
                        key: key.to_string(),
                        prefix: parents[..=depth].join(opts.delimiter.as_str()),
                    });
                }
            };
        }

        let last = (*last).to_string();
        if current.contains_key(&last) {
            if opts.strict {
                return Err(Error::PathConflict {
                    key: key.to_string(),
                    prefix: key.to_string(),
                });
            }
            tracing::debug!(%key, "overwriting previously placed subtree");
        }
        current.insert(last, Node::Leaf(value.clone()));
        Ok(())
    }

    /// The root is always an object, even when its keys look like indices.
    pub(crate) fn into_value(self) -> Value {
        Value::Object(branch_to_object(self.root, self.opts))
    }
}

/// Turn a verbatim value that a longer key descends into into a branch.
///
/// Objects keep their entries and arrays keep their elements under index
/// tokens, so both are merged into. Scalars conflict.
fn open_leaf(
    existing: &mut Value,
    key: &str,
    prefix: &[&str],
    opts: &Options,
) -> Result<BTreeMap<String, Node>> {
    match existing {
        Value::Object(map) => Ok(core::mem::take(map)
            .into_iter()
            .map(|(k, v)| (k, Node::Leaf(v)))
            .collect()),
        Value::Array(items) => Ok(core::mem::take(items)
            .into_iter()
            .enumerate()
            .map(|(i, v)| (Segment::Index(i).render(opts.index_style), Node::Leaf(v)))
            .collect()),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            let prefix = prefix.join(opts.delimiter.as_str());
            if opts.strict {
                return Err(Error::PathConflict {
                    key: key.to_string(),
                    prefix,
                });
            }
            tracing::debug!(%key, %prefix, "replacing non-object value with nested key");
            Ok(BTreeMap::new())
        }
    }
}
