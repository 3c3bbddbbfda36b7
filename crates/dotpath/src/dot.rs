//! Dot-notation access to nested JSON values.
//!
//! Object members are addressed by key and array elements by their decimal
//! index, so `{"users": [{"id": 1}]}` has the leaf path `users.0.id`.

use std::borrow::Cow;

use serde_json::{Map, Value};

/// Separates segments in a dot-path.
pub const SEPARATOR: char = '.';

/// A segment matching every entry at one level of nesting.
pub const WILDCARD: &str = "*";

/// The structure lookups the resolver depends on.
///
/// [`DotNotation`] is the standard implementation. Supplying another one to
/// [`WildcardResolver::with_access`](crate::v1::WildcardResolver::with_access)
/// lets the resolver run over a different path vocabulary, or over fakes in
/// tests.
pub trait DotAccess {
    /// Every leaf of `structure`, keyed by its full dot-path.
    fn flatten(&self, structure: &Value) -> Map<String, Value>;

    /// Whether the concrete `path` addresses a node in `structure`.
    fn exists(&self, structure: &Value, path: &str) -> bool;

    /// The node addressed by the concrete `path`, if any.
    fn get<'v>(&self, structure: &'v Value, path: &str) -> Option<&'v Value>;
}

/// Standard dot-notation over `serde_json::Value`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotNotation;

impl DotAccess for DotNotation {
    fn flatten(&self, structure: &Value) -> Map<String, Value> {
        flatten(structure)
    }

    fn exists(&self, structure: &Value, path: &str) -> bool {
        exists(structure, path)
    }

    fn get<'v>(&self, structure: &'v Value, path: &str) -> Option<&'v Value> {
        get(structure, path)
    }
}

/// Flatten `structure` into a map from dot-path to leaf value.
///
/// Entries appear in document order. Empty objects and arrays have no leaves
/// below them, so they are kept as values in their own right. A leaf root has
/// no paths and flattens to an empty map.
///
/// # Examples
///
/// ```
/// use dotpath::v1::flatten;
/// use serde_json::json;
///
/// let flat = flatten(&json!({"a": {"b": 1, "c": [true]}, "d": {}}));
/// let paths: Vec<&str> = flat.keys().map(String::as_str).collect();
/// assert_eq!(paths, vec!["a.b", "a.c.0", "d"]);
/// assert_eq!(flat["d"], json!({}));
/// ```
pub fn flatten(structure: &Value) -> Map<String, Value> {
    let mut flat = Map::new();
    flatten_into(structure, None, &mut flat);
    flat
}

fn flatten_into(node: &Value, parent: Option<&str>, flat: &mut Map<String, Value>) {
    for (key, value) in entries(node) {
        let path = match parent {
            Some(parent) => format!("{parent}{SEPARATOR}{key}"),
            None => key.into_owned(),
        };
        if has_children(value) {
            flatten_into(value, Some(&path), flat);
        } else {
            flat.insert(path, value.clone());
        }
    }
}

/// Look up the node at `path`.
///
/// # Examples
///
/// ```
/// use dotpath::v1::get;
/// use serde_json::json;
///
/// let doc = json!({"users": [{"id": 7}]});
/// assert_eq!(get(&doc, "users.0.id"), Some(&json!(7)));
/// assert_eq!(get(&doc, "users.1.id"), None);
/// ```
pub fn get<'a>(structure: &'a Value, path: &str) -> Option<&'a Value> {
    path.split(SEPARATOR)
        .try_fold(structure, |node, segment| child(node, segment))
}

/// Whether `path` addresses a node in `structure`. The empty path never does.
pub fn exists(structure: &Value, path: &str) -> bool {
    !path.is_empty() && get(structure, path).is_some()
}

/// The direct child of `node` under `key`, if any. Leaves have no children.
pub fn child<'a>(node: &'a Value, key: &str) -> Option<&'a Value> {
    match node {
        Value::Object(map) => map.get(key),
        Value::Array(items) => array_index(key).and_then(|index| items.get(index)),
        _ => None,
    }
}

/// Top-level entries of `node` with their keys in path form.
pub(crate) fn entries<'a>(
    node: &'a Value,
) -> Box<dyn Iterator<Item = (Cow<'a, str>, &'a Value)> + 'a> {
    match node {
        Value::Object(map) => Box::new(map.iter().map(|(k, v)| (Cow::Borrowed(k.as_str()), v))),
        Value::Array(items) => Box::new(
            items
                .iter()
                .enumerate()
                .map(|(i, v)| (Cow::Owned(i.to_string()), v)),
        ),
        _ => Box::new(std::iter::empty()),
    }
}

fn has_children(value: &Value) -> bool {
    match value {
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => false,
    }
}

/// Only canonical decimal segments address array elements: `"0"` and `"12"`
/// do, `"01"`, `"+1"` and `""` do not.
fn array_index(segment: &str) -> Option<usize> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    if canonical { segment.parse().ok() } else { None }
}
