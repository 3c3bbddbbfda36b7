//! Leaf/composite classification of structure nodes.

use serde_json::Value;

/// A node that either holds further keyed or ordered children, or is a leaf.
pub trait Composite {
    fn is_composite(&self) -> bool;
}

impl Composite for Value {
    /// Objects and arrays are composite, including empty ones.
    fn is_composite(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Array(_))
    }
}

/// True when at least one of `entries` is a composite.
///
/// Order-independent: any composite entry anywhere in the sequence counts.
pub fn has_composite<'a, T, I>(entries: I) -> bool
where
    T: Composite + 'a,
    I: IntoIterator<Item = &'a T>,
{
    entries.into_iter().any(|entry| entry.is_composite())
}

/// True when any top-level entry of `container` is itself a container.
///
/// Leaves, empty containers, and containers holding only leaves are not nested.
///
/// # Examples
///
/// ```
/// use dotpath::v1::is_nested;
/// use serde_json::json;
///
/// assert!(is_nested(&json!({"a": 1, "b": {"c": 2}})));
/// assert!(!is_nested(&json!(["foo", "bar", "baz"])));
/// ```
pub fn is_nested(container: &Value) -> bool {
    match container {
        Value::Object(map) => has_composite(map.values()),
        Value::Array(items) => has_composite(items),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_object() {
        let value = json!({
            "foo": {"bar": {"baz": 123, "qux": 456}},
            "comments": [
                {"id": 1, "text": "foo"},
                {"id": 2, "text": "bar"},
            ]
        });
        assert!(is_nested(&value));
    }

    #[test]
    fn test_flat_list() {
        assert!(!is_nested(&json!(["foo", "bar", "baz"])));
    }

    #[test]
    fn test_flat_object() {
        assert!(!is_nested(&json!({"a": 1, "b": "two", "c": null, "d": true})));
    }

    #[test]
    fn test_empty_containers() {
        assert!(!is_nested(&json!({})));
        assert!(!is_nested(&json!([])));
    }

    #[test]
    fn test_leaf_is_not_nested() {
        assert!(!is_nested(&json!("scalar")));
        assert!(!is_nested(&json!(42)));
        assert!(!is_nested(&Value::Null));
    }

    #[test]
    fn test_composite_position_does_not_matter() {
        assert!(is_nested(&json!([[1], 2, 3])));
        assert!(is_nested(&json!([1, 2, [3]])));
        assert!(is_nested(&json!({"z": 1, "a": 2, "m": {}})));
    }

    #[test]
    fn test_empty_child_counts_as_composite() {
        assert!(is_nested(&json!({"a": 1, "b": []})));
    }
}
