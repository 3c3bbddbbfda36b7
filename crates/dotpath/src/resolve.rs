//! Wildcard-to-concrete path resolution.

use serde_json::Value;

use crate::classify::Composite;
use crate::collapse::{Branch, collapse};
use crate::dot::{self, DotAccess, DotNotation, SEPARATOR, WILDCARD};
use crate::error::{ResolveError, Result};

/// A path pattern in one of the forms the resolver accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern<'a> {
    /// No pattern: every leaf path.
    Any,
    /// A dot-notation string such as `users.*.id`.
    Path(&'a str),
    /// A pattern already split into segments.
    Segments(&'a [&'a str]),
}

impl<'a> From<&'a str> for Pattern<'a> {
    fn from(path: &'a str) -> Self {
        Pattern::Path(path)
    }
}

impl<'a> From<Option<&'a str>> for Pattern<'a> {
    fn from(path: Option<&'a str>) -> Self {
        path.map_or(Pattern::Any, Pattern::Path)
    }
}

impl<'a> From<&'a [&'a str]> for Pattern<'a> {
    fn from(segments: &'a [&'a str]) -> Self {
        Pattern::Segments(segments)
    }
}

/// Expands wildcarded dot-paths into the concrete paths present in a structure.
///
/// Each `*` segment matches every entry at exactly one level of nesting. Paths
/// come back in the structure's iteration order.
///
/// # Examples
///
/// ```
/// use dotpath::v1::WildcardResolver;
/// use serde_json::json;
///
/// let doc = json!({
///     "users": [
///         {"id": 1, "name": "Ann"},
///         {"id": 2},
///     ]
/// });
///
/// let resolver = WildcardResolver::new();
/// assert_eq!(
///     resolver.resolve(&doc, "users.*.id").unwrap(),
///     vec!["users.0.id", "users.1.id"]
/// );
/// assert!(resolver.resolve(&doc, "users.*.email").unwrap().is_empty());
/// assert!(resolver.resolve(&doc, "users.").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct WildcardResolver<A = DotNotation> {
    access: A,
}

impl WildcardResolver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<A: DotAccess> WildcardResolver<A> {
    /// Resolve through a custom flatten/exists/get implementation.
    pub fn with_access(access: A) -> Self {
        Self { access }
    }

    pub fn access(&self) -> &A {
        &self.access
    }

    /// Resolve `pattern` against `structure`.
    ///
    /// Returns an empty list when nothing matches. Fails only when a string
    /// pattern ends with the separator.
    pub fn resolve<'p>(
        &self,
        structure: &Value,
        pattern: impl Into<Pattern<'p>>,
    ) -> Result<Vec<String>> {
        self.resolve_with_prefix(structure, pattern.into(), "")
    }

    /// Resolve `pattern` with every match reported under `prefix`.
    ///
    /// `prefix` names where `structure` sits inside some outer document. The
    /// one exception is a fully concrete string pattern, which is checked at
    /// `prefix.pattern` but reported as the pattern itself.
    pub fn resolve_with_prefix(
        &self,
        structure: &Value,
        pattern: Pattern<'_>,
        prefix: &str,
    ) -> Result<Vec<String>> {
        let found = self.find(structure, pattern, prefix)?;
        Ok(found.into_iter().map(|(path, _)| path).collect())
    }

    /// Resolve `pattern` and pair each match with the node it was matched on.
    ///
    /// Matches whose node the collaborator cannot look up are left out.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotpath::v1::WildcardResolver;
    /// use serde_json::json;
    ///
    /// let doc = json!({"users": {"ann": {"id": 1}, "bob": {"id": 2}}});
    /// let selected = WildcardResolver::new().select(&doc, "users.*.id").unwrap();
    /// assert_eq!(selected[1], ("users.bob.id".to_string(), &json!(2)));
    /// ```
    pub fn select<'v, 'p>(
        &self,
        structure: &'v Value,
        pattern: impl Into<Pattern<'p>>,
    ) -> Result<Vec<(String, &'v Value)>> {
        let found = self.find(structure, pattern.into(), "")?;
        Ok(found
            .into_iter()
            .filter_map(|(path, value)| value.map(|value| (path, value)))
            .collect())
    }

    fn find<'v>(
        &self,
        structure: &'v Value,
        pattern: Pattern<'_>,
        prefix: &str,
    ) -> Result<Vec<Found<'v>>> {
        match pattern {
            Pattern::Any => Ok(self.leaf_paths(structure, prefix)),
            Pattern::Path(path) if path.is_empty() || path == WILDCARD => {
                Ok(self.leaf_paths(structure, prefix))
            }
            Pattern::Path(path) if path.ends_with(SEPARATOR) => {
                tracing::debug!(pattern = path, "rejecting pattern ending with separator");
                Err(ResolveError::invalid_pattern(path))
            }
            Pattern::Path(path) => {
                let segments: Vec<&str> = path.split(SEPARATOR).collect();
                if segments.contains(&WILDCARD) {
                    Ok(self.expand(structure, &segments, prefix))
                } else {
                    Ok(self.concrete(structure, path, prefix))
                }
            }
            Pattern::Segments(segments) => Ok(self.expand(structure, segments, prefix)),
        }
    }

    fn leaf_paths<'v>(&self, structure: &'v Value, prefix: &str) -> Vec<Found<'v>> {
        self.access
            .flatten(structure)
            .into_iter()
            .map(|(path, _)| {
                let value = self.access.get(structure, &path);
                if prefix.is_empty() {
                    (path, value)
                } else {
                    (format!("{prefix}{SEPARATOR}{path}"), value)
                }
            })
            .collect()
    }

    fn concrete<'v>(&self, structure: &'v Value, path: &str, prefix: &str) -> Vec<Found<'v>> {
        let candidate = if prefix.is_empty() {
            path.to_string()
        } else {
            format!("{prefix}{SEPARATOR}{path}")
        };
        if self.access.exists(structure, &candidate) {
            vec![(path.to_string(), self.access.get(structure, &candidate))]
        } else {
            Vec::new()
        }
    }

    fn expand<'v>(
        &self,
        structure: &'v Value,
        segments: &[&str],
        prefix: &str,
    ) -> Vec<Found<'v>> {
        if segments.is_empty() {
            return self.leaf_paths(structure, prefix);
        }

        let mut node = structure;
        let mut consumed: Vec<&str> = Vec::with_capacity(segments.len());

        for (i, &segment) in segments.iter().enumerate() {
            if segment == WILDCARD {
                let rest = &segments[i + 1..];
                tracing::trace!(prefix, consumed = consumed.len(), "expanding wildcard");
                let branches = dot::entries(node)
                    .map(|(key, value)| {
                        let path = join_nonempty(prefix, &consumed, &key);
                        if value.is_composite() {
                            Branch::Nested(self.expand(value, rest, &path))
                        } else if rest.is_empty() {
                            Branch::Path((path, Some(value)))
                        } else {
                            // A leaf has nothing left to match the remaining segments.
                            Branch::Nested(Vec::new())
                        }
                    })
                    .collect();
                return collapse(branches);
            }

            match dot::child(node, segment) {
                Some(next) => {
                    node = next;
                    consumed.push(segment);
                }
                None => {
                    tracing::trace!(prefix, segment, "segment not found");
                    return Vec::new();
                }
            }
        }

        let joined = join_segments(consumed);
        if prefix.is_empty() {
            vec![(joined, Some(node))]
        } else {
            vec![(format!("{prefix}{SEPARATOR}{joined}"), Some(node))]
        }
    }
}

/// A resolved path and the node it was matched on, when known.
type Found<'v> = (String, Option<&'v Value>);

/// Join the non-empty components of `prefix`, `consumed` and `key` with the
/// separator. An entry keyed `""` therefore vanishes from the joined path.
fn join_nonempty(prefix: &str, consumed: &[&str], key: &str) -> String {
    join_segments(
        std::iter::once(prefix)
            .chain(consumed.iter().copied())
            .chain(std::iter::once(key))
            .filter(|part| !part.is_empty()),
    )
}

fn join_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> String {
    let mut joined = String::new();
    for (i, segment) in segments.into_iter().enumerate() {
        if i > 0 {
            joined.push(SEPARATOR);
        }
        joined.push_str(segment);
    }
    joined
}

/// Resolve `pattern` against `structure` with the standard dot notation.
///
/// # Examples
///
/// ```
/// use dotpath::v1::resolve;
/// use serde_json::json;
///
/// let doc = json!({"a": {"x": {"id": 1}, "y": {"id": 2}}});
/// assert_eq!(resolve(&doc, "a.*.id").unwrap(), vec!["a.x.id", "a.y.id"]);
/// assert_eq!(resolve(&doc, "a.x").unwrap(), vec!["a.x"]);
/// ```
pub fn resolve<'p>(structure: &Value, pattern: impl Into<Pattern<'p>>) -> Result<Vec<String>> {
    WildcardResolver::new().resolve(structure, pattern)
}
