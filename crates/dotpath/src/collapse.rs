//! Merging per-branch wildcard results into one flat path list.

use crate::classify::{Composite, has_composite};

/// One entry's contribution to a wildcard expansion.
///
/// `T` is a resolved path, or a path paired with whatever travels with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Branch<T = String> {
    /// A single match synthesized for a leaf entry.
    Path(T),
    /// Matches produced by recursing into a composite entry.
    Nested(Vec<T>),
}

impl<T> Composite for Branch<T> {
    fn is_composite(&self) -> bool {
        matches!(self, Branch::Nested(_))
    }
}

impl From<String> for Branch {
    fn from(path: String) -> Self {
        Branch::Path(path)
    }
}

impl From<Vec<String>> for Branch {
    fn from(paths: Vec<String>) -> Self {
        Branch::Nested(paths)
    }
}

/// Collapse a sequence of branch results into a single flat sequence.
///
/// When no branch is nested the input is already flat and its paths are
/// returned as-is. Otherwise the nested sequences are concatenated in
/// encounter order and single-path branches are dropped.
///
/// # Examples
///
/// ```
/// use dotpath::v1::{Branch, collapse};
///
/// let merged: Vec<String> = collapse(vec![
///     Branch::Nested(vec!["a.x".into(), "a.y".into()]),
///     Branch::Nested(vec!["b.x".into()]),
/// ]);
/// assert_eq!(merged, vec!["a.x", "a.y", "b.x"]);
/// ```
pub fn collapse<T>(branches: Vec<Branch<T>>) -> Vec<T> {
    if !has_composite(&branches) {
        return branches
            .into_iter()
            .filter_map(|branch| match branch {
                Branch::Path(path) => Some(path),
                Branch::Nested(_) => None,
            })
            .collect();
    }

    branches
        .into_iter()
        .flat_map(|branch| match branch {
            Branch::Nested(paths) => paths,
            Branch::Path(_) => Vec::new(),
        })
        .collect()
}
