use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResolveError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A string pattern ended with the separator, e.g. `"users.id."`.
    #[error("pattern can not end with `.`")]
    InvalidPattern { pattern: String },
}

impl ResolveError {
    pub(crate) fn invalid_pattern(pattern: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
        }
    }
}
