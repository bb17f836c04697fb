//! Error types for pod template extraction.
//!
//! Traversal failures carry no value. Decode failures carry a best-effort
//! value next to the serde error, so callers can tell "nothing to show"
//! apart from "partial value, do not trust it".

use thiserror::Error;

/// Failures while walking a [`FieldPath`](crate::path::FieldPath) through a spec map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The resource has no spec at all.
    #[error("spec is nil")]
    MissingSpec,

    /// A segment names a key that is not present at its level.
    #[error("unable to access path `{path}`: no key `{segment}` at depth {depth}")]
    PathNotFound {
        path: String,
        segment: String,
        depth: usize,
    },

    /// An intermediate value exists but cannot be descended into.
    #[error("unable to access path `{path}`: `{segment}` at depth {depth} is {found}, not an object")]
    TypeMismatch {
        path: String,
        segment: String,
        depth: usize,
        found: &'static str,
    },
}

/// Failures from [`extract_typed_field`](crate::decode::extract_typed_field).
#[derive(Debug, Error)]
pub enum ExtractError<T> {
    #[error(transparent)]
    Path(#[from] PathError),

    /// The resolved value did not fit `T`. `partial` keeps whatever did.
    #[error("unable to decode value at `{path}`: {source}")]
    Decode {
        path: String,
        partial: Box<T>,
        #[source]
        source: serde_json::Error,
    },
}

impl<T> ExtractError<T> {
    pub fn is_decode_failure(&self) -> bool {
        matches!(self, ExtractError::Decode { .. })
    }

    pub fn path_error(&self) -> Option<&PathError> {
        match self {
            ExtractError::Path(err) => Some(err),
            ExtractError::Decode { .. } => None,
        }
    }

    /// Best-effort value, only present for decode failures.
    pub fn partial(&self) -> Option<&T> {
        match self {
            ExtractError::Path(_) => None,
            ExtractError::Decode { partial, .. } => Some(partial),
        }
    }

    pub fn into_partial(self) -> Option<T> {
        match self {
            ExtractError::Path(_) => None,
            ExtractError::Decode { partial, .. } => Some(*partial),
        }
    }
}
