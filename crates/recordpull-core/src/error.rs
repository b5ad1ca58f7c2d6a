use std::error::Error;
use thiserror::Error as ThisError;

///
/// PullError
///
/// Structured failure surface of a pull invocation. Absent-value
/// conditions are not errors; they omit keys from the result instead.
///

#[derive(Debug, ThisError)]
pub enum PullError {
    /// The wire grammar carried a shape that is not a pull pattern.
    /// Carries the offending fragment, rendered for diagnostics.
    #[error("invalid pull pattern: {pattern}")]
    InvalidPattern { pattern: String },

    /// Schema metadata named a relation kind the engine cannot resolve.
    #[error("unsupported kind '{kind}' for relation '{relation}'")]
    UnsupportedRelation { relation: String, kind: String },

    /// A relation fetch failed in the external source.
    /// Propagated unmodified; the engine never retries or suppresses.
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl PullError {
    /// Construct an invalid-pattern error from the offending fragment.
    pub(crate) fn invalid_pattern(fragment: impl std::fmt::Display) -> Self {
        Self::InvalidPattern {
            pattern: fragment.to_string(),
        }
    }

    /// Construct an unsupported-relation error naming the relation.
    #[must_use]
    pub fn unsupported_relation(relation: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::UnsupportedRelation {
            relation: relation.into(),
            kind: kind.into(),
        }
    }
}

///
/// SourceError
///
/// Fetch failure reported by a [`RelationSource`](crate::traits::RelationSource).
/// Carries a message plus the underlying cause when the source has one.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct SourceError {
    pub message: String,
    #[source]
    pub source: Option<Box<dyn Error + Send + Sync>>,
}

impl SourceError {
    /// Construct a message-only fetch error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Construct a fetch error wrapping an underlying cause.
    pub fn with_cause(
        message: impl Into<String>,
        cause: impl Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(cause)),
        }
    }
}
