//! Unified error type for the easy-env library.
//!
//! Reads and writes surface a single [`Error`] type. Parsing failures carry the
//! underlying [`CoerceError`] as their source so callers can tell a bad integer
//! from a bad base64 payload without string matching.

use thiserror::Error;

use crate::coerce::CoerceError;
use crate::kind::Kind;

/// Unified error type for all easy-env operations.
///
/// # Example
///
/// ```
/// use easy_env::{InMemoryEnv, OnMissing, Reader};
///
/// let env = InMemoryEnv::new();
/// let reader = Reader::new(&env);
///
/// let err = reader.read_int("PORT", None, OnMissing::Raise).unwrap_err();
/// assert!(err.is_missing());
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The key is absent, no default was supplied and the caller asked to fail.
    #[error("Failed to find env var {key}")]
    MissingKey { key: String },

    /// The key is present but its text is not a valid value of the requested kind.
    #[error("Env var {key} is not a valid {kind}: {source}")]
    Coercion {
        key: String,
        kind: Kind,
        #[source]
        source: CoerceError,
    },

    /// A kind name outside the six supported kinds.
    #[error("Unsupported value type: {0}")]
    UnsupportedType(String),

    /// The store refused to hold the entry.
    #[error("Invalid env entry {key:?}: {reason}")]
    InvalidEntry { key: String, reason: &'static str },
}

/// A [`Result`] type alias using the unified [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn missing(key: &str) -> Self {
        Self::MissingKey {
            key: key.to_string(),
        }
    }

    pub(crate) fn coercion(key: &str, kind: Kind, source: CoerceError) -> Self {
        Self::Coercion {
            key: key.to_string(),
            kind,
            source,
        }
    }

    /// Returns `true` if this is a missing-key error.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::MissingKey { .. })
    }

    /// Returns `true` if this is a coercion error.
    pub fn is_coercion(&self) -> bool {
        matches!(self, Self::Coercion { .. })
    }

    /// Returns `true` if this is an unsupported-type error.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self, Self::UnsupportedType(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_message() {
        let err = Error::missing("INT_VAL");
        assert_eq!(err.to_string(), "Failed to find env var INT_VAL");
        assert!(err.is_missing());
        assert!(!err.is_coercion());
    }

    #[test]
    fn test_coercion_keeps_source() {
        let err = Error::coercion("FLAG", Kind::Boolean, CoerceError::Boolean("maybe".into()));
        assert!(err.is_coercion());
        assert_eq!(
            err.to_string(),
            "Env var FLAG is not a valid boolean: unrecognized boolean token \"maybe\""
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
