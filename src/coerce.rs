//! Coercion of raw environment text into typed values.
//!
//! Every function here is pure and maps `&str` to a typed value or a
//! [`CoerceError`]. The [`Reader`](crate::Reader) attaches the key and kind.

use std::num::{ParseFloatError, ParseIntError};

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use thiserror::Error;

/// Separator used by list kinds unless configured otherwise.
pub const DEFAULT_SEPARATOR: &str = ",";

/// Tokens read as `true`. Matching is case-sensitive.
pub const TRUE_TOKENS: [&str; 11] = [
    "1",
    "true",
    "t",
    "yes",
    "y",
    "ok",
    "okay",
    "confirm",
    "absolutely",
    "totally",
    "yep",
];

/// Tokens read as `false`. Matching is case-sensitive.
pub const FALSE_TOKENS: [&str; 8] = ["0", "false", "f", "no", "n", "bad", "nope", "don't"];

/// Why a raw string could not be coerced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoerceError {
    #[error("invalid integer: {0}")]
    Integer(#[from] ParseIntError),

    #[error("invalid float: {0}")]
    Float(#[from] ParseFloatError),

    #[error("unrecognized boolean token {0:?}")]
    Boolean(String),

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("list separator must not be empty")]
    EmptySeparator,

    #[error("list item {index}: {source}")]
    ListItem {
        index: usize,
        #[source]
        source: Box<CoerceError>,
    },

    /// Failure reported by a caller-supplied item factory.
    #[error("{0}")]
    Custom(String),
}

impl CoerceError {
    /// Create a custom error from a message.
    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }
}

/// Parse a decimal integer. Surrounding whitespace is ignored.
pub fn integer(raw: &str) -> Result<i64, CoerceError> {
    Ok(raw.trim().parse()?)
}

/// Parse a decimal float. Integer-looking text is accepted.
pub fn float(raw: &str) -> Result<f64, CoerceError> {
    Ok(raw.trim().parse()?)
}

/// Identity; never fails.
pub fn string(raw: &str) -> Result<String, CoerceError> {
    Ok(raw.to_string())
}

/// Look the token up in [`TRUE_TOKENS`] and [`FALSE_TOKENS`].
///
/// Anything else is an error, never an implicit `false`.
pub fn boolean(raw: &str) -> Result<bool, CoerceError> {
    if TRUE_TOKENS.contains(&raw) {
        Ok(true)
    } else if FALSE_TOKENS.contains(&raw) {
        Ok(false)
    } else {
        Err(CoerceError::Boolean(raw.to_string()))
    }
}

/// Decode standard (padded) base64.
pub fn bytes(raw: &str) -> Result<Vec<u8>, CoerceError> {
    Ok(BASE64.decode(raw)?)
}

/// Split `raw` on `separator` and coerce every piece with `item_factory`.
///
/// Empty pieces are handed to the factory like any other, so `"1,,2"` fails
/// for integers. The first failing piece aborts the whole list.
pub fn list<T, C, F>(raw: &str, separator: &str, item_factory: F) -> Result<C, CoerceError>
where
    C: FromIterator<T>,
    F: Fn(&str) -> Result<T, CoerceError>,
{
    if separator.is_empty() {
        return Err(CoerceError::EmptySeparator);
    }
    raw.split(separator)
        .enumerate()
        .map(|(index, piece)| {
            item_factory(piece).map_err(|source| CoerceError::ListItem {
                index,
                source: Box::new(source),
            })
        })
        .collect()
}
