//! The closed set of value kinds.

use std::fmt;
use std::str::FromStr;

use crate::coerce::{self, CoerceError};
use crate::error::Error;
use crate::value::Value;

/// One of the six supported value categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Integer,
    Float,
    Boolean,
    String,
    Bytes,
    List,
}

impl Kind {
    /// All kinds, in declaration order.
    pub const ALL: [Kind; 6] = [
        Kind::Integer,
        Kind::Float,
        Kind::Boolean,
        Kind::String,
        Kind::Bytes,
        Kind::List,
    ];

    /// Human-readable name, also accepted by [`Kind::from_str`].
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Boolean => "boolean",
            Kind::String => "string",
            Kind::Bytes => "bytes",
            Kind::List => "list",
        }
    }

    /// Coerce raw text into a [`Value`] of this kind.
    ///
    /// Handy as a list item factory:
    ///
    /// ```
    /// use easy_env::{Kind, Value};
    ///
    /// assert_eq!(Kind::Integer.coerce(" 42"), Ok(Value::Int(42)));
    /// assert!(Kind::Boolean.coerce("maybe").is_err());
    /// ```
    ///
    /// `List` splits on the default separator and keeps the pieces as strings.
    pub fn coerce(self, raw: &str) -> Result<Value, CoerceError> {
        Ok(match self {
            Kind::Integer => Value::Int(coerce::integer(raw)?),
            Kind::Float => Value::Float(coerce::float(raw)?),
            Kind::Boolean => Value::Bool(coerce::boolean(raw)?),
            Kind::String => Value::Str(coerce::string(raw)?),
            Kind::Bytes => Value::Bytes(coerce::bytes(raw)?),
            Kind::List => Value::List(coerce::list(
                raw,
                coerce::DEFAULT_SEPARATOR,
                |item| coerce::string(item).map(Value::Str),
            )?),
        })
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" | "integer" => Ok(Kind::Integer),
            "float" => Ok(Kind::Float),
            "bool" | "boolean" => Ok(Kind::Boolean),
            "str" | "string" => Ok(Kind::String),
            "bytes" => Ok(Kind::Bytes),
            "list" => Ok(Kind::List),
            other => Err(Error::UnsupportedType(other.to_string())),
        }
    }
}
