//! Dynamically typed values for autodetection.

use crate::kind::Kind;
use crate::serialize;

/// A value of one of the six supported kinds.
///
/// Autodetection matches on the variant, so there is no way to hand it a
/// seventh kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    Bytes(Vec<u8>),
    List(Vec<Value>),
}

impl Value {
    /// Build a list value from anything convertible into values.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Int(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
            Value::Bool(_) => Kind::Boolean,
            Value::Str(_) => Kind::String,
            Value::Bytes(_) => Kind::Bytes,
            Value::List(_) => Kind::List,
        }
    }

    /// Environment text for this value.
    ///
    /// Nested lists use the default separator.
    pub fn to_env_string(&self) -> String {
        match self {
            Value::Int(v) => serialize::integer(*v),
            Value::Float(v) => serialize::float(*v),
            Value::Bool(v) => serialize::boolean(*v),
            Value::Str(v) => serialize::string(v),
            Value::Bytes(v) => serialize::bytes(v),
            Value::List(items) => serialize::list(
                items,
                crate::coerce::DEFAULT_SEPARATOR,
                |item: &&Value| item.to_env_string(),
            ),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(Value::from(1).kind(), Kind::Integer);
        assert_eq!(Value::from(1.5).kind(), Kind::Float);
        assert_eq!(Value::from(true).kind(), Kind::Boolean);
        assert_eq!(Value::from("x").kind(), Kind::String);
        assert_eq!(Value::from(b"x".as_slice()).kind(), Kind::Bytes);
        assert_eq!(Value::list([1, 2]).kind(), Kind::List);
    }

    #[test]
    fn test_to_env_string() {
        assert_eq!(Value::Int(7).to_env_string(), "7");
        assert_eq!(Value::Bool(false).to_env_string(), "0");
        assert_eq!(Value::Bytes(b"foo".to_vec()).to_env_string(), "Zm9v");
        assert_eq!(Value::list([1, 2, 3]).to_env_string(), "1,2,3");
        assert_eq!(
            Value::List(vec![Value::Bool(true), Value::Str("a".into())]).to_env_string(),
            "1,a"
        );
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Int(3).as_int(), Some(3));
        assert_eq!(Value::Int(3).as_float(), None);
        assert_eq!(Value::from("a").as_str(), Some("a"));
        assert_eq!(Value::list(["a"]).as_list().map(<[Value]>::len), Some(1));
    }
}
