//! Serialization of typed values into environment text.
//!
//! These are the inverses of the functions in [`coerce`](crate::coerce).

use std::fmt::Display;

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};

pub fn integer(value: i64) -> String {
    value.to_string()
}

pub fn float(value: f64) -> String {
    value.to_string()
}

pub fn string(value: &str) -> String {
    value.to_string()
}

/// `"1"` for true, `"0"` for false.
pub fn boolean(value: bool) -> String {
    String::from(if value { "1" } else { "0" })
}

/// Standard (padded) base64.
pub fn bytes(value: &[u8]) -> String {
    BASE64.encode(value)
}

/// Serialize every item with `serializer` and join with `separator`.
pub fn list<I, F>(items: I, separator: &str, serializer: F) -> String
where
    I: IntoIterator,
    F: Fn(&I::Item) -> String,
{
    items
        .into_iter()
        .map(|item| serializer(&item))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Item serializer used when none is configured.
pub fn display<T: Display>(item: &T) -> String {
    item.to_string()
}
