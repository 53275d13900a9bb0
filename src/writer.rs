//! Typed writes into an [`EnvStore`].

use std::fmt::Display;

use crate::error::Result;
use crate::kind::Kind;
use crate::logging::trace;
use crate::serialize;
use crate::store::{EnvStore, SystemEnv};
use crate::value::Value;

/// Serializes typed values and assigns them to environment keys.
///
/// Serialization never fails; the only error is the store refusing the entry.
///
/// ```
/// use easy_env::{EnvStore, InMemoryEnv, Writer};
///
/// let env = InMemoryEnv::new();
/// let writer = Writer::new(&env);
///
/// writer.write_bool("DEBUG", true)?;
/// writer.write_bytes("KEY", b"foo")?;
/// writer.write_list("PORTS", [80, 443], ",")?;
///
/// assert_eq!(env.lookup("DEBUG").as_deref(), Some("1"));
/// assert_eq!(env.lookup("KEY").as_deref(), Some("Zm9v"));
/// assert_eq!(env.lookup("PORTS").as_deref(), Some("80,443"));
/// # Ok::<(), easy_env::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Writer<S> {
    store: S,
}

impl Writer<SystemEnv> {
    /// Writer over the process environment.
    ///
    /// See [`SystemEnv`] for the threading caveat.
    pub fn system() -> Self {
        Self::new(SystemEnv)
    }
}

impl<S: EnvStore> Writer<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    #[cfg_attr(not(feature = "logging"), allow(unused_variables))]
    fn assign(&self, key: &str, kind: Kind, text: &str) -> Result<()> {
        trace!(key, kind = %kind, len = text.len(), "assigning env var");
        self.store.assign(key, text)
    }

    pub fn write_int(&self, key: &str, value: i64) -> Result<()> {
        self.assign(key, Kind::Integer, &serialize::integer(value))
    }

    pub fn write_float(&self, key: &str, value: f64) -> Result<()> {
        self.assign(key, Kind::Float, &serialize::float(value))
    }

    /// Stored as `"1"` or `"0"`.
    pub fn write_bool(&self, key: &str, value: bool) -> Result<()> {
        self.assign(key, Kind::Boolean, &serialize::boolean(value))
    }

    pub fn write_str(&self, key: &str, value: &str) -> Result<()> {
        self.assign(key, Kind::String, &serialize::string(value))
    }

    /// Stored as standard base64.
    pub fn write_bytes(&self, key: &str, value: &[u8]) -> Result<()> {
        self.assign(key, Kind::Bytes, &serialize::bytes(value))
    }

    /// Items in their `Display` form, joined by `separator`.
    ///
    /// An empty list is stored as `""`, which reads back as one empty item:
    /// `[""]` for string items, a coercion error for items that reject
    /// empty text such as integers.
    pub fn write_list<I>(&self, key: &str, items: I, separator: &str) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.write_list_with(key, items, separator, serialize::display)
    }

    /// Items serialized by `serializer`, joined by `separator`.
    ///
    /// Empty lists do not round-trip; see [`Writer::write_list`].
    pub fn write_list_with<I, F>(
        &self,
        key: &str,
        items: I,
        separator: &str,
        serializer: F,
    ) -> Result<()>
    where
        I: IntoIterator,
        F: Fn(&I::Item) -> String,
    {
        self.assign(key, Kind::List, &serialize::list(items, separator, serializer))
    }

    /// Pick the write operation from the value's kind.
    ///
    /// `separator` only matters for lists, whose items are written with
    /// [`Value::to_env_string`].
    pub fn auto_set(&self, key: &str, value: &Value, separator: &str) -> Result<()> {
        match value {
            Value::Int(v) => self.write_int(key, *v),
            Value::Float(v) => self.write_float(key, *v),
            Value::Bool(v) => self.write_bool(key, *v),
            Value::Str(v) => self.write_str(key, v),
            Value::Bytes(v) => self.write_bytes(key, v),
            Value::List(items) => {
                self.write_list_with(key, items, separator, |item: &&Value| {
                    item.to_env_string()
                })
            }
        }
    }
}
