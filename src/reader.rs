//! Typed reads from an [`EnvStore`].

use crate::coerce::{self, CoerceError};
use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::logging::debug;
use crate::options::{AutoOptions, ListOptions, OnMissing};
use crate::store::{EnvStore, SystemEnv};
use crate::value::Value;

/// Reads environment entries and coerces them into typed values.
///
/// Every `read_*` method follows the same contract:
///
/// 1. A present entry is coerced; malformed text is an [`Error::Coercion`],
///    even when a default was supplied.
/// 2. An absent entry yields the default unchanged, if there is one.
/// 3. Otherwise [`OnMissing::Raise`] fails with [`Error::MissingKey`] and
///    [`OnMissing::Ignore`] returns `Ok(None)`.
///
/// # Example
///
/// ```
/// use easy_env::{InMemoryEnv, OnMissing, Reader};
///
/// let env = InMemoryEnv::from_iter([("WORKERS", "4"), ("DEBUG", "yes")]);
/// let reader = Reader::new(&env);
///
/// assert_eq!(reader.read_int("WORKERS", None, OnMissing::Ignore)?, Some(4));
/// assert_eq!(reader.read_bool("DEBUG", Some(false), OnMissing::Ignore)?, Some(true));
/// assert_eq!(reader.read_float("RATIO", Some(0.5), OnMissing::Ignore)?, Some(0.5));
/// # Ok::<(), easy_env::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Reader<S> {
    store: S,
}

impl Reader<SystemEnv> {
    /// Reader over the process environment.
    pub fn system() -> Self {
        Self::new(SystemEnv)
    }
}

impl<S: EnvStore> Reader<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn read<T, F>(
        &self,
        key: &str,
        kind: Kind,
        default: Option<T>,
        on_missing: OnMissing,
        coerce: F,
    ) -> Result<Option<T>>
    where
        F: FnOnce(&str) -> std::result::Result<T, CoerceError>,
    {
        match self.store.lookup(key) {
            Some(raw) => {
                debug!(key, kind = %kind, "coercing env var");
                coerce(&raw)
                    .map(Some)
                    .map_err(|source| Error::coercion(key, kind, source))
            }
            None if default.is_some() => {
                debug!(key, kind = %kind, "env var absent, using default");
                Ok(default)
            }
            None => match on_missing {
                OnMissing::Raise => Err(Error::missing(key)),
                OnMissing::Ignore => {
                    debug!(key, kind = %kind, "env var absent");
                    Ok(None)
                }
            },
        }
    }

    pub fn read_int(
        &self,
        key: &str,
        default: Option<i64>,
        on_missing: OnMissing,
    ) -> Result<Option<i64>> {
        self.read(key, Kind::Integer, default, on_missing, coerce::integer)
    }

    pub fn read_float(
        &self,
        key: &str,
        default: Option<f64>,
        on_missing: OnMissing,
    ) -> Result<Option<f64>> {
        self.read(key, Kind::Float, default, on_missing, coerce::float)
    }

    /// See [`TRUE_TOKENS`](crate::coerce::TRUE_TOKENS) and
    /// [`FALSE_TOKENS`](crate::coerce::FALSE_TOKENS) for the accepted text.
    pub fn read_bool(
        &self,
        key: &str,
        default: Option<bool>,
        on_missing: OnMissing,
    ) -> Result<Option<bool>> {
        self.read(key, Kind::Boolean, default, on_missing, coerce::boolean)
    }

    pub fn read_str(
        &self,
        key: &str,
        default: Option<String>,
        on_missing: OnMissing,
    ) -> Result<Option<String>> {
        self.read(key, Kind::String, default, on_missing, coerce::string)
    }

    /// Decodes standard base64.
    pub fn read_bytes(
        &self,
        key: &str,
        default: Option<Vec<u8>>,
        on_missing: OnMissing,
    ) -> Result<Option<Vec<u8>>> {
        self.read(key, Kind::Bytes, default, on_missing, coerce::bytes)
    }

    /// Comma-separated list of strings.
    pub fn read_list(
        &self,
        key: &str,
        default: Option<Vec<String>>,
        on_missing: OnMissing,
    ) -> Result<Option<Vec<String>>> {
        self.read_list_with(key, default, on_missing, &ListOptions::default())
    }

    /// List with a custom separator and item factory.
    pub fn read_list_with<T, F>(
        &self,
        key: &str,
        default: Option<Vec<T>>,
        on_missing: OnMissing,
        options: &ListOptions<F>,
    ) -> Result<Option<Vec<T>>>
    where
        F: Fn(&str) -> std::result::Result<T, CoerceError>,
    {
        self.read_collection(key, default, on_missing, options)
    }

    /// List collected into any container, e.g. a `BTreeSet`.
    ///
    /// ```
    /// use std::collections::BTreeSet;
    /// use easy_env::{InMemoryEnv, ListOptions, OnMissing, Reader, coerce};
    ///
    /// let env = InMemoryEnv::from_iter([("PORTS", "80,443,80")]);
    /// let ports: Option<BTreeSet<i64>> = Reader::new(&env).read_collection(
    ///     "PORTS",
    ///     None,
    ///     OnMissing::Raise,
    ///     &ListOptions::new().item_factory(coerce::integer),
    /// )?;
    /// assert_eq!(ports, Some(BTreeSet::from([80, 443])));
    /// # Ok::<(), easy_env::Error>(())
    /// ```
    pub fn read_collection<T, C, F>(
        &self,
        key: &str,
        default: Option<C>,
        on_missing: OnMissing,
        options: &ListOptions<F>,
    ) -> Result<Option<C>>
    where
        C: FromIterator<T>,
        F: Fn(&str) -> std::result::Result<T, CoerceError>,
    {
        self.read(key, Kind::List, default, on_missing, |raw| {
            coerce::list(raw, options.separator_str(), options.factory())
        })
    }

    /// Read a value of an explicitly tagged kind, without a default.
    pub fn read_kind<F>(
        &self,
        key: &str,
        kind: Kind,
        options: &AutoOptions<F>,
    ) -> Result<Option<Value>>
    where
        F: Fn(&str) -> std::result::Result<Value, CoerceError>,
    {
        let on_missing = options.missing();
        Ok(match kind {
            Kind::Integer => self.read_int(key, None, on_missing)?.map(Value::Int),
            Kind::Float => self.read_float(key, None, on_missing)?.map(Value::Float),
            Kind::Boolean => self.read_bool(key, None, on_missing)?.map(Value::Bool),
            Kind::String => self.read_str(key, None, on_missing)?.map(Value::Str),
            Kind::Bytes => self.read_bytes(key, None, on_missing)?.map(Value::Bytes),
            Kind::List => self
                .read_list_with(key, None, on_missing, options.list())?
                .map(Value::List),
        })
    }

    /// Pick the read operation from the default's kind.
    ///
    /// Without a default this reads a string. The result is exactly what the
    /// matching `read_*` method returns for the same arguments.
    ///
    /// ```
    /// use easy_env::{AutoOptions, InMemoryEnv, Kind, Reader, Value};
    ///
    /// let env = InMemoryEnv::new();
    /// let reader = Reader::new(&env);
    /// let options = AutoOptions::new().item_factory(|s| Kind::Integer.coerce(s));
    ///
    /// let value = reader.auto_get("V", Some(Value::list([1, 2])), &options)?;
    /// assert_eq!(value, Some(Value::list([1, 2])));
    /// # Ok::<(), easy_env::Error>(())
    /// ```
    pub fn auto_get<F>(
        &self,
        key: &str,
        default: Option<Value>,
        options: &AutoOptions<F>,
    ) -> Result<Option<Value>>
    where
        F: Fn(&str) -> std::result::Result<Value, CoerceError>,
    {
        let on_missing = options.missing();
        Ok(match default {
            None => self.read_str(key, None, on_missing)?.map(Value::Str),
            Some(Value::Int(d)) => self.read_int(key, Some(d), on_missing)?.map(Value::Int),
            Some(Value::Float(d)) => self.read_float(key, Some(d), on_missing)?.map(Value::Float),
            Some(Value::Bool(d)) => self.read_bool(key, Some(d), on_missing)?.map(Value::Bool),
            Some(Value::Str(d)) => self.read_str(key, Some(d), on_missing)?.map(Value::Str),
            Some(Value::Bytes(d)) => self.read_bytes(key, Some(d), on_missing)?.map(Value::Bytes),
            Some(Value::List(d)) => self
                .read_list_with(key, Some(d), on_missing, options.list())?
                .map(Value::List),
        })
    }
}
