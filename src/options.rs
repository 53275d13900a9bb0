//! Options shared by the reader and the autodetect layer.

use crate::coerce::{self, CoerceError, DEFAULT_SEPARATOR};
use crate::kind::Kind;
use crate::value::Value;

/// What a read does when the key is absent and no default was given.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OnMissing {
    /// Return `Ok(None)`.
    #[default]
    Ignore,
    /// Fail with [`Error::MissingKey`](crate::Error::MissingKey).
    Raise,
}

/// Default list item factory: keep every piece as a string.
pub type StringItem = fn(&str) -> Result<String, CoerceError>;

/// Default autodetect item factory: keep every piece as [`Value::Str`].
pub type ValueItem = fn(&str) -> Result<Value, CoerceError>;

fn string_value(raw: &str) -> Result<Value, CoerceError> {
    Kind::String.coerce(raw)
}

/// How list kinds split and coerce their pieces.
///
/// ```
/// use easy_env::ListOptions;
///
/// let options = ListOptions::new()
///     .separator(";")
///     .item_factory(easy_env::coerce::integer);
/// assert_eq!(options.separator_str(), ";");
/// ```
#[derive(Debug, Clone)]
pub struct ListOptions<F = StringItem> {
    separator: String,
    item_factory: F,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            item_factory: coerce::string,
        }
    }
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F> ListOptions<F> {
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Replace the per-item coercion.
    pub fn item_factory<G, T>(self, item_factory: G) -> ListOptions<G>
    where
        G: Fn(&str) -> Result<T, CoerceError>,
    {
        ListOptions {
            separator: self.separator,
            item_factory,
        }
    }

    pub fn separator_str(&self) -> &str {
        &self.separator
    }

    pub(crate) fn factory(&self) -> &F {
        &self.item_factory
    }
}

/// Options forwarded by [`Reader::auto_get`](crate::Reader::auto_get) and
/// [`Reader::read_kind`](crate::Reader::read_kind).
///
/// `separator` and `item_factory` only matter for the list kind.
#[derive(Debug, Clone)]
pub struct AutoOptions<F = ValueItem> {
    on_missing: OnMissing,
    list: ListOptions<F>,
}

impl Default for AutoOptions {
    fn default() -> Self {
        Self {
            on_missing: OnMissing::Ignore,
            list: ListOptions::default().item_factory(string_value as ValueItem),
        }
    }
}

impl AutoOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F> AutoOptions<F> {
    pub fn on_missing(mut self, on_missing: OnMissing) -> Self {
        self.on_missing = on_missing;
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.list = self.list.separator(separator);
        self
    }

    /// Replace the per-item coercion used for list defaults.
    ///
    /// ```
    /// use easy_env::{AutoOptions, Kind};
    ///
    /// let options = AutoOptions::new().item_factory(|s| Kind::Integer.coerce(s));
    /// # let _ = options;
    /// ```
    pub fn item_factory<G>(self, item_factory: G) -> AutoOptions<G>
    where
        G: Fn(&str) -> Result<Value, CoerceError>,
    {
        AutoOptions {
            on_missing: self.on_missing,
            list: self.list.item_factory(item_factory),
        }
    }

    pub fn missing(&self) -> OnMissing {
        self.on_missing
    }

    pub fn list(&self) -> &ListOptions<F> {
        &self.list
    }
}
