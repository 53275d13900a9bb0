//! Convenient re-exports for common usage patterns.
//!
//! # Example
//!
//! ```
//! use easy_env::prelude::*;
//!
//! let reader = Reader::system();
//! let home = reader.read_str("EASY_ENV_UNSET_EXAMPLE", Some("/tmp".into()), OnMissing::Ignore)?;
//! assert_eq!(home.as_deref(), Some("/tmp"));
//! # Ok::<(), easy_env::Error>(())
//! ```

// Unified error handling
pub use crate::error::{Error, Result};

// Readers, writers and their options
pub use crate::options::{AutoOptions, ListOptions, OnMissing};
pub use crate::reader::Reader;
pub use crate::writer::Writer;

// Stores
pub use crate::store::{EnvStore, InMemoryEnv, SystemEnv};

// Autodetect
pub use crate::coerce::CoerceError;
pub use crate::kind::Kind;
pub use crate::value::Value;
