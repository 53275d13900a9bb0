//! Typed getters and setters for environment variables.
//!
//! Environment entries are plain strings. This library coerces them into
//! integers, floats, booleans, strings, base64 byte blobs and lists, and
//! serializes typed values back into strings.
//!
//! # Quick Start
//!
//! ```
//! use easy_env::prelude::*;
//!
//! let env = InMemoryEnv::new();
//! let writer = Writer::new(&env);
//! let reader = Reader::new(&env);
//!
//! writer.write_int("N", 7)?;
//! assert_eq!(reader.read_int("N", None, OnMissing::Ignore)?, Some(7));
//!
//! // Absent keys fall back to the default, untouched.
//! assert_eq!(reader.read_int("M", Some(2), OnMissing::Ignore)?, Some(2));
//!
//! // Or let the default pick the kind.
//! let options = AutoOptions::new();
//! assert_eq!(reader.auto_get("N", Some(Value::Int(0)), &options)?, Some(Value::Int(7)));
//! # Ok::<(), easy_env::Error>(())
//! ```
//!
//! Use [`Reader::system`] and [`Writer::system`] to work on the real
//! process environment.
//!
//! # Modules
//!
//! - [`store`] - The [`EnvStore`] trait with process and in-memory backends
//! - [`coerce`] - Text to typed value, one function per kind
//! - [`serialize`] - Typed value to text, one function per kind
//!
//! # Feature Flags
//!
//! - `logging` - Enable library-level tracing (consumers provide their own subscriber)

pub mod coerce;
mod kind;
mod logging;
mod options;
pub mod prelude;
mod reader;
pub mod serialize;
pub mod store;
mod value;
mod writer;

mod error;

// Re-export the unified error type
pub use error::{Error, Result};

pub use coerce::CoerceError;
pub use kind::Kind;
pub use options::{AutoOptions, ListOptions, OnMissing, StringItem, ValueItem};
pub use reader::Reader;
pub use store::{EnvStore, InMemoryEnv, SystemEnv};
pub use value::Value;
pub use writer::Writer;
