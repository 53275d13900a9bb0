//! The environment store seen through two primitives.
//!
//! # Examples
//!
//! ```
//! use easy_env::store::{EnvStore, InMemoryEnv};
//!
//! let env = InMemoryEnv::new();
//! env.assign("DATABASE_URL", "postgres://test")?; // &self, no `mut` needed
//!
//! assert_eq!(env.lookup("DATABASE_URL").as_deref(), Some("postgres://test"));
//! assert_eq!(env.lookup("MISSING"), None);
//! # Ok::<(), easy_env::Error>(())
//! ```

mod in_memory;
mod system;

pub use in_memory::InMemoryEnv;
pub use system::SystemEnv;

use crate::error::{Error, Result};

/// Key-value access to an environment.
///
/// # Thread Safety
///
/// Does **not** require `Send + Sync`. Add the bounds at your call site:
///
/// ```ignore
/// fn spawn_work<S: EnvStore + Send + Sync + 'static>(env: Arc<S>) { … }
/// ```
pub trait EnvStore {
    fn lookup(&self, key: &str) -> Option<String>;

    /// Fails only when the entry cannot be represented in a process
    /// environment (see [`validate_entry`]).
    fn assign(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: EnvStore + ?Sized> EnvStore for &S {
    #[inline]
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }

    #[inline]
    fn assign(&self, key: &str, value: &str) -> Result<()> {
        (**self).assign(key, value)
    }
}

/// Reject entries the operating system cannot hold.
///
/// Keys must be non-empty and free of `=` and NUL; values must be free of NUL.
pub fn validate_entry(key: &str, value: &str) -> Result<()> {
    let reason = if key.is_empty() {
        "key is empty"
    } else if key.contains('=') {
        "key contains '='"
    } else if key.contains('\0') {
        "key contains NUL"
    } else if value.contains('\0') {
        "value contains NUL"
    } else {
        return Ok(());
    };
    Err(Error::InvalidEntry {
        key: key.to_string(),
        reason,
    })
}
