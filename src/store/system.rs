use std::env;

use super::{EnvStore, validate_entry};
use crate::error::Result;
use crate::logging::warn;

/// Zero-sized type, delegates to `std::env`.
///
/// Writing mutates the real process environment. Do not call
/// [`EnvStore::assign`] while other threads may read or write it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnv;

impl EnvStore for SystemEnv {
    /// Non-UTF-8 values are converted lossily so that they still count as present.
    #[inline]
    fn lookup(&self, key: &str) -> Option<String> {
        if key.is_empty() || key.contains('=') || key.contains('\0') {
            return None;
        }
        env::var_os(key).map(|value| match value.into_string() {
            Ok(value) => value,
            Err(raw) => {
                warn!(key, "env var is not valid UTF-8, converting lossily");
                raw.to_string_lossy().into_owned()
            }
        })
    }

    fn assign(&self, key: &str, value: &str) -> Result<()> {
        validate_entry(key, value)?;
        // SAFETY: the entry was validated above. Callers own the
        // single-threaded requirement documented on the type.
        unsafe { env::set_var(key, value) };
        Ok(())
    }
}
