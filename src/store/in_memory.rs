use std::cell::RefCell;
use std::collections::HashMap;

use super::{EnvStore, validate_entry};
use crate::error::Result;

/// Won't touch the global process environment.
///
/// Uses `RefCell` for interior mutability, so all methods take `&self`.
/// [`EnvStore::assign`] validates entries like [`SystemEnv`](super::SystemEnv)
/// does. Collecting from pairs stores them verbatim, so fixtures can hold
/// entries a process environment could not.
#[derive(Debug, Default)]
pub struct InMemoryEnv {
    vars: RefCell<HashMap<String, String>>,
}

impl InMemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remove(&self, key: &str) {
        self.vars.borrow_mut().remove(key);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.borrow().contains_key(key)
    }

    pub fn clear(&self) {
        self.vars.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.vars.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.borrow().is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for InMemoryEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: RefCell::new(
                iter.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl EnvStore for InMemoryEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        self.vars.borrow().get(key).cloned()
    }

    fn assign(&self, key: &str, value: &str) -> Result<()> {
        validate_entry(key, value)?;
        self.vars.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
