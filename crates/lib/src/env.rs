//! Environment stores that carry raw input values.
//!
//! Inputs travel as plain strings under `INPUT_<NAME>` keys. [`EnvStore`] is
//! the seam between the accessor and wherever those strings live: the real
//! process environment ([`ProcessEnv`]) or an in-memory map ([`MemoryEnv`]).

use std::collections::BTreeMap;

use tracing::debug;

use crate::consts::INPUT_ENV_PREFIX;

/// Derive the environment key for an input name.
///
/// Spaces become underscores and the result is uppercased:
/// `"dry run"` maps to `INPUT_DRY_RUN`.
pub fn derive_key(name: &str) -> String {
  format!("{}{}", INPUT_ENV_PREFIX, name.replace(' ', "_").to_uppercase())
}

/// String key-value store backing the accessor.
///
/// The accessor does no locking of its own. Implementations shared across
/// threads must synchronize externally.
pub trait EnvStore {
  /// Raw value under `key`, `None` if unset.
  fn get(&self, key: &str) -> Option<String>;

  /// Store `value` under `key`, replacing any previous value.
  ///
  /// Returns `false` if the store cannot hold this key or value.
  fn set(&mut self, key: &str, value: &str) -> bool;

  /// Every key currently present.
  fn keys(&self) -> Vec<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvStore for ProcessEnv {
  fn get(&self, key: &str) -> Option<String> {
    let value = std::env::var_os(key)?;
    match value.into_string() {
      Ok(value) => Some(value),
      Err(value) => {
        debug!(key = %key, "environment value is not valid UTF-8");
        Some(value.to_string_lossy().into_owned())
      }
    }
  }

  fn set(&mut self, key: &str, value: &str) -> bool {
    if !is_valid_process_key(key) || value.contains('\0') {
      debug!(key = %key, "refusing to write invalid environment variable");
      return false;
    }
    // SAFETY: the accessor is used from a single thread; concurrent hosts
    // must serialize environment access themselves.
    unsafe { std::env::set_var(key, value) };
    true
  }

  fn keys(&self) -> Vec<String> {
    std::env::vars_os()
      .filter_map(|(key, _)| key.into_string().ok())
      .collect()
  }
}

/// Keys `set_var` accepts: non-empty, without `=` or NUL.
fn is_valid_process_key(key: &str) -> bool {
  !key.is_empty() && !key.contains(['=', '\0'])
}

/// In-memory store, useful for embedding and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryEnv {
  vars: BTreeMap<String, String>,
}

impl MemoryEnv {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn remove(&mut self, key: &str) -> Option<String> {
    self.vars.remove(key)
  }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryEnv {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    Self {
      vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
    }
  }
}

impl EnvStore for MemoryEnv {
  fn get(&self, key: &str) -> Option<String> {
    self.vars.get(key).cloned()
  }

  fn set(&mut self, key: &str, value: &str) -> bool {
    self.vars.insert(key.to_string(), value.to_string());
    true
  }

  fn keys(&self) -> Vec<String> {
    self.vars.keys().cloned().collect()
  }
}
