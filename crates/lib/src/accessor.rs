//! Typed, validated access to action inputs.
//!
//! [`Inputs`] combines a [`Manifest`], an [`EnvStore`] and [`AccessorOptions`].
//! Every read goes back to the store: values are never cached, so writes
//! through the accessor and external changes to the environment are visible
//! on the next read.
//!
//! # Reads
//!
//! 1. Unknown names fail with [`InputError::UnknownInput`].
//! 2. The raw value is fetched under [`derive_key`] and trimmed. Absent values
//!    count as empty.
//! 3. Empty values fail with [`InputError::RequiredInputMissing`] if the input
//!    is required and `throw_on_missing_required` is set, and yield `None`
//!    otherwise.
//! 4. The value is coerced to the declared type. Failures produce
//!    [`InputError::IncorrectType`] if `throw_on_incorrect_type` is set, and
//!    `None` otherwise.
//!
//! # Writes
//!
//! Writes store the value's text form under the derived key without any type
//! checking. In read-only mode, or when the store refuses the key or value,
//! they are rejected by returning `false`.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, trace};

use crate::coerce::coerce;
use crate::consts::INPUT_ENV_PREFIX;
use crate::env::{EnvStore, ProcessEnv, derive_key};
use crate::error::InputError;
use crate::manifest::{InputSpec, Manifest, RuntimeType};
use crate::options::AccessorOptions;
use crate::value::InputValue;

/// Result of reading a single input.
pub type ReadResult<T> = Result<Option<T>, InputError>;

/// Name-indexed view over the inputs stored in an environment.
#[derive(Debug, Clone)]
pub struct Inputs<E = ProcessEnv> {
  manifest: Manifest,
  env: E,
  options: AccessorOptions,
}

impl Inputs<ProcessEnv> {
  /// Accessor over the process environment with default options.
  pub fn from_process(manifest: Manifest) -> Self {
    Self::new(manifest, ProcessEnv)
  }
}

impl<E: EnvStore> Inputs<E> {
  pub fn new(manifest: Manifest, env: E) -> Self {
    Self {
      manifest,
      env,
      options: AccessorOptions::default(),
    }
  }

  pub fn with_options(mut self, options: AccessorOptions) -> Self {
    self.options = options;
    self
  }

  pub fn manifest(&self) -> &Manifest {
    &self.manifest
  }

  pub fn env(&self) -> &E {
    &self.env
  }

  pub fn env_mut(&mut self) -> &mut E {
    &mut self.env
  }

  pub fn into_env(self) -> E {
    self.env
  }

  pub fn options(&self) -> AccessorOptions {
    self.options
  }

  /// Replace all options. Takes effect on the next access.
  pub fn set_options(&mut self, options: AccessorOptions) {
    self.options = options;
  }

  pub fn set_throw_on_missing_required(&mut self, enabled: bool) {
    self.options.throw_on_missing_required = enabled;
  }

  pub fn set_throw_on_incorrect_type(&mut self, enabled: bool) {
    self.options.throw_on_incorrect_type = enabled;
  }

  pub fn set_read_only_inputs(&mut self, enabled: bool) {
    self.options.read_only_inputs = enabled;
  }

  /// Read and coerce the input `name`.
  ///
  /// `Ok(None)` means no value was provided, or (with the matching option
  /// disabled) that the value was missing or of the wrong type.
  pub fn get(&self, name: &str) -> ReadResult<InputValue> {
    let spec = self.manifest.lookup(name)?;
    let key = derive_key(name);
    let raw = self.env.get(&key).unwrap_or_default();
    trace!(input = %name, key = %key, raw = %raw, "reading input");
    self.coerce_raw(name, spec, raw.trim())
  }

  fn coerce_raw(&self, name: &str, spec: &InputSpec, value: &str) -> ReadResult<InputValue> {
    if value.is_empty() {
      if spec.required && self.options.throw_on_missing_required {
        return Err(InputError::required_missing(name));
      }
      debug!(input = %name, "input not provided");
      return Ok(None);
    }

    match coerce(value, spec.runtime_type) {
      Some(coerced) => Ok(Some(coerced)),
      None if self.options.throw_on_incorrect_type => Err(InputError::IncorrectType {
        name: name.to_string(),
        expected: spec.runtime_type,
        value: value.to_string(),
      }),
      None => {
        debug!(input = %name, expected = %spec.runtime_type, "ignoring value of incorrect type");
        Ok(None)
      }
    }
  }

  /// Read a boolean input.
  pub fn get_bool(&self, name: &str) -> ReadResult<bool> {
    self.check_declared(name, RuntimeType::Boolean)?;
    Ok(self.get(name)?.and_then(|v| v.as_bool()))
  }

  /// Read a number input.
  pub fn get_number(&self, name: &str) -> ReadResult<f64> {
    self.check_declared(name, RuntimeType::Number)?;
    Ok(self.get(name)?.and_then(|v| v.as_f64()))
  }

  /// Read a string input.
  pub fn get_string(&self, name: &str) -> ReadResult<String> {
    self.check_declared(name, RuntimeType::String)?;
    Ok(self.get(name)?.and_then(InputValue::into_string))
  }

  fn check_declared(&self, name: &str, requested: RuntimeType) -> Result<(), InputError> {
    let declared = self.manifest.lookup(name)?.runtime_type;
    if declared != requested {
      return Err(InputError::DeclaredType {
        name: name.to_string(),
        declared,
        requested,
      });
    }
    Ok(())
  }

  /// Read every declared input, in manifest order.
  pub fn read_all(&self) -> BTreeMap<String, ReadResult<InputValue>> {
    self
      .manifest
      .names()
      .map(|name| (name.to_string(), self.get(name)))
      .collect()
  }

  /// Store `value` for the input `name`.
  ///
  /// Returns `false` without touching the store when inputs are read-only,
  /// or when the store cannot hold the key or value. The value is not
  /// checked against the declared type.
  pub fn set(&mut self, name: &str, value: impl Into<InputValue>) -> bool {
    if self.options.read_only_inputs {
      debug!(input = %name, "rejecting write to read-only inputs");
      return false;
    }

    let key = derive_key(name);
    let text = value.into().to_string();
    if !self.env.set(&key, text.trim()) {
      debug!(input = %name, key = %key, "store rejected input write");
      return false;
    }
    debug!(input = %name, key = %key, "wrote input");
    true
  }

  /// Names of the inputs currently present in the store.
  ///
  /// Keys are mapped back to the declared name whose derived key matches,
  /// falling back to the key without its `INPUT_` prefix for undeclared ones.
  /// Declared inputs that are not set are not listed.
  pub fn enumerate(&self) -> BTreeSet<String> {
    self
      .env
      .keys()
      .into_iter()
      .filter_map(|key| {
        let suffix = key.strip_prefix(INPUT_ENV_PREFIX)?;
        let declared = self.manifest.names().find(|name| derive_key(name) == key);
        Some(declared.unwrap_or(suffix).to_string())
      })
      .collect()
  }
}

/// Turn a missing value into [`InputError::RequiredInputMissing`].
pub fn require<T>(name: &str, value: Option<T>) -> Result<T, InputError> {
  value.ok_or_else(|| InputError::required_missing(name))
}
