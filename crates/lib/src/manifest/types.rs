//! Manifest types for actinputs.
//!
//! The manifest is the static declaration of every valid input: its name,
//! whether it is required, and the runtime type its raw value is coerced to.
//! It is built once (from generated code, an `action.yml`, or by hand) and
//! never changes afterwards.
//!
//! # Serialization
//!
//! ```json
//! {
//!   "DRY_RUN": { "required": true, "runtimeType": "boolean" },
//!   "RETRIES": { "required": false, "runtimeType": "number" }
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::InputError;

/// The primitive types an input can be coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeType {
  Boolean,
  Number,
  String,
}

impl RuntimeType {
  /// Every supported type, in the order they are listed to users.
  pub const ALL: [RuntimeType; 3] = [RuntimeType::Boolean, RuntimeType::Number, RuntimeType::String];

  pub fn as_str(self) -> &'static str {
    match self {
      RuntimeType::Boolean => "boolean",
      RuntimeType::Number => "number",
      RuntimeType::String => "string",
    }
  }

  /// Advice appended to coercion errors.
  pub fn hint(self) -> &'static str {
    match self {
      RuntimeType::Boolean => "Use true or false instead.",
      RuntimeType::Number => "Use only number value.",
      RuntimeType::String => "",
    }
  }
}

impl fmt::Display for RuntimeType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Returned when a type name is not one of the supported primitives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported type {0}, supported types are boolean, number, string")]
pub struct UnsupportedTypeError(pub String);

impl FromStr for RuntimeType {
  type Err = UnsupportedTypeError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    RuntimeType::ALL
      .into_iter()
      .find(|ty| ty.as_str() == s)
      .ok_or_else(|| UnsupportedTypeError(s.to_string()))
  }
}

/// Declared metadata for a single input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSpec {
  /// Whether an absent or empty value is an error.
  pub required: bool,
  /// Type the raw value is coerced to on read.
  pub runtime_type: RuntimeType,
}

impl InputSpec {
  pub fn new(required: bool, runtime_type: RuntimeType) -> Self {
    Self { required, runtime_type }
  }

  pub fn required(runtime_type: RuntimeType) -> Self {
    Self::new(true, runtime_type)
  }

  pub fn optional(runtime_type: RuntimeType) -> Self {
    Self::new(false, runtime_type)
  }
}

/// Immutable mapping from input name to its [`InputSpec`].
///
/// Names are matched case-sensitively. Any case transform happens once, when
/// the manifest is built.
///
/// Uses [`BTreeMap`] so iteration and serialization are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
  inputs: BTreeMap<String, InputSpec>,
}

impl Manifest {
  /// Look up the spec for `name`.
  ///
  /// Unknown names fail with [`InputError::UnknownInput`], which keeps them
  /// distinguishable from declared inputs that are merely unset.
  pub fn lookup(&self, name: &str) -> Result<&InputSpec, InputError> {
    self.inputs.get(name).ok_or_else(|| InputError::unknown(name))
  }

  pub fn contains(&self, name: &str) -> bool {
    self.inputs.contains_key(name)
  }

  /// Declared input names in sorted order.
  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.inputs.keys().map(String::as_str)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &InputSpec)> {
    self.inputs.iter().map(|(name, spec)| (name.as_str(), spec))
  }

  pub fn len(&self) -> usize {
    self.inputs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.inputs.is_empty()
  }
}

impl<N: Into<String>> FromIterator<(N, InputSpec)> for Manifest {
  fn from_iter<I: IntoIterator<Item = (N, InputSpec)>>(iter: I) -> Self {
    Self {
      inputs: iter.into_iter().map(|(name, spec)| (name.into(), spec)).collect(),
    }
  }
}
