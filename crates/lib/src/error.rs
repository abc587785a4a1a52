//! Errors surfaced by input reads.

use thiserror::Error;

use crate::manifest::RuntimeType;

/// Errors that can occur when reading an input through the accessor.
///
/// Writes never fail: a rejected write in read-only mode is reported as a
/// `false` result instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
  /// The name was never declared in the manifest.
  ///
  /// Always surfaced, regardless of accessor options.
  #[error("unknown input: {name}")]
  UnknownInput { name: String },

  /// A required input has no value (or only an empty one).
  #[error("Input required and not supplied: {name}")]
  RequiredInputMissing { name: String },

  /// The raw value could not be coerced to the declared type.
  #[error("input {name}: expected {expected} type, seen {value}. {}", .expected.hint())]
  IncorrectType {
    name: String,
    expected: RuntimeType,
    value: String,
  },

  /// A typed getter was used on an input declared with another type.
  #[error("input {name} is declared as {declared}, not {requested}")]
  DeclaredType {
    name: String,
    declared: RuntimeType,
    requested: RuntimeType,
  },
}

impl InputError {
  pub fn unknown(name: &str) -> Self {
    InputError::UnknownInput { name: name.to_string() }
  }

  pub fn required_missing(name: &str) -> Self {
    InputError::RequiredInputMissing { name: name.to_string() }
  }

  /// Name of the input this error refers to.
  pub fn input_name(&self) -> &str {
    match self {
      InputError::UnknownInput { name }
      | InputError::RequiredInputMissing { name }
      | InputError::IncorrectType { name, .. }
      | InputError::DeclaredType { name, .. } => name,
    }
  }
}
