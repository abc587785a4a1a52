//! Accessor behavior switches.

use serde::{Deserialize, Serialize};

/// Options consulted by the accessor on every read and write.
///
/// Field names serialize in camelCase so the struct can be loaded from the
/// same JSON/YAML a host already uses for its own configuration. Missing
/// fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessorOptions {
  /// Fail reads of required inputs that are absent or empty. When `false`
  /// such reads yield `None`.
  pub throw_on_missing_required: bool,
  /// Fail reads whose raw value cannot be coerced to the declared type.
  /// When `false` such reads yield `None`.
  pub throw_on_incorrect_type: bool,
  /// Reject every write.
  pub read_only_inputs: bool,
}

impl Default for AccessorOptions {
  fn default() -> Self {
    Self {
      throw_on_missing_required: true,
      throw_on_incorrect_type: true,
      read_only_inputs: false,
    }
  }
}

impl AccessorOptions {
  pub fn lenient() -> Self {
    Self {
      throw_on_missing_required: false,
      throw_on_incorrect_type: false,
      ..Self::default()
    }
  }

  pub fn read_only() -> Self {
    Self {
      read_only_inputs: true,
      ..Self::default()
    }
  }
}
