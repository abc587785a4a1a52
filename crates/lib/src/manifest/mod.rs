//! Input manifest types and loading.
//!
//! A [`Manifest`] maps input names to their declared type and required-ness.
//! It can be built directly, deserialized from JSON, or derived from the
//! `inputs` section of an `action.yml` (see [`action_yml`]).

pub mod action_yml;
mod types;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use types::*;

/// Errors that can occur while loading or parsing a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
  /// Failed to read the manifest file.
  #[error("failed to read {}: {source}", .path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// Failed to parse `action.yml`.
  #[error("failed to parse action.yml: {0}")]
  Yaml(#[source] serde_yaml::Error),

  /// Failed to parse or render manifest JSON.
  #[error("failed to process manifest JSON: {0}")]
  Json(#[source] serde_json::Error),

  /// The document has no `inputs` mapping.
  #[error("action.yml seems to be invalid, please check its inputs property")]
  MissingInputs,

  /// Input names may not contain whitespace.
  #[error("Input with name {name} must not contain any space characters")]
  WhitespaceInName { name: String },

  /// Input names may not contain characters an environment key cannot hold.
  #[error("Input with name {name:?} must not contain '=' or NUL characters")]
  InvalidName { name: String },

  /// The declared or inferred type is not a supported primitive.
  #[error("Input {name} has unsupported type {type_}. Supported types are boolean, number, string")]
  UnsupportedType { name: String, type_: String },

  /// Two inputs map to the same name after the case transform.
  #[error("Input {name} is declared more than once")]
  DuplicateInput { name: String },

  /// Two inputs map to the same generated field identifier.
  #[error("Inputs {first} and {second} both map to field {field}")]
  DuplicateField {
    field: String,
    first: String,
    second: String,
  },
}

impl Manifest {
  /// Parse a manifest from its JSON form.
  pub fn from_json(json: &str) -> Result<Self, ManifestError> {
    serde_json::from_str(json).map_err(ManifestError::Json)
  }

  /// Render the manifest as pretty-printed JSON.
  pub fn to_json(&self) -> Result<String, ManifestError> {
    serde_json::to_string_pretty(self).map_err(ManifestError::Json)
  }
}
