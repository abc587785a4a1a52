//! Loading input declarations from an `action.yml`.
//!
//! Only the `inputs` section is read. Every other key in the document is
//! ignored.
//!
//! ```yaml
//! inputs:
//!   DRY_RUN:
//!     description: "[boolean] Run everything except for the copying."
//!     required: true
//!   RETRIES:
//!     description: "The number of retries."
//!     default: 3
//! ```
//!
//! # Type inference
//!
//! 1. A leading `[type]` tag in the description (`[boolean] Run ...`).
//! 2. The YAML type of `default` (bool, number, or string).
//! 3. Otherwise `string`.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use serde_yaml::Value;
use tracing::{debug, warn};

use super::{InputSpec, Manifest, ManifestError, RuntimeType};

/// Case transform applied to input names when the manifest is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameCase {
  #[default]
  Preserve,
  Lower,
  Upper,
}

impl NameCase {
  pub fn apply(self, name: &str) -> String {
    match self {
      NameCase::Preserve => name.to_string(),
      NameCase::Lower => name.to_lowercase(),
      NameCase::Upper => name.to_uppercase(),
    }
  }
}

impl FromStr for NameCase {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "preserve" => Ok(NameCase::Preserve),
      "lower" => Ok(NameCase::Lower),
      "upper" => Ok(NameCase::Upper),
      other => Err(format!("unknown case {other}, expected preserve, lower or upper")),
    }
  }
}

/// A single input as declared in `action.yml`, after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredInput {
  /// Name after the case transform. This is the manifest key.
  pub name: String,
  /// Name exactly as written in the file.
  pub raw_name: String,
  /// Description with newlines folded into spaces, `None` if absent or blank.
  pub description: Option<String>,
  /// Default value rendered as text.
  pub default: Option<String>,
  pub required: bool,
  pub runtime_type: RuntimeType,
}

impl DeclaredInput {
  pub fn spec(&self) -> InputSpec {
    InputSpec::new(self.required, self.runtime_type)
  }
}

/// The inputs section of an `action.yml`, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionInputs {
  inputs: Vec<DeclaredInput>,
}

#[derive(Debug, Deserialize)]
struct RawActionYml {
  #[serde(default)]
  inputs: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
struct RawInput {
  #[serde(default)]
  description: Option<String>,
  #[serde(default)]
  default: Option<Value>,
  #[serde(default)]
  required: bool,
}

impl ActionInputs {
  /// Read and parse the `action.yml` at `path`.
  pub fn load(path: &Path, case: NameCase) -> Result<Self, ManifestError> {
    let content = fs::read_to_string(path).map_err(|source| ManifestError::Read {
      path: path.to_path_buf(),
      source,
    })?;
    debug!(path = ?path, "loaded action.yml");
    Self::from_yaml_str(&content, case)
  }

  /// Parse the inputs section of an `action.yml` document.
  pub fn from_yaml_str(content: &str, case: NameCase) -> Result<Self, ManifestError> {
    let raw: RawActionYml = serde_yaml::from_str(content).map_err(ManifestError::Yaml)?;
    let Some(Value::Mapping(entries)) = raw.inputs else {
      return Err(ManifestError::MissingInputs);
    };

    let mut seen = BTreeSet::new();
    let mut inputs = Vec::with_capacity(entries.len());

    for (key, value) in entries {
      let raw_name: String = serde_yaml::from_value(key).map_err(ManifestError::Yaml)?;
      let raw_input: RawInput = if value.is_null() {
        RawInput::default()
      } else {
        serde_yaml::from_value(value).map_err(ManifestError::Yaml)?
      };

      let input = declare(raw_name, raw_input, case)?;
      if !seen.insert(input.name.clone()) {
        return Err(ManifestError::DuplicateInput { name: input.name });
      }
      inputs.push(input);
    }

    debug!(count = inputs.len(), "parsed action inputs");
    Ok(Self { inputs })
  }

  pub fn iter(&self) -> impl Iterator<Item = &DeclaredInput> {
    self.inputs.iter()
  }

  pub fn get(&self, name: &str) -> Option<&DeclaredInput> {
    self.inputs.iter().find(|input| input.name == name)
  }

  pub fn len(&self) -> usize {
    self.inputs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.inputs.is_empty()
  }

  /// Build the runtime manifest from these declarations.
  pub fn to_manifest(&self) -> Manifest {
    self.inputs.iter().map(|input| (input.name.clone(), input.spec())).collect()
  }
}

fn declare(raw_name: String, raw: RawInput, case: NameCase) -> Result<DeclaredInput, ManifestError> {
  if raw_name.chars().any(char::is_whitespace) {
    return Err(ManifestError::WhitespaceInName { name: raw_name });
  }
  if raw_name.contains(['=', '\0']) {
    return Err(ManifestError::InvalidName { name: raw_name });
  }

  let description = raw
    .description
    .as_deref()
    .map(normalize_description)
    .filter(|d| !d.is_empty());
  if description.is_none() {
    warn!(input = %raw_name, "input is missing a description");
  }

  let default = raw.default.as_ref().filter(|v| !v.is_null());
  let type_name = match description.as_deref().and_then(type_tag) {
    Some(tag) => tag.to_string(),
    None => default.map_or("string", yaml_type_name).to_string(),
  };
  let runtime_type = type_name
    .parse::<RuntimeType>()
    .map_err(|_| ManifestError::UnsupportedType {
      name: raw_name.clone(),
      type_: type_name,
    })?;

  Ok(DeclaredInput {
    name: case.apply(&raw_name),
    description,
    default: default.map(render_scalar),
    required: raw.required,
    runtime_type,
    raw_name,
  })
}

/// Fold line breaks into spaces so the description reads as one line.
fn normalize_description(description: &str) -> String {
  description.replace("\r\n", " ").replace(['\r', '\n'], " ").trim().to_string()
}

/// Extract `type` from a description starting with `[type]`.
fn type_tag(description: &str) -> Option<&str> {
  let rest = description.strip_prefix('[')?;
  let end = rest.find(']')?;
  let tag = &rest[..end];
  (!tag.is_empty()).then_some(tag)
}

fn yaml_type_name(value: &Value) -> &'static str {
  match value {
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Sequence(_) => "array",
    Value::Mapping(_) | Value::Tagged(_) | Value::Null => "object",
  }
}

fn render_scalar(value: &Value) -> String {
  match value {
    Value::Bool(b) => b.to_string(),
    Value::Number(n) => n.to_string(),
    Value::String(s) => s.clone(),
    other => serde_yaml::to_string(other)
      .map(|s| s.trim().to_string())
      .unwrap_or_default(),
  }
}
