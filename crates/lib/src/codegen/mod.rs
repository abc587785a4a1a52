//! Declaration generation.
//!
//! Renders a Rust module from the inputs of an `action.yml`: a `manifest()`
//! function that rebuilds the runtime [`Manifest`](crate::manifest::Manifest),
//! and an `ActionInputs` struct with one typed field per input plus a `load`
//! constructor that reads them through an [`Inputs`](crate::accessor::Inputs)
//! accessor.
//!
//! Output is produced by plain string templating (see [`templates`]).

mod templates;

use std::collections::BTreeMap;

use tracing::debug;

use crate::consts::ACTION_YML_FILENAME;
use crate::manifest::action_yml::{ActionInputs, DeclaredInput};
use crate::manifest::{ManifestError, RuntimeType};

pub use templates::MODULE_TEMPLATE;

/// Controls the shape of the generated declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationOptions {
  /// Emit doc comments from descriptions and defaults.
  pub docs: bool,
  /// Required inputs get non-optional fields. When disabled every field is an
  /// `Option`, matching an accessor that yields `None` for missing inputs.
  pub throw_on_missing_required: bool,
  /// File name mentioned in the generated header.
  pub source: String,
}

impl Default for DeclarationOptions {
  fn default() -> Self {
    Self {
      docs: true,
      throw_on_missing_required: true,
      source: ACTION_YML_FILENAME.to_string(),
    }
  }
}

/// Render the declaration module for `inputs`.
pub fn render_declarations(inputs: &ActionInputs, options: &DeclarationOptions) -> Result<String, ManifestError> {
  let mut seen: BTreeMap<String, &str> = BTreeMap::new();
  let mut manifest_entries = String::new();
  let mut fields = String::new();
  let mut loads = String::new();
  let mut any_required = false;

  for input in inputs.iter() {
    let field = field_ident(&input.name);
    if let Some(first) = seen.insert(field.clone(), &input.name) {
      return Err(ManifestError::DuplicateField {
        field,
        first: first.to_string(),
        second: input.name.clone(),
      });
    }

    let name = format!("{:?}", input.name);
    let non_optional = input.required && options.throw_on_missing_required;
    any_required |= non_optional;

    manifest_entries.push_str(&format!(
      "    ({name}, InputSpec::new({}, RuntimeType::{:?})),\n",
      input.required, input.runtime_type
    ));

    if options.docs {
      fields.push_str(&doc_comment(input));
    }
    let ty = rust_type(input.runtime_type);
    if non_optional {
      fields.push_str(&format!("  pub {field}: {ty},\n"));
    } else {
      fields.push_str(&format!("  pub {field}: Option<{ty}>,\n"));
    }

    let read = format!("inputs.{}({name})?", getter(input.runtime_type));
    if non_optional {
      loads.push_str(&format!("      {field}: require({name}, {read})?,\n"));
    } else {
      loads.push_str(&format!("      {field}: {read},\n"));
    }
  }

  let manifest = if inputs.is_empty() {
    "  Manifest::default()\n".to_string()
  } else {
    format!("  Manifest::from_iter([\n{manifest_entries}  ])\n")
  };
  let param = if inputs.is_empty() { "_inputs" } else { "inputs" };
  let use_block = imports(inputs.is_empty(), any_required);

  debug!(count = inputs.len(), "rendered declarations");
  Ok(fill(
    MODULE_TEMPLATE,
    &[
      ("source", options.source.as_str()),
      ("imports", use_block.as_str()),
      ("manifest", manifest.as_str()),
      ("fields", fields.as_str()),
      ("param", param),
      ("loads", loads.as_str()),
    ],
  ))
}

fn imports(empty: bool, any_required: bool) -> String {
  let accessor = if any_required { "{Inputs, require}" } else { "Inputs" };
  let manifest = if empty {
    "Manifest"
  } else {
    "{InputSpec, Manifest, RuntimeType}"
  };
  format!(
    "use actinputs_lib::accessor::{accessor};\n\
     use actinputs_lib::env::EnvStore;\n\
     use actinputs_lib::error::InputError;\n\
     use actinputs_lib::manifest::{manifest};\n"
  )
}

fn doc_comment(input: &DeclaredInput) -> String {
  let mut doc = String::new();
  if let Some(description) = &input.description {
    doc.push_str(&format!("  /// {}\n", escape_brackets(description)));
  }
  if let Some(default) = &input.default {
    if !doc.is_empty() {
      doc.push_str("  ///\n");
    }
    // Doc comments may not contain a bare CR.
    let default = default.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines = default.lines();
    let first = lines.next().unwrap_or_default();
    doc.push_str(&format!("  /// Default: `{first}"));
    for line in lines {
      doc.push_str(&format!("\n  /// {line}"));
    }
    doc.push_str("`\n");
  }
  doc
}

/// Escape brackets so rustdoc does not read `[boolean]` as a link.
fn escape_brackets(text: &str) -> String {
  text.replace('[', "\\[").replace(']', "\\]")
}

fn rust_type(runtime_type: RuntimeType) -> &'static str {
  match runtime_type {
    RuntimeType::Boolean => "bool",
    RuntimeType::Number => "f64",
    RuntimeType::String => "String",
  }
}

fn getter(runtime_type: RuntimeType) -> &'static str {
  match runtime_type {
    RuntimeType::Boolean => "get_bool",
    RuntimeType::Number => "get_number",
    RuntimeType::String => "get_string",
  }
}

const KEYWORDS: &[&str] = &[
  "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do", "dyn", "else", "enum",
  "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "macro", "match", "mod", "move",
  "mut", "override", "priv", "pub", "ref", "return", "static", "struct", "trait", "true", "try", "type", "typeof",
  "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be used as raw identifiers.
const RESERVED: &[&str] = &["crate", "self", "super"];

/// Rust field identifier for an input name.
pub fn field_ident(name: &str) -> String {
  let mut ident: String = name
    .chars()
    .map(|c| {
      if c.is_ascii_alphanumeric() {
        c.to_ascii_lowercase()
      } else {
        '_'
      }
    })
    .collect();

  if !ident.chars().any(|c| c.is_ascii_alphanumeric()) {
    ident.insert_str(0, "input");
  } else if ident.starts_with(|c: char| c.is_ascii_digit()) {
    ident.insert(0, '_');
  }

  if RESERVED.contains(&ident.as_str()) {
    ident.push('_');
  } else if KEYWORDS.contains(&ident.as_str()) {
    ident.insert_str(0, "r#");
  }
  ident
}

/// Substitute `{key}` placeholders in a single pass, so substituted text is
/// never scanned for further placeholders.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
  let mut out = String::with_capacity(template.len());
  let mut rest = template;
  while let Some(start) = rest.find('{') {
    out.push_str(&rest[..start]);
    let after = &rest[start + 1..];
    let value = after
      .find('}')
      .and_then(|end| values.iter().find(|(key, _)| *key == &after[..end]).map(|(key, v)| (key.len(), *v)));
    match value {
      Some((len, v)) => {
        out.push_str(v);
        rest = &after[len + 1..];
      }
      None => {
        out.push('{');
        rest = after;
      }
    }
  }
  out.push_str(rest);
  out
}
