//! Implementation of the `actinputs generate` command.
//!
//! Renders typed declarations for the inputs of an action.yml and optionally
//! writes the runtime manifest alongside them as JSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use actinputs_lib::codegen::{DeclarationOptions, render_declarations};
use actinputs_lib::manifest::action_yml::NameCase;

use super::load_action_inputs;
use crate::output::print_success;

pub fn cmd_generate(
  action_yml: &Path,
  case: NameCase,
  out: Option<&Path>,
  manifest_out: Option<&Path>,
  docs: bool,
  throw_on_missing_required: bool,
) -> Result<()> {
  let inputs = load_action_inputs(action_yml, case)?;

  let options = DeclarationOptions {
    docs,
    throw_on_missing_required,
    source: action_yml
      .file_name()
      .map(|name| name.to_string_lossy().into_owned())
      .unwrap_or_else(|| action_yml.display().to_string()),
  };
  let declarations = render_declarations(&inputs, &options).context("Failed to render declarations")?;

  match out {
    Some(path) => {
      fs::write(path, &declarations).with_context(|| format!("Failed to write declarations: {}", path.display()))?;
      print_success(&format!(
        "Generated {} input(s) into {}",
        inputs.len(),
        path.display()
      ));
    }
    None => print!("{}", declarations),
  }

  if let Some(path) = manifest_out {
    let json = inputs.to_manifest().to_json().context("Failed to serialize manifest")?;
    fs::write(path, json).with_context(|| format!("Failed to write manifest: {}", path.display()))?;
    if out.is_some() {
      print_success(&format!("Wrote manifest to {}", path.display()));
    }
  }

  Ok(())
}
