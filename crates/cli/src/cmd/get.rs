use std::path::Path;

use anyhow::{Context, Result};

use actinputs_lib::manifest::action_yml::NameCase;
use actinputs_lib::{AccessorOptions, Inputs};

use super::load_action_inputs;

pub fn cmd_get(action_yml: &Path, case: NameCase, name: &str, options: AccessorOptions) -> Result<()> {
  let manifest = load_action_inputs(action_yml, case)?.to_manifest();
  let inputs = Inputs::from_process(manifest).with_options(options);

  let value = inputs.get(name).with_context(|| format!("Failed to read input {}", name))?;
  match value {
    Some(value) => println!("{}", value),
    None => println!(),
  }
  Ok(())
}
