use std::path::Path;

use anyhow::Result;
use tracing::debug;

use actinputs_lib::manifest::action_yml::NameCase;
use actinputs_lib::{Inputs, Manifest};

use super::load_action_inputs;

/// Lists `INPUT_*` variables, using declared names when an action.yml exists.
pub fn cmd_list(action_yml: &Path, case: NameCase) -> Result<()> {
  let manifest = if action_yml.exists() {
    load_action_inputs(action_yml, case)?.to_manifest()
  } else {
    debug!(path = ?action_yml, "no action.yml, listing raw names");
    Manifest::default()
  };

  for name in Inputs::from_process(manifest).enumerate() {
    println!("{}", name);
  }
  Ok(())
}
