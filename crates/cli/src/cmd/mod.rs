mod check;
mod generate;
mod get;
mod list;

use std::path::Path;

use anyhow::{Context, Result};

use actinputs_lib::manifest::action_yml::{ActionInputs, NameCase};

pub use check::cmd_check;
pub use generate::cmd_generate;
pub use get::cmd_get;
pub use list::cmd_list;

fn load_action_inputs(action_yml: &Path, case: NameCase) -> Result<ActionInputs> {
  ActionInputs::load(action_yml, case).with_context(|| format!("Failed to load inputs from {}", action_yml.display()))
}
