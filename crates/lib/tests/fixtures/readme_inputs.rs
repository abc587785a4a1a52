// @generated by actinputs from action.yml. Do not edit.

use actinputs_lib::accessor::{Inputs, require};
use actinputs_lib::env::EnvStore;
use actinputs_lib::error::InputError;
use actinputs_lib::manifest::{InputSpec, Manifest, RuntimeType};

/// Declared inputs and their runtime types.
pub fn manifest() -> Manifest {
  Manifest::from_iter([
    ("COMMIT_MESSAGE", InputSpec::new(false, RuntimeType::String)),
    ("DRY_RUN", InputSpec::new(true, RuntimeType::Boolean)),
    ("RETRIES", InputSpec::new(false, RuntimeType::Number)),
  ])
}

/// Typed view of the action inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionInputs {
  /// The commit message that will be used to commit the changed files. Check the README for all interpolation options.
  ///
  /// Default: `auto-update: replace files from source`
  pub commit_message: Option<String>,
  /// \[boolean\] Run everything except for the copying, removing and commiting functionality.
  pub dry_run: bool,
  /// \[number\] The number of retries.
  ///
  /// Default: `3`
  pub retries: Option<f64>,
}

impl ActionInputs {
  /// Read every input through `inputs`.
  pub fn load<E: EnvStore>(inputs: &Inputs<E>) -> Result<Self, InputError> {
    Ok(Self {
      commit_message: inputs.get_string("COMMIT_MESSAGE")?,
      dry_run: require("DRY_RUN", inputs.get_bool("DRY_RUN")?)?,
      retries: inputs.get_number("RETRIES")?,
    })
  }
}
