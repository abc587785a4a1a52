//! Implementation of the `actinputs check` command.
//!
//! Reads every declared input from the process environment and reports the
//! coerced value or the error for each one.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Result, bail};
use serde::Serialize;

use actinputs_lib::manifest::action_yml::NameCase;
use actinputs_lib::{AccessorOptions, InputValue, Inputs};

use super::load_action_inputs;
use crate::output::{describe_value, print_error, print_info, print_json, print_stat, print_success};

#[derive(Serialize)]
struct CheckOutput {
  ok: bool,
  inputs: BTreeMap<String, InputReport>,
}

#[derive(Serialize)]
struct InputReport {
  value: Option<InputValue>,
  #[serde(skip_serializing_if = "Option::is_none")]
  error: Option<String>,
}

pub fn cmd_check(action_yml: &Path, case: NameCase, options: AccessorOptions, json: bool) -> Result<()> {
  let manifest = load_action_inputs(action_yml, case)?.to_manifest();
  let inputs = Inputs::from_process(manifest).with_options(options);

  let reports: BTreeMap<String, InputReport> = inputs
    .read_all()
    .into_iter()
    .map(|(name, result)| {
      let report = match result {
        Ok(value) => InputReport { value, error: None },
        Err(e) => InputReport {
          value: None,
          error: Some(e.to_string()),
        },
      };
      (name, report)
    })
    .collect();
  let failed = reports.values().filter(|r| r.error.is_some()).count();

  if json {
    print_json(&CheckOutput {
      ok: failed == 0,
      inputs: reports,
    })?;
  } else {
    for (name, report) in &reports {
      match (&report.value, &report.error) {
        (_, Some(error)) => print_error(error),
        (value, None) => print_stat(name, &describe_value(value.as_ref())),
      }
    }
    if failed == 0 {
      print_success(&format!("{} input(s) valid", reports.len()));
    } else {
      print_info(&format!("{} of {} input(s) failed", failed, reports.len()));
    }
  }

  if failed > 0 {
    bail!("{} input(s) failed validation", failed);
  }
  Ok(())
}
