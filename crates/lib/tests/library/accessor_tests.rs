//! Accessor behavior against the process environment and in-memory stores.

use actinputs_lib::accessor::Inputs;
use actinputs_lib::error::InputError;
use actinputs_lib::manifest::{InputSpec, Manifest, RuntimeType};
use actinputs_lib::options::AccessorOptions;
use actinputs_lib::value::InputValue;
use serial_test::serial;

use super::common::{memory_inputs, readme_manifest};

fn single(name: &str, runtime_type: RuntimeType) -> Manifest {
  Manifest::from_iter([(name, InputSpec::optional(runtime_type))])
}

mod boolean_inputs {
  use super::*;

  #[test]
  fn accepted_values() {
    for (raw, expected) in [("true", true), ("1", true), ("false", false), ("0", false)] {
      let inputs = memory_inputs(single("FLAG", RuntimeType::Boolean), &[("INPUT_FLAG", raw)]);
      assert_eq!(inputs.get("FLAG"), Ok(Some(InputValue::Boolean(expected))), "raw value {raw:?}");
    }
  }

  #[test]
  fn other_values_fail() {
    let inputs = memory_inputs(single("FLAG", RuntimeType::Boolean), &[("INPUT_FLAG", "yes")]);
    let err = inputs.get("FLAG").unwrap_err();
    assert_eq!(
      err.to_string(),
      "input FLAG: expected boolean type, seen yes. Use true or false instead."
    );
  }
}

mod number_inputs {
  use super::*;

  #[test]
  fn parses_decimal_and_exponent() {
    let inputs = memory_inputs(
      Manifest::from_iter([
        ("A", InputSpec::optional(RuntimeType::Number)),
        ("B", InputSpec::optional(RuntimeType::Number)),
      ]),
      &[("INPUT_A", "3.5"), ("INPUT_B", "1e3")],
    );
    assert_eq!(inputs.get_number("A"), Ok(Some(3.5)));
    assert_eq!(inputs.get_number("B"), Ok(Some(1000.0)));
  }

  #[test]
  fn non_numeric_fails() {
    let inputs = memory_inputs(single("N", RuntimeType::Number), &[("INPUT_N", "abc")]);
    assert!(matches!(
      inputs.get("N"),
      Err(InputError::IncorrectType { expected: RuntimeType::Number, .. })
    ));
  }

  #[test]
  fn empty_is_not_zero() {
    let inputs = memory_inputs(single("N", RuntimeType::Number), &[("INPUT_N", "")]);
    assert_eq!(inputs.get("N"), Ok(None));

    let required = memory_inputs(
      Manifest::from_iter([("N", InputSpec::required(RuntimeType::Number))]),
      &[("INPUT_N", "")],
    );
    assert_eq!(required.get("N"), Err(InputError::required_missing("N")));
  }
}

mod string_inputs {
  use super::*;

  #[test]
  fn trimmed_value() {
    let inputs = memory_inputs(single("S", RuntimeType::String), &[("INPUT_S", "  keep inner  space ")]);
    assert_eq!(inputs.get_string("S"), Ok(Some("keep inner  space".to_string())));
  }

  #[test]
  fn empty_is_none_regardless_of_type_option() {
    for options in [AccessorOptions::default(), AccessorOptions::lenient()] {
      let inputs = memory_inputs(single("S", RuntimeType::String), &[("INPUT_S", "")]).with_options(options);
      assert_eq!(inputs.get("S"), Ok(None));
    }
  }
}

#[test]
fn repeated_reads_are_identical() {
  let inputs = memory_inputs(readme_manifest(), &[("INPUT_RETRIES", "5"), ("INPUT_DRY_RUN", "maybe")]);
  assert_eq!(inputs.get("RETRIES"), inputs.get("RETRIES"));
  assert_eq!(inputs.get("DRY_RUN"), inputs.get("DRY_RUN"));
  assert_eq!(inputs.read_all(), inputs.read_all());
}

#[test]
fn write_then_read_round_trips() {
  let mut inputs = memory_inputs(readme_manifest(), &[]);
  assert!(inputs.set("DRY_RUN", false));
  assert!(inputs.set("RETRIES", 2.5));
  assert!(inputs.set("COMMIT_MESSAGE", "chore: sync"));
  assert_eq!(inputs.get_bool("DRY_RUN"), Ok(Some(false)));
  assert_eq!(inputs.get_number("RETRIES"), Ok(Some(2.5)));
  assert_eq!(inputs.get_string("COMMIT_MESSAGE"), Ok(Some("chore: sync".to_string())));
}

mod process_env {
  use super::*;

  #[test]
  #[serial]
  fn required_missing_scenario() {
    temp_env::with_var_unset("INPUT_DRY_RUN", || {
      let mut inputs = Inputs::from_process(readme_manifest());
      assert_eq!(inputs.get("DRY_RUN"), Err(InputError::required_missing("DRY_RUN")));

      inputs.set_throw_on_missing_required(false);
      assert_eq!(inputs.get("DRY_RUN"), Ok(None));
    });
  }

  #[test]
  #[serial]
  fn read_only_rejects_write() {
    temp_env::with_var("INPUT_X", Some("0"), || {
      let manifest = Manifest::from_iter([("X", InputSpec::optional(RuntimeType::Boolean))]);
      let mut inputs = Inputs::from_process(manifest).with_options(AccessorOptions::read_only());

      assert!(!inputs.set("X", "1"));
      assert_eq!(std::env::var("INPUT_X").as_deref(), Ok("0"));
      assert_eq!(inputs.get_bool("X"), Ok(Some(false)));
    });
  }

  #[test]
  #[serial]
  fn writes_reach_the_process_environment() {
    temp_env::with_var_unset("INPUT_RETRIES", || {
      let mut inputs = Inputs::from_process(readme_manifest());
      assert!(inputs.set("RETRIES", " 7 "));
      assert_eq!(std::env::var("INPUT_RETRIES").as_deref(), Ok("7"));
      assert_eq!(inputs.get_number("RETRIES"), Ok(Some(7.0)));
    });
  }

  #[test]
  #[serial]
  fn write_with_nul_value_is_rejected() {
    temp_env::with_var_unset("INPUT_COMMIT_MESSAGE", || {
      let mut inputs = Inputs::from_process(readme_manifest());
      assert!(!inputs.set("COMMIT_MESSAGE", "a\0b"));
      assert_eq!(std::env::var_os("INPUT_COMMIT_MESSAGE"), None);
      assert_eq!(inputs.get("COMMIT_MESSAGE"), Ok(None));
    });
  }

  #[test]
  #[serial]
  fn write_with_equals_in_name_is_rejected() {
    let mut inputs = Inputs::from_process(readme_manifest());
    assert!(!inputs.set("a=b", "x"));
    assert!(!inputs.enumerate().iter().any(|name| name.starts_with("A=")));
  }

  #[cfg(unix)]
  #[test]
  #[serial]
  fn non_utf8_value_is_an_incorrect_type() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    temp_env::with_var("INPUT_DRY_RUN", Some(OsStr::from_bytes(b"tru\xffe")), || {
      let inputs = Inputs::from_process(readme_manifest());
      assert!(matches!(
        inputs.get("DRY_RUN"),
        Err(InputError::IncorrectType { ref name, expected: RuntimeType::Boolean, .. }) if name == "DRY_RUN"
      ));
    });
  }

  #[test]
  #[serial]
  fn enumerate_reflects_environment_presence() {
    temp_env::with_vars(
      [
        ("INPUT_RETRIES", Some("1")),
        ("INPUT_DRY_RUN", None::<&str>),
        ("INPUT_COMMIT_MESSAGE", None::<&str>),
      ],
      || {
        let inputs = Inputs::from_process(readme_manifest());
        let names = inputs.enumerate();
        assert!(names.contains("RETRIES"));
        assert!(!names.contains("DRY_RUN"));
        assert!(!names.contains("COMMIT_MESSAGE"));
      },
    );
  }
}
