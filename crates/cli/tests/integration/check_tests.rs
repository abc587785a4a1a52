//! Tests for `actinputs check`, `get` and `list`.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn check_passes_with_valid_inputs() {
  let env = TestEnv::from_fixture("action.yml");

  env
    .cmd()
    .arg("check")
    .env("INPUT_DRY_RUN", "true")
    .env("INPUT_RETRIES", "5")
    .assert()
    .success()
    .stdout(predicate::str::contains("3 input(s) valid"));
}

#[test]
fn check_fails_on_missing_required() {
  let env = TestEnv::from_fixture("action.yml");

  env
    .cmd()
    .arg("check")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Input required and not supplied: DRY_RUN"));
}

#[test]
fn check_lenient_flags() {
  let env = TestEnv::from_fixture("action.yml");

  env
    .cmd()
    .args(["check", "--no-throw-on-missing-required", "--no-throw-on-incorrect-type"])
    .env("INPUT_RETRIES", "many")
    .assert()
    .success();
}

#[test]
fn check_lenient_from_environment() {
  let env = TestEnv::from_fixture("action.yml");

  env
    .cmd()
    .arg("check")
    .env("ACTINPUTS_NO_THROW_ON_MISSING_REQUIRED", "true")
    .assert()
    .success();
}

#[test]
fn check_json_output() {
  let env = TestEnv::from_fixture("action.yml");

  let output = env
    .cmd()
    .args(["check", "--json"])
    .env("INPUT_DRY_RUN", "0")
    .env("INPUT_RETRIES", "abc")
    .assert()
    .failure()
    .get_output()
    .stdout
    .clone();

  let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
  assert_eq!(report["ok"], false);
  assert_eq!(report["inputs"]["DRY_RUN"]["value"], false);
  assert!(report["inputs"]["COMMIT_MESSAGE"]["value"].is_null());
  assert!(
    report["inputs"]["RETRIES"]["error"]
      .as_str()
      .unwrap()
      .contains("expected number type, seen abc")
  );
}

#[test]
fn get_prints_coerced_value() {
  let env = TestEnv::from_fixture("action.yml");

  env
    .cmd()
    .args(["get", "RETRIES"])
    .env("INPUT_RETRIES", " 1e3 ")
    .assert()
    .success()
    .stdout("1000\n");
}

#[test]
fn get_unset_optional_prints_empty_line() {
  let env = TestEnv::from_fixture("action.yml");

  env
    .cmd()
    .args(["get", "COMMIT_MESSAGE"])
    .assert()
    .success()
    .stdout("\n");
}

#[test]
fn get_unknown_input_fails() {
  let env = TestEnv::from_fixture("action.yml");

  env
    .cmd()
    .args(["get", "NOPE"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("unknown input: NOPE"));
}

#[test]
fn list_shows_present_inputs() {
  let env = TestEnv::from_fixture("action.yml");

  env
    .cmd()
    .arg("list")
    .env("INPUT_RETRIES", "1")
    .env("INPUT_EXTRA", "x")
    .assert()
    .success()
    .stdout("EXTRA\nRETRIES\n");
}
