//! Typed input values.

use std::fmt;

use serde::Serialize;

use crate::manifest::RuntimeType;

/// A coerced input value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InputValue {
  Boolean(bool),
  Number(f64),
  String(String),
}

impl InputValue {
  pub fn runtime_type(&self) -> RuntimeType {
    match self {
      InputValue::Boolean(_) => RuntimeType::Boolean,
      InputValue::Number(_) => RuntimeType::Number,
      InputValue::String(_) => RuntimeType::String,
    }
  }

  pub fn as_bool(&self) -> Option<bool> {
    match self {
      InputValue::Boolean(b) => Some(*b),
      _ => None,
    }
  }

  pub fn as_f64(&self) -> Option<f64> {
    match self {
      InputValue::Number(n) => Some(*n),
      _ => None,
    }
  }

  pub fn as_str(&self) -> Option<&str> {
    match self {
      InputValue::String(s) => Some(s),
      _ => None,
    }
  }

  pub fn into_string(self) -> Option<String> {
    match self {
      InputValue::String(s) => Some(s),
      _ => None,
    }
  }
}

/// The text written to the environment store for this value.
impl fmt::Display for InputValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      InputValue::Boolean(b) => write!(f, "{b}"),
      InputValue::Number(n) => write!(f, "{n}"),
      InputValue::String(s) => f.write_str(s),
    }
  }
}

impl From<bool> for InputValue {
  fn from(value: bool) -> Self {
    InputValue::Boolean(value)
  }
}

impl From<f64> for InputValue {
  fn from(value: f64) -> Self {
    InputValue::Number(value)
  }
}

impl From<i32> for InputValue {
  fn from(value: i32) -> Self {
    InputValue::Number(f64::from(value))
  }
}

impl From<u32> for InputValue {
  fn from(value: u32) -> Self {
    InputValue::Number(f64::from(value))
  }
}

/// Magnitudes above 2^53 are rounded to the nearest representable `f64`.
impl From<i64> for InputValue {
  fn from(value: i64) -> Self {
    InputValue::Number(value as f64)
  }
}

impl From<&str> for InputValue {
  fn from(value: &str) -> Self {
    InputValue::String(value.to_string())
  }
}

impl From<String> for InputValue {
  fn from(value: String) -> Self {
    InputValue::String(value)
  }
}
