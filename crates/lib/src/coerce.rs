//! Coercion of raw input strings into typed values.
//!
//! All functions expect the raw value already trimmed. `None` means the value
//! cannot be coerced to the requested type; deciding whether that is an error
//! is left to the accessor.

use crate::manifest::RuntimeType;
use crate::value::InputValue;

/// Coerce `raw` to `runtime_type`.
pub fn coerce(raw: &str, runtime_type: RuntimeType) -> Option<InputValue> {
  match runtime_type {
    RuntimeType::Boolean => parse_bool(raw).map(InputValue::Boolean),
    RuntimeType::Number => parse_number(raw).map(InputValue::Number),
    RuntimeType::String => Some(InputValue::String(raw.to_string())),
  }
}

/// `true`/`1` and `false`/`0`, nothing else.
pub fn parse_bool(raw: &str) -> Option<bool> {
  match raw {
    "true" | "1" => Some(true),
    "false" | "0" => Some(false),
    _ => None,
  }
}

/// Standard float parsing of the whole string.
///
/// Exponent forms and infinities are accepted. NaN and the empty string are
/// not numbers.
pub fn parse_number(raw: &str) -> Option<f64> {
  raw.parse::<f64>().ok().filter(|n| !n.is_nan())
}
