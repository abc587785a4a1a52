//! Template content for generated declaration modules.

/// Generated Rust module.
/// Contains `{source}`, `{imports}`, `{manifest}`, `{fields}`, `{param}` and
/// `{loads}` placeholders for substitution.
pub const MODULE_TEMPLATE: &str = r#"// @generated by actinputs from {source}. Do not edit.

{imports}
/// Declared inputs and their runtime types.
pub fn manifest() -> Manifest {
{manifest}}

/// Typed view of the action inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionInputs {
{fields}}

impl ActionInputs {
  /// Read every input through `inputs`.
  pub fn load<E: EnvStore>({param}: &Inputs<E>) -> Result<Self, InputError> {
    Ok(Self {
{loads}    })
  }
}
"#;
