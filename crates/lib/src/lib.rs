//! actinputs-lib: typed access to action inputs
//!
//! Action inputs reach a process as `INPUT_<NAME>` environment variables. This
//! crate turns them into typed values:
//! - `Manifest`: the declared inputs, their types and required-ness
//! - `Inputs`: the accessor that reads, coerces and writes input values
//! - `ActionInputs`: declarations loaded from an `action.yml`
//! - `codegen`: renders a typed Rust module for a set of declarations

pub mod accessor;
pub mod codegen;
pub mod coerce;
pub mod consts;
pub mod env;
pub mod error;
pub mod manifest;
pub mod options;
pub mod value;

pub use accessor::Inputs;
pub use error::InputError;
pub use manifest::{InputSpec, Manifest, ManifestError, RuntimeType};
pub use options::AccessorOptions;
pub use value::InputValue;
