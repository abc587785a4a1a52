/// Prefix shared by every environment key that carries an action input.
pub const INPUT_ENV_PREFIX: &str = "INPUT_";

/// Default manifest file looked up in the working directory.
pub const ACTION_YML_FILENAME: &str = "action.yml";
