use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use actinputs_lib::AccessorOptions;
use actinputs_lib::consts::ACTION_YML_FILENAME;
use actinputs_lib::manifest::action_yml::NameCase;

mod cmd;
mod output;

use cmd::{cmd_check, cmd_generate, cmd_get, cmd_list};

/// actinputs - typed access to action inputs
#[derive(Parser)]
#[command(name = "actinputs")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Path to the action.yml declaring the inputs
  #[arg(long, global = true, default_value = ACTION_YML_FILENAME, env = "ACTINPUTS_ACTION_YML")]
  action_yml: PathBuf,

  /// Case transform applied to input names
  #[arg(long, global = true, value_enum, default_value_t = CaseArg::Preserve)]
  case: CaseArg,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Generate typed declarations from action.yml
  Generate {
    /// Write declarations to this file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Also write the runtime manifest as JSON
    #[arg(long)]
    manifest_out: Option<PathBuf>,

    /// Skip doc comments
    #[arg(long)]
    no_docs: bool,

    /// Declare required inputs as optional fields
    #[arg(long)]
    optional_required: bool,
  },

  /// Read and validate every declared input from the environment
  Check {
    #[command(flatten)]
    access: AccessArgs,

    /// Output as JSON
    #[arg(long)]
    json: bool,
  },

  /// Print the coerced value of a single input
  Get {
    /// Input name as declared
    name: String,

    #[command(flatten)]
    access: AccessArgs,
  },

  /// List the inputs present in the environment
  List,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CaseArg {
  Preserve,
  Lower,
  Upper,
}

impl From<CaseArg> for NameCase {
  fn from(case: CaseArg) -> Self {
    match case {
      CaseArg::Preserve => NameCase::Preserve,
      CaseArg::Lower => NameCase::Lower,
      CaseArg::Upper => NameCase::Upper,
    }
  }
}

#[derive(Debug, Clone, Copy, Args)]
struct AccessArgs {
  /// Report missing required inputs as unset instead of failing
  #[arg(long, env = "ACTINPUTS_NO_THROW_ON_MISSING_REQUIRED")]
  no_throw_on_missing_required: bool,

  /// Report values of the wrong type as unset instead of failing
  #[arg(long, env = "ACTINPUTS_NO_THROW_ON_INCORRECT_TYPE")]
  no_throw_on_incorrect_type: bool,
}

impl From<AccessArgs> for AccessorOptions {
  fn from(args: AccessArgs) -> Self {
    AccessorOptions {
      throw_on_missing_required: !args.no_throw_on_missing_required,
      throw_on_incorrect_type: !args.no_throw_on_incorrect_type,
      // The CLI only ever reads.
      read_only_inputs: true,
    }
  }
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let case = NameCase::from(cli.case);

  match cli.command {
    Commands::Generate {
      out,
      manifest_out,
      no_docs,
      optional_required,
    } => cmd_generate(
      &cli.action_yml,
      case,
      out.as_deref(),
      manifest_out.as_deref(),
      !no_docs,
      !optional_required,
    ),
    Commands::Check { access, json } => cmd_check(&cli.action_yml, case, access.into(), json),
    Commands::Get { name, access } => cmd_get(&cli.action_yml, case, &name, access.into()),
    Commands::List => cmd_list(&cli.action_yml, case),
  }
}
