use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process;

mod config;
mod display;
mod error;
mod logging;
mod plan;
mod runner;
mod steps;

use config::BootstrapConfig;
use error::EnvupError;
use runner::SystemRunner;

#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "envup")]
#[command(about = "envup - provisions a Conda-managed Python environment for a CI job")]
#[command(
    long_about = "envup installs system packages, creates a named Conda environment pinned to a requested Python version, syncs it from a dependency file, and fails the job if the resulting interpreter does not match.\n\nInputs come from the CI job's environment (OS, WITH_SUDO, ENV_NAME, PYTHON) or the matching flags.\nExample: OS=ubuntu-latest ENV_NAME=tests PYTHON=3.8 envup up"
)]
#[command(version = env!("ENVUP_VERSION"))]
struct Cli {
    #[arg(
        long,
        env = "OS",
        help = "CI platform identifier; macos-latest skips system packages (global option)"
    )]
    os: String,

    #[arg(
        long,
        env = "WITH_SUDO",
        default_value = "",
        hide_default_value = true,
        help = "Install system packages with sudo when set to any non-empty value (global option)"
    )]
    with_sudo: String,

    #[arg(
        long,
        env = "ENV_NAME",
        help = "Environment name; also the base name of its dependency file (global option)"
    )]
    env_name: String,

    #[arg(
        long,
        env = "PYTHON",
        help = "Requested interpreter version, e.g. 3.8 or 2.7 (global option)"
    )]
    python: String,

    #[arg(
        long,
        default_value = ".",
        help = "Directory holding the <ENV_NAME>.yaml dependency files (global option)"
    )]
    deps_dir: PathBuf,

    #[arg(
        short = 'o',
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format for plan: table or json (default: table) (global option)"
    )]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        about = "Run the full bootstrap: system packages, environment, dependencies, patch, version check"
    )]
    Up,

    #[command(about = "Show the steps and commands a bootstrap would run, without executing anything")]
    Plan,

    #[command(about = "Check that the environment's interpreter matches the requested Python version")]
    Verify,
}

fn main() {
    logging::init_logging();

    let cli = Cli::parse();
    let config = BootstrapConfig {
        os: cli.os,
        with_sudo: !cli.with_sudo.is_empty(),
        env_name: cli.env_name,
        python: cli.python,
        deps_dir: cli.deps_dir,
    };

    let result: Result<(), EnvupError> = match cli.command {
        Commands::Up => steps::run_all(&config, &mut SystemRunner),
        Commands::Plan => plan::print(&plan::build(&config), &cli.format),
        Commands::Verify => steps::verify::run(&config, &mut SystemRunner),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        process::exit(e.exit_code());
    }
}
