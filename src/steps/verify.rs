use crate::config::BootstrapConfig;
use crate::display::print_success;
use crate::error::EnvupError;
use crate::runner::{CommandLine, CommandRunner};

// Works on both 2.7 and 3.x interpreters.
const VERSION_SNIPPET: &str = "import sys; print('%d.%d' % sys.version_info[:2])";

pub fn version_command(config: &BootstrapConfig) -> CommandLine {
    CommandLine::new("conda")
        .args(["run", "--name"])
        .arg(&config.env_name)
        .args(["python", "-c"])
        .arg(VERSION_SNIPPET)
}

/// Ask the environment's interpreter for its own major.minor version and
/// compare it byte-for-byte against the requested one.
pub fn run(config: &BootstrapConfig, runner: &mut dyn CommandRunner) -> Result<(), EnvupError> {
    let output = runner.run_capture(&version_command(config))?;
    let actual = output.trim();

    if actual != config.python {
        return Err(EnvupError::VersionMismatch {
            requested: config.python.clone(),
            actual: actual.to_string(),
        });
    }

    print_success(&format!(
        "Environment {} reports Python {}",
        config.env_name, actual
    ));
    Ok(())
}
