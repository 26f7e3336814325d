pub mod conda;
pub mod patch;
pub mod system;
pub mod verify;

use crate::config::BootstrapConfig;
use crate::error::EnvupError;
use crate::runner::CommandRunner;

/// The full bootstrap, in order. Fail-fast: the first error aborts the run
/// and nothing later executes.
pub fn run_all(config: &BootstrapConfig, runner: &mut dyn CommandRunner) -> Result<(), EnvupError> {
    system::run(config, runner)?;
    conda::create(config, runner)?;
    conda::sync(config, runner)?;
    patch::run(config, runner)?;
    verify::run(config, runner)?;
    Ok(())
}
