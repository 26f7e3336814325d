use crate::config::BootstrapConfig;
use crate::display::{print_info, print_success};
use crate::error::EnvupError;
use crate::runner::{CommandLine, CommandRunner};

pub fn env_list_command() -> CommandLine {
    CommandLine::new("conda").args(["env", "list"])
}

pub fn create_command(config: &BootstrapConfig) -> CommandLine {
    CommandLine::new("conda")
        .args(["create", "--yes", "--name"])
        .arg(&config.env_name)
        .arg(format!("python={}", config.python))
}

pub fn update_command(config: &BootstrapConfig) -> CommandLine {
    CommandLine::new("conda")
        .args(["env", "update", "--name"])
        .arg(&config.env_name)
        .arg("--file")
        .arg(config.deps_file().to_string_lossy())
}

/// Create the named environment, with an `conda env list` before and after so
/// the CI log shows what the runner started with and what changed.
pub fn create(config: &BootstrapConfig, runner: &mut dyn CommandRunner) -> Result<(), EnvupError> {
    print_info(&format!(
        "Creating environment {} with Python {}",
        config.env_name, config.python
    ));
    runner.run(&env_list_command())?;
    runner.run(&create_command(config))?;
    runner.run(&env_list_command())?;
    Ok(())
}

/// Update the environment from its dependency file. The file is resolved by
/// name from the config; a missing file fails here rather than as an opaque
/// conda error.
pub fn sync(config: &BootstrapConfig, runner: &mut dyn CommandRunner) -> Result<(), EnvupError> {
    let deps_file = config.deps_file();
    if !deps_file.is_file() {
        return Err(EnvupError::DepsFileNotFound(
            deps_file.to_string_lossy().into_owned(),
        ));
    }

    print_info(&format!("Syncing dependencies from {}", deps_file.display()));
    runner.run(&update_command(config))?;
    print_success(&format!("Environment {} is up to date", config.env_name));
    Ok(())
}
