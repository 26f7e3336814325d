use crate::config::BootstrapConfig;
use crate::display::print_info;
use crate::error::EnvupError;
use crate::runner::{CommandLine, CommandRunner};

/// sip releases before 4.19.8 break PyQt imports inside the tests
/// environment, so that environment gets a forced reinstall above the bound.
pub const SIP_REQUIREMENT: &str = "sip>=4.19.8";

pub fn patch_command(config: &BootstrapConfig) -> Option<CommandLine> {
    if !config.wants_patch() {
        return None;
    }

    Some(
        CommandLine::new("conda")
            .args(["install", "--yes", "--force-reinstall", "--name"])
            .arg(&config.env_name)
            .arg(SIP_REQUIREMENT),
    )
}

pub fn run(config: &BootstrapConfig, runner: &mut dyn CommandRunner) -> Result<(), EnvupError> {
    match patch_command(config) {
        Some(cmd) => {
            print_info(&format!("Patching {} in {}", SIP_REQUIREMENT, config.env_name));
            runner.run(&cmd)
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config(env_name: &str) -> BootstrapConfig {
        BootstrapConfig {
            os: "ubuntu-latest".to_string(),
            with_sudo: false,
            env_name: env_name.to_string(),
            python: "3.8".to_string(),
            deps_dir: PathBuf::from("."),
        }
    }

    #[test]
    fn test_patch_only_in_tests_env() {
        assert!(patch_command(&config("tests")).is_some());
        assert!(patch_command(&config("legacy")).is_none());
        assert!(patch_command(&config("")).is_none());
    }

    #[test]
    fn test_patch_command_forces_version_bound() {
        let cmd = patch_command(&config("tests")).unwrap();
        assert_eq!(
            cmd.to_string(),
            "conda install --yes --force-reinstall --name tests 'sip>=4.19.8'"
        );
    }
}
