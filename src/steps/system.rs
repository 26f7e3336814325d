use crate::config::BootstrapConfig;
use crate::display::print_info;
use crate::error::EnvupError;
use crate::runner::{CommandLine, CommandRunner};

/// Build prerequisites for the Python stack: compilers for native extensions,
/// curl, and the PostgreSQL client pieces psycopg2 links against.
pub const SYSTEM_PACKAGES: &[&str] = &["gcc", "g++", "curl", "libpq-dev", "postgresql-client"];

/// The apt-get invocation for this run, or `None` on macOS runners.
pub fn install_command(config: &BootstrapConfig) -> Option<CommandLine> {
    if !config.needs_system_packages() {
        return None;
    }

    let cmd = if config.with_sudo {
        CommandLine::new("sudo").arg("apt-get")
    } else {
        CommandLine::new("apt-get")
    };
    Some(cmd.arg("install").arg("-y").args(SYSTEM_PACKAGES.iter().copied()))
}

pub fn run(config: &BootstrapConfig, runner: &mut dyn CommandRunner) -> Result<(), EnvupError> {
    match install_command(config) {
        Some(cmd) => {
            print_info("Installing system packages");
            runner.run(&cmd)
        }
        None => {
            print_info(&format!("Skipping system packages on {}", config.os));
            Ok(())
        }
    }
}
