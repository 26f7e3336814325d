use crate::display::shell_quote;
use crate::error::EnvupError;
use serde::Serialize;
use std::fmt;
use std::process::Command;

/// A fully resolved external command, built once and then either executed,
/// printed by `plan`, or inspected by tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        CommandLine {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", shell_quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

/// Seam between the bootstrap steps and the host. The production impl shells
/// out; tests substitute recording or scripted fakes.
pub trait CommandRunner {
    /// Run a command with inherited stdio, failing on a non-zero exit.
    fn run(&mut self, cmd: &CommandLine) -> Result<(), EnvupError>;

    /// Run a command capturing stdout, failing on a non-zero exit. Stderr is
    /// passed through so tool diagnostics stay visible.
    fn run_capture(&mut self, cmd: &CommandLine) -> Result<String, EnvupError>;
}

pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, cmd: &CommandLine) -> Result<(), EnvupError> {
        tracing::info!("+ {}", cmd);

        let status = Command::new(&cmd.program)
            .args(&cmd.args)
            .status()
            .map_err(|e| EnvupError::SpawnFailed {
                command: cmd.program.clone(),
                source: e,
            })?;

        if !status.success() {
            return Err(EnvupError::CommandFailed {
                command: cmd.to_string(),
                code: status.code(),
            });
        }
        Ok(())
    }

    fn run_capture(&mut self, cmd: &CommandLine) -> Result<String, EnvupError> {
        tracing::info!("+ {}", cmd);

        let output = Command::new(&cmd.program)
            .args(&cmd.args)
            .output()
            .map_err(|e| EnvupError::SpawnFailed {
                command: cmd.program.clone(),
                source: e,
            })?;

        if !output.stderr.is_empty() {
            eprint!("{}", String::from_utf8_lossy(&output.stderr));
        }

        if !output.status.success() {
            return Err(EnvupError::CommandFailed {
                command: cmd.to_string(),
                code: output.status.code(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_program_and_args() {
        let cmd = CommandLine::new("conda")
            .args(["env", "update", "--name", "tests"])
            .arg("--file")
            .arg("tests.yaml");
        assert_eq!(
            cmd.to_string(),
            "conda env update --name tests --file tests.yaml"
        );
    }

    #[test]
    fn test_display_quotes_shell_metacharacters() {
        let cmd = CommandLine::new("conda")
            .args(["install", "--yes"])
            .arg("sip>=4.19.8");
        assert_eq!(cmd.to_string(), "conda install --yes 'sip>=4.19.8'");
    }

    #[test]
    fn test_system_runner_reports_exit_code() {
        let mut runner = SystemRunner;
        let cmd = CommandLine::new("false");
        match runner.run(&cmd) {
            Err(EnvupError::CommandFailed { code, .. }) => assert_eq!(code, Some(1)),
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_system_runner_capture_collects_stdout() {
        let mut runner = SystemRunner;
        let cmd = CommandLine::new("echo").arg("3.8");
        let out = runner.run_capture(&cmd).unwrap();
        assert_eq!(out.trim(), "3.8");
    }

    #[test]
    fn test_system_runner_missing_program_is_spawn_failure() {
        let mut runner = SystemRunner;
        let cmd = CommandLine::new("definitely-not-a-real-binary-envup");
        match runner.run(&cmd) {
            Err(EnvupError::SpawnFailed { .. }) => {}
            other => panic!("expected SpawnFailed, got {:?}", other),
        }
    }
}
