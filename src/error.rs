use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum EnvupError {
    Io(io::Error),
    SerdeJson(serde_json::Error),
    DepsFileNotFound(String),
    SpawnFailed { command: String, source: io::Error },
    CommandFailed { command: String, code: Option<i32> },
    VersionMismatch { requested: String, actual: String },
}

impl fmt::Display for EnvupError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EnvupError::Io(e) => write!(f, "IO error: {}", e),
            EnvupError::SerdeJson(e) => write!(f, "JSON serialization error: {}", e),
            EnvupError::DepsFileNotFound(path) => {
                write!(f, "Dependency file not found: {}", path)
            }
            EnvupError::SpawnFailed { command, source } => {
                write!(f, "Failed to execute '{}': {}", command, source)
            }
            EnvupError::CommandFailed { command, code } => match code {
                Some(code) => write!(f, "Command failed with exit code {}: {}", code, command),
                None => write!(f, "Command terminated by signal: {}", command),
            },
            EnvupError::VersionMismatch { requested, actual } => {
                write!(
                    f,
                    "Python version mismatch: requested {}, environment reports {}",
                    requested, actual
                )
            }
        }
    }
}

impl Error for EnvupError {}

impl From<io::Error> for EnvupError {
    fn from(error: io::Error) -> Self {
        EnvupError::Io(error)
    }
}

impl From<serde_json::Error> for EnvupError {
    fn from(error: serde_json::Error) -> Self {
        EnvupError::SerdeJson(error)
    }
}

impl EnvupError {
    /// Exit code for the whole process. A failing external tool propagates its
    /// own exit code; a version mismatch is always 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            EnvupError::CommandFailed { code, .. } => code.unwrap_or(1),
            EnvupError::SpawnFailed { .. } => 127,
            _ => 1,
        }
    }
}
