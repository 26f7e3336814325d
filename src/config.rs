use std::path::PathBuf;

/// OS identifier that skips system package installation.
pub const MACOS: &str = "macos-latest";

/// Environment name that triggers the sip patch step.
pub const PATCH_ENV_NAME: &str = "tests";

/// Python version that selects the `_py2` dependency file.
pub const PYTHON2: &str = "2.7";

/// Inputs for one bootstrap run, collected from the CI job's environment
/// variables (or the matching CLI flags).
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    pub os: String,
    pub with_sudo: bool,
    pub env_name: String,
    pub python: String,
    pub deps_dir: PathBuf,
}

impl BootstrapConfig {
    /// System packages are installed everywhere except macOS runners, which
    /// ship what we need.
    pub fn needs_system_packages(&self) -> bool {
        self.os != MACOS
    }

    /// The sip patch applies only to the literal "tests" environment.
    pub fn wants_patch(&self) -> bool {
        self.env_name == PATCH_ENV_NAME
    }

    /// Dependency file for this environment: `<ENV_NAME>.yaml`, or
    /// `<ENV_NAME>_py2.yaml` when Python 2.7 is requested.
    pub fn deps_file(&self) -> PathBuf {
        let file = if self.python == PYTHON2 {
            format!("{}_py2.yaml", self.env_name)
        } else {
            format!("{}.yaml", self.env_name)
        };
        self.deps_dir.join(file)
    }
}
