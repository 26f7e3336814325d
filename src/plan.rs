use crate::OutputFormat;
use crate::config::BootstrapConfig;
use crate::display::format_json_output;
use crate::error::EnvupError;
use crate::steps::{conda, patch, system, verify};
use serde::Serialize;

/// What `up` would do for a given config, without touching the host.
#[derive(Debug, Serialize)]
pub struct Plan {
    pub steps: Vec<PlanStep>,
}

#[derive(Debug, Serialize)]
pub struct PlanStep {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<String>,
    pub commands: Vec<String>,
}

impl PlanStep {
    fn new(name: &str, commands: Vec<String>) -> Self {
        PlanStep {
            name: name.to_string(),
            skipped: None,
            commands,
        }
    }

    fn skipped(name: &str, reason: String) -> Self {
        PlanStep {
            name: name.to_string(),
            skipped: Some(reason),
            commands: Vec::new(),
        }
    }
}

pub fn build(config: &BootstrapConfig) -> Plan {
    let mut steps = Vec::new();

    steps.push(match system::install_command(config) {
        Some(cmd) => PlanStep::new("system packages", vec![cmd.to_string()]),
        None => PlanStep::skipped("system packages", format!("OS is {}", config.os)),
    });

    steps.push(PlanStep::new(
        "create environment",
        vec![
            conda::env_list_command().to_string(),
            conda::create_command(config).to_string(),
            conda::env_list_command().to_string(),
        ],
    ));

    steps.push(PlanStep::new(
        "sync dependencies",
        vec![conda::update_command(config).to_string()],
    ));

    steps.push(match patch::patch_command(config) {
        Some(cmd) => PlanStep::new("patch sip", vec![cmd.to_string()]),
        None => PlanStep::skipped(
            "patch sip",
            format!("environment {} does not need it", config.env_name),
        ),
    });

    steps.push(PlanStep::new(
        "verify interpreter",
        vec![verify::version_command(config).to_string()],
    ));

    Plan { steps }
}

pub fn print(plan: &Plan, format: &OutputFormat) -> Result<(), EnvupError> {
    match format {
        OutputFormat::Json => {
            println!("{}", format_json_output(plan)?);
        }
        OutputFormat::Table => {
            for step in &plan.steps {
                match &step.skipped {
                    Some(reason) => println!("- {} (skipped: {})", step.name, reason),
                    None => {
                        println!("- {}", step.name);
                        for command in &step.commands {
                            println!("    {}", command);
                        }
                    }
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config(os: &str, env_name: &str, python: &str) -> BootstrapConfig {
        BootstrapConfig {
            os: os.to_string(),
            with_sudo: false,
            env_name: env_name.to_string(),
            python: python.to_string(),
            deps_dir: PathBuf::from("ci"),
        }
    }

    #[test]
    fn test_plan_marks_skipped_steps() {
        let plan = build(&config("macos-latest", "legacy", "3.8"));

        assert_eq!(plan.steps.len(), 5);
        assert!(plan.steps[0].skipped.is_some());
        assert!(plan.steps[0].commands.is_empty());
        assert!(plan.steps[3].skipped.is_some());
    }

    #[test]
    fn test_plan_commands_match_up_inputs() {
        let plan = build(&config("ubuntu-latest", "tests", "2.7"));

        assert!(plan.steps[0].skipped.is_none());
        assert_eq!(
            plan.steps[0].commands[0],
            "apt-get install -y gcc g++ curl libpq-dev postgresql-client"
        );
        assert_eq!(
            plan.steps[2].commands[0],
            "conda env update --name tests --file ci/tests_py2.yaml"
        );
        assert!(plan.steps[3].commands[0].contains("sip>=4.19.8"));
    }

    #[test]
    fn test_plan_serializes_to_json() {
        let plan = build(&config("ubuntu-latest", "tests", "3.8"));
        let json = serde_json::to_value(&plan).unwrap();

        let steps = json["steps"].as_array().unwrap();
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[1]["name"], "create environment");
        // Skipped marker is omitted for steps that run
        assert!(steps[0].get("skipped").is_none());
    }
}
