use crate::helper::{Environment, ENVIRONMENT_VAR};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ComponentReady CLI - Renders pre-styled Tailwind components to HTML
#[derive(Parser, Debug)]
#[command(name = "component-ready")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short = 'v', long = "verbose", global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render one component and print its markup to stdout
    Render(RenderArgs),
    /// List the registered component kinds
    List,
}

/// Arguments for the render command
#[derive(Parser, Debug, Clone)]
pub struct RenderArgs {
    /// Component kind (button, slider, footer, pricing, login, banner)
    #[arg(value_name = "KIND")]
    pub kind: String,

    /// Options as a JSON object
    #[arg(
        short = 'o',
        long = "options",
        value_name = "JSON",
        conflicts_with = "options_file",
        help = "Component options as a JSON object"
    )]
    pub options: Option<String>,

    /// Options file (JSON or YAML)
    #[arg(
        short = 'f',
        long = "options-file",
        value_name = "PATH",
        help = "Path to a JSON or YAML file holding the component options"
    )]
    pub options_file: Option<PathBuf>,

    /// Configuration file path
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        help = "Path to configuration file (YAML or JSON format)"
    )]
    pub config: Option<PathBuf>,

    /// Deployment environment deciding the error policy
    #[arg(
        short = 'e',
        long = "env",
        value_enum,
        ignore_case = true,
        env = ENVIRONMENT_VAR,
        default_value_t = Environment::Development,
        help = "Environment; production renders nothing instead of failing"
    )]
    pub env: Environment,
}

impl RenderArgs {
    /// Validate that the arguments are consistent
    pub fn validate(&self) -> Result<(), String> {
        if self.kind.trim().is_empty() {
            return Err("Component kind must not be empty".to_string());
        }
        Ok(())
    }
}
