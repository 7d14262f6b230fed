//! CLI interface module
//!
//! One-shot lookups that share the gateway with the HTTP server.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::config::StaticConfig;
use crate::errors::GatewayError;
use crate::runtime::lifetime::startup::build_gateway;
use commands::{config_generate, print_all, print_geolocation, print_self_ip};

#[derive(Debug)]
pub enum CliError {
    LookupError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::LookupError(msg) => format!("Lookup error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::LookupError(msg) => {
                format!("{} {}", "Lookup error:".red().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<GatewayError> for CliError {
    fn from(err: GatewayError) -> Self {
        CliError::LookupError(err.to_string())
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(config: &StaticConfig, cmd: Commands) -> Result<(), CliError> {
    match cmd {
        Commands::Ip => print_self_ip(&build_gateway(config)).await,
        Commands::Geo => print_geolocation(&build_gateway(config)).await,
        Commands::All { ip } => print_all(&build_gateway(config), &ip.unwrap_or_default()).await,
        // Generate doesn't need the upstream
        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => config_generate(output_path, force),
        Commands::Serve => Err(CliError::CommandError(
            "serve is handled by server mode".to_string(),
        )),
    }
}
