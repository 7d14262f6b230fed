//! CLI mode
//!
//! This module contains the CLI mode startup logic.
//! It delegates to the actual CLI implementation.

use crate::cli::Commands;
use crate::config::StaticConfig;
use crate::interfaces::cli::{CliError, run_cli_command};

/// Run a one-shot CLI command
pub async fn run_cli(config: &StaticConfig, cmd: Commands) -> Result<(), CliError> {
    run_cli_command(config, cmd).await
}
