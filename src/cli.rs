//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for ipgeo using clap's derive macros.

use clap::{Parser, Subcommand};

/// ipgeo - public IP and geolocation lookup gateway
#[derive(Parser)]
#[command(name = "ipgeo")]
#[command(version)]
#[command(about = "Report the server's public IP address and geolocation", long_about = None)]
pub struct Cli {
    /// Configuration file path (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Print the server's public IP address
    Ip,

    /// Print the geolocation of the server's public IP address
    Geo,

    /// Print everything the upstream provider reports for an IP address
    All {
        /// IP address to look up (default: this machine)
        #[arg(long)]
        ip: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}
