//! CLI command definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Reserve command arguments.
#[derive(Debug, Args)]
pub struct ReserveCommand {
    /// Passenger name
    pub name: String,

    /// Passenger national ID (11 digits)
    pub national_id: String,

    /// Accommodation the passenger needs on board
    #[arg(long, value_name = "NOTE")]
    pub needs: Option<String>,
}

/// Cancel command arguments.
#[derive(Debug, Args)]
pub struct CancelCommand {
    /// National ID whose reservation is released
    pub national_id: String,
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration management commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Print the default configuration file path
    Path,

    /// Validate a configuration file
    Validate {
        /// Path to config file (uses default if not specified)
        file: Option<PathBuf>,
    },
}
