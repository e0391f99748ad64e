//! Command-line interface for seatbook.
//!
//! This module provides the CLI structure for the `seatbook` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::logging::Verbosity;

pub use commands::{CancelCommand, ConfigCommand, ListCommand, ReserveCommand, StatusCommand};

/// seatbook - Seat reservations for a single flight
///
/// Registers passengers by name and national ID, refuses bookings once the
/// flight is full or the ID already holds a seat, and keeps the passenger
/// list on disk between runs.
#[derive(Debug, Parser)]
#[command(name = "seatbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for info, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Reserve a seat for a passenger
    Reserve(ReserveCommand),

    /// Cancel a passenger's reservation
    Cancel(CancelCommand),

    /// List passengers in booking order
    List(ListCommand),

    /// Show flight details and seat availability
    Status(StatusCommand),

    /// View or check configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn status() -> Command {
        Command::Status(StatusCommand { json: false })
    }

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "seatbook");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_flags() {
        let mut cli = Cli {
            config: None,
            verbose: 0,
            quiet: false,
            command: status(),
        };
        assert_eq!(cli.verbosity(), Verbosity::Normal);

        cli.verbose = 1;
        assert_eq!(cli.verbosity(), Verbosity::Verbose);

        cli.verbose = 3;
        assert_eq!(cli.verbosity(), Verbosity::Trace);

        cli.quiet = true;
        assert_eq!(cli.verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_parse_reserve() {
        let cli = Cli::try_parse_from(["seatbook", "reserve", "Ana Silva", "12345678901"]).unwrap();
        match cli.command {
            Command::Reserve(cmd) => {
                assert_eq!(cmd.name, "Ana Silva");
                assert_eq!(cmd.national_id, "12345678901");
                assert!(cmd.needs.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_reserve_with_needs() {
        let cli = Cli::try_parse_from([
            "seatbook",
            "reserve",
            "Caio Lima",
            "55555555555",
            "--needs",
            "wheelchair",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Reserve(ReserveCommand { needs: Some(ref n), .. }) if n == "wheelchair"
        ));
    }

    #[test]
    fn test_parse_reserve_requires_national_id() {
        assert!(Cli::try_parse_from(["seatbook", "reserve", "Ana Silva"]).is_err());
    }

    #[test]
    fn test_parse_cancel() {
        let cli = Cli::try_parse_from(["seatbook", "cancel", "12345678901"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Cancel(CancelCommand { ref national_id }) if national_id == "12345678901"
        ));
    }

    #[test]
    fn test_parse_list_json() {
        let cli = Cli::try_parse_from(["seatbook", "list", "--json"]).unwrap();
        assert!(matches!(cli.command, Command::List(ListCommand { json: true })));
    }

    #[test]
    fn test_parse_config_validate() {
        let cli = Cli::try_parse_from(["seatbook", "config", "validate", "/tmp/c.toml"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Validate { file: Some(_) })
        ));
    }

    #[test]
    fn test_parse_with_config() {
        let args = ["seatbook", "-c", "/custom/config.toml", "status"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_with_verbose_and_quiet() {
        let cli = Cli::try_parse_from(["seatbook", "-vv", "status"]).unwrap();
        assert_eq!(cli.verbose, 2);

        let cli = Cli::try_parse_from(["seatbook", "status", "-q"]).unwrap();
        assert!(cli.quiet);
    }
}
