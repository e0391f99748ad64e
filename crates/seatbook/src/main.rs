//! `seatbook` - CLI for the single-flight reservation ledger
//!
//! This binary is the front end: it validates input, calls the ledger, and
//! relays the outcome.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use seatbook::cli::{
    CancelCommand, Cli, Command, ConfigCommand, ListCommand, ReserveCommand, StatusCommand,
};
use seatbook::validation::{validate_name, validate_national_id};
use seatbook::{init_logging, Config, JsonFileStore, Ledger, PassengerKind};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        Command::Reserve(cmd) => handle_reserve(&config, cmd),
        Command::Cancel(cmd) => handle_cancel(&config, &cmd),
        Command::List(cmd) => handle_list(&config, &cmd),
        Command::Status(cmd) => handle_status(&config, &cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn open_ledger(config: &Config) -> Ledger {
    Ledger::open(config.ledger.capacity, JsonFileStore::new(config.ledger_path()))
}

fn warn_if_unsaved(ledger: &Ledger) {
    if ledger.has_unsaved_changes() {
        eprintln!(
            "warning: passenger list could not be saved to {}",
            ledger.store().path().display()
        );
    }
}

fn handle_reserve(config: &Config, cmd: ReserveCommand) -> anyhow::Result<ExitCode> {
    let name = validate_name(&cmd.name)?;
    let national_id = validate_national_id(&cmd.national_id)?;
    let kind = PassengerKind::from_note(cmd.needs);

    let mut ledger = open_ledger(config);
    let confirmation = ledger.book(name, national_id, kind);
    warn_if_unsaved(&ledger);

    match confirmation.passenger {
        Some(passenger) => {
            println!("Reservation confirmed for {}.", passenger.name);
            println!("Seats remaining: {}", confirmation.remaining_seats);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("Reservation refused: {}.", confirmation.outcome);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn handle_cancel(config: &Config, cmd: &CancelCommand) -> anyhow::Result<ExitCode> {
    let national_id = validate_national_id(&cmd.national_id)?;

    let mut ledger = open_ledger(config);
    let name = ledger.find(&national_id).map(|p| p.name.clone());
    if !ledger.cancel(&national_id) {
        println!("No reservation found for national ID {national_id}.");
        return Ok(ExitCode::FAILURE);
    }
    warn_if_unsaved(&ledger);

    println!(
        "Reservation cancelled for {}.",
        name.unwrap_or_else(|| national_id.clone())
    );
    println!("Seats remaining: {}", ledger.remaining_seats());
    Ok(ExitCode::SUCCESS)
}

fn handle_list(config: &Config, cmd: &ListCommand) -> anyhow::Result<ExitCode> {
    let ledger = open_ledger(config);
    let rows = ledger.list_passengers();

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(ExitCode::SUCCESS);
    }

    if rows.is_empty() {
        println!("No reservations.");
        return Ok(ExitCode::SUCCESS);
    }

    let width = rows
        .iter()
        .map(|row| row.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());
    println!("{:<width$}  National ID", "Name");
    println!("{:-<width$}  -----------", "");
    for row in rows {
        println!("{:<width$}  {}", row.name, row.national_id);
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_status(config: &Config, cmd: &StatusCommand) -> anyhow::Result<ExitCode> {
    let flight = config.flight();
    let ledger = open_ledger(config);

    if cmd.json {
        let status = serde_json::json!({
            "flight": flight,
            "capacity": ledger.capacity(),
            "occupancy": ledger.occupancy(),
            "remaining_seats": ledger.remaining_seats(),
            "ledger_path": ledger.store().path(),
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("{flight}");
        println!("-------------------------------------------");
        println!("Capacity:        {}", ledger.capacity());
        println!("Reserved:        {}", ledger.occupancy());
        println!("Seats remaining: {}", ledger.remaining_seats());
        println!("Ledger file:     {}", ledger.store().path().display());
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<ExitCode> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Flight]");
                println!("  Number:        {}", config.flight.number);
                println!("  Origin:        {}", config.flight.origin);
                println!("  Destination:   {}", config.flight.destination);
                println!("  Date:          {}", config.flight.date);
                println!();
                println!("[Ledger]");
                println!("  Capacity:      {}", config.ledger.capacity);
                println!("  Path:          {}", config.ledger_path().display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => {
                    println!("Configuration error: {e}");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
