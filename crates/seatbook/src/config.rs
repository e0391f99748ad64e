//! Configuration management for seatbook.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use chrono::NaiveDate;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::flight::Flight;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "seatbook";

/// Default ledger file name.
const LEDGER_FILE_NAME: &str = "passengers.json";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "SEATBOOK_";

/// Seats on the reference aircraft.
pub const DEFAULT_CAPACITY: usize = 150;

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `SEATBOOK_`, sections split on `__`,
///    e.g. `SEATBOOK_LEDGER__CAPACITY=180`)
/// 2. TOML config file at `~/.config/seatbook/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Flight metadata.
    pub flight: FlightConfig,
    /// Ledger configuration.
    pub ledger: LedgerConfig,
}

/// Flight metadata configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// Flight number.
    pub number: u32,
    /// Departure city.
    pub origin: String,
    /// Arrival city.
    pub destination: String,
    /// Departure date (`YYYY-MM-DD`).
    pub date: NaiveDate,
}

/// Ledger-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Maximum number of simultaneous reservations.
    pub capacity: usize,
    /// Path to the ledger file.
    /// Defaults to `~/.local/share/seatbook/passengers.json`
    pub path: Option<PathBuf>,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            number: 1,
            origin: "São Paulo".to_string(),
            destination: "Rio de Janeiro".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 25).unwrap_or_default(),
        }
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            path: None, // Will be resolved to default at runtime
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing config file is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing, or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.ledger.capacity == 0 {
            return Err(Error::config_validation(
                "ledger.capacity must be greater than 0",
            ));
        }

        if self.flight.origin.trim().is_empty() {
            return Err(Error::config_validation("flight.origin must not be empty"));
        }

        if self.flight.destination.trim().is_empty() {
            return Err(Error::config_validation(
                "flight.destination must not be empty",
            ));
        }

        Ok(())
    }

    /// Get the ledger file path, resolving defaults if not set.
    #[must_use]
    pub fn ledger_path(&self) -> PathBuf {
        self.ledger
            .path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(LEDGER_FILE_NAME))
    }

    /// Build the flight metadata described by this configuration.
    #[must_use]
    pub fn flight(&self) -> Flight {
        Flight {
            number: self.flight.number,
            origin: self.flight.origin.clone(),
            destination: self.flight.destination.clone(),
            date: self.flight.date,
        }
    }
}
