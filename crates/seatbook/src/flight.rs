//! Static flight metadata.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The flight passengers are booked on.
///
/// This is configuration, not ledger state: the ledger neither reads nor
/// persists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    /// Flight number.
    pub number: u32,
    /// Departure city.
    pub origin: String,
    /// Arrival city.
    pub destination: String,
    /// Departure date.
    pub date: NaiveDate,
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Flight {} | {} -> {} | {}",
            self.number,
            self.origin,
            self.destination,
            self.date.format("%Y-%m-%d")
        )
    }
}
