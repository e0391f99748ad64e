//! `seatbook` - Seat reservations for a single flight
//!
//! The core is the [`Ledger`]: a capacity-bounded registry of passengers that
//! rejects duplicate national IDs and rewrites its backing file after every
//! reservation or cancellation.
//!
//! ```no_run
//! use seatbook::{JsonFileStore, Ledger, PassengerKind};
//!
//! let mut ledger = Ledger::open(150, JsonFileStore::new("passengers.json"));
//! let confirmation = ledger.book("Ana Silva", "12345678901", PassengerKind::Standard);
//! assert!(confirmation.confirmed());
//! assert_eq!(ledger.remaining_seats(), 149);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod flight;
pub mod ledger;
pub mod logging;
pub mod passenger;
pub mod storage;
pub mod validation;

pub use config::Config;
pub use error::{Error, Result};
pub use flight::Flight;
pub use ledger::{Confirmation, Ledger, ReservationOutcome};
pub use logging::init_logging;
pub use passenger::{IdAllocator, Passenger, PassengerKind, PassengerRow, SequentialIds};
pub use storage::{JsonFileStore, MemoryStore, PassengerStore};
