//! The reservation ledger for a single flight.
//!
//! A [`Ledger`] holds the confirmed passengers in booking order, refuses
//! bookings past its capacity or for a national ID that already holds a seat,
//! and writes the full passenger list to its [`PassengerStore`] after every
//! change.
//!
//! Persistence is best effort. A failed load starts an empty ledger and a
//! failed save keeps the in-memory change; both are logged and neither is
//! reported to the caller.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::passenger::{IdAllocator, Passenger, PassengerKind, PassengerRow, SequentialIds};
use crate::storage::{JsonFileStore, PassengerStore};

/// Result of a reservation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationOutcome {
    /// The passenger now holds a seat.
    Confirmed,
    /// Every seat is taken.
    CapacityExceeded,
    /// The national ID already holds a seat.
    DuplicateIdentifier,
    /// No passenger ID is left to give the passenger.
    IdsExhausted,
}

impl ReservationOutcome {
    /// Check whether the reservation went through.
    #[must_use]
    pub fn is_confirmed(self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

impl fmt::Display for ReservationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Confirmed => write!(f, "confirmed"),
            Self::CapacityExceeded => write!(f, "flight is full"),
            Self::DuplicateIdentifier => write!(f, "national ID already registered"),
            Self::IdsExhausted => write!(f, "no passenger IDs left"),
        }
    }
}

/// What the front end gets back from [`Ledger::book`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    /// How the attempt ended.
    pub outcome: ReservationOutcome,
    /// Seats left after the attempt.
    pub remaining_seats: usize,
    /// The booked passenger, when confirmed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passenger: Option<Passenger>,
}

impl Confirmation {
    /// Check whether the reservation went through.
    #[must_use]
    pub fn confirmed(&self) -> bool {
        self.outcome.is_confirmed()
    }
}

/// Capacity-bounded, duplicate-rejecting passenger registry for one flight.
#[derive(Debug)]
pub struct Ledger<S: PassengerStore = JsonFileStore> {
    capacity: usize,
    passengers: Vec<Passenger>,
    registered_ids: HashSet<String>,
    ids: Box<dyn IdAllocator>,
    highest_id: Option<u64>,
    store: S,
    unsaved: bool,
}

impl<S: PassengerStore> Ledger<S> {
    /// Open a ledger with `capacity` seats, restoring passengers from `store`.
    ///
    /// Never fails: missing data yields an empty ledger, unreadable data is
    /// logged and also yields an empty ledger.
    #[must_use]
    pub fn open(capacity: usize, store: S) -> Self {
        Self::open_with_ids(capacity, store, Box::new(SequentialIds::new()))
    }

    /// Like [`Ledger::open`], with a caller-supplied passenger ID allocator.
    #[must_use]
    pub fn open_with_ids(capacity: usize, store: S, ids: Box<dyn IdAllocator>) -> Self {
        let mut ledger = Self {
            capacity,
            passengers: Vec::new(),
            registered_ids: HashSet::new(),
            ids,
            highest_id: None,
            store,
            unsaved: false,
        };
        ledger.load();
        ledger
    }

    /// Try to give `passenger` a seat.
    ///
    /// The capacity check runs before the duplicate check. A passenger whose ID
    /// this ledger has already seen is given a fresh one. On confirmation the
    /// full passenger list is saved before returning.
    pub fn reserve(&mut self, passenger: Passenger) -> ReservationOutcome {
        if self.occupancy() >= self.capacity {
            debug!(
                "Rejected {}: all {} seats taken",
                passenger.national_id, self.capacity
            );
            return ReservationOutcome::CapacityExceeded;
        }
        if self.registered_ids.contains(&passenger.national_id) {
            debug!("Rejected {}: already registered", passenger.national_id);
            return ReservationOutcome::DuplicateIdentifier;
        }

        let Some(passenger) = self.admit_id(passenger) else {
            warn!("Rejected reservation: no passenger IDs left");
            return ReservationOutcome::IdsExhausted;
        };

        info!(
            "Reserved seat for passenger {} ({} seats left)",
            passenger.id,
            self.capacity - self.occupancy() - 1
        );
        self.registered_ids.insert(passenger.national_id.clone());
        self.passengers.push(passenger);
        self.save();
        ReservationOutcome::Confirmed
    }

    /// Build a passenger from front-end input and try to give it a seat.
    ///
    /// The passenger ID is drawn from this ledger's allocator.
    pub fn book(
        &mut self,
        name: impl Into<String>,
        national_id: impl Into<String>,
        kind: PassengerKind,
    ) -> Confirmation {
        let Some(id) = self.ids.next_id() else {
            warn!("Rejected reservation: no passenger IDs left");
            return Confirmation {
                outcome: ReservationOutcome::IdsExhausted,
                remaining_seats: self.remaining_seats(),
                passenger: None,
            };
        };
        let passenger = Passenger::new(id, name, national_id, kind);
        let booked = passenger.clone();
        let outcome = self.reserve(passenger);
        Confirmation {
            outcome,
            remaining_seats: self.remaining_seats(),
            passenger: outcome.is_confirmed().then_some(booked),
        }
    }

    /// Release the seat held by `national_id`.
    ///
    /// Returns `false`, changing nothing, if no passenger holds that ID.
    pub fn cancel(&mut self, national_id: &str) -> bool {
        let Some(index) = self
            .passengers
            .iter()
            .position(|p| p.national_id == national_id)
        else {
            debug!("Nothing to cancel for {national_id}");
            return false;
        };

        let removed = self.passengers.remove(index);
        self.registered_ids.remove(&removed.national_id);
        info!(
            "Cancelled reservation of passenger {} ({} seats left)",
            removed.id,
            self.remaining_seats()
        );
        self.save();
        true
    }

    /// Seats still available.
    #[must_use]
    pub fn remaining_seats(&self) -> usize {
        self.capacity.saturating_sub(self.occupancy())
    }

    /// Number of seats currently held.
    #[must_use]
    pub fn occupancy(&self) -> usize {
        self.passengers.len()
    }

    /// Total seats on the flight.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check whether every seat is taken.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.remaining_seats() == 0
    }

    /// Passengers in booking order.
    #[must_use]
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    /// Name and national ID of each passenger, in booking order.
    #[must_use]
    pub fn list_passengers(&self) -> Vec<PassengerRow> {
        self.passengers.iter().map(PassengerRow::from).collect()
    }

    /// Look up the passenger holding `national_id`.
    #[must_use]
    pub fn find(&self, national_id: &str) -> Option<&Passenger> {
        if !self.registered_ids.contains(national_id) {
            return None;
        }
        self.passengers.iter().find(|p| p.national_id == national_id)
    }

    /// Check whether the last save failed and changes exist only in memory.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// The backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    fn load(&mut self) {
        let restored = match self.store.load() {
            Ok(Some(passengers)) => passengers,
            Ok(None) => {
                debug!("No saved passengers at {}", self.store.location());
                return;
            }
            Err(e) => {
                error!(
                    "Failed to load passengers from {}: {e}; starting empty",
                    self.store.location()
                );
                return;
            }
        };

        let mut seen_ids = HashSet::new();
        for passenger in restored {
            if !self.ids.advance_past(passenger.id) {
                warn!(
                    "Dropping passenger {} from {}: no ID can follow it",
                    passenger.id,
                    self.store.location()
                );
                continue;
            }
            self.highest_id = self.highest_id.max(Some(passenger.id));
            if !seen_ids.insert(passenger.id) {
                warn!(
                    "Dropping passenger {} from {}: passenger ID already used",
                    passenger.id,
                    self.store.location()
                );
                continue;
            }
            if !self.registered_ids.insert(passenger.national_id.clone()) {
                warn!(
                    "Dropping passenger {} from {}: national ID already registered",
                    passenger.id,
                    self.store.location()
                );
                continue;
            }
            self.passengers.push(passenger);
        }

        if self.occupancy() > self.capacity {
            warn!(
                "{} passengers restored but capacity is {}",
                self.occupancy(),
                self.capacity
            );
        }
        info!(
            "Restored {} passengers from {}",
            self.occupancy(),
            self.store.location()
        );
    }

    /// Give `passenger` an ID above every ID this ledger has seen, keeping its
    /// own when it already qualifies.
    fn admit_id(&mut self, mut passenger: Passenger) -> Option<Passenger> {
        let fresh = self.highest_id.map_or(true, |highest| passenger.id > highest);
        if !(fresh && self.ids.advance_past(passenger.id)) {
            let id = self.ids.next_id()?;
            debug!("Passenger ID {} already issued; using {id}", passenger.id);
            passenger.id = id;
        }
        self.highest_id = Some(passenger.id);
        Some(passenger)
    }

    fn save(&mut self) {
        match self.store.save(&self.passengers) {
            Ok(()) => self.unsaved = false,
            Err(e) => {
                self.unsaved = true;
                error!(
                    "Failed to save passengers to {}: {e}",
                    self.store.location()
                );
            }
        }
    }
}
