//! Passenger records and passenger ID allocation.
//!
//! Passenger IDs come from an [`IdAllocator`] owned by the ledger rather than
//! from process-wide state, so every ledger (and every test) gets its own
//! deterministic sequence.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What kind of passenger a record describes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PassengerKind {
    /// A passenger with no special accommodation.
    #[default]
    Standard,
    /// A passenger who needs an accommodation on board.
    SpecialNeeds {
        /// Free-text description of the accommodation.
        note: String,
    },
}

impl PassengerKind {
    /// Build a kind from an optional accommodation note.
    ///
    /// A missing or blank note yields [`PassengerKind::Standard`].
    #[must_use]
    pub fn from_note(note: Option<String>) -> Self {
        match note {
            Some(note) if !note.trim().is_empty() => Self::SpecialNeeds {
                note: note.trim().to_string(),
            },
            _ => Self::Standard,
        }
    }

    /// The accommodation note, if any.
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        match self {
            Self::Standard => None,
            Self::SpecialNeeds { note } => Some(note),
        }
    }

    fn is_standard(&self) -> bool {
        matches!(self, Self::Standard)
    }
}

/// A passenger holding (or requesting) a seat on the flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    /// Sequential identifier assigned when the record was created.
    pub id: u64,

    /// Display name.
    pub name: String,

    /// National identification number, 11 digits.
    pub national_id: String,

    /// Standard or special-needs.
    #[serde(default, skip_serializing_if = "PassengerKind::is_standard")]
    pub kind: PassengerKind,
}

impl Passenger {
    /// Create a passenger with the given ID.
    #[must_use]
    pub fn new(
        id: u64,
        name: impl Into<String>,
        national_id: impl Into<String>,
        kind: PassengerKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            national_id: national_id.into(),
            kind,
        }
    }

    /// Check whether this passenger needs an accommodation.
    #[must_use]
    pub fn has_special_needs(&self) -> bool {
        !self.kind.is_standard()
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (national ID: {})", self.name, self.national_id)?;
        if let Some(note) = self.kind.note() {
            write!(f, " - needs: {note}")?;
        }
        Ok(())
    }
}

/// The name and national ID of a passenger, as shown in listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassengerRow {
    /// Display name.
    pub name: String,
    /// National identification number.
    pub national_id: String,
}

impl From<&Passenger> for PassengerRow {
    fn from(passenger: &Passenger) -> Self {
        Self {
            name: passenger.name.clone(),
            national_id: passenger.national_id.clone(),
        }
    }
}

/// Source of passenger IDs.
///
/// An ID is only valid if some ID can follow it, so `u64::MAX` is never
/// handed out.
pub trait IdAllocator: fmt::Debug {
    /// Hand out the next unused ID, or `None` once the ID space is used up.
    fn next_id(&mut self) -> Option<u64>;

    /// Guarantee that every later ID is strictly greater than `id`.
    ///
    /// Returns `false`, changing nothing, if no ID follows `id`.
    fn advance_past(&mut self, id: u64) -> bool;
}

/// Monotonic counter starting at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    /// Create a counter whose first ID is 1.
    #[must_use]
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Peek at the ID the next call to [`IdAllocator::next_id`] returns.
    #[must_use]
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator for SequentialIds {
    fn next_id(&mut self) -> Option<u64> {
        let id = self.next;
        self.next = id.checked_add(1)?;
        Some(id)
    }

    fn advance_past(&mut self, id: u64) -> bool {
        let Some(following) = id.checked_add(1) else {
            return false;
        };
        self.next = self.next.max(following);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids_start_at_one() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.next_id(), Some(1));
        assert_eq!(ids.next_id(), Some(2));
        assert_eq!(ids.peek(), 3);
    }

    #[test]
    fn test_sequential_ids_are_isolated() {
        let mut a = SequentialIds::new();
        let mut b = SequentialIds::new();
        a.next_id();
        a.next_id();
        assert_eq!(b.next_id(), Some(1));
    }

    #[test]
    fn test_advance_past() {
        let mut ids = SequentialIds::new();
        assert!(ids.advance_past(41));
        assert_eq!(ids.next_id(), Some(42));

        // Never moves backwards
        assert!(ids.advance_past(5));
        assert_eq!(ids.next_id(), Some(43));
    }

    #[test]
    fn test_advance_past_last_id_is_refused() {
        let mut ids = SequentialIds::new();
        assert!(!ids.advance_past(u64::MAX));
        assert_eq!(ids.next_id(), Some(1));
    }

    #[test]
    fn test_id_space_runs_out_without_overflow() {
        let mut ids = SequentialIds::new();
        assert!(ids.advance_past(u64::MAX - 2));
        assert_eq!(ids.next_id(), Some(u64::MAX - 1));
        assert_eq!(ids.next_id(), None);
        assert_eq!(ids.next_id(), None);
    }

    #[test]
    fn test_kind_from_note() {
        assert_eq!(PassengerKind::from_note(None), PassengerKind::Standard);
        assert_eq!(
            PassengerKind::from_note(Some("   ".to_string())),
            PassengerKind::Standard
        );
        assert_eq!(
            PassengerKind::from_note(Some(" wheelchair ".to_string())),
            PassengerKind::SpecialNeeds {
                note: "wheelchair".to_string()
            }
        );
    }

    #[test]
    fn test_display() {
        let plain = Passenger::new(1, "Ana Silva", "12345678901", PassengerKind::Standard);
        assert_eq!(plain.to_string(), "Ana Silva (national ID: 12345678901)");

        let special = Passenger::new(
            2,
            "Caio Lima",
            "10987654321",
            PassengerKind::from_note(Some("wheelchair".to_string())),
        );
        assert!(special.has_special_needs());
        assert_eq!(
            special.to_string(),
            "Caio Lima (national ID: 10987654321) - needs: wheelchair"
        );
    }

    #[test]
    fn test_standard_kind_is_omitted_from_json() {
        let plain = Passenger::new(1, "Ana Silva", "12345678901", PassengerKind::Standard);
        let json = serde_json::to_string(&plain).unwrap();
        assert!(!json.contains("kind"));
    }

    #[test]
    fn test_missing_kind_deserializes_as_standard() {
        let json = r#"{"id": 7, "name": "Ana Silva", "national_id": "12345678901"}"#;
        let passenger: Passenger = serde_json::from_str(json).unwrap();
        assert_eq!(passenger.id, 7);
        assert_eq!(passenger.kind, PassengerKind::Standard);
    }

    #[test]
    fn test_special_needs_json_shape() {
        let json = r#"{"id": 2, "name": "Caio Lima", "national_id": "10987654321",
                       "kind": {"type": "special_needs", "note": "wheelchair"}}"#;
        let passenger: Passenger = serde_json::from_str(json).unwrap();
        assert_eq!(passenger.kind.note(), Some("wheelchair"));
    }

    #[test]
    fn test_row_from_passenger() {
        let p = Passenger::new(1, "Ana Silva", "12345678901", PassengerKind::Standard);
        let row = PassengerRow::from(&p);
        assert_eq!(row.name, "Ana Silva");
        assert_eq!(row.national_id, "12345678901");
    }
}
