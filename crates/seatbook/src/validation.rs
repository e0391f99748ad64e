//! Input validation for the reservation front end.
//!
//! The ledger trusts what it is given; these checks run before a passenger
//! record is built.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Message shown when a required field is blank.
pub const MISSING_FIELDS: &str = "please fill in all fields";

/// Message shown when the national ID is not 11 digits.
pub const INVALID_NATIONAL_ID: &str = "invalid national ID: enter 11 digits";

fn national_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]{11}$").expect("Invalid regex pattern"))
}

/// Validate a passenger name, returning it trimmed.
///
/// # Errors
///
/// Returns [`Error::Validation`] if the name is blank.
pub fn validate_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(Error::validation("name", MISSING_FIELDS));
    }
    Ok(name.to_string())
}

/// Validate a national ID, returning it trimmed.
///
/// # Errors
///
/// Returns [`Error::Validation`] if the ID is blank or not exactly 11 digits.
pub fn validate_national_id(raw: &str) -> Result<String> {
    let national_id = raw.trim();
    if national_id.is_empty() {
        return Err(Error::validation("national_id", MISSING_FIELDS));
    }
    if !national_id_pattern().is_match(national_id) {
        return Err(Error::validation("national_id", INVALID_NATIONAL_ID));
    }
    Ok(national_id.to_string())
}
