//! On-disk format of the ledger file.
//!
//! The file is a single JSON document holding a format version and the
//! ordered passenger list:
//!
//! ```json
//! { "version": 1, "passengers": [ { "id": 1, "name": "...", "national_id": "..." } ] }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::passenger::Passenger;

/// The current file format version.
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct LedgerFileRef<'a> {
    version: u32,
    passengers: &'a [Passenger],
}

#[derive(Debug, Deserialize)]
struct LedgerFile {
    version: u32,
    #[serde(default)]
    passengers: Vec<Passenger>,
}

/// Encode the passenger list in the current format.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode(passengers: &[Passenger]) -> Result<Vec<u8>> {
    let file = LedgerFileRef {
        version: CURRENT_VERSION,
        passengers,
    };
    let mut bytes = serde_json::to_vec_pretty(&file)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Decode a ledger file read from `path`.
///
/// # Errors
///
/// Returns an error if the bytes are not a ledger document, or if the
/// document was written by a newer format version.
pub fn decode(bytes: &[u8], path: &Path) -> Result<Vec<Passenger>> {
    let file: LedgerFile = serde_json::from_slice(bytes)?;
    if file.version == 0 || file.version > CURRENT_VERSION {
        return Err(Error::UnsupportedVersion {
            path: path.to_path_buf(),
            found: file.version,
            supported: CURRENT_VERSION,
        });
    }
    Ok(file.passengers)
}
