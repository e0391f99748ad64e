//! Storage layer for seatbook.
//!
//! The ledger persists through the [`PassengerStore`] trait. [`JsonFileStore`]
//! keeps the whole passenger list in one JSON file and rewrites it on every
//! save; [`MemoryStore`] keeps it in memory.

pub mod schema;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::passenger::Passenger;

/// Backend that holds the persisted passenger list of one flight.
pub trait PassengerStore: std::fmt::Debug {
    /// Read the persisted passenger list.
    ///
    /// Returns `Ok(None)` when nothing has been persisted yet.
    ///
    /// # Errors
    ///
    /// Returns an error if persisted data exists but cannot be read or decoded.
    fn load(&self) -> Result<Option<Vec<Passenger>>>;

    /// Replace the persisted passenger list with `passengers`.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be written.
    fn save(&mut self, passengers: &[Passenger]) -> Result<()>;

    /// Human-readable location of the data, for logs and status output.
    fn location(&self) -> String;
}

/// Passenger list stored as a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    /// Path to the ledger file.
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the file at `path`.
    ///
    /// Nothing is touched on disk until the first load or save.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the path to the ledger file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl PassengerStore for JsonFileStore {
    fn load(&self) -> Result<Option<Vec<Passenger>>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No ledger file at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let passengers = schema::decode(&bytes, &self.path)?;
        debug!(
            "Read {} passengers from {}",
            passengers.len(),
            self.path.display()
        );
        Ok(Some(passengers))
    }

    fn save(&mut self, passengers: &[Passenger]) -> Result<()> {
        // Create parent directories if needed
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let bytes = schema::encode(passengers)?;

        // Write the full list next to the target, then swap it in
        let temp = self.temp_path();
        let written = write_synced(&temp, &bytes).and_then(|()| fs::rename(&temp, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&temp);
            return Err(e.into());
        }

        debug!(
            "Wrote {} passengers to {}",
            passengers.len(),
            self.path.display()
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// Passenger list kept in memory.
///
/// Useful for front ends that do not want durability, and for exercising
/// the ledger's handling of storage failures.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    passengers: Option<Vec<Passenger>>,
    fail_loads: bool,
    fail_saves: bool,
    saves: usize,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `passengers`.
    #[must_use]
    pub fn with_passengers(passengers: Vec<Passenger>) -> Self {
        Self {
            passengers: Some(passengers),
            ..Self::default()
        }
    }

    /// Make every subsequent load fail.
    #[must_use]
    pub fn failing_loads(mut self) -> Self {
        self.fail_loads = true;
        self
    }

    /// Make saves fail (or succeed again).
    pub fn set_fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// The last successfully saved passenger list.
    #[must_use]
    pub fn passengers(&self) -> Option<&[Passenger]> {
        self.passengers.as_deref()
    }

    /// Number of successful saves.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl PassengerStore for MemoryStore {
    fn load(&self) -> Result<Option<Vec<Passenger>>> {
        if self.fail_loads {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "corrupt ledger data").into());
        }
        Ok(self.passengers.clone())
    }

    fn save(&mut self, passengers: &[Passenger]) -> Result<()> {
        if self.fail_saves {
            return Err(io::Error::other("storage unavailable").into());
        }
        self.passengers = Some(passengers.to_vec());
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        ":memory:".to_string()
    }
}
