//! Port traits — the hexagonal boundary between the scoring core and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ScoringService (domain)
//! ```
//!
//! Driven adapters (event sinks, key-value storage, region repositories)
//! implement these traits.  The [`ScoringService`](super::service::ScoringService)
//! consumes them via generics, so the scoring core never touches
//! persistence or presentation directly.

use serde::{Deserialize, Serialize};

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / presentation)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (log, chart feed,
/// notification banner, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Storage port (driven adapter: domain ↔ key-value store)
// ───────────────────────────────────────────────────────────────

/// Namespaced key-value storage.
///
/// Keys are namespaced to prevent collisions between subsystems.  Writes
/// MUST be atomic: a reader never observes a partially written value.
pub trait StoragePort {
    /// Read a value.  Returns the number of bytes written to `buf`.
    fn read(&self, namespace: &str, key: &str, buf: &mut [u8]) -> Result<usize, StorageError>;

    /// Write a value atomically.
    fn write(&mut self, namespace: &str, key: &str, data: &[u8]) -> Result<(), StorageError>;

    /// Delete a key.  Returns `Ok(())` even if the key didn't exist.
    fn delete(&mut self, namespace: &str, key: &str) -> Result<(), StorageError>;

    /// Check whether a key exists without reading it.
    fn exists(&self, namespace: &str, key: &str) -> bool;

    /// Every key currently stored under `namespace`.
    fn keys(&self, namespace: &str) -> Vec<String>;
}

// ───────────────────────────────────────────────────────────────
// Region repository port (driven adapter: admin panel ↔ store)
// ───────────────────────────────────────────────────────────────

/// A monitored location shown on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Owner of region records.  The admin panel adds and deletes locations
/// through this trait; the scoring engine never calls it.
pub trait RegionRepository {
    fn list(&self) -> Result<Vec<Region>, StorageError>;

    fn get(&self, id: &str) -> Result<Option<Region>, StorageError>;

    /// Insert or replace by `id`.
    fn save(&mut self, region: &Region) -> Result<(), StorageError>;

    /// Returns `Ok(false)` if no such region existed.
    fn delete(&mut self, id: &str) -> Result<bool, StorageError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`StoragePort`] and [`RegionRepository`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Requested key does not exist.
    NotFound,
    /// Destination buffer or store is full.
    Full,
    /// Generic I/O error.
    IoError,
    /// Stored bytes failed to decode.
    Corrupted,
    /// Key or record failed validation.
    Invalid(&'static str),
}

impl core::fmt::Display for StorageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "key not found"),
            Self::Full => write!(f, "storage full"),
            Self::IoError => write!(f, "I/O error"),
            Self::Corrupted => write!(f, "stored value corrupted"),
            Self::Invalid(msg) => write!(f, "invalid: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}
