//! Durable backing for the run history.
//!
//! The [`ResultStore`] trait defines how the ordered [`Record`] history
//! is persisted and reloaded. The driver overwrites the full history
//! after every evaluation, so any prefix of a run is always fully
//! recoverable from durable storage.
//!
//! # Available backends
//!
//! | Backend | Description |
//! |---------|-------------|
//! | [`CsvStore`] | One CSV file, one row per record (the default) |
//! | [`MemoryStore`] | In-memory `Vec` behind a read-write lock, for tests |
//!
//! A store must never reorder or deduplicate records: history order is
//! evaluation order, and the best-so-far progress curve depends on it.

mod csv;
mod memory;

pub use csv::CsvStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

use crate::error::Result;
use crate::record::Record;

/// Stores and reloads the ordered run history.
pub trait ResultStore {
    /// Overwrites the store with the full record history.
    ///
    /// This is an idempotent full overwrite, not a delta append: writing
    /// the same records twice leaves the store unchanged. Returns the
    /// location the history was written to.
    ///
    /// # Errors
    ///
    /// Returns [`Storage`](crate::Error::Storage) if the history cannot
    /// be written.
    fn write_all(&self, records: &[Record]) -> Result<PathBuf>;

    /// Reloads the full record history, field-for-field and in the order
    /// it was written.
    ///
    /// A store that has never been written reads back as empty.
    ///
    /// # Errors
    ///
    /// Returns [`Storage`](crate::Error::Storage) if the history cannot
    /// be read or parsed.
    fn read_all(&self) -> Result<Vec<Record>>;
}
