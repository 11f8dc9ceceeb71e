//! In-memory result store.

use std::path::PathBuf;

use parking_lot::RwLock;

use crate::error::Result;
use crate::record::Record;
use crate::store::ResultStore;

/// A result store that keeps the history in memory.
///
/// Useful for tests and for embedding a sweep where no durable artifact
/// is wanted. [`write_all`](ResultStore::write_all) reports a synthetic
/// `<memory>` location.
///
/// # Examples
///
/// ```
/// use paramsweep::store::{MemoryStore, ResultStore};
///
/// let store = MemoryStore::new();
/// store.write_all(&[]).unwrap();
/// assert!(store.read_all().unwrap().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Record>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Returns `true` if no records are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl ResultStore for MemoryStore {
    fn write_all(&self, records: &[Record]) -> Result<PathBuf> {
        *self.records.write() = records.to_vec();
        Ok(PathBuf::from("<memory>"))
    }

    fn read_all(&self) -> Result<Vec<Record>> {
        Ok(self.records.read().clone())
    }
}
