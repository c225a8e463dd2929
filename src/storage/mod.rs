//! Match data backing stores.
//!
//! Every request loads the full record set from a [`MatchStore`]:
//! - [`CsvStore`]: a delimited file on disk, re-read on every load
//! - [`SampleStore`]: freshly generated random matches on every load
//! - [`MemoryStore`]: an in-process table
//!
//! Replacing a store's contents is last-writer-wins. A CSV replace swaps the
//! file in with a rename, so a concurrent load sees either the old table or
//! the new one, never a partial write.

mod csv_store;
mod memory;
mod sample;

pub use csv_store::{parse_matches, write_matches, CsvStore};
pub use memory::MemoryStore;
pub use sample::{generate_matches, SampleStore, SAMPLE_MAPS, SAMPLE_MODES};

use thiserror::Error;

use crate::models::MatchRecord;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Store is read-only: {0}")]
    ReadOnly(String),
}

/// A swappable source of match records.
pub trait MatchStore: Send + Sync {
    /// Load the current record set. A store with no data yields an empty set.
    fn load(&self) -> Result<Vec<MatchRecord>, StorageError>;

    /// Replace the whole record set.
    fn replace(&self, records: &[MatchRecord]) -> Result<(), StorageError>;

    /// Human-readable location of the backing data.
    fn location(&self) -> String;
}
