//! In-process match table.

use std::sync::RwLock;

use super::{MatchStore, StorageError};
use crate::models::MatchRecord;

/// Match store holding its table in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<MatchRecord>>,
}

impl MemoryStore {
    pub fn new(records: Vec<MatchRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl MatchStore for MemoryStore {
    fn load(&self) -> Result<Vec<MatchRecord>, StorageError> {
        let records = self.records.read().unwrap_or_else(|e| e.into_inner());
        Ok(records.clone())
    }

    fn replace(&self, records: &[MatchRecord]) -> Result<(), StorageError> {
        let mut current = self.records.write().unwrap_or_else(|e| e.into_inner());
        *current = records.to_vec();
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::generate_matches;

    #[test]
    fn test_memory_store_replace() {
        let mut rng = rand::rng();
        let store = MemoryStore::new(generate_matches(5, &mut rng));
        assert_eq!(store.load().unwrap().len(), 5);

        store.replace(&generate_matches(2, &mut rng)).unwrap();
        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn test_memory_store_default_empty() {
        let store = MemoryStore::default();
        assert!(store.load().unwrap().is_empty());
        assert_eq!(store.location(), "memory");
    }
}
